use crate::api::error::ApiError;
use crate::api::models::{OutputPayload, SystemStatus};
use crate::environment::Environment;

pub(crate) mod client;
pub use client::AgentClient;
pub mod error;
pub mod models;

#[cfg(test)]
use mockall::{automock, predicate::*};

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait AgentApi: Send + Sync {
    fn environment(&self) -> &Environment;

    /// Fetch the aggregate status snapshot from `/admin/status`.
    async fn fetch_status(&self) -> Result<SystemStatus, ApiError>;

    /// Fetch the recent log tail from `/admin/logs`.
    async fn fetch_logs(&self) -> Result<OutputPayload, ApiError>;

    /// Fetch the service status report from `/admin/service`.
    async fn fetch_service(&self) -> Result<OutputPayload, ApiError>;
}
