//! Agent Service Client
//!
//! A read-only client for the agent service admin endpoints.

use crate::api::AgentApi;
use crate::api::error::ApiError;
use crate::api::models::{OutputPayload, SystemStatus};
use crate::consts::cli_consts;
use crate::environment::Environment;
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;

// User-Agent string with console version
const USER_AGENT: &str = concat!("agent-console/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct AgentClient {
    client: Client,
    environment: Environment,
}

impl AgentClient {
    pub fn new(environment: Environment) -> Self {
        Self {
            client: ClientBuilder::new()
                .connect_timeout(cli_consts::http_connect_timeout())
                .timeout(cli_consts::http_request_timeout())
                .build()
                .expect("Failed to create HTTP client"),
            environment,
        }
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.api_base_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_request<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let url = self.build_url(endpoint);
        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        serde_json::from_slice(&response_bytes).map_err(ApiError::Decode)
    }
}

#[async_trait::async_trait]
impl AgentApi for AgentClient {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    async fn fetch_status(&self) -> Result<SystemStatus, ApiError> {
        self.get_request("admin/status").await
    }

    async fn fetch_logs(&self) -> Result<OutputPayload, ApiError> {
        self.get_request("admin/logs").await
    }

    async fn fetch_service(&self) -> Result<OutputPayload, ApiError> {
        self.get_request("admin/service").await
    }
}
