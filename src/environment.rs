use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Host name fragment that selects the staging backend.
const STAGING_HOST_MARKER: &str = "staging";

/// Represents the different deployment environments the console can monitor.
#[derive(Clone, Default, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Local development backend.
    Local,
    /// Staging backend for pre-production testing.
    Staging,
    /// Production backend.
    #[default]
    Production,
}

impl Environment {
    /// Returns the agent service base URL associated with the environment.
    pub fn api_base_url(&self) -> String {
        match self {
            Environment::Local => "http://localhost:8377".to_string(),
            Environment::Staging => "https://staging.agentd.promptops.dev".to_string(),
            Environment::Production => "https://agentd.promptops.dev".to_string(),
        }
    }

    /// Selects the environment from a machine host name: hosts carrying the
    /// staging marker talk to the staging backend, everything else to
    /// production. Local is only reachable via an explicit override.
    pub fn from_host(host: &str) -> Self {
        if host.to_lowercase().contains(STAGING_HOST_MARKER) {
            Environment::Staging
        } else {
            Environment::Production
        }
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            "staging" => Ok(Environment::Staging),
            "production" => Ok(Environment::Production),
            _ => Err(()),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Staging => write!(f, "Staging"),
            Environment::Production => write!(f, "Production"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.api_base_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Hosts containing the staging marker should select the staging backend.
    fn test_from_host_selects_staging() {
        assert_eq!(
            Environment::from_host("ops-staging-03"),
            Environment::Staging
        );
        assert_eq!(
            Environment::from_host("STAGING.internal"),
            Environment::Staging
        );
    }

    #[test]
    // Any other host should fall through to production.
    fn test_from_host_defaults_to_production() {
        assert_eq!(Environment::from_host("ops-prod-01"), Environment::Production);
        assert_eq!(Environment::from_host(""), Environment::Production);
    }

    #[test]
    fn test_from_str_round_trip() {
        assert_eq!("local".parse::<Environment>(), Ok(Environment::Local));
        assert_eq!("Staging".parse::<Environment>(), Ok(Environment::Staging));
        assert_eq!(
            "PRODUCTION".parse::<Environment>(),
            Ok(Environment::Production)
        );
        assert!("beta".parse::<Environment>().is_err());
    }

    #[test]
    fn test_base_urls_are_fixed() {
        assert!(Environment::Local.api_base_url().starts_with("http://localhost"));
        assert!(
            Environment::Staging
                .api_base_url()
                .contains(STAGING_HOST_MARKER)
        );
        assert!(!Environment::Production.api_base_url().contains("staging"));
    }
}
