//! Client configuration
//!
//! Where the API lives, how often dashboards poll, and which identifiers
//! scope the dashboards when nobody has signed in on this browser yet.

use std::time::Duration;

/// API Gateway stage the front end was deployed against
pub const DEFAULT_API_BASE_URL: &str = "https://lc8bkt7rbc.execute-api.ap-south-1.amazonaws.com/prod";

/// Dashboard refresh cadence
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(30);

pub const DEFAULT_VOLUNTEER_ID: &str = "V001";
pub const DEFAULT_ORGANIZATION_ID: &str = "O100";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub refresh_interval: Duration,
    pub default_volunteer_id: String,
    pub default_organization_id: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
            default_volunteer_id: DEFAULT_VOLUNTEER_ID.to_string(),
            default_organization_id: DEFAULT_ORGANIZATION_ID.to_string(),
        }
    }
}

impl ClientConfig {
    /// Override the base URL; blank overrides are ignored.
    pub fn with_api_base_url(mut self, base_url: Option<&str>) -> Self {
        if let Some(url) = base_url.map(str::trim).filter(|url| !url.is_empty()) {
            self.api_base_url = url.trim_end_matches('/').to_string();
        }
        self
    }

    /// Full URL for an endpoint path such as `/projects`.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.refresh_interval, Duration::from_secs(30));
        assert_eq!(config.default_organization_id, "O100");
        assert_eq!(config.endpoint("/projects"), format!("{}/projects", DEFAULT_API_BASE_URL));
    }

    #[test]
    fn test_base_url_override() {
        let config = ClientConfig::default().with_api_base_url(Some("http://localhost:3000/"));
        assert_eq!(config.endpoint("volunteers"), "http://localhost:3000/volunteers");

        let untouched = ClientConfig::default().with_api_base_url(Some("   "));
        assert_eq!(untouched.api_base_url, DEFAULT_API_BASE_URL);
    }
}
