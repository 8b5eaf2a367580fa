//! Client configuration: backend origin and CSRF cookie/header names.

use crate::endpoint::{endpoint_path, Endpoint};

pub const DEFAULT_API_ORIGIN: &str = "http://localhost:8000";
pub const CSRF_COOKIE: &str = "csrftoken";
pub const CSRF_HEADER: &str = "X-CSRFToken";

#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    pub origin: String,
    pub csrf_cookie: String,
    pub csrf_header: String,
    /// Collection hit by the priming GET that makes the backend set the CSRF cookie.
    pub priming_endpoint: Endpoint,
}

impl Default for ApiConfig {
    fn default() -> Self {
        // overridable at build time: CMMS_API_ORIGIN=https://cmms.example trunk build
        Self::with_origin(option_env!("CMMS_API_ORIGIN").unwrap_or(DEFAULT_API_ORIGIN))
    }
}

impl ApiConfig {
    pub fn with_origin(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            csrf_cookie: CSRF_COOKIE.to_string(),
            csrf_header: CSRF_HEADER.to_string(),
            priming_endpoint: Endpoint::Equipment,
        }
    }

    pub fn url(&self, endpoint: Endpoint, id: Option<i64>) -> String {
        format!(
            "{}{}",
            self.origin.trim_end_matches('/'),
            endpoint_path(endpoint, id)
        )
    }

    pub fn priming_url(&self) -> String {
        self.url(self.priming_endpoint, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_backend() {
        let cfg = ApiConfig::with_origin(DEFAULT_API_ORIGIN);
        assert_eq!(cfg.csrf_cookie, "csrftoken");
        assert_eq!(cfg.csrf_header, "X-CSRFToken");
        assert_eq!(cfg.priming_url(), "http://localhost:8000/api/equipment/");
    }

    #[test]
    fn default_builds_on_with_origin() {
        let cfg = ApiConfig::default();
        assert_eq!(ApiConfig::with_origin(cfg.origin.clone()), cfg);
        assert_eq!(cfg.priming_endpoint, Endpoint::Equipment);
    }

    #[test]
    fn trailing_slash_on_origin_is_ignored() {
        let cfg = ApiConfig::with_origin("http://api.local:9000/");
        assert_eq!(cfg.url(Endpoint::Parts, Some(3)), "http://api.local:9000/api/parts/3/");
        assert_eq!(cfg.url(Endpoint::Parts, None), "http://api.local:9000/api/parts/");
    }
}
