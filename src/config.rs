//! Probe configuration, built once from parsed CLI arguments.

use std::time::Duration;

use tracing::debug;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_POOL_NAME: &str = "all";

/// Everything one check invocation needs to know. Read-only after construction.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// Hostname or IP address of the appliance.
    pub hostname: String,
    /// Username for HTTP Basic auth. `None` switches to API-key (bearer) auth.
    pub user: Option<String>,
    /// Password or API key, depending on `user`.
    pub secret: String,
    /// Use HTTPS (default) or plain HTTP.
    pub use_tls: bool,
    /// Verify the server TLS certificate (default) or accept any.
    pub verify_cert: bool,
    /// Skip alerts already dismissed in the appliance UI.
    pub ignore_dismissed: bool,
    /// Pool to check for the zpool category: a pool name, or "all" (any case).
    pub pool_name: String,
    /// Request timeout for the single API call.
    pub timeout: Duration,
}

impl ProbeConfig {
    /// Base URL of the v2.0 API, without trailing slash.
    pub fn base_url(&self) -> String {
        let scheme = if self.use_tls { "https" } else { "http" };
        format!("{scheme}://{}/api/v2.0", self.hostname)
    }

    /// Dump the effective configuration at debug level. Secrets are not logged.
    pub fn log_startup(&self) {
        debug!(hostname = %self.hostname, "startup");
        debug!(use_tls = self.use_tls, verify_cert = self.verify_cert, "startup");
        debug!(base_url = %self.base_url(), "startup");
        debug!(pool_name = %self.pool_name, "startup");
        debug!(
            ignore_dismissed = self.ignore_dismissed,
            timeout_secs = self.timeout.as_secs(),
            "startup"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(use_tls: bool) -> ProbeConfig {
        ProbeConfig {
            hostname: "nas.example.com".into(),
            user: None,
            secret: "key".into(),
            use_tls,
            verify_cert: true,
            ignore_dismissed: false,
            pool_name: DEFAULT_POOL_NAME.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    #[test]
    fn test_base_url_https() {
        assert_eq!(config(true).base_url(), "https://nas.example.com/api/v2.0");
    }

    #[test]
    fn test_base_url_http_when_tls_disabled() {
        assert_eq!(config(false).base_url(), "http://nas.example.com/api/v2.0");
    }
}
