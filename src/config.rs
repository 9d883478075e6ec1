// src/config.rs

use std::time::Duration;

/// Ports probed on every scan. Closed is the desired state for all of them.
pub const SCAN_PORTS: [u16; 6] = [21, 22, 25, 80, 443, 3306];
pub const PORT_TIMEOUT: Duration = Duration::from_millis(2000);
pub const FETCH_TIMEOUT: Duration = Duration::from_millis(8000);
pub const MAX_REDIRECTS: usize = 5;
pub const HTTPS_PORT: u16 = 443;
pub const HTTP_PORT: u16 = 80;
pub const USER_AGENT: &str = concat!("PostureRS/", env!("CARGO_PKG_VERSION"));

/// Parameters for a single scan. Built per invocation and borrowed by every probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    pub ports: Vec<u16>,
    pub port_timeout: Duration,
    pub fetch_timeout: Duration,
    pub max_redirects: usize,
    /// Port used for the secure root fetch.
    pub https_port: u16,
    /// Port used for the insecure fallback fetch.
    pub http_port: u16,
    pub user_agent: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            ports: SCAN_PORTS.to_vec(),
            port_timeout: PORT_TIMEOUT,
            fetch_timeout: FETCH_TIMEOUT,
            max_redirects: MAX_REDIRECTS,
            https_port: HTTPS_PORT,
            http_port: HTTP_PORT,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_constants() {
        let config = ScanConfig::default();
        assert_eq!(config.ports, vec![21, 22, 25, 80, 443, 3306]);
        assert_eq!(config.port_timeout, Duration::from_millis(2000));
        assert_eq!(config.fetch_timeout, Duration::from_millis(8000));
        assert_eq!(config.max_redirects, 5);
        assert_eq!((config.https_port, config.http_port), (443, 80));
        assert!(config.user_agent.starts_with("PostureRS/"));
    }
}
