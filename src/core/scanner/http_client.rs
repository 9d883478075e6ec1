// src/core/scanner/http_client.rs

use reqwest::redirect::Policy;
use reqwest::{Client, Response};
use tracing::{debug, error};

use crate::config::ScanConfig;
use crate::core::error::ProbeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Https,
    Http,
}

impl Scheme {
    pub fn as_str(self) -> &'static str {
        match self {
            Scheme::Https => "https",
            Scheme::Http => "http",
        }
    }

    fn default_port(self) -> u16 {
        match self {
            Scheme::Https => 443,
            Scheme::Http => 80,
        }
    }

    /// The port to fetch from for this scheme under `config`.
    pub fn port(self, config: &ScanConfig) -> u16 {
        match self {
            Scheme::Https => config.https_port,
            Scheme::Http => config.http_port,
        }
    }
}

/// Builds the root URL for `host`, omitting the port when it is the scheme default.
pub fn root_url(scheme: Scheme, host: &str, port: u16) -> String {
    let host = if host.contains(':') && !host.starts_with('[') {
        format!("[{host}]")
    } else {
        host.to_string()
    };
    if port == scheme.default_port() {
        format!("{}://{}/", scheme.as_str(), host)
    } else {
        format!("{}://{}:{}/", scheme.as_str(), host, port)
    }
}

/// Builds a client owned by a single probe. Every status code is returned as a
/// response; redirects are followed up to `config.max_redirects`.
pub fn build_client(config: &ScanConfig) -> Result<Client, ProbeError> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.fetch_timeout)
        .redirect(Policy::limited(config.max_redirects))
        .build()
        .map_err(|e| {
            error!(error = %e, "Failed to build HTTP client.");
            ProbeError::Client(e.to_string())
        })
}

/// GETs `url` and returns once the response headers arrive. The body is never read.
pub async fn fetch_root(client: &Client, url: &str) -> Result<Response, ProbeError> {
    debug!(url, "Fetching root path.");
    client
        .get(url)
        .send()
        .await
        .map_err(|e| ProbeError::from_fetch(&e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ports_are_omitted() {
        assert_eq!(root_url(Scheme::Https, "example.com", 443), "https://example.com/");
        assert_eq!(root_url(Scheme::Http, "example.com", 80), "http://example.com/");
    }

    #[test]
    fn custom_ports_are_appended() {
        assert_eq!(root_url(Scheme::Https, "example.com", 8443), "https://example.com:8443/");
        assert_eq!(root_url(Scheme::Http, "127.0.0.1", 443), "http://127.0.0.1:443/");
    }

    #[test]
    fn ipv6_literals_are_bracketed() {
        assert_eq!(root_url(Scheme::Https, "::1", 443), "https://[::1]/");
        assert_eq!(root_url(Scheme::Http, "::1", 8080), "http://[::1]:8080/");
    }

    #[test]
    fn scheme_port_follows_config() {
        let config = ScanConfig { https_port: 8443, http_port: 8080, ..ScanConfig::default() };
        assert_eq!(Scheme::Https.port(&config), 8443);
        assert_eq!(Scheme::Http.port(&config), 8080);
    }
}
