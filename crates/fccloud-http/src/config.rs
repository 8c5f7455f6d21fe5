//! Client configuration.

use std::time::Duration;

use fccloud_core::ServerUrl;

/// Default whole-request timeout. Large transfers on slow links are normal.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1200);

/// Default TCP/TLS connect timeout.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default redirect limit.
pub const DEFAULT_MAX_REDIRECTS: usize = 4;

/// Settings for [`ReqwestTransport`](crate::ReqwestTransport) and the API
/// wrappers built on it.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the FileCloud server.
    pub server_url: ServerUrl,

    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub max_redirects: usize,
    pub user_agent: String,

    /// Accept self-signed or otherwise invalid certificates.
    ///
    /// Many on-premises servers run with self-signed certificates, but this
    /// must be opted into.
    pub accept_invalid_certs: bool,
}

impl ClientConfig {
    /// Configuration with defaults for everything but the server.
    pub fn new(server_url: ServerUrl) -> Self {
        Self {
            server_url,
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            max_redirects: DEFAULT_MAX_REDIRECTS,
            user_agent: concat!("fccloud/", env!("CARGO_PKG_VERSION")).to_string(),
            accept_invalid_certs: false,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_max_redirects(mut self, max_redirects: usize) -> Self {
        self.max_redirects = max_redirects;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }
}
