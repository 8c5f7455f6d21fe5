//! reqwest-backed transport.

use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use fccloud_core::{HttpResponse, Result, Transport, TransportError};
use reqwest::header::SET_COOKIE;
use reqwest::redirect::Policy;
use tracing::{debug, instrument, trace};

use crate::config::ClientConfig;

/// Cookie the server uses to hand out its anti-forgery token.
pub const XSRF_COOKIE: &str = "X-XSRF-TOKEN";

/// Header the token is echoed back in.
pub const XSRF_HEADER: &str = "X-XSRF-TOKEN";

/// HTTP transport over a cookie-keeping [`reqwest::Client`].
///
/// Once the server has set an `X-XSRF-TOKEN` cookie, every subsequent request
/// carries it back as a header together with `X-Requested-With`.
#[derive(Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    xsrf_token: RwLock<Option<String>>,
}

impl ReqwestTransport {
    /// Build a transport from `config`.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .redirect(Policy::limited(config.max_redirects))
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .map_err(transport_error)?;

        Ok(Self {
            client,
            xsrf_token: RwLock::new(None),
        })
    }

    /// The anti-forgery token captured so far, if any.
    pub fn xsrf_token(&self) -> Option<String> {
        self.xsrf_token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn with_session_headers(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.xsrf_token() {
            Some(token) => request
                .header("X-Requested-With", "XMLHttpRequest")
                .header(XSRF_HEADER, token),
            None => request,
        }
    }

    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<HttpResponse> {
        let response = self
            .with_session_headers(request)
            .send()
            .await
            .map_err(transport_error)?;

        self.capture_xsrf_token(&response);

        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport_error)?;
        trace!(status, bytes = body.len(), "response");

        Ok(HttpResponse::new(status, body))
    }

    fn capture_xsrf_token(&self, response: &reqwest::Response) {
        let token = response
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .filter_map(|cookie| cookie_value(cookie, XSRF_COOKIE))
            .last();

        if let Some(token) = token {
            debug!("captured anti-forgery token");
            *self
                .xsrf_token
                .write()
                .unwrap_or_else(PoisonError::into_inner) = Some(token.to_string());
        }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    #[instrument(skip(self))]
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        debug!("GET");
        self.execute(self.client.get(url)).await
    }

    #[instrument(skip(self, form), fields(params = form.len()))]
    async fn post(&self, url: &str, form: &[(String, String)]) -> Result<HttpResponse> {
        debug!("POST");
        self.execute(self.client.post(url).form(form)).await
    }

    /// Drops the captured XSRF token. The cookie jar is left alone, so the
    /// session cookie is only invalidated by the server (see `lock_session`).
    fn clear_session(&self) {
        *self
            .xsrf_token
            .write()
            .unwrap_or_else(PoisonError::into_inner) = None;
    }
}

/// Value of cookie `name` in one `Set-Cookie` header.
fn cookie_value<'a>(set_cookie: &'a str, name: &str) -> Option<&'a str> {
    let pair = set_cookie.split(';').next()?;
    let (key, value) = pair.split_once('=')?;
    (key.trim() == name).then(|| value.trim())
}

fn transport_error(err: reqwest::Error) -> fccloud_core::Error {
    let err = if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    };
    err.into()
}
