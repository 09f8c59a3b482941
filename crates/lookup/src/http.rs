//! The HTTP seam.
//!
//! Everything in this crate that touches the network goes through
//! [`HttpClient`], a single `GET url -> (status, bytes)` operation. The real
//! implementation wraps `reqwest`; tests use [`MockHttpClient`].

use async_trait::async_trait;
use bookshelf_config::LookupConfig;
use exn::ResultExt;

use crate::error::{ErrorKind, Result};

/// Status and body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}
impl HttpResponse {
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The body, or [`Status`](ErrorKind::Status) for a non-2xx response.
    pub fn into_success_body(self) -> Result<Vec<u8>> {
        exn::ensure!(self.is_success(), ErrorKind::Status(self.status));
        Ok(self.body)
    }
}

#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Performs a GET request.
    ///
    /// A response with any status is `Ok`; only transport failures are
    /// errors.
    async fn get(&self, url: &str) -> Result<HttpResponse>;
}

/// [`HttpClient`] backed by a shared `reqwest` connection pool.
#[derive(Clone)]
pub struct ReqwestClient {
    client: reqwest::Client,
}
impl ReqwestClient {
    pub fn new(config: &LookupConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.http_timeout())
            .user_agent(config.user_agent.as_str())
            .build()
            .or_raise(|| ErrorKind::ClientSetup)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    #[tracing::instrument(level = "debug", skip(self))]
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        let response = self.client.get(url).send().await.or_raise(|| ErrorKind::Network(url.to_string()))?;
        let status = response.status().as_u16();
        let body = response.bytes().await.or_raise(|| ErrorKind::Network(url.to_string()))?;
        tracing::debug!(status, bytes = body.len(), "response received");
        Ok(HttpResponse {
            status,
            body: body.to_vec(),
        })
    }
}

#[cfg(any(test, feature = "mock"))]
pub use self::mock::MockHttpClient;

#[cfg(any(test, feature = "mock"))]
mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    enum Route {
        Respond(HttpResponse),
        Fail,
    }

    /// Canned-response HTTP client for testing.
    ///
    /// Unrouted URLs answer `404` with an empty body. Every request is
    /// recorded so tests can assert on how many round trips happened.
    #[derive(Default)]
    pub struct MockHttpClient {
        routes: Mutex<HashMap<String, Route>>,
        requests: Mutex<Vec<String>>,
    }

    impl MockHttpClient {
        pub fn new() -> Self {
            Self::default()
        }

        /// Answer `url` with status 200 and `body`.
        pub fn with_ok(self, url: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
            self.route(url, Route::Respond(HttpResponse::ok(body)))
        }

        /// Answer `url` with an arbitrary status and empty body.
        pub fn with_status(self, url: impl Into<String>, status: u16) -> Self {
            self.route(url, Route::Respond(HttpResponse { status, body: Vec::new() }))
        }

        /// Fail `url` at the transport level.
        pub fn with_failure(self, url: impl Into<String>) -> Self {
            self.route(url, Route::Fail)
        }

        fn route(self, url: impl Into<String>, route: Route) -> Self {
            self.routes.lock().unwrap_or_else(|poisoned| poisoned.into_inner()).insert(url.into(), route);
            self
        }

        /// Every URL requested so far, in order.
        pub fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap_or_else(|poisoned| poisoned.into_inner()).clone()
        }

        pub fn request_count(&self) -> usize {
            self.requests.lock().unwrap_or_else(|poisoned| poisoned.into_inner()).len()
        }
    }

    #[async_trait]
    impl HttpClient for MockHttpClient {
        async fn get(&self, url: &str) -> Result<HttpResponse> {
            self.requests.lock().unwrap_or_else(|poisoned| poisoned.into_inner()).push(url.to_string());
            match self.routes.lock().unwrap_or_else(|poisoned| poisoned.into_inner()).get(url) {
                Some(Route::Respond(response)) => Ok(response.clone()),
                Some(Route::Fail) => exn::bail!(ErrorKind::Network(url.to_string())),
                None => Ok(HttpResponse {
                    status: 404,
                    body: Vec::new(),
                }),
            }
        }
    }
}
