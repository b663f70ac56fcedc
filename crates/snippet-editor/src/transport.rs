//! Sending API requests.
//!
//! The form talks to the backend only through [`Transport`], so tests and
//! embedders can substitute their own implementation for [`HttpTransport`].

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use reqwest::header::{HeaderName, HeaderValue};
use reqwest::Client;
use tracing::debug;

use crate::error::RequestError;
use crate::http::{ApiRequest, ApiResponse, Method};

/// A boxed future for async transport operations.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Delivers API requests to the snippet backend.
///
/// # Example
///
/// ```ignore
/// struct Offline;
///
/// impl Transport for Offline {
///     fn send<'a>(&'a self, _req: ApiRequest) -> BoxFuture<'a, Result<ApiResponse, RequestError>> {
///         Box::pin(async move { Err(RequestError::Transport("offline".into())) })
///     }
/// }
/// ```
pub trait Transport: Send + Sync {
    /// Sends the request and resolves once a response has arrived.
    ///
    /// Any response, whatever its status, is `Ok`.
    fn send<'a>(&'a self, request: ApiRequest) -> BoxFuture<'a, Result<ApiResponse, RequestError>>;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn send<'a>(&'a self, request: ApiRequest) -> BoxFuture<'a, Result<ApiResponse, RequestError>> {
        (**self).send(request)
    }
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send<'a>(&'a self, request: ApiRequest) -> BoxFuture<'a, Result<ApiResponse, RequestError>> {
        (**self).send(request)
    }
}

/// [`Transport`] over HTTP, resolving request paths against a base URL.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    /// Creates a transport with a default client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Creates a transport around an existing client.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Returns the base URL requests are resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the absolute URL for a request path.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn to_reqwest(method: Method) -> reqwest::Method {
    match method {
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
    }
}

impl Transport for HttpTransport {
    fn send<'a>(&'a self, request: ApiRequest) -> BoxFuture<'a, Result<ApiResponse, RequestError>> {
        Box::pin(async move {
            let url = self.url_for(&request.path);
            debug!(method = %request.method, %url, "sending snippet request");

            let mut builder = self.client.request(to_reqwest(request.method), &url);
            for (key, value) in &request.headers {
                let name = HeaderName::from_bytes(key.as_bytes())
                    .map_err(|e| RequestError::Transport(e.to_string()))?;
                let value = HeaderValue::from_str(value)
                    .map_err(|e| RequestError::Transport(e.to_string()))?;
                builder = builder.header(name, value);
            }

            let response = builder
                .body(request.body)
                .send()
                .await
                .map_err(|e| RequestError::Transport(e.to_string()))?;

            Ok(ApiResponse::new(response.status().as_u16()))
        })
    }
}
