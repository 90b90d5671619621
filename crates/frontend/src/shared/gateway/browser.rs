//! `gloo-net` transport used in the browser build

use async_trait::async_trait;
use futures::future::{select, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;

use super::transport::{HttpRequest, HttpResponse, Method, Transport};
use super::GatewayError;
use crate::shared::api_utils::api_url;
use crate::shared::config::ApiConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserTransport {
    config: ApiConfig,
}

impl BrowserTransport {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, GatewayError> {
        let url = api_url(&self.config.base_url, &request.path);

        let builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        }
        .header("Content-Type", "application/json");

        let prepared = match &request.body {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(|e| GatewayError::Transport(format!("Failed to build request: {}", e)))?;

        let exchange = async move {
            let response = prepared
                .send()
                .await
                .map_err(|e| GatewayError::Transport(format!("Failed to send request: {}", e)))?;
            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| GatewayError::Transport(format!("Failed to read response: {}", e)))?;
            Ok(HttpResponse { status, body })
        };

        let timeout = TimeoutFuture::new(self.config.timeout_ms);
        match select(Box::pin(exchange), Box::pin(timeout)).await {
            Either::Left((result, _)) => result,
            Either::Right(_) => Err(GatewayError::Transport(format!(
                "Request timed out after {} ms",
                self.config.timeout_ms
            ))),
        }
    }
}
