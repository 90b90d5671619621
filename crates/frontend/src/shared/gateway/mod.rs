//! Remote Data Gateway
//!
//! - transport.rs: request/response types and the `Transport` seam
//! - browser.rs: `gloo-net` implementation with a request timeout
//! - client.rs: `Gateway`: status mapping, envelopes and logging
//! - error.rs: error kinds and the texts shown to the user

mod browser;
mod client;
mod error;
mod transport;

pub use browser::BrowserTransport;
pub use client::Gateway;
pub use error::{GatewayError, Operation};
pub use transport::{HttpRequest, HttpResponse, Method, Transport};

use leptos::prelude::*;

/// Gateway wired to the browser
pub type AppGateway = Gateway<BrowserTransport>;

/// Get the gateway provided by `App`
pub fn use_gateway() -> AppGateway {
    use_context::<AppGateway>().expect("AppGateway not provided in context")
}

#[cfg(test)]
pub mod testing {
    //! In-memory transport for host tests

    use super::{GatewayError, HttpRequest, HttpResponse, Method, Transport};
    use async_trait::async_trait;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Replays queued answers in order and records every request
    #[derive(Debug, Default)]
    pub struct RecordingTransport {
        replies: RefCell<VecDeque<Result<HttpResponse, GatewayError>>>,
        pub requests: RefCell<Vec<HttpRequest>>,
    }

    impl RecordingTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn replying(status: u16, body: &str) -> Self {
            let transport = Self::new();
            transport.push(status, body);
            transport
        }

        pub fn failing(message: &str) -> Self {
            let transport = Self::new();
            transport
                .replies
                .borrow_mut()
                .push_back(Err(GatewayError::Transport(message.to_string())));
            transport
        }

        pub fn push(&self, status: u16, body: &str) {
            self.replies
                .borrow_mut()
                .push_back(Ok(HttpResponse::new(status, body)));
        }

        pub fn calls(&self) -> Vec<(Method, String)> {
            self.requests
                .borrow()
                .iter()
                .map(|r| (r.method, r.path.clone()))
                .collect()
        }

        pub fn last_body(&self) -> Option<serde_json::Value> {
            self.requests.borrow().last().and_then(|r| r.body.clone())
        }
    }

    #[async_trait(?Send)]
    impl Transport for RecordingTransport {
        async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, GatewayError> {
            self.requests.borrow_mut().push(request.clone());
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(GatewayError::Transport("no reply queued".to_string())))
        }
    }
}
