use async_trait::async_trait;
use serde::Serialize;
use std::fmt;

use super::GatewayError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        })
    }
}

/// Outbound request; `path` is relative to the configured base URL
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<serde_json::Value>,
}

impl HttpRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            body: None,
        }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self {
            method: Method::Delete,
            path: path.into(),
            body: None,
        }
    }

    pub fn post<B: Serialize>(path: impl Into<String>, body: &B) -> Result<Self, GatewayError> {
        Ok(Self {
            method: Method::Post,
            path: path.into(),
            body: Some(to_json(body)?),
        })
    }

    pub fn put<B: Serialize>(path: impl Into<String>, body: &B) -> Result<Self, GatewayError> {
        Ok(Self {
            method: Method::Put,
            path: path.into(),
            body: Some(to_json(body)?),
        })
    }
}

fn to_json<B: Serialize>(body: &B) -> Result<serde_json::Value, GatewayError> {
    serde_json::to_value(body)
        .map_err(|e| GatewayError::Transport(format!("Failed to serialize request: {}", e)))
}

/// Raw answer: status plus the undecoded body text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// One HTTP exchange. Implementations only ever fail with
/// [`GatewayError::Transport`]; status interpretation is the gateway's job.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, GatewayError>;
}
