use contracts::domain::common::{ApiEnvelope, ProblemDetails};
use contracts::shared::validation::FieldErrors;
use serde::de::DeserializeOwned;

use super::transport::{HttpRequest, HttpResponse, Transport};
use super::GatewayError;

/// Typed front door to the backend
///
/// Logs every exchange, maps statuses to [`GatewayError`] and collapses both
/// response envelopes into the bare payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gateway<T> {
    transport: T,
}

impl<T: Transport> Gateway<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send and decode the payload. `Ok(None)` means a 2xx answer with an
    /// empty body, `null`, or a successful wrapper without `data`.
    pub async fn fetch<R: DeserializeOwned>(
        &self,
        request: HttpRequest,
    ) -> Result<Option<R>, GatewayError> {
        let response = self.exchange(&request).await?;
        decode_payload(&response).map_err(|e| log_failure(&request, e))
    }

    /// Send and ignore the payload, still honouring a failed wrapper
    pub async fn execute(&self, request: HttpRequest) -> Result<(), GatewayError> {
        let response = self.exchange(&request).await?;
        match serde_json::from_str::<Option<ApiEnvelope<serde_json::Value>>>(&response.body) {
            Ok(Some(envelope)) => envelope
                .into_payload()
                .map(|_| ())
                .map_err(|e| {
                    log_failure(
                        &request,
                        GatewayError::Server {
                            status: Some(response.status),
                            message: e.message,
                        },
                    )
                }),
            // Plain text or empty body: the status already said yes
            _ => Ok(()),
        }
    }

    async fn exchange(&self, request: &HttpRequest) -> Result<HttpResponse, GatewayError> {
        log::debug!("Request: {} {}", request.method, request.path);
        let response = self
            .transport
            .send(request)
            .await
            .map_err(|e| log_failure(request, e))?;
        log::debug!(
            "Response: {} {} -> {}",
            request.method,
            request.path,
            response.status
        );

        if response.ok() {
            Ok(response)
        } else {
            Err(log_failure(request, error_from_status(&response)))
        }
    }
}

fn log_failure(request: &HttpRequest, error: GatewayError) -> GatewayError {
    log::error!("Error: {} {}: {}", request.method, request.path, error);
    error
}

fn decode_payload<R: DeserializeOwned>(response: &HttpResponse) -> Result<Option<R>, GatewayError> {
    if response.body.trim().is_empty() {
        return Ok(None);
    }

    let envelope: Option<ApiEnvelope<R>> =
        serde_json::from_str(&response.body).map_err(|e| GatewayError::Server {
            status: Some(response.status),
            message: Some(format!("unexpected response: {}", e)),
        })?;

    match envelope {
        None => Ok(None),
        Some(envelope) => envelope.into_payload().map_err(|e| GatewayError::Server {
            status: Some(response.status),
            message: e.message,
        }),
    }
}

/// Map a non-2xx answer to its error kind
pub(crate) fn error_from_status(response: &HttpResponse) -> GatewayError {
    if response.status == 404 {
        return GatewayError::NotFound;
    }

    let problem = serde_json::from_str::<ProblemDetails>(&response.body).ok();
    let message = match &problem {
        Some(problem) => problem.summary(),
        None => plain_message(&response.body),
    };

    match response.status {
        400 | 422 => {
            let mut fields = FieldErrors::new();
            if let Some(problem) = &problem {
                for (field, text) in problem.field_messages() {
                    fields.insert(field, text);
                }
            }
            GatewayError::Validation { message, fields }
        }
        status => GatewayError::Server {
            status: Some(status),
            message,
        },
    }
}

/// A JSON string body (`"Cafe not found"`) or raw text
fn plain_message(body: &str) -> Option<String> {
    let text = serde_json::from_str::<String>(body).unwrap_or_else(|_| body.to_string());
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
