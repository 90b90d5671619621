use contracts::shared::validation::FieldErrors;
use thiserror::Error;

/// Failure of a gateway call, as surfaced to controllers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// Network failure, timeout, or a request that could not be built
    #[error("transport error: {0}")]
    Transport(String),

    /// Non-2xx status or a wrapper with `success: false`
    #[error("server error: {}", .message.as_deref().unwrap_or("no message"))]
    Server {
        status: Option<u16>,
        message: Option<String>,
    },

    /// The backend has no such record
    #[error("not found")]
    NotFound,

    /// The backend rejected the payload (400-class)
    #[error("validation failed: {}", .message.as_deref().unwrap_or("invalid data"))]
    Validation {
        message: Option<String>,
        fields: FieldErrors,
    },
}

/// What the user was doing when a call failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Load,
    Create,
    Update,
    Delete,
}

impl Operation {
    fn verb(&self) -> &'static str {
        match self {
            Operation::List => "load",
            Operation::Load => "fetch",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }

    fn object(&self, noun: &str) -> String {
        match self {
            Operation::List => format!("{} list", noun),
            Operation::Load => format!("{} details", noun),
            _ => noun.to_string(),
        }
    }
}

impl GatewayError {
    /// 2xx answer that should have carried a payload but did not
    pub fn missing_payload() -> Self {
        GatewayError::Server {
            status: None,
            message: Some("response carried no data".to_string()),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, GatewayError::NotFound)
    }

    /// Page-level text for the UI, e.g. "Failed to update cafe: name taken"
    pub fn user_message(&self, operation: Operation, noun: &str) -> String {
        match self {
            GatewayError::Transport(_) => "No response from server".to_string(),
            GatewayError::NotFound => format!("{} not found", capitalize(noun)),
            GatewayError::Validation { .. } => format!("Invalid {} data", noun),
            GatewayError::Server {
                message: Some(message),
                ..
            } => format!(
                "Failed to {} {}: {}",
                operation.verb(),
                operation.object(noun),
                message
            ),
            GatewayError::Server { message: None, .. } => {
                format!("Failed to {} {}", operation.verb(), operation.object(noun))
            }
        }
    }

    /// Field-level messages the backend attached, if any
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            GatewayError::Validation { fields, .. } if !fields.is_empty() => Some(fields),
            _ => None,
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
