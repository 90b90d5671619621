//! Response envelopes
//!
//! Different endpoints of the backend answer in two shapes: the bare payload
//! (`[...]`, `{...}`, `true`) or a wrapper `{ data, success, message }`.
//! Both are modelled by [`ApiEnvelope`] and collapsed into the bare payload
//! before anything above the gateway sees them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiEnvelope<T> {
    /// `{ "data": ..., "success": bool, "message": "..." }`
    Wrapped {
        data: Option<T>,
        success: bool,
        #[serde(default)]
        message: Option<String>,
    },
    /// The payload itself
    Bare(T),
}

/// The wrapper reported `success: false`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .message.as_deref().unwrap_or("request was not successful"))]
pub struct EnvelopeError {
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Collapse into the bare payload.
    ///
    /// `Ok(None)` means the wrapper was successful but carried no data.
    pub fn into_payload(self) -> Result<Option<T>, EnvelopeError> {
        match self {
            ApiEnvelope::Bare(payload) => Ok(Some(payload)),
            ApiEnvelope::Wrapped {
                data,
                success: true,
                ..
            } => Ok(data),
            ApiEnvelope::Wrapped {
                success: false,
                message,
                ..
            } => Err(EnvelopeError {
                message: message.filter(|m| !m.trim().is_empty()),
            }),
        }
    }
}

/// ASP.NET-style problem body returned with 4xx/5xx statuses
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProblemDetails {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: BTreeMap<String, Vec<String>>,
}

impl ProblemDetails {
    /// Best human-readable summary carried by the body
    pub fn summary(&self) -> Option<String> {
        self.message
            .clone()
            .or_else(|| self.title.clone())
            .filter(|m| !m.trim().is_empty())
    }

    /// Field name → first message, with the field name lower-camel-cased so
    /// it lines up with the form's keys (`Name` → `name`, `EmailAddress` →
    /// `emailAddress`).
    pub fn field_messages(&self) -> Vec<(String, String)> {
        self.errors
            .iter()
            .filter_map(|(field, messages)| {
                messages
                    .first()
                    .map(|message| (lower_camel(field), message.clone()))
            })
            .collect()
    }
}

fn lower_camel(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct Item {
        id: String,
    }

    #[test]
    fn bare_collection_is_payload() {
        let env: ApiEnvelope<Vec<Item>> = serde_json::from_str(r#"[{"id":"1"},{"id":"2"}]"#).unwrap();
        let items = env.into_payload().unwrap().unwrap();
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn empty_bare_collection_is_payload() {
        let env: ApiEnvelope<Vec<Item>> = serde_json::from_str("[]").unwrap();
        assert_eq!(env.into_payload().unwrap(), Some(vec![]));
    }

    #[test]
    fn wrapped_record_is_unwrapped() {
        let env: ApiEnvelope<Item> =
            serde_json::from_str(r#"{"data":{"id":"7"},"success":true,"message":"ok"}"#).unwrap();
        assert_eq!(env.into_payload().unwrap(), Some(Item { id: "7".into() }));
    }

    #[test]
    fn wrapped_failure_carries_message() {
        let env: ApiEnvelope<Item> =
            serde_json::from_str(r#"{"data":null,"success":false,"message":"Cafe is closed"}"#).unwrap();
        let err = env.into_payload().unwrap_err();
        assert_eq!(err.message.as_deref(), Some("Cafe is closed"));
        assert_eq!(err.to_string(), "Cafe is closed");
    }

    #[test]
    fn wrapped_failure_without_message_has_fallback_text() {
        let env: ApiEnvelope<Item> = serde_json::from_str(r#"{"success":false,"message":"  "}"#).unwrap();
        let err = env.into_payload().unwrap_err();
        assert_eq!(err.message, None);
        assert_eq!(err.to_string(), "request was not successful");
    }

    #[test]
    fn bare_boolean_is_payload() {
        let env: ApiEnvelope<bool> = serde_json::from_str("true").unwrap();
        assert_eq!(env.into_payload().unwrap(), Some(true));
    }

    #[test]
    fn problem_details_fields_are_camel_cased() {
        let body = r#"{"title":"One or more validation errors occurred.","errors":{"Name":["too short"],"EmailAddress":["bad","worse"]}}"#;
        let problem: ProblemDetails = serde_json::from_str(body).unwrap();
        assert_eq!(
            problem.summary().as_deref(),
            Some("One or more validation errors occurred.")
        );
        assert_eq!(
            problem.field_messages(),
            vec![
                ("emailAddress".to_string(), "bad".to_string()),
                ("name".to_string(), "too short".to_string()),
            ]
        );
    }
}
