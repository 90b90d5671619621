use serde::{Deserialize, Serialize};

use crate::domain::common::{opaque_id, Record};
use crate::shared::validation::{validate_schema, FieldErrors, FieldRule, ValidationRules};

/// Logo value sent until a real upload pipeline exists
pub const PLACEHOLDER_LOGO: &str = "string.png";

// ============================================================================
// Record
// ============================================================================

/// Кафе, как его возвращает backend
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cafe {
    #[serde(deserialize_with = "opaque_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub location: String,
    /// Computed by the server; never sent back
    #[serde(default)]
    pub employee_count: i64,
}

impl Record for Cafe {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn record_index() -> &'static str {
        "a001"
    }

    fn element_name() -> &'static str {
        "Café"
    }

    fn list_name() -> &'static str {
        "Cafés"
    }

    fn message_noun() -> &'static str {
        "cafe"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Form keys
pub mod fields {
    pub const NAME: &str = "name";
    pub const DESCRIPTION: &str = "description";
    pub const LOCATION: &str = "location";
}

/// Правила формы кафе
pub const CAFE_SCHEMA: &[FieldRule] = &[
    FieldRule::new(
        fields::NAME,
        "Name",
        ValidationRules::required().min_length(6).max_length(10),
    ),
    FieldRule::new(
        fields::DESCRIPTION,
        "Description",
        ValidationRules::required().max_length(256),
    ),
    FieldRule::new(fields::LOCATION, "Location", ValidationRules::required()),
];

/// DTO для создания кафе (без `id` и `employeeCount`)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CafeDto {
    pub name: String,
    pub description: String,
    pub location: String,
    pub logo: String,
}

impl CafeDto {
    /// Payload from raw form input; values are trimmed before validation
    pub fn new(name: String, description: String, location: String) -> Self {
        Self {
            name: name.trim().to_string(),
            description: description.trim().to_string(),
            location: location.trim().to_string(),
            logo: PLACEHOLDER_LOGO.to_string(),
        }
    }

    /// Seed a form from an existing record
    pub fn from_cafe(cafe: &Cafe) -> Self {
        Self {
            name: cafe.name.clone(),
            description: cafe.description.clone(),
            location: cafe.location.clone(),
            logo: PLACEHOLDER_LOGO.to_string(),
        }
    }

    pub fn value_of(&self, field: &str) -> &str {
        match field {
            fields::NAME => &self.name,
            fields::DESCRIPTION => &self.description,
            fields::LOCATION => &self.location,
            _ => "",
        }
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        let errors = validate_schema(CAFE_SCHEMA, |field| self.value_of(field));
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Full replacement body for `PUT /cafes/cafe?id={id}`
    pub fn into_update(self, id: impl Into<String>) -> UpdateCafeCommand {
        UpdateCafeCommand {
            id: id.into(),
            name: self.name,
            description: self.description,
            location: self.location,
            logo: self.logo,
        }
    }
}

/// Команда обновления кафе: полный набор редактируемых полей
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCafeCommand {
    pub id: String,
    pub name: String,
    pub description: String,
    pub location: String,
    pub logo: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::ApiEnvelope;

    #[test]
    fn deserializes_backend_record() {
        let json = r#"{"id":"3f2a","name":"Central","description":"Downtown spot","logo":"x.png","location":"Main St","employeeCount":4}"#;
        let cafe: Cafe = serde_json::from_str(json).unwrap();
        assert_eq!(cafe.id, "3f2a");
        assert_eq!(cafe.employee_count, 4);
        assert_eq!(cafe.display_name(), "Central");
    }

    #[test]
    fn missing_optional_fields_default() {
        let cafe: Cafe = serde_json::from_str(r#"{"id":9,"name":"Corner"}"#).unwrap();
        assert_eq!(cafe.id, "9");
        assert_eq!(cafe.employee_count, 0);
        assert!(cafe.logo.is_empty());
    }

    #[test]
    fn create_payload_has_placeholder_logo_and_no_server_fields() {
        let dto = CafeDto::new("Central".into(), "Downtown spot".into(), "Main St".into());
        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "Central",
                "description": "Downtown spot",
                "location": "Main St",
                "logo": PLACEHOLDER_LOGO,
            })
        );
    }

    #[test]
    fn payload_values_are_trimmed() {
        let dto = CafeDto::new("  Central ".into(), " Downtown spot\n".into(), "\tMain St".into());
        assert_eq!(dto.name, "Central");
        assert_eq!(dto.description, "Downtown spot");
        assert_eq!(dto.location, "Main St");
        assert!(dto.validate().is_ok());

        // length bounds apply to the trimmed name
        let dto = CafeDto::new("  Cafe  ".into(), "desc".into(), "loc".into());
        assert_eq!(
            dto.validate().unwrap_err().get(fields::NAME),
            Some("Name must be at least 6 characters")
        );
    }

    #[test]
    fn wrapped_record_decodes() {
        let body = r#"{"data":{"id":5,"name":"Central","description":"Downtown spot","logo":"string.png","location":"Main St","employeeCount":2},"success":true,"message":null}"#;
        let envelope: ApiEnvelope<Cafe> = serde_json::from_str(body).unwrap();
        let cafe = envelope.into_payload().unwrap().unwrap();
        assert_eq!(cafe.id, "5");
        assert_eq!(cafe.employee_count, 2);

        let bare: ApiEnvelope<Cafe> = serde_json::from_str(r#"{"id":"a1","name":"Corner"}"#).unwrap();
        assert_eq!(bare.into_payload().unwrap().map(|c| c.name), Some("Corner".to_string()));

        let empty: ApiEnvelope<Cafe> = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert_eq!(empty.into_payload().unwrap(), None);
    }

    #[test]
    fn update_command_carries_id() {
        let cmd = CafeDto::new("Central".into(), "d".into(), "l".into()).into_update("12");
        let value = serde_json::to_value(&cmd).unwrap();
        assert_eq!(value["id"], "12");
        assert_eq!(value["logo"], PLACEHOLDER_LOGO);
    }

    #[test]
    fn name_length_bounds() {
        for name in ["", "Cafe", "Short", "Much too long"] {
            let dto = CafeDto::new(name.into(), "desc".into(), "loc".into());
            let errors = dto.validate().unwrap_err();
            assert!(errors.get(fields::NAME).is_some(), "{name:?} should fail");
        }
        for name in ["Central", "Sixsix", "Tententen!"] {
            let dto = CafeDto::new(name.into(), "desc".into(), "loc".into());
            assert!(dto.validate().is_ok(), "{name:?} should pass");
        }
    }

    #[test]
    fn description_limit() {
        let dto = CafeDto::new("Central".into(), "x".repeat(257), "loc".into());
        let errors = dto.validate().unwrap_err();
        assert_eq!(
            errors.get(fields::DESCRIPTION),
            Some("Description must be at most 256 characters")
        );
        let dto = CafeDto::new("Central".into(), "x".repeat(256), "loc".into());
        assert!(dto.validate().is_ok());
    }
}
