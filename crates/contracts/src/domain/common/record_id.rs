use serde::{Deserialize, Deserializer};

/// Deserialize an opaque identifier that the backend may send either as a
/// JSON string (GUID) or as a bare number.
pub fn opaque_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(deserialize_with = "opaque_id")]
        id: String,
    }

    #[test]
    fn accepts_string_and_number_ids() {
        let text: Holder = serde_json::from_str(r#"{"id":"c0ffee"}"#).unwrap();
        assert_eq!(text.id, "c0ffee");

        let number: Holder = serde_json::from_str(r#"{"id":42}"#).unwrap();
        assert_eq!(number.id, "42");
    }

    #[test]
    fn rejects_other_shapes() {
        assert!(serde_json::from_str::<Holder>(r#"{"id":true}"#).is_err());
    }
}
