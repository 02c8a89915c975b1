use serde::{Deserialize, Serialize};

/// Discriminates how a configured field is validated by the generation
/// service: free-text fields carry their own length/character rules, while
/// database fields take their rules from the connected database.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKind {
    FreeText,
    Database,
}

/// Length/character constraints attached to a free-text field.
///
/// Every member is optional. Bounds the user never entered stay absent on
/// the wire rather than being coerced to zero, so the service can tell
/// "no minimum" apart from "minimum of 0".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,

    /// Characters the generated values must contain, drawn from the
    /// alphabet in [`crate::model::catalog::SPECIAL_CHARACTERS`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_special_characters: Option<Vec<char>>,
}

impl ValidationRule {
    /// True when no constraint of any sort is present.
    pub fn is_empty(&self) -> bool {
        self.min_length.is_none()
            && self.max_length.is_none()
            && self.required_special_characters.is_none()
    }
}

/// One configured field within a session.
///
/// The `identifier` is unique across the whole session (case-sensitive,
/// regardless of kind); the session enforces this at insertion time.
/// Free-text fields always carry a `validation_rule` object, possibly with
/// no constraints in it; database fields never do.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    pub identifier: String,
    pub field_kind: FieldKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_rule: Option<ValidationRule>,
}

impl FieldSpec {
    pub fn free_text(identifier: impl Into<String>, rule: ValidationRule) -> Self {
        Self {
            identifier: identifier.into(),
            field_kind: FieldKind::FreeText,
            validation_rule: Some(rule),
        }
    }

    pub fn database(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            field_kind: FieldKind::Database,
            validation_rule: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_text_field_serializes_with_camel_case_keys() {
        let field = FieldSpec::free_text(
            "password",
            ValidationRule {
                min_length: Some(8),
                max_length: None,
                required_special_characters: Some(vec!['@', '#']),
            },
        );

        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["identifier"], "password");
        assert_eq!(json["fieldKind"], "freeText");
        assert_eq!(json["validationRule"]["minLength"], 8);
        assert!(json["validationRule"].get("maxLength").is_none());
        assert_eq!(
            json["validationRule"]["requiredSpecialCharacters"],
            serde_json::json!(["@", "#"])
        );
    }

    #[test]
    fn database_field_serializes_without_a_validation_rule() {
        let json = serde_json::to_value(FieldSpec::database("salary")).unwrap();
        assert_eq!(json["fieldKind"], "database");
        assert!(json.get("validationRule").is_none());
    }
}
