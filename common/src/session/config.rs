use crate::model::field::{FieldKind, FieldSpec};

/// Upper bound for test-case counts and dropdown profile counts.
pub const MAX_GENERATION_COUNT: u32 = 100;

/// The configuration being assembled for one submission.
///
/// Fields are kept in insertion order; order carries no meaning beyond
/// display and index-based deletion. The struct holds plain data only, all
/// mutation rules live in [`crate::session::FieldSession`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    pub fields: Vec<FieldSpec>,
    pub positive_test_case_count: u32,
    pub negative_test_case_count: u32,
    pub dropdown_profile_count: u32,
    pub submitter_email: String,
}

impl SessionConfig {
    /// The state a fresh session starts in, and the state restored after a
    /// successful submission.
    pub fn new() -> Self {
        Self {
            fields: Vec::new(),
            positive_test_case_count: 1,
            negative_test_case_count: 0,
            dropdown_profile_count: 1,
            submitter_email: String::new(),
        }
    }

    pub fn has_free_text_fields(&self) -> bool {
        self.fields
            .iter()
            .any(|field| field.field_kind == FieldKind::FreeText)
    }

    pub fn has_database_fields(&self) -> bool {
        self.fields
            .iter()
            .any(|field| field.field_kind == FieldKind::Database)
    }

    /// Case-sensitive exact match against every configured identifier,
    /// regardless of field kind.
    pub fn is_identifier_used(&self, identifier: &str) -> bool {
        self.fields.iter().any(|field| field.identifier == identifier)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}
