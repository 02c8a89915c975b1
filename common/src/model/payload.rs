use serde::{Deserialize, Serialize};

use crate::model::field::FieldSpec;

/// One group of fields inside a submission payload, keyed by kind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldGroup {
    pub fields: Vec<FieldSpec>,
}

/// The JSON body POSTed to the generation service when a configuration is
/// saved.
///
/// Groups that contain no fields are omitted entirely instead of being sent
/// as empty objects, matching what the service expects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationPayload {
    pub submitter_email: String,
    pub positive_test_case_count: u32,
    pub negative_test_case_count: u32,
    pub dropdown_profile_count: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_text_group: Option<FieldGroup>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_group: Option<FieldGroup>,
}
