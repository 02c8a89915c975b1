use crate::model::field::{FieldSpec, ValidationRule};
use crate::session::error::SessionError;

/// Which kind of field the draft will become once added.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DraftKind {
    /// A free-text field with a well-known type name ("name", "password").
    Predefined(String),
    /// A free-text field named by the user.
    Custom,
    /// A field backed by the database catalog.
    Database,
}

/// Draft constraints exactly as entered in the UI.
///
/// Bounds are `i32` because the number inputs will happily hand over a
/// negative value; negatives are rejected when the wire-level rule is built.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DraftValidation {
    pub min_length: Option<i32>,
    pub max_length: Option<i32>,
    pub special_characters: Vec<char>,
}

impl DraftValidation {
    /// True when no constraint of any sort has been entered.
    pub fn is_empty(&self) -> bool {
        self.min_length.is_none() && self.max_length.is_none() && self.special_characters.is_empty()
    }

    pub fn has_inverted_range(&self) -> bool {
        matches!((self.min_length, self.max_length), (Some(min), Some(max)) if min > max)
    }

    pub fn has_negative_bound(&self) -> bool {
        self.min_length.is_some_and(|min| min < 0) || self.max_length.is_some_and(|max| max < 0)
    }

    /// Builds the wire-level rule, rejecting negative or inverted bounds.
    pub fn build_rule(&self) -> Result<ValidationRule, SessionError> {
        if self.has_negative_bound() || self.has_inverted_range() {
            return Err(SessionError::InvalidLengthRange);
        }

        Ok(ValidationRule {
            min_length: self.min_length.map(|min| min as u32),
            max_length: self.max_length.map(|max| max as u32),
            required_special_characters: if self.special_characters.is_empty() {
                None
            } else {
                Some(self.special_characters.clone())
            },
        })
    }
}

/// The in-progress field being configured.
///
/// Not part of [`crate::session::SessionConfig`]: the draft is discarded
/// after a successful add and rebuilt on kind change, while a successful
/// submission resets the config and leaves the draft alone.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PendingFieldDraft {
    pub kind: Option<DraftKind>,
    /// Only meaningful while `kind` is [`DraftKind::Custom`].
    pub custom_name: String,
    /// Only meaningful while `kind` is [`DraftKind::Database`].
    pub database_type: Option<String>,
    pub validation: DraftValidation,
}

impl PendingFieldDraft {
    /// Builds the field this draft describes.
    pub fn build_field_spec(&self) -> Result<FieldSpec, SessionError> {
        match self.kind.as_ref().ok_or(SessionError::IncompleteDraft)? {
            DraftKind::Database => {
                let identifier = self
                    .database_type
                    .clone()
                    .ok_or(SessionError::IncompleteDraft)?;
                Ok(FieldSpec::database(identifier))
            }
            DraftKind::Predefined(name) => {
                Ok(FieldSpec::free_text(name.clone(), self.validation.build_rule()?))
            }
            DraftKind::Custom => {
                let name = self.custom_name.trim();
                if name.is_empty() {
                    return Err(SessionError::IncompleteDraft);
                }
                Ok(FieldSpec::free_text(name, self.validation.build_rule()?))
            }
        }
    }
}
