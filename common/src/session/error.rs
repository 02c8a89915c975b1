use thiserror::Error;

/// Errors produced by session operations.
///
/// All of these are recoverable: the operation that raised them leaves both
/// the configured fields and the draft untouched, and the `Display` strings
/// double as the messages shown in the UI error banner.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// Identifier collision with an already-configured field.
    #[error("The field \"{0}\" is already used")]
    DuplicateField(String),

    /// A length bound is negative, or the minimum exceeds the maximum.
    #[error("Length bounds must be non-negative and min length must not exceed max length")]
    InvalidLengthRange,

    /// The draft cannot name a field yet: no kind selected, a blank custom
    /// name, or no database type chosen.
    #[error("Select a field type before adding")]
    IncompleteDraft,

    #[error("Please enter your email address")]
    MissingEmail,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Please add at least one field")]
    NoFields,
}
