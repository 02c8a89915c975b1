//! The field-configuration session: an in-memory aggregate owning the
//! configured fields, the generation parameters, the submission email, and
//! the in-progress field draft.
//!
//! Every mutation the UI can trigger goes through a method here, so the
//! consistency rules (identifier uniqueness, length-range sanity, count
//! clamping and gating) live in one place and the Yew layer stays a thin
//! shell of message plumbing.

use regex::Regex;

use crate::model::field::FieldKind;
use crate::model::payload::{ConfigurationPayload, FieldGroup};

mod config;
mod draft;
mod error;

pub use config::{MAX_GENERATION_COUNT, SessionConfig};
pub use draft::{DraftKind, DraftValidation, PendingFieldDraft};
pub use error::SessionError;

/// Which external save operation a finished configuration is routed to.
///
/// Routing is all-or-nothing: one database field sends the whole payload,
/// free-text fields included, down the database channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionRoute {
    Text,
    Database,
}

/// Owns the [`SessionConfig`] and the [`PendingFieldDraft`] and enforces
/// every invariant between them.
///
/// The two halves are public so the view layer can read them directly;
/// mutation still goes through the methods below.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldSession {
    pub config: SessionConfig,
    pub draft: PendingFieldDraft,
}

impl FieldSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the draft kind, discarding stale input from the previous kind:
    /// the draft rule and any database-type selection are always cleared,
    /// the custom name survives only when the new kind is `Custom`.
    pub fn select_field_kind(&mut self, kind: Option<DraftKind>) {
        let keep_custom_name = matches!(kind, Some(DraftKind::Custom));
        self.draft.kind = kind;
        self.draft.validation = DraftValidation::default();
        self.draft.database_type = None;
        if !keep_custom_name {
            self.draft.custom_name.clear();
        }
    }

    /// Records a database-type selection and forces the draft kind to
    /// `Database`. Rejected up front when the name is already configured.
    pub fn select_database_type(&mut self, name: &str) -> Result<(), SessionError> {
        if self.config.is_identifier_used(name) {
            return Err(SessionError::DuplicateField(name.to_string()));
        }
        self.draft.database_type = Some(name.to_string());
        self.draft.kind = Some(DraftKind::Database);
        Ok(())
    }

    pub fn set_custom_name(&mut self, name: String) {
        self.draft.custom_name = name;
    }

    /// Wholesale replacement of the draft rule; the view builds the new rule
    /// from the old one plus the single edited member.
    pub fn update_draft_validation(&mut self, rule: DraftValidation) {
        self.draft.validation = rule;
    }

    /// Whether the current draft may be added, as the Add button sees it.
    ///
    /// Free-text drafts need at least one constraint once negative test
    /// cases are requested (a negative case needs something to violate), and
    /// their bounds must be non-negative and non-inverted. Note this gate
    /// does not check free-text identifier uniqueness; only
    /// [`FieldSession::add_draft_field`] does.
    pub fn can_add_draft(&self) -> bool {
        let Some(kind) = self.draft.kind.as_ref() else {
            return false;
        };

        if matches!(kind, DraftKind::Custom) && self.draft.custom_name.trim().is_empty() {
            return false;
        }
        if matches!(kind, DraftKind::Database) {
            return self.draft.database_type.is_some();
        }

        let rule = &self.draft.validation;
        if self.config.negative_test_case_count > 0 && rule.is_empty() {
            return false;
        }
        !rule.has_inverted_range() && !rule.has_negative_bound()
    }

    /// Appends the field described by the draft, then resets the draft.
    ///
    /// This is the authoritative validation point: identifier uniqueness is
    /// re-checked here even for paths the Add button gate does not cover.
    /// On any error both the configured fields and the draft are untouched.
    pub fn add_draft_field(&mut self) -> Result<(), SessionError> {
        let spec = self.draft.build_field_spec()?;
        if self.config.is_identifier_used(&spec.identifier) {
            return Err(SessionError::DuplicateField(spec.identifier));
        }
        self.config.fields.push(spec);
        self.draft = PendingFieldDraft::default();
        Ok(())
    }

    /// Removes the field at `index`; out of range is a silent no-op.
    pub fn delete_field(&mut self, index: usize) {
        if index < self.config.fields.len() {
            self.config.fields.remove(index);
        }
    }

    /// True while at least one free-text field is configured, which freezes
    /// the positive/negative test-case counts.
    pub fn counts_locked(&self) -> bool {
        self.config.has_free_text_fields()
    }

    /// Ignored while counts are locked.
    pub fn set_positive_count(&mut self, count: i64) {
        if self.counts_locked() {
            return;
        }
        self.config.positive_test_case_count = clamp_count(count);
    }

    /// Ignored while counts are locked.
    pub fn set_negative_count(&mut self, count: i64) {
        if self.counts_locked() {
            return;
        }
        self.config.negative_test_case_count = clamp_count(count);
    }

    /// Never gated by field presence, unlike the test-case counts.
    pub fn set_dropdown_profile_count(&mut self, count: i64) {
        self.config.dropdown_profile_count = clamp_count(count);
    }

    pub fn set_submitter_email(&mut self, email: String) {
        self.config.submitter_email = email;
    }

    /// Pure pre-submission check, in priority order: email presence, email
    /// syntax, then field presence.
    pub fn validate_for_submission(&self) -> Result<(), SessionError> {
        if self.config.submitter_email.is_empty() {
            return Err(SessionError::MissingEmail);
        }
        if !is_valid_email(&self.config.submitter_email) {
            return Err(SessionError::InvalidEmail);
        }
        if self.config.fields.is_empty() {
            return Err(SessionError::NoFields);
        }
        Ok(())
    }

    /// Serializes the session into the wire payload, partitioning fields by
    /// kind. Call only after [`FieldSession::validate_for_submission`].
    pub fn build_submission_payload(&self) -> ConfigurationPayload {
        let (free_text, database): (Vec<_>, Vec<_>) = self
            .config
            .fields
            .iter()
            .cloned()
            .partition(|field| field.field_kind == FieldKind::FreeText);

        ConfigurationPayload {
            submitter_email: self.config.submitter_email.clone(),
            positive_test_case_count: self.config.positive_test_case_count,
            negative_test_case_count: self.config.negative_test_case_count,
            dropdown_profile_count: self.config.dropdown_profile_count,
            free_text_group: (!free_text.is_empty()).then(|| FieldGroup { fields: free_text }),
            database_group: (!database.is_empty()).then(|| FieldGroup { fields: database }),
        }
    }

    pub fn submission_route(&self) -> SubmissionRoute {
        if self.config.has_database_fields() {
            SubmissionRoute::Database
        } else {
            SubmissionRoute::Text
        }
    }

    /// Restores the config to its initial state after a successful
    /// submission. The draft is deliberately left alone.
    pub fn reset_after_submission(&mut self) {
        self.config = SessionConfig::new();
    }
}

fn clamp_count(count: i64) -> u32 {
    count.clamp(0, MAX_GENERATION_COUNT as i64) as u32
}

/// Syntactic check only; deliverability is the service's problem.
fn is_valid_email(email: &str) -> bool {
    let pattern = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    pattern.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::field::FieldKind;

    fn draft_custom(session: &mut FieldSession, name: &str) {
        session.select_field_kind(Some(DraftKind::Custom));
        session.set_custom_name(name.to_string());
    }

    fn draft_database(session: &mut FieldSession, name: &str) {
        session.select_database_type(name).unwrap();
    }

    #[test]
    fn distinct_identifiers_all_add_successfully() {
        let mut session = FieldSession::new();

        draft_database(&mut session, "salary");
        session.add_draft_field().unwrap();
        draft_custom(&mut session, "nickname");
        session.add_draft_field().unwrap();
        session.select_field_kind(Some(DraftKind::Predefined("password".to_string())));
        session.add_draft_field().unwrap();

        assert_eq!(session.config.fields.len(), 3);
        assert_eq!(session.config.fields[0].identifier, "salary");
        assert_eq!(session.config.fields[0].field_kind, FieldKind::Database);
        assert_eq!(session.config.fields[2].identifier, "password");
        assert_eq!(session.config.fields[2].field_kind, FieldKind::FreeText);
    }

    #[test]
    fn duplicate_database_type_is_rejected_at_selection_time() {
        let mut session = FieldSession::new();
        draft_database(&mut session, "salary");
        session.add_draft_field().unwrap();

        let err = session.select_database_type("salary").unwrap_err();
        assert_eq!(err, SessionError::DuplicateField("salary".to_string()));
        assert_eq!(session.draft.database_type, None);
        assert_eq!(session.config.fields.len(), 1);
    }

    #[test]
    fn add_recheck_catches_duplicates_that_bypassed_selection() {
        let mut session = FieldSession::new();
        draft_database(&mut session, "salary");
        session.add_draft_field().unwrap();

        // A draft assembled outside select_database_type, the way a stale UI
        // could hand one over.
        session.draft.kind = Some(DraftKind::Database);
        session.draft.database_type = Some("salary".to_string());

        let err = session.add_draft_field().unwrap_err();
        assert_eq!(err, SessionError::DuplicateField("salary".to_string()));
        assert_eq!(session.config.fields.len(), 1);
    }

    #[test]
    fn add_button_gate_misses_free_text_duplicates_but_add_rejects_them() {
        let mut session = FieldSession::new();
        draft_custom(&mut session, "nickname");
        session.add_draft_field().unwrap();

        draft_custom(&mut session, "nickname");
        // The gate only checks that a name exists, not that it is unused.
        assert!(session.can_add_draft());
        let err = session.add_draft_field().unwrap_err();
        assert_eq!(err, SessionError::DuplicateField("nickname".to_string()));
        assert_eq!(session.config.fields.len(), 1);
        // The failed add keeps the draft for the user to fix.
        assert_eq!(session.draft.custom_name, "nickname");
    }

    #[test]
    fn identifier_uniqueness_is_case_sensitive() {
        let mut session = FieldSession::new();
        draft_custom(&mut session, "Password");
        session.add_draft_field().unwrap();
        draft_custom(&mut session, "password");
        session.add_draft_field().unwrap();
        assert_eq!(session.config.fields.len(), 2);
    }

    #[test]
    fn uniqueness_applies_across_field_kinds() {
        let mut session = FieldSession::new();
        draft_custom(&mut session, "salary");
        session.add_draft_field().unwrap();

        let err = session.select_database_type("salary").unwrap_err();
        assert_eq!(err, SessionError::DuplicateField("salary".to_string()));
    }

    #[test]
    fn empty_draft_cannot_be_added() {
        let mut session = FieldSession::new();
        assert!(!session.can_add_draft());
        assert_eq!(session.add_draft_field().unwrap_err(), SessionError::IncompleteDraft);

        session.select_field_kind(Some(DraftKind::Custom));
        session.set_custom_name("   ".to_string());
        assert!(!session.can_add_draft());
        assert_eq!(session.add_draft_field().unwrap_err(), SessionError::IncompleteDraft);

        session.select_field_kind(Some(DraftKind::Database));
        assert!(!session.can_add_draft());
        assert_eq!(session.add_draft_field().unwrap_err(), SessionError::IncompleteDraft);
    }

    #[test]
    fn empty_rule_disables_add_while_negative_cases_are_requested() {
        let mut session = FieldSession::new();
        session.set_negative_count(1);
        draft_custom(&mut session, "x");
        assert!(!session.can_add_draft());

        let mut rule = session.draft.validation.clone();
        rule.min_length = Some(4);
        session.update_draft_validation(rule);
        assert!(session.can_add_draft());
    }

    #[test]
    fn any_single_constraint_satisfies_the_negative_case_gate() {
        let mut session = FieldSession::new();
        session.set_negative_count(3);
        draft_custom(&mut session, "x");

        session.update_draft_validation(DraftValidation {
            special_characters: vec!['@'],
            ..DraftValidation::default()
        });
        assert!(session.can_add_draft());
    }

    #[test]
    fn inverted_range_disables_add_and_fails_construction() {
        let mut session = FieldSession::new();
        draft_custom(&mut session, "password");
        session.update_draft_validation(DraftValidation {
            min_length: Some(10),
            max_length: Some(5),
            ..DraftValidation::default()
        });

        assert!(!session.can_add_draft());
        assert_eq!(session.add_draft_field().unwrap_err(), SessionError::InvalidLengthRange);
        assert!(session.config.fields.is_empty());
    }

    #[test]
    fn negative_bound_disables_add_and_fails_construction() {
        let mut session = FieldSession::new();
        draft_custom(&mut session, "password");
        session.update_draft_validation(DraftValidation {
            min_length: Some(-3),
            ..DraftValidation::default()
        });

        assert!(!session.can_add_draft());
        assert_eq!(session.add_draft_field().unwrap_err(), SessionError::InvalidLengthRange);
    }

    #[test]
    fn equal_bounds_are_a_valid_range() {
        let mut session = FieldSession::new();
        draft_custom(&mut session, "code");
        session.update_draft_validation(DraftValidation {
            min_length: Some(6),
            max_length: Some(6),
            ..DraftValidation::default()
        });
        assert!(session.can_add_draft());
        session.add_draft_field().unwrap();
    }

    #[test]
    fn delete_out_of_range_is_a_no_op() {
        let mut session = FieldSession::new();
        draft_database(&mut session, "course");
        session.add_draft_field().unwrap();

        session.delete_field(0);
        assert!(session.config.fields.is_empty());
        session.delete_field(0);
        session.delete_field(5);
        assert!(session.config.fields.is_empty());
    }

    #[test]
    fn changing_kind_discards_stale_draft_input() {
        let mut session = FieldSession::new();
        draft_database(&mut session, "salary");

        session.select_field_kind(Some(DraftKind::Predefined("name".to_string())));
        assert_eq!(session.draft.database_type, None);
        assert!(session.draft.validation.is_empty());

        session.set_custom_name("kept".to_string());
        session.select_field_kind(Some(DraftKind::Custom));
        assert_eq!(session.draft.custom_name, "kept");

        session.select_field_kind(Some(DraftKind::Database));
        assert!(session.draft.custom_name.is_empty());
    }

    #[test]
    fn successful_add_resets_the_draft() {
        let mut session = FieldSession::new();
        draft_custom(&mut session, "nickname");
        session.update_draft_validation(DraftValidation {
            min_length: Some(2),
            ..DraftValidation::default()
        });
        session.add_draft_field().unwrap();

        assert_eq!(session.draft, PendingFieldDraft::default());
    }

    #[test]
    fn counts_lock_while_a_free_text_field_exists() {
        let mut session = FieldSession::new();
        session.set_negative_count(5);

        session.select_field_kind(Some(DraftKind::Predefined("name".to_string())));
        assert!(!session.can_add_draft());
        session.update_draft_validation(DraftValidation {
            min_length: Some(4),
            ..DraftValidation::default()
        });
        assert!(session.can_add_draft());
        session.add_draft_field().unwrap();

        assert!(session.counts_locked());
        session.set_negative_count(9);
        session.set_positive_count(7);
        assert_eq!(session.config.negative_test_case_count, 5);
        assert_eq!(session.config.positive_test_case_count, 1);

        // Dropdown profiles are never gated.
        session.set_dropdown_profile_count(3);
        assert_eq!(session.config.dropdown_profile_count, 3);

        session.delete_field(0);
        assert!(!session.counts_locked());
        session.set_positive_count(7);
        assert_eq!(session.config.positive_test_case_count, 7);
    }

    #[test]
    fn database_fields_do_not_lock_counts() {
        let mut session = FieldSession::new();
        draft_database(&mut session, "course");
        session.add_draft_field().unwrap();

        assert!(!session.counts_locked());
        session.set_positive_count(10);
        assert_eq!(session.config.positive_test_case_count, 10);
    }

    #[test]
    fn counts_clamp_to_the_permitted_range() {
        let mut session = FieldSession::new();
        session.set_positive_count(250);
        session.set_negative_count(-5);
        session.set_dropdown_profile_count(1000);

        assert_eq!(session.config.positive_test_case_count, 100);
        assert_eq!(session.config.negative_test_case_count, 0);
        assert_eq!(session.config.dropdown_profile_count, 100);
    }

    #[test]
    fn submission_validation_checks_email_before_fields() {
        let mut session = FieldSession::new();
        assert_eq!(session.validate_for_submission().unwrap_err(), SessionError::MissingEmail);

        session.set_submitter_email("not an email".to_string());
        assert_eq!(session.validate_for_submission().unwrap_err(), SessionError::InvalidEmail);

        session.set_submitter_email("qa@example".to_string());
        assert_eq!(session.validate_for_submission().unwrap_err(), SessionError::InvalidEmail);

        session.set_submitter_email("qa@example.com".to_string());
        assert_eq!(session.validate_for_submission().unwrap_err(), SessionError::NoFields);

        draft_database(&mut session, "course");
        session.add_draft_field().unwrap();
        assert!(session.validate_for_submission().is_ok());
    }

    #[test]
    fn payload_for_a_text_only_session_has_no_database_group() {
        let mut session = FieldSession::new();
        session.set_submitter_email("qa@example.com".to_string());
        draft_custom(&mut session, "password");
        session.update_draft_validation(DraftValidation {
            min_length: Some(8),
            ..DraftValidation::default()
        });
        session.add_draft_field().unwrap();

        let payload = session.build_submission_payload();
        let group = payload.free_text_group.as_ref().expect("free-text group present");
        assert_eq!(group.fields.len(), 1);
        assert_eq!(group.fields[0].identifier, "password");
        let rule = group.fields[0].validation_rule.as_ref().unwrap();
        assert_eq!(rule.min_length, Some(8));
        assert_eq!(rule.max_length, None);
        assert!(payload.database_group.is_none());

        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("databaseGroup").is_none());
        let field = &json["freeTextGroup"]["fields"][0];
        assert_eq!(field["validationRule"]["minLength"], 8);
        assert!(field["validationRule"].get("maxLength").is_none());
    }

    #[test]
    fn mixed_sessions_split_fields_into_both_groups() {
        let mut session = FieldSession::new();
        session.set_submitter_email("qa@example.com".to_string());
        draft_custom(&mut session, "nickname");
        session.add_draft_field().unwrap();
        draft_database(&mut session, "salary");
        session.add_draft_field().unwrap();

        let payload = session.build_submission_payload();
        assert_eq!(payload.free_text_group.unwrap().fields[0].identifier, "nickname");
        assert_eq!(payload.database_group.unwrap().fields[0].identifier, "salary");
    }

    #[test]
    fn one_database_field_routes_the_whole_submission_to_the_database_channel() {
        let mut session = FieldSession::new();
        draft_custom(&mut session, "nickname");
        session.add_draft_field().unwrap();
        assert_eq!(session.submission_route(), SubmissionRoute::Text);

        draft_database(&mut session, "salary");
        session.add_draft_field().unwrap();
        assert_eq!(session.submission_route(), SubmissionRoute::Database);
    }

    #[test]
    fn reset_after_submission_restores_initial_config_and_keeps_draft() {
        let mut session = FieldSession::new();
        session.set_positive_count(4);
        session.set_dropdown_profile_count(2);
        session.set_submitter_email("qa@example.com".to_string());
        draft_database(&mut session, "course");
        session.add_draft_field().unwrap();
        draft_custom(&mut session, "half-typed");

        session.reset_after_submission();
        assert_eq!(session.config, SessionConfig::new());
        assert_eq!(session.draft.custom_name, "half-typed");
    }

    #[test]
    fn custom_names_are_trimmed_when_they_become_identifiers() {
        let mut session = FieldSession::new();
        draft_custom(&mut session, "  nickname  ");
        session.add_draft_field().unwrap();
        assert_eq!(session.config.fields[0].identifier, "nickname");
    }
}
