//! Update function for the field configuration builder.
//!
//! This module contains a single `update` function following an Elm-style
//! architecture: it receives the current `FieldBuilderComponent` state, the
//! `Context`, and a `Msg`, mutates the state accordingly, and returns a
//! `bool` indicating whether the view should re-render.
//!
//! Raw input strings are parsed here (number inputs can hold anything) and
//! every transition is delegated to the `FieldSession`, which owns the
//! actual rules. The `Save` handler keeps at most one submission in flight
//! via the `is_saving` flag.

use yew::platform::spawn_local;
use yew::prelude::*;

use common::session::{DraftKind, SubmissionRoute};

use crate::api;

use super::helpers::show_toast;
use super::messages::Msg;
use super::state::FieldBuilderComponent;

/// Central update function for the component.
pub fn update(
    component: &mut FieldBuilderComponent,
    ctx: &Context<FieldBuilderComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::SelectFieldKind(value) => {
            component.error = None;
            component.session.select_field_kind(parse_kind(&value));
            true
        }
        Msg::SelectDatabaseType(name) => {
            component.error = None;
            if name.is_empty() {
                // Back to the placeholder option: drop the stale selection.
                component.session.select_field_kind(Some(DraftKind::Database));
            } else if let Err(err) = component.session.select_database_type(&name) {
                component.error = Some(err.to_string());
            }
            true
        }
        Msg::UpdateCustomName(name) => {
            component.session.set_custom_name(name);
            true
        }
        Msg::UpdateMinLength(value) => {
            let mut rule = component.session.draft.validation.clone();
            rule.min_length = parse_bound(&value);
            component.session.update_draft_validation(rule);
            true
        }
        Msg::UpdateMaxLength(value) => {
            let mut rule = component.session.draft.validation.clone();
            rule.max_length = parse_bound(&value);
            component.session.update_draft_validation(rule);
            true
        }
        Msg::ToggleSpecialCharacter(character) => {
            let mut rule = component.session.draft.validation.clone();
            match rule.special_characters.iter().position(|&c| c == character) {
                Some(index) => {
                    rule.special_characters.remove(index);
                }
                None => rule.special_characters.push(character),
            }
            component.session.update_draft_validation(rule);
            true
        }
        Msg::UpdatePositiveCount(value) => {
            component.session.set_positive_count(parse_count(&value));
            true
        }
        Msg::UpdateNegativeCount(value) => {
            component.session.set_negative_count(parse_count(&value));
            true
        }
        Msg::UpdateDropdownProfileCount(value) => {
            component
                .session
                .set_dropdown_profile_count(parse_count(&value));
            true
        }
        Msg::UpdateEmail(email) => {
            component.session.set_submitter_email(email);
            true
        }
        Msg::AddField => {
            if component.is_saving {
                return false;
            }
            component.error = None;
            if let Err(err) = component.session.add_draft_field() {
                component.error = Some(err.to_string());
            }
            true
        }
        Msg::DeleteField(index) => {
            component.session.delete_field(index);
            true
        }
        Msg::Save => {
            if component.is_saving {
                return false;
            }
            component.error = None;
            if let Err(err) = component.session.validate_for_submission() {
                component.error = Some(err.to_string());
                return true;
            }

            component.is_saving = true;
            let payload = component.session.build_submission_payload();
            let route = component.session.submission_route();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = match route {
                    SubmissionRoute::Database => api::save_db_configuration(&payload).await,
                    SubmissionRoute::Text => api::save_text_configuration(&payload).await,
                };
                match result {
                    Ok(()) => link.send_message(Msg::SaveSucceeded),
                    Err(err) => link.send_message(Msg::SaveFailed(err.to_string())),
                }
            });
            true
        }
        Msg::SaveSucceeded => {
            component.is_saving = false;
            component.session.reset_after_submission();
            show_toast("Configuration saved successfully!");
            true
        }
        Msg::SaveFailed(message) => {
            component.is_saving = false;
            component.error = Some(message);
            true
        }
    }
}

/// Maps the kind selector's raw option value onto a draft kind.
fn parse_kind(value: &str) -> Option<DraftKind> {
    match value {
        "" => None,
        "other" => Some(DraftKind::Custom),
        "db" => Some(DraftKind::Database),
        name => Some(DraftKind::Predefined(name.to_string())),
    }
}

/// Empty or unparseable input means the bound is absent.
fn parse_bound(value: &str) -> Option<i32> {
    value.trim().parse().ok()
}

fn parse_count(value: &str) -> i64 {
    value.trim().parse().unwrap_or(0)
}
