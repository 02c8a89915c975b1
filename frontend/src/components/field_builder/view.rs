//! View rendering for the field configuration builder.
//!
//! The page is a stack of sections: generation counts, the field editor
//! (kind selector, database type or custom name, validation rules, the Add
//! button), the configured field cards grouped by kind, and the save
//! section. Everything renders straight off the session; the only UI-local
//! state is the error banner and the saving flag.

use common::model::catalog::{DATABASE_FIELD_TYPES, PREDEFINED_TEXT_TYPES, SPECIAL_CHARACTERS};
use common::model::field::{FieldKind, FieldSpec, ValidationRule};
use common::session::DraftKind;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::FieldBuilderComponent;

/// Main view function for the field builder component.
pub fn view(component: &FieldBuilderComponent, ctx: &Context<FieldBuilderComponent>) -> Html {
    let link = ctx.link();
    let catalog: Vec<String> = ctx
        .props()
        .database_types
        .clone()
        .unwrap_or_else(|| DATABASE_FIELD_TYPES.iter().map(|s| s.to_string()).collect());

    html! {
        <div class="field-builder">
            { build_error_banner(component) }
            { build_count_section(component, link) }
            { build_field_editor(component, link, &catalog) }
            { build_field_cards(component, link) }
            { build_save_section(component, link) }
        </div>
    }
}

fn build_error_banner(component: &FieldBuilderComponent) -> Html {
    match &component.error {
        Some(message) => html! { <div class="error-banner">{ message }</div> },
        None => html! {},
    }
}

/// Generation parameters. Positive/negative counts freeze while any
/// free-text field exists; dropdown profiles never do.
fn build_count_section(component: &FieldBuilderComponent, link: &Scope<FieldBuilderComponent>) -> Html {
    let locked = component.session.counts_locked();
    let config = &component.session.config;

    html! {
        <div class="section count-section">
            <div class="count-grid">
                { count_input(
                    "Positive Test Cases",
                    config.positive_test_case_count,
                    locked,
                    link.callback(|e: InputEvent| {
                        Msg::UpdatePositiveCount(e.target_unchecked_into::<HtmlInputElement>().value())
                    }),
                ) }
                { count_input(
                    "Negative Test Cases",
                    config.negative_test_case_count,
                    locked,
                    link.callback(|e: InputEvent| {
                        Msg::UpdateNegativeCount(e.target_unchecked_into::<HtmlInputElement>().value())
                    }),
                ) }
            </div>
            { count_input(
                "Number of Dropdown Profiles",
                config.dropdown_profile_count,
                false,
                link.callback(|e: InputEvent| {
                    Msg::UpdateDropdownProfileCount(e.target_unchecked_into::<HtmlInputElement>().value())
                }),
            ) }
        </div>
    }
}

fn count_input(label: &str, value: u32, locked: bool, oninput: Callback<InputEvent>) -> Html {
    let hint = if locked {
        html! { <p class="hint locked">{"Remove all text fields to modify test cases"}</p> }
    } else {
        html! { <p class="hint">{"Maximum value: 100"}</p> }
    };

    html! {
        <div class="count-input">
            <label>{ label }</label>
            <input
                type="number"
                min="0"
                max="100"
                value={value.to_string()}
                disabled={locked}
                {oninput}
            />
            { hint }
        </div>
    }
}

/// The editor for the in-progress field draft.
fn build_field_editor(
    component: &FieldBuilderComponent,
    link: &Scope<FieldBuilderComponent>,
    catalog: &[String],
) -> Html {
    let draft = &component.session.draft;

    html! {
        <div class="section field-editor">
            { build_kind_selector(component, link) }
            {
                match draft.kind.as_ref() {
                    Some(DraftKind::Database) => build_database_selector(component, link, catalog),
                    Some(DraftKind::Custom) => html! {
                        <>
                            { build_custom_name_input(component, link) }
                            { build_validation_rules(component, link) }
                        </>
                    },
                    Some(DraftKind::Predefined(_)) => build_validation_rules(component, link),
                    None => html! {},
                }
            }
            { build_add_button(component, link) }
        </div>
    }
}

fn build_kind_selector(component: &FieldBuilderComponent, link: &Scope<FieldBuilderComponent>) -> Html {
    let selected = kind_option_value(component);

    html! {
        <div class="kind-selector">
            <label>{"Field Type"}</label>
            <select onchange={link.callback(|e: Event| {
                Msg::SelectFieldKind(e.target_unchecked_into::<HtmlSelectElement>().value())
            })}>
                <option value="" selected={selected.is_empty()}>{"Select a field type"}</option>
                { for PREDEFINED_TEXT_TYPES.iter().map(|name| html! {
                    <option value={*name} selected={selected == *name}>{ title_case(name) }</option>
                }) }
                <option value="other" selected={selected == "other"}>{"Custom field"}</option>
                <option value="db" selected={selected == "db"}>{"Database field"}</option>
            </select>
        </div>
    }
}

/// The option value the kind selector should show for the current draft.
fn kind_option_value(component: &FieldBuilderComponent) -> String {
    match &component.session.draft.kind {
        None => String::new(),
        Some(DraftKind::Predefined(name)) => name.clone(),
        Some(DraftKind::Custom) => "other".to_string(),
        Some(DraftKind::Database) => "db".to_string(),
    }
}

fn build_database_selector(
    component: &FieldBuilderComponent,
    link: &Scope<FieldBuilderComponent>,
    catalog: &[String],
) -> Html {
    let selected = component
        .session
        .draft
        .database_type
        .as_deref()
        .unwrap_or("");
    let config = &component.session.config;

    html! {
        <div class="db-selector">
            <label>{"Database Field"}</label>
            <select onchange={link.callback(|e: Event| {
                Msg::SelectDatabaseType(e.target_unchecked_into::<HtmlSelectElement>().value())
            })}>
                <option value="" selected={selected.is_empty()}>{"Select a database field"}</option>
                { for catalog.iter().map(|name| {
                    let used = config.is_identifier_used(name);
                    let label = if used {
                        format!("{} (already used)", title_case(name))
                    } else {
                        title_case(name)
                    };
                    html! {
                        <option value={name.clone()} disabled={used} selected={selected == name.as_str()}>
                            { label }
                        </option>
                    }
                }) }
            </select>
        </div>
    }
}

fn build_custom_name_input(
    component: &FieldBuilderComponent,
    link: &Scope<FieldBuilderComponent>,
) -> Html {
    html! {
        <div class="custom-name">
            <label>{"Custom Field Name"}</label>
            <input
                type="text"
                placeholder="e.g. nickname"
                value={component.session.draft.custom_name.clone()}
                oninput={link.callback(|e: InputEvent| {
                    Msg::UpdateCustomName(e.target_unchecked_into::<HtmlInputElement>().value())
                })}
            />
        </div>
    }
}

/// Length bounds and required special characters for a free-text draft.
fn build_validation_rules(
    component: &FieldBuilderComponent,
    link: &Scope<FieldBuilderComponent>,
) -> Html {
    let draft = &component.session.draft;
    let rule = &draft.validation;
    let required = component.session.config.negative_test_case_count > 0;

    let field_label = match &draft.kind {
        Some(DraftKind::Predefined(name)) => title_case(name),
        _ => draft.custom_name.trim().to_string(),
    };

    html! {
        <div class="validation-rules">
            <h3>
                { format!("Validation Rules for {}", field_label) }
                {
                    if required {
                        html! {
                            <span class="required-hint">
                                {"Validation required when negative test cases are present"}
                            </span>
                        }
                    } else {
                        html! {}
                    }
                }
            </h3>
            <div class="length-grid">
                <div>
                    <label>{"Min Length"}</label>
                    <input
                        type="number"
                        min="0"
                        value={rule.min_length.map(|v| v.to_string()).unwrap_or_default()}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::UpdateMinLength(e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                    />
                </div>
                <div>
                    <label>{"Max Length"}</label>
                    <input
                        type="number"
                        min="0"
                        value={rule.max_length.map(|v| v.to_string()).unwrap_or_default()}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::UpdateMaxLength(e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                    />
                </div>
            </div>
            <div class="special-characters">
                <label>{"Special Characters"}</label>
                <div class="char-grid">
                    { for SPECIAL_CHARACTERS.iter().map(|&character| {
                        let active = rule.special_characters.contains(&character);
                        html! {
                            <button
                                type="button"
                                class={classes!("char-btn", active.then_some("selected"))}
                                onclick={link.callback(move |_| Msg::ToggleSpecialCharacter(character))}
                            >
                                { character.to_string() }
                            </button>
                        }
                    }) }
                </div>
            </div>
        </div>
    }
}

fn build_add_button(component: &FieldBuilderComponent, link: &Scope<FieldBuilderComponent>) -> Html {
    if component.session.draft.kind.is_none() {
        return html! {};
    }
    let enabled = component.session.can_add_draft() && !component.is_saving;

    html! {
        <button
            class="add-field-btn"
            disabled={!enabled}
            onclick={link.callback(|_| Msg::AddField)}
        >
            {"Add Field"}
        </button>
    }
}

/// Configured fields, grouped into text and database sections. Deletion is
/// by position in the session's field list, so cards carry their original
/// index through the grouping.
fn build_field_cards(component: &FieldBuilderComponent, link: &Scope<FieldBuilderComponent>) -> Html {
    let fields = &component.session.config.fields;
    let text_fields: Vec<(usize, &FieldSpec)> = fields
        .iter()
        .enumerate()
        .filter(|(_, field)| field.field_kind == FieldKind::FreeText)
        .collect();
    let db_fields: Vec<(usize, &FieldSpec)> = fields
        .iter()
        .enumerate()
        .filter(|(_, field)| field.field_kind == FieldKind::Database)
        .collect();

    html! {
        <>
            { build_field_group("Text Fields", &text_fields, link) }
            { build_field_group("DB Fields", &db_fields, link) }
        </>
    }
}

fn build_field_group(
    title: &str,
    fields: &[(usize, &FieldSpec)],
    link: &Scope<FieldBuilderComponent>,
) -> Html {
    if fields.is_empty() {
        return html! {};
    }

    html! {
        <div class="section field-group">
            <h3>{ title }</h3>
            <div class="card-list">
                { for fields.iter().map(|(index, field)| build_field_card(*index, field, link)) }
            </div>
        </div>
    }
}

fn build_field_card(index: usize, field: &FieldSpec, link: &Scope<FieldBuilderComponent>) -> Html {
    html! {
        <div class="field-card">
            <div class="field-card-body">
                <span class="field-name">{ &field.identifier }</span>
                { rule_summary(field.validation_rule.as_ref()) }
            </div>
            <button
                class="icon-btn delete"
                title="Delete field"
                onclick={link.callback(move |_| Msg::DeleteField(index))}
            >
                <i class="material-icons">{"delete"}</i>
            </button>
        </div>
    }
}

fn rule_summary(rule: Option<&ValidationRule>) -> Html {
    let Some(rule) = rule else {
        return html! { <span class="field-rule">{"Rules fetched from the database"}</span> };
    };
    if rule.is_empty() {
        return html! { <span class="field-rule">{"No validation rules"}</span> };
    }

    let mut parts = Vec::new();
    if let Some(min) = rule.min_length {
        parts.push(format!("min length {}", min));
    }
    if let Some(max) = rule.max_length {
        parts.push(format!("max length {}", max));
    }
    if let Some(characters) = &rule.required_special_characters {
        let list: Vec<String> = characters.iter().map(|c| c.to_string()).collect();
        parts.push(format!("requires {}", list.join(" ")));
    }

    html! { <span class="field-rule">{ parts.join(", ") }</span> }
}

fn build_save_section(component: &FieldBuilderComponent, link: &Scope<FieldBuilderComponent>) -> Html {
    html! {
        <div class="section save-section">
            <label>{"Email Address"}</label>
            <input
                type="email"
                placeholder="you@example.com"
                value={component.session.config.submitter_email.clone()}
                oninput={link.callback(|e: InputEvent| {
                    Msg::UpdateEmail(e.target_unchecked_into::<HtmlInputElement>().value())
                })}
            />
            <button
                class="save-btn"
                disabled={component.is_saving}
                onclick={link.callback(|_| Msg::Save)}
            >
                { if component.is_saving { "Saving..." } else { "Save Configuration" } }
            </button>
        </div>
    }
}

/// Uppercases the first character for display.
fn title_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
