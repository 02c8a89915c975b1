//! Component state for the field configuration builder.

use common::session::FieldSession;

/// Main state container for the `FieldBuilderComponent`.
///
/// Fields are `pub` because they are accessed by the `view` and `update`
/// modules.
pub struct FieldBuilderComponent {
    /// The configuration session: configured fields, generation counts,
    /// submission email, and the in-progress field draft.
    pub session: FieldSession,

    /// Message shown in the error banner after a failed operation.
    pub error: Option<String>,

    /// True while a submission is in flight. Guards against a second
    /// concurrent save and disables the add/save actions meanwhile.
    pub is_saving: bool,
}

impl FieldBuilderComponent {
    pub fn new() -> Self {
        Self {
            session: FieldSession::new(),
            error: None,
            is_saving: false,
        }
    }
}
