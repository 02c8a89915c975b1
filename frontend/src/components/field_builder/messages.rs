#[derive(Clone)]
pub enum Msg {
    SelectFieldKind(String),
    SelectDatabaseType(String),
    UpdateCustomName(String),
    UpdateMinLength(String),
    UpdateMaxLength(String),
    ToggleSpecialCharacter(char),
    UpdatePositiveCount(String),
    UpdateNegativeCount(String),
    UpdateDropdownProfileCount(String),
    UpdateEmail(String),
    AddField,
    DeleteField(usize),
    Save,
    SaveSucceeded,
    SaveFailed(String),
}
