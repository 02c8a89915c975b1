//! Defines the properties for the `FieldBuilderComponent`.

use yew::prelude::*;

/// Properties for the `FieldBuilderComponent`.
#[derive(Properties, PartialEq, Clone)]
pub struct FieldBuilderProps {
    /// Database field catalog offered in the selector. The catalog's source
    /// of truth lives with the service; when `None`, the built-in default
    /// from `common::model::catalog` is used. The session enforces
    /// uniqueness against whichever catalog is supplied.
    #[prop_or_default]
    pub database_types: Option<Vec<String>>,
}
