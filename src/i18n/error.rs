//! Error types for the i18n runtime.
//!
//! Only `CatalogError` is fatal at runtime. Everything else the runtime meets
//! (unknown language codes, missing persistence) degrades instead of failing.

use thiserror::Error;

/// The catalog does not line up with the identifier space.
///
/// This is a build or integration defect, never a transient condition.
/// Nothing retries it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The record at `position` declares identifier `found`.
    #[error("{message}")]
    OrderMismatch {
        position: usize,
        found: usize,
        message: String,
    },

    /// The catalog has a different number of records than identifiers.
    #[error("string catalog has {records} records but {expected} identifiers are declared")]
    CountMismatch { records: usize, expected: usize },
}

/// A language list that cannot form a registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("language registry is empty")]
    Empty,

    #[error("no default language found in registry")]
    NoDefault,

    #[error("multiple default languages found in registry: {0:?}")]
    MultipleDefaults(Vec<&'static str>),

    #[error("default language '{0}' is disabled")]
    DefaultDisabled(&'static str),

    #[error("language code '{0}' is registered more than once")]
    DuplicateCode(&'static str),
}
