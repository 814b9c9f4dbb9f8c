//! Internationalization (i18n) runtime.
//!
//! Every user-visible string has a stable ordinal identifier (`ids`) and one
//! translation record in the catalog. At startup the catalog order is checked
//! against the identifiers, the active language is resolved, and a flat table
//! of resolved text is built. Callers read strings by identifier in O(1).
//!
//! # Architecture
//!
//! - `ids`: the identifier space
//! - `registry` / `language`: supported languages and the default
//! - `catalog` / `strings`: translation records and per-language selection
//! - `validator`: catalog order check (fatal on failure)
//! - `locale`: ambient locale detection and code normalisation
//! - `resolver`: explicit → persisted → ambient → default precedence
//! - `persistence`: stored language preference
//! - `table`: resolved string table materialisation
//! - `localizer`: owns the active table and serves strings
//! - `metrics`: counters for resolutions and table builds
//!
//! # Example
//!
//! ```rust,ignore
//! use i18n_strings::i18n::{ids, Localizer};
//!
//! let localizer = Localizer::builder().initialise(Some("fr-CA"))?;
//! assert_eq!(localizer.get_string(ids::SAVE), "Enregistrer");
//!
//! localizer.set_language(Some("de"));
//! assert_eq!(localizer.get_string_plus_english(ids::SAVE), "Speichern[ Save]");
//! ```

pub mod ids;

mod catalog;
mod error;
mod language;
mod locale;
mod localizer;
mod metrics;
mod persistence;
mod registry;
mod resolver;
mod strings;
mod table;
mod validator;

pub use catalog::{selector_for, Catalog, Selector, TranslationRecord, PLACEHOLDER};
pub use error::{CatalogError, RegistryError};
pub use ids::StringId;
pub use language::Language;
pub use locale::{detect_ambient_locale, normalize_locale_code, primary_subtag};
pub use localizer::{Localizer, LocalizerBuilder};
pub use metrics::{LocalizerMetrics, MetricsReport};
pub use persistence::{
    DisabledPreferenceStore, FilePreferenceStore, MemoryPreferenceStore, PreferenceStore,
    PREFERENCE_KEY,
};
pub use registry::{LanguageConfig, LanguageId, LanguageRegistry};
pub use resolver::{LanguageResolver, Resolution, ResolutionSource};
pub use table::{materialize, ResolvedStringTable};
pub use validator::validate;
