//! The localizer: owns the active language and its resolved string table.
//!
//! Lifecycle: `Localizer::builder()...initialise(code)` validates the catalog,
//! resolves a language and materialises its table. A value of type
//! `Localizer` only exists once that has succeeded, so accessors can never run
//! against a missing table. `set_language` repeats resolution and
//! materialisation (never validation) and publishes the new table with an
//! atomic pointer swap; readers see either the old table or the new one.
//! Writers are serialised, so the persisted code always matches the table
//! published last.

use crate::config::Config;
use crate::i18n::catalog::Catalog;
use crate::i18n::error::CatalogError;
use crate::i18n::ids::StringId;
use crate::i18n::locale::detect_ambient_locale;
use crate::i18n::metrics::LocalizerMetrics;
use crate::i18n::persistence::{DisabledPreferenceStore, FilePreferenceStore, PreferenceStore};
use crate::i18n::resolver::{LanguageResolver, Resolution};
use crate::i18n::table::{materialize, ResolvedStringTable};
use crate::i18n::validator::validate;
use crate::i18n::{Language, LanguageRegistry};
use arc_swap::ArcSwap;
use std::borrow::Cow;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, info};

/// Inputs for a [`Localizer`].
pub struct LocalizerBuilder {
    registry: LanguageRegistry,
    catalog: Arc<Catalog>,
    identifier_count: usize,
    store: Box<dyn PreferenceStore>,
    ambient: Option<String>,
}

impl LocalizerBuilder {
    fn new() -> Self {
        Self {
            registry: LanguageRegistry::get().clone(),
            catalog: Catalog::builtin(),
            identifier_count: Catalog::builtin_count(),
            store: Box::new(DisabledPreferenceStore),
            ambient: None,
        }
    }

    /// Use a custom language registry.
    pub fn registry(mut self, registry: LanguageRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Use a custom catalog covering `identifier_count` identifiers.
    pub fn catalog(mut self, catalog: Arc<Catalog>, identifier_count: usize) -> Self {
        self.catalog = catalog;
        self.identifier_count = identifier_count;
        self
    }

    /// Where the preferred language is persisted.
    pub fn preference_store(mut self, store: impl PreferenceStore + 'static) -> Self {
        self.store = Box::new(store);
        self
    }

    /// Ambient locale supplied by the host.
    pub fn ambient_locale(mut self, code: Option<String>) -> Self {
        self.ambient = code;
        self
    }

    /// Validate, resolve and materialise.
    ///
    /// # Returns
    /// * `Ok(Localizer)` ready to serve strings
    /// * `Err(CatalogError)` if the catalog does not match the identifier space;
    ///   this is fatal and should end the process
    pub fn initialise(self, preferred: Option<&str>) -> Result<Localizer, CatalogError> {
        validate(&self.catalog, self.identifier_count)?;

        let metrics = LocalizerMetrics::new();
        let default_table = materialize(
            &self.catalog,
            &self.registry,
            self.registry.default_language(),
        );
        metrics.record_table_built(default_table.placeholders());

        let resolution = LanguageResolver::new(&self.registry).resolve_and_remember(
            self.store.as_ref(),
            preferred,
            self.ambient.as_deref(),
        );
        metrics.record_resolution(resolution.source);

        let table = materialize(&self.catalog, &self.registry, resolution.language);
        metrics.record_table_built(table.placeholders());

        info!(
            "Localizer ready: language '{}' ({}), {} strings",
            self.registry.config(resolution.language).code,
            resolution.source,
            table.len()
        );

        Ok(Localizer {
            registry: self.registry,
            catalog: self.catalog,
            store: self.store,
            ambient: self.ambient,
            default_table: Arc::new(default_table),
            active: ArcSwap::from_pointee(table),
            writer: Mutex::new(()),
            metrics,
        })
    }
}

/// Serves resolved strings for the active language.
pub struct Localizer {
    registry: LanguageRegistry,
    catalog: Arc<Catalog>,
    store: Box<dyn PreferenceStore>,
    ambient: Option<String>,
    default_table: Arc<ResolvedStringTable>,
    active: ArcSwap<ResolvedStringTable>,
    /// Held across resolve, persist and swap in `set_language`; readers never take it
    writer: Mutex<()>,
    metrics: LocalizerMetrics,
}

impl Localizer {
    /// Start configuring a localizer over the built-in registry and catalog.
    pub fn builder() -> LocalizerBuilder {
        LocalizerBuilder::new()
    }

    /// Build from application configuration.
    ///
    /// Wires the file preference store (when persistence is enabled and a
    /// path is known), the ambient locale (configured override, else the
    /// process environment) and the preferred language.
    pub fn from_config(config: &Config) -> Result<Localizer, CatalogError> {
        let ambient = config
            .ambient_locale
            .clone()
            .or_else(detect_ambient_locale);

        let builder = Localizer::builder().ambient_locale(ambient);
        let builder = match (&config.preference_file, config.persist_preference) {
            (Some(path), true) => {
                let store = FilePreferenceStore::new(path);
                match config.preference_ttl {
                    Some(ttl) => builder.preference_store(store.with_ttl(ttl)),
                    None => builder.preference_store(store),
                }
            }
            _ => {
                debug!("Language preference persistence disabled");
                builder
            }
        };

        builder.initialise(config.preferred_language.as_deref())
    }

    /// Switch the active language.
    ///
    /// Resolves `code` with the same precedence as initialisation, persists
    /// the result, builds a complete table and swaps it in.
    pub fn set_language(&self, code: Option<&str>) -> Language {
        // The guard protects no data, so a poisoned lock is still usable
        let _writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);

        let resolution = self.resolve(code);
        let table = materialize(&self.catalog, &self.registry, resolution.language);
        self.metrics.record_table_built(table.placeholders());
        self.active.store(Arc::new(table));
        self.metrics.record_language_change();

        let language = Language::from_id(&self.registry, resolution.language);
        info!("Language changed to '{}' ({})", language.code(), resolution.source);
        language
    }

    fn resolve(&self, explicit: Option<&str>) -> Resolution {
        let resolution = LanguageResolver::new(&self.registry).resolve_and_remember(
            self.store.as_ref(),
            explicit,
            self.ambient.as_deref(),
        );
        self.metrics.record_resolution(resolution.source);
        resolution
    }

    /// Text for `id` in the active language.
    ///
    /// # Panics
    /// Panics if `id` is outside the identifier space.
    pub fn get_string(&self, id: StringId) -> &'static str {
        self.active.load().get(id)
    }

    /// Text for `id` in the active language followed by the default-language
    /// text, for bilingual review: `"{active}[ {default}]"`.
    ///
    /// Under the default language this is the same as [`Self::get_string`].
    pub fn get_string_plus_english(&self, id: StringId) -> Cow<'static, str> {
        let table = self.active.load();
        let resolved = table.get(id);

        if table.language() == self.registry.default_language() {
            Cow::Borrowed(resolved)
        } else {
            Cow::Owned(format!("{}[ {}]", resolved, self.default_table.get(id)))
        }
    }

    /// The currently active language.
    pub fn active_language(&self) -> Language {
        Language::from_id(&self.registry, self.active.load().language())
    }

    /// Snapshot of the active table.
    pub fn table(&self) -> Arc<ResolvedStringTable> {
        self.active.load_full()
    }

    /// Number of identifiers served.
    pub fn len(&self) -> usize {
        self.default_table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.default_table.is_empty()
    }

    pub fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }

    pub fn metrics(&self) -> &LocalizerMetrics {
        &self.metrics
    }
}
