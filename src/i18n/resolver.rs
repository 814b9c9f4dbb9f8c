//! Language resolution.
//!
//! Picks the active language from up to three candidate codes, first match wins:
//!
//! 1. explicit code (caller request)
//! 2. persisted code (stored preference)
//! 3. ambient code (host locale)
//! 4. the registry default
//!
//! Each candidate is tried as an exact code, then by primary subtag. A code
//! that matches nothing is not an error; resolution moves to the next tier.

use crate::i18n::persistence::PreferenceStore;
use crate::i18n::{LanguageId, LanguageRegistry};
use std::fmt;
use tracing::debug;

/// Which precedence tier decided a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolutionSource {
    Explicit,
    Persisted,
    Ambient,
    Default,
}

impl ResolutionSource {
    pub(crate) fn index(self) -> usize {
        match self {
            ResolutionSource::Explicit => 0,
            ResolutionSource::Persisted => 1,
            ResolutionSource::Ambient => 2,
            ResolutionSource::Default => 3,
        }
    }
}

impl fmt::Display for ResolutionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResolutionSource::Explicit => "explicit",
            ResolutionSource::Persisted => "persisted",
            ResolutionSource::Ambient => "ambient",
            ResolutionSource::Default => "default",
        };
        f.write_str(name)
    }
}

/// Outcome of a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub language: LanguageId,
    pub source: ResolutionSource,
}

/// Resolves language codes against a registry.
#[derive(Debug, Clone, Copy)]
pub struct LanguageResolver<'a> {
    registry: &'a LanguageRegistry,
}

impl<'a> LanguageResolver<'a> {
    pub fn new(registry: &'a LanguageRegistry) -> Self {
        Self { registry }
    }

    /// Resolve the active language from the three candidate codes.
    ///
    /// Pure: no persistence is touched.
    pub fn resolve(
        &self,
        explicit: Option<&str>,
        persisted: Option<&str>,
        ambient: Option<&str>,
    ) -> Resolution {
        let tiers = [
            (explicit, ResolutionSource::Explicit),
            (persisted, ResolutionSource::Persisted),
            (ambient, ResolutionSource::Ambient),
        ];

        for (code, source) in tiers {
            let Some(code) = code else { continue };

            match self.registry.match_code(code) {
                Some(language) => {
                    debug!(
                        "Resolved '{}' from {} code '{}'",
                        self.registry.config(language).code,
                        source,
                        code
                    );
                    return Resolution { language, source };
                }
                None => debug!("No registered language matches {} code '{}'", source, code),
            }
        }

        let language = self.registry.default_language();
        debug!(
            "Falling back to default language '{}'",
            self.registry.config(language).code
        );
        Resolution {
            language,
            source: ResolutionSource::Default,
        }
    }

    /// Resolve with the persisted code read from `store`, then write the
    /// resolved code back.
    ///
    /// An unavailable store is skipped on both read and write.
    pub fn resolve_and_remember(
        &self,
        store: &dyn PreferenceStore,
        explicit: Option<&str>,
        ambient: Option<&str>,
    ) -> Resolution {
        let available = store.is_available();
        let persisted = if available { store.load() } else { None };

        let resolution = self.resolve(explicit, persisted.as_deref(), ambient);

        if available {
            let code = self.registry.config(resolution.language).code;
            if persisted.as_deref() != Some(code) {
                store.save(code);
            }
        }

        resolution
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::persistence::{DisabledPreferenceStore, MemoryPreferenceStore};

    fn code_of(resolution: Resolution) -> &'static str {
        LanguageRegistry::get().config(resolution.language).code
    }

    fn resolver() -> LanguageResolver<'static> {
        LanguageResolver::new(LanguageRegistry::get())
    }

    // ==================== Precedence Tests ====================

    #[test]
    fn test_explicit_wins_over_persisted_and_ambient() {
        let resolution = resolver().resolve(Some("fr"), Some("en"), Some("de"));
        assert_eq!(code_of(resolution), "fr");
        assert_eq!(resolution.source, ResolutionSource::Explicit);
    }

    #[test]
    fn test_persisted_exact_beats_ambient() {
        let resolution = resolver().resolve(None, Some("en"), Some("fr-FR"));
        assert_eq!(code_of(resolution), "en");
        assert_eq!(resolution.source, ResolutionSource::Persisted);
    }

    #[test]
    fn test_ambient_primary_subtag_match() {
        let resolution = resolver().resolve(None, None, Some("en-NZ"));
        assert_eq!(code_of(resolution), "en");
        assert_eq!(resolution.source, ResolutionSource::Ambient);
    }

    #[test]
    fn test_no_match_anywhere_uses_default() {
        let resolution = resolver().resolve(None, None, Some("xx-YY"));
        assert_eq!(resolution.language, LanguageRegistry::get().default_language());
        assert_eq!(resolution.source, ResolutionSource::Default);
    }

    #[test]
    fn test_nothing_given_uses_default() {
        let resolution = resolver().resolve(None, None, None);
        assert_eq!(code_of(resolution), "en");
        assert_eq!(resolution.source, ResolutionSource::Default);
    }

    #[test]
    fn test_unmatched_explicit_falls_through() {
        let resolution = resolver().resolve(Some("xx"), Some("de"), Some("fr"));
        assert_eq!(code_of(resolution), "de");
        assert_eq!(resolution.source, ResolutionSource::Persisted);
    }

    #[test]
    fn test_explicit_primary_subtag_match() {
        let resolution = resolver().resolve(Some("de-AT"), None, None);
        assert_eq!(code_of(resolution), "de");
        assert_eq!(resolution.source, ResolutionSource::Explicit);
    }

    #[test]
    fn test_empty_codes_fall_through() {
        let resolution = resolver().resolve(Some(""), Some("  "), Some("fr"));
        assert_eq!(code_of(resolution), "fr");
        assert_eq!(resolution.source, ResolutionSource::Ambient);
    }

    // ==================== Persistence Tests ====================

    #[test]
    fn test_resolve_and_remember_writes_back() {
        let store = MemoryPreferenceStore::new();
        let resolution = resolver().resolve_and_remember(&store, Some("de-CH"), None);

        assert_eq!(code_of(resolution), "de");
        assert_eq!(store.load(), Some("de".to_string()));
    }

    #[test]
    fn test_resolve_and_remember_reads_persisted() {
        let store = MemoryPreferenceStore::with_value("fr");
        let resolution = resolver().resolve_and_remember(&store, None, Some("de"));

        assert_eq!(code_of(resolution), "fr");
        assert_eq!(resolution.source, ResolutionSource::Persisted);
    }

    #[test]
    fn test_resolve_and_remember_replaces_unmatched_persisted() {
        let store = MemoryPreferenceStore::with_value("xx");
        let resolution = resolver().resolve_and_remember(&store, None, None);

        assert_eq!(resolution.source, ResolutionSource::Default);
        assert_eq!(store.load(), Some("en".to_string()));
    }

    #[test]
    fn test_resolve_and_remember_without_store() {
        let resolution = resolver().resolve_and_remember(&DisabledPreferenceStore, None, Some("fr"));
        assert_eq!(code_of(resolution), "fr");
        assert_eq!(resolution.source, ResolutionSource::Ambient);
    }

    #[test]
    fn test_source_display() {
        assert_eq!(ResolutionSource::Persisted.to_string(), "persisted");
        assert_eq!(ResolutionSource::Default.to_string(), "default");
    }
}
