//! Language registry: Single source of truth for all supported languages.
//!
//! This module provides the registry of languages the runtime can resolve to.
//! The built-in registry is a singleton behind `OnceLock`; custom registries
//! can be built with [`LanguageRegistry::new`] for embedders and tests.

use crate::i18n::error::RegistryError;
use crate::i18n::locale::primary_subtag;
use std::sync::OnceLock;

/// Configuration for a supported language.
///
/// Contains all metadata for a specific language, including its code, names,
/// enabled status, and whether it's the default language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageConfig {
    /// Language code (e.g., "en", "fr", "pt-BR")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "French")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "Français")
    pub native_name: &'static str,

    /// Whether this is the default language (exactly one must be true)
    pub is_default: bool,

    /// Whether this language can be selected
    pub enabled: bool,
}

/// Opaque handle to a language in a [`LanguageRegistry`].
///
/// Only the registry hands these out, so a `LanguageId` always refers to a
/// registered language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LanguageId(usize);

impl LanguageId {
    /// Position of the language in its registry.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Registry of supported languages.
///
/// Immutable after construction.
#[derive(Debug, Clone)]
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
    default: LanguageId,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Build a registry from a list of languages.
    ///
    /// # Returns
    /// * `Ok(LanguageRegistry)` if there is exactly one enabled default and no
    ///   duplicate codes
    /// * `Err(RegistryError)` describing the first problem found
    pub fn new(languages: Vec<LanguageConfig>) -> Result<Self, RegistryError> {
        if languages.is_empty() {
            return Err(RegistryError::Empty);
        }

        for (i, lang) in languages.iter().enumerate() {
            if languages[..i]
                .iter()
                .any(|other| other.code.eq_ignore_ascii_case(lang.code))
            {
                return Err(RegistryError::DuplicateCode(lang.code));
            }
        }

        let defaults: Vec<usize> = languages
            .iter()
            .enumerate()
            .filter(|(_, lang)| lang.is_default)
            .map(|(i, _)| i)
            .collect();

        let default = match defaults.as_slice() {
            [] => return Err(RegistryError::NoDefault),
            [single] => *single,
            _ => {
                return Err(RegistryError::MultipleDefaults(
                    defaults.iter().map(|&i| languages[i].code).collect(),
                ))
            }
        };

        if !languages[default].enabled {
            return Err(RegistryError::DefaultDisabled(languages[default].code));
        }

        Ok(Self {
            languages,
            default: LanguageId(default),
        })
    }

    /// Get the global built-in language registry instance.
    ///
    /// This method initializes the registry on first call and returns a reference
    /// to the singleton instance on subsequent calls.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| {
            let languages = default_languages();
            let default = languages
                .iter()
                .position(|lang| lang.is_default)
                .unwrap_or(0);
            LanguageRegistry {
                languages,
                default: LanguageId(default),
            }
        })
    }

    /// Get the configuration behind a language handle.
    pub fn config(&self, id: LanguageId) -> &LanguageConfig {
        &self.languages[id.0]
    }

    /// Get the default language handle.
    pub fn default_language(&self) -> LanguageId {
        self.default
    }

    /// Get the default language configuration.
    pub fn default_config(&self) -> &LanguageConfig {
        self.config(self.default)
    }

    /// Get an enabled language by exact code (ASCII case-insensitive).
    ///
    /// # Returns
    /// * `Some(LanguageId)` if an enabled language has exactly this code
    /// * `None` otherwise
    pub fn get_by_code(&self, code: &str) -> Option<LanguageId> {
        let code = code.trim();
        if code.is_empty() {
            return None;
        }

        self.languages
            .iter()
            .position(|lang| lang.enabled && lang.code.eq_ignore_ascii_case(code))
            .map(LanguageId)
    }

    /// Get an enabled language by the primary subtag of `code`.
    ///
    /// `"en-NZ"` looks up `"en"`.
    pub fn get_by_primary_subtag(&self, code: &str) -> Option<LanguageId> {
        self.get_by_code(primary_subtag(code.trim()))
    }

    /// Match a code: exact first, then primary subtag.
    pub fn match_code(&self, code: &str) -> Option<LanguageId> {
        self.get_by_code(code)
            .or_else(|| self.get_by_primary_subtag(code))
    }

    /// Get all enabled languages.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// Get all languages (including disabled ones).
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Check if a language code is registered and enabled.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }
}

/// Built-in language configurations.
///
/// English is the default. Every language listed here has a text column in
/// the built-in catalog.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            is_default: true,
            enabled: true,
        },
        LanguageConfig {
            code: "fr",
            name: "French",
            native_name: "Français",
            is_default: false,
            enabled: true,
        },
        LanguageConfig {
            code: "de",
            name: "German",
            native_name: "Deutsch",
            is_default: false,
            enabled: true,
        },
    ]
}
