//! Language type: a registered language resolved out of a registry.
//!
//! `LanguageId` is the compact handle the runtime passes around; `Language`
//! is the detached, `Copy` view handed to callers that want codes and names.

use crate::i18n::{LanguageId, LanguageRegistry};
use anyhow::{bail, Result};

/// A validated language.
///
/// Only constructible from a registry, so it always names a registered language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    id: LanguageId,
    code: &'static str,
    name: &'static str,
    native_name: &'static str,
    is_default: bool,
}

impl Language {
    /// Look up a language handle in `registry`.
    pub fn from_id(registry: &LanguageRegistry, id: LanguageId) -> Language {
        let config = registry.config(id);
        Language {
            id,
            code: config.code,
            name: config.name,
            native_name: config.native_name,
            is_default: config.is_default,
        }
    }

    /// Create a Language from a code, matched exactly then by primary subtag.
    ///
    /// Strict counterpart of resolution: a code that matches nothing is an
    /// error here instead of falling through to the next tier.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code matches an enabled language
    /// * `Err` if the code is not found or the language is disabled
    pub fn from_code(registry: &LanguageRegistry, code: &str) -> Result<Language> {
        if let Some(id) = registry.match_code(code) {
            return Ok(Self::from_id(registry, id));
        }

        if registry
            .list_all()
            .iter()
            .any(|lang| lang.code.eq_ignore_ascii_case(code.trim()))
        {
            bail!("Language '{}' is not enabled", code);
        }
        bail!("Unknown language code: '{}'", code)
    }

    /// Get the default language of `registry`.
    pub fn default_of(registry: &LanguageRegistry) -> Language {
        Self::from_id(registry, registry.default_language())
    }

    /// Registry handle.
    pub fn id(&self) -> LanguageId {
        self.id
    }

    /// Language code (e.g., "en", "fr").
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// English name of the language.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Native name of the language.
    pub fn native_name(&self) -> &'static str {
        self.native_name
    }

    /// Check if this is the registry's default language.
    pub fn is_default(&self) -> bool {
        self.is_default
    }
}
