//! Ambient locale detection and locale code normalisation.
//!
//! Host environments spell locales in several ways (`en_NZ.UTF-8`,
//! `de_DE@euro`, `fr-CA`). Everything is normalised to a hyphenated
//! `language[-REGION]` code before it reaches the registry.

use regex::Regex;
use std::sync::OnceLock;

/// POSIX locale variables, highest precedence first.
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

static LOCALE_REGEX: OnceLock<Regex> = OnceLock::new();

/// Return the portion of `code` before its first `-`.
///
/// `"en-NZ"` yields `"en"`; a code without a region is returned unchanged.
pub fn primary_subtag(code: &str) -> &str {
    code.split('-').next().unwrap_or(code)
}

/// Normalise a host locale string into a `language[-REGION]` code.
///
/// Strips encodings (`.UTF-8`) and modifiers (`@euro`), turns `_` into `-`,
/// lowercases the language and uppercases a two-letter region.
///
/// # Returns
/// * `Some(code)` for a well-formed locale
/// * `None` for empty input, `C`/`POSIX`, or anything unparseable
pub fn normalize_locale_code(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() || raw == "C" || raw == "POSIX" || raw.starts_with("C.") {
        return None;
    }

    let regex = LOCALE_REGEX.get_or_init(|| {
        Regex::new(r"^([A-Za-z]{2,3})(?:[-_]([A-Za-z0-9]{2,8}))?(?:\.[^@]*)?(?:@.*)?$").unwrap()
    });

    let caps = regex.captures(raw)?;
    let language = caps.get(1)?.as_str().to_ascii_lowercase();

    match caps.get(2) {
        Some(region) if region.as_str().len() == 2 => Some(format!(
            "{}-{}",
            language,
            region.as_str().to_ascii_uppercase()
        )),
        Some(region) => Some(format!("{}-{}", language, region.as_str())),
        None => Some(language),
    }
}

/// Detect the ambient locale from the process environment.
///
/// Reads `LC_ALL`, `LC_MESSAGES`, then `LANG`, skipping unset, empty and
/// unparseable values.
pub fn detect_ambient_locale() -> Option<String> {
    LOCALE_VARS.iter().find_map(|var| {
        std::env::var(var)
            .ok()
            .and_then(|value| normalize_locale_code(&value))
    })
}
