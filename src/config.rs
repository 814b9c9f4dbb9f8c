use anyhow::{bail, Context, Result};
use chrono::Duration;
use std::path::PathBuf;

/// Directory name under the user's config directory.
const APP_DIR: &str = "i18n-strings";

/// File holding the persisted language preference.
const PREFERENCE_FILE: &str = "preferences.json";

/// Longest accepted preference lifetime, in days (100 years).
const MAX_PREFERENCE_TTL_DAYS: i64 = 36_500;

#[derive(Debug, Clone)]
pub struct Config {
    // Language selection
    pub preferred_language: Option<String>,
    pub ambient_locale: Option<String>,

    // Preference persistence
    pub persist_preference: bool,
    pub preference_file: Option<PathBuf>,
    pub preference_ttl: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let preference_ttl = non_empty_var("I18N_PREFERENCE_TTL_DAYS")
            .map(|days| parse_ttl_days(&days))
            .transpose()?;

        Ok(Self {
            preferred_language: non_empty_var("I18N_LANGUAGE"),
            ambient_locale: non_empty_var("I18N_AMBIENT_LOCALE"),

            // Persistence is on unless explicitly turned off
            persist_preference: non_empty_var("I18N_PERSIST")
                .map(|v| !matches!(v.to_ascii_lowercase().as_str(), "0" | "false" | "no" | "off"))
                .unwrap_or(true),
            preference_file: non_empty_var("I18N_PREFERENCE_FILE")
                .map(PathBuf::from)
                .or_else(default_preference_file),
            preference_ttl,
        })
    }
}

/// Parse a preference lifetime in whole days, between 1 and
/// `MAX_PREFERENCE_TTL_DAYS`.
fn parse_ttl_days(raw: &str) -> Result<Duration> {
    let days: i64 = raw
        .parse()
        .with_context(|| format!("I18N_PREFERENCE_TTL_DAYS is not a number: {}", raw))?;

    if !(1..=MAX_PREFERENCE_TTL_DAYS).contains(&days) {
        bail!(
            "I18N_PREFERENCE_TTL_DAYS must be between 1 and {}, got {}",
            MAX_PREFERENCE_TTL_DAYS,
            days
        );
    }

    Duration::try_days(days)
        .with_context(|| format!("I18N_PREFERENCE_TTL_DAYS out of range: {}", days))
}

/// `$XDG_CONFIG_HOME/i18n-strings/preferences.json`, else
/// `$HOME/.config/i18n-strings/preferences.json`.
///
/// `None` when neither variable is set (headless hosts), which disables
/// persistence.
fn default_preference_file() -> Option<PathBuf> {
    let base = non_empty_var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| non_empty_var("HOME").map(|home| PathBuf::from(home).join(".config")))?;

    Some(base.join(APP_DIR).join(PREFERENCE_FILE))
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
