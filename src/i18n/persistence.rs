//! Persisted language preference.
//!
//! A single named key holds the last resolved language code so the next cold
//! start can reuse it. Hosts without a usable store (headless runs, missing
//! home directory) get a store whose reads return nothing and whose writes do
//! nothing. Persistence problems are logged and never surface as errors.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

/// Name of the key holding the preferred language code.
pub const PREFERENCE_KEY: &str = "language";

/// Storage for the preferred language code.
pub trait PreferenceStore: Send + Sync {
    /// Capability check: can this store be read and written at all?
    /// Has no side effects.
    fn is_available(&self) -> bool;

    /// Read the stored language code, if any.
    fn load(&self) -> Option<String>;

    /// Store a language code. Failures are swallowed.
    fn save(&self, code: &str);
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Arc<T> {
    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn load(&self) -> Option<String> {
        (**self).load()
    }

    fn save(&self, code: &str) {
        (**self).save(code)
    }
}

// ==================== Disabled Store ====================

/// Store for hosts with no persistence mechanism.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledPreferenceStore;

impl PreferenceStore for DisabledPreferenceStore {
    fn is_available(&self) -> bool {
        false
    }

    fn load(&self) -> Option<String> {
        None
    }

    fn save(&self, _code: &str) {}
}

// ==================== Memory Store ====================

/// In-process store, for embedders that keep preferences elsewhere and for tests.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    value: Mutex<Option<String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a stored code already present.
    pub fn with_value(code: &str) -> Self {
        Self {
            value: Mutex::new(Some(code.to_string())),
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn is_available(&self) -> bool {
        true
    }

    fn load(&self) -> Option<String> {
        self.value.lock().ok().and_then(|value| value.clone())
    }

    fn save(&self, code: &str) {
        if let Ok(mut value) = self.value.lock() {
            *value = Some(code.to_string());
        }
    }
}

// ==================== File Store ====================

/// On-disk preference document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct PreferenceDocument {
    key: String,
    value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    expires_at: Option<DateTime<Utc>>,
}

/// Per-user preference stored as a small JSON document.
///
/// Entries have no expiry unless a time-to-live is configured.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
    ttl: Option<Duration>,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ttl: None,
        }
    }

    /// Expire saved preferences `ttl` after they are written.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Expiry for a document written now. An expiry past the representable
    /// range is dropped and the entry never expires.
    fn expiry_from_now(&self) -> Option<DateTime<Utc>> {
        let ttl = self.ttl?;
        let expires_at = Utc::now().checked_add_signed(ttl);
        if expires_at.is_none() {
            warn!("Preference lifetime {} is out of range, saving without expiry", ttl);
        }
        expires_at
    }

    fn read_document(&self) -> Option<PreferenceDocument> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!("Failed to read language preference {:?}: {}", self.path, e);
                return None;
            }
        };

        match serde_json::from_str::<PreferenceDocument>(&content) {
            Ok(doc) if doc.key == PREFERENCE_KEY => Some(doc),
            Ok(doc) => {
                warn!(
                    "Ignoring language preference {:?} with unexpected key '{}'",
                    self.path, doc.key
                );
                None
            }
            Err(e) => {
                warn!("Ignoring malformed language preference {:?}: {}", self.path, e);
                None
            }
        }
    }
}

impl PreferenceStore for FilePreferenceStore {
    /// True when the parent directory exists or could be created: the
    /// nearest existing ancestor is a directory. Touches nothing on disk.
    fn is_available(&self) -> bool {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => return true,
        };

        parent
            .ancestors()
            .find(|ancestor| ancestor.exists())
            .map_or(true, Path::is_dir)
    }

    fn load(&self) -> Option<String> {
        let doc = self.read_document()?;

        if let Some(expires_at) = doc.expires_at {
            if expires_at <= Utc::now() {
                debug!("Stored language preference expired at {}", expires_at);
                return None;
            }
        }

        Some(doc.value)
    }

    fn save(&self, code: &str) {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if let Err(e) = std::fs::create_dir_all(parent) {
                warn!("Failed to create preference directory {:?}: {}", parent, e);
                return;
            }
        }

        let doc = PreferenceDocument {
            key: PREFERENCE_KEY.to_string(),
            value: code.to_string(),
            expires_at: self.expiry_from_now(),
        };

        let json = match serde_json::to_string_pretty(&doc) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to encode language preference: {}", e);
                return;
            }
        };

        match std::fs::write(&self.path, json) {
            Ok(()) => debug!("Saved language preference '{}' to {:?}", code, self.path),
            Err(e) => warn!("Failed to save language preference {:?}: {}", self.path, e),
        }
    }
}
