//! String identifiers: the dense ordinal domain of every user-visible string.
//!
//! Identifiers are append-only. Once an ordinal is published it is never
//! reused or reordered, because callers hold these values as constants.
//! A new string gets the next free ordinal and `COUNT` moves up by one.

use std::fmt;

/// Stable, zero-based ordinal naming one string concept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StringId(u16);

impl StringId {
    /// Create an identifier from its ordinal.
    pub const fn new(ordinal: u16) -> Self {
        Self(ordinal)
    }

    /// Identifier for a table index.
    ///
    /// # Returns
    /// * `None` if `index` does not fit the ordinal range
    pub fn from_index(index: usize) -> Option<Self> {
        u16::try_from(index).ok().map(Self)
    }

    /// The ordinal as a table index.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Parse a decimal ordinal and check it against the identifier count.
    ///
    /// # Returns
    /// * `Some(StringId)` if `text` is a decimal ordinal below `count`
    /// * `None` otherwise
    pub fn parse(text: &str, count: usize) -> Option<Self> {
        let ordinal: u16 = text.trim().parse().ok()?;
        (usize::from(ordinal) < count).then_some(Self(ordinal))
    }
}

impl fmt::Display for StringId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ==================== Built-in Identifiers ====================

pub const APP_TITLE: StringId = StringId::new(0);
pub const OK: StringId = StringId::new(1);
pub const CANCEL: StringId = StringId::new(2);
pub const SAVE: StringId = StringId::new(3);
pub const DELETE: StringId = StringId::new(4);
pub const LANGUAGE_LABEL: StringId = StringId::new(5);
pub const LOADING: StringId = StringId::new(6);
pub const NOT_FOUND: StringId = StringId::new(7);
pub const UNSAVED_CHANGES: StringId = StringId::new(8);
pub const LANGUAGE_CHANGED: StringId = StringId::new(9);
pub const SEARCH_PLACEHOLDER: StringId = StringId::new(10);
pub const CONFIRM_DELETE: StringId = StringId::new(11);
pub const CATALOG_ORDER_MISMATCH: StringId = StringId::new(12);

/// Number of built-in identifiers (N).
pub const COUNT: usize = 13;
