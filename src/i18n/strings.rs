// ==================== Built-in Catalog Data ====================
//
// One record per identifier in `ids`, in ordinal order. New strings are
// appended at the end with the next ordinal.

use crate::i18n::catalog::TranslationRecord;
use crate::i18n::ids;

/// Wording for the catalog order error.
///
/// Referenced directly when the catalog fails validation, since the table
/// built from the catalog cannot be trusted at that point.
/// Placeholders: {position}, {found}, {text}
pub const CATALOG_ORDER_MISMATCH: TranslationRecord = TranslationRecord {
    id: ids::CATALOG_ORDER_MISMATCH,
    en: "String catalog is out of order at position {position}: found entry {found} (\"{text}\")",
    fr: "Le catalogue de chaînes est désordonné à la position {position} : entrée {found} trouvée (« {text} »)",
    de: "Der Zeichenkettenkatalog ist an Position {position} nicht in Ordnung: Eintrag {found} gefunden („{text}“)",
};

pub const RECORDS: [TranslationRecord; ids::COUNT] = [
    TranslationRecord {
        id: ids::APP_TITLE,
        en: "String Catalog",
        fr: "Catalogue de chaînes",
        de: "Zeichenkettenkatalog",
    },
    TranslationRecord {
        id: ids::OK,
        en: "OK",
        fr: "OK",
        de: "OK",
    },
    TranslationRecord {
        id: ids::CANCEL,
        en: "Cancel",
        fr: "Annuler",
        de: "Abbrechen",
    },
    TranslationRecord {
        id: ids::SAVE,
        en: "Save",
        fr: "Enregistrer",
        de: "Speichern",
    },
    TranslationRecord {
        id: ids::DELETE,
        en: "Delete",
        fr: "Supprimer",
        de: "Löschen",
    },
    TranslationRecord {
        id: ids::LANGUAGE_LABEL,
        en: "Language",
        fr: "Langue",
        de: "Sprache",
    },
    TranslationRecord {
        id: ids::LOADING,
        en: "Loading…",
        fr: "Chargement…",
        de: "Wird geladen…",
    },
    TranslationRecord {
        id: ids::NOT_FOUND,
        en: "Not found",
        fr: "Introuvable",
        de: "Nicht gefunden",
    },
    TranslationRecord {
        id: ids::UNSAVED_CHANGES,
        en: "You have unsaved changes.",
        fr: "Vous avez des modifications non enregistrées.",
        de: "Sie haben ungespeicherte Änderungen.",
    },
    TranslationRecord {
        id: ids::LANGUAGE_CHANGED,
        en: "Language changed.",
        fr: "Langue modifiée.",
        de: "Sprache geändert.",
    },
    TranslationRecord {
        id: ids::SEARCH_PLACEHOLDER,
        en: "Search…",
        fr: "Rechercher…",
        de: "Suchen…",
    },
    TranslationRecord {
        id: ids::CONFIRM_DELETE,
        en: "Delete this item permanently?",
        fr: "Supprimer définitivement cet élément ?",
        de: "Dieses Element endgültig löschen?",
    },
    CATALOG_ORDER_MISMATCH,
];
