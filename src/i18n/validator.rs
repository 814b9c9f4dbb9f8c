//! Catalog order validation.
//!
//! The table materialiser indexes records by declaration position, so the
//! catalog must list identifier `i` at position `i` for every `i` in `[0, N)`.
//! This runs once at startup and any failure is fatal.

use crate::i18n::catalog::{Catalog, TranslationRecord};
use crate::i18n::error::CatalogError;
use crate::i18n::strings::CATALOG_ORDER_MISMATCH;
use tracing::{debug, error};

/// Check that catalog declaration order equals identifier ordinal order.
///
/// # Arguments
/// * `catalog` - The catalog to check
/// * `identifier_count` - Number of identifiers (N)
///
/// # Returns
/// * `Ok(())` if `catalog[i].id == i` for every position and the catalog has
///   exactly N records
/// * `Err(CatalogError::OrderMismatch)` for the first offending position
/// * `Err(CatalogError::CountMismatch)` if the order is fine but the lengths differ
pub fn validate(catalog: &Catalog, identifier_count: usize) -> Result<(), CatalogError> {
    for (position, record) in catalog.records().iter().enumerate() {
        if record.id.index() != position {
            let err = CatalogError::OrderMismatch {
                position,
                found: record.id.index(),
                message: order_mismatch_message(position, record),
            };
            error!("{}", err);
            return Err(err);
        }
    }

    if catalog.len() != identifier_count {
        let err = CatalogError::CountMismatch {
            records: catalog.len(),
            expected: identifier_count,
        };
        error!("{}", err);
        return Err(err);
    }

    debug!("String catalog order verified for {} identifiers", identifier_count);
    Ok(())
}

/// Word the order error from the fixed English record.
fn order_mismatch_message(position: usize, record: &TranslationRecord) -> String {
    CATALOG_ORDER_MISMATCH
        .en
        .replace("{position}", &position.to_string())
        .replace("{found}", &record.id.to_string())
        .replace("{text}", record.en)
}
