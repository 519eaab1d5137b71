//! Catalog payload parsing.
//!
//! Turns the raw result of the catalog request into a [`Catalog`]. The two
//! failure classes render differently: a fetch failure shows an apology, while
//! a well-formed but unusable payload shows the "no brands" placeholder.

use crate::domain::{Result, ShowcaseError, VendorRecord};

/// Outcome of a successful catalog request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Catalog {
    /// A non-empty list of vendor records in source order.
    Vendors(Vec<VendorRecord>),
    /// The payload was valid JSON but not a non-empty array.
    Empty,
}

impl Catalog {
    /// Records carried by the catalog (empty for [`Catalog::Empty`]).
    #[must_use]
    pub fn records(&self) -> &[VendorRecord] {
        match self {
            Self::Vendors(records) => records,
            Self::Empty => &[],
        }
    }
}

/// Returns `true` for 2xx statuses.
#[must_use]
pub const fn is_success(status: u16) -> bool {
    status >= 200 && status < 300
}

/// Parses a catalog response.
///
/// # Errors
///
/// Returns [`ShowcaseError::Fetch`] when the status is not 2xx or the body is
/// not JSON. A JSON body of the wrong shape is not an error: it yields
/// [`Catalog::Empty`].
pub fn parse_response(status: u16, body: &[u8]) -> Result<Catalog> {
    let _span = tracing::debug_span!("parse_catalog", status = status, body_len = body.len()).entered();

    if !is_success(status) {
        return Err(ShowcaseError::Fetch(format!("HTTP {status}")));
    }

    let value: serde_json::Value = serde_json::from_slice(body)
        .map_err(|e| ShowcaseError::Fetch(format!("invalid JSON: {e}")))?;

    match parse_document(&value) {
        Ok(records) => {
            tracing::debug!(vendor_count = records.len(), "catalog parsed");
            Ok(Catalog::Vendors(records))
        }
        Err(e) => {
            tracing::warn!(error = %e, "catalog payload unusable, showing placeholder");
            Ok(Catalog::Empty)
        }
    }
}

/// Extracts vendor records from an already-parsed document.
///
/// # Errors
///
/// Returns [`ShowcaseError::MalformedPayload`] unless the document is a
/// non-empty array.
pub fn parse_document(value: &serde_json::Value) -> Result<Vec<VendorRecord>> {
    let items = value
        .as_array()
        .ok_or_else(|| ShowcaseError::MalformedPayload("expected a JSON array".to_string()))?;

    if items.is_empty() {
        return Err(ShowcaseError::MalformedPayload("empty vendor list".to_string()));
    }

    Ok(items.iter().map(VendorRecord::from_value).collect())
}
