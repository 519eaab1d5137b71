//! Category tokens and the filter vocabulary.
//!
//! The filter vocabulary is the set of distinct, trimmed category labels found
//! across all vendor records, ordered the way a browser's `localeCompare` would
//! order them. The synthetic [`FilterToken::All`] sentinel always leads the
//! toolbar and is never derived from data.

use super::vendor::VendorRecord;
use std::cmp::Ordering;
use std::fmt;

/// A filter selection: the `All` sentinel or one category token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FilterToken {
    /// Matches every card.
    All,
    /// Matches cards carrying this category (case-insensitive).
    Category(String),
}

impl FilterToken {
    /// Toolbar label for this token.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::All => "All",
            Self::Category(token) => token,
        }
    }

    /// Tests a card's normalized category set against this token.
    ///
    /// `normalized` must already be trimmed and lowercased.
    #[must_use]
    pub fn matches(&self, normalized: &[String]) -> bool {
        match self {
            Self::All => true,
            Self::Category(token) => {
                let needle = normalize(token);
                normalized.iter().any(|c| *c == needle)
            }
        }
    }
}

impl Default for FilterToken {
    fn default() -> Self {
        Self::All
    }
}

impl fmt::Display for FilterToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Category(token) => f.write_str(token),
        }
    }
}

/// Trims and lowercases a category label for matching.
#[must_use]
pub fn normalize(label: &str) -> String {
    label.trim().to_lowercase()
}

/// Case-sensitive, locale-like string ordering.
///
/// Letters compare case-insensitively first; exact ties in that order put
/// lowercase before uppercase (`"decor" < "Decor" < "lighting"`), matching the
/// default collation of `localeCompare` rather than raw byte order.
#[must_use]
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

/// Derives the sorted, deduplicated category vocabulary from the records.
///
/// The `All` sentinel is not included; callers prepend it.
#[must_use]
pub fn vocabulary(records: &[VendorRecord]) -> Vec<String> {
    let mut tokens: Vec<String> = records
        .iter()
        .flat_map(VendorRecord::category_tokens)
        .map(str::to_string)
        .collect();

    tokens.sort_by(|a, b| locale_cmp(a, b));
    tokens.dedup();
    tokens
}
