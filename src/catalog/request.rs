//! Web request correlation.
//!
//! Zellij reports every web request through the same `WebRequestResult` event,
//! carrying back the string map passed as context when the request was made.
//! [`RequestKind`] is encoded into that map so the plugin can route a result to
//! the catalog loader or to a specific card's logo.

use std::collections::BTreeMap;

const KIND_KEY: &str = "kind";
const CARD_KEY: &str = "card";
const GENERATION_KEY: &str = "generation";

/// What a web request was issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// The vendor catalog document.
    Catalog,
    /// The logo image of one card.
    Image {
        /// Card id (source index of the vendor record).
        card: usize,
    },
}

impl RequestKind {
    /// Encodes the request kind into a Zellij request context.
    ///
    /// `generation` identifies the page load that issued the request so
    /// results arriving after a reload can be dropped.
    #[must_use]
    pub fn to_context(self, generation: u32) -> BTreeMap<String, String> {
        let mut context = BTreeMap::new();
        context.insert(GENERATION_KEY.to_string(), generation.to_string());
        match self {
            Self::Catalog => {
                context.insert(KIND_KEY.to_string(), "catalog".to_string());
            }
            Self::Image { card } => {
                context.insert(KIND_KEY.to_string(), "image".to_string());
                context.insert(CARD_KEY.to_string(), card.to_string());
            }
        }
        context
    }

    /// Decodes a request context, returning the kind and generation.
    ///
    /// Returns `None` for contexts this plugin did not produce.
    #[must_use]
    pub fn from_context(context: &BTreeMap<String, String>) -> Option<(Self, u32)> {
        let generation = context.get(GENERATION_KEY)?.parse().ok()?;
        let kind = match context.get(KIND_KEY)?.as_str() {
            "catalog" => Self::Catalog,
            "image" => Self::Image {
                card: context.get(CARD_KEY)?.parse().ok()?,
            },
            _ => return None,
        };
        Some((kind, generation))
    }
}
