//! Rendered vendor cards.
//!
//! A [`Card`] is built once per vendor record and carries everything filtering,
//! sorting and drawing need, so the record list is never consulted again after
//! render time.

use super::surface::CardId;
use crate::domain::category::normalize;
use crate::domain::VendorRecord;

/// Per-card filter state, recomputed on every filter change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardState {
    pub matches_active_filter: bool,
    /// Always equal to `matches_active_filter`: non-matching cards stay in the
    /// flow order but are hidden.
    pub visible: bool,
}

impl Default for CardState {
    fn default() -> Self {
        Self {
            matches_active_filter: true,
            visible: true,
        }
    }
}

/// State of a card's logo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSlot {
    /// Requested (or about to be) and not yet resolved.
    Pending,
    /// The logo loaded; the card shows it.
    Loaded,
    /// The logo failed; the image is hidden and this text badge replaces it.
    Fallback { badge: String },
}

/// One rendered vendor card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: CardId,
    /// Display label, also used as the fallback badge text.
    pub label: String,
    /// Lowercased, trimmed name used for ordering.
    pub sort_key: String,
    /// Lowercased, trimmed category tokens used for matching.
    pub categories: Vec<String>,
    /// Link target, `#` when the vendor has no website.
    pub href: String,
    /// Logo source as given in the record, if any.
    pub image_src: Option<String>,
    /// Accessible description of the logo.
    pub alt: String,
    pub image: ImageSlot,
    pub state: CardState,
}

impl Card {
    #[must_use]
    pub fn from_record(id: CardId, record: &VendorRecord) -> Self {
        let label = record.label();
        Self {
            id,
            alt: format!("{label} logo"),
            sort_key: record.sort_key(),
            categories: record.category_tokens().map(normalize).collect(),
            href: record.href(),
            image_src: record.image_source().map(str::to_string),
            image: ImageSlot::Pending,
            state: CardState::default(),
            label,
        }
    }

    /// Whether the image element is hidden (a fallback badge is showing).
    #[must_use]
    pub const fn image_hidden(&self) -> bool {
        matches!(self.image, ImageSlot::Fallback { .. })
    }

    /// Fallback badges present on the card: zero or one.
    #[must_use]
    pub fn fallback_badges(&self) -> Vec<&str> {
        match &self.image {
            ImageSlot::Fallback { badge } => vec![badge.as_str()],
            _ => Vec::new(),
        }
    }

    /// Reacts to the logo's error event.
    ///
    /// Hides the image and inserts the name badge the first time; later error
    /// events for the same card change nothing. Returns whether the card
    /// changed.
    pub fn install_fallback(&mut self) -> bool {
        if self.image_hidden() {
            return false;
        }
        self.image = ImageSlot::Fallback {
            badge: self.label.clone(),
        };
        true
    }

    /// Reacts to the logo's load event. A fallback, once installed, stays.
    pub fn mark_loaded(&mut self) -> bool {
        if self.image == ImageSlot::Pending {
            self.image = ImageSlot::Loaded;
            true
        } else {
            false
        }
    }

    /// Whether activating the card should open a link.
    #[must_use]
    pub fn has_link(&self) -> bool {
        self.href != crate::domain::vendor::PLACEHOLDER_HREF
    }
}
