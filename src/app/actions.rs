//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event. The
//! shim in `main.rs` executes them in order against the Zellij host; nothing in
//! the library talks to the host directly.

use crate::showcase::CardId;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Starts the single GET of the vendor catalog.
    ///
    /// The response must come back as `Event::CatalogResponse` (or
    /// `Event::CatalogFailed`) tagged with the same `generation`.
    FetchCatalog {
        url: String,
        generation: u32,
    },

    /// Probes one vendor logo.
    ///
    /// The outcome must come back as `Event::ImageLoaded` or
    /// `Event::ImageFailed` for the same card and generation.
    FetchImage {
        card: CardId,
        url: String,
        generation: u32,
    },

    /// A card has no logo to load; its image error is reported right away.
    ///
    /// Must come back as `Event::ImageFailed` for the same card and
    /// generation, without any host request.
    ReportImageError {
        card: CardId,
        generation: u32,
    },

    /// Requests an `Event::Tick` after the given delay.
    ScheduleTick {
        after_ms: i64,
    },

    /// Opens a vendor website with the configured opener.
    OpenLink {
        url: String,
    },
}
