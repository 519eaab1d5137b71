//! Brand Showcase: a Zellij plugin presenting a filterable vendor brand grid.
//!
//! The plugin loads a static vendor catalog over HTTP and renders:
//! - A scrolling ticker of vendor names
//! - A category toolbar with an "All" control and one control per category
//! - A grid of vendor cards that reorders with FLIP-style motion when the
//!   active category changes, with per-card logo fallback badges

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Host events / effects
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Event → state → actions
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Showcase      │   │ Catalog       │
//! │ (ui/)         │   │ (showcase/)   │   │ (catalog/)    │
//! │ - Layout      │   │ - Engine      │   │ - Payload     │
//! │ - Theming     │   │ - FLIP motion │   │ - Request ctx │
//! │ - Components  │   │ - Toolbar     │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, Ticker & Infrastructure                    │
//! │  - Vendor records, filter tokens, errors (domain/)  │
//! │  - Name ticker (ticker/)                            │
//! │  - Asset URLs, data dir (infrastructure/)           │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry tracing, rotating OTLP file export │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/brand-showcase.wasm" {
//!         base_url "https://example.com/site/"
//!         sections "ticker,toolbar,showcase"
//!         theme "catppuccin-mocha"
//!         transition_ms "450"
//!         easing "standard"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Basic Usage (Library)
//!
//! ```rust
//! use brand_showcase::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! let (_, actions) = handle_event(&mut state, &Event::PageReady)?;
//! assert!(matches!(actions[0], Action::FetchCatalog { .. }));
//! # Ok::<(), brand_showcase::ShowcaseError>(())
//! ```
//!
//! # Platform Support
//!
//! - **Target**: `wasm32-wasip1` (Zellij WASM runtime)
//! - **Terminal**: Any ANSI-capable terminal emulator

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod showcase;
pub mod ticker;

pub mod ui;

pub mod observability;

#[cfg(test)]
mod test_utils;

pub use app::{handle_event, Action, AppState, Event, FocusRegion};
pub use domain::{Result, ShowcaseError};
pub use ui::Theme;

use showcase::{Easing, Flip, DEFAULT_CLEANUP_MS, DEFAULT_DURATION_MS};
use std::collections::BTreeMap;

/// Default base path of the static assets.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5173/";

/// Default command used to open vendor websites.
pub const DEFAULT_OPENER: &str = "xdg-open";

/// Pane sections the page is built from.
///
/// A section that is not listed is not mounted: the showcase engine skips it
/// instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sections {
    pub ticker: bool,
    pub toolbar: bool,
    pub showcase: bool,
}

impl Default for Sections {
    fn default() -> Self {
        Self {
            ticker: true,
            toolbar: true,
            showcase: true,
        }
    }
}

impl Sections {
    /// Parses a comma-separated section list. Unknown names are ignored.
    ///
    /// ```rust
    /// use brand_showcase::Sections;
    ///
    /// let sections = Sections::parse("showcase, ticker");
    /// assert!(sections.showcase && sections.ticker && !sections.toolbar);
    /// ```
    #[must_use]
    pub fn parse(list: &str) -> Self {
        let mut sections = Self {
            ticker: false,
            toolbar: false,
            showcase: false,
        };
        for name in list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            match name.to_ascii_lowercase().as_str() {
                "ticker" => sections.ticker = true,
                "toolbar" => sections.toolbar = true,
                "showcase" => sections.showcase = true,
                other => tracing::debug!(section = %other, "ignoring unknown section"),
            }
        }
        sections
    }
}

/// Plugin configuration parsed from Zellij's configuration system.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base path of the static assets, always ending in `/`.
    pub base_url: String,

    pub sections: Sections,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for spans. Default: `"info"`
    pub trace_level: Option<String>,

    pub transition_ms: i64,
    pub cleanup_ms: i64,
    pub easing: Easing,

    /// Ticker scroll speed in cells per second.
    pub ticker_speed: f64,

    /// Command that opens a vendor website, called with the URL.
    pub opener: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            sections: Sections::default(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
            transition_ms: DEFAULT_DURATION_MS,
            cleanup_ms: DEFAULT_CLEANUP_MS,
            easing: Easing::default(),
            ticker_speed: ticker::DEFAULT_SPEED,
            opener: DEFAULT_OPENER.to_string(),
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Unparsable values are logged and replaced by their defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use brand_showcase::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("base_url".to_string(), "https://example.com/site".to_string());
    /// map.insert("transition_ms".to_string(), "fast".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.base_url, "https://example.com/site/");
    /// assert_eq!(config.transition_ms, 450);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let base_url = config
            .get("base_url")
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map_or(defaults.base_url, infrastructure::normalize_base_url);

        let sections = config.get("sections").map_or(defaults.sections, |s| Sections::parse(s));

        let easing = config.get("easing").map_or(defaults.easing, |name| {
            Easing::from_name(name).unwrap_or_else(|| {
                report_invalid("easing", name);
                defaults.easing
            })
        });

        Self {
            base_url,
            sections,
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
            transition_ms: parse_millis(config, "transition_ms", defaults.transition_ms),
            cleanup_ms: parse_millis(config, "cleanup_ms", defaults.cleanup_ms),
            easing,
            ticker_speed: config
                .get("ticker_speed")
                .and_then(|s| match s.trim().parse::<f64>() {
                    Ok(speed) if (ticker::MIN_SPEED..=f64::MAX).contains(&speed) => Some(speed),
                    _ => {
                        report_invalid("ticker_speed", s);
                        None
                    }
                })
                .unwrap_or(defaults.ticker_speed),
            opener: config
                .get("opener")
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map_or(defaults.opener, String::from),
        }
    }

    /// Transition settings for the showcase engine.
    #[must_use]
    pub const fn flip(&self) -> Flip {
        Flip {
            duration_ms: self.transition_ms,
            cleanup_ms: self.cleanup_ms,
            easing: self.easing,
        }
    }
}

/// Longest accepted transition or cleanup time in milliseconds.
pub const MAX_MILLIS: i64 = 60_000;

fn parse_millis(config: &BTreeMap<String, String>, key: &str, default: i64) -> i64 {
    config.get(key).map_or(default, |s| match s.trim().parse::<i64>() {
        Ok(ms) if (0..=MAX_MILLIS).contains(&ms) => ms,
        _ => {
            report_invalid(key, s);
            default
        }
    })
}

fn report_invalid(key: &str, value: &str) {
    let error = ShowcaseError::Config(format!("invalid value {value:?} for {key}"));
    tracing::debug!(error = %error, "using default");
}

/// Initializes the plugin state from configuration.
///
/// Resolves the theme (file, then name, then default) and creates an
/// `AppState` waiting for [`Event::PageReady`].
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing brand showcase plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(config, theme)
}
