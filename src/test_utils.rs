//! Shared test fixtures following the Mother pattern.
//!
//! Keep setup for vendor records, engines and surfaces here instead of
//! copy-pasting it across test modules.
#![allow(dead_code)]

use crate::domain::VendorRecord;
use crate::app::{handle_event, AppState, Event};
use crate::showcase::{Flip, GridGeometry, GridSurface, ShowcaseEngine};
use crate::{Config, Sections};

// ============================================================================
// Mother Pattern Factories
// ============================================================================

pub struct VendorMother;

impl VendorMother {
    #[must_use]
    pub fn named(name: &str) -> VendorRecord {
        VendorRecord {
            name: Some(name.to_string()),
            ..VendorRecord::default()
        }
    }

    #[must_use]
    pub fn with_categories(name: &str, categories: &[&str]) -> VendorRecord {
        VendorRecord {
            name: Some(name.to_string()),
            categories: categories.iter().map(ToString::to_string).collect(),
            ..VendorRecord::default()
        }
    }

    #[must_use]
    pub fn with_image(name: &str, image: &str) -> VendorRecord {
        VendorRecord {
            name: Some(name.to_string()),
            brand_image: Some(image.to_string()),
            ..VendorRecord::default()
        }
    }

    /// The three-vendor catalog used throughout the filter tests:
    /// `Zeta [Lighting]`, `Acme [Lighting, Decor]`, `Beta []`.
    #[must_use]
    pub fn lighting_trio() -> Vec<VendorRecord> {
        vec![
            Self::with_categories("Zeta", &["Lighting"]),
            Self::with_categories("Acme", &["Lighting", "Decor"]),
            Self::with_categories("Beta", &[]),
        ]
    }
}

pub struct SurfaceMother;

impl SurfaceMother {
    /// A grid with `columns` slots per row and 10x4 tiles without gaps.
    #[must_use]
    pub fn columns(columns: usize) -> GridSurface {
        GridSurface::new(GridGeometry {
            tile_width: 10,
            tile_height: 4,
            gap_x: 0,
            gap_y: 0,
            columns,
        })
    }
}

pub struct EngineMother;

impl EngineMother {
    /// An engine with the toolbar mounted and default transition timings.
    #[must_use]
    pub fn with_toolbar() -> ShowcaseEngine {
        ShowcaseEngine::new(true, Flip::default())
    }

    /// An engine whose toolbar section is not mounted.
    #[must_use]
    pub fn without_toolbar() -> ShowcaseEngine {
        ShowcaseEngine::new(false, Flip::default())
    }

    /// An engine loaded with `records` on a single-column surface.
    #[must_use]
    pub fn loaded(records: Vec<VendorRecord>) -> (ShowcaseEngine, GridSurface) {
        let mut engine = Self::with_toolbar();
        let mut surface = SurfaceMother::columns(1);
        engine.render_catalog(Ok(crate::catalog::Catalog::Vendors(records)), &mut surface);
        (engine, surface)
    }
}

pub struct AppMother;

impl AppMother {
    /// Clock reading every mother-built state starts at.
    pub const NOW_MS: i64 = 1_000;

    /// A default-config state sized 24x80, waiting for its catalog.
    #[must_use]
    pub fn fresh() -> AppState {
        Self::configured(&Config::default())
    }

    /// A fresh state mounting only the listed sections.
    #[must_use]
    pub fn with_sections(sections: &str) -> AppState {
        Self::configured(&Config {
            sections: Sections::parse(sections),
            ..Config::default()
        })
    }

    /// A fresh state that received `body` as a successful catalog response.
    #[must_use]
    pub fn loaded(body: &str) -> AppState {
        let mut state = Self::fresh();
        let generation = state.generation;
        handle_event(
            &mut state,
            &Event::CatalogResponse {
                generation,
                status: 200,
                body: body.as_bytes().to_vec(),
            },
        )
        .expect("catalog response is handled");
        state
    }

    /// A fresh state built from an explicit configuration.
    #[must_use]
    pub fn configured(config: &Config) -> AppState {
        let mut state = crate::initialize(config);
        state.set_clock(Self::NOW_MS);
        state.resize(24, 80);
        state
    }
}
