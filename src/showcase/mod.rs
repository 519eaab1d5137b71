//! Vendor showcase: cards, filter toolbar and animated reordering.

pub mod card;
mod easing;
pub mod engine;
pub mod flip;
mod grid;
mod surface;
pub mod toolbar;

pub use card::{Card, CardState, ImageSlot};
pub use easing::Easing;
pub use engine::{render_order, FilterOutcome, ImageRequest, ShowcaseEngine, ShowcaseStatus};
pub use flip::{Flip, FlipReport, Motion, DEFAULT_CLEANUP_MS, DEFAULT_DURATION_MS};
pub use grid::{GridGeometry, GridSurface, TILE_HEIGHT, TILE_WIDTH};
pub use surface::{CardId, Point, RenderSurface};
pub use toolbar::{Toolbar, ToolbarControl};
