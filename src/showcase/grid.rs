//! Terminal grid implementation of [`RenderSurface`].
//!
//! Cards are fixed-size tiles flowing left to right, top to bottom, in as many
//! columns as fit the pane. Hidden cards take no slot. Positions are derived
//! from the current order on every read, so a resize or reorder is visible to
//! the very next measurement.

use super::flip::Motion;
use super::surface::{CardId, Point, RenderSurface};
use std::collections::HashMap;

/// Default tile width in cells, borders included.
pub const TILE_WIDTH: usize = 24;

/// Default tile height in cells, borders included.
pub const TILE_HEIGHT: usize = 4;

/// Tile dimensions and column count of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    pub tile_width: usize,
    pub tile_height: usize,
    pub gap_x: usize,
    pub gap_y: usize,
    pub columns: usize,
}

impl GridGeometry {
    /// Geometry with default tiles fitted to a pane `width` cells wide.
    ///
    /// Always at least one column, even when the pane is narrower than a tile.
    #[must_use]
    pub fn for_width(width: usize) -> Self {
        let mut geometry = Self::default();
        geometry.columns = ((width + geometry.gap_x) / (geometry.tile_width + geometry.gap_x)).max(1);
        geometry
    }

    /// Width in cells occupied by a full row of tiles.
    #[must_use]
    pub const fn row_width(&self) -> usize {
        self.columns * self.tile_width + self.columns.saturating_sub(1) * self.gap_x
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn slot_position(&self, slot: usize) -> Point {
        let columns = self.columns.max(1);
        let column = slot % columns;
        let row = slot / columns;
        Point::new(
            (column * (self.tile_width + self.gap_x)) as i32,
            (row * (self.tile_height + self.gap_y)) as i32,
        )
    }
}

impl Default for GridGeometry {
    fn default() -> Self {
        Self {
            tile_width: TILE_WIDTH,
            tile_height: TILE_HEIGHT,
            gap_x: 2,
            gap_y: 1,
            columns: 1,
        }
    }
}

/// Flowing grid of card tiles with per-card motions.
#[derive(Debug, Clone)]
pub struct GridSurface {
    geometry: GridGeometry,
    order: Vec<CardId>,
    hidden: Vec<bool>,
    motions: HashMap<CardId, Motion>,
}

impl GridSurface {
    #[must_use]
    pub fn new(geometry: GridGeometry) -> Self {
        Self {
            geometry,
            order: Vec::new(),
            hidden: Vec::new(),
            motions: HashMap::new(),
        }
    }

    #[must_use]
    pub const fn geometry(&self) -> GridGeometry {
        self.geometry
    }

    /// Changes the grid geometry. Layout jumps; nothing is animated.
    pub fn set_geometry(&mut self, geometry: GridGeometry) {
        if self.geometry != geometry {
            tracing::debug!(columns = geometry.columns, "grid geometry changed");
            self.geometry = geometry;
        }
    }

    /// Flow order of every card, hidden ones included.
    #[must_use]
    pub fn order(&self) -> &[CardId] {
        &self.order
    }

    /// Visible cards in flow order.
    pub fn visible_cards(&self) -> impl Iterator<Item = CardId> + '_ {
        self.order.iter().copied().filter(|&card| !self.is_hidden(card))
    }

    #[must_use]
    pub fn is_hidden(&self, card: CardId) -> bool {
        self.hidden.get(card).copied().unwrap_or(false)
    }

    /// Number of tile rows currently occupied.
    #[must_use]
    pub fn row_count(&self) -> usize {
        let visible = self.visible_cards().count();
        visible.div_ceil(self.geometry.columns.max(1))
    }

    /// Height in cells of the occupied rows.
    #[must_use]
    pub fn content_height(&self) -> usize {
        let rows = self.row_count();
        rows * self.geometry.tile_height + rows.saturating_sub(1) * self.geometry.gap_y
    }

    /// Draw offset of `card` at `now_ms`: zero unless a motion is in flight.
    #[must_use]
    pub fn offset_of(&self, card: CardId, now_ms: i64) -> (f64, f64) {
        self.motions
            .get(&card)
            .map_or((0.0, 0.0), |motion| motion.offset_at(now_ms))
    }

    /// Whether any motion has not yet reached zero offset.
    #[must_use]
    pub fn is_animating(&self, now_ms: i64) -> bool {
        self.motions.values().any(|motion| !motion.is_settled(now_ms))
    }

    /// Number of motions still held, settled or not.
    #[must_use]
    pub fn motion_count(&self) -> usize {
        self.motions.len()
    }

    /// Motion currently held for `card`.
    #[must_use]
    pub fn motion_of(&self, card: CardId) -> Option<&Motion> {
        self.motions.get(&card)
    }

    /// Forgets all cards and motions.
    pub fn clear(&mut self) {
        self.order.clear();
        self.hidden.clear();
        self.motions.clear();
    }
}

impl RenderSurface for GridSurface {
    fn position_of(&self, card: CardId) -> Option<Point> {
        if self.is_hidden(card) {
            return None;
        }
        self.visible_cards()
            .position(|candidate| candidate == card)
            .map(|slot| self.geometry.slot_position(slot))
    }

    fn reorder(&mut self, order: &[CardId]) {
        self.order = order.to_vec();
        if let Some(&max) = order.iter().max() {
            if self.hidden.len() <= max {
                self.hidden.resize(max + 1, false);
            }
        }
    }

    fn set_hidden(&mut self, card: CardId, hidden: bool) {
        if self.hidden.len() <= card {
            self.hidden.resize(card + 1, false);
        }
        self.hidden[card] = hidden;
    }

    fn play_motion(&mut self, card: CardId, mut motion: Motion) {
        if let Some(previous) = self.motions.get(&card) {
            let (residual_x, residual_y) = previous.offset_at(motion.started_at);
            motion.from_x += residual_x;
            motion.from_y += residual_y;
        }
        self.motions.insert(card, motion);
    }

    fn clear_settled(&mut self, now_ms: i64) {
        let before = self.motions.len();
        self.motions.retain(|_, motion| !motion.is_settled(now_ms));
        tracing::trace!(cleared = before - self.motions.len(), "settled motions cleared");
    }
}
