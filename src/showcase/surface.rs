//! Render surface abstraction.
//!
//! The showcase engine never draws anything itself. It talks to a
//! [`RenderSurface`], the collaborator that owns the on-screen layout of the
//! cards: where each card currently sits, in which order cards flow, which ones
//! are hidden, and which are mid-motion. Keeping this behind a trait lets the
//! filter logic run against the terminal grid in production and against the
//! same grid (or any other layout) in tests.

use super::flip::Motion;

/// Identifier of a card: the source index of its vendor record.
pub type CardId = usize;

/// A position on the surface, in surface units (terminal cells for the grid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Collaborator that lays cards out and plays their motions.
///
/// All reads must reflect the layout at call time; implementations must not
/// hand back positions cached from an earlier call.
pub trait RenderSurface {
    /// Current layout position of `card`, or `None` if it is hidden (hidden
    /// cards take no space in the flow).
    fn position_of(&self, card: CardId) -> Option<Point>;

    /// Replaces the flow order of all cards.
    fn reorder(&mut self, order: &[CardId]);

    /// Hides or shows a card.
    fn set_hidden(&mut self, card: CardId, hidden: bool);

    /// Starts a motion for `card`, superseding any motion in flight.
    fn play_motion(&mut self, card: CardId, motion: Motion);

    /// Drops motion state for every motion that has finished by `now_ms`.
    fn clear_settled(&mut self, now_ms: i64);
}
