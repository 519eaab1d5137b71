//! FLIP-style transitions.
//!
//! "First, Last, Invert, Play": capture where every card is, mutate the
//! layout, capture where every card ended up, then start each moved card at
//! its old position (as an offset from the new one) and animate that offset
//! back to zero. [`Flip::run`] packages that cycle so any reorder can reuse it.

use super::easing::Easing;
use super::surface::{CardId, Point, RenderSurface};

/// Default motion duration in milliseconds.
pub const DEFAULT_DURATION_MS: i64 = 450;

/// Default delay before settled motion state is cleared, in milliseconds.
pub const DEFAULT_CLEANUP_MS: i64 = 600;

/// An offset animated from `from` back to zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    /// Starting offset relative to the card's layout position.
    pub from_x: f64,
    pub from_y: f64,
    pub started_at: i64,
    pub duration_ms: i64,
    pub easing: Easing,
}

impl Motion {
    /// Offset to draw the card at, `now_ms` into the motion.
    #[must_use]
    pub fn offset_at(&self, now_ms: i64) -> (f64, f64) {
        let remaining = 1.0 - self.easing.apply(self.progress(now_ms));
        (self.from_x * remaining, self.from_y * remaining)
    }

    /// Linear progress in `[0, 1]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self, now_ms: i64) -> f64 {
        if self.duration_ms <= 0 {
            return 1.0;
        }
        (now_ms.saturating_sub(self.started_at) as f64 / self.duration_ms as f64).clamp(0.0, 1.0)
    }

    /// Whether the motion has reached zero offset.
    #[must_use]
    pub const fn is_settled(&self, now_ms: i64) -> bool {
        now_ms >= self.started_at.saturating_add(self.duration_ms)
    }
}

/// Result of one FLIP cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlipReport {
    /// Number of cards whose position changed and that got a motion.
    pub moved: usize,
    /// Deadline after which settled motion state may be cleared.
    pub cleanup_at: i64,
}

/// Reusable measure → mutate → measure → animate utility.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flip {
    pub duration_ms: i64,
    pub cleanup_ms: i64,
    pub easing: Easing,
}

impl Default for Flip {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION_MS,
            cleanup_ms: DEFAULT_CLEANUP_MS,
            easing: Easing::default(),
        }
    }
}

impl Flip {
    /// Runs one FLIP cycle over `cards`.
    ///
    /// Positions are read from the surface immediately before and after
    /// `mutate`, never from an earlier call. Cards hidden before or after the
    /// mutation have no position and are not animated; cards whose position is
    /// unchanged keep whatever motion they already have.
    pub fn run<S, F>(&self, surface: &mut S, cards: &[CardId], mutate: F, now_ms: i64) -> FlipReport
    where
        S: RenderSurface,
        F: FnOnce(&mut S),
    {
        let first: Vec<Option<Point>> = cards.iter().map(|&card| surface.position_of(card)).collect();

        mutate(surface);

        let mut moved = 0;
        for (&card, before) in cards.iter().zip(first) {
            let (Some(before), Some(after)) = (before, surface.position_of(card)) else {
                continue;
            };
            if before == after {
                continue;
            }

            surface.play_motion(
                card,
                Motion {
                    from_x: f64::from(before.x - after.x),
                    from_y: f64::from(before.y - after.y),
                    started_at: now_ms,
                    duration_ms: self.duration_ms,
                    easing: self.easing,
                },
            );
            moved += 1;
        }

        tracing::debug!(moved = moved, cards = cards.len(), "flip transition started");

        FlipReport {
            moved,
            cleanup_at: now_ms.saturating_add(self.cleanup_ms),
        }
    }
}
