//! Scrolling vendor-name ticker.
//!
//! The ticker strip holds every distinct vendor name, uppercased, twice in a
//! row. Scrolling shifts the window by one full set per cycle, so the second
//! copy slides into the place of the first and the loop has no visible seam.

use crate::domain::VendorRecord;
use crate::ui::helpers::char_width;
use std::collections::HashSet;

/// Separator drawn between two names on the strip.
pub const SEPARATOR: &str = "   ·   ";

/// Default scroll speed in cells per second.
pub const DEFAULT_SPEED: f64 = 8.0;

/// Slowest accepted scroll speed in cells per second.
pub const MIN_SPEED: f64 = 0.1;

/// Minimum cycle duration in seconds.
pub const MIN_DURATION_SECS: u64 = 15;

/// Longest cycle duration in seconds.
pub const MAX_DURATION_SECS: u64 = 3_600;

/// Cycle duration used when the strip has no measurable width.
pub const ZERO_WIDTH_DURATION_SECS: u64 = 30;

const REPEATS: usize = 2;

/// One terminal cell of the strip.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Cell {
    /// A glyph (with any combining marks) starting in this cell.
    Glyph { text: String, wide: bool },
    /// Right half of the wide glyph in the previous cell.
    Continuation,
}

fn push_cells(cells: &mut Vec<Cell>, text: &str) {
    for ch in text.chars() {
        match char_width(ch) {
            0 => {
                if let Some(Cell::Glyph { text, .. }) = cells.last_mut() {
                    text.push(ch);
                }
            }
            1 => cells.push(Cell::Glyph {
                text: ch.to_string(),
                wide: false,
            }),
            _ => {
                cells.push(Cell::Glyph {
                    text: ch.to_string(),
                    wide: true,
                });
                cells.push(Cell::Continuation);
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ticker {
    names: Vec<String>,
    set: Vec<Cell>,
    duration_secs: u64,
    started_at: i64,
}

impl Ticker {
    /// Builds a ticker from vendor records.
    ///
    /// Returns `None` when no record has a usable name.
    #[must_use]
    pub fn from_records(records: &[VendorRecord], speed: f64, now_ms: i64) -> Option<Self> {
        let mut seen = HashSet::new();
        let names: Vec<String> = records
            .iter()
            .filter_map(|record| record.name.as_deref().map(str::trim))
            .filter(|name| !name.is_empty() && seen.insert(name.to_string()))
            .map(str::to_uppercase)
            .collect();

        if names.is_empty() {
            tracing::debug!("no vendor names for ticker");
            return None;
        }

        let mut set = Vec::new();
        for name in &names {
            push_cells(&mut set, name);
            push_cells(&mut set, SEPARATOR);
        }
        let duration_secs = cycle_duration(set.len(), speed);

        tracing::debug!(
            names = names.len(),
            set_width = set.len(),
            duration_secs = duration_secs,
            "ticker populated"
        );

        Some(Self {
            names,
            set,
            duration_secs,
            started_at: now_ms,
        })
    }

    /// Distinct uppercased names in first-seen order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Names as laid out on the strip: the set repeated twice.
    #[must_use]
    pub fn strip(&self) -> Vec<&str> {
        self.names
            .iter()
            .cycle()
            .take(self.names.len() * REPEATS)
            .map(String::as_str)
            .collect()
    }

    /// Width in cells of one set of names.
    #[must_use]
    pub fn set_width(&self) -> usize {
        self.set.len()
    }

    #[must_use]
    pub const fn duration_secs(&self) -> u64 {
        self.duration_secs
    }

    #[allow(clippy::cast_possible_wrap)]
    const fn period_ms(&self) -> i64 {
        // bounded by MAX_DURATION_SECS
        self.duration_secs.saturating_mul(1000) as i64
    }

    /// Cell offset into the strip at `now_ms`, in `[0, set_width)`.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn offset_at(&self, now_ms: i64) -> usize {
        let width = self.set_width();
        let period_ms = self.period_ms();
        if width == 0 || period_ms <= 0 {
            return 0;
        }
        let elapsed = now_ms.saturating_sub(self.started_at).rem_euclid(period_ms);
        let offset = (elapsed as f64 / period_ms as f64 * width as f64).floor() as usize;
        offset.min(width - 1)
    }

    /// Visible window of the strip, `width` cells wide, at `now_ms`.
    ///
    /// A wide glyph cut by either window edge is drawn as a blank cell.
    #[must_use]
    pub fn frame(&self, now_ms: i64, width: usize) -> String {
        if self.set.is_empty() {
            return String::new();
        }
        let mut frame = String::new();
        let cells = self.set.iter().cycle().skip(self.offset_at(now_ms)).take(width);
        for (index, cell) in cells.enumerate() {
            match cell {
                Cell::Glyph { text, wide } if !*wide || index + 1 < width => frame.push_str(text),
                Cell::Glyph { .. } => frame.push(' '),
                Cell::Continuation if index == 0 => frame.push(' '),
                Cell::Continuation => {}
            }
        }
        frame
    }

    /// Milliseconds until the strip shifts by one cell.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn cell_interval_ms(&self) -> i64 {
        let width = self.set_width().max(1) as f64;
        (self.period_ms() as f64 / width).ceil().max(1.0) as i64
    }
}

/// Scroll cycle duration for one set `set_width` cells wide.
///
/// Non-positive or non-finite speeds fall back to [`DEFAULT_SPEED`]; the
/// result stays within `MIN_DURATION_SECS..=MAX_DURATION_SECS`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn cycle_duration(set_width: usize, speed: f64) -> u64 {
    if set_width == 0 {
        return ZERO_WIDTH_DURATION_SECS;
    }
    let speed = if speed > 0.0 && speed.is_finite() { speed } else { DEFAULT_SPEED };
    let secs = (set_width as f64 / speed).round().min(MAX_DURATION_SECS as f64) as u64;
    secs.clamp(MIN_DURATION_SECS, MAX_DURATION_SECS)
}
