//! Pane layout: which lines hold which section.
//!
//! The same layout drives drawing and mouse hit-testing, so a click always
//! lands on what is drawn under it. All lines and columns are 0-based pane
//! coordinates.
//!
//! ```text
//! 0            header
//! 1            ticker           (ticker section mounted)
//! .            border
//! .. .         toolbar lines    (toolbar section mounted, wraps)
//! .            border
//! grid_top ..  card grid viewport
//! rows - 2     border
//! rows - 1     footer
//! ```

use crate::ui::helpers::text_width;
use crate::Sections;

/// Cells between two toolbar controls.
pub const CONTROL_GAP: usize = 1;

/// Cells of decoration around a control label (`[ ` and ` ]`).
pub const CONTROL_PADDING: usize = 4;

/// Position of one toolbar control, relative to the first toolbar line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlSpan {
    pub index: usize,
    pub line: usize,
    pub column: usize,
    pub width: usize,
}

impl ControlSpan {
    #[must_use]
    pub const fn contains(&self, line: usize, column: usize) -> bool {
        line == self.line && column >= self.column && column < self.column + self.width
    }
}

/// Flows control labels into lines no wider than `cols`.
///
/// A control wider than the pane gets a line of its own.
#[must_use]
pub fn toolbar_spans<S: AsRef<str>>(labels: &[S], cols: usize) -> Vec<ControlSpan> {
    let mut spans = Vec::with_capacity(labels.len());
    let mut line = 0;
    let mut column = 0;

    for (index, label) in labels.iter().enumerate() {
        let width = text_width(label.as_ref()) + CONTROL_PADDING;
        if column > 0 && column + width > cols {
            line += 1;
            column = 0;
        }
        spans.push(ControlSpan { index, line, column, width });
        column += width + CONTROL_GAP;
    }

    spans
}

/// Line assignment of every section for a pane size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageLayout {
    pub rows: usize,
    pub cols: usize,
    pub ticker_line: Option<usize>,
    pub toolbar_top: Option<usize>,
    pub toolbar_lines: usize,
    pub grid_top: usize,
    /// Lines available to the card grid.
    pub grid_height: usize,
    /// Left margin centering the grid in the pane.
    pub grid_left: usize,
    pub footer_line: usize,
}

impl PageLayout {
    pub const HEADER_LINE: usize = 0;

    /// Computes the layout.
    ///
    /// `toolbar_lines` is the number of wrapped control lines; a mounted
    /// toolbar always reserves at least one.
    #[must_use]
    pub fn compute(rows: usize, cols: usize, sections: Sections, toolbar_lines: usize, grid_width: usize) -> Self {
        let mut line = Self::HEADER_LINE + 1;

        let ticker_line = sections.ticker.then(|| {
            line += 1;
            line - 1
        });

        // border under header/ticker
        line += 1;

        let (toolbar_top, toolbar_lines) = if sections.toolbar {
            let top = line;
            let count = toolbar_lines.max(1);
            line += count + 1;
            (Some(top), count)
        } else {
            (None, 0)
        };

        let footer_line = rows.saturating_sub(1);
        let grid_height = footer_line.saturating_sub(1).saturating_sub(line);

        Self {
            rows,
            cols,
            ticker_line,
            toolbar_top,
            toolbar_lines,
            grid_top: line,
            grid_height,
            grid_left: cols.saturating_sub(grid_width) / 2,
            footer_line,
        }
    }

    /// Maps a pane line to a toolbar-relative line.
    #[must_use]
    pub fn toolbar_line_at(&self, line: usize) -> Option<usize> {
        let top = self.toolbar_top?;
        (line >= top && line < top + self.toolbar_lines).then(|| line - top)
    }

    /// Maps a pane line to a grid-viewport line.
    #[must_use]
    pub fn grid_line_at(&self, line: usize) -> Option<usize> {
        (line >= self.grid_top && line < self.grid_top + self.grid_height).then(|| line - self.grid_top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toolbar_wraps() {
        let spans = toolbar_spans(&["All", "Decor", "Lighting"], 20);
        assert_eq!(spans[0], ControlSpan { index: 0, line: 0, column: 0, width: 7 });
        assert_eq!(spans[1], ControlSpan { index: 1, line: 0, column: 8, width: 9 });
        assert_eq!(spans[2], ControlSpan { index: 2, line: 1, column: 0, width: 12 });
        assert!(spans[1].contains(0, 16));
        assert!(!spans[1].contains(0, 17));
    }

    #[test]
    fn test_oversized_control_stays_on_first_line() {
        let spans = toolbar_spans(&["A very long category label"], 10);
        assert_eq!(spans[0].line, 0);
    }

    #[test]
    fn test_full_layout() {
        let layout = PageLayout::compute(30, 80, Sections::default(), 2, 76);
        assert_eq!(layout.ticker_line, Some(1));
        assert_eq!(layout.toolbar_top, Some(3));
        assert_eq!(layout.grid_top, 6);
        assert_eq!(layout.footer_line, 29);
        assert_eq!(layout.grid_height, 22);
        assert_eq!(layout.grid_left, 2);
        assert_eq!(layout.toolbar_line_at(4), Some(1));
        assert_eq!(layout.toolbar_line_at(5), None);
        assert_eq!(layout.grid_line_at(6), Some(0));
        assert_eq!(layout.grid_line_at(28), None);
    }

    #[test]
    fn test_layout_without_optional_sections() {
        let sections = Sections {
            ticker: false,
            toolbar: false,
            showcase: true,
        };
        let layout = PageLayout::compute(10, 40, sections, 0, 40);
        assert_eq!(layout.ticker_line, None);
        assert_eq!(layout.toolbar_top, None);
        assert_eq!(layout.grid_top, 2);
        assert_eq!(layout.grid_height, 6);
    }

    #[test]
    fn test_tiny_pane_has_no_grid() {
        let layout = PageLayout::compute(3, 20, Sections::default(), 1, 20);
        assert_eq!(layout.grid_height, 0);
    }
}
