//! Card grid component.
//!
//! Tiles are painted into a [`Canvas`] the size of the grid viewport, in
//! render order, then the canvas is flushed line by line. Painting clips at
//! the viewport edges, so tiles sliding in from above or below appear cut
//! rather than spilling into the toolbar or footer.
//!
//! ```text
//! ╭──────────────────────╮
//! │      ACME LOGO       │   logo alt, fallback badge or "…"
//! │         Acme         │   vendor name
//! ╰──────────────────────╯
//! ```

use crate::ui::helpers::{center_offset, position_cursor, text_width, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{TileImage, TileView};

/// Role of a painted cell, mapped to theme colors on flush.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStyle {
    Blank,
    Border,
    FocusBorder,
    Logo,
    Pending,
    Badge,
    Label,
    Link,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cell {
    ch: char,
    style: CellStyle,
}

const BLANK: Cell = Cell {
    ch: ' ',
    style: CellStyle::Blank,
};

/// Off-screen character buffer for the grid viewport.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: usize,
    cells: Vec<Vec<Cell>>,
}

impl Canvas {
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            cells: vec![vec![BLANK; width]; height],
        }
    }

    /// Writes `text` starting at a possibly off-canvas position.
    pub fn put(&mut self, line: i64, column: i64, text: &str, style: CellStyle) {
        let Ok(line) = usize::try_from(line) else {
            return;
        };
        let Some(row) = self.cells.get_mut(line) else {
            return;
        };
        for (offset, ch) in (0_i64..).zip(text.chars()) {
            let Ok(x) = usize::try_from(column + offset) else {
                continue;
            };
            if x >= self.width {
                break;
            }
            row[x] = Cell { ch, style };
        }
    }

    /// Paints one tile.
    pub fn paint_tile(&mut self, tile: &TileView) {
        let inner = tile.width.saturating_sub(2);
        let border = if tile.focused {
            CellStyle::FocusBorder
        } else {
            CellStyle::Border
        };

        let top = format!("╭{}╮", "─".repeat(inner));
        let bottom = format!("╰{}╯", "─".repeat(inner));
        self.put(tile.line, tile.column, &top, border);
        for line in 1..tile.height.saturating_sub(1) {
            let y = tile.line + i64::try_from(line).unwrap_or(i64::MAX);
            self.put(y, tile.column, "│", border);
            self.put(y, tile.column + i64::try_from(inner + 1).unwrap_or(i64::MAX), "│", border);
        }
        if tile.height > 1 {
            let y = tile.line + i64::try_from(tile.height - 1).unwrap_or(i64::MAX);
            self.put(y, tile.column, &bottom, border);
        }

        let (text, style) = match &tile.image {
            TileImage::Pending => ("…".to_string(), CellStyle::Pending),
            TileImage::Logo(alt) => (alt.to_uppercase(), if tile.has_link { CellStyle::Link } else { CellStyle::Logo }),
            TileImage::Badge(name) => (format!(" {name} "), CellStyle::Badge),
        };
        if tile.height > 2 {
            self.put_centered(tile, 1, &text, style);
        }
        if tile.height > 3 {
            self.put_centered(tile, 2, &tile.label, CellStyle::Label);
        }
    }

    fn put_centered(&mut self, tile: &TileView, line: usize, text: &str, style: CellStyle) {
        let inner = tile.width.saturating_sub(4);
        let text = truncate(text, inner);
        let offset = 2 + center_offset(text_width(&text), inner);
        let y = tile.line + i64::try_from(line).unwrap_or(0);
        let x = tile.column + i64::try_from(offset).unwrap_or(0);
        self.put(y, x, &text, style);
    }

    /// Plain text of one canvas line, for inspection.
    #[must_use]
    pub fn line_text(&self, line: usize) -> String {
        self.cells
            .get(line)
            .map(|row| row.iter().map(|cell| cell.ch).collect())
            .unwrap_or_default()
    }

    /// Style of the cell at a position.
    #[must_use]
    pub fn style_at(&self, line: usize, column: usize) -> Option<CellStyle> {
        self.cells.get(line)?.get(column).map(|cell| cell.style)
    }

    /// Prints the canvas with its top-left corner at a 1-indexed row.
    pub fn flush(&self, row: usize, theme: &Theme) {
        for (offset, cells) in self.cells.iter().enumerate() {
            position_cursor(row + offset, 1);
            let mut current = None;
            for cell in cells {
                if current != Some(cell.style) {
                    print!("{}{}", Theme::reset(), style_escape(cell.style, theme));
                    current = Some(cell.style);
                }
                print!("{}", cell.ch);
            }
            print!("{}", Theme::reset());
        }
    }
}

fn style_escape(style: CellStyle, theme: &Theme) -> String {
    let colors = &theme.colors;
    match style {
        CellStyle::Blank => String::new(),
        CellStyle::Border => Theme::fg(&colors.card_border),
        CellStyle::FocusBorder => format!("{}{}", Theme::bold(), Theme::fg(&colors.focus_fg)),
        CellStyle::Logo => format!("{}{}", Theme::bold(), Theme::fg(&colors.text_normal)),
        CellStyle::Link => format!("{}{}{}", Theme::bold(), Theme::underline(), Theme::fg(&colors.text_normal)),
        CellStyle::Pending => format!("{}{}", Theme::dim(), Theme::fg(&colors.text_dim)),
        CellStyle::Badge => format!(
            "{}{}{}",
            Theme::bold(),
            Theme::fg(&colors.badge_fg),
            Theme::bg(&colors.badge_bg)
        ),
        CellStyle::Label => Theme::fg(&colors.text_normal),
    }
}

/// Paints every tile into a viewport-sized canvas.
#[must_use]
pub fn paint_grid(tiles: &[TileView], width: usize, height: usize) -> Canvas {
    let mut canvas = Canvas::new(width, height);
    for tile in tiles {
        canvas.paint_tile(tile);
    }
    canvas
}

/// Renders the grid viewport starting at a 1-indexed row.
pub fn render_grid(row: usize, tiles: &[TileView], theme: &Theme, cols: usize, height: usize) {
    paint_grid(tiles, cols, height).flush(row, theme);
}
