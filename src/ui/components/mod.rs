//! Composable UI component renderers.
//!
//! # Components
//!
//! - [`header`]: Title bar with filter summary
//! - [`ticker`]: Scrolling vendor-name line
//! - [`toolbar`]: Category filter controls
//! - [`grid`]: Card tiles painted through an off-screen canvas
//! - [`message`]: Loading, empty and failure placeholders
//! - [`footer`]: Keybinding hints

pub mod footer;
pub mod grid;
pub mod header;
pub mod message;
pub mod ticker;
pub mod toolbar;

use crate::ui::helpers::position_cursor;
use crate::ui::layout::PageLayout;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{BodyView, MessageView, Tone, UIViewModel};

/// Renders a horizontal separator at a 1-indexed row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the whole page following its layout.
pub fn render_page(vm: &UIViewModel, theme: &Theme) {
    let layout: &PageLayout = &vm.layout;
    let cols = layout.cols;
    if layout.rows == 0 || cols == 0 {
        return;
    }

    let mut row = header::render_header(PageLayout::HEADER_LINE + 1, &vm.header, theme, cols);
    if layout.ticker_line.is_some() {
        row = ticker::render_ticker(row, vm.ticker.as_deref(), theme, cols);
    }
    row = render_border(row, &theme.colors.border, cols);

    if layout.toolbar_top.is_some() {
        toolbar::render_toolbar(&vm.toolbar, theme, cols);
        render_border(row + layout.toolbar_lines, &theme.colors.border, cols);
    }

    let grid_row = layout.grid_top + 1;
    match &vm.body {
        BodyView::Absent => {}
        BodyView::Loading => {
            let loading = MessageView {
                lines: vec![crate::app::state::LOADING_MESSAGE.to_string()],
                tone: Tone::Info,
            };
            message::render_message(grid_row, &loading, theme, cols, layout.grid_height);
        }
        BodyView::Message(msg) => message::render_message(grid_row, msg, theme, cols, layout.grid_height),
        BodyView::Cards(tiles) => grid::render_grid(grid_row, tiles, theme, cols, layout.grid_height),
    }

    if layout.rows >= 2 {
        render_border(layout.footer_line, &theme.colors.border, cols);
        footer::render_footer(layout.footer_line + 1, &vm.footer, theme, cols);
    }
}
