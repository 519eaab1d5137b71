//! Placeholder messages in the grid area: loading, empty and failure.

use crate::ui::helpers::{print_centered, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{MessageView, Tone};

/// Renders message lines centered in the viewport starting at a 1-indexed row.
pub fn render_message(row: usize, message: &MessageView, theme: &Theme, cols: usize, height: usize) {
    let first = row + height.saturating_sub(message.lines.len()) / 3;

    for (offset, line) in message.lines.iter().enumerate().take(height) {
        let style = match (message.tone, offset) {
            (Tone::Error, 0) => Theme::fg(&theme.colors.error_fg),
            (_, 0) => Theme::fg(&theme.colors.message_fg),
            _ => format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim)),
        };
        print_centered(first + offset, &truncate(line, cols), cols, &style);
    }
}
