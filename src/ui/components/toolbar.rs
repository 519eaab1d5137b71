//! Filter toolbar renderer.
//!
//! Controls are drawn at the positions the view model assigned, `[ Label ]`
//! each. The pressed control is filled; the focused one is bold and
//! underlined in the focus color.

use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ToolbarItem;

/// Text drawn for one control.
#[must_use]
pub fn control_text(item: &ToolbarItem) -> String {
    format!("[ {} ]", item.label)
}

/// Renders every control; items carry 0-based pane positions.
pub fn render_toolbar(items: &[ToolbarItem], theme: &Theme, cols: usize) {
    let colors = &theme.colors;
    for item in items {
        let Some(room) = cols.checked_sub(item.column).filter(|&room| room > 0) else {
            continue;
        };
        position_cursor(item.line + 1, item.column + 1);

        if item.pressed {
            print!("{}", Theme::fg(&colors.control_active_fg));
            print!("{}", Theme::bg(&colors.control_active_bg));
        } else {
            print!("{}", Theme::fg(&colors.control_fg));
        }
        if item.focused {
            print!("{}{}", Theme::bold(), Theme::underline());
            if !item.pressed {
                print!("{}", Theme::fg(&colors.focus_fg));
            }
        }
        print!("{}", truncate(&control_text(item), room));
        print!("{}", Theme::reset());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_text_matches_layout_padding() {
        let item = ToolbarItem {
            label: "Decor".into(),
            pressed: false,
            focused: false,
            line: 0,
            column: 0,
        };
        let text = control_text(&item);
        assert_eq!(text, "[ Decor ]");
        assert_eq!(
            text.chars().count(),
            "Decor".len() + crate::ui::layout::CONTROL_PADDING
        );
    }
}
