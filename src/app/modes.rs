//! Keyboard focus regions.
//!
//! The pane has two focusable regions. Focus moves between them with `Tab`,
//! or vertically off the edge of one into the other.

/// Region receiving keyboard navigation and activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusRegion {
    /// Filter controls: left/right move focus, Enter/Space activate.
    #[default]
    Toolbar,

    /// Visible cards in render order: arrows move focus, Enter opens the link.
    Cards,
}

impl FocusRegion {
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Toolbar => Self::Cards,
            Self::Cards => Self::Toolbar,
        }
    }
}
