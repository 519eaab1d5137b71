//! View model types representing renderable UI state.
//!
//! View models are created by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no business logic, only display-ready data:
//! resolved text, pane coordinates and styling flags.

use crate::ui::layout::PageLayout;

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct UIViewModel {
    pub layout: PageLayout,
    pub header: HeaderInfo,
    /// Visible window of the ticker strip; `None` when there is no ticker.
    pub ticker: Option<String>,
    pub toolbar: Vec<ToolbarItem>,
    pub body: BodyView,
    pub footer: FooterInfo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    /// Right-aligned summary such as `"2 of 3 brands · Lighting"`.
    pub summary: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// One toolbar control with its pane position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolbarItem {
    pub label: String,
    pub pressed: bool,
    /// Keyboard focus, shown only while the toolbar region is focused.
    pub focused: bool,
    pub line: usize,
    pub column: usize,
}

/// What fills the grid viewport.
#[derive(Debug, Clone, PartialEq)]
pub enum BodyView {
    /// The showcase section is not mounted.
    Absent,
    Loading,
    Message(MessageView),
    Cards(Vec<TileView>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Error,
}

/// A centered placeholder message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageView {
    pub lines: Vec<String>,
    pub tone: Tone,
}

/// Logo slot content of a tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileImage {
    Pending,
    /// Loaded logo, drawn as its alt text.
    Logo(String),
    /// Fallback name badge.
    Badge(String),
}

/// One card tile at its animated pane position.
///
/// `line` is relative to the grid viewport and may be negative or past its
/// end; the renderer clips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileView {
    pub image: TileImage,
    /// Vendor name shown under the logo.
    pub label: String,
    pub focused: bool,
    pub has_link: bool,
    pub line: i64,
    pub column: i64,
    pub width: usize,
    pub height: usize,
}
