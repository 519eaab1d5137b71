//! Application state management and view model computation.
//!
//! [`AppState`] is the single source of truth for one plugin instance: the
//! showcase engine and its grid surface, the ticker, keyboard focus, scroll
//! position and tick bookkeeping. Everything time-dependent reads the clock
//! the shim stores with [`AppState::set_clock`], so the state itself never
//! asks the host what time it is.

use super::modes::FocusRegion;
use crate::showcase::{CardId, GridGeometry, GridSurface, ImageSlot, RenderSurface, ShowcaseEngine, ShowcaseStatus};
use crate::ticker::Ticker;
use crate::ui::layout::{toolbar_spans, ControlSpan, PageLayout};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    BodyView, FooterInfo, HeaderInfo, MessageView, TileImage, TileView, ToolbarItem, Tone, UIViewModel,
};
use crate::{Config, Sections};

/// Title shown in the header line.
pub const TITLE: &str = "Brand Showcase";

/// Apology shown when the catalog cannot be fetched.
pub const FETCH_FAILED_MESSAGE: &str = "Unable to load brand information at this time.";

/// Hint shown under the fetch apology.
pub const RELOAD_HINT: &str = "Press r to reload or try again later.";

/// Placeholder for an empty or malformed catalog.
pub const NO_BRANDS_MESSAGE: &str = "No brands available.";

pub const LOADING_MESSAGE: &str = "Loading brands…";

/// Tick interval while motions are in flight (about 30 frames per second).
pub const FRAME_INTERVAL_MS: i64 = 33;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Base path the catalog and relative logo URLs resolve against.
    pub base_url: String,

    pub sections: Sections,

    /// Ticker scroll speed in cells per second.
    pub ticker_speed: f64,

    /// Showcase engine for the current page load. Replaced on reload.
    pub engine: ShowcaseEngine,

    /// Layout collaborator the engine measures and reorders.
    pub surface: GridSurface,

    /// Name ticker, once the catalog produced one.
    pub ticker: Option<Ticker>,

    pub theme: Theme,

    pub focus: FocusRegion,

    /// Card holding keyboard focus in the cards region. Always a visible card
    /// while the cards region is focused.
    pub focused_card: Option<CardId>,

    /// First grid line shown in the viewport.
    pub scroll: usize,

    pub rows: usize,
    pub cols: usize,

    /// Page-load counter; responses tagged with an older value are stale.
    pub generation: u32,

    /// Whether this page load already consumed a catalog result.
    pub catalog_loaded: bool,

    /// Clock reading for the event being handled, in Unix milliseconds.
    pub now_ms: i64,

    /// Due time of the outstanding tick timer, if one is scheduled.
    pub tick_due_at: Option<i64>,
}

impl AppState {
    #[must_use]
    pub fn new(config: &Config, theme: Theme) -> Self {
        Self {
            base_url: config.base_url.clone(),
            sections: config.sections,
            ticker_speed: config.ticker_speed,
            engine: ShowcaseEngine::new(config.sections.toolbar, config.flip()),
            surface: GridSurface::new(GridGeometry::default()),
            ticker: None,
            theme,
            focus: FocusRegion::default(),
            focused_card: None,
            scroll: 0,
            rows: 0,
            cols: 0,
            generation: 0,
            catalog_loaded: false,
            now_ms: 0,
            tick_due_at: None,
        }
    }

    /// Stores the clock reading used by the next operations.
    pub fn set_clock(&mut self, now_ms: i64) {
        self.now_ms = now_ms;
    }

    /// Discards everything the last page load produced and starts a new
    /// generation.
    pub fn reset(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.engine = ShowcaseEngine::new(self.sections.toolbar, self.engine.flip());
        self.surface.clear();
        self.ticker = None;
        self.catalog_loaded = false;
        self.focus = FocusRegion::default();
        self.focused_card = None;
        self.scroll = 0;
        tracing::debug!(generation = self.generation, "page state reset");
    }

    /// Applies a new pane size to the grid.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        self.rows = rows;
        self.cols = cols;
        self.surface.set_geometry(GridGeometry::for_width(cols));
        self.clamp_scroll();
        self.scroll_to_focused();
    }

    /// Toolbar control labels in display order, empty without a toolbar.
    fn toolbar_labels(&self) -> Vec<String> {
        if !self.sections.toolbar {
            return Vec::new();
        }
        self.engine
            .toolbar()
            .map(|toolbar| toolbar.controls().into_iter().map(|c| c.label).collect())
            .unwrap_or_default()
    }

    fn control_spans(&self, cols: usize) -> Vec<ControlSpan> {
        let layout_width = self.surface.geometry().row_width().min(cols.max(1));
        toolbar_spans(&self.toolbar_labels(), layout_width)
    }

    /// Layout of the pane at `rows` x `cols`.
    #[must_use]
    pub fn layout_for(&self, rows: usize, cols: usize) -> PageLayout {
        let spans = self.control_spans(cols);
        let toolbar_lines = spans.last().map_or(0, |span| span.line + 1);
        PageLayout::compute(rows, cols, self.sections, toolbar_lines, self.surface.geometry().row_width())
    }

    /// Layout of the pane at its last known size.
    #[must_use]
    pub fn layout(&self) -> PageLayout {
        self.layout_for(self.rows, self.cols)
    }

    /// Visible cards in render order, empty until cards are rendered.
    #[must_use]
    pub fn visible_cards(&self) -> Vec<CardId> {
        if !self.sections.showcase || *self.engine.status() != ShowcaseStatus::Ready {
            return Vec::new();
        }
        self.surface.visible_cards().collect()
    }

    /// Focus region after a catalog render: the toolbar when it exists.
    pub fn settle_initial_focus(&mut self) {
        self.focus = if self.engine.toolbar().is_some() {
            FocusRegion::Toolbar
        } else {
            FocusRegion::Cards
        };
        self.focused_card = self.visible_cards().first().copied();
    }

    /// Re-validates card focus after visibility changed.
    pub fn revalidate_focus(&mut self) {
        let visible = self.visible_cards();
        if self.focused_card.is_some_and(|card| !visible.contains(&card)) || self.focused_card.is_none() {
            self.focused_card = visible.first().copied();
        }
        if self.focus == FocusRegion::Cards && self.focused_card.is_none() && self.engine.toolbar().is_some() {
            self.focus = FocusRegion::Toolbar;
        }
        self.clamp_scroll();
        self.scroll_to_focused();
    }

    /// Moves card focus by `step` positions along the render order, stopping
    /// at both ends. Returns whether focus moved.
    pub fn step_card_focus(&mut self, step: isize) -> bool {
        let visible = self.visible_cards();
        let Some(current) = self.focused_index(&visible) else {
            self.focused_card = visible.first().copied();
            return self.focused_card.is_some();
        };
        let Some(target) = current.checked_add_signed(step).filter(|&t| t < visible.len()) else {
            return false;
        };
        self.focused_card = Some(visible[target]);
        self.scroll_to_focused();
        true
    }

    /// Moves card focus one grid row up or down. Returns whether focus moved.
    ///
    /// Moving down from a row above a partial last row lands on the last card.
    pub fn step_card_row(&mut self, down: bool) -> bool {
        let visible = self.visible_cards();
        let columns = self.surface.geometry().columns.max(1);
        let Some(current) = self.focused_index(&visible) else {
            return false;
        };

        let target = if down {
            let last = visible.len() - 1;
            let target = (current + columns).min(last);
            (target / columns > current / columns).then_some(target)
        } else {
            current.checked_sub(columns)
        };

        match target {
            Some(target) => {
                self.focused_card = Some(visible[target]);
                self.scroll_to_focused();
                true
            }
            None => false,
        }
    }

    fn focused_index(&self, visible: &[CardId]) -> Option<usize> {
        let card = self.focused_card?;
        visible.iter().position(|&c| c == card)
    }

    /// Card under a pane position, by layout slot (motions are ignored).
    #[must_use]
    pub fn card_at(&self, line: usize, column: usize) -> Option<CardId> {
        let layout = self.layout();
        let y = layout.grid_line_at(line)? + self.scroll;
        let x = column.checked_sub(layout.grid_left)?;
        let geometry = self.surface.geometry();

        self.visible_cards().into_iter().find(|&card| {
            self.surface.position_of(card).is_some_and(|pos| {
                let (left, top) = (to_cells(pos.x), to_cells(pos.y));
                x >= left && x < left + geometry.tile_width && y >= top && y < top + geometry.tile_height
            })
        })
    }

    /// Toolbar control under a pane position.
    #[must_use]
    pub fn control_at(&self, line: usize, column: usize) -> Option<usize> {
        let layout = self.layout();
        let toolbar_line = layout.toolbar_line_at(line)?;
        let x = column.checked_sub(layout.grid_left)?;
        self.control_spans(self.cols)
            .into_iter()
            .find(|span| span.contains(toolbar_line, x))
            .map(|span| span.index)
    }

    /// Keeps the scroll offset within the content.
    pub fn clamp_scroll(&mut self) {
        let max = self.surface.content_height().saturating_sub(self.layout().grid_height);
        self.scroll = self.scroll.min(max);
    }

    /// Scrolls just enough to show the whole focused card.
    pub fn scroll_to_focused(&mut self) {
        if self.focus != FocusRegion::Cards {
            return;
        }
        let Some(pos) = self.focused_card.and_then(|card| self.surface.position_of(card)) else {
            return;
        };
        let top = to_cells(pos.y);
        let bottom = top + self.surface.geometry().tile_height;
        let height = self.layout().grid_height;

        if top < self.scroll {
            self.scroll = top;
        } else if bottom > self.scroll + height {
            self.scroll = bottom.saturating_sub(height);
        }
    }

    /// Delay until the next tick is needed, if any.
    ///
    /// Ticks drive motion frames, the transition cleanup deadline and the
    /// ticker strip.
    #[must_use]
    pub fn next_tick_delay(&self) -> Option<i64> {
        let now = self.now_ms;
        let frames = self.surface.is_animating(now).then_some(FRAME_INTERVAL_MS);
        let cleanup = self.engine.cleanup_at().map(|deadline| deadline.saturating_sub(now).max(0));
        let ticker = self
            .ticker
            .as_ref()
            .filter(|_| self.sections.ticker)
            .map(|ticker| ticker.cell_interval_ms().max(FRAME_INTERVAL_MS));

        [frames, cleanup, ticker].into_iter().flatten().min()
    }

    /// Computes the view model for a pane of `rows` x `cols`.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let layout = self.layout_for(rows, cols);

        UIViewModel {
            layout,
            header: self.header(),
            ticker: self
                .ticker
                .as_ref()
                .filter(|_| self.sections.ticker)
                .map(|ticker| ticker.frame(self.now_ms, cols)),
            toolbar: self.toolbar_items(&layout, cols),
            body: self.body(&layout),
            footer: self.footer(),
        }
    }

    fn header(&self) -> HeaderInfo {
        let summary = (self.sections.showcase && *self.engine.status() == ShowcaseStatus::Ready).then(|| {
            let total = self.engine.cards().len();
            let visible = self.visible_cards().len();
            format!("{visible} of {total} brands · {}", self.engine.active_token().label())
        });
        HeaderInfo {
            title: TITLE.to_string(),
            summary,
        }
    }

    fn toolbar_items(&self, layout: &PageLayout, cols: usize) -> Vec<ToolbarItem> {
        let (Some(top), Some(toolbar)) = (layout.toolbar_top, self.engine.toolbar()) else {
            return Vec::new();
        };
        let region_focused = self.focus == FocusRegion::Toolbar;

        toolbar
            .controls()
            .into_iter()
            .zip(self.control_spans(cols))
            .map(|(control, span)| ToolbarItem {
                label: control.label,
                pressed: control.pressed,
                focused: region_focused && control.focused,
                line: top + span.line,
                column: layout.grid_left + span.column,
            })
            .collect()
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn body(&self, layout: &PageLayout) -> BodyView {
        if !self.sections.showcase {
            return BodyView::Absent;
        }

        match self.engine.status() {
            ShowcaseStatus::Loading => BodyView::Loading,
            ShowcaseStatus::Empty => BodyView::Message(MessageView {
                lines: vec![NO_BRANDS_MESSAGE.to_string()],
                tone: Tone::Info,
            }),
            ShowcaseStatus::Failed(_) => BodyView::Message(MessageView {
                lines: vec![FETCH_FAILED_MESSAGE.to_string(), RELOAD_HINT.to_string()],
                tone: Tone::Error,
            }),
            ShowcaseStatus::Ready => {
                let geometry = self.surface.geometry();
                let cards_focused = self.focus == FocusRegion::Cards;

                let tiles = self
                    .visible_cards()
                    .into_iter()
                    .filter_map(|id| {
                        let card = self.engine.card(id)?;
                        let pos = self.surface.position_of(id)?;
                        let (dx, dy) = self.surface.offset_of(id, self.now_ms);

                        let image = match &card.image {
                            ImageSlot::Pending => TileImage::Pending,
                            ImageSlot::Loaded => TileImage::Logo(card.alt.clone()),
                            ImageSlot::Fallback { badge } => TileImage::Badge(badge.clone()),
                        };

                        Some(TileView {
                            image,
                            label: card.label.clone(),
                            focused: cards_focused && self.focused_card == Some(id),
                            has_link: card.has_link(),
                            line: i64::from(pos.y) + dy.round() as i64 - self.scroll as i64,
                            column: layout.grid_left as i64 + i64::from(pos.x) + dx.round() as i64,
                            width: geometry.tile_width,
                            height: geometry.tile_height,
                        })
                    })
                    .collect();

                BodyView::Cards(tiles)
            }
        }
    }

    fn footer(&self) -> FooterInfo {
        let keybindings = match self.focus {
            FocusRegion::Toolbar => "←/→: focus | Enter: filter | Tab: cards | r: reload | q: close",
            FocusRegion::Cards => "arrows: move | Enter: open | Tab: filters | r: reload | q: close",
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

#[allow(clippy::cast_sign_loss)]
const fn to_cells(value: i32) -> usize {
    if value < 0 {
        0
    } else {
        value as usize
    }
}
