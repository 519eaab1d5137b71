//! Event handling and state transition logic.
//!
//! The shim translates every host callback into an [`Event`]; [`handle_event`]
//! applies it to the [`AppState`] and returns whether to re-render plus the
//! [`Action`]s to execute. Catalog and image results carry the generation of
//! the page load that requested them, and results from an older generation
//! are dropped.
//!
//! # Event Types
//!
//! - **Lifecycle**: `PageReady`, `Reload`, `Resize`, `Tick`, `CloseFocus`
//! - **Catalog**: `CatalogResponse`, `CatalogFailed`
//! - **Images**: `ImageLoaded`, `ImageFailed`
//! - **Navigation**: `FocusPrev`, `FocusNext`, `FocusUp`, `FocusDown`,
//!   `ToggleRegion`, `Activate`, `Click`

use super::modes::FocusRegion;
use crate::app::{Action, AppState};
use crate::catalog::{parse_response, Catalog};
use crate::domain::error::Result;
use crate::domain::ShowcaseError;
use crate::infrastructure::{catalog_url, is_absolute_url, resolve_asset_url};
use crate::showcase::{CardId, FilterOutcome};
use crate::ticker::Ticker;

/// Events triggered by user input, host callbacks or timers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Permissions are granted and the page can load.
    PageReady,

    /// The catalog request completed with an HTTP status.
    CatalogResponse {
        generation: u32,
        status: u16,
        body: Vec<u8>,
    },

    /// The catalog request failed before producing a response.
    CatalogFailed {
        generation: u32,
        error: String,
    },

    ImageLoaded {
        generation: u32,
        card: CardId,
    },

    ImageFailed {
        generation: u32,
        card: CardId,
    },

    /// Left arrow.
    FocusPrev,
    /// Right arrow.
    FocusNext,
    FocusUp,
    FocusDown,
    /// Switches between the toolbar and the cards.
    ToggleRegion,
    /// Enter or Space on the focused control or card.
    Activate,
    /// Left click at a 0-based pane position.
    Click {
        line: usize,
        column: usize,
    },

    /// Timer callback.
    Tick {
        now_ms: i64,
    },

    Resize {
        rows: usize,
        cols: usize,
    },

    /// Discards the page and loads it again.
    Reload,

    CloseFocus,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Errors
///
/// Currently infallible; the `Result` keeps the shim's error path in place for
/// host-facing failures.
///
/// # Example
///
/// ```rust
/// use brand_showcase::{handle_event, initialize, Config, Event};
///
/// let mut state = initialize(&Config::default());
/// let (render, actions) = handle_event(&mut state, &Event::FocusNext)?;
/// assert!(!render && actions.is_empty());
/// # Ok::<(), brand_showcase::ShowcaseError>(())
/// ```
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = %event_name(event)).entered();

    let mut actions = Vec::new();

    let render = match event {
        Event::PageReady => {
            load_page(state, &mut actions);
            true
        }
        Event::Reload => {
            tracing::debug!("manual reload");
            state.reset();
            load_page(state, &mut actions);
            true
        }
        Event::CatalogResponse { generation, status, body } => {
            if is_stale(state, *generation) {
                return Ok((false, actions));
            }
            render_catalog(state, parse_response(*status, body), &mut actions);
            true
        }
        Event::CatalogFailed { generation, error } => {
            if is_stale(state, *generation) {
                return Ok((false, actions));
            }
            render_catalog(state, Err(ShowcaseError::Fetch(error.clone())), &mut actions);
            true
        }
        Event::ImageLoaded { generation, card } => {
            !is_stale(state, *generation) && state.engine.handle_image_loaded(*card)
        }
        Event::ImageFailed { generation, card } => {
            !is_stale(state, *generation) && state.engine.handle_image_error(*card)
        }
        Event::FocusPrev => move_focus(state, -1),
        Event::FocusNext => move_focus(state, 1),
        Event::FocusUp => move_vertical(state, false),
        Event::FocusDown => move_vertical(state, true),
        Event::ToggleRegion => toggle_region(state),
        Event::Activate => activate(state, &mut actions),
        Event::Click { line, column } => click(state, *line, *column, &mut actions),
        Event::Tick { now_ms } => tick(state, *now_ms),
        Event::Resize { rows, cols } => {
            state.resize(*rows, *cols);
            true
        }
        Event::CloseFocus => {
            actions.push(Action::CloseFocus);
            false
        }
    };

    schedule_tick(state, &mut actions);
    Ok((render, actions))
}

const fn event_name(event: &Event) -> &'static str {
    match event {
        Event::PageReady => "PageReady",
        Event::CatalogResponse { .. } => "CatalogResponse",
        Event::CatalogFailed { .. } => "CatalogFailed",
        Event::ImageLoaded { .. } => "ImageLoaded",
        Event::ImageFailed { .. } => "ImageFailed",
        Event::FocusPrev => "FocusPrev",
        Event::FocusNext => "FocusNext",
        Event::FocusUp => "FocusUp",
        Event::FocusDown => "FocusDown",
        Event::ToggleRegion => "ToggleRegion",
        Event::Activate => "Activate",
        Event::Click { .. } => "Click",
        Event::Tick { .. } => "Tick",
        Event::Resize { .. } => "Resize",
        Event::Reload => "Reload",
        Event::CloseFocus => "CloseFocus",
    }
}

fn is_stale(state: &AppState, generation: u32) -> bool {
    let stale = generation != state.generation;
    if stale {
        tracing::debug!(generation = generation, current = state.generation, "dropping stale result");
    }
    stale
}

fn load_page(state: &AppState, actions: &mut Vec<Action>) {
    if !state.sections.showcase && !state.sections.ticker {
        tracing::debug!(error = %ShowcaseError::MissingContainer("showcase"), "nothing to load");
        return;
    }
    let url = catalog_url(&state.base_url);
    tracing::debug!(url = %url, "fetching vendor catalog");
    actions.push(Action::FetchCatalog {
        url,
        generation: state.generation,
    });
}

fn render_catalog(state: &mut AppState, outcome: Result<Catalog>, actions: &mut Vec<Action>) {
    if state.catalog_loaded {
        tracing::debug!("catalog already loaded, ignoring");
        return;
    }
    state.catalog_loaded = true;

    if state.sections.ticker {
        match &outcome {
            Ok(catalog) => {
                state.ticker = Ticker::from_records(catalog.records(), state.ticker_speed, state.now_ms);
            }
            Err(e) => tracing::warn!(error = %e, "failed to populate ticker"),
        }
    }

    if !state.sections.showcase {
        tracing::debug!(error = %ShowcaseError::MissingContainer("showcase"), "showcase skipped");
        return;
    }

    let requests = state.engine.render_catalog(outcome, &mut state.surface);
    for request in requests {
        match request.src {
            Some(src) => actions.push(Action::FetchImage {
                card: request.card,
                url: resolve_asset_url(&state.base_url, &src),
                generation: state.generation,
            }),
            None => actions.push(Action::ReportImageError {
                card: request.card,
                generation: state.generation,
            }),
        }
    }

    state.settle_initial_focus();
    state.clamp_scroll();
}

fn move_focus(state: &mut AppState, step: isize) -> bool {
    match state.focus {
        FocusRegion::Toolbar => match state.engine.toolbar_mut() {
            Some(toolbar) => {
                if step < 0 {
                    toolbar.focus_prev();
                } else {
                    toolbar.focus_next();
                }
                true
            }
            None => false,
        },
        FocusRegion::Cards => state.step_card_focus(step),
    }
}

fn move_vertical(state: &mut AppState, down: bool) -> bool {
    match (state.focus, down) {
        (FocusRegion::Toolbar, true) => enter_cards(state),
        (FocusRegion::Toolbar, false) => false,
        (FocusRegion::Cards, _) => {
            if state.step_card_row(down) {
                true
            } else if !down && state.engine.toolbar().is_some() {
                state.focus = FocusRegion::Toolbar;
                true
            } else {
                false
            }
        }
    }
}

fn enter_cards(state: &mut AppState) -> bool {
    if state.visible_cards().is_empty() {
        return false;
    }
    state.focus = FocusRegion::Cards;
    state.revalidate_focus();
    true
}

fn toggle_region(state: &mut AppState) -> bool {
    match state.focus {
        FocusRegion::Toolbar => enter_cards(state),
        FocusRegion::Cards if state.engine.toolbar().is_some() => {
            state.focus = FocusRegion::Toolbar;
            true
        }
        FocusRegion::Cards => false,
    }
}

fn activate(state: &mut AppState, actions: &mut Vec<Action>) -> bool {
    match state.focus {
        FocusRegion::Toolbar => {
            let now = state.now_ms;
            match state.engine.activate_focused(&mut state.surface, now) {
                Some(outcome) => {
                    after_filter(state, &outcome);
                    true
                }
                None => false,
            }
        }
        FocusRegion::Cards => {
            if let Some(card) = state.focused_card {
                open_card(state, card, actions);
            }
            false
        }
    }
}

fn click(state: &mut AppState, line: usize, column: usize, actions: &mut Vec<Action>) -> bool {
    if let Some(index) = state.control_at(line, column) {
        state.focus = FocusRegion::Toolbar;
        if let Some(toolbar) = state.engine.toolbar_mut() {
            toolbar.focus(index);
        }
        return activate(state, actions);
    }

    if let Some(card) = state.card_at(line, column) {
        state.focus = FocusRegion::Cards;
        state.focused_card = Some(card);
        open_card(state, card, actions);
        return true;
    }

    false
}

fn open_card(state: &AppState, card: CardId, actions: &mut Vec<Action>) {
    let Some(card) = state.engine.card(card) else {
        return;
    };
    if !card.has_link() {
        tracing::debug!(vendor = %card.label, "card has no website");
        return;
    }
    let url = if is_absolute_url(&card.href) {
        card.href.clone()
    } else {
        resolve_asset_url(&state.base_url, &card.href)
    };
    actions.push(Action::OpenLink { url });
}

fn after_filter(state: &mut AppState, outcome: &FilterOutcome) {
    tracing::debug!(visible = outcome.visible, moved = outcome.moved, "filter changed");
    state.revalidate_focus();
}

fn tick(state: &mut AppState, now_ms: i64) -> bool {
    state.set_clock(now_ms);
    // Host timers may fire a little early; any tick consumes the pending one.
    state.tick_due_at = None;

    let had_motion = state.surface.motion_count() > 0;
    let cleaned = state.engine.run_cleanup(&mut state.surface, now_ms);

    had_motion || cleaned || (state.sections.ticker && state.ticker.is_some())
}

/// Requests a tick when one is needed sooner than the outstanding timer.
fn schedule_tick(state: &mut AppState, actions: &mut Vec<Action>) {
    let Some(after_ms) = state.next_tick_delay() else {
        return;
    };
    let due = state.now_ms.saturating_add(after_ms);
    if state.tick_due_at.is_some_and(|pending| pending <= due) {
        return;
    }
    state.tick_due_at = Some(due);
    actions.push(Action::ScheduleTick { after_ms });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{FETCH_FAILED_MESSAGE, FRAME_INTERVAL_MS, NO_BRANDS_MESSAGE};
    use crate::domain::FilterToken;
    use crate::showcase::ShowcaseStatus;
    use crate::test_utils::AppMother;
    use crate::ui::viewmodel::{BodyView, TileImage};

    const CATALOG: &str = r#"[
        {"name": "Zeta", "website": "https://zeta.example", "brand_image": "img/zeta.png", "categories": ["Lighting"]},
        {"name": "Acme", "website": "https://acme.example", "brand_image": "https://cdn.example/acme.png", "categories": ["Lighting", "Decor"]},
        {"name": "Beta", "categories": []}
    ]"#;

    fn fetch_actions(actions: &[Action]) -> Vec<(CardId, String)> {
        actions
            .iter()
            .filter_map(|a| match a {
                Action::FetchImage { card, url, .. } => Some((*card, url.clone())),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_page_ready_fetches_catalog() {
        let mut state = AppMother::fresh();
        let (render, actions) = handle_event(&mut state, &Event::PageReady).unwrap();
        assert!(render);
        assert_eq!(
            actions,
            vec![Action::FetchCatalog {
                url: "http://localhost:5173/vendors_with_images.json".to_string(),
                generation: 0,
            }]
        );
    }

    #[test]
    fn test_page_ready_without_showcase_or_ticker_is_noop() {
        let mut state = AppMother::with_sections("toolbar");
        let (_, actions) = handle_event(&mut state, &Event::PageReady).unwrap();
        assert!(actions.is_empty());
    }

    #[test]
    fn test_catalog_renders_cards_and_requests_logos() {
        let mut state = AppMother::fresh();
        let (_, actions) = handle_event(
            &mut state,
            &Event::CatalogResponse {
                generation: 0,
                status: 200,
                body: CATALOG.as_bytes().to_vec(),
            },
        )
        .unwrap();

        assert_eq!(state.engine.cards().len(), 3);
        assert_eq!(
            fetch_actions(&actions),
            vec![
                (0, "http://localhost:5173/img/zeta.png".to_string()),
                (1, "https://cdn.example/acme.png".to_string()),
            ]
        );
        // No logo URL: the error is reported back instead of a fetch, and the
        // badge only appears once that event arrives.
        assert!(actions.contains(&Action::ReportImageError { card: 2, generation: 0 }));
        assert!(state.engine.card(2).unwrap().fallback_badges().is_empty());
        let (render, _) = handle_event(&mut state, &Event::ImageFailed { generation: 0, card: 2 }).unwrap();
        assert!(render);
        assert_eq!(state.engine.card(2).unwrap().fallback_badges(), vec!["Beta"]);
        assert_eq!(state.focus, FocusRegion::Toolbar);
        assert_eq!(state.ticker.as_ref().unwrap().names(), &["ZETA", "ACME", "BETA"]);
        assert!(actions.iter().any(|a| matches!(a, Action::ScheduleTick { .. })));
    }

    #[test]
    fn test_second_catalog_response_is_ignored() {
        let mut state = AppMother::loaded(CATALOG);
        let (_, actions) = handle_event(
            &mut state,
            &Event::CatalogResponse {
                generation: 0,
                status: 200,
                body: br#"[{"name": "Other"}]"#.to_vec(),
            },
        )
        .unwrap();
        assert_eq!(state.engine.cards().len(), 3);
        assert!(fetch_actions(&actions).is_empty());
    }

    #[test]
    fn test_fetch_failure_shows_apology() {
        let mut state = AppMother::fresh();
        handle_event(
            &mut state,
            &Event::CatalogResponse {
                generation: 0,
                status: 404,
                body: Vec::new(),
            },
        )
        .unwrap();

        assert!(matches!(state.engine.status(), ShowcaseStatus::Failed(_)));
        assert!(state.engine.toolbar().is_none());
        assert!(state.ticker.is_none());
        let vm = state.compute_viewmodel(24, 80);
        assert!(vm.toolbar.is_empty());
        match vm.body {
            BodyView::Message(message) => assert_eq!(message.lines[0], FETCH_FAILED_MESSAGE),
            other => panic!("unexpected body {other:?}"),
        }
    }

    #[test]
    fn test_transport_failure_shows_apology() {
        let mut state = AppMother::fresh();
        handle_event(
            &mut state,
            &Event::CatalogFailed {
                generation: 0,
                error: "connection refused".into(),
            },
        )
        .unwrap();
        assert!(matches!(state.engine.status(), ShowcaseStatus::Failed(m) if m.contains("refused")));
    }

    #[test]
    fn test_empty_catalog_shows_placeholder() {
        let state = AppMother::loaded("[]");
        match state.compute_viewmodel(24, 80).body {
            BodyView::Message(message) => assert_eq!(message.lines, vec![NO_BRANDS_MESSAGE]),
            other => panic!("unexpected body {other:?}"),
        }
    }

    #[test]
    fn test_stale_generation_is_dropped() {
        let mut state = AppMother::fresh();
        handle_event(&mut state, &Event::Reload).unwrap();
        let (render, _) = handle_event(
            &mut state,
            &Event::CatalogResponse {
                generation: 0,
                status: 200,
                body: CATALOG.as_bytes().to_vec(),
            },
        )
        .unwrap();
        assert!(!render);
        assert_eq!(*state.engine.status(), ShowcaseStatus::Loading);
    }

    #[test]
    fn test_reload_discards_state_and_refetches() {
        let mut state = AppMother::loaded(CATALOG);
        let (_, actions) = handle_event(&mut state, &Event::Reload).unwrap();

        assert_eq!(state.generation, 1);
        assert!(state.engine.cards().is_empty());
        assert!(state.ticker.is_none());
        assert!(matches!(actions[0], Action::FetchCatalog { generation: 1, .. }));
    }

    #[test]
    fn test_image_events() {
        let mut state = AppMother::loaded(CATALOG);
        let (render, _) = handle_event(&mut state, &Event::ImageLoaded { generation: 0, card: 1 }).unwrap();
        assert!(render);

        handle_event(&mut state, &Event::ImageFailed { generation: 0, card: 0 }).unwrap();
        let (render, _) = handle_event(&mut state, &Event::ImageFailed { generation: 0, card: 0 }).unwrap();
        assert!(!render);
        assert_eq!(state.engine.card(0).unwrap().fallback_badges(), vec!["Zeta"]);

        let BodyView::Cards(tiles) = state.compute_viewmodel(24, 80).body else {
            panic!("cards expected");
        };
        assert!(tiles.iter().any(|t| t.image == TileImage::Badge("Zeta".into())));
        assert!(tiles.iter().any(|t| t.image == TileImage::Logo("Acme logo".into())));
    }

    #[test]
    fn test_keyboard_filter_flow() {
        let mut state = AppMother::loaded(CATALOG);

        handle_event(&mut state, &Event::FocusNext).unwrap();
        handle_event(&mut state, &Event::FocusNext).unwrap();
        assert_eq!(state.engine.active_token(), FilterToken::All);

        let (render, actions) = handle_event(&mut state, &Event::Activate).unwrap();
        assert!(render);
        assert_eq!(state.engine.active_token(), FilterToken::Category("Lighting".into()));
        assert_eq!(state.visible_cards(), vec![1, 0]);
        assert!(actions.contains(&Action::ScheduleTick {
            after_ms: FRAME_INTERVAL_MS
        }) || state.tick_due_at.is_some());
    }

    #[test]
    fn test_toolbar_focus_wraps() {
        let mut state = AppMother::loaded(CATALOG);
        handle_event(&mut state, &Event::FocusPrev).unwrap();
        assert_eq!(state.engine.toolbar().unwrap().focused_index(), 2);
    }

    #[test]
    fn test_card_navigation_skips_hidden_cards() {
        let mut state = AppMother::loaded(CATALOG);
        handle_event(&mut state, &Event::FocusNext).unwrap();
        handle_event(&mut state, &Event::FocusNext).unwrap();
        handle_event(&mut state, &Event::Activate).unwrap();

        handle_event(&mut state, &Event::ToggleRegion).unwrap();
        assert_eq!(state.focus, FocusRegion::Cards);
        assert_eq!(state.focused_card, Some(0));

        let (moved, _) = handle_event(&mut state, &Event::FocusNext).unwrap();
        assert!(!moved);
        handle_event(&mut state, &Event::FocusPrev).unwrap();
        assert_eq!(state.focused_card, Some(1));
        let (moved, _) = handle_event(&mut state, &Event::FocusPrev).unwrap();
        assert!(!moved);
    }

    #[test]
    fn test_filter_moves_focus_off_hidden_card() {
        let mut state = AppMother::loaded(CATALOG);
        state.focused_card = Some(2);

        handle_event(&mut state, &Event::FocusNext).unwrap();
        handle_event(&mut state, &Event::Activate).unwrap();

        assert_eq!(state.visible_cards(), vec![1]);
        assert_eq!(state.focused_card, Some(1));
    }

    #[test]
    fn test_activating_card_opens_link() {
        let mut state = AppMother::loaded(CATALOG);
        handle_event(&mut state, &Event::ToggleRegion).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::Activate).unwrap();
        assert!(actions.contains(&Action::OpenLink {
            url: "https://zeta.example".into()
        }));

        state.focused_card = Some(2);
        let (_, actions) = handle_event(&mut state, &Event::Activate).unwrap();
        assert!(!actions.iter().any(|a| matches!(a, Action::OpenLink { .. })));
    }

    #[test]
    fn test_click_on_control_filters() {
        let mut state = AppMother::loaded(CATALOG);
        let vm = state.compute_viewmodel(state.rows, state.cols);
        let decor = vm.toolbar.iter().find(|item| item.label == "Decor").unwrap().clone();

        handle_event(
            &mut state,
            &Event::Click {
                line: decor.line,
                column: decor.column + 1,
            },
        )
        .unwrap();
        assert_eq!(state.engine.active_token(), FilterToken::Category("Decor".into()));
        assert_eq!(state.visible_cards(), vec![1]);
    }

    #[test]
    fn test_click_on_card_opens_link() {
        let mut state = AppMother::loaded(CATALOG);
        let layout = state.layout();
        let (_, actions) = handle_event(
            &mut state,
            &Event::Click {
                line: layout.grid_top + 1,
                column: layout.grid_left + 1,
            },
        )
        .unwrap();
        assert_eq!(state.focus, FocusRegion::Cards);
        assert!(actions.contains(&Action::OpenLink {
            url: "https://zeta.example".into()
        }));
    }

    #[test]
    fn test_ticks_drive_motion_and_cleanup() {
        let mut state = AppMother::loaded(CATALOG);
        handle_event(&mut state, &Event::FocusNext).unwrap();
        handle_event(&mut state, &Event::FocusNext).unwrap();
        handle_event(&mut state, &Event::Activate).unwrap();
        assert!(state.surface.motion_count() > 0);

        let start = state.now_ms;
        let (render, _) = handle_event(&mut state, &Event::Tick { now_ms: start + 100 }).unwrap();
        assert!(render);
        assert!(state.surface.is_animating(state.now_ms));

        handle_event(&mut state, &Event::Tick { now_ms: start + 700 }).unwrap();
        assert_eq!(state.surface.motion_count(), 0);
        assert_eq!(state.engine.cleanup_at(), None);
    }

    #[test]
    fn test_missing_toolbar_starts_in_cards() {
        let mut state = AppMother::with_sections("showcase");
        handle_event(
            &mut state,
            &Event::CatalogResponse {
                generation: 0,
                status: 200,
                body: CATALOG.as_bytes().to_vec(),
            },
        )
        .unwrap();
        assert_eq!(state.focus, FocusRegion::Cards);
        assert!(state.engine.toolbar().is_none());
        let (render, _) = handle_event(&mut state, &Event::ToggleRegion).unwrap();
        assert!(!render);
        assert!(state.compute_viewmodel(24, 80).toolbar.is_empty());
    }

    #[test]
    fn test_missing_showcase_keeps_ticker() {
        let mut state = AppMother::with_sections("ticker");
        let (_, actions) = handle_event(
            &mut state,
            &Event::CatalogResponse {
                generation: 0,
                status: 200,
                body: CATALOG.as_bytes().to_vec(),
            },
        )
        .unwrap();
        assert!(state.ticker.is_some());
        assert!(state.engine.cards().is_empty());
        assert!(fetch_actions(&actions).is_empty());
        assert_eq!(state.compute_viewmodel(24, 80).body, BodyView::Absent);
    }

    #[test]
    fn test_filter_with_extreme_timings_does_not_overflow() {
        let mut state = AppMother::configured(&crate::Config {
            transition_ms: i64::MAX,
            cleanup_ms: i64::MAX,
            ..crate::Config::default()
        });
        state.set_clock(1_700_000_000_000);
        handle_event(
            &mut state,
            &Event::CatalogResponse {
                generation: 0,
                status: 200,
                body: CATALOG.as_bytes().to_vec(),
            },
        )
        .unwrap();

        handle_event(&mut state, &Event::FocusNext).unwrap();
        let (render, _) = handle_event(&mut state, &Event::Activate).unwrap();
        assert!(render);
        assert_eq!(state.engine.cleanup_at(), Some(i64::MAX));
        handle_event(&mut state, &Event::Tick { now_ms: 1_700_000_000_100 }).unwrap();
    }

    #[test]
    fn test_early_timer_still_reschedules() {
        let mut state = AppMother::loaded(CATALOG);
        let due = state.tick_due_at.unwrap();

        let (_, actions) = handle_event(&mut state, &Event::Tick { now_ms: due - 5 }).unwrap();
        assert!(actions.iter().any(|a| matches!(a, Action::ScheduleTick { .. })));
        assert!(state.tick_due_at.is_some());
    }

    #[test]
    fn test_close_focus() {
        let mut state = AppMother::fresh();
        let (render, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
        assert!(!render);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }
}
