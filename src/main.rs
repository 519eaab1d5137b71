//! Zellij plugin wrapper and entry point.
//!
//! Translates host events into [`brand_showcase::Event`]s, feeds them to
//! [`handle_event`], and performs the returned [`Action`]s through the host
//! API. Nothing here holds page state beyond what the host needs: the opener
//! command and the last rendered pane size.
//!
//! # Event Mapping
//!
//! - `PermissionRequestResult(Granted)` → `Event::PageReady`
//! - `WebRequestResult` → catalog or logo result, routed by request context
//! - `Timer` → `Event::Tick`
//! - `Mouse(LeftClick)` → `Event::Click`
//! - pane size change seen in `render` → `Event::Resize`
//!
//! # Keybindings
//!
//! - `Left`/`Right`: previous/next control or card
//! - `Up`/`Down`: move between card rows and into the toolbar
//! - `Tab`: switch between toolbar and cards
//! - `Enter`/`Space`: press the focused control or open the focused card
//! - `r`: reload the page
//! - `q`/`Esc`: hide the plugin

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use brand_showcase::catalog::{is_success, RequestKind};
use brand_showcase::{handle_event, Action, Config, Event};

register_plugin!(State);

struct State {
    app: brand_showcase::AppState,
    opener: String,
    size: (usize, usize),
}

impl Default for State {
    fn default() -> Self {
        let config = Config::default();
        Self {
            app: brand_showcase::initialize(&config),
            opener: config.opener,
            size: (0, 0),
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        brand_showcase::observability::init_tracing(&config);

        let _guard = tracing::debug_span!("plugin_load").entered();
        tracing::debug!(base_url = %config.base_url, sections = ?config.sections, "parsed configuration");

        self.app = brand_showcase::initialize(&config);
        self.opener.clone_from(&config.opener);

        request_permission(&[PermissionType::WebAccess, PermissionType::RunCommands]);
        subscribe(&[
            EventType::Key,
            EventType::Mouse,
            EventType::WebRequestResult,
            EventType::Timer,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::event_name(&event);
        let _guard = tracing::debug_span!("plugin_update", event_type = %event_name).entered();

        let now_ms = chrono::Utc::now().timestamp_millis();
        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match Self::map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Mouse(Mouse::LeftClick(line, column)) => {
                let Ok(line) = usize::try_from(line) else {
                    return false;
                };
                Event::Click { line, column }
            }
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match Self::map_web_result(status, body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::Timer(_elapsed) => Event::Tick { now_ms },
            zellij_tile::prelude::Event::PermissionRequestResult(PermissionStatus::Granted) => {
                tracing::debug!("permissions granted - loading page");
                Event::PageReady
            }
            zellij_tile::prelude::Event::PermissionRequestResult(PermissionStatus::Denied) => {
                tracing::warn!("permissions denied - catalog cannot be fetched");
                return false;
            }
            _ => return false,
        };

        self.dispatch(&our_event, now_ms)
    }

    fn render(&mut self, rows: usize, cols: usize) {
        if self.size != (rows, cols) {
            self.size = (rows, cols);
            let now_ms = chrono::Utc::now().timestamp_millis();
            self.dispatch(&Event::Resize { rows, cols }, now_ms);
        }
        brand_showcase::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Handles `event` and any events its actions feed straight back.
    fn dispatch(&mut self, event: &Event, now_ms: i64) -> bool {
        self.app.set_clock(now_ms);
        let mut pending = vec![event.clone()];
        let mut render = false;

        while let Some(event) = pending.pop() {
            match handle_event(&mut self.app, &event) {
                Ok((should_render, actions)) => {
                    tracing::debug!(action_count = actions.len(), should_render, "event handled");
                    render |= should_render;
                    pending.extend(actions.iter().filter_map(|action| self.execute_action(action)));
                }
                Err(e) => tracing::debug!(error = %e, "error handling event"),
            }
        }
        render
    }

    fn event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Mouse(..) => "Mouse".to_string(),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => format!("WebRequestResult({status})"),
            zellij_tile::prelude::Event::Timer(..) => "Timer".to_string(),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => "PermissionRequestResult".to_string(),
            _ => "Other".to_string(),
        }
    }

    fn map_key_event(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Left => Event::FocusPrev,
            BareKey::Right => Event::FocusNext,
            BareKey::Up => Event::FocusUp,
            BareKey::Down => Event::FocusDown,
            BareKey::Tab => Event::ToggleRegion,
            BareKey::Enter | BareKey::Char(' ') => Event::Activate,
            BareKey::Char('r') => Event::Reload,
            BareKey::Char('q') | BareKey::Esc => Event::CloseFocus,
            _ => return None,
        })
    }

    /// Routes a web result by the context it was requested with.
    fn map_web_result(status: u16, body: Vec<u8>, context: &BTreeMap<String, String>) -> Option<Event> {
        let Some((kind, generation)) = RequestKind::from_context(context) else {
            tracing::debug!(?context, "ignoring web result with unknown context");
            return None;
        };

        Some(match kind {
            RequestKind::Catalog if is_success(status) => Event::CatalogResponse {
                generation,
                status,
                body,
            },
            RequestKind::Catalog => Event::CatalogFailed {
                generation,
                error: format!("HTTP {status}: {}", String::from_utf8_lossy(&body).trim()),
            },
            RequestKind::Image { card } if is_success(status) && !body.is_empty() => {
                Event::ImageLoaded { generation, card }
            }
            RequestKind::Image { card } => Event::ImageFailed { generation, card },
        })
    }

    /// Performs `action` against the host. Returns the event to handle next
    /// when the action reports back without a host round trip.
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) -> Option<Event> {
        match action {
            Action::CloseFocus => hide_self(),
            Action::FetchCatalog { url, generation } => {
                web_request(
                    url,
                    HttpVerb::Get,
                    BTreeMap::new(),
                    vec![],
                    RequestKind::Catalog.to_context(*generation),
                );
            }
            Action::FetchImage { card, url, generation } => {
                web_request(
                    url,
                    HttpVerb::Get,
                    BTreeMap::new(),
                    vec![],
                    RequestKind::Image { card: *card }.to_context(*generation),
                );
            }
            Action::ScheduleTick { after_ms } => {
                #[allow(clippy::cast_precision_loss)]
                set_timeout(*after_ms as f64 / 1000.0);
            }
            Action::ReportImageError { card, generation } => {
                return Some(Event::ImageFailed {
                    generation: *generation,
                    card: *card,
                });
            }
            Action::OpenLink { url } => {
                run_command(&[self.opener.as_str(), url.as_str()], BTreeMap::new());
            }
        }
        None
    }
}
