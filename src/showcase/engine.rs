//! The vendor showcase engine.
//!
//! [`ShowcaseEngine`] owns the cards, the toolbar and the transition settings of
//! one page load. It is constructed explicitly and handed a [`RenderSurface`]
//! for every operation that touches layout; it holds no references to the
//! surface between calls.
//!
//! # Lifecycle
//!
//! ```text
//! Loading ──render_catalog──► Ready ──apply_filter──► Ready ...
//!    │                      ► Empty
//!    └──────────────────────► Failed
//! ```
//!
//! A catalog is rendered at most once; later catalog results are ignored.

use super::card::Card;
use super::flip::Flip;
use super::surface::{CardId, RenderSurface};
use super::toolbar::Toolbar;
use crate::catalog::Catalog;
use crate::domain::{vocabulary, FilterToken, Result, ShowcaseError};
use std::cmp::Ordering;

/// Where the showcase is in its single load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShowcaseStatus {
    /// Waiting for the catalog.
    Loading,
    /// Cards are rendered.
    Ready,
    /// The catalog was empty or malformed.
    Empty,
    /// The catalog could not be fetched; carries the error for diagnostics.
    Failed(String),
}

/// A logo the host should try to load for a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    pub card: CardId,
    /// `None` when the record has no image; the host reports that as an
    /// immediate load error.
    pub src: Option<String>,
}

/// Result of one filter application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome {
    /// Full render order after the filter.
    pub order: Vec<CardId>,
    /// Number of visible (matching) cards.
    pub visible: usize,
    /// Number of cards that started a motion.
    pub moved: usize,
}

/// Vendor showcase state for one page load.
#[derive(Debug, Clone)]
pub struct ShowcaseEngine {
    cards: Vec<Card>,
    toolbar: Option<Toolbar>,
    toolbar_mounted: bool,
    status: ShowcaseStatus,
    flip: Flip,
    cleanup_at: Option<i64>,
}

impl ShowcaseEngine {
    /// Creates an engine awaiting its catalog.
    ///
    /// `toolbar_mounted` says whether the page has a toolbar section; without
    /// one no controls are built and filtering stays inert.
    #[must_use]
    pub const fn new(toolbar_mounted: bool, flip: Flip) -> Self {
        Self {
            cards: Vec::new(),
            toolbar: None,
            toolbar_mounted,
            status: ShowcaseStatus::Loading,
            flip,
            cleanup_at: None,
        }
    }

    #[must_use]
    pub const fn status(&self) -> &ShowcaseStatus {
        &self.status
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id)
    }

    #[must_use]
    pub const fn toolbar(&self) -> Option<&Toolbar> {
        self.toolbar.as_ref()
    }

    pub fn toolbar_mut(&mut self) -> Option<&mut Toolbar> {
        self.toolbar.as_mut()
    }

    /// The active filter token (`All` when no toolbar exists).
    #[must_use]
    pub fn active_token(&self) -> FilterToken {
        self.toolbar
            .as_ref()
            .map_or(FilterToken::All, |toolbar| toolbar.active().clone())
    }

    #[must_use]
    pub const fn flip(&self) -> Flip {
        self.flip
    }

    /// Renders the outcome of the catalog request.
    ///
    /// Builds one card per record in source order and, when the toolbar is
    /// mounted, the filter toolbar. Returns the logo loads the host should
    /// start. Failures never propagate: they become the `Failed` or `Empty`
    /// status.
    pub fn render_catalog<S: RenderSurface>(&mut self, outcome: Result<Catalog>, surface: &mut S) -> Vec<ImageRequest> {
        let _span = tracing::debug_span!("render_catalog").entered();

        if self.status != ShowcaseStatus::Loading {
            tracing::debug!(status = ?self.status, "catalog already rendered, ignoring");
            return Vec::new();
        }

        let records = match outcome {
            Ok(Catalog::Vendors(records)) if !records.is_empty() => records,
            Ok(_) | Err(ShowcaseError::MalformedPayload(_)) => {
                tracing::debug!("no vendors to show");
                self.status = ShowcaseStatus::Empty;
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load vendor data");
                self.status = ShowcaseStatus::Failed(e.to_string());
                return Vec::new();
            }
        };

        self.cards = records
            .iter()
            .enumerate()
            .map(|(id, record)| Card::from_record(id, record))
            .collect();

        let order: Vec<CardId> = (0..self.cards.len()).collect();
        surface.reorder(&order);
        for &card in &order {
            surface.set_hidden(card, false);
        }

        if self.toolbar_mounted {
            let toolbar = Toolbar::new(vocabulary(&records));
            tracing::debug!(controls = toolbar.len(), "toolbar built");
            self.toolbar = Some(toolbar);
        } else {
            tracing::debug!(error = %ShowcaseError::MissingContainer("toolbar"), "filtering disabled");
        }

        self.status = ShowcaseStatus::Ready;
        tracing::debug!(card_count = self.cards.len(), "showcase rendered");

        self.cards
            .iter()
            .map(|card| ImageRequest {
                card: card.id,
                src: card.image_src.clone(),
            })
            .collect()
    }

    /// Applies a filter token to every card.
    ///
    /// Matching cards move to the front and non-matching cards to the back,
    /// each block ordered by name (case-insensitive, ties in source order).
    /// Non-matching cards are hidden, matching ones shown, and every card whose
    /// position changed slides from its old slot. Applying the same token twice
    /// yields the same order and starts no new motion.
    pub fn apply_filter<S: RenderSurface>(&mut self, token: &FilterToken, surface: &mut S, now_ms: i64) -> FilterOutcome {
        let _span = tracing::debug_span!("apply_filter", token = %token, cards = self.cards.len()).entered();

        if let Some(toolbar) = self.toolbar.as_mut() {
            if !toolbar.select(token) {
                tracing::debug!(token = %token, "token has no toolbar control");
            }
        }

        for card in &mut self.cards {
            let matches = token.matches(&card.categories);
            card.state.matches_active_filter = matches;
            card.state.visible = matches;
        }

        let order = self.partitioned_order();
        let all: Vec<CardId> = (0..self.cards.len()).collect();
        let cards = &self.cards;

        let report = self.flip.run(
            surface,
            &all,
            |surface| {
                surface.reorder(&order);
                for card in cards {
                    surface.set_hidden(card.id, !card.state.visible);
                }
            },
            now_ms,
        );

        if report.moved > 0 {
            self.cleanup_at = Some(report.cleanup_at);
        }

        let visible = self.cards.iter().filter(|c| c.state.visible).count();
        tracing::debug!(visible = visible, moved = report.moved, "filter applied");

        FilterOutcome {
            order,
            visible,
            moved: report.moved,
        }
    }

    /// Activates the focused toolbar control and applies its token.
    ///
    /// Returns `None` when no toolbar is mounted.
    pub fn activate_focused<S: RenderSurface>(&mut self, surface: &mut S, now_ms: i64) -> Option<FilterOutcome> {
        let token = self.toolbar.as_mut()?.activate_focused();
        Some(self.apply_filter(&token, surface, now_ms))
    }

    /// Reacts to a card's logo error event. Returns whether anything changed.
    pub fn handle_image_error(&mut self, card: CardId) -> bool {
        let Some(target) = self.cards.get_mut(card) else {
            tracing::debug!(card = card, "image error for unknown card");
            return false;
        };
        let changed = target.install_fallback();
        if changed {
            tracing::debug!(error = %ShowcaseError::ImageLoad { card }, vendor = %target.label, "fallback badge installed");
        }
        changed
    }

    /// Reacts to a card's logo load event. Returns whether anything changed.
    pub fn handle_image_loaded(&mut self, card: CardId) -> bool {
        self.cards.get_mut(card).is_some_and(Card::mark_loaded)
    }

    /// Deadline of the pending transition cleanup, if any.
    #[must_use]
    pub const fn cleanup_at(&self) -> Option<i64> {
        self.cleanup_at
    }

    /// Clears settled transition state once the cleanup deadline has passed.
    ///
    /// Returns whether the cleanup ran.
    pub fn run_cleanup<S: RenderSurface>(&mut self, surface: &mut S, now_ms: i64) -> bool {
        match self.cleanup_at {
            Some(deadline) if now_ms >= deadline => {
                surface.clear_settled(now_ms);
                self.cleanup_at = None;
                true
            }
            _ => false,
        }
    }

    fn partitioned_order(&self) -> Vec<CardId> {
        let mut cards: Vec<&Card> = self.cards.iter().collect();
        cards.sort_by(|a, b| render_order(a, b));
        cards.into_iter().map(|card| card.id).collect()
    }
}

/// Compares two cards the way the render order does.
#[must_use]
pub fn render_order(a: &Card, b: &Card) -> Ordering {
    b.state
        .matches_active_filter
        .cmp(&a.state.matches_active_filter)
        .then_with(|| a.sort_key.cmp(&b.sort_key))
        .then_with(|| a.id.cmp(&b.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::showcase::card::ImageSlot;
    use crate::showcase::GridSurface;
    use crate::test_utils::{EngineMother, SurfaceMother, VendorMother};

    fn labels(engine: &ShowcaseEngine, order: &[CardId]) -> Vec<String> {
        order.iter().map(|&id| engine.cards()[id].label.clone()).collect()
    }

    fn lighting() -> FilterToken {
        FilterToken::Category("Lighting".to_string())
    }

    #[test]
    fn test_initial_render_is_source_order() {
        let (engine, surface) = EngineMother::loaded(VendorMother::lighting_trio());
        assert_eq!(engine.status(), &ShowcaseStatus::Ready);
        assert_eq!(labels(&engine, surface.order()), vec!["Zeta", "Acme", "Beta"]);
        assert!(engine.cards().iter().all(|c| c.state.visible));
    }

    #[test]
    fn test_lighting_filter_example() {
        let (mut engine, mut surface) = EngineMother::loaded(VendorMother::lighting_trio());

        let outcome = engine.apply_filter(&lighting(), &mut surface, 0);

        assert_eq!(labels(&engine, &outcome.order), vec!["Acme", "Zeta", "Beta"]);
        assert_eq!(surface.order(), outcome.order.as_slice());
        assert_eq!(outcome.visible, 2);

        let visible: Vec<(String, bool)> = engine
            .cards()
            .iter()
            .map(|c| (c.label.clone(), c.state.visible))
            .collect();
        assert!(visible.contains(&("Acme".to_string(), true)));
        assert!(visible.contains(&("Zeta".to_string(), true)));
        assert!(visible.contains(&("Beta".to_string(), false)));
        assert!(surface.is_hidden(2));
    }

    #[test]
    fn test_uncategorized_record_matches_only_all() {
        let (mut engine, mut surface) = EngineMother::loaded(VendorMother::lighting_trio());

        for token in [lighting(), FilterToken::Category("Decor".into())] {
            engine.apply_filter(&token, &mut surface, 0);
            assert!(!engine.card(2).unwrap().state.matches_active_filter);
        }

        engine.apply_filter(&FilterToken::All, &mut surface, 0);
        assert!(engine.card(2).unwrap().state.matches_active_filter);
    }

    #[test]
    fn test_partition_is_two_sorted_blocks() {
        let records = vec![
            VendorMother::with_categories("delta", &["Rugs"]),
            VendorMother::with_categories("Alpha", &[]),
            VendorMother::with_categories("charlie", &["rugs", "Art"]),
            VendorMother::with_categories("Bravo", &["Art"]),
            VendorMother::with_categories("echo", &["RUGS"]),
        ];
        let (mut engine, mut surface) = EngineMother::loaded(records);

        let outcome = engine.apply_filter(&FilterToken::Category("Rugs".into()), &mut surface, 0);
        assert_eq!(
            labels(&engine, &outcome.order),
            vec!["charlie", "delta", "echo", "Alpha", "Bravo"]
        );

        let flags: Vec<bool> = outcome
            .order
            .iter()
            .map(|&id| engine.card(id).unwrap().state.matches_active_filter)
            .collect();
        assert_eq!(flags, vec![true, true, true, false, false]);
    }

    #[test]
    fn test_ties_keep_source_order() {
        let records = vec![
            VendorMother::with_categories("Same", &["A"]),
            VendorMother::with_categories("same", &["A"]),
        ];
        let (mut engine, mut surface) = EngineMother::loaded(records);
        let outcome = engine.apply_filter(&FilterToken::All, &mut surface, 0);
        assert_eq!(outcome.order, vec![0, 1]);
    }

    #[test]
    fn test_filter_is_idempotent_with_no_second_motion() {
        let (mut engine, mut surface) = EngineMother::loaded(VendorMother::lighting_trio());

        let first = engine.apply_filter(&lighting(), &mut surface, 0);
        assert!(first.moved > 0);
        let motions_after_first: Vec<_> = (0..3).map(|id| surface.motion_of(id).copied()).collect();

        let second = engine.apply_filter(&lighting(), &mut surface, 10);
        assert_eq!(second.order, first.order);
        assert_eq!(second.visible, first.visible);
        assert_eq!(second.moved, 0);

        let motions_after_second: Vec<_> = (0..3).map(|id| surface.motion_of(id).copied()).collect();
        assert_eq!(motions_after_first, motions_after_second);
    }

    #[test]
    fn test_all_after_filter_restores_visibility_alphabetically() {
        let (mut engine, mut surface) = EngineMother::loaded(VendorMother::lighting_trio());
        engine.apply_filter(&FilterToken::Category("Decor".into()), &mut surface, 0);

        let outcome = engine.apply_filter(&FilterToken::All, &mut surface, 100);
        assert_eq!(labels(&engine, &outcome.order), vec!["Acme", "Beta", "Zeta"]);
        assert_eq!(outcome.visible, 3);
        assert!(engine.cards().iter().all(|c| c.state.visible));
        assert_eq!(surface.visible_cards().count(), 3);
    }

    #[test]
    fn test_moved_cards_start_at_old_offset() {
        let (mut engine, mut surface) = EngineMother::loaded(VendorMother::lighting_trio());

        engine.apply_filter(&lighting(), &mut surface, 1_000);

        let acme = surface.motion_of(1).unwrap();
        assert_eq!((acme.from_x, acme.from_y), (0.0, 4.0));
        assert_eq!(acme.started_at, 1_000);
        assert_eq!(acme.duration_ms, 450);

        let zeta = surface.motion_of(0).unwrap();
        assert_eq!((zeta.from_x, zeta.from_y), (0.0, -4.0));

        assert!(surface.motion_of(2).is_none(), "hidden card must not animate");
        assert_eq!(engine.cleanup_at(), Some(1_600));
    }

    #[test]
    fn test_rapid_filters_measure_live_layout() {
        let (mut engine, mut surface) = EngineMother::loaded(VendorMother::lighting_trio());

        engine.apply_filter(&lighting(), &mut surface, 0);
        let outcome = engine.apply_filter(&FilterToken::All, &mut surface, 50);

        assert_eq!(labels(&engine, &outcome.order), vec!["Acme", "Beta", "Zeta"]);
        // Zeta moved from slot 1 to slot 2 of the live layout.
        let zeta = surface.motion_of(0).unwrap();
        assert_eq!(zeta.started_at, 50);
        assert!(zeta.from_y < 0.0);
    }

    #[test]
    fn test_cleanup_waits_for_deadline() {
        let (mut engine, mut surface) = EngineMother::loaded(VendorMother::lighting_trio());
        engine.apply_filter(&lighting(), &mut surface, 0);

        assert!(!engine.run_cleanup(&mut surface, 599));
        assert!(surface.motion_count() > 0);
        assert!(engine.run_cleanup(&mut surface, 600));
        assert_eq!(surface.motion_count(), 0);
        assert_eq!(engine.cleanup_at(), None);
    }

    #[test]
    fn test_cleanup_spares_later_transition() {
        let (mut engine, mut surface) = EngineMother::loaded(VendorMother::lighting_trio());
        engine.apply_filter(&lighting(), &mut surface, 0);
        engine.apply_filter(&FilterToken::All, &mut surface, 300);

        surface.clear_settled(600);
        assert!(surface.is_animating(600));
    }

    #[test]
    fn test_empty_catalog_shows_placeholder() {
        let mut engine = EngineMother::with_toolbar();
        let mut surface = SurfaceMother::columns(2);
        let requests = engine.render_catalog(Ok(Catalog::Empty), &mut surface);

        assert!(requests.is_empty());
        assert_eq!(engine.status(), &ShowcaseStatus::Empty);
        assert!(engine.cards().is_empty());
        assert!(engine.toolbar().is_none());
        assert!(surface.order().is_empty());
    }

    #[test]
    fn test_malformed_payload_shows_placeholder() {
        let mut engine = EngineMother::with_toolbar();
        let mut surface = SurfaceMother::columns(2);
        let outcome = crate::catalog::parse_response(200, br#"{"not": "an array"}"#);
        engine.render_catalog(outcome, &mut surface);
        assert_eq!(engine.status(), &ShowcaseStatus::Empty);
        assert!(engine.cards().is_empty());
    }

    #[test]
    fn test_fetch_failure_is_terminal() {
        let mut engine = EngineMother::with_toolbar();
        let mut surface = SurfaceMother::columns(2);
        engine.render_catalog(Err(ShowcaseError::Fetch("HTTP 500".into())), &mut surface);

        assert!(matches!(engine.status(), ShowcaseStatus::Failed(m) if m.contains("500")));
        assert!(engine.toolbar().is_none());

        let late = engine.render_catalog(Ok(Catalog::Vendors(VendorMother::lighting_trio())), &mut surface);
        assert!(late.is_empty());
        assert!(engine.cards().is_empty());
    }

    #[test]
    fn test_toolbar_built_from_vocabulary() {
        let (engine, _) = EngineMother::loaded(VendorMother::lighting_trio());
        let labels: Vec<String> = engine.toolbar().unwrap().controls().into_iter().map(|c| c.label).collect();
        assert_eq!(labels, vec!["All", "Decor", "Lighting"]);
        assert_eq!(engine.active_token(), FilterToken::All);
    }

    #[test]
    fn test_missing_toolbar_keeps_cards() {
        let mut engine = EngineMother::without_toolbar();
        let mut surface: GridSurface = SurfaceMother::columns(1);
        engine.render_catalog(Ok(Catalog::Vendors(VendorMother::lighting_trio())), &mut surface);

        assert_eq!(engine.cards().len(), 3);
        assert!(engine.toolbar().is_none());
        assert!(engine.activate_focused(&mut surface, 0).is_none());
        assert_eq!(surface.order(), &[0, 1, 2]);
    }

    #[test]
    fn test_activate_focused_applies_token() {
        let (mut engine, mut surface) = EngineMother::loaded(VendorMother::lighting_trio());
        let toolbar = engine.toolbar_mut().unwrap();
        toolbar.focus_next();
        toolbar.focus_next();

        let outcome = engine.activate_focused(&mut surface, 0).unwrap();
        assert_eq!(engine.active_token(), lighting());
        assert_eq!(outcome.visible, 2);
    }

    #[test]
    fn test_apply_filter_syncs_toolbar() {
        let (mut engine, mut surface) = EngineMother::loaded(VendorMother::lighting_trio());
        engine.apply_filter(&FilterToken::Category("Decor".into()), &mut surface, 0);
        let pressed: Vec<String> = engine
            .toolbar()
            .unwrap()
            .controls()
            .into_iter()
            .filter(|c| c.pressed)
            .map(|c| c.label)
            .collect();
        assert_eq!(pressed, vec!["Decor"]);
    }

    #[test]
    fn test_image_error_installs_single_fallback() {
        let records = vec![VendorMother::with_image("Acme", "https://unreachable.invalid/logo.png")];
        let (mut engine, _) = EngineMother::loaded(records);

        assert!(engine.handle_image_error(0));
        assert!(!engine.handle_image_error(0));
        assert!(!engine.handle_image_error(42));

        let card = engine.card(0).unwrap();
        assert!(card.image_hidden());
        assert_eq!(card.fallback_badges(), vec!["Acme"]);
    }

    #[test]
    fn test_image_error_after_reorder_and_hide() {
        let (mut engine, mut surface) = EngineMother::loaded(VendorMother::lighting_trio());
        engine.apply_filter(&lighting(), &mut surface, 0);

        assert!(engine.handle_image_error(2));
        assert!(surface.is_hidden(2));
        assert_eq!(engine.card(2).unwrap().fallback_badges(), vec!["Beta"]);
    }

    #[test]
    fn test_image_requests_cover_every_card() {
        let records = vec![VendorMother::with_image("Acme", "a.png"), VendorMother::named("Beta")];
        let mut engine = EngineMother::with_toolbar();
        let mut surface = SurfaceMother::columns(1);
        let requests = engine.render_catalog(Ok(Catalog::Vendors(records)), &mut surface);

        assert_eq!(
            requests,
            vec![
                ImageRequest { card: 0, src: Some("a.png".into()) },
                ImageRequest { card: 1, src: None },
            ]
        );
        assert!(engine.handle_image_loaded(0));
        assert_eq!(engine.card(0).unwrap().image, ImageSlot::Loaded);
    }

    #[test]
    fn test_render_order_comparator_matches_engine() {
        let (mut engine, mut surface) = EngineMother::loaded(VendorMother::lighting_trio());
        let outcome = engine.apply_filter(&lighting(), &mut surface, 0);

        let mut cards = engine.cards().to_vec();
        cards.sort_by(render_order);
        let sorted: Vec<CardId> = cards.iter().map(|c| c.id).collect();
        assert_eq!(sorted, outcome.order);
    }
}
