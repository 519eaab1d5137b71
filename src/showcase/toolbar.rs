//! Category filter toolbar.
//!
//! One control per category token plus a leading "All" control. The toolbar is
//! a one-variable state machine: the active token, initialized to `All`, moves
//! only on explicit activation. Keyboard focus is tracked separately and wraps
//! at both ends without ever activating anything.

use crate::domain::FilterToken;

/// A toolbar control as presented to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolbarControl {
    pub token: FilterToken,
    pub label: String,
    /// Accessible pressed state; true for exactly one control.
    pub pressed: bool,
    pub focused: bool,
}

/// Filter toolbar state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolbar {
    tokens: Vec<FilterToken>,
    active: usize,
    focused: usize,
}

impl Toolbar {
    /// Builds the toolbar from a sorted category vocabulary.
    #[must_use]
    pub fn new(vocabulary: Vec<String>) -> Self {
        let tokens = std::iter::once(FilterToken::All)
            .chain(vocabulary.into_iter().map(FilterToken::Category))
            .collect();
        Self {
            tokens,
            active: 0,
            focused: 0,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The active token.
    #[must_use]
    pub fn active(&self) -> &FilterToken {
        &self.tokens[self.active]
    }

    #[must_use]
    pub const fn active_index(&self) -> usize {
        self.active
    }

    #[must_use]
    pub const fn focused_index(&self) -> usize {
        self.focused
    }

    /// Token of the control holding keyboard focus.
    #[must_use]
    pub fn focused(&self) -> &FilterToken {
        &self.tokens[self.focused]
    }

    /// Moves focus to the next control, wrapping to the first.
    pub fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % self.tokens.len();
    }

    /// Moves focus to the previous control, wrapping to the last.
    pub fn focus_prev(&mut self) {
        self.focused = if self.focused == 0 {
            self.tokens.len() - 1
        } else {
            self.focused - 1
        };
    }

    /// Moves focus to a control by index. Out-of-range indices are ignored.
    pub fn focus(&mut self, index: usize) {
        if index < self.tokens.len() {
            self.focused = index;
        }
    }

    /// Activates the focused control and returns its token.
    pub fn activate_focused(&mut self) -> FilterToken {
        self.active = self.focused;
        self.active().clone()
    }

    /// Activates the control for `token`, also moving focus to it.
    ///
    /// Returns `false` (and changes nothing) when no control carries the token.
    pub fn select(&mut self, token: &FilterToken) -> bool {
        match self.tokens.iter().position(|t| t == token) {
            Some(index) => {
                self.active = index;
                self.focused = index;
                true
            }
            None => false,
        }
    }

    /// Controls in display order.
    #[must_use]
    pub fn controls(&self) -> Vec<ToolbarControl> {
        self.tokens
            .iter()
            .enumerate()
            .map(|(index, token)| ToolbarControl {
                token: token.clone(),
                label: token.label().to_string(),
                pressed: index == self.active,
                focused: index == self.focused,
            })
            .collect()
    }
}
