//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin runtime (main.rs) and the showcase, ticker and UI
//! layers:
//!
//! ```text
//! Host callback → Event → handle_event → AppState mutation → Actions → Host effects
//!                   ↑                                             │
//!                   └──────── HTTP results, timer ticks ──────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Keyboard focus regions
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::FocusRegion;
pub use state::AppState;
