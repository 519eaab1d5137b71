//! Top-level rendering coordinator.

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI to stdout.
///
/// Computes the view model from application state and draws every mounted
/// section at its layout position.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let _span = tracing::trace_span!("render", rows = rows, cols = cols).entered();
    let viewmodel = state.compute_viewmodel(rows, cols);
    components::render_page(&viewmodel, &state.theme);
}
