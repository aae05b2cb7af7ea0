//! Board App
//!
//! Title, toolbar and the two tables side by side.

use leptos::prelude::*;
use leptos_dragdrop::create_drag_hover;

use crate::components::{SourceTable, TargetTable, Toast, Toolbar};
use crate::config::BoardConfig;
use crate::context::BoardContext;
use crate::store::create_board_store;

#[component]
pub fn App() -> impl IntoView {
    let config = BoardConfig::default();

    // Provide context to all children
    provide_context(create_board_store(&config));
    provide_context(BoardContext::new(config));

    // Target row currently under the dragged row
    let hover = create_drag_hover::<u32>();

    view! {
        <h1>"Tables with drag-n-drop rows"</h1>
        <div class="board">
            <Toolbar />
            <div class="board-tables">
                <Toast message="Id has been added" />
                // Left: drop targets
                <TargetTable hover=hover />
                // Right: drag source
                <SourceTable hover=hover />
            </div>
        </div>
    }
}
