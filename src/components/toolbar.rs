//! Toolbar Component
//!
//! Undo and Reset buttons above the tables.

use leptos::prelude::*;

use crate::context::use_board_context;
use crate::store::{store_reset, store_undo, use_board_store};

#[component]
pub fn Toolbar() -> impl IntoView {
    let ctx = use_board_context();
    let store = use_board_store();
    let config = ctx.config;

    let can_undo = move || store.with(|state| state.can_undo());

    view! {
        <div class="toolbar">
            <button
                class="toolbar-btn"
                class:dimmed=move || !can_undo()
                on:click=move |_| {
                    store_undo(&store, &config);
                }
            >
                "Undo"
            </button>
            <button
                class="toolbar-btn"
                on:click=move |_| store_reset(&store, &config)
            >
                "Reset"
            </button>
        </div>
    }
}
