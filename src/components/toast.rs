//! Toast Component
//!
//! Confirmation shown after a successful drop. Hides itself after the
//! configured duration.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_board_context;

#[component]
pub fn Toast(#[prop(into)] message: String) -> impl IntoView {
    let ctx = use_board_context();
    let duration = ctx.config.toast_duration_ms;

    Effect::new(move |_| {
        if !ctx.toast_open.get() {
            return;
        }
        let epoch = ctx.toast_epoch.get();
        spawn_local(async move {
            TimeoutFuture::new(duration).await;
            ctx.dismiss(epoch);
        });
    });

    view! {
        <Show when=move || ctx.toast_open.get()>
            <div class="toast" role="status">{message.clone()}</div>
        </Show>
    }
}
