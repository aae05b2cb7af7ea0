//! Board Context
//!
//! Shared signals provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::BoardConfig;

/// Board-wide signals provided via context
#[derive(Clone, Copy)]
pub struct BoardContext {
    pub config: BoardConfig,
    /// Confirmation toast visibility - read
    pub toast_open: ReadSignal<bool>,
    /// Confirmation toast visibility - write
    set_toast_open: WriteSignal<bool>,
    /// Bumped on every `notify`, so a stale timer won't hide a newer toast
    pub toast_epoch: ReadSignal<u32>,
    set_toast_epoch: WriteSignal<u32>,
}

impl BoardContext {
    pub fn new(config: BoardConfig) -> Self {
        let (toast_open, set_toast_open) = signal(false);
        let (toast_epoch, set_toast_epoch) = signal(0u32);
        Self {
            config,
            toast_open,
            set_toast_open,
            toast_epoch,
            set_toast_epoch,
        }
    }

    /// Show the confirmation toast
    pub fn notify(&self) {
        self.set_toast_epoch.update(|v| *v = v.wrapping_add(1));
        self.set_toast_open.set(true);
    }

    /// Hide the toast if no newer notification arrived since `epoch`
    pub fn dismiss(&self, epoch: u32) {
        if self.toast_epoch.get_untracked() == epoch {
            self.set_toast_open.set(false);
        }
    }
}

pub fn use_board_context() -> BoardContext {
    expect_context::<BoardContext>()
}
