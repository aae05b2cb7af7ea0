//! Leptos DragDrop Utilities
//!
//! HTML5 drag-and-drop for Leptos. The dragged value travels as JSON in the
//! event's `DataTransfer` under a media-type key; drop targets read it back
//! and get `None` when it is missing or malformed.

use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use web_sys::DragEvent;

#[derive(Debug, Error)]
pub enum DragError {
    #[error("drag event carries no DataTransfer")]
    NoDataTransfer,
    #[error("failed to serialize drag payload: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("DataTransfer rejected the payload: {0}")]
    Js(String),
}

/// Which drop target the pointer is currently over
#[derive(Clone, Copy)]
pub struct DragHover<K: Send + Sync + 'static> {
    pub hovered_read: ReadSignal<Option<K>>,
    pub hovered_write: WriteSignal<Option<K>>,
}

pub fn create_drag_hover<K: Send + Sync + 'static>() -> DragHover<K> {
    let (hovered_read, hovered_write) = signal(None::<K>);
    DragHover {
        hovered_read,
        hovered_write,
    }
}

impl<K: Copy + PartialEq + Send + Sync + 'static> DragHover<K> {
    /// Tracked check, for class bindings
    pub fn is_hovered(&self, key: K) -> bool {
        self.hovered_read.get() == Some(key)
    }

    pub fn clear(&self) {
        self.hovered_write.set(None);
    }
}

/// Store `payload` as JSON in the event's DataTransfer under `mime`
pub fn set_drag_payload<T: Serialize>(ev: &DragEvent, mime: &str, payload: &T) -> Result<(), DragError> {
    let transfer = ev.data_transfer().ok_or(DragError::NoDataTransfer)?;
    let json = serde_json::to_string(payload)?;
    transfer
        .set_data(mime, &json)
        .map_err(|e| DragError::Js(format!("{:?}", e)))?;
    transfer.set_effect_allowed("move");
    Ok(())
}

/// Read a JSON payload stored under `mime`
pub fn read_drag_payload<T: DeserializeOwned>(ev: &DragEvent, mime: &str) -> Option<T> {
    let transfer = ev.data_transfer()?;
    let raw = transfer.get_data(mime).ok()?;
    parse_payload(&raw)
}

/// Parse a raw payload; empty or malformed input gives `None`
pub fn parse_payload<T: DeserializeOwned>(raw: &str) -> Option<T> {
    if raw.trim().is_empty() {
        return None;
    }
    serde_json::from_str(raw).ok()
}

/// Create dragstart handler for draggable rows
pub fn make_on_dragstart<T>(mime: &'static str, payload: T) -> impl Fn(DragEvent) + Clone + 'static
where
    T: Serialize + Clone + 'static,
{
    move |ev: DragEvent| {
        if let Err(e) = set_drag_payload(&ev, mime, &payload) {
            web_sys::console::error_1(&format!("[DnD] dragstart: {}", e).into());
        }
    }
}

/// Create dragover handler for drop targets
/// Prevents the default so the element accepts the drop
pub fn make_on_dragover<K>(hover: DragHover<K>, key: K) -> impl Fn(DragEvent) + Copy + 'static
where
    K: Copy + PartialEq + Send + Sync + 'static,
{
    move |ev: DragEvent| {
        ev.prevent_default();
        if let Some(transfer) = ev.data_transfer() {
            transfer.set_drop_effect("move");
        }
        if hover.hovered_read.get_untracked() != Some(key) {
            hover.hovered_write.set(Some(key));
        }
    }
}

/// Create dragleave handler for drop targets
pub fn make_on_dragleave<K>(hover: DragHover<K>, key: K) -> impl Fn(DragEvent) + Copy + 'static
where
    K: Copy + PartialEq + Send + Sync + 'static,
{
    move |_ev: DragEvent| {
        // Entering a child cell fires dragover on the new element first.
        if hover.hovered_read.get_untracked() == Some(key) {
            hover.hovered_write.set(None);
        }
    }
}

/// Create dragend handler for draggable rows
pub fn make_on_dragend<K>(hover: DragHover<K>) -> impl Fn(DragEvent) + Copy + 'static
where
    K: Copy + PartialEq + Send + Sync + 'static,
{
    move |_ev: DragEvent| hover.clear()
}

/// Create drop handler for drop targets
/// Calls `on_drop` with the decoded payload; a missing payload is a no-op
pub fn make_on_drop<T, K, F>(hover: DragHover<K>, mime: &'static str, key: K, on_drop: F) -> impl Fn(DragEvent) + Clone + 'static
where
    T: DeserializeOwned,
    K: Copy + PartialEq + Send + Sync + 'static,
    F: Fn(T, K) + Clone + 'static,
{
    move |ev: DragEvent| {
        ev.prevent_default();
        hover.clear();
        match read_drag_payload::<T>(&ev, mime) {
            Some(payload) => on_drop(payload, key),
            None => web_sys::console::warn_1(&"[DnD] drop without a readable payload".into()),
        }
    }
}
