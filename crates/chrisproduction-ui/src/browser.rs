//! Browser adapters for the core traits.
//!
//! - [`BrowserStore`] backs the theme preference with `localStorage`, or with
//!   an in-memory store when storage is blocked.
//! - [`DomModalHost`] locks `<body>` scrolling and forwards window key presses
//!   to the video modal.

use std::collections::HashMap;

use chrisproduction_core::{
    Error, KeyValueStore, ListenerId, MemoryStore, ModalHost, Page, Result, Theme,
};
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsValue;

fn js_reason(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Persistence slot store for the browser.
#[derive(Debug)]
pub enum BrowserStore {
    /// Per-origin `localStorage`.
    Local(web_sys::Storage),
    /// Fallback for private modes and disabled storage.
    Memory(MemoryStore),
}

fn local_storage() -> Result<web_sys::Storage> {
    let window = web_sys::window()
        .ok_or_else(|| Error::StorageUnavailable("no window".to_string()))?;
    window
        .local_storage()
        .map_err(|e| Error::StorageUnavailable(js_reason(&e)))?
        .ok_or_else(|| Error::StorageUnavailable("localStorage is disabled".to_string()))
}

impl BrowserStore {
    /// Open `localStorage`, falling back to memory if it is unavailable.
    pub fn open() -> Self {
        match local_storage() {
            Ok(storage) => Self::Local(storage),
            Err(e) => {
                leptos::logging::warn!("{}, theme will not persist", e);
                Self::Memory(MemoryStore::new())
            }
        }
    }

    /// Whether values survive a reload.
    pub const fn is_persistent(&self) -> bool {
        matches!(self, Self::Local(_))
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match self {
            Self::Local(storage) => storage.get_item(key).map_err(|e| Error::StorageRead {
                key: key.to_string(),
                reason: js_reason(&e),
            }),
            Self::Memory(store) => store.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match self {
            Self::Local(storage) => storage.set_item(key, value).map_err(|e| Error::StorageWrite {
                key: key.to_string(),
                reason: js_reason(&e),
            }),
            Self::Memory(store) => store.set(key, value),
        }
    }
}

/// DOM side effects of the video modal.
pub struct DomModalHost {
    on_key: Callback<String>,
    listeners: HashMap<ListenerId, WindowListenerHandle>,
    next_id: u64,
}

impl DomModalHost {
    /// Create a host that reports every key press to `on_key`.
    pub fn new(on_key: Callback<String>) -> Self {
        Self {
            on_key,
            listeners: HashMap::new(),
            next_id: 0,
        }
    }

    /// Number of key listeners currently attached to the window.
    pub fn active_listeners(&self) -> usize {
        self.listeners.len()
    }
}

impl std::fmt::Debug for DomModalHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DomModalHost")
            .field("active_listeners", &self.listeners.len())
            .field("next_id", &self.next_id)
            .finish_non_exhaustive()
    }
}

fn set_body_overflow(value: &str) {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    if let Some(body) = body
        && let Err(e) = body.style().set_property("overflow", value)
    {
        leptos::logging::warn!("Failed to set body overflow: {}", js_reason(&e));
    }
}

impl ModalHost for DomModalHost {
    fn lock_scroll(&mut self) {
        set_body_overflow("hidden");
    }

    fn unlock_scroll(&mut self) {
        set_body_overflow("unset");
    }

    fn subscribe_keys(&mut self) -> ListenerId {
        let on_key = self.on_key;
        let handle = window_event_listener(ev::keydown, move |event| {
            on_key.run(event.key());
        });
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.listeners.insert(id, handle);
        id
    }

    fn unsubscribe_keys(&mut self, listener: ListenerId) {
        if let Some(handle) = self.listeners.remove(&listener) {
            handle.remove();
        }
    }
}

/// Mark `<html>` with the active theme so the CSS variables switch over.
pub fn apply_theme(theme: Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root
        && let Err(e) = root.set_attribute("data-theme", theme.as_str())
    {
        leptos::logging::warn!("Failed to apply theme: {}", js_reason(&e));
    }
}

/// Page matching the current location.
pub fn current_page() -> Page {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .map_or(Page::Home, |path| Page::from_path(&path))
}

/// Current vertical scroll offset.
pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Smooth-scroll the element with `id` into view.
pub fn scroll_to_section(id: &str) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    if let Some(element) = element {
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    } else {
        leptos::logging::warn!("No section with id '{}'", id);
    }
}
