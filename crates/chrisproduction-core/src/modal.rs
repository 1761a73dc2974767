//! Video modal lifecycle.
//!
//! The modal is a two-state machine (`Closed`, `Open`) driven by play
//! requests and three close triggers: the close button, the Escape key and a
//! click that lands on the backdrop. Side effects go through [`ModalHost`]:
//!
//! - entering `Open` locks page scroll and subscribes a key listener,
//! - entering `Closed` (or dropping an open modal) releases both.
//!
//! The key listener exists exactly while the modal is open.

use std::fmt;

use tracing::{debug, warn};

use crate::embed::EmbedResolver;

/// Key that dismisses the modal.
pub const ESCAPE_KEY: &str = "Escape";

/// Handle of a registered key listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

/// Environment side effects of the modal.
#[cfg_attr(test, mockall::automock)]
pub trait ModalHost {
    /// Stop the page behind the overlay from scrolling.
    fn lock_scroll(&mut self);

    /// Let the page scroll again.
    fn unlock_scroll(&mut self);

    /// Start forwarding global key presses to the modal.
    fn subscribe_keys(&mut self) -> ListenerId;

    /// Stop forwarding key presses for `listener`.
    fn unsubscribe_keys(&mut self, listener: ListenerId);
}

/// Visibility of the modal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalState {
    /// Hidden.
    #[default]
    Closed,
    /// Showing the player for `url`.
    Open {
        /// The link the visitor asked to play, as given.
        url: String,
    },
}

impl ModalState {
    /// Whether the modal is showing.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// The recorded url, or an empty string when closed.
    #[must_use]
    pub fn active_url(&self) -> &str {
        match self {
            Self::Open { url } => url,
            Self::Closed => "",
        }
    }
}

/// What closed the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTrigger {
    /// The close button.
    Button,
    /// The Escape key.
    EscapeKey,
    /// A click directly on the backdrop.
    Backdrop,
}

impl fmt::Display for CloseTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Button => write!(f, "close button"),
            Self::EscapeKey => write!(f, "escape key"),
            Self::Backdrop => write!(f, "backdrop click"),
        }
    }
}

/// Where a pointer click landed inside the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// The dimmed overlay itself.
    Backdrop,
    /// The player or anything inside the content area.
    Content,
}

/// The modal state machine.
#[derive(Debug)]
pub struct VideoModal<H: ModalHost> {
    host: H,
    resolver: EmbedResolver,
    state: ModalState,
    listener: Option<ListenerId>,
}

impl<H: ModalHost> VideoModal<H> {
    /// Create a closed modal using the default player settings.
    pub fn new(host: H) -> Self {
        Self::with_resolver(host, EmbedResolver::default())
    }

    /// Create a closed modal with a custom resolver.
    pub const fn with_resolver(host: H, resolver: EmbedResolver) -> Self {
        Self {
            host,
            resolver,
            state: ModalState::Closed,
            listener: None,
        }
    }

    /// Current state.
    pub const fn state(&self) -> &ModalState {
        &self.state
    }

    /// Whether the modal is showing.
    pub const fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// The host adapter.
    pub const fn host(&self) -> &H {
        &self.host
    }

    /// Show the player for `url`.
    ///
    /// Opening an already open modal only swaps the url.
    pub fn open(&mut self, url: impl Into<String>) {
        let url = url.into();
        debug!("Opening video modal for {:?}", url);
        if !self.state.is_open() {
            self.host.lock_scroll();
            if let Some(stale) = self.listener.replace(self.host.subscribe_keys()) {
                warn!("Replacing stale key listener {:?}", stale);
                self.host.unsubscribe_keys(stale);
            }
        }
        self.state = ModalState::Open { url };
    }

    /// Hide the modal. Returns `false` if it was already closed.
    pub fn close(&mut self, trigger: CloseTrigger) -> bool {
        if !self.state.is_open() {
            return false;
        }
        debug!("Closing video modal via {}", trigger);
        self.state = ModalState::Closed;
        self.release();
        true
    }

    /// Handle a global key press. Only Escape closes an open modal.
    pub fn handle_key(&mut self, key: &str) -> bool {
        key == ESCAPE_KEY && self.close(CloseTrigger::EscapeKey)
    }

    /// Handle a click inside the overlay. Only the backdrop closes it.
    pub fn handle_pointer(&mut self, target: PointerTarget) -> bool {
        match target {
            PointerTarget::Backdrop => self.close(CloseTrigger::Backdrop),
            PointerTarget::Content => false,
        }
    }

    /// Iframe source for the current url, or `None` when closed.
    ///
    /// Unrecognized links are passed through so the iframe still gets the
    /// original input.
    pub fn embed_src(&self) -> Option<String> {
        match &self.state {
            ModalState::Open { url } => Some(self.resolver.resolve(url)),
            ModalState::Closed => None,
        }
    }

    fn release(&mut self) {
        if let Some(listener) = self.listener.take() {
            self.host.unsubscribe_keys(listener);
        }
        self.host.unlock_scroll();
    }
}

impl<H: ModalHost> Drop for VideoModal<H> {
    fn drop(&mut self) {
        if self.state.is_open() {
            debug!("Video modal torn down while open");
            self.state = ModalState::Closed;
            self.release();
        }
    }
}
