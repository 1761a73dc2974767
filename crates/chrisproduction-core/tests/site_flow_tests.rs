//! End-to-end flows through the public core API: a visitor toggling the
//! theme across page loads and playing videos from the content grids.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use chrisproduction_core::{
    CATEGORIES, CloseTrigger, ContactField, ContactForm, ContactFormError, KeyValueStore,
    ListenerId, MemoryStore, ModalHost, ModalState, PROJECTS, PointerTarget, RevealLatch,
    SiteConfig, THEME_STORAGE_KEY, Theme, ThemePreference, VideoModal, resolve_embed_url,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Page state observed by the modal host.
#[derive(Debug, Default)]
struct PageState {
    scroll_locked: bool,
    listeners: BTreeSet<ListenerId>,
    next_id: u64,
    subscriptions: usize,
}

/// Host that records what the modal did to the page.
#[derive(Debug, Clone, Default)]
struct RecordingHost(Rc<RefCell<PageState>>);

impl RecordingHost {
    fn active_listeners(&self) -> usize {
        self.0.borrow().listeners.len()
    }

    fn scroll_locked(&self) -> bool {
        self.0.borrow().scroll_locked
    }

    fn subscriptions(&self) -> usize {
        self.0.borrow().subscriptions
    }
}

impl ModalHost for RecordingHost {
    fn lock_scroll(&mut self) {
        self.0.borrow_mut().scroll_locked = true;
    }

    fn unlock_scroll(&mut self) {
        self.0.borrow_mut().scroll_locked = false;
    }

    fn subscribe_keys(&mut self) -> ListenerId {
        let mut page = self.0.borrow_mut();
        page.next_id += 1;
        page.subscriptions += 1;
        let id = ListenerId(page.next_id);
        page.listeners.insert(id);
        id
    }

    fn unsubscribe_keys(&mut self, listener: ListenerId) {
        let removed = self.0.borrow_mut().listeners.remove(&listener);
        assert!(removed, "unsubscribed unknown listener {listener:?}");
    }
}

#[test]
fn test_theme_survives_reload() {
    init_tracing();
    let config = SiteConfig::default();

    let mut first_visit = ThemePreference::load(
        MemoryStore::new(),
        &config.theme.storage_key,
        config.theme.default_theme,
    );
    assert_eq!(first_visit.current(), Theme::Dark);
    first_visit.toggle().unwrap();

    let persisted = first_visit.store().clone();
    assert_eq!(
        persisted.get(THEME_STORAGE_KEY).unwrap().as_deref(),
        Some(first_visit.current().as_str())
    );

    let reload = ThemePreference::load(persisted, THEME_STORAGE_KEY, Theme::Dark);
    assert_eq!(reload.current(), Theme::Light);
}

#[test]
fn test_slot_matches_memory_after_every_toggle() {
    init_tracing();
    let mut pref = ThemePreference::load(MemoryStore::new(), THEME_STORAGE_KEY, Theme::Dark);
    for _ in 0..5 {
        let theme = pref.toggle().unwrap();
        assert_eq!(theme, pref.current());
        assert_eq!(
            pref.store().get(THEME_STORAGE_KEY).unwrap().as_deref(),
            Some(theme.as_str())
        );
    }
}

#[test]
fn test_every_close_trigger_releases_the_page() {
    init_tracing();
    let host = RecordingHost::default();
    let mut modal = VideoModal::new(host.clone());

    let close_actions: [fn(&mut VideoModal<RecordingHost>) -> bool; 3] = [
        |m| m.close(CloseTrigger::Button),
        |m| m.handle_key("Escape"),
        |m| m.handle_pointer(PointerTarget::Backdrop),
    ];

    for close in close_actions {
        modal.open(CATEGORIES[0].video_url);
        assert!(host.scroll_locked());
        assert_eq!(host.active_listeners(), 1);
        assert_eq!(modal.state().active_url(), CATEGORIES[0].video_url);

        assert!(close(&mut modal));
        assert_eq!(modal.state(), &ModalState::Closed);
        assert_eq!(modal.state().active_url(), "");
        assert!(!host.scroll_locked());
        assert_eq!(host.active_listeners(), 0);
    }
    assert_eq!(host.subscriptions(), 3);
}

#[test]
fn test_content_clicks_keep_the_modal_open() {
    init_tracing();
    let host = RecordingHost::default();
    let mut modal = VideoModal::new(host.clone());

    modal.open(PROJECTS[4].video_url);
    for _ in 0..3 {
        assert!(!modal.handle_pointer(PointerTarget::Content));
    }
    assert!(modal.is_open());
    assert!(host.scroll_locked());
    assert_eq!(host.active_listeners(), 1);
}

#[test]
fn test_switching_videos_keeps_one_listener() {
    init_tracing();
    let host = RecordingHost::default();
    let mut modal = VideoModal::new(host.clone());

    for project in &PROJECTS {
        modal.open(project.video_url);
    }
    assert_eq!(host.active_listeners(), 1);
    assert_eq!(host.subscriptions(), 1);
}

#[test]
fn test_teardown_while_open_leaves_no_listener() {
    init_tracing();
    let host = RecordingHost::default();
    {
        let mut modal = VideoModal::new(host.clone());
        modal.open("https://www.youtube.com/watch?v=K1YzToa-EoA");
        assert_eq!(host.active_listeners(), 1);
    }
    assert_eq!(host.active_listeners(), 0);
    assert!(!host.scroll_locked());
}

#[test]
fn test_modal_source_matches_resolver() {
    init_tracing();
    let mut modal = VideoModal::new(RecordingHost::default());
    for input in ["https://youtu.be/K1YzToa-EoA", "not a url", ""] {
        modal.open(input);
        assert_eq!(modal.embed_src(), Some(resolve_embed_url(input)));
    }
}

#[test]
fn test_reveal_latch_is_one_way() {
    let mut latch = RevealLatch::new(SiteConfig::default().reveal_threshold);
    let notifications = [(false, 0.0), (true, 0.04), (true, 0.3), (false, 0.0), (true, 0.01)];
    let states: Vec<_> = notifications
        .iter()
        .map(|&(hit, ratio)| latch.observe(hit, ratio))
        .collect();
    assert_eq!(states, [false, false, true, true, true]);
}

#[test]
fn test_contact_form_flow() {
    init_tracing();
    let mut form = ContactForm::default();
    form.set(ContactField::Name, "Jonas");
    form.set(ContactField::Email, "jonas@example");
    form.set(ContactField::Message, "Kan du filme vores event?");

    let submission = form.submit().unwrap();
    assert_eq!(submission.subject, None);
    assert!(form.is_empty());

    assert_eq!(
        form.submit(),
        Err(ContactFormError::MissingField(ContactField::Name))
    );
}
