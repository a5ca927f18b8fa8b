use crate::routes::browser::{self, BrowserHistory};
use crate::routes::history::HistorySync;
use crate::routes::page::Page;
use crate::routes::state::{BackTarget, NavState};
use contracts::domain::common::{EntityRecord, RecordId};
use contracts::enums::EntityKind;
use leptos::prelude::Effect;
use leptos::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Application-wide store: navigation state plus layout toggles.
///
/// Pages never touch `nav` directly; they call the transition methods
/// below (or receive them as callbacks from the page registry).
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub nav: RwSignal<NavState>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        let location = browser::current_location();
        let (path, search) = location
            .split_once('?')
            .unwrap_or((location.as_str(), ""));
        Self {
            nav: RwSignal::new(NavState::from_location(path, search)),
            left_open: RwSignal::new(true),
        }
    }

    /// Keep `window.history` in step with `nav` and listen for back/forward.
    ///
    /// Nothing is written while `restored` is false (session restore still
    /// in flight), so the entry the app was loaded on is not overwritten
    /// early. A page the guard is about to redirect is never written either;
    /// its entry is overwritten by the redirect target.
    pub fn init_history_sync(&self, restored: Signal<bool>, authenticated: Signal<bool>) {
        let sync = Rc::new(RefCell::new(HistorySync::new(BrowserHistory)));
        let nav = self.nav;

        {
            let sync = Rc::clone(&sync);
            browser::on_pop_state(move |payload| {
                let mut state = nav.get_untracked();
                sync.borrow_mut().pop_state(payload.as_ref(), &mut state);
                nav.set(state);
            });
        }

        Effect::new(move |_| {
            if !restored.get() {
                return;
            }
            let authenticated = authenticated.get();
            nav.with(|state| {
                let mut sync = sync.borrow_mut();
                if state.page().guard_redirect(authenticated).is_some() {
                    sync.hold_for_redirect();
                } else {
                    sync.sync(state);
                }
            });
        });
    }

    /// Current page, tracked.
    pub fn page(&self) -> Page {
        self.nav.with(|state| state.page())
    }

    pub fn navigate(&self, page: Page) {
        self.nav.update(|state| state.navigate(page));
    }

    pub fn open_form(&self, kind: EntityKind, record: Option<EntityRecord>, back: Option<BackTarget>) {
        self.nav.update(|state| state.open_form(kind, record, back));
    }

    pub fn form_saved(&self, kind: EntityKind) {
        self.nav.update(|state| state.form_saved(kind));
    }

    pub fn form_cancelled(&self, kind: EntityKind) {
        self.nav.update(|state| state.form_cancelled(kind));
    }

    pub fn open_detail(&self, kind: EntityKind, id: RecordId, back: Option<BackTarget>) {
        self.nav.update(|state| state.open_detail(kind, id, back));
    }

    pub fn detail_back(&self, kind: EntityKind) {
        self.nav.update(|state| state.detail_back(kind));
    }

    pub fn detail_deleted(&self, kind: EntityKind) {
        self.nav.update(|state| state.detail_deleted(kind));
    }

    pub fn records_changed(&self, kind: EntityKind) {
        self.nav.update(|state| state.records_changed(kind));
    }

    pub fn apply_guard(&self, is_authenticated: bool) {
        self.nav.update(|state| {
            state.apply_guard(is_authenticated);
        });
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
