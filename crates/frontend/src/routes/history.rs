//! History synchronization.
//!
//! `HistorySync` decides, after every navigation state change, whether the
//! browser gets a new history entry (push) or the current entry is
//! rewritten (replace), and turns `popstate` payloads back into state.
//! The browser itself sits behind `HistoryBackend` so the decision logic
//! runs against `MemoryHistory` in tests.

use super::snapshot::NavigationSnapshot;
use super::state::NavState;
use serde_json::Value;
use std::cell::RefCell;

pub trait HistoryBackend {
    /// Current URL as path plus query string (`/customers?detail=7`).
    fn location(&self) -> String;
    fn push_state(&self, state: &Value, url: &str);
    fn replace_state(&self, state: &Value, url: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryAction {
    Push,
    Replace,
}

pub struct HistorySync<B> {
    backend: B,
    last: Option<NavigationSnapshot>,
    redirecting: bool,
}

impl<B: HistoryBackend> HistorySync<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            last: None,
            redirecting: false,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// The page in the current entry is about to be redirected by the auth
    /// guard. Nothing is written now; the next `sync` overwrites the entry
    /// so Back never returns to a page that redirects again.
    pub fn hold_for_redirect(&mut self) {
        self.redirecting = true;
    }

    /// Write the state to history.
    ///
    /// The first sync replaces the entry the app was loaded on, and so does
    /// the sync following a guard redirect. After that a different URL, or
    /// the same URL with a different snapshot, pushes; an unchanged snapshot
    /// only refreshes the current entry.
    pub fn sync(&mut self, state: &NavState) -> HistoryAction {
        let url = state.location();
        let snapshot = state.snapshot();
        let redirected = std::mem::take(&mut self.redirecting);
        let action = match &self.last {
            None => HistoryAction::Replace,
            Some(_) if redirected => HistoryAction::Replace,
            Some(_) if self.backend.location() != url => HistoryAction::Push,
            Some(last) if *last != snapshot => HistoryAction::Push,
            Some(_) => HistoryAction::Replace,
        };

        let payload = snapshot.to_json();
        match action {
            HistoryAction::Push => self.backend.push_state(&payload, &url),
            HistoryAction::Replace => self.backend.replace_state(&payload, &url),
        }
        log::trace!("history {:?}: {}", action, url);

        self.last = Some(snapshot);
        action
    }

    /// Apply a `popstate` event. A stored snapshot is restored as is;
    /// without one only the page encoded in the URL can be recovered.
    ///
    /// The browser has already moved to the popped entry, so the resulting
    /// state is recorded as the last synced one and the follow-up `sync`
    /// replaces instead of pushing a duplicate entry.
    pub fn pop_state(&mut self, payload: Option<&Value>, state: &mut NavState) {
        match payload.and_then(NavigationSnapshot::from_json) {
            Some(snapshot) => state.restore(&snapshot),
            None => {
                let location = self.backend.location();
                let (path, search) = match location.split_once('?') {
                    Some((path, search)) => (path, search),
                    None => (location.as_str(), ""),
                };
                log::debug!("popstate without snapshot, falling back to {}", location);
                let fallback = NavState::from_location(path, search);
                state.restore(&fallback.snapshot());
            }
        }
        self.last = Some(state.snapshot());
    }
}

/// In-memory history stack.
#[derive(Debug, Default)]
pub struct MemoryHistory {
    inner: RefCell<MemoryStack>,
}

#[derive(Debug, Default)]
struct MemoryStack {
    entries: Vec<(Value, String)>,
    index: usize,
    pushes: usize,
    replaces: usize,
}

impl MemoryHistory {
    pub fn new(url: &str) -> Self {
        Self {
            inner: RefCell::new(MemoryStack {
                entries: vec![(Value::Null, url.to_string())],
                ..Default::default()
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn pushes(&self) -> usize {
        self.inner.borrow().pushes
    }

    pub fn replaces(&self) -> usize {
        self.inner.borrow().replaces
    }

    /// Move back one entry and return its state, like `popstate` would.
    pub fn back(&self) -> Option<Value> {
        let mut stack = self.inner.borrow_mut();
        if stack.index == 0 {
            return None;
        }
        stack.index -= 1;
        Some(stack.entries[stack.index].0.clone())
    }

    pub fn forward(&self) -> Option<Value> {
        let mut stack = self.inner.borrow_mut();
        if stack.index + 1 >= stack.entries.len() {
            return None;
        }
        stack.index += 1;
        Some(stack.entries[stack.index].0.clone())
    }
}

impl HistoryBackend for MemoryHistory {
    fn location(&self) -> String {
        let stack = self.inner.borrow();
        stack
            .entries
            .get(stack.index)
            .map(|(_, url)| url.clone())
            .unwrap_or_else(|| "/".to_string())
    }

    fn push_state(&self, state: &Value, url: &str) {
        let mut stack = self.inner.borrow_mut();
        let keep = stack.index + 1;
        stack.entries.truncate(keep);
        stack.entries.push((state.clone(), url.to_string()));
        stack.index = stack.entries.len() - 1;
        stack.pushes += 1;
    }

    fn replace_state(&self, state: &Value, url: &str) {
        let mut stack = self.inner.borrow_mut();
        let index = stack.index;
        if let Some(entry) = stack.entries.get_mut(index) {
            *entry = (state.clone(), url.to_string());
        }
        stack.replaces += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::page::Page;
    use crate::routes::state::BackTarget;
    use contracts::domain::common::EntityRecord;
    use contracts::enums::EntityKind;
    use serde_json::json;

    fn start(url: &str) -> (HistorySync<MemoryHistory>, NavState) {
        let (path, search) = url.split_once('?').unwrap_or((url, ""));
        let state = NavState::from_location(path, search);
        let mut sync = HistorySync::new(MemoryHistory::new(url));
        assert_eq!(sync.sync(&state), HistoryAction::Replace);
        (sync, state)
    }

    #[test]
    fn test_initial_sync_replaces_and_normalizes_url() {
        let (sync, state) = start("/nowhere");
        assert_eq!(state.page(), Page::Landing);
        assert_eq!(sync.backend().location(), "/");
        assert_eq!(sync.backend().len(), 1);
        assert_eq!(sync.backend().pushes(), 0);
    }

    #[test]
    fn test_url_change_pushes() {
        let (mut sync, mut state) = start("/dashboard");
        state.navigate(Page::List(EntityKind::Customer));
        assert_eq!(sync.sync(&state), HistoryAction::Push);
        assert_eq!(sync.backend().location(), "/customers");
        assert_eq!(sync.backend().len(), 2);
    }

    #[test]
    fn test_same_url_different_context_pushes() {
        let (mut sync, mut state) = start("/orders");
        state.open_form(EntityKind::Order, None, None);
        assert_eq!(sync.backend().location(), state.location());
        assert_eq!(sync.sync(&state), HistoryAction::Push);
        assert_eq!(sync.backend().len(), 2);
    }

    #[test]
    fn test_context_change_outside_watched_ids_still_pushes() {
        let (mut sync, mut state) = start("/hotels");
        state.open_form(EntityKind::Hotel, None, None);
        sync.sync(&state);
        state.form_cancelled(EntityKind::Hotel);
        assert_eq!(sync.sync(&state), HistoryAction::Push);
        assert_eq!(sync.backend().len(), 3);
    }

    #[test]
    fn test_unchanged_state_replaces() {
        let (mut sync, mut state) = start("/customers");
        state.open_detail(EntityKind::Customer, 7, None);
        assert_eq!(sync.sync(&state), HistoryAction::Push);
        assert_eq!(sync.sync(&state), HistoryAction::Replace);
        assert_eq!(sync.backend().len(), 2);
        assert_eq!(sync.backend().replaces(), 2);
    }

    #[test]
    fn test_refresh_key_alone_does_not_push() {
        let (mut sync, mut state) = start("/customers");
        state.open_detail(EntityKind::Customer, 7, None);
        sync.sync(&state);
        state.records_changed(EntityKind::Customer);
        assert_eq!(sync.sync(&state), HistoryAction::Replace);
        assert_eq!(sync.backend().len(), 2);
    }

    #[test]
    fn test_signed_out_load_of_protected_url_leaves_one_login_entry() {
        let mut sync = HistorySync::new(MemoryHistory::new("/dashboard"));
        let mut state = NavState::from_location("/dashboard", "");

        assert_eq!(state.apply_guard(false), Some(Page::Login));
        sync.hold_for_redirect();
        assert_eq!(sync.sync(&state), HistoryAction::Replace);

        assert_eq!(state.page(), Page::Login);
        assert_eq!(sync.backend().location(), "/login");
        assert_eq!(sync.backend().len(), 1);
        assert_eq!(sync.backend().back(), None);
    }

    #[test]
    fn test_back_onto_protected_entry_after_logout_is_overwritten() {
        let (mut sync, mut state) = start("/customers");
        state.navigate(Page::Dashboard);
        sync.sync(&state);
        state.navigate(Page::Login);
        sync.sync(&state);
        assert_eq!(sync.backend().len(), 3);

        let popped = sync.backend().back();
        sync.pop_state(popped.as_ref(), &mut state);
        assert_eq!(state.apply_guard(false), Some(Page::Login));
        sync.hold_for_redirect();
        assert_eq!(sync.sync(&state), HistoryAction::Replace);
        assert_eq!(sync.backend().location(), "/login");

        // the next Back reaches the remaining protected entry, which is
        // rewritten the same way; no new entries ever appear
        let popped = sync.backend().back();
        sync.pop_state(popped.as_ref(), &mut state);
        assert_eq!(state.apply_guard(false), Some(Page::Login));
        sync.hold_for_redirect();
        assert_eq!(sync.sync(&state), HistoryAction::Replace);
        assert_eq!(sync.backend().len(), 3);
        assert_eq!(sync.backend().pushes(), 2);
        assert_eq!(sync.backend().back(), None);
    }

    #[test]
    fn test_back_and_forward_restore_exact_context() {
        let (mut sync, mut state) = start("/customers");
        state.open_detail(EntityKind::Customer, 7, None);
        sync.sync(&state);
        state.open_form(
            EntityKind::Customer,
            Some(EntityRecord::new(7)),
            Some(BackTarget::detail(EntityKind::Customer, 7)),
        );
        sync.sync(&state);

        let popped = sync.backend().back();
        sync.pop_state(popped.as_ref(), &mut state);
        assert_eq!(state.page(), Page::Detail(EntityKind::Customer));
        assert_eq!(state.detail_id(EntityKind::Customer), Some(7));
        assert_eq!(sync.sync(&state), HistoryAction::Replace);
        assert_eq!(sync.backend().len(), 3);

        let popped = sync.backend().forward();
        sync.pop_state(popped.as_ref(), &mut state);
        assert_eq!(state.page(), Page::Form(EntityKind::Customer));
        assert_eq!(
            state.slot(EntityKind::Customer).form_back,
            BackTarget::detail(EntityKind::Customer, 7)
        );
        state.form_cancelled(EntityKind::Customer);
        assert_eq!(state.page(), Page::Detail(EntityKind::Customer));
        assert_eq!(state.detail_id(EntityKind::Customer), Some(7));
    }

    #[test]
    fn test_pop_without_snapshot_falls_back_to_url() {
        let history = MemoryHistory::new("/orders?detail=3");
        let mut sync = HistorySync::new(history);
        let mut state = NavState::new(Page::Dashboard);

        sync.pop_state(None, &mut state);
        assert_eq!(state.page(), Page::Detail(EntityKind::Order));
        assert_eq!(state.detail_id(EntityKind::Order), Some(3));

        sync.pop_state(Some(&json!({ "unrelated": true })), &mut state);
        assert_eq!(state.page(), Page::Detail(EntityKind::Order));

        // the fallback entry gets a snapshot written without a new entry
        assert_eq!(sync.sync(&state), HistoryAction::Replace);
        assert_eq!(sync.backend().len(), 1);
    }

    #[test]
    fn test_pop_restores_appointment_snapshot() {
        let (mut sync, mut state) = start("/calendar");
        let payload = json!({
            "page": "appointmentDetail",
            "appointmentDetailId": 12,
            "appointmentDetailBackPage": "calendar"
        });
        sync.pop_state(Some(&payload), &mut state);
        assert_eq!(state.page(), Page::Detail(EntityKind::Appointment));
        assert_eq!(state.detail_id(EntityKind::Appointment), Some(12));
        assert_eq!(
            state.slot(EntityKind::Appointment).detail_back,
            BackTarget::page(Page::Calendar)
        );
    }

    #[test]
    fn test_push_after_back_drops_forward_entries() {
        let (mut sync, mut state) = start("/dashboard");
        state.navigate(Page::Calendar);
        sync.sync(&state);
        state.navigate(Page::Roadmap);
        sync.sync(&state);

        let popped = sync.backend().back();
        sync.pop_state(popped.as_ref(), &mut state);
        assert_eq!(state.page(), Page::Calendar);

        state.navigate(Page::Settings);
        assert_eq!(sync.sync(&state), HistoryAction::Push);
        assert_eq!(sync.backend().len(), 3);
        assert_eq!(sync.backend().forward(), None);
    }
}
