//! Navigation state controller.
//!
//! One `NavState` record holds the visible page plus, per entity, the form
//! and detail working state and the refresh counter. All changes go through
//! the named transitions below; none of them performs I/O.

use super::page::Page;
use super::paths;
use super::snapshot::{NavigationSnapshot, SlotSnapshot};
use contracts::domain::common::{EntityRecord, RecordId};
use contracts::enums::EntityKind;

/// Where a form or detail page returns to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackTarget {
    pub page: Page,
    pub id: Option<RecordId>,
}

impl BackTarget {
    pub fn page(page: Page) -> Self {
        Self { page, id: None }
    }

    pub fn detail(kind: EntityKind, id: RecordId) -> Self {
        Self {
            page: Page::Detail(kind),
            id: Some(id),
        }
    }

    /// Default target for `kind`: its list page, no id.
    pub fn list(kind: EntityKind) -> Self {
        Self::page(Page::List(kind))
    }
}

/// Per-entity working state.
#[derive(Debug, Clone, PartialEq)]
pub struct EntitySlot {
    /// Record being edited; `None` means the form is in create mode.
    pub form_entity: Option<EntityRecord>,
    pub form_back: BackTarget,
    pub detail_id: Option<RecordId>,
    pub detail_back: BackTarget,
    /// Bumped after every successful mutation; lists re-fetch on change.
    pub refresh_key: u64,
}

impl EntitySlot {
    fn new(kind: EntityKind) -> Self {
        Self {
            form_entity: None,
            form_back: BackTarget::list(kind),
            detail_id: None,
            detail_back: BackTarget::list(kind),
            refresh_key: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavState {
    page: Page,
    slots: [EntitySlot; EntityKind::COUNT],
}

impl NavState {
    pub fn new(page: Page) -> Self {
        Self {
            page,
            slots: std::array::from_fn(|i| EntitySlot::new(EntityKind::ALL[i])),
        }
    }

    /// Initial state for a browser location. Only the page (and the detail
    /// id of a deep-linked detail page) survives a reload.
    pub fn from_location(pathname: &str, search: &str) -> Self {
        let (page, detail_id) = paths::page_from_location(pathname, search);
        let mut state = Self::new(page);
        if let (Page::Detail(kind), Some(id)) = (page, detail_id) {
            state.slot_mut(kind).detail_id = Some(id);
        }
        state
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn slot(&self, kind: EntityKind) -> &EntitySlot {
        &self.slots[kind.index()]
    }

    fn slot_mut(&mut self, kind: EntityKind) -> &mut EntitySlot {
        &mut self.slots[kind.index()]
    }

    pub fn detail_id(&self, kind: EntityKind) -> Option<RecordId> {
        self.slot(kind).detail_id
    }

    pub fn refresh_key(&self, kind: EntityKind) -> u64 {
        self.slot(kind).refresh_key
    }

    /// URL for the current state (path plus deep-link query).
    pub fn location(&self) -> String {
        let detail_id = self.page.entity().and_then(|kind| self.detail_id(kind));
        paths::location_for(self.page, detail_id)
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    /// Top-level navigation (sidebar, header, dashboard shortcuts).
    pub fn navigate(&mut self, page: Page) {
        log::debug!("navigate: {} -> {}", self.page, page);
        match page {
            Page::Form(kind) => self.open_form(kind, None, None),
            Page::Detail(kind) => match self.detail_id(kind) {
                Some(id) => self.go_to(BackTarget::detail(kind, id)),
                None => self.set_page(page.base()),
            },
            other => self.set_page(other),
        }
    }

    pub fn open_form(
        &mut self,
        kind: EntityKind,
        record: Option<EntityRecord>,
        back: Option<BackTarget>,
    ) {
        log::debug!(
            "open_form: {} record={:?} back={:?}",
            kind,
            record.as_ref().map(|r| r.id),
            back
        );
        let slot = self.slot_mut(kind);
        slot.form_entity = record;
        slot.form_back = back.unwrap_or(BackTarget::list(kind));
        self.set_page(Page::Form(kind));
    }

    /// The form has persisted its record.
    pub fn form_saved(&mut self, kind: EntityKind) {
        log::debug!("form_saved: {}", kind);
        self.slot_mut(kind).refresh_key += 1;
        self.leave_form(kind);
    }

    pub fn form_cancelled(&mut self, kind: EntityKind) {
        log::debug!("form_cancelled: {}", kind);
        self.leave_form(kind);
    }

    pub fn open_detail(&mut self, kind: EntityKind, id: RecordId, back: Option<BackTarget>) {
        log::debug!("open_detail: {} #{} back={:?}", kind, id, back);
        self.slot_mut(kind).detail_back = back.unwrap_or(BackTarget::list(kind));
        self.go_to(BackTarget::detail(kind, id));
    }

    pub fn detail_back(&mut self, kind: EntityKind) {
        log::debug!("detail_back: {}", kind);
        self.leave_detail(kind);
    }

    /// The detail page has deleted its record.
    pub fn detail_deleted(&mut self, kind: EntityKind) {
        log::debug!("detail_deleted: {}", kind);
        self.slot_mut(kind).refresh_key += 1;
        self.leave_detail(kind);
    }

    /// A save or delete of `kind` succeeded after its page was already
    /// left. Lists re-fetch; the visible page stays where the user went.
    pub fn records_changed(&mut self, kind: EntityKind) {
        log::debug!("records_changed: {}", kind);
        self.slot_mut(kind).refresh_key += 1;
    }

    /// Send the session to the page it may see, if the current one is off
    /// limits. Returns the redirect target.
    pub fn apply_guard(&mut self, is_authenticated: bool) -> Option<Page> {
        let target = self.page.guard_redirect(is_authenticated)?;
        log::info!("guard: {} -> {}", self.page, target);
        self.navigate(target);
        Some(target)
    }

    fn leave_form(&mut self, kind: EntityKind) {
        let slot = self.slot_mut(kind);
        let target = slot.form_back;
        slot.form_entity = None;
        slot.form_back = BackTarget::list(kind);
        self.go_to(target);
    }

    fn leave_detail(&mut self, kind: EntityKind) {
        let slot = self.slot_mut(kind);
        let target = slot.detail_back;
        slot.detail_id = None;
        slot.detail_back = BackTarget::list(kind);
        self.go_to(target);
    }

    /// Resolve a back-target. A detail target reopens that record; a detail
    /// target that lost its id falls back to the list.
    fn go_to(&mut self, target: BackTarget) {
        match (target.page, target.id) {
            (Page::Detail(kind), Some(id)) => {
                self.slot_mut(kind).detail_id = Some(id);
                self.set_page(target.page);
            }
            (Page::Detail(_), None) | (Page::Form(_), _) => self.set_page(target.page.base()),
            (page, _) => self.set_page(page),
        }
    }

    /// Switch pages. Detail ids are kept only for the detail page being shown.
    fn set_page(&mut self, page: Page) {
        for kind in EntityKind::ALL {
            if page != Page::Detail(kind) {
                self.slot_mut(kind).detail_id = None;
            }
        }
        self.page = page;
    }

    // ------------------------------------------------------------------
    // Snapshots
    // ------------------------------------------------------------------

    pub fn snapshot(&self) -> NavigationSnapshot {
        let mut snapshot = NavigationSnapshot::new(self.page);
        for kind in EntityKind::ALL {
            let slot = self.slot(kind);
            *snapshot.slot_mut(kind) = SlotSnapshot {
                detail_id: slot.detail_id,
                detail_back: slot.detail_back,
                form_back: slot.form_back,
            };
        }
        snapshot
    }

    /// Overwrite page, detail ids and back-targets from a history entry.
    /// Form records and refresh keys are not part of history and stay as they are.
    pub fn restore(&mut self, snapshot: &NavigationSnapshot) {
        log::debug!("restore: {} -> {}", self.page, snapshot.page);
        for kind in EntityKind::ALL {
            let stored = snapshot.slot(kind);
            let slot = self.slot_mut(kind);
            slot.detail_id = stored.detail_id;
            slot.detail_back = stored.detail_back;
            slot.form_back = stored.form_back;
        }
        self.page = snapshot.page;
    }
}

impl Default for NavState {
    fn default() -> Self {
        Self::new(Page::Landing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(id: RecordId) -> EntityRecord {
        EntityRecord::new(id).with_field("name", "Ana")
    }

    #[test]
    fn test_new_state_defaults() {
        let state = NavState::new(Page::Dashboard);
        assert_eq!(state.page(), Page::Dashboard);
        for kind in EntityKind::ALL {
            let slot = state.slot(kind);
            assert_eq!(slot.form_entity, None);
            assert_eq!(slot.form_back, BackTarget::list(kind));
            assert_eq!(slot.detail_id, None);
            assert_eq!(slot.detail_back, BackTarget::list(kind));
            assert_eq!(slot.refresh_key, 0);
        }
    }

    #[test]
    fn test_cancel_resets_form_back_target_for_every_entity() {
        for kind in EntityKind::ALL {
            let mut state = NavState::new(Page::List(kind));
            state.open_form(
                kind,
                Some(EntityRecord::new(5)),
                Some(BackTarget {
                    page: Page::Calendar,
                    id: Some(9),
                }),
            );
            assert_eq!(state.page(), Page::Form(kind));
            state.form_cancelled(kind);
            let slot = state.slot(kind);
            assert_eq!(slot.form_back, BackTarget::list(kind), "{}", kind);
            assert_eq!(slot.form_back.id, None);
            assert_eq!(slot.form_entity, None);
        }
    }

    #[test]
    fn test_save_bumps_refresh_key_once_and_cancel_never() {
        for kind in EntityKind::ALL {
            let mut state = NavState::new(Page::List(kind));
            state.open_form(kind, None, None);
            state.form_saved(kind);
            assert_eq!(state.refresh_key(kind), 1, "{}", kind);

            state.open_form(kind, Some(EntityRecord::new(1)), None);
            state.form_cancelled(kind);
            assert_eq!(state.refresh_key(kind), 1, "{}", kind);

            for other in EntityKind::ALL.into_iter().filter(|k| *k != kind) {
                assert_eq!(state.refresh_key(other), 0);
            }
        }
    }

    #[test]
    fn test_edit_from_detail_then_cancel_returns_to_detail() {
        let mut state = NavState::new(Page::Landing);
        state.navigate(Page::List(EntityKind::Customer));
        state.open_detail(EntityKind::Customer, 7, None);
        state.open_form(
            EntityKind::Customer,
            Some(customer(7)),
            Some(BackTarget::detail(EntityKind::Customer, 7)),
        );
        assert_eq!(state.detail_id(EntityKind::Customer), None);

        state.form_cancelled(EntityKind::Customer);

        assert_eq!(state.page(), Page::Detail(EntityKind::Customer));
        assert_eq!(state.detail_id(EntityKind::Customer), Some(7));
        assert_eq!(state.refresh_key(EntityKind::Customer), 0);
    }

    #[test]
    fn test_edit_order_from_detail_then_save() {
        let mut state = NavState::from_location("/orders", "");
        assert_eq!(state.page(), Page::List(EntityKind::Order));
        state.open_detail(EntityKind::Order, 3, None);
        state.open_form(
            EntityKind::Order,
            Some(EntityRecord::new(3)),
            Some(BackTarget::detail(EntityKind::Order, 3)),
        );
        state.form_saved(EntityKind::Order);

        assert_eq!(state.page(), Page::Detail(EntityKind::Order));
        assert_eq!(state.detail_id(EntityKind::Order), Some(3));
        assert_eq!(state.refresh_key(EntityKind::Order), 1);
    }

    #[test]
    fn test_order_created_from_customer_returns_to_customer() {
        let mut state = NavState::new(Page::List(EntityKind::Customer));
        state.open_detail(EntityKind::Customer, 7, None);
        state.open_form(
            EntityKind::Order,
            None,
            Some(BackTarget::detail(EntityKind::Customer, 7)),
        );
        state.form_saved(EntityKind::Order);

        assert_eq!(state.page(), Page::Detail(EntityKind::Customer));
        assert_eq!(state.detail_id(EntityKind::Customer), Some(7));
        assert_eq!(state.refresh_key(EntityKind::Order), 1);
        assert_eq!(state.refresh_key(EntityKind::Customer), 0);
        // the customer's own back-target is untouched
        assert_eq!(
            state.slot(EntityKind::Customer).detail_back,
            BackTarget::list(EntityKind::Customer)
        );
    }

    #[test]
    fn test_appointment_cancel_returns_to_customer() {
        let mut state = NavState::new(Page::List(EntityKind::Customer));
        state.open_detail(EntityKind::Customer, 4, None);
        state.open_form(
            EntityKind::Appointment,
            None,
            Some(BackTarget::detail(EntityKind::Customer, 4)),
        );
        state.form_cancelled(EntityKind::Appointment);
        assert_eq!(state.page(), Page::Detail(EntityKind::Customer));
        assert_eq!(state.detail_id(EntityKind::Customer), Some(4));
        assert_eq!(state.refresh_key(EntityKind::Appointment), 0);
    }

    #[test]
    fn test_service_package_returns_to_service_on_save_cancel_delete() {
        let origin = BackTarget::detail(EntityKind::Service, 2);

        let mut state = NavState::new(Page::List(EntityKind::Service));
        state.open_detail(EntityKind::Service, 2, None);
        state.open_form(EntityKind::ServicePackage, None, Some(origin));
        state.form_saved(EntityKind::ServicePackage);
        assert_eq!(state.page(), Page::Detail(EntityKind::Service));
        assert_eq!(state.detail_id(EntityKind::Service), Some(2));

        state.open_form(EntityKind::ServicePackage, None, Some(origin));
        state.form_cancelled(EntityKind::ServicePackage);
        assert_eq!(state.page(), Page::Detail(EntityKind::Service));

        state.open_detail(EntityKind::ServicePackage, 11, Some(origin));
        state.detail_deleted(EntityKind::ServicePackage);
        assert_eq!(state.page(), Page::Detail(EntityKind::Service));
        assert_eq!(state.detail_id(EntityKind::Service), Some(2));
        assert_eq!(state.detail_id(EntityKind::ServicePackage), None);
        assert_eq!(state.refresh_key(EntityKind::ServicePackage), 2);
    }

    #[test]
    fn test_two_level_back_chain() {
        let mut state = NavState::new(Page::List(EntityKind::Customer));
        state.open_detail(EntityKind::Customer, 7, None);
        state.open_detail(
            EntityKind::Order,
            3,
            Some(BackTarget::detail(EntityKind::Customer, 7)),
        );
        state.open_detail(
            EntityKind::Appointment,
            12,
            Some(BackTarget::detail(EntityKind::Order, 3)),
        );
        assert_eq!(state.detail_id(EntityKind::Customer), None);
        assert_eq!(state.detail_id(EntityKind::Order), None);

        state.detail_back(EntityKind::Appointment);
        assert_eq!(state.page(), Page::Detail(EntityKind::Order));
        assert_eq!(state.detail_id(EntityKind::Order), Some(3));

        state.detail_back(EntityKind::Order);
        assert_eq!(state.page(), Page::Detail(EntityKind::Customer));
        assert_eq!(state.detail_id(EntityKind::Customer), Some(7));

        state.detail_back(EntityKind::Customer);
        assert_eq!(state.page(), Page::List(EntityKind::Customer));
        assert_eq!(state.detail_id(EntityKind::Customer), None);
    }

    #[test]
    fn test_detail_back_resets_back_target() {
        let mut state = NavState::new(Page::Calendar);
        state.open_detail(EntityKind::Appointment, 12, Some(BackTarget::page(Page::Calendar)));
        state.detail_back(EntityKind::Appointment);
        assert_eq!(state.page(), Page::Calendar);
        assert_eq!(
            state.slot(EntityKind::Appointment).detail_back,
            BackTarget::list(EntityKind::Appointment)
        );
        assert_eq!(state.refresh_key(EntityKind::Appointment), 0);
    }

    #[test]
    fn test_delete_bumps_and_returns_to_list() {
        for kind in [EntityKind::Instructor, EntityKind::Staff, EntityKind::Hotel] {
            let mut state = NavState::new(Page::List(kind));
            state.open_detail(kind, 1, None);
            state.detail_deleted(kind);
            assert_eq!(state.page(), Page::List(kind));
            assert_eq!(state.detail_id(kind), None);
            assert_eq!(state.refresh_key(kind), 1);
        }
    }

    #[test]
    fn test_detail_id_only_set_for_current_detail_page() {
        let mut state = NavState::new(Page::List(EntityKind::Customer));
        state.open_detail(EntityKind::Customer, 7, None);
        state.navigate(Page::Calendar);
        for kind in EntityKind::ALL {
            assert_eq!(state.detail_id(kind), None);
        }
        state.open_detail(EntityKind::Hotel, 1, None);
        for kind in EntityKind::ALL {
            assert_eq!(state.detail_id(kind).is_some(), kind == EntityKind::Hotel);
        }
    }

    #[test]
    fn test_navigate_to_form_opens_create_mode() {
        let mut state = NavState::new(Page::Dashboard);
        state.navigate(Page::Form(EntityKind::Product));
        assert_eq!(state.page(), Page::Form(EntityKind::Product));
        assert_eq!(state.slot(EntityKind::Product).form_entity, None);
        state.navigate(Page::Detail(EntityKind::Product));
        assert_eq!(state.page(), Page::List(EntityKind::Product));
    }

    #[test]
    fn test_user_pages_fall_back_to_settings() {
        let mut state = NavState::new(Page::Settings);
        state.open_form(EntityKind::User, None, Some(BackTarget::page(Page::Settings)));
        state.form_saved(EntityKind::User);
        assert_eq!(state.page(), Page::Settings);
        assert_eq!(state.refresh_key(EntityKind::User), 1);
    }

    #[test]
    fn test_save_landing_after_cancel_only_refreshes() {
        let mut state = NavState::new(Page::List(EntityKind::Customer));
        state.open_detail(EntityKind::Customer, 7, None);
        state.open_form(
            EntityKind::Customer,
            Some(customer(7)),
            Some(BackTarget::detail(EntityKind::Customer, 7)),
        );
        state.form_cancelled(EntityKind::Customer);
        state.navigate(Page::Calendar);

        state.records_changed(EntityKind::Customer);
        assert_eq!(state.page(), Page::Calendar);
        assert_eq!(state.refresh_key(EntityKind::Customer), 1);
        assert_eq!(
            state.slot(EntityKind::Customer).detail_back,
            BackTarget::list(EntityKind::Customer)
        );
    }

    #[test]
    fn test_guard_redirects_protected_and_public_pages() {
        let mut state = NavState::from_location("/customers", "?detail=3");
        assert_eq!(state.apply_guard(false), Some(Page::Login));
        assert_eq!(state.page(), Page::Login);
        assert_eq!(state.detail_id(EntityKind::Customer), None);
        assert_eq!(state.apply_guard(false), None);

        assert_eq!(state.apply_guard(true), Some(Page::Dashboard));
        assert_eq!(state.apply_guard(true), None);
        assert_eq!(state.page(), Page::Dashboard);
    }

    #[test]
    fn test_location_encodes_detail_id() {
        let mut state = NavState::new(Page::List(EntityKind::Customer));
        assert_eq!(state.location(), "/customers");
        state.open_detail(EntityKind::Customer, 7, None);
        assert_eq!(state.location(), "/customers?detail=7");
        state.open_form(EntityKind::Customer, Some(customer(7)), None);
        assert_eq!(state.location(), "/customers");

        let reloaded = NavState::from_location("/customers", "?detail=7");
        assert_eq!(reloaded.page(), Page::Detail(EntityKind::Customer));
        assert_eq!(reloaded.detail_id(EntityKind::Customer), Some(7));
    }

    #[test]
    fn test_snapshot_restore_keeps_form_records_and_refresh_keys() {
        let mut state = NavState::new(Page::List(EntityKind::Customer));
        state.open_detail(EntityKind::Customer, 7, None);
        let at_detail = state.snapshot();

        state.open_form(
            EntityKind::Customer,
            Some(customer(7)),
            Some(BackTarget::detail(EntityKind::Customer, 7)),
        );
        state.records_changed(EntityKind::Hotel);
        state.restore(&at_detail);

        assert_eq!(state.page(), Page::Detail(EntityKind::Customer));
        assert_eq!(state.detail_id(EntityKind::Customer), Some(7));
        assert_eq!(
            state.slot(EntityKind::Customer).form_back,
            BackTarget::list(EntityKind::Customer)
        );
        assert_eq!(state.slot(EntityKind::Customer).form_entity, Some(customer(7)));
        assert_eq!(state.refresh_key(EntityKind::Hotel), 1);
    }
}
