//! History-entry payload.
//!
//! A snapshot is stored as a flat JSON object:
//!
//! ```text
//! { "page": "appointmentDetail",
//!   "appointmentDetailId": 12,
//!   "appointmentDetailBackPage": "calendar" }
//! ```
//!
//! Per entity the keys are `<code>DetailId`, `<code>DetailBackPage`,
//! `<code>DetailBackId`, `<code>FormBackPage` and `<code>FormBackId`.
//! Fields holding their default value are omitted, and missing fields read
//! back as defaults.

use super::page::Page;
use super::state::BackTarget;
use contracts::domain::common::RecordId;
use contracts::enums::EntityKind;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotSnapshot {
    pub detail_id: Option<RecordId>,
    pub detail_back: BackTarget,
    pub form_back: BackTarget,
}

impl SlotSnapshot {
    fn new(kind: EntityKind) -> Self {
        Self {
            detail_id: None,
            detail_back: BackTarget::list(kind),
            form_back: BackTarget::list(kind),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationSnapshot {
    pub page: Page,
    slots: [SlotSnapshot; EntityKind::COUNT],
}

impl NavigationSnapshot {
    pub fn new(page: Page) -> Self {
        Self {
            page,
            slots: std::array::from_fn(|i| SlotSnapshot::new(EntityKind::ALL[i])),
        }
    }

    pub fn slot(&self, kind: EntityKind) -> &SlotSnapshot {
        &self.slots[kind.index()]
    }

    pub fn slot_mut(&mut self, kind: EntityKind) -> &mut SlotSnapshot {
        &mut self.slots[kind.index()]
    }

    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        map.insert("page".to_string(), Value::String(self.page.tag()));
        for kind in EntityKind::ALL {
            let slot = self.slot(kind);
            let default = BackTarget::list(kind);
            let code = kind.code();
            if let Some(id) = slot.detail_id {
                map.insert(format!("{}DetailId", code), Value::from(id));
            }
            write_back_target(&mut map, code, "Detail", slot.detail_back, default);
            write_back_target(&mut map, code, "Form", slot.form_back, default);
        }
        Value::Object(map)
    }

    /// Read a history entry; `None` unless it carries a known `page`.
    pub fn from_json(value: &Value) -> Option<Self> {
        let map = value.as_object()?;
        let page = map.get("page").and_then(Value::as_str).and_then(Page::from_tag)?;
        let mut snapshot = Self::new(page);
        for kind in EntityKind::ALL {
            let code = kind.code();
            let slot = snapshot.slot_mut(kind);
            slot.detail_id = read_id(map, &format!("{}DetailId", code));
            slot.detail_back = read_back_target(map, code, "Detail", kind);
            slot.form_back = read_back_target(map, code, "Form", kind);
        }
        Some(snapshot)
    }
}

fn write_back_target(
    map: &mut Map<String, Value>,
    code: &str,
    family: &str,
    target: BackTarget,
    default: BackTarget,
) {
    if target == default {
        return;
    }
    map.insert(
        format!("{}{}BackPage", code, family),
        Value::String(target.page.tag()),
    );
    if let Some(id) = target.id {
        map.insert(format!("{}{}BackId", code, family), Value::from(id));
    }
}

fn read_back_target(
    map: &Map<String, Value>,
    code: &str,
    family: &str,
    kind: EntityKind,
) -> BackTarget {
    let page = map
        .get(&format!("{}{}BackPage", code, family))
        .and_then(Value::as_str)
        .and_then(Page::from_tag)
        .unwrap_or(Page::List(kind));
    BackTarget {
        page,
        id: read_id(map, &format!("{}{}BackId", code, family)),
    }
}

fn read_id(map: &Map<String, Value>, key: &str) -> Option<RecordId> {
    match map.get(key)? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::state::NavState;
    use serde_json::json;

    #[test]
    fn test_restores_appointment_detail_from_calendar() {
        let value = json!({
            "page": "appointmentDetail",
            "appointmentDetailId": 12,
            "appointmentDetailBackPage": "calendar"
        });
        let snapshot = NavigationSnapshot::from_json(&value).unwrap();

        let mut state = NavState::new(Page::Dashboard);
        state.restore(&snapshot);

        assert_eq!(state.page(), Page::Detail(EntityKind::Appointment));
        assert_eq!(state.detail_id(EntityKind::Appointment), Some(12));
        assert_eq!(
            state.slot(EntityKind::Appointment).detail_back,
            BackTarget::page(Page::Calendar)
        );
    }

    #[test]
    fn test_default_fields_are_omitted() {
        let snapshot = NavigationSnapshot::new(Page::List(EntityKind::Customer));
        assert_eq!(snapshot.to_json(), json!({ "page": "customers" }));
    }

    #[test]
    fn test_json_format() {
        let mut state = NavState::new(Page::List(EntityKind::Customer));
        state.open_detail(EntityKind::Customer, 7, None);
        state.open_detail(
            EntityKind::Order,
            3,
            Some(BackTarget::detail(EntityKind::Customer, 7)),
        );
        assert_eq!(
            state.snapshot().to_json(),
            json!({
                "page": "orderDetail",
                "orderDetailId": 3,
                "orderDetailBackPage": "customerDetail",
                "orderDetailBackId": 7
            })
        );
    }

    #[test]
    fn test_json_round_trip_of_live_state() {
        let mut state = NavState::new(Page::List(EntityKind::Service));
        state.open_detail(EntityKind::Service, 2, None);
        state.open_form(
            EntityKind::ServicePackage,
            None,
            Some(BackTarget::detail(EntityKind::Service, 2)),
        );
        let snapshot = state.snapshot();
        assert_eq!(NavigationSnapshot::from_json(&snapshot.to_json()), Some(snapshot));
    }

    #[test]
    fn test_rejects_values_without_page() {
        assert_eq!(NavigationSnapshot::from_json(&Value::Null), None);
        assert_eq!(NavigationSnapshot::from_json(&json!({ "customerDetailId": 1 })), None);
        assert_eq!(NavigationSnapshot::from_json(&json!({ "page": "nowhere" })), None);
        assert_eq!(NavigationSnapshot::from_json(&json!("customers")), None);
    }

    #[test]
    fn test_unknown_back_page_reads_as_default() {
        let value = json!({
            "page": "hotelDetail",
            "hotelDetailId": "4",
            "hotelDetailBackPage": "bogus"
        });
        let snapshot = NavigationSnapshot::from_json(&value).unwrap();
        let slot = snapshot.slot(EntityKind::Hotel);
        assert_eq!(slot.detail_id, Some(4));
        assert_eq!(slot.detail_back, BackTarget::list(EntityKind::Hotel));
    }
}
