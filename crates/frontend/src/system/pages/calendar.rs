//! Appointments grouped by local day.

use chrono::{Local, NaiveDate, NaiveDateTime};
use contracts::domain::common::EntityRecord;
use contracts::enums::EntityKind;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::BTreeMap;
use thaw::Button;

use crate::domain::common::api;
use crate::layout::global_context::AppGlobalContext;
use crate::routes::page::Page;
use crate::routes::registry::page_id;
use crate::routes::state::BackTarget;
use crate::shared::format::parse_timestamp;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::shared::request_generation::{accepts, RequestGeneration};

const START_FIELD: &str = "start_time";

/// Local start of an appointment. Zone-less timestamps are taken as local.
fn start_of(record: &EntityRecord) -> Option<NaiveDateTime> {
    let raw = record.get(START_FIELD)?.as_str()?;
    parse_timestamp(raw)
        .map(|local| local.naive_local())
        .or_else(|| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").ok())
        .or_else(|| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").ok())
}

/// Appointments by day, each day sorted by start time. Records without a
/// readable start time are left out.
pub fn group_by_day(records: Vec<EntityRecord>) -> Vec<(NaiveDate, Vec<(NaiveDateTime, EntityRecord)>)> {
    let mut days: BTreeMap<NaiveDate, Vec<(NaiveDateTime, EntityRecord)>> = BTreeMap::new();
    for record in records {
        if let Some(start) = start_of(&record) {
            days.entry(start.date()).or_default().push((start, record));
        }
    }
    days.into_iter()
        .map(|(day, mut entries)| {
            entries.sort_by_key(|(start, _)| *start);
            (day, entries)
        })
        .collect()
}

#[component]
pub fn CalendarPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (records, set_records) = signal(Vec::<EntityRecord>::new());
    let (error, set_error) = signal(None::<String>);
    let (show_past, set_show_past) = signal(false);

    let generation = StoredValue::new(RequestGeneration::default());

    let fetch = move || {
        let mut next = generation.get_value();
        let request = next.begin();
        generation.set_value(next);
        set_error.set(None);
        spawn_local(async move {
            let result = api::fetch_list(EntityKind::Appointment).await;
            if !accepts(generation.try_get_value(), request) {
                return;
            }
            match result {
                Ok(rows) => {
                    set_records.try_set(rows);
                }
                Err(e) => {
                    log::warn!("calendar: {}", e);
                    set_error.try_set(Some(e));
                }
            }
        });
    };

    // re-read when appointments are saved or deleted elsewhere
    Effect::new(move |_| {
        let _ = ctx.nav.with(|state| state.refresh_key(EntityKind::Appointment));
        fetch();
    });

    let days = move || {
        let today = Local::now().date_naive();
        let past = show_past.get();
        group_by_day(records.get())
            .into_iter()
            .filter(|(day, _)| past || *day >= today)
            .collect::<Vec<_>>()
    };

    view! {
        <PageFrame page_id=page_id(Page::Calendar) category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Calendar"</h1>
                </div>
                <div class="page__header-right">
                    <Button on_click=move |_| fetch()>"Refresh"</Button>
                    <Button on_click=move |_| set_show_past.update(|v| *v = !*v)>
                        {move || if show_past.get() { "Hide past days" } else { "Show past days" }}
                    </Button>
                    <Button on_click=move |_| {
                        ctx.open_form(EntityKind::Appointment, None, Some(BackTarget::page(Page::Calendar)))
                    }>
                        "New appointment"
                    </Button>
                </div>
            </div>

            <div class="page__content calendar">
                {move || error.get().map(|e| view! { <div class="warning-box">{e}</div> })}
                {move || {
                    let days = days();
                    if days.is_empty() {
                        return view! { <p class="page__placeholder">"No appointments"</p> }.into_any();
                    }
                    days.into_iter()
                        .map(|(day, entries)| view! {
                            <section class="calendar__day">
                                <h3>{day.format("%A, %d.%m.%Y").to_string()}</h3>
                                <ul>
                                    {entries
                                        .into_iter()
                                        .map(|(start, record)| {
                                            let id = record.id;
                                            view! {
                                                <li>
                                                    <a href="#" on:click=move |ev| {
                                                        ev.prevent_default();
                                                        ctx.open_detail(
                                                            EntityKind::Appointment,
                                                            id,
                                                            Some(BackTarget::page(Page::Calendar)),
                                                        );
                                                    }>
                                                        {format!("{} {}", start.format("%H:%M"), record.caption())}
                                                    </a>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </section>
                        })
                        .collect_view()
                        .into_any()
                }}
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_by_day_sorts_days_and_times() {
        let records = vec![
            EntityRecord::new(1).with_field(START_FIELD, "2025-03-02T15:00:00"),
            EntityRecord::new(2).with_field(START_FIELD, "2025-03-01T10:00:00"),
            EntityRecord::new(3).with_field(START_FIELD, "2025-03-02 09:30:00"),
            EntityRecord::new(4),
        ];
        let days = group_by_day(records);
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].0, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
        let second: Vec<i64> = days[1].1.iter().map(|(_, r)| r.id).collect();
        assert_eq!(second, vec![3, 1]);
    }

    #[test]
    fn test_zoned_timestamps_use_local_day() {
        let raw = "2025-03-01T12:00:00Z";
        let record = EntityRecord::new(1).with_field(START_FIELD, raw);
        let expected = parse_timestamp(raw).unwrap().date_naive();
        assert_eq!(group_by_day(vec![record])[0].0, expected);
    }
}
