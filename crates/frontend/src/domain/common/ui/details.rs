use contracts::domain::common::{EntityRecord, RecordId};
use contracts::enums::EntityKind;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance};

use crate::domain::common::api;
use crate::layout::global_context::AppGlobalContext;
use crate::routes::page::Page;
use crate::routes::registry::page_id;
use crate::shared::format::{field_label, format_value};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::shared::request_generation::{accepts, RequestGeneration};

/// Detail page for any entity.
///
/// Loads the record named by `detail_id`, lists related child records and
/// offers edit/delete/back. Deletion is performed here; the controller is
/// only told afterwards through `on_deleted`.
#[component]
pub fn EntityDetails(
    kind: EntityKind,
    #[prop(into)] detail_id: Signal<Option<RecordId>>,
    on_edit: Callback<EntityRecord>,
    on_back: Callback<()>,
    on_deleted: Callback<()>,
    /// Open a related record's detail page (kind, id).
    on_open_related: Callback<(EntityKind, RecordId)>,
    /// Open a related kind's form in create mode, linked to this record.
    on_create_related: Callback<EntityKind>,
) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (record, set_record) = signal(None::<EntityRecord>);
    let (error, set_error) = signal(None::<String>);
    let (deleting, set_deleting) = signal(false);
    let generation = StoredValue::new(RequestGeneration::default());

    Effect::new(move |_| {
        let id = detail_id.get();
        let mut next = generation.get_value();
        let request = next.begin();
        generation.set_value(next);
        set_record.set(None);
        set_error.set(None);
        let Some(id) = id else {
            return;
        };
        spawn_local(async move {
            let result = api::fetch_by_id(kind, id).await;
            if !accepts(generation.try_get_value(), request) {
                return;
            }
            match result {
                Ok(loaded) => {
                    set_record.try_set(Some(loaded));
                    set_error.try_set(None);
                }
                Err(e) => {
                    log::warn!("{} #{}: {}", kind, id, e);
                    set_error.try_set(Some(e));
                }
            }
        });
    });

    let delete = move || {
        let Some(id) = detail_id.get_untracked() else {
            return;
        };
        let confirmed = web_sys::window()
            .and_then(|win| {
                win.confirm_with_message(&format!(
                    "Delete {} #{}?",
                    kind.display_name().to_lowercase(),
                    id
                ))
                .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        set_deleting.set(true);
        spawn_local(async move {
            match api::delete(kind, id).await {
                Ok(()) => {
                    log::info!("{} #{} deleted", kind, id);
                    if deleting.try_get_untracked().is_some() {
                        on_deleted.run(());
                    } else {
                        ctx.records_changed(kind);
                    }
                }
                Err(e) => {
                    set_error.try_set(Some(e));
                    set_deleting.try_set(false);
                }
            }
        });
    };

    let title = move || {
        record
            .get()
            .map(|r| format!("{}: {}", kind.display_name(), r.caption()))
            .unwrap_or_else(|| kind.display_name().to_string())
    };

    view! {
        <PageFrame page_id=page_id(Page::Detail(kind)) category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{title}</h1>
                </div>
                <div class="page__header-right">
                    <Button disabled=deleting on_click=move |_| on_back.run(())>"Back"</Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || deleting.get() || record.get().is_none())
                        on_click=move |_| {
                            if let Some(current) = record.get_untracked() {
                                on_edit.run(current);
                            }
                        }
                    >
                        "Edit"
                    </Button>
                    <Button
                        disabled=Signal::derive(move || deleting.get() || record.get().is_none())
                        on_click=move |_| delete()
                    >
                        "Delete"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="warning-box">{e}</div> })}

                {move || match record.get() {
                    None => view! { <p class="page__placeholder">"Loading..."</p> }.into_any(),
                    Some(current) => view! {
                        <dl class="details-grid">
                            <dt>"#"</dt>
                            <dd>{current.id}</dd>
                            {current
                                .fields
                                .iter()
                                .map(|(key, value)| view! {
                                    <dt>{field_label(key)}</dt>
                                    <dd>{format_value(value)}</dd>
                                })
                                .collect_view()}
                        </dl>
                    }
                    .into_any(),
                }}

                {kind
                    .children()
                    .iter()
                    .map(|child| {
                        let child = *child;
                        view! {
                            <RelatedRecords
                                parent=kind
                                child=child
                                parent_id=detail_id
                                on_open=Callback::new(move |id| on_open_related.run((child, id)))
                                on_create=Callback::new(move |_| on_create_related.run(child))
                            />
                        }
                    })
                    .collect_view()}
            </div>
        </PageFrame>
    }
}

/// Child records of the shown record, e.g. a customer's orders.
#[component]
fn RelatedRecords(
    parent: EntityKind,
    child: EntityKind,
    parent_id: Signal<Option<RecordId>>,
    on_open: Callback<RecordId>,
    on_create: Callback<()>,
) -> impl IntoView {
    let (items, set_items) = signal(Vec::<EntityRecord>::new());
    let (error, set_error) = signal(None::<String>);
    let generation = StoredValue::new(RequestGeneration::default());

    Effect::new(move |_| {
        let id = parent_id.get();
        let mut next = generation.get_value();
        let request = next.begin();
        generation.set_value(next);
        set_items.set(Vec::new());
        set_error.set(None);
        let Some(id) = id else {
            return;
        };
        spawn_local(async move {
            let result = api::fetch_related(child, parent, id).await;
            // rows of a parent no longer shown
            if !accepts(generation.try_get_value(), request) {
                return;
            }
            match result {
                Ok(rows) => {
                    set_items.try_set(rows);
                }
                Err(e) => {
                    log::warn!("{} of {} #{}: {}", child.list_name(), parent, id, e);
                    set_error.try_set(Some(e));
                }
            }
        });
    });

    view! {
        <section class="related">
            <div class="related__header">
                <h3>{child.list_name()}</h3>
                <Button on_click=move |_| on_create.run(())>
                    {format!("New {}", child.display_name().to_lowercase())}
                </Button>
            </div>
            {move || error.get().map(|e| view! { <div class="warning-box">{e}</div> })}
            <ul class="related__list">
                {move || {
                    items
                        .get()
                        .into_iter()
                        .map(|record| {
                            let id = record.id;
                            view! {
                                <li>
                                    <a href="#" on:click=move |ev| {
                                        ev.prevent_default();
                                        on_open.run(id);
                                    }>
                                        {format!("#{} {}", id, record.caption())}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </section>
    }
}
