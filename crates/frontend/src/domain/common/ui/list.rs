use contracts::domain::common::{EntityRecord, RecordId};
use contracts::enums::EntityKind;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{
    Button, ButtonAppearance, Input, Table, TableBody, TableCell, TableCellLayout, TableHeader,
    TableHeaderCell, TableRow,
};

use crate::domain::common::{api, fields};
use crate::routes::page::Page;
use crate::routes::registry::page_id;
use crate::shared::format::{field_label, format_value};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::request_generation::{accepts, RequestGeneration};

fn matches_query(record: &EntityRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    record.id.to_string() == query
        || record
            .fields
            .values()
            .any(|value| format_value(value).to_lowercase().contains(query))
}

/// List page for any entity. Re-fetches whenever `refresh_key` changes.
#[component]
pub fn EntityList(
    kind: EntityKind,
    #[prop(into)] refresh_key: Signal<u64>,
    on_open: Callback<RecordId>,
    on_create: Callback<()>,
) -> impl IntoView {
    let (items, set_items) = signal(Vec::<EntityRecord>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let search_query = RwSignal::new(String::new());
    let generation = StoredValue::new(RequestGeneration::default());

    let fetch = move || {
        let mut next = generation.get_value();
        let request = next.begin();
        generation.set_value(next);
        set_loading.set(true);
        spawn_local(async move {
            let result = api::fetch_list(kind).await;
            // a newer request or an unmounted page owns the result now
            if !accepts(generation.try_get_value(), request) {
                return;
            }
            match result {
                Ok(rows) => {
                    set_items.try_set(rows);
                    set_error.try_set(None);
                }
                Err(e) => {
                    log::warn!("{} list: {}", kind, e);
                    set_error.try_set(Some(e));
                }
            }
            set_loading.try_set(false);
        });
    };

    Effect::new(move |_| {
        let key = refresh_key.get();
        log::debug!("{} list fetch (refresh key {})", kind, key);
        fetch();
    });

    let visible = Signal::derive(move || {
        let query = search_query.get().trim().to_lowercase();
        items
            .get()
            .into_iter()
            .filter(|record| matches_query(record, &query))
            .collect::<Vec<_>>()
    });

    let columns = fields::default_fields(kind);

    view! {
        <PageFrame page_id=page_id(Page::List(kind)) category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{kind.list_name()}</h1>
                </div>
                <div class="page__header-right">
                    <div style="width: 280px;">
                        <Input value=search_query placeholder="Search..." />
                    </div>
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| on_create.run(())>
                        {format!("New {}", kind.display_name().to_lowercase())}
                    </Button>
                    <Button on_click=move |_| fetch()>"Refresh"</Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="warning-box">{e}</div> })}

                <Show
                    when=move || !loading.get() || !items.get().is_empty()
                    fallback=|| view! { <p class="page__placeholder">"Loading..."</p> }
                >
                    <Show
                        when=move || !visible.get().is_empty()
                        fallback=|| view! { <p class="page__placeholder">"Nothing to show"</p> }
                    >
                        <Table>
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell min_width=60.0>"#"</TableHeaderCell>
                                    {columns
                                        .iter()
                                        .map(|column| view! {
                                            <TableHeaderCell>{field_label(column)}</TableHeaderCell>
                                        })
                                        .collect_view()}
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {move || {
                                    visible
                                        .get()
                                        .into_iter()
                                        .map(|record| {
                                            let id = record.id;
                                            view! {
                                                <TableRow
                                                    attr:class="table__row--clickable"
                                                    on:click=move |_| on_open.run(id)
                                                >
                                                    <TableCell>
                                                        <TableCellLayout>{id}</TableCellLayout>
                                                    </TableCell>
                                                    {columns
                                                        .iter()
                                                        .map(|column| {
                                                            let text = record
                                                                .get(column)
                                                                .map(format_value)
                                                                .unwrap_or_else(|| "-".to_string());
                                                            view! {
                                                                <TableCell>
                                                                    <TableCellLayout>{text}</TableCellLayout>
                                                                </TableCell>
                                                            }
                                                        })
                                                        .collect_view()}
                                                </TableRow>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </TableBody>
                        </Table>
                    </Show>
                </Show>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_query() {
        let record = EntityRecord::new(7)
            .with_field("name", "Ana Lopez")
            .with_field("phone", "+34 600");
        assert!(matches_query(&record, ""));
        assert!(matches_query(&record, "lopez"));
        assert!(matches_query(&record, "7"));
        assert!(!matches_query(&record, "tarifa"));
    }
}
