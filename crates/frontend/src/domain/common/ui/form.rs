use contracts::domain::common::EntityRecord;
use contracts::enums::EntityKind;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::{Map, Value};
use thaw::{Button, ButtonAppearance, Input};

use crate::domain::common::api;
use crate::domain::common::fields::{self, input_text, parse_input};
use crate::layout::global_context::AppGlobalContext;
use crate::routes::page::Page;
use crate::routes::registry::page_id;
use crate::routes::state::BackTarget;
use crate::shared::format::field_label;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_FORM;

/// Values a create form starts with when opened from a parent's detail page,
/// e.g. `customer_id` for an order created on a customer.
pub fn link_preset(kind: EntityKind, back: BackTarget) -> Map<String, Value> {
    let mut preset = Map::new();
    if let (Page::Detail(parent), Some(parent_id)) = (back.page, back.id) {
        if let Some(field) = kind.parent_field(parent) {
            preset.insert(field.to_string(), Value::from(parent_id));
        }
    }
    preset
}

/// Create/edit form for any entity. `record` is `None` in create mode.
#[component]
pub fn EntityForm(
    kind: EntityKind,
    record: Option<EntityRecord>,
    back: BackTarget,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let record_id = record.as_ref().map(|r| r.id);
    let preset = if record.is_none() {
        link_preset(kind, back)
    } else {
        Map::new()
    };

    // (field, original value, input text)
    let inputs: Vec<(String, Value, RwSignal<String>)> =
        fields::form_fields(kind, record.as_ref(), &preset)
            .into_iter()
            .map(|(key, value)| {
                let text = RwSignal::new(input_text(&value));
                (key, value, text)
            })
            .collect();
    let inputs = StoredValue::new(inputs);

    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let save = move || {
        let values: Vec<(String, Value)> = inputs.with_value(|inputs| {
            inputs
                .iter()
                .map(|(key, original, text)| (key.clone(), parse_input(original, &text.get_untracked())))
                .collect()
        });
        let payload = fields::to_payload(&values);
        set_saving.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::save(kind, record_id, &payload).await {
                Ok(saved) => {
                    log::info!("{} #{} saved", kind, saved.id);
                    // the form owns `saving`; gone means the user already left
                    if saving.try_get_untracked().is_some() {
                        on_saved.run(());
                    } else {
                        ctx.records_changed(kind);
                    }
                }
                Err(e) => {
                    log::warn!("{} save: {}", kind, e);
                    set_error.try_set(Some(e));
                    set_saving.try_set(false);
                }
            }
        });
    };

    let title = match record_id {
        Some(id) => format!("Edit {} #{}", kind.display_name().to_lowercase(), id),
        None => format!("New {}", kind.display_name().to_lowercase()),
    };

    view! {
        <PageFrame page_id=page_id(Page::Form(kind)) category=PAGE_CAT_FORM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{title}</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=saving
                        on_click=move |_| save()
                    >
                        "Save"
                    </Button>
                    <Button disabled=saving on_click=move |_| on_cancel.run(())>"Cancel"</Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="warning-box">{e}</div> })}

                <div class="form-grid">
                    {inputs
                        .get_value()
                        .into_iter()
                        .map(|(key, _, text)| view! {
                            <label class="form__label">{field_label(&key)}</label>
                            <Input value=text />
                        })
                        .collect_view()}
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_preset_links_child_to_parent_detail() {
        let preset = link_preset(EntityKind::Order, BackTarget::detail(EntityKind::Customer, 7));
        assert_eq!(preset.get("customer_id"), Some(&json!(7)));

        let preset = link_preset(
            EntityKind::ServicePackage,
            BackTarget::detail(EntityKind::Service, 2),
        );
        assert_eq!(preset.get("service_id"), Some(&json!(2)));
    }

    #[test]
    fn test_no_preset_without_parent_detail() {
        assert!(link_preset(EntityKind::Order, BackTarget::list(EntityKind::Order)).is_empty());
        assert!(link_preset(EntityKind::Hotel, BackTarget::detail(EntityKind::Customer, 7)).is_empty());
        assert!(
            link_preset(EntityKind::Appointment, BackTarget::page(Page::Calendar)).is_empty()
        );
    }
}
