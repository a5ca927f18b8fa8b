use contracts::enums::EntityKind;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

use crate::layout::global_context::AppGlobalContext;
use crate::routes::page::Page;
use crate::routes::registry::page_id;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::system::auth::context::use_auth;

/// Shortcut groups on the dashboard
const SHORTCUTS: &[(&str, &[EntityKind])] = &[
    (
        "School",
        &[
            EntityKind::Customer,
            EntityKind::Appointment,
            EntityKind::Order,
            EntityKind::Instructor,
        ],
    ),
    (
        "Catalog",
        &[EntityKind::Service, EntityKind::ServicePackage, EntityKind::Product],
    ),
    (
        "Partners",
        &[EntityKind::Hotel, EntityKind::Agency, EntityKind::ThirdParty],
    ),
    (
        "Finance",
        &[EntityKind::CompanyAccount, EntityKind::Transaction],
    ),
];

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, _) = use_auth();

    let greeting = move || {
        auth_state
            .get()
            .user
            .map(|user| format!("Welcome, {}", user.display_name()))
            .unwrap_or_else(|| "Welcome".to_string())
    };

    view! {
        <PageFrame page_id=page_id(Page::Dashboard) category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{greeting}</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| ctx.open_form(EntityKind::Appointment, None, None)
                    >
                        "New appointment"
                    </Button>
                    <Button on_click=move |_| ctx.navigate(Page::Calendar)>"Calendar"</Button>
                    <Button on_click=move |_| ctx.navigate(Page::MonthlyReport)>"Monthly report"</Button>
                </div>
            </div>

            <div class="page__content dashboard-grid">
                {SHORTCUTS
                    .iter()
                    .map(|(group, kinds)| view! {
                        <section class="dashboard-card">
                            <h3 class="dashboard-card__title">{*group}</h3>
                            <div class="dashboard-card__links">
                                {kinds
                                    .iter()
                                    .map(|kind| {
                                        let kind = *kind;
                                        view! {
                                            <Button on_click=move |_| ctx.navigate(Page::List(kind))>
                                                {kind.list_name()}
                                            </Button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </section>
                    })
                    .collect_view()}
            </div>
        </PageFrame>
    }
}
