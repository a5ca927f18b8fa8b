use leptos::prelude::*;

use crate::routes::page::Page;
use crate::routes::registry::page_id;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;

const ITEMS: &[(&str, &[&str])] = &[
    (
        "Done",
        &[
            "Customers, orders and appointments with linked detail pages",
            "Instructor and staff records",
            "Monthly revenue report",
        ],
    ),
    (
        "Next",
        &[
            "Instructor availability on the calendar",
            "Rental stock per product",
            "Invoices from orders",
        ],
    ),
    (
        "Later",
        &["Online booking for customers", "Wind forecast on the dashboard"],
    ),
];

#[component]
pub fn RoadmapPage() -> impl IntoView {
    view! {
        <PageFrame page_id=page_id(Page::Roadmap) category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Roadmap"</h1>
                </div>
            </div>
            <div class="page__content roadmap">
                {ITEMS
                    .iter()
                    .map(|(stage, entries)| view! {
                        <section class="roadmap__stage">
                            <h3>{*stage}</h3>
                            <ul>
                                {entries.iter().map(|entry| view! { <li>{*entry}</li> }).collect_view()}
                            </ul>
                        </section>
                    })
                    .collect_view()}
            </div>
        </PageFrame>
    }
}
