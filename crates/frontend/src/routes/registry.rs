//! Page registry - the single place mapping `Page` → view.
//!
//! Every `Page` variant has an arm in `render_page`; adding a variant without
//! one is a compile error. Entity pages get their callbacks wired to the
//! navigation transitions of `AppGlobalContext` here, so the page components
//! themselves never touch navigation state.

use contracts::domain::common::{EntityRecord, RecordId};
use contracts::enums::EntityKind;
use leptos::prelude::*;

use super::page::Page;
use super::state::BackTarget;
use crate::domain::common::ui::{EntityDetails, EntityForm, EntityList};
use crate::layout::global_context::AppGlobalContext;
use crate::shared::page_standard::*;
use crate::system::pages::calendar::CalendarPage;
use crate::system::pages::dashboard::DashboardPage;
use crate::system::pages::landing::LandingPage;
use crate::system::pages::login::LoginPage;
use crate::system::pages::monthly_report::MonthlyReportPage;
use crate::system::pages::roadmap::RoadmapPage;
use crate::system::pages::settings::SettingsPage;
use crate::system::pages::signup::SignupPage;

/// One of the `PAGE_CAT_*` constants for `page`.
pub fn page_category(page: Page) -> &'static str {
    match page {
        Page::Landing | Page::Login | Page::Signup => PAGE_CAT_PUBLIC,
        Page::Dashboard | Page::Calendar | Page::MonthlyReport => PAGE_CAT_DASHBOARD,
        Page::Settings | Page::Roadmap => PAGE_CAT_SYSTEM,
        Page::List(_) => PAGE_CAT_LIST,
        Page::Detail(_) => PAGE_CAT_DETAIL,
        Page::Form(_) => PAGE_CAT_FORM,
    }
}

/// DOM id of a page root: `{tag}--{category}`.
pub fn page_id(page: Page) -> String {
    format!("{}--{}", page.tag(), page_category(page))
}

/// Back-target pointing at the detail page of `kind` currently shown, if any.
fn current_detail(ctx: AppGlobalContext, kind: EntityKind) -> Option<BackTarget> {
    ctx.nav
        .with_untracked(|state| state.detail_id(kind))
        .map(|id| BackTarget::detail(kind, id))
}

/// Render the view for `page`.
pub fn render_page(page: Page, ctx: AppGlobalContext) -> AnyView {
    match page {
        Page::Landing => view! { <LandingPage /> }.into_any(),
        Page::Login => view! { <LoginPage /> }.into_any(),
        Page::Signup => view! { <SignupPage /> }.into_any(),
        Page::Dashboard => view! { <DashboardPage /> }.into_any(),
        Page::Calendar => view! { <CalendarPage /> }.into_any(),
        Page::Settings => view! { <SettingsPage /> }.into_any(),
        Page::Roadmap => view! { <RoadmapPage /> }.into_any(),
        Page::MonthlyReport => view! { <MonthlyReportPage /> }.into_any(),

        Page::List(kind) => view! {
            <EntityList
                kind=kind
                refresh_key=Signal::derive(move || ctx.nav.with(|state| state.refresh_key(kind)))
                on_open=Callback::new(move |id: RecordId| ctx.open_detail(kind, id, None))
                on_create=Callback::new(move |_| ctx.open_form(kind, None, None))
            />
        }
        .into_any(),

        Page::Detail(kind) => view! {
            <EntityDetails
                kind=kind
                detail_id=Signal::derive(move || ctx.nav.with(|state| state.detail_id(kind)))
                on_edit=Callback::new(move |record: EntityRecord| {
                    let back = BackTarget::detail(kind, record.id);
                    ctx.open_form(kind, Some(record), Some(back));
                })
                on_back=Callback::new(move |_| ctx.detail_back(kind))
                on_deleted=Callback::new(move |_| ctx.detail_deleted(kind))
                on_open_related=Callback::new(move |(child, id): (EntityKind, RecordId)| {
                    ctx.open_detail(child, id, current_detail(ctx, kind));
                })
                on_create_related=Callback::new(move |child: EntityKind| {
                    ctx.open_form(child, None, current_detail(ctx, kind));
                })
            />
        }
        .into_any(),

        Page::Form(kind) => {
            let (record, back) = ctx.nav.with_untracked(|state| {
                let slot = state.slot(kind);
                (slot.form_entity.clone(), slot.form_back)
            });
            view! {
                <EntityForm
                    kind=kind
                    record=record
                    back=back
                    on_saved=Callback::new(move |_| ctx.form_saved(kind))
                    on_cancel=Callback::new(move |_| ctx.form_cancelled(kind))
                />
            }
            .into_any()
        }
    }
}
