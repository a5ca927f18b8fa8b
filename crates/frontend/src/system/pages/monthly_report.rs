use chrono::Local;
use contracts::reports::{MonthlyReportResponse, ReportPeriod};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{
    Button, Table, TableBody, TableCell, TableCellLayout, TableHeader, TableHeaderCell, TableRow,
};

use crate::routes::page::Page;
use crate::routes::registry::page_id;
use crate::shared::format::format_money;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::shared::request_generation::{accepts, RequestGeneration};
use crate::system::reports::api;

#[component]
pub fn MonthlyReportPage() -> impl IntoView {
    let period = RwSignal::new(ReportPeriod::containing(Local::now().date_naive()));
    let (data, set_data) = signal(None::<MonthlyReportResponse>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let generation = StoredValue::new(RequestGeneration::default());

    // Load data when period changes
    Effect::new(move |_| {
        let selected = period.get();
        let mut next = generation.get_value();
        let request = next.begin();
        generation.set_value(next);
        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            let result = api::get_monthly_report(selected).await;
            if !accepts(generation.try_get_value(), request) {
                return;
            }
            match result {
                Ok(response) => {
                    set_data.try_set(Some(response));
                }
                Err(e) => {
                    log::error!("monthly report {}: {}", selected.code(), e);
                    set_data.try_set(None);
                    set_error.try_set(Some(e));
                }
            }
            set_loading.try_set(false);
        });
    });

    view! {
        <PageFrame page_id=page_id(Page::MonthlyReport) category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Monthly report"</h1>
                </div>
                <div class="page__header-right">
                    <Button on_click=move |_| period.update(|p| *p = p.previous())>"<"</Button>
                    <span class="period-label">{move || period.get().code()}</span>
                    <Button on_click=move |_| period.update(|p| *p = p.next())>">"</Button>
                    <Button on_click=move |_| period.set(ReportPeriod::containing(Local::now().date_naive()))>
                        "This month"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="warning-box">{e}</div> })}
                {move || loading.get().then(|| view! { <p class="page__placeholder">"Loading..."</p> })}

                {move || data.get().map(|report| {
                    let total_revenue = format_money(report.total_revenue());
                    let total_hours = format!("{:.1}", report.total_hours());
                    view! {
                        <Table>
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Group"</TableHeaderCell>
                                    <TableHeaderCell>"Item"</TableHeaderCell>
                                    <TableHeaderCell>"Appointments"</TableHeaderCell>
                                    <TableHeaderCell>"Hours"</TableHeaderCell>
                                    <TableHeaderCell>"Revenue"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {report
                                    .rows
                                    .into_iter()
                                    .map(|row| view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout>{row.group}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{row.label}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{row.appointments}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{format!("{:.1}", row.hours)}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{format_money(row.revenue)}</TableCellLayout></TableCell>
                                        </TableRow>
                                    })
                                    .collect_view()}
                                <TableRow attr:class="table__row--totals">
                                    <TableCell><TableCellLayout>"Total"</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>""</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>""</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{total_hours}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{total_revenue}</TableCellLayout></TableCell>
                                </TableRow>
                            </TableBody>
                        </Table>
                    }
                })}
            </div>
        </PageFrame>
    }
}
