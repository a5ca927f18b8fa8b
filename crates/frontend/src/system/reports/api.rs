use contracts::reports::{MonthlyReportResponse, ReportPeriod};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, status_error};
use crate::system::auth::storage;

/// Aggregated revenue and hours for one month
pub async fn get_monthly_report(period: ReportPeriod) -> Result<MonthlyReportResponse, String> {
    let url = api_url(&format!("/api/reports/monthly?month={}", period.code()));

    let response = Request::get(&url)
        .header("Authorization", &storage::bearer_header())
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(status_error("Load report", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
