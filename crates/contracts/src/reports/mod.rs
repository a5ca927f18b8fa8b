pub mod monthly;

pub use monthly::{MonthlyReportResponse, MonthlyReportRow, ReportPeriod};
