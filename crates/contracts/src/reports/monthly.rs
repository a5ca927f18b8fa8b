use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Отчётный месяц
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPeriod {
    pub year: i32,
    pub month: u32,
}

impl ReportPeriod {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Parse `"YYYY-MM"`
    pub fn parse(value: &str) -> Option<Self> {
        let (year, month) = value.trim().split_once('-')?;
        Self::new(year.parse().ok()?, month.parse().ok()?)
    }

    /// Period in format "YYYY-MM"
    pub fn code(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    pub fn last_day(&self) -> NaiveDate {
        self.next().first_day().pred_opt().unwrap_or_default()
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn previous(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }
}

/// Response for the monthly report page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyReportResponse {
    /// Period in format "YYYY-MM"
    pub period: String,
    pub rows: Vec<MonthlyReportRow>,
}

/// One aggregated line (revenue by service, hours by instructor, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyReportRow {
    pub group: String,
    pub label: String,
    pub appointments: u32,
    pub hours: f64,
    pub revenue: f64,
}

impl MonthlyReportResponse {
    pub fn total_revenue(&self) -> f64 {
        self.rows.iter().map(|row| row.revenue).sum()
    }

    pub fn total_hours(&self) -> f64 {
        self.rows.iter().map(|row| row.hours).sum()
    }
}
