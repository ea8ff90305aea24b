use crate::{
    api::{ApiError, PayrollEntry, PayrollStatus},
    utils::filter::{distinct_values, matches_query, matches_select, Searchable},
};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::borrow::Cow;

impl Searchable for PayrollEntry {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.employee_name.as_str(),
            self.employee_id.as_str(),
            self.position.as_str(),
        ]
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PayrollStats {
    pub total_net: f64,
    pub processed: usize,
    pub total: usize,
    pub pending: usize,
}

impl PayrollStats {
    pub fn compute(entries: &[PayrollEntry]) -> Self {
        entries.iter().fold(Self::default(), |mut stats, entry| {
            stats.total_net += entry.net_salary;
            stats.total += 1;
            match entry.status {
                PayrollStatus::Processed => stats.processed += 1,
                PayrollStatus::Pending => stats.pending += 1,
                PayrollStatus::Unknown => {}
            }
            stats
        })
    }

    pub fn processed_label(&self) -> String {
        format!("{}/{}", self.processed, self.total)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayrollFilters {
    pub query: String,
    pub department: String,
    pub status: String,
}

pub fn filter_entries(entries: &[PayrollEntry], filters: &PayrollFilters) -> Vec<PayrollEntry> {
    entries
        .iter()
        .filter(|e| matches_query(*e, &filters.query))
        .filter(|e| matches_select(&e.department, &filters.department))
        .filter(|e| matches_select(e.status.label(), &filters.status))
        .cloned()
        .collect()
}

pub fn department_options(entries: &[PayrollEntry]) -> Vec<String> {
    distinct_values(entries.iter().map(|e| e.department.as_str()))
}

/// Salaries are paid on the last day of the month.
pub fn next_payroll_date(today: NaiveDate) -> NaiveDate {
    let (year, month) = if today.month() == 12 {
        (today.year() + 1, 1)
    } else {
        (today.year(), today.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first| first.pred_opt())
        .unwrap_or(today)
}

/// Prefixes cells a spreadsheet would evaluate as a formula.
fn guard_formula(value: &str) -> Cow<'_, str> {
    if matches!(value.chars().next(), Some('=' | '+' | '-' | '@')) {
        Cow::Owned(format!("'{}", value))
    } else {
        Cow::Borrowed(value)
    }
}

#[derive(Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "Employee ID")]
    employee_id: Cow<'a, str>,
    #[serde(rename = "Employee Name")]
    employee_name: Cow<'a, str>,
    #[serde(rename = "Department")]
    department: Cow<'a, str>,
    #[serde(rename = "Position")]
    position: Cow<'a, str>,
    #[serde(rename = "Base Salary")]
    base_salary: String,
    #[serde(rename = "Bonus")]
    bonus: String,
    #[serde(rename = "Deductions")]
    deductions: String,
    #[serde(rename = "Net Salary")]
    net_salary: String,
    #[serde(rename = "Status")]
    status: &'static str,
    #[serde(rename = "Payment Date")]
    payment_date: String,
}

pub fn build_payroll_csv(entries: &[PayrollEntry]) -> Result<String, ApiError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for entry in entries {
        writer
            .serialize(CsvRow {
                employee_id: guard_formula(&entry.employee_id),
                employee_name: guard_formula(&entry.employee_name),
                department: guard_formula(&entry.department),
                position: guard_formula(&entry.position),
                base_salary: format!("{:.2}", entry.base_salary),
                bonus: format!("{:.2}", entry.bonus),
                deductions: format!("{:.2}", entry.deductions),
                net_salary: format!("{:.2}", entry.net_salary),
                status: entry.status.label(),
                payment_date: entry
                    .payment_date
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_default(),
            })
            .map_err(|err| ApiError::unknown(format!("Failed to build report: {}", err)))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| ApiError::unknown(format!("Failed to build report: {}", err)))?;
    String::from_utf8(bytes)
        .map_err(|err| ApiError::unknown(format!("Failed to build report: {}", err)))
}

pub fn report_filename(today: NaiveDate) -> String {
    format!("payroll-report-{}.csv", today.format("%Y-%m"))
}
