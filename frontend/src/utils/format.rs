use chrono::{DateTime, NaiveDate, Utc};

use super::time::to_app_tz;

pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (idx, ch) in whole.chars().enumerate() {
        if idx > 0 && (whole.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!(
        "{}${}.{:02}",
        if negative { "-" } else { "" },
        grouped,
        cents % 100
    )
}

pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%b %d, %Y").to_string())
        .unwrap_or_else(|| "-".into())
}

pub fn format_time(instant: Option<DateTime<Utc>>) -> String {
    instant
        .map(|t| to_app_tz(t).format("%I:%M %p").to_string())
        .unwrap_or_else(|| "--:--".into())
}

pub fn format_timestamp_date(instant: Option<DateTime<Utc>>) -> String {
    format_date(instant.map(|t| to_app_tz(t).date_naive()))
}

pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_thousands_and_keeps_cents() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(1_234_567.891), "$1,234,567.89");
        assert_eq!(format_currency(-45.0), "-$45.00");
    }

    #[test]
    fn dates_render_placeholder_when_missing() {
        assert_eq!(format_date(None), "-");
        assert_eq!(
            format_date(NaiveDate::from_ymd_opt(2025, 3, 7)),
            "Mar 07, 2025"
        );
        assert_eq!(format_time(None), "--:--");
    }

    #[test]
    fn initials_take_first_two_words() {
        assert_eq!(initials("asha rao kumar"), "AR");
        assert_eq!(initials("Meera"), "M");
        assert_eq!(initials(""), "");
    }
}
