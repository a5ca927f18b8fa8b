//! Display formatting for record values.

use chrono::{DateTime, Local, NaiveDate, Utc};
use serde_json::Value;

/// Render a JSON field value for a table cell or detail row.
///
/// ISO timestamps are shown in local time as `DD.MM.YYYY HH:MM`, ISO dates as
/// `DD.MM.YYYY`, booleans as yes/no, null as `-`.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::Bool(true) => "yes".to_string(),
        Value::Bool(false) => "no".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => format_text(s),
        Value::Array(items) => items.iter().map(format_value).collect::<Vec<_>>().join(", "),
        Value::Object(_) => value.to_string(),
    }
}

fn format_text(s: &str) -> String {
    if let Some(local) = parse_timestamp(s) {
        return local.format("%d.%m.%Y %H:%M").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date.format("%d.%m.%Y").to_string();
    }
    s.to_string()
}

/// Parse an RFC 3339 timestamp into local time.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Local>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc).with_timezone(&Local))
}

/// Turn a field key like `customer_id` into a label like `Customer id`.
pub fn field_label(key: &str) -> String {
    let text = key.replace('_', " ");
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Format an amount with two decimals and a thin thousands separator.
pub fn format_money(amount: f64) -> String {
    let negative = amount < 0.0;
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::new();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    format!("{}{}.{}", if negative { "-" } else { "" }, grouped, frac_part)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_scalars() {
        assert_eq!(format_value(&json!(null)), "-");
        assert_eq!(format_value(&json!(true)), "yes");
        assert_eq!(format_value(&json!(42)), "42");
        assert_eq!(format_value(&json!("Tarifa")), "Tarifa");
        assert_eq!(format_value(&json!(["a", 1])), "a, 1");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_value(&json!("2024-03-15")), "15.03.2024");
    }

    #[test]
    fn test_format_timestamp_uses_local_time() {
        let expected = parse_timestamp("2024-03-15T14:02:26Z")
            .unwrap()
            .format("%d.%m.%Y %H:%M")
            .to_string();
        assert_eq!(format_value(&json!("2024-03-15T14:02:26Z")), expected);
    }

    #[test]
    fn test_field_label() {
        assert_eq!(field_label("customer_id"), "Customer id");
        assert_eq!(field_label(""), "");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234567.5), "1 234 567.50");
        assert_eq!(format_money(-12.0), "-12.00");
        assert_eq!(format_money(0.0), "0.00");
    }
}
