//! Field sets per entity and conversion between form inputs and JSON values.

use contracts::domain::common::{EntityRecord, RecordPayload};
use contracts::enums::EntityKind;
use serde_json::{Map, Value};

/// Fields offered by an empty create form, also the list columns.
pub fn default_fields(kind: EntityKind) -> &'static [&'static str] {
    match kind {
        EntityKind::Customer => &["name", "email", "phone", "hotel_id", "agency_id", "notes"],
        EntityKind::Hotel => &["name", "address", "phone", "commission_percent"],
        EntityKind::Agency => &["name", "contact", "phone", "commission_percent"],
        EntityKind::Instructor => &["name", "email", "phone", "hourly_rate"],
        EntityKind::Staff => &["name", "role", "email", "phone"],
        EntityKind::CompanyAccount => &["name", "iban", "balance"],
        EntityKind::ThirdParty => &["name", "kind", "phone"],
        EntityKind::Transaction => &["date", "amount", "company_account_id", "description"],
        EntityKind::Order => &["customer_id", "date", "total", "status"],
        EntityKind::Product => &["name", "price", "stock"],
        EntityKind::Service => &["name", "price", "duration_minutes"],
        EntityKind::ServicePackage => &["service_id", "name", "hours", "price"],
        EntityKind::Appointment => &[
            "customer_id",
            "order_id",
            "instructor_id",
            "start_time",
            "duration_minutes",
            "status",
        ],
        EntityKind::User => &["full_name", "email", "is_admin"],
    }
}

/// Editable fields of a form: the record's own fields if editing, the
/// defaults otherwise, with `preset` values (e.g. a parent id) applied.
pub fn form_fields(
    kind: EntityKind,
    record: Option<&EntityRecord>,
    preset: &Map<String, Value>,
) -> Vec<(String, Value)> {
    let mut fields: Vec<(String, Value)> = match record {
        Some(record) => record
            .fields
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect(),
        None => default_fields(kind)
            .iter()
            .map(|key| (key.to_string(), Value::Null))
            .collect(),
    };
    for (key, value) in preset {
        match fields.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value.clone(),
            None => fields.push((key.clone(), value.clone())),
        }
    }
    fields
}

/// Text shown in an input for a value.
pub fn input_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Parse an input back into JSON, keeping the type of the original value
/// where the text allows it.
pub fn parse_input(original: &Value, text: &str) -> Value {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Value::Null;
    }
    match original {
        Value::String(_) => Value::String(text.to_string()),
        Value::Bool(_) => match trimmed {
            "true" | "yes" | "1" => Value::Bool(true),
            "false" | "no" | "0" => Value::Bool(false),
            _ => Value::String(text.to_string()),
        },
        _ => {
            if let Ok(n) = trimmed.parse::<i64>() {
                Value::from(n)
            } else if let Ok(f) = trimmed.parse::<f64>() {
                serde_json::Number::from_f64(f)
                    .map(Value::Number)
                    .unwrap_or_else(|| Value::String(text.to_string()))
            } else if let Ok(b) = trimmed.parse::<bool>() {
                Value::Bool(b)
            } else {
                Value::String(text.to_string())
            }
        }
    }
}

pub fn to_payload(fields: &[(String, Value)]) -> RecordPayload {
    RecordPayload {
        fields: fields.iter().cloned().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_form_uses_defaults_and_preset() {
        let mut preset = Map::new();
        preset.insert("customer_id".to_string(), json!(7));
        let fields = form_fields(EntityKind::Order, None, &preset);
        assert_eq!(fields[0], ("customer_id".to_string(), json!(7)));
        assert_eq!(fields.len(), default_fields(EntityKind::Order).len());
    }

    #[test]
    fn test_edit_form_uses_record_fields() {
        let record = EntityRecord::new(3).with_field("name", "Wing 9m");
        let fields = form_fields(EntityKind::Product, Some(&record), &Map::new());
        assert_eq!(fields, vec![("name".to_string(), json!("Wing 9m"))]);
    }

    #[test]
    fn test_parse_input_keeps_types() {
        assert_eq!(parse_input(&json!("x"), "42"), json!("42"));
        assert_eq!(parse_input(&Value::Null, "42"), json!(42));
        assert_eq!(parse_input(&json!(1.5), "2.25"), json!(2.25));
        assert_eq!(parse_input(&json!(false), "yes"), json!(true));
        assert_eq!(parse_input(&Value::Null, "Tarifa"), json!("Tarifa"));
        assert_eq!(parse_input(&json!("x"), "  "), Value::Null);
    }

    #[test]
    fn test_every_child_links_through_a_default_field() {
        for kind in EntityKind::ALL {
            for child in kind.children() {
                let field = child.parent_field(kind).unwrap();
                assert!(default_fields(*child).contains(&field), "{} {}", child, field);
            }
        }
    }

    #[test]
    fn test_input_text() {
        assert_eq!(input_text(&Value::Null), "");
        assert_eq!(input_text(&json!("a")), "a");
        assert_eq!(input_text(&json!(3)), "3");
    }
}
