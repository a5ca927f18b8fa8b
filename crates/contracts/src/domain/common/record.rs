use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Идентификатор записи в базе школы
pub type RecordId = i64;

/// Запись любой сущности: `id` плюс произвольные бизнес-поля
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRecord {
    pub id: RecordId,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl EntityRecord {
    pub fn new(id: RecordId) -> Self {
        Self {
            id,
            fields: Map::new(),
        }
    }

    pub fn with_field(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(name.to_string(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Numeric foreign key stored in `name`, if present.
    pub fn reference(&self, name: &str) -> Option<RecordId> {
        match self.fields.get(name)? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// Human readable caption: the first non-empty naming field, or `#id`.
    pub fn caption(&self) -> String {
        const NAME_FIELDS: [&str; 5] = ["name", "full_name", "title", "description", "email"];
        NAME_FIELDS
            .iter()
            .filter_map(|field| self.fields.get(*field).and_then(Value::as_str))
            .find(|s| !s.trim().is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("#{}", self.id))
    }
}

/// DTO для создания/обновления записи (без `id`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordPayload {
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl From<&EntityRecord> for RecordPayload {
    fn from(record: &EntityRecord) -> Self {
        Self {
            fields: record.fields.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_flattens_fields() {
        let record: EntityRecord =
            serde_json::from_str(r#"{"id": 7, "name": "Ana", "customer_id": "3"}"#).unwrap();
        assert_eq!(record.id, 7);
        assert_eq!(record.get("name"), Some(&Value::from("Ana")));
        assert_eq!(record.reference("customer_id"), Some(3));

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["name"], "Ana");
    }

    #[test]
    fn test_caption_falls_back_to_id() {
        assert_eq!(EntityRecord::new(12).caption(), "#12");
        let named = EntityRecord::new(12)
            .with_field("name", "")
            .with_field("email", "ana@example.com");
        assert_eq!(named.caption(), "ana@example.com");
    }
}
