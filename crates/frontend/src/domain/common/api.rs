//! CRUD calls for entity records: `/api/{collection}[/{id}]`.

use contracts::domain::common::{EntityRecord, RecordId, RecordPayload};
use contracts::enums::EntityKind;
use gloo_net::http::{Request, Response};

use crate::shared::api_utils::{api_base, status_error};
use crate::system::auth::storage;

fn collection_url(kind: EntityKind) -> String {
    format!("{}/api/{}", api_base(), kind.collection())
}

fn record_url(kind: EntityKind, id: RecordId) -> String {
    format!("{}/{}", collection_url(kind), id)
}

async fn read_json<T>(response: Response, action: &str) -> Result<T, String>
where
    T: for<'de> serde::Deserialize<'de>,
{
    if !response.ok() {
        return Err(status_error(action, response.status()));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn fetch_list(kind: EntityKind) -> Result<Vec<EntityRecord>, String> {
    let response = Request::get(&collection_url(kind))
        .header("Authorization", &storage::bearer_header())
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_json(response, "Load").await
}

/// Records of `kind` that reference `parent` (orders of a customer, ...).
pub async fn fetch_related(
    kind: EntityKind,
    parent: EntityKind,
    parent_id: RecordId,
) -> Result<Vec<EntityRecord>, String> {
    let Some(field) = kind.parent_field(parent) else {
        return Ok(Vec::new());
    };
    let url = format!("{}?{}={}", collection_url(kind), field, parent_id);
    let response = Request::get(&url)
        .header("Authorization", &storage::bearer_header())
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_json(response, "Load").await
}

pub async fn fetch_by_id(kind: EntityKind, id: RecordId) -> Result<EntityRecord, String> {
    let response = Request::get(&record_url(kind, id))
        .header("Authorization", &storage::bearer_header())
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_json(response, "Load").await
}

/// Create (no id) or update (id) a record; returns the stored record.
pub async fn save(
    kind: EntityKind,
    id: Option<RecordId>,
    payload: &RecordPayload,
) -> Result<EntityRecord, String> {
    let builder = match id {
        Some(id) => Request::put(&record_url(kind, id)),
        None => Request::post(&collection_url(kind)),
    };
    let response = builder
        .header("Authorization", &storage::bearer_header())
        .json(payload)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_json(response, "Save").await
}

pub async fn delete(kind: EntityKind, id: RecordId) -> Result<(), String> {
    let response = Request::delete(&record_url(kind, id))
        .header("Authorization", &storage::bearer_header())
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    if !response.ok() {
        return Err(status_error("Delete", response.status()));
    }
    Ok(())
}
