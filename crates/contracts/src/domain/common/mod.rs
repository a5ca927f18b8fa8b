//! Common types for all entity records

pub mod record;

// Re-exports
pub use record::{EntityRecord, RecordId, RecordPayload};
