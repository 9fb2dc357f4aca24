//! Read-only view of the entity a template is generated for.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Reference to the entity an artifact is derived from.
///
/// The caller's persistence layer owns the entity; this component only reads
/// it. `id` is the mutable primary key used in cache paths, `guid` the
/// permanent identifier embedded in the artifact header for provenance.
/// `last_modified` must strictly increase on every meaningful update; it is
/// the cache's only invalidation signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRef {
    /// Type name of the entity (e.g. "Invoice"); first variable path segment.
    pub type_name: String,
    /// Primary key. `None` for unsaved entities, which cannot be cached.
    pub id: Option<i64>,
    /// Permanent unique identifier, stable across re-keying.
    pub guid: Uuid,
    /// Timestamp of the last meaningful update.
    pub last_modified: Option<DateTime<Utc>>,
}

impl EntityRef {
    pub fn new(type_name: impl Into<String>, id: i64, guid: Uuid) -> Self {
        Self {
            type_name: type_name.into(),
            id: Some(id),
            guid,
            last_modified: None,
        }
    }

    pub fn with_last_modified(mut self, at: DateTime<Utc>) -> Self {
        self.last_modified = Some(at);
        self
    }
}
