//! Entity-to-artifact generation.
//!
//! [`ObjectRenderer`] is the public entry point: given an entity reference, a
//! parameter list and raw template body, it derives the cache path from the
//! entity's identity and modification timestamp, writes the artifact once if
//! absent, and hands back the paths plus the built model for the template
//! engine to consume.

use std::path::PathBuf;

use chrono::{DateTime, Utc};

use crate::cache::key::CacheLayout;
use crate::cache::writer::{ensure_artifact, sweep_stale_entity};
use crate::entity::EntityRef;
use crate::error::{RenderError, RenderResult};
use crate::header::header_block;
use crate::model::{build_model, ModelAggregate, TemplateParameter};

/// Result of a generation call: where the artifact lives and the model to
/// render it with. Constructed internally, never mutated after return.
#[derive(Debug, Clone)]
pub struct GeneratedArtifactInfo {
    /// Content-root-joined path to the artifact.
    pub absolute_path: PathBuf,
    /// Path relative to the content root.
    pub relative_path: PathBuf,
    /// The model built for this call.
    pub model: ModelAggregate,
}

/// Generates and caches view artifacts for entities.
pub struct ObjectRenderer {
    content_root: PathBuf,
    layout: CacheLayout,
}

impl ObjectRenderer {
    /// Create a renderer rooted at the host's content directory.
    pub fn new(content_root: impl Into<PathBuf>) -> Self {
        Self {
            content_root: content_root.into(),
            layout: CacheLayout::default(),
        }
    }

    /// Override the cache layout (prefix under the content root).
    pub fn with_layout(mut self, layout: CacheLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Generate the artifact for `entity`, caching on first use.
    ///
    /// Fails with an input error if the entity lacks an id or a modification
    /// timestamp. On success the artifact exists on disk and the returned
    /// paths are stable for this entity version.
    pub fn generate(
        &self,
        entity: &EntityRef,
        params: &[TemplateParameter],
        body: &str,
    ) -> RenderResult<GeneratedArtifactInfo> {
        self.generate_for_field(entity, params, body, "")
    }

    /// Like [`generate`](Self::generate), scoped to one field of the entity.
    /// The field name becomes an extra path segment; an empty name collapses
    /// to the field-less form.
    pub fn generate_for_field(
        &self,
        entity: &EntityRef,
        params: &[TemplateParameter],
        body: &str,
        field_name: &str,
    ) -> RenderResult<GeneratedArtifactInfo> {
        let (id, last_modified) = identity_of(entity)?;
        let model = build_model(params)?;

        let relative_path =
            self.layout
                .relative_path(&entity.type_name, id, field_name, last_modified);
        let absolute_path = self.content_root.join(&relative_path);

        let header = header_block(model.slots(), &entity.guid);
        ensure_artifact(&absolute_path, &header, body)?;

        Ok(GeneratedArtifactInfo {
            absolute_path,
            relative_path,
            model,
        })
    }

    /// Maintenance: remove cached artifacts for versions of `entity` older
    /// than its current modification timestamp. Returns the number of files
    /// removed. Never called by the generate path.
    pub fn sweep_stale(&self, entity: &EntityRef) -> RenderResult<usize> {
        let (id, last_modified) = identity_of(entity)?;
        let dir = self
            .content_root
            .join(self.layout.entity_dir(&entity.type_name, id));
        sweep_stale_entity(&dir, last_modified.timestamp_millis())
    }
}

fn identity_of(entity: &EntityRef) -> RenderResult<(i64, DateTime<Utc>)> {
    let id = entity.id.ok_or_else(|| RenderError::MissingIdentity {
        type_name: entity.type_name.clone(),
    })?;
    let last_modified = entity
        .last_modified
        .ok_or_else(|| RenderError::MissingTimestamp {
            type_name: entity.type_name.clone(),
        })?;
    Ok((id, last_modified))
}
