//! On-disk view artifact cache for entity rendering.
//!
//! Generates a templating artifact for one version of an entity exactly once
//! and caches it on disk, so the template engine never regenerates the same
//! rendering surface. The cache key is the entity's type, id, optional field
//! and modification timestamp; the timestamp is the filename, so every update
//! to the entity addresses a fresh path and stale versions are simply never
//! visited again.
//!
//! ```no_run
//! use veneer_core::{EntityRef, ObjectRenderer, TemplateParameter, TypeDescriptor};
//! use chrono::Utc;
//! use serde_json::json;
//! use uuid::Uuid;
//!
//! let renderer = ObjectRenderer::new("/var/www/app");
//! let invoice = EntityRef::new("Invoice", 42, Uuid::new_v4())
//!     .with_last_modified(Utc::now());
//! let params = [
//!     TemplateParameter::new("title", TypeDescriptor::Text).with_value(json!("March")),
//! ];
//!
//! let info = renderer.generate(&invoice, &params, "<h1>{{ title }}</h1>").unwrap();
//! // Hand info.relative_path and info.model.to_context() to the template engine.
//! ```

pub mod cache;
pub mod entity;
pub mod error;
pub mod header;
pub mod model;
pub mod renderer;

// Convenience re-exports
pub use cache::{ensure_artifact, CacheLayout, CacheOutcome, DEFAULT_CACHE_PREFIX, TEMPLATE_EXT};
pub use entity::EntityRef;
pub use error::{RenderError, RenderResult};
pub use header::{header_block, wrap_body, AUTOGENERATED_TAG, PADDING_NOTE};
pub use model::{
    build_model, ModelAggregate, ModelSlot, TemplateParameter, TypeDescriptor, MAX_MODEL_ARITY,
    MIN_MODEL_ARITY,
};
pub use renderer::{GeneratedArtifactInfo, ObjectRenderer};
