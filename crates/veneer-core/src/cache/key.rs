//! Cache key and path derivation.
//!
//! # Path Schema
//!
//! ```text
//! {prefix}/{TypeName}/{Id}/{FieldName?}/{epochMillis}.tera
//! ```
//!
//! The modification timestamp is the filename, so any update to the entity
//! yields a new path. That is the cache's entire invalidation story: stale
//! artifacts at old paths are simply never addressed again.

use std::path::PathBuf;

use chrono::{DateTime, Utc};

/// Default prefix under the content root.
pub const DEFAULT_CACHE_PREFIX: &str = "Client/Views/Cache";

/// Extension of generated artifacts.
pub const TEMPLATE_EXT: &str = "tera";

/// Derives cache paths for entity view artifacts.
#[derive(Debug, Clone)]
pub struct CacheLayout {
    prefix: Vec<String>,
}

impl CacheLayout {
    /// Create a layout with the given `/`-separated prefix. Leading/trailing
    /// slashes are ignored; an empty prefix puts entity directories directly
    /// under the content root.
    pub fn new(prefix: impl AsRef<str>) -> Self {
        let prefix = prefix
            .as_ref()
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        Self { prefix }
    }

    /// Relative path of the artifact for one entity version.
    ///
    /// Deterministic in all four inputs. An empty `field_name` collapses to
    /// no segment.
    pub fn relative_path(
        &self,
        type_name: &str,
        id: i64,
        field_name: &str,
        last_modified: DateTime<Utc>,
    ) -> PathBuf {
        let mut path = self.entity_dir(type_name, id);
        if !field_name.is_empty() {
            path.push(Self::sanitize_segment(field_name));
        }
        path.push(format!(
            "{}.{}",
            last_modified.timestamp_millis(),
            TEMPLATE_EXT
        ));
        path
    }

    /// Relative directory holding every cached version of one entity.
    pub fn entity_dir(&self, type_name: &str, id: i64) -> PathBuf {
        let mut path = PathBuf::new();
        for segment in &self.prefix {
            path.push(segment);
        }
        path.push(Self::sanitize_segment(type_name));
        path.push(id.to_string());
        path
    }

    /// Sanitize a path segment. Keeps alphanumerics, dash, underscore and
    /// dot; everything else becomes `_` so a hostile type or field name
    /// cannot escape the cache root.
    fn sanitize_segment(segment: &str) -> String {
        let cleaned: String = segment
            .chars()
            .map(|c| {
                if c.is_alphanumeric() || c == '-' || c == '_' || c == '.' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        // "", "." and ".." are not usable directory names.
        if cleaned.chars().all(|c| c == '.') {
            return "_".repeat(cleaned.len().max(1));
        }
        cleaned
    }
}

impl Default for CacheLayout {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_PREFIX)
    }
}
