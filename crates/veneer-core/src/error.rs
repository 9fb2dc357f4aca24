//! Error types for artifact generation.

use thiserror::Error;

/// Result type for generation operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that can occur while generating or caching a view artifact.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The entity carries no primary key, so no cache path can be derived.
    #[error("entity '{type_name}' has no id; cannot derive a cache path")]
    MissingIdentity { type_name: String },

    /// The entity carries no modification timestamp, the cache's only
    /// invalidation signal.
    #[error("entity '{type_name}' has no modification timestamp; cannot derive a cache path")]
    MissingTimestamp { type_name: String },

    /// A template parameter was declared with an empty name.
    #[error("template parameter at position {position} has an empty name")]
    EmptyParameterName { position: usize },

    /// The padded parameter list exceeds what the model container supports.
    /// This is a misconfiguration at the call site, never retried.
    #[error("model arity {arity} exceeds the supported maximum of {max}")]
    ModelArity { arity: usize, max: usize },

    /// The global generation lock was poisoned by a panicking writer.
    #[error("generation lock poisoned")]
    LockPoisoned,

    /// Filesystem error creating the cache directory or writing the artifact.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Other errors.
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl RenderError {
    /// Returns true if this error means the caller supplied unusable input.
    pub fn is_input(&self) -> bool {
        matches!(
            self,
            Self::MissingIdentity { .. }
                | Self::MissingTimestamp { .. }
                | Self::EmptyParameterName { .. }
        )
    }

    /// Returns true if this error means no model container could be built.
    pub fn is_construction(&self) -> bool {
        matches!(self, Self::ModelArity { .. })
    }
}
