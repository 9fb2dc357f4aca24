//! Path derivation and write-once persistence for view artifacts.

pub mod key;
pub mod writer;

pub use key::{CacheLayout, DEFAULT_CACHE_PREFIX, TEMPLATE_EXT};
pub use writer::{ensure_artifact, CacheOutcome};
