//! A hash-map that behaves deterministically when the
//! `enhanced-determinism` feature is enabled.

/// Deterministic, insertion-ordered hashmap using [`indexmap::IndexMap`].
#[cfg(feature = "enhanced-determinism")]
pub use indexmap::{map::Entry, IndexMap as HashMap};

#[cfg(not(feature = "enhanced-determinism"))]
pub use hashbrown::hash_map::{Entry, HashMap};
