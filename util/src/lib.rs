//! Unopinionated standalone utilities.

mod rect;
pub use rect::{Rect, RectIter};

pub mod text;
pub use text::StrExt;

type DefaultHashBuilder = std::hash::BuildHasherDefault<rustc_hash::FxHasher>;

/// Insertion order preserving map with an efficient hash function.
pub type IndexMap<K, V> = indexmap::IndexMap<K, V, DefaultHashBuilder>;
