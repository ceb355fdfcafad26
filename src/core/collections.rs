//! Collection types used throughout the triangulation core.
//!
//! All internal maps and sets use `FxHasher`-backed containers: keys are
//! small trusted integers (vertex indices, index pairs, triangles), so the
//! faster non-cryptographic hash is the right trade.

use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

/// `HashMap` keyed by trusted internal data.
///
/// ⚠️ Not DoS-resistant; never expose to attacker-controlled keys.
pub type FastHashMap<K, V> = FxHashMap<K, V>;

/// `HashSet` over trusted internal data.
pub type FastHashSet<T> = FxHashSet<T>;

/// Re-export of the `Entry` API for [`FastHashMap`].
pub use std::collections::hash_map::Entry;

/// Small-optimized buffer with inline storage for up to `N` elements.
///
/// Used for bounded hot-path collections: a triangle's edges, a history-DAG
/// node's children, cavity scratch space.
pub type SmallBuffer<T, const N: usize> = SmallVec<[T; N]>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fast_collections_basic_operations() {
        let mut map: FastHashMap<(i32, i32), i32> = FastHashMap::default();
        map.insert((1, 2), 3);
        assert_eq!(map.get(&(1, 2)), Some(&3));

        let mut set: FastHashSet<i32> = FastHashSet::default();
        set.insert(7);
        assert!(set.contains(&7));
    }

    #[test]
    fn small_buffer_spills_to_heap() {
        let mut buffer: SmallBuffer<i32, 4> = SmallBuffer::new();
        for i in 0..4 {
            buffer.push(i);
        }
        assert!(!buffer.spilled());
        buffer.push(4);
        assert!(buffer.spilled());
        assert_eq!(buffer.len(), 5);
    }
}
