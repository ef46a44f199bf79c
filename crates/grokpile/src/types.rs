//! # Common Types

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type GrokHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> GrokHashMap<K, V> {
            GrokHashMap::new()
        }

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> GrokHashMap<K, V> {
            GrokHashMap::with_capacity(capacity)
        }

        /// Type Alias for hash sets in this crate.
        pub type GrokHashSet<V> = ahash::AHashSet<V>;

    } else if #[cfg(feature = "foldhash")] {
        /// Type Alias for hash maps in this crate.
        pub type GrokHashMap<K, V> = foldhash::HashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> GrokHashMap<K, V> {
            foldhash::HashMapExt::new()
        }

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> GrokHashMap<K, V> {
            foldhash::HashMapExt::with_capacity(capacity)
        }

        /// Type Alias for hash sets in this crate.
        pub type GrokHashSet<V> = foldhash::HashSet<V>;

    } else if #[cfg(feature = "std")] {
        /// Type Alias for hash maps in this crate.
        pub type GrokHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> GrokHashMap<K, V> {
            GrokHashMap::new()
        }

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> GrokHashMap<K, V> {
            GrokHashMap::with_capacity(capacity)
        }

        /// Type Alias for hash sets in this crate.
        pub type GrokHashSet<V> = std::collections::HashSet<V>;

    } else {
        /// This error exists to give users more direct feedback
        /// on the feature configuration over the other compilation
        /// errors they would encounter from lacking the types.
        compile_error!("grokpile requires the \"std\" feature");
    }
}

/// Compile-time check that a value is `Send`.
pub fn check_is_send<S: Send>(_: &S) {}

/// Compile-time check that a value is `Sync`.
pub fn check_is_sync<S: Sync>(_: &S) {}
