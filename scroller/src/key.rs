//! Item identity used to key measured heights.
//!
//! With `std` ids are hashed, without it they are ordered.

#[cfg(feature = "std")]
mod imp {
    pub trait KeyCacheKey: core::hash::Hash + Eq {}
    impl<K: core::hash::Hash + Eq> KeyCacheKey for K {}

    pub(crate) type KeyHeightMap<K> = std::collections::HashMap<K, f64>;
}

#[cfg(not(feature = "std"))]
mod imp {
    pub trait KeyCacheKey: Ord {}
    impl<K: Ord> KeyCacheKey for K {}

    pub(crate) type KeyHeightMap<K> = alloc::collections::BTreeMap<K, f64>;
}

#[doc(hidden)]
pub use imp::KeyCacheKey;
pub(crate) use imp::KeyHeightMap;
