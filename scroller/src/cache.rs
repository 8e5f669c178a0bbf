use crate::key::{KeyCacheKey, KeyHeightMap};

/// Last-measured item heights, keyed by item identity.
///
/// The scroller only reads this cache. A measurement collaborator (e.g. a resize observer) fills
/// it; entries are never invalidated internally. Every effective change bumps [`Self::version`],
/// which [`crate::HeightIndex`] uses to decide whether to rebuild.
#[derive(Clone, Debug)]
pub struct HeightCache<K> {
    heights: KeyHeightMap<K>,
    version: u64,
}

impl<K: KeyCacheKey> Default for HeightCache<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> HeightCache<K> {
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.heights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    pub fn for_each(&self, mut f: impl FnMut(&K, f64)) {
        for (k, &h) in &self.heights {
            f(k, h);
        }
    }
}

impl<K: KeyCacheKey> HeightCache<K> {
    pub fn new() -> Self {
        Self {
            heights: KeyHeightMap::<K>::new(),
            version: 0,
        }
    }

    pub fn get(&self, key: &K) -> Option<f64> {
        self.heights.get(key).copied()
    }

    /// Records a measured height. Returns the previous value.
    pub fn insert(&mut self, key: K, height: f64) -> Option<f64> {
        let prev = self.heights.insert(key, height);
        if prev.map(f64::to_bits) != Some(height.to_bits()) {
            self.bump();
        }
        prev
    }

    /// Records a batch of measurements with a single version bump.
    pub fn extend(&mut self, measurements: impl IntoIterator<Item = (K, f64)>) {
        let mut changed = false;
        for (key, height) in measurements {
            let prev = self.heights.insert(key, height);
            changed |= prev.map(f64::to_bits) != Some(height.to_bits());
        }
        if changed {
            self.bump();
        }
    }

    pub fn remove(&mut self, key: &K) -> Option<f64> {
        let prev = self.heights.remove(key);
        if prev.is_some() {
            self.bump();
        }
        prev
    }

    pub fn clear(&mut self) {
        if self.heights.is_empty() {
            return;
        }
        self.heights.clear();
        self.bump();
    }

    fn bump(&mut self) {
        self.version = self.version.wrapping_add(1);
    }
}
