use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::{Ref, RefCell};

use scroller::{
    Environment, HeightCache, HeightIndex, HeightInputs, ItemFields, KeyCacheKey,
    ListenerLifecycle, OverrenderGuard, Result, Scheduler, ScrollNavigator, ScrollState,
    ScrollTarget, ScrollerConfig, read_scroll_state,
};

/// A framework-neutral controller for one virtual list.
///
/// It owns the item list, the measured height cache and the memoized [`HeightIndex`], and wires
/// the scroller components together. It does not hold any UI objects beyond the element handle
/// of the list root. Adapters drive it by calling:
/// - `mount` / `teardown` at the host's attach/detach points
/// - `measure` / `measure_many` when the resize observer reports item heights
/// - `handle_scroll` / `handle_resize` when a listener fires
/// - `check_rendered_items` before mounting the computed visible window
///
/// Dropping the controller tears it down.
pub struct Scroller<T, K, D: Environment + 'static, S: Scheduler + 'static> {
    config: ScrollerConfig,
    fields: ItemFields<T, K>,
    items: Vec<T>,
    items_version: u64,
    cache: HeightCache<K>,
    heights: Rc<RefCell<HeightIndex>>,
    env: Rc<D>,
    root: D::Element,
    listeners: ListenerLifecycle<D::Element>,
    navigator: ScrollNavigator<D, S>,
    guard: OverrenderGuard<S>,
    is_scroll_bottom: bool,
    mounted: bool,
}

impl<T, K, D, S> Scroller<T, K, D, S>
where
    K: KeyCacheKey,
    D: Environment + 'static,
    S: Scheduler + 'static,
{
    pub fn new(
        config: ScrollerConfig,
        fields: ItemFields<T, K>,
        items: Vec<T>,
        env: Rc<D>,
        scheduler: Rc<S>,
        root: D::Element,
    ) -> Self {
        let heights = Rc::new(RefCell::new(HeightIndex::new()));
        let navigator = ScrollNavigator::new(
            Rc::clone(&env),
            Rc::clone(&scheduler),
            root.clone(),
            Rc::clone(&heights),
        );
        let guard = OverrenderGuard::new(scheduler, config.items_limit);
        let mut scroller = Self {
            config,
            fields,
            items,
            items_version: 0,
            cache: HeightCache::new(),
            heights,
            env,
            root,
            listeners: ListenerLifecycle::new(),
            navigator,
            guard,
            is_scroll_bottom: false,
            mounted: false,
        };
        scroller.refresh_heights();
        scroller
    }

    pub fn config(&self) -> &ScrollerConfig {
        &self.config
    }

    /// Replaces the configuration, rebuilding geometry and re-applying page mode as needed.
    pub fn set_config(&mut self, config: ScrollerConfig) {
        let page_mode_changed = self.config.page_mode != config.page_mode;
        self.guard.set_limit(config.items_limit);
        self.config = config;
        self.refresh_heights();
        if page_mode_changed && self.mounted {
            self.apply_page_mode();
        }
    }

    /// Clones the current configuration, applies `f`, then delegates to `set_config`.
    pub fn update_config(&mut self, f: impl FnOnce(&mut ScrollerConfig)) {
        let mut next = self.config.clone();
        f(&mut next);
        self.set_config(next);
    }

    pub fn set_page_mode(&mut self, page_mode: bool) {
        self.update_config(|c| c.page_mode = page_mode);
    }

    pub fn fields(&self) -> &ItemFields<T, K> {
        &self.fields
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.items_changed();
    }

    /// Edits the item list in place.
    pub fn update_items(&mut self, f: impl FnOnce(&mut Vec<T>)) {
        f(&mut self.items);
        self.items_changed();
    }

    pub fn height_cache(&self) -> &HeightCache<K> {
        &self.cache
    }

    /// Records a measured height reported by the measurement collaborator.
    pub fn measure(&mut self, key: K, height: f64) {
        self.cache.insert(key, height);
        self.refresh_heights();
    }

    pub fn measure_many(&mut self, measurements: impl IntoIterator<Item = (K, f64)>) {
        self.cache.extend(measurements);
        self.refresh_heights();
    }

    pub fn forget_measurement(&mut self, key: &K) {
        self.cache.remove(key);
        self.refresh_heights();
    }

    pub fn clear_measurements(&mut self) {
        self.cache.clear();
        self.refresh_heights();
    }

    /// Current geometry, for renderers picking the visible window.
    pub fn heights(&self) -> Ref<'_, HeightIndex> {
        self.heights.borrow()
    }

    /// Offset at which item `index` begins.
    pub fn accumulator(&self, index: usize) -> f64 {
        self.heights.borrow().accumulator(index)
    }

    pub fn item_height(&self, index: usize) -> Option<f64> {
        self.heights.borrow().height(index)
    }

    pub fn total_height(&self) -> f64 {
        self.heights.borrow().total_height()
    }

    pub fn item_type(&self, index: usize) -> Option<String> {
        self.items.get(index).and_then(|item| self.fields.type_of(item))
    }

    pub fn scroll_state(&self) -> ScrollState {
        read_scroll_state(&*self.env, &self.root, self.config.scroll_mode())
    }

    /// Call this when the page-mode scroll listener fires.
    pub fn handle_scroll(&self) -> ScrollState {
        let state = self.scroll_state();
        atrace!(top = state.top, bottom = state.bottom, "handle_scroll");
        state
    }

    /// Call this when the page-mode resize listener fires.
    pub fn handle_resize(&self) -> ScrollState {
        let state = self.scroll_state();
        atrace!(top = state.top, bottom = state.bottom, "handle_resize");
        state
    }

    /// Records whether the viewport currently sits at the bottom of the list.
    pub fn set_scroll_bottom(&mut self, is_scroll_bottom: bool) {
        self.is_scroll_bottom = is_scroll_bottom;
    }

    pub fn is_scroll_bottom(&self) -> bool {
        self.is_scroll_bottom
    }

    pub fn scroll_to_item(&self, index: usize) {
        self.navigator.scroll_to_item(index);
    }

    /// Scrolls to the bottom. See [`ScrollNavigator::scroll_to_bottom`].
    pub fn scroll_to_bottom(&self, force: bool) -> bool {
        let at_bottom = self.is_scroll_bottom;
        self.navigator.scroll_to_bottom(force, at_bottom)
    }

    pub fn scroll_to_position(&self, position: f64) {
        self.navigator.scroll_to_position(position);
    }

    pub fn is_scrolling_to_bottom(&self) -> bool {
        self.navigator.is_scrolling_to_bottom()
    }

    /// Fails when a render would mount more than `items_limit` items.
    pub fn check_rendered_items(&self, rendered: usize) -> Result<()> {
        self.guard.check(rendered, &self.root)
    }

    fn items_changed(&mut self) {
        self.items_version = self.items_version.wrapping_add(1);
        self.refresh_heights();
    }

    fn refresh_heights(&mut self) -> bool {
        self.heights.borrow_mut().refresh(HeightInputs {
            items: &self.items,
            items_version: self.items_version,
            fields: &self.fields,
            cache: &self.cache,
            item_height: self.config.item_height,
            min_item_height: self.config.min_item_height,
        })
    }
}

impl<T, K, D, S> Scroller<T, K, D, S>
where
    D: Environment + 'static,
    S: Scheduler + 'static,
{
    pub fn root(&self) -> &D::Element {
        &self.root
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn listener_target(&self) -> Option<&ScrollTarget<D::Element>> {
        self.listeners.target()
    }

    /// Attach step: enables navigation writes and applies page mode listeners.
    pub fn mount(&mut self) {
        self.mounted = true;
        self.navigator.revive();
        self.apply_page_mode();
        adebug!(page_mode = self.config.page_mode, "Scroller::mount");
    }

    /// Teardown step: removes listeners unconditionally and stops pending navigation writes.
    pub fn teardown(&mut self) {
        self.listeners.detach(&*self.env);
        self.navigator.shutdown();
        if self.mounted {
            adebug!("Scroller::teardown");
        }
        self.mounted = false;
    }

    fn apply_page_mode(&mut self) {
        let (env, page_mode) = (&*self.env, self.config.page_mode);
        self.listeners.apply_page_mode(env, &self.root, page_mode);
    }
}

impl<T, K, D, S> Drop for Scroller<T, K, D, S>
where
    D: Environment + 'static,
    S: Scheduler + 'static,
{
    fn drop(&mut self) {
        self.teardown();
    }
}

impl<T, K, D, S> core::fmt::Debug for Scroller<T, K, D, S>
where
    D: Environment + 'static,
    S: Scheduler + 'static,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Scroller")
            .field("config", &self.config)
            .field("items", &self.items.len())
            .field("items_version", &self.items_version)
            .field("root", &self.root)
            .field("listener_target", &self.listeners.target())
            .field("is_scroll_bottom", &self.is_scroll_bottom)
            .field("mounted", &self.mounted)
            .finish_non_exhaustive()
    }
}
