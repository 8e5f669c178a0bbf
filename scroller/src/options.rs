use alloc::string::String;
use alloc::sync::Arc;

use crate::ScrollMode;

/// Default extra pixels a renderer keeps mounted above and below the viewport.
pub const DEFAULT_BUFFER: f64 = 200.0;

/// Default number of items a single render may mount before the scroller is considered broken.
pub const DEFAULT_ITEMS_LIMIT: usize = 1000;

/// Extracts an item's stable identity.
pub type KeySelector<T, K> = Arc<dyn Fn(&T) -> K + Send + Sync>;

/// Extracts an item's explicit height, if it carries one.
pub type HeightSelector<T> = Arc<dyn Fn(&T) -> Option<f64> + Send + Sync>;

/// Extracts an item's type discriminator, if it carries one.
pub type TypeSelector<T> = Arc<dyn Fn(&T) -> Option<String> + Send + Sync>;

/// Plain-data configuration for a scroller.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`; missing fields take
/// their default values.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScrollerConfig {
    /// Uniform item height. When set, no offset table is built and offsets are `index * height`.
    pub item_height: Option<f64>,
    /// Height used for items with neither an explicit nor a measured height.
    pub min_item_height: Option<f64>,
    /// Extra pixels the renderer keeps mounted around the viewport. Not read by the core.
    pub buffer: f64,
    /// Track the page scroll instead of the list's own scroll.
    pub page_mode: bool,
    /// Number of items the renderer mounts before the first measurement. Not read by the core.
    pub prerender: usize,
    /// Render count past which [`crate::OverrenderGuard`] fails.
    pub items_limit: usize,
}

impl Default for ScrollerConfig {
    fn default() -> Self {
        Self {
            item_height: None,
            min_item_height: None,
            buffer: DEFAULT_BUFFER,
            page_mode: false,
            prerender: 0,
            items_limit: DEFAULT_ITEMS_LIMIT,
        }
    }
}

impl ScrollerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item_height(mut self, item_height: Option<f64>) -> Self {
        self.item_height = item_height;
        self
    }

    pub fn with_min_item_height(mut self, min_item_height: Option<f64>) -> Self {
        self.min_item_height = min_item_height;
        self
    }

    pub fn with_buffer(mut self, buffer: f64) -> Self {
        self.buffer = buffer;
        self
    }

    pub fn with_page_mode(mut self, page_mode: bool) -> Self {
        self.page_mode = page_mode;
        self
    }

    pub fn with_prerender(mut self, prerender: usize) -> Self {
        self.prerender = prerender;
        self
    }

    pub fn with_items_limit(mut self, items_limit: usize) -> Self {
        self.items_limit = items_limit;
        self
    }

    pub fn scroll_mode(&self) -> ScrollMode {
        ScrollMode::from_page_mode(self.page_mode)
    }

    /// The last link of the height chain. An unset minimum counts as zero.
    pub fn min_height_fallback(&self) -> f64 {
        self.min_item_height.unwrap_or(0.0)
    }
}

/// Selects the id, height and type of caller-owned items.
///
/// This type is designed to be cheap to clone: selectors are stored in `Arc`s.
pub struct ItemFields<T, K> {
    pub key: KeySelector<T, K>,
    pub height: Option<HeightSelector<T>>,
    pub item_type: Option<TypeSelector<T>>,
}

impl<T, K> Clone for ItemFields<T, K> {
    fn clone(&self) -> Self {
        Self {
            key: Arc::clone(&self.key),
            height: self.height.clone(),
            item_type: self.item_type.clone(),
        }
    }
}

impl<T, K> ItemFields<T, K> {
    /// Items identified by `key`, with no explicit heights and no type.
    pub fn new(key: impl Fn(&T) -> K + Send + Sync + 'static) -> Self {
        Self {
            key: Arc::new(key),
            height: None,
            item_type: None,
        }
    }

    pub fn with_height(
        mut self,
        height: impl Fn(&T) -> Option<f64> + Send + Sync + 'static,
    ) -> Self {
        self.height = Some(Arc::new(height));
        self
    }

    pub fn with_item_type(
        mut self,
        item_type: impl Fn(&T) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        self.item_type = Some(Arc::new(item_type));
        self
    }

    pub fn key_of(&self, item: &T) -> K {
        (self.key)(item)
    }

    pub fn height_of(&self, item: &T) -> Option<f64> {
        self.height.as_ref().and_then(|f| f(item))
    }

    pub fn type_of(&self, item: &T) -> Option<String> {
        self.item_type.as_ref().and_then(|f| f(item))
    }
}

#[cfg(feature = "json")]
impl ItemFields<serde_json::Value, String> {
    /// Selects fields of JSON object items by name, e.g. `named("id", "height", "type")`.
    ///
    /// String ids are used as-is; any other id value is keyed by its JSON text, so a missing id
    /// keys as `"null"`.
    pub fn named(key_field: &str, height_field: &str, type_field: &str) -> Self {
        use alloc::string::ToString;
        use serde_json::Value;

        let key_field = String::from(key_field);
        let height_field = String::from(height_field);
        let type_field = String::from(type_field);
        Self::new(move |item: &Value| match item.get(key_field.as_str()) {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => String::from("null"),
        })
        .with_height(move |item: &Value| item.get(height_field.as_str()).and_then(Value::as_f64))
        .with_item_type(move |item: &Value| {
            item.get(type_field.as_str())
                .and_then(Value::as_str)
                .map(String::from)
        })
    }
}

impl<T, K> core::fmt::Debug for ItemFields<T, K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ItemFields")
            .field("height", &self.height.is_some())
            .field("item_type", &self.item_type.is_some())
            .finish_non_exhaustive()
    }
}
