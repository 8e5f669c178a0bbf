/// The visible pixel range of the list, relative to the list's own content.
///
/// `top` is the first visible pixel and `bottom` is one past the last one. Renderers combine this
/// with [`crate::HeightIndex`] offsets to pick the items to mount.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    pub top: f64,
    pub bottom: f64,
}

impl ScrollState {
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// The subset of an element's bounding client rect the scroller needs.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingRect {
    /// Distance from the viewport's top edge to the element's top edge. Negative once scrolled
    /// past.
    pub top: f64,
    pub height: f64,
}

/// Where scroll events come from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollMode {
    /// The list's root element is the scroll container.
    #[default]
    Container,
    /// The surrounding page scrolls and the list tracks its own bounding rect.
    Page,
}

impl ScrollMode {
    pub fn from_page_mode(page_mode: bool) -> Self {
        if page_mode { Self::Page } else { Self::Container }
    }

    pub fn is_page(self) -> bool {
        self == Self::Page
    }
}

/// Something that can receive scroll/resize listeners.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollTarget<E> {
    Window,
    Element(E),
}

impl<E> ScrollTarget<E> {
    pub fn is_window(&self) -> bool {
        matches!(self, Self::Window)
    }

    pub fn element(&self) -> Option<&E> {
        match self {
            Self::Window => None,
            Self::Element(el) => Some(el),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ListenerKind {
    Scroll,
    Resize,
}

/// Options passed along with a listener registration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListenerOptions {
    /// The listener promises never to cancel the event.
    pub passive: bool,
}

/// What kind of node an element is inside its document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NodeRole {
    #[default]
    Element,
    Body,
    DocumentElement,
}

/// A computed `overflow` value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Overflow {
    #[default]
    Visible,
    Hidden,
    Clip,
    Auto,
    Scroll,
}

impl Overflow {
    pub fn scrolls(self) -> bool {
        matches!(self, Self::Auto | Self::Scroll)
    }
}

/// Computed `overflow`, `overflow-x` and `overflow-y` of an element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OverflowStyle {
    pub overflow: Overflow,
    pub overflow_x: Overflow,
    pub overflow_y: Overflow,
}

impl OverflowStyle {
    pub fn uniform(overflow: Overflow) -> Self {
        Self {
            overflow,
            overflow_x: overflow,
            overflow_y: overflow,
        }
    }

    /// An element is a scroll container when any of its overflow axes is `auto` or `scroll`.
    pub fn is_scrollable(&self) -> bool {
        self.overflow.scrolls() || self.overflow_x.scrolls() || self.overflow_y.scrolls()
    }
}
