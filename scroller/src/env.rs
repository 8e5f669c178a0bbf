use crate::{BoundingRect, ListenerKind, ListenerOptions, NodeRole, OverflowStyle, ScrollTarget};

/// The host surface the scroller reads geometry from and writes scroll offsets to.
///
/// A browser adapter implements this over the DOM (elements are cheap handles, and setters take
/// `&self` like DOM properties do). Tests implement it over an in-memory tree.
pub trait Environment {
    /// A handle to an element. Cloning must not clone the underlying node.
    type Element: Clone + PartialEq + core::fmt::Debug;

    /// The parent element, or `None` at the document root.
    fn parent_element(&self, element: &Self::Element) -> Option<Self::Element>;

    fn node_role(&self, element: &Self::Element) -> NodeRole;

    /// Computed overflow styles of `element`.
    fn overflow(&self, element: &Self::Element) -> OverflowStyle;

    /// The document's scrolling element, falling back to the document element.
    fn scrolling_element(&self) -> Option<Self::Element>;

    fn scroll_top(&self, element: &Self::Element) -> f64;

    fn set_scroll_top(&self, element: &Self::Element, scroll_top: f64);

    fn client_height(&self, element: &Self::Element) -> f64;

    fn bounding_rect(&self, element: &Self::Element) -> BoundingRect;

    /// Whether `element` is still attached to the document.
    fn is_connected(&self, element: &Self::Element) -> bool;

    /// Height of the window's layout viewport.
    fn inner_height(&self) -> f64;

    /// Whether listener registration understands the `passive` option.
    fn supports_passive_listeners(&self) -> bool;

    fn add_listener(
        &self,
        target: &ScrollTarget<Self::Element>,
        kind: ListenerKind,
        options: ListenerOptions,
    );

    fn remove_listener(&self, target: &ScrollTarget<Self::Element>, kind: ListenerKind);
}
