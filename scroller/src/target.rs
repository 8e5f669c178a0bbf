use crate::{Environment, NodeRole, ScrollTarget};

/// Nearest scroll container above `root`, or the document's scrolling element when none is.
///
/// `root` itself is never considered, only its ancestors.
pub fn scroll_parent<D: Environment>(env: &D, root: &D::Element) -> Option<D::Element> {
    let mut current = env.parent_element(root);
    while let Some(element) = current {
        if env.overflow(&element).is_scrollable() {
            return Some(element);
        }
        current = env.parent_element(&element);
    }
    env.scrolling_element()
}

/// Resolves where page-level scroll and resize listeners belong for `root`.
///
/// Some engines report the document element or body as the scroll parent while the window is
/// what actually scrolls, so both map to [`ScrollTarget::Window`].
///
/// The result depends on the current tree and must not be cached across attaches.
pub fn resolve_scroll_target<D: Environment>(
    env: &D,
    root: &D::Element,
) -> ScrollTarget<D::Element> {
    match scroll_parent(env, root) {
        Some(element) if env.node_role(&element) == NodeRole::Element => {
            ScrollTarget::Element(element)
        }
        _ => ScrollTarget::Window,
    }
}
