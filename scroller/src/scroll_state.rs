use crate::{BoundingRect, Environment, ScrollMode, ScrollState};

/// Visible range of a list that is its own scroll container.
pub fn container_scroll_state(scroll_top: f64, client_height: f64) -> ScrollState {
    ScrollState {
        top: scroll_top,
        bottom: scroll_top + client_height,
    }
}

/// Visible range of a list embedded in a scrolling page.
///
/// `rect` is the list root's bounding rect and `inner_height` the window's viewport height. The
/// range starts at how far the root has scrolled past the viewport top (0 while its top edge is
/// still below it) and never extends past the root's own height.
pub fn page_scroll_state(rect: BoundingRect, inner_height: f64) -> ScrollState {
    let mut top = -rect.top;
    let mut height = inner_height;
    if top < 0.0 {
        height += top;
        top = 0.0;
    }
    if top + height > rect.height {
        height = rect.height - top;
    }
    ScrollState {
        top,
        bottom: top + height,
    }
}

/// Reads the current visible range of the list rooted at `root`.
pub fn read_scroll_state<D: Environment>(
    env: &D,
    root: &D::Element,
    mode: ScrollMode,
) -> ScrollState {
    match mode {
        ScrollMode::Container => {
            container_scroll_state(env.scroll_top(root), env.client_height(root))
        }
        ScrollMode::Page => page_scroll_state(env.bounding_rect(root), env.inner_height()),
    }
}
