use crate::target::resolve_scroll_target;
use crate::{Environment, ListenerKind, ListenerOptions, ScrollTarget};

/// Owns the scroll/resize listener registration of one list.
///
/// At most one target is subscribed at a time. Only page mode needs listeners: in container mode
/// the list's own scroll events reach the host directly.
#[derive(Clone, Debug)]
pub struct ListenerLifecycle<E> {
    target: Option<ScrollTarget<E>>,
}

impl<E> Default for ListenerLifecycle<E> {
    fn default() -> Self {
        Self { target: None }
    }
}

impl<E: Clone + PartialEq + core::fmt::Debug> ListenerLifecycle<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently subscribed target.
    pub fn target(&self) -> Option<&ScrollTarget<E>> {
        self.target.as_ref()
    }

    pub fn is_attached(&self) -> bool {
        self.target.is_some()
    }

    /// Attaches listeners when `page_mode` is on, detaches them otherwise.
    pub fn apply_page_mode<D>(&mut self, env: &D, root: &E, page_mode: bool)
    where
        D: Environment<Element = E>,
    {
        if page_mode {
            self.attach(env, root);
        } else {
            self.detach(env);
        }
    }

    /// Resolves the scroll target of `root` and subscribes to it, dropping any previous target.
    ///
    /// The scroll listener is passive when the environment supports it.
    pub fn attach<D>(&mut self, env: &D, root: &E) -> &ScrollTarget<E>
    where
        D: Environment<Element = E>,
    {
        self.detach(env);

        let target = resolve_scroll_target(env, root);
        let scroll_options = ListenerOptions {
            passive: env.supports_passive_listeners(),
        };
        env.add_listener(&target, ListenerKind::Scroll, scroll_options);
        env.add_listener(&target, ListenerKind::Resize, ListenerOptions::default());
        sdebug!(scroll_target = ?target, passive = scroll_options.passive, "listeners attached");

        self.target.insert(target)
    }

    /// Unsubscribes from the current target. Returns `false` (and does nothing) when no target is
    /// held.
    pub fn detach<D>(&mut self, env: &D) -> bool
    where
        D: Environment<Element = E>,
    {
        let Some(target) = self.target.take() else {
            return false;
        };
        env.remove_listener(&target, ListenerKind::Scroll);
        env.remove_listener(&target, ListenerKind::Resize);
        sdebug!(scroll_target = ?target, "listeners detached");
        true
    }
}
