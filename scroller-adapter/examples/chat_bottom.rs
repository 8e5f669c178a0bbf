// Example: a chat log that sticks to the bottom while late measurements arrive.
use std::cell::Cell;
use std::rc::Rc;

use scroller::{
    BoundingRect, Environment, ItemFields, ListenerKind, ListenerOptions, ManualScheduler,
    NodeRole, OverflowStyle, ScrollTarget, ScrollerConfig,
};
use scroller_adapter::Scroller;

/// A single scroll box whose maximum scroll offset follows its content height.
struct ScrollBox {
    content_height: Cell<f64>,
    viewport_height: f64,
    scroll_top: Cell<f64>,
}

impl Environment for ScrollBox {
    type Element = ();

    fn parent_element(&self, _element: &()) -> Option<()> {
        None
    }

    fn node_role(&self, _element: &()) -> NodeRole {
        NodeRole::Element
    }

    fn overflow(&self, _element: &()) -> OverflowStyle {
        OverflowStyle::default()
    }

    fn scrolling_element(&self) -> Option<()> {
        None
    }

    fn scroll_top(&self, _element: &()) -> f64 {
        self.scroll_top.get()
    }

    fn set_scroll_top(&self, _element: &(), scroll_top: f64) {
        let max = (self.content_height.get() - self.viewport_height).max(0.0);
        self.scroll_top.set(scroll_top.clamp(0.0, max));
        println!("  scroll_top <- {} (clamped to {})", scroll_top, self.scroll_top.get());
    }

    fn client_height(&self, _element: &()) -> f64 {
        self.viewport_height
    }

    fn bounding_rect(&self, _element: &()) -> BoundingRect {
        BoundingRect {
            top: 0.0,
            height: self.viewport_height,
        }
    }

    fn is_connected(&self, _element: &()) -> bool {
        true
    }

    fn inner_height(&self) -> f64 {
        self.viewport_height
    }

    fn supports_passive_listeners(&self) -> bool {
        true
    }

    fn add_listener(
        &self,
        _target: &ScrollTarget<()>,
        _kind: ListenerKind,
        _options: ListenerOptions,
    ) {
    }

    fn remove_listener(&self, _target: &ScrollTarget<()>, _kind: ListenerKind) {}
}

fn main() {
    let env = Rc::new(ScrollBox {
        content_height: Cell::new(0.0),
        viewport_height: 400.0,
        scroll_top: Cell::new(0.0),
    });
    let sched = Rc::new(ManualScheduler::new());

    let fields = ItemFields::new(|id: &u32| *id);
    let mut chat = Scroller::new(
        ScrollerConfig::new().with_min_item_height(Some(30.0)),
        fields,
        (0..50).collect(),
        Rc::clone(&env),
        Rc::clone(&sched),
        (),
    );
    chat.mount();
    env.content_height.set(chat.total_height());

    println!("scroll to bottom");
    chat.scroll_to_bottom(true);

    // Images in the last messages finish loading after the first write.
    chat.measure_many([(48, 220.0), (49, 180.0)]);
    env.content_height.set(chat.total_height());

    sched.run_until_idle();
    println!(
        "settled: scroll_state={:?} total_height={}",
        chat.scroll_state(),
        chat.total_height()
    );

    println!("jump to message 10");
    chat.scroll_to_item(10);
    sched.run_until_idle();
    println!("settled: scroll_state={:?}", chat.scroll_state());

    chat.teardown();
}
