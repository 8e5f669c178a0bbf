use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::{Cell, RefCell};

use crate::{Environment, HeightIndex, Scheduler};

/// A scroll position past any real content; the container clamps it to its true maximum.
pub const BOTTOM_SENTINEL: f64 = 999_999_999.0;

/// Delay of the last re-assertion of a programmatic scroll.
pub const SETTLE_DELAY_MS: u64 = 50;

/// Drives programmatic scrolling of a list's root element.
///
/// Content height may still change right after a scroll is requested (late measurements, images),
/// so every position is written three times: immediately, on the next animation frame, and
/// [`SETTLE_DELAY_MS`] later.
///
/// Continuations are never cancelled. Each one captures the lifecycle epoch it was scheduled in
/// and writes only while that epoch is current, the navigator is live and the element is still
/// connected. [`Self::shutdown`] starts a new epoch, so a later [`Self::revive`] does not resume
/// writes scheduled before it.
pub struct ScrollNavigator<D: Environment + 'static, S: Scheduler + 'static> {
    env: Rc<D>,
    scheduler: Rc<S>,
    element: D::Element,
    heights: Rc<RefCell<HeightIndex>>,
    scrolling_to_bottom: Rc<Cell<bool>>,
    // Sequence number of the latest bottom scroll; only its settle clears the flag.
    bottom_seq: Rc<Cell<u64>>,
    live: Rc<Cell<bool>>,
    epoch: Rc<Cell<u64>>,
}

impl<D: Environment + 'static, S: Scheduler + 'static> Clone for ScrollNavigator<D, S> {
    fn clone(&self) -> Self {
        Self {
            env: Rc::clone(&self.env),
            scheduler: Rc::clone(&self.scheduler),
            element: self.element.clone(),
            heights: Rc::clone(&self.heights),
            scrolling_to_bottom: Rc::clone(&self.scrolling_to_bottom),
            bottom_seq: Rc::clone(&self.bottom_seq),
            live: Rc::clone(&self.live),
            epoch: Rc::clone(&self.epoch),
        }
    }
}

impl<D: Environment + 'static, S: Scheduler + 'static> ScrollNavigator<D, S> {
    pub fn new(
        env: Rc<D>,
        scheduler: Rc<S>,
        element: D::Element,
        heights: Rc<RefCell<HeightIndex>>,
    ) -> Self {
        Self {
            env,
            scheduler,
            element,
            heights,
            scrolling_to_bottom: Rc::new(Cell::new(false)),
            bottom_seq: Rc::new(Cell::new(0)),
            live: Rc::new(Cell::new(true)),
            epoch: Rc::new(Cell::new(0)),
        }
    }

    pub fn element(&self) -> &D::Element {
        &self.element
    }

    /// Whether a bottom scroll is still settling.
    pub fn is_scrolling_to_bottom(&self) -> bool {
        self.scrolling_to_bottom.get()
    }

    /// Stops all pending and future writes and ends any in-flight bottom scroll.
    pub fn shutdown(&self) {
        self.live.set(false);
        self.epoch.set(self.epoch.get().wrapping_add(1));
        self.scrolling_to_bottom.set(false);
    }

    /// Re-enables writes requested after this call. Writes scheduled before the last
    /// [`Self::shutdown`] stay skipped.
    pub fn revive(&self) {
        self.live.set(true);
    }

    pub fn is_live(&self) -> bool {
        self.live.get() && self.env.is_connected(&self.element)
    }

    /// Scrolls so item `index` starts at the top of the viewport.
    ///
    /// The offset is computed on the next tick, so it reflects geometry refreshed in between.
    pub fn scroll_to_item(&self, index: usize) {
        let nav = self.clone();
        let epoch = self.epoch.get();
        self.scheduler.next_tick(Box::new(move || {
            if epoch != nav.epoch.get() {
                sdebug!(index, "skipping scroll_to_item from a previous mount");
                return;
            }
            let position = nav.heights.borrow().accumulator(index);
            strace!(index, position, "scroll_to_item");
            nav.scroll_to_position(position);
        }));
    }

    /// Scrolls to the very bottom.
    ///
    /// While an earlier bottom scroll is settling, the request is dropped unless `force` is set
    /// or the caller reports the viewport already sits at the bottom (`is_at_bottom`). Returns
    /// whether a scroll was issued.
    ///
    /// The in-flight state lasts until the most recently issued bottom scroll settles.
    pub fn scroll_to_bottom(&self, force: bool, is_at_bottom: bool) -> bool {
        if self.scrolling_to_bottom.get() && !force && !is_at_bottom {
            strace!("scroll_to_bottom dropped: already in flight");
            return false;
        }
        let seq = self.bottom_seq.get().wrapping_add(1);
        self.bottom_seq.set(seq);
        self.scrolling_to_bottom.set(true);
        self.settle(BOTTOM_SENTINEL, Some(seq));
        true
    }

    /// Writes `position` now, on the next frame, and once more after [`SETTLE_DELAY_MS`].
    pub fn scroll_to_position(&self, position: f64) {
        self.settle(position, None);
    }

    fn settle(&self, position: f64, bottom_seq: Option<u64>) {
        let epoch = self.epoch.get();
        self.write(position, epoch);
        let nav = self.clone();
        self.scheduler.request_animation_frame(Box::new(move || {
            nav.write(position, epoch);
            let settle = nav.clone();
            nav.scheduler.set_timeout(
                SETTLE_DELAY_MS,
                Box::new(move || {
                    settle.write(position, epoch);
                    if bottom_seq == Some(settle.bottom_seq.get()) {
                        settle.scrolling_to_bottom.set(false);
                    }
                }),
            );
        }));
    }

    fn write(&self, position: f64, epoch: u64) {
        if epoch != self.epoch.get() || !self.is_live() {
            sdebug!(position, "skipping scroll write on a detached target");
            return;
        }
        strace!(position, "set_scroll_top");
        self.env.set_scroll_top(&self.element, position);
    }
}

impl<D: Environment + 'static, S: Scheduler + 'static> core::fmt::Debug for ScrollNavigator<D, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScrollNavigator")
            .field("element", &self.element)
            .field("scrolling_to_bottom", &self.scrolling_to_bottom.get())
            .field("live", &self.live.get())
            .field("epoch", &self.epoch.get())
            .finish_non_exhaustive()
    }
}
