use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

/// A deferred continuation.
pub type Task = Box<dyn FnOnce() + 'static>;

/// Schedules continuations on the host's event loop.
///
/// Nothing here blocks: all waiting is expressed by handing a [`Task`] to one of the queues.
pub trait Scheduler {
    /// Runs `task` once the current update has been flushed to layout (a "next tick").
    fn next_tick(&self, task: Task);

    /// Runs `task` before the next repaint.
    fn request_animation_frame(&self, task: Task);

    /// Runs `task` after `delay_ms` milliseconds.
    fn set_timeout(&self, delay_ms: u64, task: Task);
}

struct Timer {
    due_ms: u64,
    seq: u64,
    task: Task,
}

/// A deterministic, manually driven [`Scheduler`].
///
/// Adapters without a real event loop (and tests) drive it explicitly:
/// - `run_ticks()` drains the next-tick queue, including ticks queued while draining
/// - `run_frame()` runs one animation frame; frames requested during it wait for the next one
/// - `advance(ms)` moves the virtual clock and runs due timers in (due time, schedule order)
///
/// Next ticks are always drained after any other task runs.
#[derive(Default)]
pub struct ManualScheduler {
    now_ms: Cell<u64>,
    next_seq: Cell<u64>,
    ticks: RefCell<VecDeque<Task>>,
    frames: RefCell<VecDeque<Task>>,
    timers: RefCell<Vec<Timer>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms.get()
    }

    pub fn pending_ticks(&self) -> usize {
        self.ticks.borrow().len()
    }

    pub fn pending_frames(&self) -> usize {
        self.frames.borrow().len()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.borrow().len()
    }

    pub fn is_idle(&self) -> bool {
        self.pending_ticks() == 0 && self.pending_frames() == 0 && self.pending_timers() == 0
    }

    /// Runs queued next-tick tasks until the queue is empty. Returns how many ran.
    pub fn run_ticks(&self) -> usize {
        let mut ran = 0;
        loop {
            // The borrow must end before the task runs: tasks schedule more tasks.
            let next = self.ticks.borrow_mut().pop_front();
            let Some(task) = next else {
                return ran;
            };
            task();
            ran += 1;
        }
    }

    /// Runs one animation frame. Returns how many frame tasks ran.
    pub fn run_frame(&self) -> usize {
        self.run_ticks();
        let frame = core::mem::take(&mut *self.frames.borrow_mut());
        let ran = frame.len();
        for task in frame {
            task();
            self.run_ticks();
        }
        ran
    }

    /// Advances the virtual clock by `ms`, running every timer that comes due. Returns how many
    /// timers ran.
    pub fn advance(&self, ms: u64) -> usize {
        let target = self.now_ms.get().saturating_add(ms);
        let mut ran = 0;
        self.run_ticks();
        while let Some(timer) = self.pop_due(target) {
            self.now_ms.set(timer.due_ms.max(self.now_ms.get()));
            (timer.task)();
            self.run_ticks();
            ran += 1;
        }
        self.now_ms.set(target);
        ran
    }

    /// Runs ticks, frames and timers (jumping the clock forward) until nothing is pending.
    pub fn run_until_idle(&self) {
        loop {
            self.run_ticks();
            if self.pending_frames() > 0 {
                self.run_frame();
                continue;
            }
            let next_due = self.timers.borrow().iter().map(|t| t.due_ms).min();
            match next_due {
                Some(due) => {
                    let delta = due.saturating_sub(self.now_ms.get());
                    self.advance(delta);
                }
                None => return,
            }
        }
    }

    fn pop_due(&self, target: u64) -> Option<Timer> {
        let mut timers = self.timers.borrow_mut();
        let pos = timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due_ms <= target)
            .min_by_key(|(_, t)| (t.due_ms, t.seq))
            .map(|(i, _)| i)?;
        Some(timers.swap_remove(pos))
    }
}

impl Scheduler for ManualScheduler {
    fn next_tick(&self, task: Task) {
        self.ticks.borrow_mut().push_back(task);
    }

    fn request_animation_frame(&self, task: Task) {
        self.frames.borrow_mut().push_back(task);
    }

    fn set_timeout(&self, delay_ms: u64, task: Task) {
        let seq = self.next_seq.get();
        self.next_seq.set(seq.wrapping_add(1));
        self.timers.borrow_mut().push(Timer {
            due_ms: self.now_ms.get().saturating_add(delay_ms),
            seq,
            task,
        });
    }
}

impl core::fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ManualScheduler")
            .field("now_ms", &self.now_ms.get())
            .field("pending_ticks", &self.pending_ticks())
            .field("pending_frames", &self.pending_frames())
            .field("pending_timers", &self.pending_timers())
            .finish()
    }
}
