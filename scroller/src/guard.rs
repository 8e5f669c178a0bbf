use alloc::boxed::Box;
use alloc::format;
use alloc::rc::Rc;
use alloc::string::String;

use crate::{Error, Result, Scheduler};

/// Fails a render that would mount more items than any viewport can show.
///
/// Rendering everything is the typical symptom of a scroll container without a fixed height or
/// without `overflow-y: auto`. Stopping is preferred over silently mounting thousands of items.
pub struct OverrenderGuard<S> {
    scheduler: Rc<S>,
    limit: usize,
}

impl<S> Clone for OverrenderGuard<S> {
    fn clone(&self) -> Self {
        Self {
            scheduler: Rc::clone(&self.scheduler),
            limit: self.limit,
        }
    }
}

impl<S: Scheduler> OverrenderGuard<S> {
    pub fn new(scheduler: Rc<S>, limit: usize) -> Self {
        Self { scheduler, limit }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn set_limit(&mut self, limit: usize) {
        self.limit = limit;
    }

    /// Passes when `rendered` stays within the limit, otherwise fails via [`Self::fail`].
    pub fn check<E: core::fmt::Debug>(&self, rendered: usize, container: &E) -> Result<()> {
        if rendered <= self.limit {
            return Ok(());
        }
        Err(self.fail(rendered, container))
    }

    /// Schedules the diagnostic for `container` and returns the fatal error.
    ///
    /// The diagnostic is logged from a timer so it never runs inside the failing render pass.
    pub fn fail<E: core::fmt::Debug>(&self, rendered: usize, container: &E) -> Error {
        let diagnostic = Diagnostic {
            container: format!("{container:?}"),
            rendered,
            limit: self.limit,
        };
        let container = diagnostic.container.clone();
        let log = Box::new(move || diagnostic.log());
        self.scheduler.set_timeout(0, log);
        Error::RenderedItemsLimit {
            rendered,
            limit: self.limit,
            container,
        }
    }
}

impl<S> core::fmt::Debug for OverrenderGuard<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("OverrenderGuard")
            .field("limit", &self.limit)
            .finish_non_exhaustive()
    }
}

#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
struct Diagnostic {
    container: String,
    rendered: usize,
    limit: usize,
}

impl Diagnostic {
    fn log(&self) {
        serror!(
            container = %self.container,
            rendered = self.rendered,
            limit = self.limit,
            "the scroller element does not seem to scroll, so it tries to render every item at once"
        );
        serror!(
            container = %self.container,
            "give the scroller a fixed height and `overflow-y: auto` to render only visible items"
        );
    }
}
