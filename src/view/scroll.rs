use std::time::{Duration, Instant};

/// One-shot deferred "scroll the active node into view" timer.
///
/// Armed when the active node changes; the short delay lets a
/// just-triggered expansion settle before the host measures layout.
/// Re-arming replaces the pending target, and `cancel` must be called
/// when the panel closes (or the view goes away) so the timer never
/// fires against stale state. `poll` should be called each tick of the
/// host's event loop.
#[derive(Debug)]
pub struct ScrollTimer {
    delay: Duration,
    pending: Option<Pending>,
}

#[derive(Debug)]
struct Pending {
    target: String,
    due: Instant,
}

impl ScrollTimer {
    pub fn new(delay: Duration) -> Self {
        ScrollTimer {
            delay,
            pending: None,
        }
    }

    /// Schedule a scroll to `id`, replacing any pending target.
    pub fn arm(&mut self, id: impl Into<String>, now: Instant) {
        self.pending = Some(Pending {
            target: id.into(),
            due: now + self.delay,
        });
    }

    /// Drop the pending scroll, if any.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// The id a pending scroll is waiting on.
    pub fn target(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.target.as_str())
    }

    /// Fire the scroll if its deadline passed. Fires at most once per
    /// arm.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        if self.pending.as_ref().is_some_and(|p| now >= p.due) {
            return self.pending.take().map(|p| p.target);
        }
        None
    }
}
