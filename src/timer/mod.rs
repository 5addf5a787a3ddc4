//! Cancellable timers and debouncing
//!
//! Everything here is single-threaded: callbacks are `!Send` and run on the
//! thread that owns the scheduler, the same way browser timers do.
//!
//! - **manual**: Virtual-clock scheduler, advanced explicitly
//! - **tokio_scheduler**: `spawn_local` + `sleep`, for native event loops

mod manual;

#[cfg(feature = "native")]
mod tokio_scheduler;

pub use manual::ManualScheduler;

#[cfg(feature = "native")]
pub use tokio_scheduler::TokioScheduler;

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// Work deferred by a [`Scheduler`]
pub type TimerCallback = Box<dyn FnOnce()>;

/// Identifies one scheduled callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

impl TimerHandle {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

pub trait Scheduler {
    /// Run `callback` once `delay` has elapsed
    fn schedule(&self, delay: Duration, callback: TimerCallback) -> TimerHandle;

    /// Drop a pending callback. Cancelling a fired or unknown handle is a no-op.
    fn cancel(&self, handle: TimerHandle);
}

/// Coalesces bursts of calls: only the last action of a burst runs, once
/// `delay` has passed without another call.
pub struct Debouncer<S: Scheduler> {
    scheduler: S,
    delay: Duration,
    pending: Rc<Cell<Option<TimerHandle>>>,
}

impl<S: Scheduler> Debouncer<S> {
    pub fn new(scheduler: S, delay: Duration) -> Self {
        Self {
            scheduler,
            delay,
            pending: Rc::new(Cell::new(None)),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Cancel any pending action and schedule `action` in its place
    pub fn call(&self, action: impl FnOnce() + 'static) {
        self.cancel();

        let pending = Rc::clone(&self.pending);
        let handle = self.scheduler.schedule(
            self.delay,
            Box::new(move || {
                pending.set(None);
                action();
            }),
        );
        self.pending.set(Some(handle));
    }

    /// Drop the pending action, if any
    pub fn cancel(&self) {
        if let Some(previous) = self.pending.take() {
            self.scheduler.cancel(previous);
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    const QUIET: Duration = Duration::from_millis(250);

    #[test]
    fn test_burst_runs_last_action_once() {
        let clock = ManualScheduler::new();
        let debouncer = Debouncer::new(clock.clone(), QUIET);
        let runs = Rc::new(RefCell::new(Vec::new()));

        for width in [900, 800, 700, 500] {
            let sink = Rc::clone(&runs);
            debouncer.call(move || sink.borrow_mut().push(width));
            clock.advance(Duration::from_millis(100));
        }
        assert!(runs.borrow().is_empty());
        assert!(debouncer.is_pending());
        assert_eq!(clock.pending(), 1);

        clock.advance(Duration::from_millis(150));
        assert_eq!(*runs.borrow(), vec![500]);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_not_before_quiet_period() {
        let clock = ManualScheduler::new();
        let debouncer = Debouncer::new(clock.clone(), QUIET);
        let ran = Rc::new(Cell::new(false));

        let flag = Rc::clone(&ran);
        debouncer.call(move || flag.set(true));

        clock.advance(Duration::from_millis(249));
        assert!(!ran.get());
        clock.advance(Duration::from_millis(1));
        assert!(ran.get());
    }

    #[test]
    fn test_separate_bursts_each_run() {
        let clock = ManualScheduler::new();
        let debouncer = Debouncer::new(clock.clone(), QUIET);
        let count = Rc::new(Cell::new(0));

        for _ in 0..2 {
            let counter = Rc::clone(&count);
            debouncer.call(move || counter.set(counter.get() + 1));
            clock.advance(Duration::from_secs(1));
        }
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_cancel_drops_pending() {
        let clock = ManualScheduler::new();
        let debouncer = Debouncer::new(clock.clone(), QUIET);
        let ran = Rc::new(Cell::new(false));

        let flag = Rc::clone(&ran);
        debouncer.call(move || flag.set(true));
        debouncer.cancel();

        clock.advance(Duration::from_secs(1));
        assert!(!ran.get());
        assert_eq!(clock.pending(), 0);
    }
}
