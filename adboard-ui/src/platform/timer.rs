//! `setTimeout`-backed scheduler

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use adboard::timer::{Scheduler, TimerCallback, TimerHandle};
use gloo_timers::callback::Timeout;

#[derive(Clone, Default)]
pub struct GlooScheduler {
    timeouts: Rc<RefCell<HashMap<u64, Timeout>>>,
    // A Timeout must not be dropped from inside its own callback, so fired
    // ids are swept on the next schedule instead.
    fired: Rc<RefCell<Vec<u64>>>,
    next_id: Rc<Cell<u64>>,
}

impl GlooScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    fn sweep(&self) {
        let mut timeouts = self.timeouts.borrow_mut();
        for id in self.fired.borrow_mut().drain(..) {
            timeouts.remove(&id);
        }
    }
}

impl Scheduler for GlooScheduler {
    fn schedule(&self, delay: Duration, callback: TimerCallback) -> TimerHandle {
        self.sweep();

        let id = self.next_id.get();
        self.next_id.set(id + 1);

        let millis = delay.as_millis().min(u32::MAX as u128) as u32;
        let fired = Rc::clone(&self.fired);
        let timeout = Timeout::new(millis, move || {
            fired.borrow_mut().push(id);
            callback();
        });
        self.timeouts.borrow_mut().insert(id, timeout);

        TimerHandle::new(id)
    }

    fn cancel(&self, handle: TimerHandle) {
        // Dropping a Timeout clears it.
        let cancelled = self.timeouts.borrow_mut().remove(&handle.id());
        drop(cancelled);
    }
}
