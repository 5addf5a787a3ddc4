use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use super::{Scheduler, TimerCallback, TimerHandle};

/// Scheduler driven by a virtual clock. Nothing fires until [`advance`] moves
/// time past a deadline. Clones share the same clock.
///
/// [`advance`]: ManualScheduler::advance
#[derive(Clone, Default)]
pub struct ManualScheduler {
    inner: Rc<RefCell<Inner>>,
}

#[derive(Default)]
struct Inner {
    now: Duration,
    next_id: u64,
    pending: Vec<Pending>,
}

struct Pending {
    handle: TimerHandle,
    deadline: Duration,
    callback: TimerCallback,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed on the virtual clock
    pub fn now(&self) -> Duration {
        self.inner.borrow().now
    }

    /// Number of callbacks waiting to fire
    pub fn pending(&self) -> usize {
        self.inner.borrow().pending.len()
    }

    /// Move the clock forward, firing due callbacks in deadline order.
    /// Callbacks may schedule more work; anything due before the new time
    /// fires in the same call. Returns how many callbacks ran.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.now() + by;
        let mut fired = 0;

        loop {
            // Borrow released before the callback runs so it can reschedule.
            let next = {
                let mut inner = self.inner.borrow_mut();
                let due = inner
                    .pending
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.deadline <= target)
                    .min_by_key(|(_, p)| (p.deadline, p.handle))
                    .map(|(idx, _)| idx);

                due.map(|idx| {
                    let task = inner.pending.remove(idx);
                    inner.now = task.deadline;
                    task.callback
                })
            };

            match next {
                Some(callback) => {
                    callback();
                    fired += 1;
                }
                None => break,
            }
        }

        self.inner.borrow_mut().now = target;
        fired
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, callback: TimerCallback) -> TimerHandle {
        let mut inner = self.inner.borrow_mut();
        let handle = TimerHandle::new(inner.next_id);
        inner.next_id += 1;
        let deadline = inner.now + delay;
        inner.pending.push(Pending {
            handle,
            deadline,
            callback,
        });
        handle
    }

    fn cancel(&self, handle: TimerHandle) {
        self.inner
            .borrow_mut()
            .pending
            .retain(|p| p.handle != handle);
    }
}
