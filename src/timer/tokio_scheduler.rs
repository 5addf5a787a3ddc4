use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use tokio::task::JoinHandle;

use super::{Scheduler, TimerCallback, TimerHandle};

/// Timers on the tokio runtime. Must be used inside a [`tokio::task::LocalSet`]
/// because callbacks are not `Send`.
#[derive(Clone, Default)]
pub struct TokioScheduler {
    tasks: Rc<RefCell<HashMap<u64, JoinHandle<()>>>>,
    next_id: Rc<Cell<u64>>,
}

impl TokioScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> usize {
        self.tasks.borrow().len()
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, callback: TimerCallback) -> TimerHandle {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        let tasks = Rc::clone(&self.tasks);
        let task = tokio::task::spawn_local(async move {
            tokio::time::sleep(delay).await;
            tasks.borrow_mut().remove(&id);
            callback();
        });
        self.tasks.borrow_mut().insert(id, task);

        TimerHandle::new(id)
    }

    fn cancel(&self, handle: TimerHandle) {
        if let Some(task) = self.tasks.borrow_mut().remove(&handle.id()) {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::Debouncer;
    use tokio::task::LocalSet;

    #[tokio::test]
    async fn test_debounced_burst_on_runtime() {
        LocalSet::new()
            .run_until(async {
                let debouncer = Debouncer::new(TokioScheduler::new(), Duration::from_millis(40));
                let hits = Rc::new(RefCell::new(Vec::new()));

                for width in [1000, 700, 400] {
                    let sink = Rc::clone(&hits);
                    debouncer.call(move || sink.borrow_mut().push(width));
                    tokio::time::sleep(Duration::from_millis(5)).await;
                }
                assert!(hits.borrow().is_empty());

                tokio::time::sleep(Duration::from_millis(150)).await;
                assert_eq!(*hits.borrow(), vec![400]);
                assert_eq!(debouncer.scheduler().pending(), 0);
            })
            .await;
    }

    #[tokio::test]
    async fn test_cancel_aborts_task() {
        LocalSet::new()
            .run_until(async {
                let scheduler = TokioScheduler::new();
                let ran = Rc::new(Cell::new(false));

                let flag = Rc::clone(&ran);
                let handle = scheduler.schedule(
                    Duration::from_millis(10),
                    Box::new(move || flag.set(true)),
                );
                scheduler.cancel(handle);

                tokio::time::sleep(Duration::from_millis(50)).await;
                assert!(!ran.get());
                assert_eq!(scheduler.pending(), 0);
            })
            .await;
    }
}
