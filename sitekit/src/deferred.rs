//! Fire-and-forget tasks that run after a delay.

use std::time::Duration;

use futures::{FutureExt, StreamExt};
use tokio::runtime::Handle;
use tokio::time::Instant;
use tokio_util::time::DelayQueue;

/// Work scheduled to run later. Tasks have no cancellation path; each must be
/// safe to run after the page has moved on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deferred {
    /// Remove an element if it is still in the document.
    RemoveElement { id: String },
}

/// Timer service backing deferred tasks.
///
/// Inside a Tokio runtime (with the time driver enabled) tasks go straight
/// onto a [`DelayQueue`]. Scheduled from plain synchronous code, they are
/// parked with their deadline and moved onto the queue the next time it is
/// awaited, or run by [`Scheduler::take_due`] once their deadline passes.
#[derive(Debug)]
pub struct Scheduler {
    queue: DelayQueue<Deferred>,
    parked: Vec<(Instant, Deferred)>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            queue: DelayQueue::new(),
            parked: Vec::new(),
        }
    }

    pub fn schedule(&mut self, task: Deferred, delay: Duration) {
        let deadline = Instant::now() + delay;
        if Handle::try_current().is_ok() {
            log::trace!("[deferred] {task:?} in {delay:?}");
            self.queue.insert_at(task, deadline);
        } else {
            log::debug!("[deferred] no runtime, parking {task:?} for {delay:?}");
            self.parked.push((deadline, task));
        }
    }

    /// Number of tasks still waiting.
    pub fn len(&self) -> usize {
        self.queue.len() + self.parked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Wait for the next task to come due. `None` once nothing is scheduled.
    pub async fn next(&mut self) -> Option<Deferred> {
        for (deadline, task) in self.parked.drain(..) {
            self.queue.insert_at(task, deadline);
        }
        self.queue.next().await.map(|expired| expired.into_inner())
    }

    /// Every task whose deadline has passed, without waiting for the rest.
    pub fn take_due(&mut self) -> Vec<Deferred> {
        let now = Instant::now();
        let (due, waiting): (Vec<_>, Vec<_>) = self
            .parked
            .drain(..)
            .partition(|(deadline, _)| *deadline <= now);
        self.parked = waiting;
        let mut due: Vec<Deferred> = due.into_iter().map(|(_, task)| task).collect();

        if Handle::try_current().is_ok() {
            while let Some(Some(expired)) = self.queue.next().now_or_never() {
                due.push(expired.into_inner());
            }
        }
        due
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}
