//! Virtual-time scheduling for paced game steps.
//!
//! The engine never sleeps. Work that should happen "later" (the next card
//! of a multi-card draw, the opponent's move after its thinking delay) is
//! queued here with a due time, and the host moves the clock forward with
//! [`Scheduler::advance_to`]. Every job carries the epoch it was scheduled
//! in; [`Scheduler::cancel_all`] bumps the epoch, so a job that escaped the
//! queue before a reset can still be recognised as stale.
//!
//! ```
//! use core::time::Duration;
//! use unors::pacing::Scheduler;
//!
//! let mut scheduler = Scheduler::new();
//! scheduler.schedule(Duration::from_millis(350), "second");
//! scheduler.schedule(Duration::ZERO, "first");
//!
//! scheduler.advance_to(Duration::from_millis(100));
//! assert_eq!(scheduler.pop_due().map(|job| job.task), Some("first"));
//! assert!(scheduler.pop_due().is_none());
//! ```

use alloc::collections::BinaryHeap;
use core::cmp::{Ordering, Reverse};
use core::time::Duration;

/// A job taken off the queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job<T> {
    /// When the job was due.
    pub due: Duration,
    /// Epoch the job was scheduled in.
    pub epoch: u64,
    /// The scheduled work.
    pub task: T,
}

#[derive(Debug)]
struct Entry<T> {
    due: Duration,
    seq: u64,
    epoch: u64,
    task: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.due
            .cmp(&other.due)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// A single-threaded timer queue driven by an external clock.
///
/// Jobs due at the same instant run in the order they were scheduled.
#[derive(Debug)]
pub struct Scheduler<T> {
    queue: BinaryHeap<Reverse<Entry<T>>>,
    now: Duration,
    horizon: Duration,
    seq: u64,
    epoch: u64,
}

impl<T> Scheduler<T> {
    /// Creates an empty scheduler at time zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            queue: BinaryHeap::new(),
            now: Duration::ZERO,
            horizon: Duration::ZERO,
            seq: 0,
            epoch: 0,
        }
    }

    /// Current virtual time.
    ///
    /// While jobs are being drained this is the due time of the last job
    /// returned, so delays scheduled from inside a job chain exactly.
    #[must_use]
    pub const fn now(&self) -> Duration {
        self.now
    }

    /// Current epoch.
    #[must_use]
    pub const fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Schedules `task` to run `delay` after the current time.
    pub fn schedule(&mut self, delay: Duration, task: T) {
        let entry = Entry {
            due: self.now.saturating_add(delay),
            seq: self.seq,
            epoch: self.epoch,
            task,
        };
        self.seq += 1;
        self.queue.push(Reverse(entry));
    }

    /// Schedules `task` only if `epoch` is still the current one.
    ///
    /// Returns whether the job was queued. Continuations of a job that
    /// outlived [`cancel_all`](Self::cancel_all) pass the job's epoch here,
    /// so they cannot leak into the new epoch.
    pub fn schedule_in(&mut self, epoch: u64, delay: Duration, task: T) -> bool {
        if epoch != self.epoch {
            return false;
        }
        self.schedule(delay, task);
        true
    }

    /// Moves the clock to `horizon`. Jobs due by then become poppable.
    ///
    /// The clock never runs backwards.
    pub fn advance_to(&mut self, horizon: Duration) {
        if horizon > self.horizon {
            self.horizon = horizon;
        }
    }

    /// Moves the clock forward by `elapsed`.
    pub fn advance_by(&mut self, elapsed: Duration) {
        let horizon = self.horizon.saturating_add(elapsed);
        self.advance_to(horizon);
    }

    /// Pops the earliest job due at or before the horizon.
    ///
    /// When nothing is due, the current time catches up with the horizon.
    pub fn pop_due(&mut self) -> Option<Job<T>> {
        let due = self.queue.peek().map(|Reverse(entry)| entry.due);
        match due {
            Some(due) if due <= self.horizon => {
                let Reverse(entry) = self.queue.pop()?;
                self.now = entry.due;
                Some(Job {
                    due: entry.due,
                    epoch: entry.epoch,
                    task: entry.task,
                })
            }
            _ => {
                self.now = self.horizon;
                None
            }
        }
    }

    /// Due time of the earliest pending job.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.queue.peek().map(|Reverse(entry)| entry.due)
    }

    /// Time left until the earliest pending job, measured from the horizon.
    #[must_use]
    pub fn time_until_next(&self) -> Option<Duration> {
        self.next_due()
            .map(|due| due.saturating_sub(self.horizon))
    }

    /// Returns whether no job is pending.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    /// Returns the number of pending jobs.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Returns whether `job` was scheduled in the current epoch.
    #[must_use]
    pub const fn is_current(&self, job: &Job<T>) -> bool {
        job.epoch == self.epoch
    }

    /// Drops every pending job and starts a new epoch.
    pub fn cancel_all(&mut self) {
        self.queue.clear();
        self.epoch += 1;
    }
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}
