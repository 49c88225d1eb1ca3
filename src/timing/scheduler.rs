//! Delayed continuations and the schedulers that hold them.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cards::CardPosition;
use crate::round::RoundId;

/// A continuation the controller asked to run later.
///
/// Tasks are plain data: the host hands them back to
/// [`GameController::fire`](crate::controller::GameController::fire) when
/// their delay has elapsed. Round-bound tasks carry the round they were
/// scheduled for and do nothing if that round has since been replaced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScheduledTask {
    /// Show the board and deal the first round.
    Reveal,

    /// Compare the pair selected in `round`.
    Resolve {
        round: RoundId,
        first: CardPosition,
        second: CardPosition,
    },

    /// Stop the mismatch shake cue.
    EndShake {
        round: RoundId,
        first: CardPosition,
        second: CardPosition,
    },
}

impl ScheduledTask {
    /// The round this task belongs to, if any.
    #[must_use]
    pub fn round(&self) -> Option<RoundId> {
        match *self {
            ScheduledTask::Reveal => None,
            ScheduledTask::Resolve { round, .. } | ScheduledTask::EndShake { round, .. } => {
                Some(round)
            }
        }
    }
}

/// Timer service.
///
/// One-shot, fire-and-forget: there is no cancellation and no return
/// value. An implementation must eventually pass each task to
/// `GameController::fire`, after at least `delay`.
pub trait Scheduler {
    /// Arrange for `task` to run after `delay`.
    fn schedule(&mut self, delay: Duration, task: ScheduledTask);
}

impl<S: Scheduler + ?Sized> Scheduler for &mut S {
    fn schedule(&mut self, delay: Duration, task: ScheduledTask) {
        (**self).schedule(delay, task);
    }
}

impl<S: Scheduler + ?Sized> Scheduler for Box<S> {
    fn schedule(&mut self, delay: Duration, task: ScheduledTask) {
        (**self).schedule(delay, task);
    }
}

#[derive(Clone, Debug)]
struct Entry {
    due: Duration,
    seq: u64,
    task: ScheduledTask,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.due, self.seq).cmp(&(other.due, other.seq))
    }
}

/// Virtual-time scheduler.
///
/// Time only moves when the owner says so. Tasks come out in due order,
/// ties broken by scheduling order. Used by tests, by the Python binding,
/// and by any host that polls instead of owning real timers.
///
/// ```
/// use std::time::Duration;
/// use memory_match::timing::{ManualClock, ScheduledTask, Scheduler};
///
/// let mut clock = ManualClock::new();
/// clock.schedule(Duration::from_millis(800), ScheduledTask::Reveal);
///
/// assert_eq!(clock.pop_due(Duration::from_millis(500)), None);
/// assert_eq!(clock.pop_due(Duration::from_millis(800)), Some(ScheduledTask::Reveal));
/// assert_eq!(clock.now(), Duration::from_millis(800));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Duration,
    next_seq: u64,
    queue: BinaryHeap<Reverse<Entry>>,
}

impl ManualClock {
    /// Create a clock at time zero with nothing scheduled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of tasks waiting.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }

    /// Nothing is scheduled.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    /// When the earliest task is due.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.queue.peek().map(|Reverse(entry)| entry.due)
    }

    /// Time left until the earliest task is due.
    #[must_use]
    pub fn until_next(&self) -> Option<Duration> {
        self.next_due().map(|due| due.saturating_sub(self.now))
    }

    /// Pop the earliest task due at or before `deadline`.
    ///
    /// The clock moves forward to the task's due time.
    pub fn pop_due(&mut self, deadline: Duration) -> Option<ScheduledTask> {
        if self.next_due()? > deadline {
            return None;
        }
        let Reverse(entry) = self.queue.pop()?;
        self.now = self.now.max(entry.due);
        Some(entry.task)
    }

    /// Move the clock forward to `time`. Never moves backwards.
    pub fn advance_to(&mut self, time: Duration) {
        self.now = self.now.max(time);
    }
}

impl Scheduler for ManualClock {
    fn schedule(&mut self, delay: Duration, task: ScheduledTask) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Reverse(Entry {
            due: self.now + delay,
            seq,
            task,
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn resolve(first: u16, second: u16) -> ScheduledTask {
        ScheduledTask::Resolve {
            round: RoundId::new(1),
            first: CardPosition::new(first),
            second: CardPosition::new(second),
        }
    }

    #[test]
    fn test_due_order() {
        let mut clock = ManualClock::new();
        clock.schedule(ms(300), resolve(0, 1));
        clock.schedule(ms(100), resolve(2, 3));
        clock.schedule(ms(200), ScheduledTask::Reveal);

        assert_eq!(clock.pop_due(ms(1000)), Some(resolve(2, 3)));
        assert_eq!(clock.pop_due(ms(1000)), Some(ScheduledTask::Reveal));
        assert_eq!(clock.pop_due(ms(1000)), Some(resolve(0, 1)));
        assert_eq!(clock.pop_due(ms(1000)), None);
        assert_eq!(clock.now(), ms(300));
    }

    #[test]
    fn test_ties_keep_scheduling_order() {
        let mut clock = ManualClock::new();
        clock.schedule(Duration::ZERO, resolve(4, 5));
        clock.schedule(Duration::ZERO, resolve(0, 1));

        assert_eq!(clock.pop_due(Duration::ZERO), Some(resolve(4, 5)));
        assert_eq!(clock.pop_due(Duration::ZERO), Some(resolve(0, 1)));
    }

    #[test]
    fn test_delay_is_relative_to_now() {
        let mut clock = ManualClock::new();
        clock.advance_to(ms(1000));
        clock.schedule(ms(500), ScheduledTask::Reveal);

        assert_eq!(clock.next_due(), Some(ms(1500)));
        assert_eq!(clock.until_next(), Some(ms(500)));
        assert_eq!(clock.pop_due(ms(1499)), None);
        assert_eq!(clock.pending_count(), 1);
    }

    #[test]
    fn test_advance_never_goes_back() {
        let mut clock = ManualClock::new();
        clock.advance_to(ms(50));
        clock.advance_to(ms(10));
        assert_eq!(clock.now(), ms(50));
    }

    #[test]
    fn test_task_round() {
        assert_eq!(ScheduledTask::Reveal.round(), None);
        assert_eq!(resolve(0, 1).round(), Some(RoundId::new(1)));
    }
}
