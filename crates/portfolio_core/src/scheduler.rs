use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Duration;

use crate::Msg;

/// Shortest allowed interval period; keeps a zero period from spinning.
const MIN_PERIOD: Duration = Duration::from_millis(1);

/// What a timer produces when it comes due.
#[derive(Debug, Clone, PartialEq)]
pub enum Wakeup {
    Clock,
    LogFeed,
    Deliver(Msg),
}

#[derive(Debug)]
enum Timer {
    Interval { period: Duration, wakeup: Wakeup },
    Once(Wakeup),
}

#[derive(Debug)]
struct Pending {
    due: Duration,
    seq: u64,
    timer: Timer,
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl Eq for Pending {}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pending {
    // Reversed so the max-heap pops the earliest due, then the earliest scheduled.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .due
            .cmp(&self.due)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Virtual-time timer queue.
///
/// Time only moves when the owner pops due timers, so the same sequence of
/// calls always produces the same sequence of wakeups. Timers due at the same
/// instant fire in the order they were scheduled.
#[derive(Debug, Default)]
pub struct Scheduler {
    now: Duration,
    seq: u64,
    queue: BinaryHeap<Pending>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time since the page started.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Fires `wakeup` every `period`, first after one full period.
    pub fn every(&mut self, period: Duration, wakeup: Wakeup) {
        let period = period.max(MIN_PERIOD);
        self.push(self.now + period, Timer::Interval { period, wakeup });
    }

    /// Fires `wakeup` once after `delay`.
    pub fn after(&mut self, delay: Duration, wakeup: Wakeup) {
        self.push(self.now + delay, Timer::Once(wakeup));
    }

    fn push(&mut self, due: Duration, timer: Timer) {
        self.seq += 1;
        self.queue.push(Pending {
            due,
            seq: self.seq,
            timer,
        });
    }

    pub fn next_due(&self) -> Option<Duration> {
        self.queue.peek().map(|pending| pending.due)
    }

    /// Pops the earliest timer due at or before `until`, moving the clock to its
    /// due time. Intervals are re-armed relative to their own due time, so a
    /// large jump in `until` yields every missed firing rather than one.
    pub fn pop_due(&mut self, until: Duration) -> Option<Wakeup> {
        if self.next_due()? > until {
            return None;
        }
        let Pending { due, timer, .. } = self.queue.pop()?;
        self.now = self.now.max(due);
        match timer {
            Timer::Once(wakeup) => Some(wakeup),
            Timer::Interval { period, wakeup } => {
                self.push(
                    due + period,
                    Timer::Interval {
                        period,
                        wakeup: wakeup.clone(),
                    },
                );
                Some(wakeup)
            }
        }
    }

    /// Moves the clock forward without firing anything. Never moves it back.
    pub fn advance_clock(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }

    /// Drops every pending timer and returns how many there were.
    pub fn cancel_all(&mut self) -> usize {
        let count = self.queue.len();
        self.queue.clear();
        count
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_instant_fires_in_schedule_order() {
        let mut scheduler = Scheduler::new();
        scheduler.after(Duration::from_millis(10), Wakeup::LogFeed);
        scheduler.after(Duration::from_millis(10), Wakeup::Clock);
        assert_eq!(
            scheduler.pop_due(Duration::from_millis(10)),
            Some(Wakeup::LogFeed)
        );
        assert_eq!(
            scheduler.pop_due(Duration::from_millis(10)),
            Some(Wakeup::Clock)
        );
        assert_eq!(scheduler.pop_due(Duration::from_millis(10)), None);
    }

    #[test]
    fn intervals_rearm_from_their_due_time() {
        let mut scheduler = Scheduler::new();
        scheduler.every(Duration::from_secs(1), Wakeup::Clock);
        let mut fired = 0;
        while scheduler.pop_due(Duration::from_millis(3500)).is_some() {
            fired += 1;
        }
        assert_eq!(fired, 3);
        assert_eq!(scheduler.now(), Duration::from_secs(3));
        assert_eq!(scheduler.next_due(), Some(Duration::from_secs(4)));
    }

    #[test]
    fn long_jump_replays_missed_interval_firings_in_order() {
        let mut scheduler = Scheduler::new();
        scheduler.every(Duration::from_secs(1), Wakeup::Clock);
        scheduler.every(Duration::from_secs(3), Wakeup::LogFeed);

        let mut fired = Vec::new();
        while let Some(wakeup) = scheduler.pop_due(Duration::from_secs(6)) {
            fired.push((scheduler.now().as_secs(), wakeup));
        }
        assert_eq!(
            fired,
            vec![
                (1, Wakeup::Clock),
                (2, Wakeup::Clock),
                (3, Wakeup::LogFeed),
                (3, Wakeup::Clock),
                (4, Wakeup::Clock),
                (5, Wakeup::Clock),
                (6, Wakeup::LogFeed),
                (6, Wakeup::Clock),
            ]
        );
    }

    #[test]
    fn cancel_all_empties_the_queue() {
        let mut scheduler = Scheduler::new();
        scheduler.every(Duration::from_secs(1), Wakeup::Clock);
        scheduler.after(Duration::from_secs(2), Wakeup::Deliver(Msg::LogFeedTick));
        assert_eq!(scheduler.cancel_all(), 2);
        assert_eq!(scheduler.pop_due(Duration::from_secs(10)), None);
    }
}
