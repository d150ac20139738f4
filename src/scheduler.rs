use std::time::Duration;

/// Opaque handle to a scheduled task. Handles are never reused by a timeline.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct TimerHandle(u64);

/// Delayed, cancelable task scheduling.
///
/// Canceling a handle that already fired or was already canceled does nothing.
pub trait Scheduler<T> {
    fn schedule(&mut self, delay: Duration, task: T) -> TimerHandle;
    fn cancel(&mut self, handle: TimerHandle);
}

struct Entry<T> {
    handle: TimerHandle,
    due: Duration,
    task: T,
}

/// Virtual-time scheduler driven by the frame loop.
///
/// `advance` moves the horizon forward; `pop_due` then hands back due tasks
/// one by one in due order. While a task is being handed out the clock sits
/// on that task's due time, so anything it schedules is measured from when it
/// should have fired rather than from the end of the frame.
pub struct Timeline<T> {
    now: Duration,
    horizon: Duration,
    next_id: u64,
    pending: Vec<Entry<T>>,
}

impl<T> Timeline<T> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            horizon: Duration::ZERO,
            next_id: 0,
            pending: Vec::new(),
        }
    }

    #[cfg(test)]
    pub fn now(&self) -> Duration {
        self.now
    }

    #[cfg(test)]
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.pending.iter().any(|e| e.handle == handle)
    }

    #[cfg(test)]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    #[cfg(test)]
    /// Time left until `handle` fires, if it is still pending.
    pub fn remaining(&self, handle: TimerHandle) -> Option<Duration> {
        self.pending
            .iter()
            .find(|e| e.handle == handle)
            .map(|e| e.due.saturating_sub(self.now))
    }

    pub fn advance(&mut self, elapsed: Duration) {
        self.horizon += elapsed;
    }

    pub fn pop_due(&mut self) -> Option<(TimerHandle, T)> {
        // Earliest due first, ties broken by scheduling order
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due <= self.horizon)
            .min_by_key(|(_, e)| (e.due, e.handle.0))
            .map(|(i, _)| i);

        match index {
            Some(i) => {
                let entry = self.pending.swap_remove(i);
                self.now = entry.due.max(self.now);
                Some((entry.handle, entry.task))
            }
            None => {
                self.now = self.horizon;
                None
            }
        }
    }
}

impl<T> Default for Timeline<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> for Timeline<T> {
    fn schedule(&mut self, delay: Duration, task: T) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.pending.push(Entry {
            handle,
            due: self.now + delay,
            task,
        });
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.pending.retain(|e| e.handle != handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn drain(timeline: &mut Timeline<&'static str>) -> Vec<&'static str> {
        let mut fired = Vec::new();
        while let Some((_, task)) = timeline.pop_due() {
            fired.push(task);
        }
        fired
    }

    #[test]
    fn fires_only_once_due() {
        let mut timeline = Timeline::new();
        timeline.schedule(ms(100), "a");

        timeline.advance(ms(99));
        assert!(drain(&mut timeline).is_empty());

        timeline.advance(ms(1));
        assert_eq!(drain(&mut timeline), vec!["a"]);
        assert_eq!(timeline.pending_count(), 0);
    }

    #[test]
    fn fires_in_due_order() {
        let mut timeline = Timeline::new();
        timeline.schedule(ms(300), "late");
        timeline.schedule(ms(100), "early");
        timeline.schedule(ms(100), "early-second");

        timeline.advance(ms(500));
        assert_eq!(drain(&mut timeline), vec!["early", "early-second", "late"]);
        assert_eq!(timeline.now(), ms(500));
    }

    #[test]
    fn canceled_task_never_fires() {
        let mut timeline = Timeline::new();
        let handle = timeline.schedule(ms(100), "a");
        timeline.cancel(handle);
        assert!(!timeline.is_pending(handle));

        timeline.advance(ms(200));
        assert!(drain(&mut timeline).is_empty());
    }

    #[test]
    fn cancel_after_fire_is_noop() {
        let mut timeline = Timeline::new();
        let fired = timeline.schedule(ms(10), "a");
        let other = timeline.schedule(ms(50), "b");

        timeline.advance(ms(20));
        assert_eq!(drain(&mut timeline), vec!["a"]);

        timeline.cancel(fired);
        timeline.cancel(fired);
        assert!(timeline.is_pending(other));
    }

    #[test]
    fn rescheduling_during_dispatch_uses_due_time() {
        let mut timeline = Timeline::new();
        timeline.schedule(ms(100), "first");
        timeline.advance(ms(250));

        let (_, task) = timeline.pop_due().expect("first is due");
        assert_eq!(task, "first");
        assert_eq!(timeline.now(), ms(100));

        // Re-armed from t=100, so it is due at t=200 within this frame
        let handle = timeline.schedule(ms(100), "second");
        assert_eq!(timeline.remaining(handle), Some(ms(100)));
        assert_eq!(drain(&mut timeline), vec!["second"]);
    }

    #[test]
    fn handles_are_unique() {
        let mut timeline = Timeline::new();
        let a = timeline.schedule(ms(1), "a");
        timeline.cancel(a);
        let b = timeline.schedule(ms(1), "b");
        assert_ne!(a, b);
    }
}
