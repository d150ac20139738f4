use std::time::Duration;
use tracing::{debug, info};

use crate::navigator::{SlideNavigator, Transition};
use crate::scheduler::{Scheduler, TimerHandle};
use crate::state::AutoPlayState;

/// What a pending autoplay timer does when it fires.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AutoPlayTimer {
    Advance, // Move to the next slide
    Settle,  // Resume after a manual jump
}

/// Advances a borrowed [`SlideNavigator`] on a fixed cadence.
///
/// The controller owns at most one pending timer at any instant: every state
/// change cancels the current handle before a new one is armed.
#[derive(Debug)]
pub struct AutoPlayController {
    interval: Duration,
    settle_delay: Duration,
    auto_playing: bool,
    paused: bool,
    pending: Option<TimerHandle>,
}

impl AutoPlayController {
    pub fn new(interval: Duration, settle_delay: Duration) -> Self {
        Self {
            interval,
            settle_delay,
            auto_playing: false,
            paused: false,
            pending: None,
        }
    }

    pub fn is_auto_playing(&self) -> bool {
        self.auto_playing
    }

    #[cfg(test)]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[cfg(test)]
    pub fn pending_timer(&self) -> Option<TimerHandle> {
        self.pending
    }

    pub fn state(&self) -> AutoPlayState {
        match (self.auto_playing, self.paused) {
            (false, _) => AutoPlayState::Stopped,
            (true, false) => AutoPlayState::Running,
            (true, true) => AutoPlayState::Paused,
        }
    }

    /// Starts autoplay from `Stopped`. Already running or paused: no-op.
    pub fn start<T: From<AutoPlayTimer>>(&mut self, scheduler: &mut impl Scheduler<T>) {
        if self.auto_playing {
            return;
        }
        self.auto_playing = true;
        self.paused = false;
        self.arm(scheduler, AutoPlayTimer::Advance, self.interval);
        info!(interval_ms = self.interval.as_millis() as u64, "autoplay started");
    }

    pub fn stop<T: From<AutoPlayTimer>>(&mut self, scheduler: &mut impl Scheduler<T>) {
        self.disarm(scheduler);
        if self.auto_playing {
            info!("autoplay stopped");
        }
        self.auto_playing = false;
        self.paused = false;
    }

    pub fn pause<T: From<AutoPlayTimer>>(&mut self, scheduler: &mut impl Scheduler<T>) {
        if !self.auto_playing {
            return;
        }
        self.disarm(scheduler);
        if !self.paused {
            info!("autoplay paused");
        }
        self.paused = true;
    }

    /// Re-arms a full interval; partial intervals are not carried over.
    pub fn resume<T: From<AutoPlayTimer>>(&mut self, scheduler: &mut impl Scheduler<T>) {
        if !(self.auto_playing && self.paused) {
            return;
        }
        self.paused = false;
        self.arm(scheduler, AutoPlayTimer::Advance, self.interval);
        info!("autoplay resumed");
    }

    /// Manual jump. While autoplay is armed this pauses it and restarts the
    /// settle delay, so a stale advance can not override the user.
    pub fn go_to_slide<T: From<AutoPlayTimer>>(
        &mut self,
        navigator: &mut SlideNavigator,
        scheduler: &mut impl Scheduler<T>,
        n: u32,
    ) -> Option<Transition> {
        let transition = navigator.go_to_slide(n);
        self.settle(scheduler);
        transition
    }

    /// Next at the last slide leaves autoplay untouched.
    pub fn next<T: From<AutoPlayTimer>>(
        &mut self,
        navigator: &mut SlideNavigator,
        scheduler: &mut impl Scheduler<T>,
    ) -> Option<Transition> {
        if navigator.is_last() {
            return None;
        }
        let transition = navigator.next();
        self.settle(scheduler);
        transition
    }

    pub fn previous<T: From<AutoPlayTimer>>(
        &mut self,
        navigator: &mut SlideNavigator,
        scheduler: &mut impl Scheduler<T>,
    ) -> Option<Transition> {
        if navigator.is_first() {
            return None;
        }
        let transition = navigator.previous();
        self.settle(scheduler);
        transition
    }

    /// Handles a fired timer. Handles other than the pending one are stale and ignored.
    pub fn on_timer<T: From<AutoPlayTimer>>(
        &mut self,
        handle: TimerHandle,
        timer: AutoPlayTimer,
        navigator: &mut SlideNavigator,
        scheduler: &mut impl Scheduler<T>,
    ) -> Option<Transition> {
        if self.pending != Some(handle) {
            debug!(?handle, ?timer, "ignoring stale autoplay timer");
            return None;
        }
        self.pending = None;

        match timer {
            AutoPlayTimer::Settle => {
                self.resume(scheduler);
                None
            }
            AutoPlayTimer::Advance => {
                if self.state() != AutoPlayState::Running {
                    return None;
                }
                if navigator.is_last() {
                    self.stop(scheduler);
                    info!("presentation finished");
                    return None;
                }

                let transition = navigator.next();
                if navigator.is_last() {
                    self.stop(scheduler);
                    info!("presentation finished");
                } else {
                    self.arm(scheduler, AutoPlayTimer::Advance, self.interval);
                }
                transition
            }
        }
    }

    fn settle<T: From<AutoPlayTimer>>(&mut self, scheduler: &mut impl Scheduler<T>) {
        if !self.auto_playing {
            return;
        }
        self.pause(scheduler);
        self.arm(scheduler, AutoPlayTimer::Settle, self.settle_delay);
        debug!(settle_ms = self.settle_delay.as_millis() as u64, "autoplay settling after manual jump");
    }

    fn arm<T: From<AutoPlayTimer>>(
        &mut self,
        scheduler: &mut impl Scheduler<T>,
        timer: AutoPlayTimer,
        delay: Duration,
    ) {
        self.disarm(scheduler);
        self.pending = Some(scheduler.schedule(delay, T::from(timer)));
    }

    fn disarm<T>(&mut self, scheduler: &mut impl Scheduler<T>) {
        if let Some(handle) = self.pending.take() {
            scheduler.cancel(handle);
        }
    }
}
