use std::time::Duration;
use raylib::prelude::*;
use tracing::debug;

use crate::constants::*;
use crate::deck::Deck;
use crate::scheduler::{Scheduler, TimerHandle};
use crate::slide::SlideView;
use crate::state::Direction;

/// Delayed steps of a slide's entrance.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum StageCue {
    Activate(u32),
    Reveal(u32),
}

/// Visual side of the deck: reacts to transitions with the enter animation
/// and the element choreography of the target slide.
pub struct Stage {
    slides: Vec<SlideView>,
    target: u32,
    cue: Option<TimerHandle>,
}

impl Stage {
    pub fn new(deck: &Deck) -> Self {
        Self {
            slides: deck.slides().iter().map(SlideView::new).collect(),
            target: 0,
            cue: None,
        }
    }

    #[cfg(test)]
    pub fn target(&self) -> u32 {
        self.target
    }

    #[cfg(test)]
    pub fn slide(&self, n: u32) -> Option<&SlideView> {
        self.slides.get(n.checked_sub(1)? as usize)
    }

    /// Parks every slide on the side matching `direction` and cues the
    /// activation of slide `n`.
    pub fn show<T: From<StageCue>>(&mut self, n: u32, direction: Direction, scheduler: &mut impl Scheduler<T>) {
        let incoming = match direction {
            Direction::Forward => SLIDE_OFFSET,
            Direction::Backward => -SLIDE_OFFSET,
        };

        for (i, slide) in self.slides.iter_mut().enumerate() {
            let offset = if i as u32 + 1 == n { incoming } else { -incoming };
            slide.park(offset);
        }

        debug!(from = self.target, to = n, ?direction, "stage transition");
        self.target = n;
        self.cue(scheduler, StageCue::Activate(n), SLIDE_ACTIVATE_DELAY_MS);
    }

    pub fn on_cue<T: From<StageCue>>(&mut self, handle: TimerHandle, cue: StageCue, scheduler: &mut impl Scheduler<T>) {
        if self.cue != Some(handle) {
            return;
        }
        self.cue = None;

        match cue {
            StageCue::Activate(n) => {
                if let Some(slide) = self.slide_mut(n) {
                    slide.activate();
                    debug!(slide = n, "slide activated");
                    self.cue(scheduler, StageCue::Reveal(n), ELEMENT_REVEAL_DELAY_MS);
                }
            }
            StageCue::Reveal(n) => {
                if let Some(slide) = self.slide_mut(n) {
                    slide.start_reveal();
                    debug!(slide = n, duration_ms = slide.spec().choreography_ms(), "element choreography started");
                }
            }
        }
    }

    fn slide_mut(&mut self, n: u32) -> Option<&mut SlideView> {
        self.slides.get_mut(n.checked_sub(1)? as usize)
    }

    pub fn update(&mut self, dt: f32) {
        for slide in self.slides.iter_mut() {
            slide.update(dt);
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        for slide in self.slides.iter() {
            // SlideView::draw skips hidden slides
            slide.draw(d);
        }
    }

    fn cue<T: From<StageCue>>(&mut self, scheduler: &mut impl Scheduler<T>, cue: StageCue, delay_ms: u64) {
        if let Some(handle) = self.cue.take() {
            scheduler.cancel(handle);
        }
        self.cue = Some(scheduler.schedule(Duration::from_millis(delay_ms), T::from(cue)));
    }
}
