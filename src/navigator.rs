use crate::state::Direction;

/// A change of the current slide, reported to whoever renders the deck.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Transition {
    pub previous: u32,
    pub current: u32,
    pub direction: Direction,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Progress {
    pub current: u32,
    pub total: u32,
    pub percentage: u32,
}

/// Single source of truth for which slide is showing.
///
/// Slides are numbered from 1. Out-of-range and redundant jumps are ignored
/// rather than reported, so input adapters can fire commands freely.
#[derive(Debug)]
pub struct SlideNavigator {
    current: u32,
    total: u32,
}

impl SlideNavigator {
    /// Creates a navigator positioned on slide 1. `total` is clamped to at least one slide.
    pub fn new(total: u32) -> Self {
        Self {
            current: 1,
            total: total.max(1),
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn is_first(&self) -> bool {
        self.current == 1
    }

    pub fn is_last(&self) -> bool {
        self.current == self.total
    }

    /// Moves to slide `n` and returns the transition, or `None` when `n` is
    /// out of range or already showing.
    pub fn go_to_slide(&mut self, n: u32) -> Option<Transition> {
        if n < 1 || n > self.total || n == self.current {
            return None;
        }

        let previous = self.current;
        let direction = if n > previous {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.current = n;

        Some(Transition {
            previous,
            current: n,
            direction,
        })
    }

    pub fn next(&mut self) -> Option<Transition> {
        if self.is_last() {
            return None;
        }
        self.go_to_slide(self.current + 1)
    }

    pub fn previous(&mut self) -> Option<Transition> {
        if self.is_first() {
            return None;
        }
        self.go_to_slide(self.current - 1)
    }

    pub fn progress(&self) -> Progress {
        let percentage = (self.current as f64 / self.total as f64 * 100.0).round() as u32;
        Progress {
            current: self.current,
            total: self.total,
            percentage,
        }
    }
}
