use std::time::Duration;
use raylib::prelude::*;

use crate::constants::*;
use crate::scheduler::{Scheduler, TimerHandle};

/// Navigation and chrome commands produced from raw input.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Command {
    Next,
    Previous,
    First,
    Last,
    GoTo(u32),
    ToggleAutoPlay,
    ToggleHelp,
    ToggleFullscreen,
}

pub fn command_for_key(key: KeyboardKey, ctrl_down: bool) -> Option<Command> {
    use KeyboardKey::*;

    if ctrl_down {
        return match key {
            KEY_A => Some(Command::ToggleAutoPlay),
            _ => None,
        };
    }

    match key {
        KEY_LEFT | KEY_UP => Some(Command::Previous),
        KEY_RIGHT | KEY_DOWN | KEY_SPACE => Some(Command::Next),
        KEY_HOME => Some(Command::First),
        KEY_END => Some(Command::Last),
        KEY_F1 => Some(Command::ToggleHelp),
        KEY_F11 => Some(Command::ToggleFullscreen),
        KEY_ONE => Some(Command::GoTo(1)),
        KEY_TWO => Some(Command::GoTo(2)),
        KEY_THREE => Some(Command::GoTo(3)),
        KEY_FOUR => Some(Command::GoTo(4)),
        KEY_FIVE => Some(Command::GoTo(5)),
        KEY_SIX => Some(Command::GoTo(6)),
        KEY_SEVEN => Some(Command::GoTo(7)),
        KEY_EIGHT => Some(Command::GoTo(8)),
        KEY_NINE => Some(Command::GoTo(9)),
        _ => None,
    }
}

/// Turns a drag into a slide command. The horizontal travel has to dominate
/// the vertical one and exceed [`SWIPE_THRESHOLD`].
pub fn classify_swipe(start: Vector2, end: Vector2) -> Option<Command> {
    let diff_x = start.x - end.x;
    let diff_y = start.y - end.y;

    if diff_x.abs() > diff_y.abs() && diff_x.abs() > SWIPE_THRESHOLD {
        if diff_x > 0.0 {
            Some(Command::Next) // Swipe left
        } else {
            Some(Command::Previous) // Swipe right
        }
    } else {
        None
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Gesture {
    Swipe(Command),
    Tap(Vector2),
}

/// Remembers where a press started so the release can be classified.
#[derive(Debug, Default)]
pub struct PointerTracker {
    start: Option<Vector2>,
}

impl PointerTracker {
    pub fn press(&mut self, position: Vector2) {
        self.start = Some(position);
    }

    pub fn release(&mut self, position: Vector2) -> Option<Gesture> {
        let start = self.start.take()?;
        match classify_swipe(start, position) {
            Some(command) => Some(Gesture::Swipe(command)),
            None if (start - position).length() <= SWIPE_THRESHOLD => Some(Gesture::Tap(start)),
            None => None,
        }
    }
}

/// Timer payload for the end of a wheel throttle window.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct WheelRelease;

/// Lets one wheel step through per throttle window.
///
/// The first event of a window is held until the window closes and then acted
/// on; everything else arriving inside the window is dropped.
#[derive(Debug, Default)]
pub struct WheelThrottle {
    pending: Option<(TimerHandle, f32)>,
}

impl WheelThrottle {
    /// `delta_y` follows the browser convention: positive scrolls down.
    pub fn on_wheel<T: From<WheelRelease>>(&mut self, delta_y: f32, scheduler: &mut impl Scheduler<T>) {
        if self.pending.is_some() {
            return;
        }
        let handle = scheduler.schedule(Duration::from_millis(WHEEL_THROTTLE_MS), T::from(WheelRelease));
        self.pending = Some((handle, delta_y));
    }

    pub fn on_timer(&mut self, handle: TimerHandle) -> Option<Command> {
        match self.pending {
            Some((pending, delta_y)) if pending == handle => {
                self.pending = None;
                if delta_y > 0.0 {
                    Some(Command::Next)
                } else if delta_y < 0.0 {
                    Some(Command::Previous)
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum VisibilityChange {
    Hidden,
    Visible,
}

/// Edge detector over the window's hidden/minimized flag.
#[derive(Debug, Default)]
pub struct VisibilityWatch {
    hidden: bool,
}

impl VisibilityWatch {
    pub fn update(&mut self, hidden: bool) -> Option<VisibilityChange> {
        if hidden == self.hidden {
            return None;
        }
        self.hidden = hidden;
        Some(if hidden {
            VisibilityChange::Hidden
        } else {
            VisibilityChange::Visible
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::Timeline;

    fn v(x: f32, y: f32) -> Vector2 {
        Vector2::new(x, y)
    }

    #[test]
    fn arrow_keys_navigate() {
        use KeyboardKey::*;
        assert_eq!(command_for_key(KEY_RIGHT, false), Some(Command::Next));
        assert_eq!(command_for_key(KEY_DOWN, false), Some(Command::Next));
        assert_eq!(command_for_key(KEY_SPACE, false), Some(Command::Next));
        assert_eq!(command_for_key(KEY_LEFT, false), Some(Command::Previous));
        assert_eq!(command_for_key(KEY_UP, false), Some(Command::Previous));
        assert_eq!(command_for_key(KEY_HOME, false), Some(Command::First));
        assert_eq!(command_for_key(KEY_END, false), Some(Command::Last));
        assert_eq!(command_for_key(KEY_SEVEN, false), Some(Command::GoTo(7)));
    }

    #[test]
    fn ctrl_a_toggles_autoplay_only_with_ctrl() {
        assert_eq!(command_for_key(KeyboardKey::KEY_A, true), Some(Command::ToggleAutoPlay));
        assert_eq!(command_for_key(KeyboardKey::KEY_A, false), None);
        assert_eq!(command_for_key(KeyboardKey::KEY_RIGHT, true), None);
    }

    #[test]
    fn swipe_left_is_next() {
        assert_eq!(classify_swipe(v(300.0, 100.0), v(200.0, 120.0)), Some(Command::Next));
    }

    #[test]
    fn swipe_right_is_previous() {
        assert_eq!(classify_swipe(v(100.0, 100.0), v(220.0, 90.0)), Some(Command::Previous));
    }

    #[test]
    fn short_or_vertical_drag_is_not_a_swipe() {
        assert_eq!(classify_swipe(v(100.0, 100.0), v(150.0, 100.0)), None); // exactly the threshold
        assert_eq!(classify_swipe(v(100.0, 100.0), v(180.0, 300.0)), None);
    }

    #[test]
    fn release_without_travel_is_a_tap() {
        let mut pointer = PointerTracker::default();
        assert_eq!(pointer.release(v(5.0, 5.0)), None);

        pointer.press(v(10.0, 10.0));
        assert_eq!(pointer.release(v(12.0, 11.0)), Some(Gesture::Tap(v(10.0, 10.0))));

        pointer.press(v(400.0, 10.0));
        assert_eq!(pointer.release(v(100.0, 10.0)), Some(Gesture::Swipe(Command::Next)));

        // Long vertical drag: neither swipe nor tap
        pointer.press(v(10.0, 10.0));
        assert_eq!(pointer.release(v(10.0, 400.0)), None);
    }

    #[test]
    fn wheel_is_throttled_to_first_event() {
        let mut timeline: Timeline<WheelRelease> = Timeline::new();
        let mut wheel = WheelThrottle::default();

        wheel.on_wheel(-3.0, &mut timeline);
        wheel.on_wheel(5.0, &mut timeline);
        wheel.on_wheel(5.0, &mut timeline);
        assert_eq!(timeline.pending_count(), 1);

        timeline.advance(Duration::from_millis(WHEEL_THROTTLE_MS));
        let (handle, _) = timeline.pop_due().expect("release is due");
        assert_eq!(wheel.on_timer(handle), Some(Command::Previous));

        // Window closed, the next event opens a new one
        wheel.on_wheel(1.0, &mut timeline);
        timeline.advance(Duration::from_millis(WHEEL_THROTTLE_MS));
        let (handle, _) = timeline.pop_due().expect("release is due");
        assert_eq!(wheel.on_timer(handle), Some(Command::Next));
        assert_eq!(wheel.on_timer(handle), None);
    }

    #[test]
    fn visibility_reports_edges_only() {
        let mut watch = VisibilityWatch::default();
        assert_eq!(watch.update(false), None);
        assert_eq!(watch.update(true), Some(VisibilityChange::Hidden));
        assert_eq!(watch.update(true), None);
        assert_eq!(watch.update(false), Some(VisibilityChange::Visible));
    }
}
