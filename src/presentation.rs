use std::time::Duration;
use raylib::prelude::*;
use tracing::{debug, info};

use crate::autoplay::{AutoPlayController, AutoPlayTimer};
use crate::chrome;
use crate::config::Config;
use crate::deck::Deck;
use crate::input::{Command, Gesture, PointerTracker, VisibilityChange, VisibilityWatch, WheelRelease, WheelThrottle};
use crate::navigator::{SlideNavigator, Transition};
use crate::scheduler::Timeline;
use crate::stage::{Stage, StageCue};
use crate::state::{AutoPlayState, Direction};

/// Everything the shared timeline can fire.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Task {
    AutoPlay(AutoPlayTimer),
    Wheel(WheelRelease),
    Stage(StageCue),
}

impl From<AutoPlayTimer> for Task {
    fn from(timer: AutoPlayTimer) -> Self {
        Task::AutoPlay(timer)
    }
}

impl From<WheelRelease> for Task {
    fn from(release: WheelRelease) -> Self {
        Task::Wheel(release)
    }
}

impl From<StageCue> for Task {
    fn from(cue: StageCue) -> Self {
        Task::Stage(cue)
    }
}

/// One running deck: navigation state, autoplay, input state and the stage,
/// all driven by a single virtual-time timeline.
pub struct Presentation {
    deck: Deck,
    navigator: SlideNavigator,
    autoplay: AutoPlayController,
    timeline: Timeline<Task>,
    stage: Stage,
    wheel: WheelThrottle,
    pointer: PointerTracker,
    visibility: VisibilityWatch,
    help_visible: bool,
    exit_prompt: bool,
}

impl Presentation {
    pub fn new(deck: Deck, config: &Config) -> Self {
        let navigator = SlideNavigator::new(deck.len());
        let stage = Stage::new(&deck);

        let mut presentation = Self {
            deck,
            navigator,
            autoplay: AutoPlayController::new(config.interval, config.settle_delay),
            timeline: Timeline::new(),
            stage,
            wheel: WheelThrottle::default(),
            pointer: PointerTracker::default(),
            visibility: VisibilityWatch::default(),
            help_visible: false,
            exit_prompt: false,
        };

        presentation.navigator.go_to_slide(config.start_slide);
        let current = presentation.navigator.current();
        presentation.stage.show(current, Direction::Forward, &mut presentation.timeline);

        if config.autoplay {
            presentation.autoplay.start(&mut presentation.timeline);
        }

        info!(slides = presentation.navigator.total(), start = current, "presentation loaded");
        presentation
    }

    pub fn navigator(&self) -> &SlideNavigator {
        &self.navigator
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn autoplay_state(&self) -> AutoPlayState {
        self.autoplay.state()
    }

    pub fn help_visible(&self) -> bool {
        self.help_visible
    }

    pub fn exit_prompt_visible(&self) -> bool {
        self.exit_prompt
    }

    pub fn current_title(&self) -> String {
        self.deck.title(self.navigator.current())
    }

    /// Applies a command. Fullscreen is left to the window owner.
    pub fn handle(&mut self, command: Command) -> Option<Transition> {
        debug!(?command, "command");
        let transition = match command {
            Command::Next => self.autoplay.next(&mut self.navigator, &mut self.timeline),
            Command::Previous => self.autoplay.previous(&mut self.navigator, &mut self.timeline),
            Command::First => self.autoplay.go_to_slide(&mut self.navigator, &mut self.timeline, 1),
            Command::Last => {
                let last = self.navigator.total();
                self.autoplay.go_to_slide(&mut self.navigator, &mut self.timeline, last)
            }
            Command::GoTo(n) => self.autoplay.go_to_slide(&mut self.navigator, &mut self.timeline, n),
            Command::ToggleAutoPlay => {
                if self.autoplay.is_auto_playing() {
                    self.autoplay.stop(&mut self.timeline);
                } else {
                    self.autoplay.start(&mut self.timeline);
                }
                return None;
            }
            Command::ToggleHelp => {
                self.help_visible = !self.help_visible;
                return None;
            }
            Command::ToggleFullscreen => return None,
        };

        self.present(transition)
    }

    /// Wheel delta in the browser convention (positive scrolls down).
    pub fn on_wheel(&mut self, delta_y: f32) {
        self.wheel.on_wheel(delta_y, &mut self.timeline);
    }

    pub fn on_pointer_pressed(&mut self, position: Vector2) {
        self.pointer.press(position);
    }

    pub fn on_pointer_released(&mut self, position: Vector2) -> Option<Transition> {
        let command = match self.pointer.release(position)? {
            Gesture::Swipe(command) => command,
            Gesture::Tap(point) => chrome::hit_test(point, self.navigator.total())?,
        };
        self.handle(command)
    }

    pub fn on_visibility(&mut self, hidden: bool) {
        match self.visibility.update(hidden) {
            Some(VisibilityChange::Hidden) => self.autoplay.pause(&mut self.timeline),
            Some(VisibilityChange::Visible) => self.autoplay.resume(&mut self.timeline),
            None => {}
        }
    }

    /// Returns true when the window may close right away. Mid-deck the exit
    /// prompt is raised instead.
    pub fn request_close(&mut self) -> bool {
        let progress = self.navigator.progress();
        if progress.current > 1 && progress.current < progress.total {
            self.exit_prompt = true;
            false
        } else {
            true
        }
    }

    pub fn cancel_close(&mut self) {
        self.exit_prompt = false;
    }

    /// Advances virtual time by one frame and dispatches every due task.
    pub fn tick(&mut self, elapsed: Duration) -> Vec<Transition> {
        self.timeline.advance(elapsed);

        let mut transitions = Vec::new();
        while let Some((handle, task)) = self.timeline.pop_due() {
            match task {
                Task::AutoPlay(timer) => {
                    let transition = self.autoplay.on_timer(handle, timer, &mut self.navigator, &mut self.timeline);
                    transitions.extend(self.present(transition));
                }
                Task::Wheel(_) => {
                    if let Some(command) = self.wheel.on_timer(handle) {
                        transitions.extend(self.handle(command));
                    }
                }
                Task::Stage(cue) => self.stage.on_cue(handle, cue, &mut self.timeline),
            }
        }

        self.stage.update(elapsed.as_secs_f32());
        transitions
    }

    fn present(&mut self, transition: Option<Transition>) -> Option<Transition> {
        let transition = transition?;
        debug!(
            from = transition.previous,
            to = transition.current,
            direction = ?transition.direction,
            "slide transition"
        );
        self.stage.show(transition.current, transition.direction, &mut self.timeline);
        Some(transition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;

    fn config() -> Config {
        Config {
            autoplay: false,
            interval: Duration::from_millis(1000),
            settle_delay: Duration::from_millis(DEFAULT_SETTLE_DELAY_MS),
            start_slide: 1,
            width: RENDER_WIDTH / 2,
            height: RENDER_HEIGHT / 2,
            fullscreen: false,
            log_level: "info".to_string(),
        }
    }

    fn run_ms(presentation: &mut Presentation, ms: u64) -> Vec<Transition> {
        let mut transitions = Vec::new();
        // 10 ms frames keep every delay in the deck on a frame boundary
        for _ in 0..ms / 10 {
            transitions.extend(presentation.tick(Duration::from_millis(10)));
        }
        transitions
    }

    #[test]
    fn keyboard_commands_drive_navigation() {
        let mut p = Presentation::new(Deck::builtin(), &config());
        assert_eq!(p.navigator().current(), 1);

        p.handle(Command::Last);
        assert_eq!(p.navigator().current(), TOTAL_SLIDES);
        assert_eq!(p.handle(Command::Next), None);

        let back = p.handle(Command::First).expect("jump to first");
        assert_eq!(back.direction, Direction::Backward);
        assert_eq!(p.handle(Command::Previous), None);
        assert_eq!(p.handle(Command::GoTo(99)), None);
    }

    #[test]
    fn transition_cues_the_stage() {
        let mut p = Presentation::new(Deck::builtin(), &config());
        p.handle(Command::GoTo(4));
        assert_eq!(p.stage().target(), 4);

        run_ms(&mut p, 100);
        assert!(p.stage().slide(4).unwrap().visible);
        assert!(!p.stage().slide(1).unwrap().visible);
    }

    #[test]
    fn start_slide_is_honoured() {
        let mut cfg = config();
        cfg.start_slide = 5;
        let p = Presentation::new(Deck::builtin(), &cfg);
        assert_eq!(p.navigator().current(), 5);
        assert_eq!(p.stage().target(), 5);
    }

    #[test]
    fn autoplay_advances_and_manual_jump_settles() {
        let mut cfg = config();
        cfg.autoplay = true;
        let mut p = Presentation::new(Deck::builtin(), &cfg);
        assert_eq!(p.autoplay_state(), AutoPlayState::Running);

        let fired = run_ms(&mut p, 1000);
        assert_eq!(fired.len(), 1);
        assert_eq!(p.navigator().current(), 2);

        p.handle(Command::Next);
        assert_eq!(p.autoplay_state(), AutoPlayState::Paused);

        run_ms(&mut p, 1000);
        assert_eq!(p.autoplay_state(), AutoPlayState::Running);
        assert_eq!(p.navigator().current(), 3);

        run_ms(&mut p, 1000);
        assert_eq!(p.navigator().current(), 4);
    }

    #[test]
    fn ctrl_a_toggles_autoplay() {
        let mut p = Presentation::new(Deck::builtin(), &config());
        p.handle(Command::ToggleAutoPlay);
        assert_eq!(p.autoplay_state(), AutoPlayState::Running);
        p.handle(Command::ToggleAutoPlay);
        assert_eq!(p.autoplay_state(), AutoPlayState::Stopped);
    }

    #[test]
    fn hidden_window_pauses_autoplay() {
        let mut cfg = config();
        cfg.autoplay = true;
        let mut p = Presentation::new(Deck::builtin(), &cfg);

        p.on_visibility(true);
        assert_eq!(p.autoplay_state(), AutoPlayState::Paused);
        run_ms(&mut p, 3000);
        assert_eq!(p.navigator().current(), 1);

        p.on_visibility(false);
        assert_eq!(p.autoplay_state(), AutoPlayState::Running);
        run_ms(&mut p, 1000);
        assert_eq!(p.navigator().current(), 2);
    }

    #[test]
    fn wheel_steps_after_throttle() {
        let mut p = Presentation::new(Deck::builtin(), &config());
        p.on_wheel(3.0);
        p.on_wheel(3.0);
        assert_eq!(p.navigator().current(), 1);

        run_ms(&mut p, WHEEL_THROTTLE_MS);
        assert_eq!(p.navigator().current(), 2);

        p.on_wheel(-1.0);
        run_ms(&mut p, WHEEL_THROTTLE_MS);
        assert_eq!(p.navigator().current(), 1);
    }

    #[test]
    fn swipe_and_tap_navigate() {
        let mut p = Presentation::new(Deck::builtin(), &config());

        p.on_pointer_pressed(Vector2::new(900.0, 500.0));
        let transition = p.on_pointer_released(Vector2::new(600.0, 520.0));
        assert_eq!(transition.map(|t| t.current), Some(2));

        let indicator = chrome::indicator_center(9, TOTAL_SLIDES);
        p.on_pointer_pressed(indicator);
        p.on_pointer_released(indicator);
        assert_eq!(p.navigator().current(), 9);
    }

    #[test]
    fn close_mid_deck_asks_first() {
        let mut p = Presentation::new(Deck::builtin(), &config());
        assert!(p.request_close());

        p.handle(Command::GoTo(5));
        assert!(!p.request_close());
        assert!(p.exit_prompt_visible());
        p.cancel_close();
        assert!(!p.exit_prompt_visible());

        p.handle(Command::Last);
        assert!(p.request_close());
    }

    #[test]
    fn help_toggles_and_names_current_slide() {
        let mut p = Presentation::new(Deck::builtin(), &config());
        p.handle(Command::ToggleHelp);
        assert!(p.help_visible());
        assert_eq!(p.current_title(), "AI Agents");
        p.handle(Command::ToggleHelp);
        assert!(!p.help_visible());
    }
}
