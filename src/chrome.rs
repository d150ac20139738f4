use raylib::prelude::*;

use crate::constants::*;
use crate::input::Command;
use crate::navigator::{Progress, SlideNavigator};
use crate::palette::*;
use crate::presentation::Presentation;
use crate::state::AutoPlayState;

const PROGRESS_HEIGHT: f32 = 8.0;
const BUTTON_WIDTH: f32 = 220.0;
const BUTTON_HEIGHT: f32 = 64.0;
const BUTTON_MARGIN: f32 = 60.0;
const BUTTONS_Y: f32 = RENDER_HEIGHT as f32 - BUTTON_HEIGHT - 40.0;
const INDICATOR_SPACING: f32 = 36.0;
const INDICATOR_RADIUS: f32 = 8.0;
const INDICATOR_HIT: f32 = 28.0;

pub fn prev_button_rect() -> Rectangle {
    Rectangle::new(BUTTON_MARGIN, BUTTONS_Y, BUTTON_WIDTH, BUTTON_HEIGHT)
}

pub fn next_button_rect() -> Rectangle {
    Rectangle::new(
        RENDER_WIDTH as f32 - BUTTON_MARGIN - BUTTON_WIDTH,
        BUTTONS_Y,
        BUTTON_WIDTH,
        BUTTON_HEIGHT,
    )
}

/// Center of indicator `n` (1-based) in a row of `total`.
pub fn indicator_center(n: u32, total: u32) -> Vector2 {
    let row_width = INDICATOR_SPACING * total.saturating_sub(1) as f32;
    let first_x = (RENDER_WIDTH as f32 - row_width) / 2.0;
    Vector2::new(
        first_x + INDICATOR_SPACING * (n - 1) as f32,
        BUTTONS_Y + BUTTON_HEIGHT / 2.0,
    )
}

fn contains(rect: Rectangle, point: Vector2) -> bool {
    point.x >= rect.x && point.x <= rect.x + rect.width && point.y >= rect.y && point.y <= rect.y + rect.height
}

/// Maps a tap in render coordinates to the button or indicator under it.
pub fn hit_test(point: Vector2, total: u32) -> Option<Command> {
    if contains(prev_button_rect(), point) {
        return Some(Command::Previous);
    }
    if contains(next_button_rect(), point) {
        return Some(Command::Next);
    }
    (1..=total).find_map(|n| {
        let center = indicator_center(n, total);
        let hit = Rectangle::new(
            center.x - INDICATOR_HIT / 2.0,
            center.y - INDICATOR_HIT / 2.0,
            INDICATOR_HIT,
            INDICATOR_HIT,
        );
        contains(hit, point).then_some(Command::GoTo(n))
    })
}

pub fn prev_label(navigator: &SlideNavigator) -> &'static str {
    if navigator.is_first() { "< Start" } else { "< Back" }
}

pub fn next_label(navigator: &SlideNavigator) -> &'static str {
    if navigator.is_last() { "Finish" } else { "Next >" }
}

pub fn help_text(title: &str, progress: Progress) -> String {
    format!(
        "Presentation controls\n\
         \n\
         Keyboard:\n\
         \x20 Left / Right / Up / Down - switch slides\n\
         \x20 Space - next slide\n\
         \x20 Home - first slide,  End - last slide\n\
         \x20 1-9 - jump to slide\n\
         \x20 Ctrl+A - toggle autoplay\n\
         \x20 F11 - fullscreen,  F1 - close this help\n\
         \n\
         Mouse:\n\
         \x20 Back / Next buttons, slide indicators, wheel\n\
         \n\
         Touch:\n\
         \x20 Swipe left / right\n\
         \n\
         Current slide: {}\n\
         Progress: {}%",
        title, progress.percentage
    )
}

pub fn draw(d: &mut RaylibDrawHandle, presentation: &Presentation) {
    let navigator = presentation.navigator();
    let progress = navigator.progress();

    // Progress bar
    d.draw_rectangle_rec(Rectangle::new(0.0, 0.0, RENDER_WIDTH as f32, PROGRESS_HEIGHT), TRACK);
    let fill = RENDER_WIDTH as f32 * progress.current as f32 / progress.total as f32;
    d.draw_rectangle_rec(Rectangle::new(0.0, 0.0, fill, PROGRESS_HEIGHT), ACCENT);

    draw_button(d, prev_button_rect(), prev_label(navigator), !navigator.is_first());
    draw_button(d, next_button_rect(), next_label(navigator), !navigator.is_last());

    for n in 1..=progress.total {
        let center = indicator_center(n, progress.total);
        let color = if n == progress.current { ACCENT } else { TRACK };
        d.draw_circle_v(center, INDICATOR_RADIUS, color);
    }

    let autoplay = match presentation.autoplay_state() {
        AutoPlayState::Stopped => None,
        AutoPlayState::Running => Some("AUTO"),
        AutoPlayState::Paused => Some("AUTO (paused)"),
    };
    if let Some(label) = autoplay {
        d.draw_text(label, RENDER_WIDTH - 300, 30, 28, TEXT_SECONDARY);
    }

    if presentation.help_visible() {
        let text = help_text(&presentation.current_title(), progress);
        draw_panel(d, &text, 900.0, 720.0);
    }

    if presentation.exit_prompt_visible() {
        draw_panel(d, "Leave the presentation?\n\nY / Enter - leave\nN / Esc - stay", 700.0, 280.0);
    }
}

fn draw_button(d: &mut RaylibDrawHandle, rect: Rectangle, label: &str, enabled: bool) {
    let fill = if enabled { CARD_FILL } else { faded(CARD_FILL, 0.5) };
    let text = if enabled { TEXT_PRIMARY } else { DISABLED };
    d.draw_rectangle_rounded(rect, 0.5, 8, fill);
    let text_width = measure_text(label, 30) as f32;
    d.draw_text(
        label,
        (rect.x + (rect.width - text_width) / 2.0) as i32,
        (rect.y + (rect.height - 30.0) / 2.0) as i32,
        30,
        text,
    );
}

fn draw_panel(d: &mut RaylibDrawHandle, text: &str, width: f32, height: f32) {
    d.draw_rectangle(0, 0, RENDER_WIDTH, RENDER_HEIGHT, OVERLAY);
    let panel = Rectangle::new(
        (RENDER_WIDTH as f32 - width) / 2.0,
        (RENDER_HEIGHT as f32 - height) / 2.0,
        width,
        height,
    );
    d.draw_rectangle_rounded(panel, 0.08, 8, CARD_FILL);
    for (i, line) in text.lines().enumerate() {
        d.draw_text(
            line,
            (panel.x + 48.0) as i32,
            (panel.y + 40.0) as i32 + i as i32 * 36,
            28,
            TEXT_PRIMARY,
        );
    }
}
