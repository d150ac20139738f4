use rand::Rng;
use raylib::ease;
use raylib::prelude::*;
use crate::constants::*;
use crate::deck::SlideSpec;
use crate::layout::Layout;
use crate::palette::*;
use crate::reveal::{self, Pose};

const BACKDROP_DRIFT: f32 = 40.0;        // Max travel of the backdrop glow (pixels)
const BACKDROP_DRIFT_DURATION: f32 = 12.0;

pub struct SlideView {
    spec: &'static SlideSpec,
    layout: Layout,

    pub visible: bool,

    offset_x: f32,
    animation_timer: f32,
    pub is_animating: bool,
    tween_offset: Option<ease::Tween>,

    // Milliseconds since the element choreography started
    reveal_clock: Option<f32>,

    // Slow drift of the backdrop glow, direction picked at random per slide
    drift: Vector2,
    drift_end: Vector2,
    drift_timer: f32,
}

impl SlideView {
    pub fn new(spec: &'static SlideSpec) -> Self {
        let drift_end = match rand::rng().random_range(0..4) {
            0 => Vector2::new(BACKDROP_DRIFT, 0.0),  // left-to-right
            1 => Vector2::new(-BACKDROP_DRIFT, 0.0), // right-to-left
            2 => Vector2::new(0.0, BACKDROP_DRIFT),  // top-to-bottom
            _ => Vector2::new(0.0, -BACKDROP_DRIFT), // bottom-to-top
        };

        Self {
            spec,
            layout: Layout::compute(spec),
            visible: false,
            offset_x: 0.0,
            animation_timer: 0.0,
            is_animating: false,
            tween_offset: None,
            reveal_clock: None,
            drift: Vector2::new(0.0, 0.0),
            drift_end,
            drift_timer: 0.0,
        }
    }

    pub fn spec(&self) -> &'static SlideSpec {
        self.spec
    }

    #[cfg(test)]
    pub fn offset_x(&self) -> f32 {
        self.offset_x
    }

    #[cfg(test)]
    pub fn reveal_elapsed_ms(&self) -> Option<f32> {
        self.reveal_clock
    }

    /// Hides the slide and parks it `offset_x` pixels from its resting place.
    pub fn park(&mut self, offset_x: f32) {
        self.visible = false;
        self.is_animating = false;
        self.tween_offset = None;
        self.reveal_clock = None;
        self.offset_x = offset_x;
    }

    /// Shows the slide and eases it back to its resting place.
    pub fn activate(&mut self) {
        self.visible = true;
        self.animation_timer = 0.0;
        self.is_animating = true;
        self.tween_offset = Some(ease::Tween::new(ease::cubic_out, self.offset_x, 0.0, SLIDE_ENTER_DURATION));
    }

    pub fn start_reveal(&mut self) {
        self.reveal_clock = Some(0.0);
    }

    pub fn update(&mut self, dt: f32) {
        if !self.visible {
            return;
        }

        if let Some(clock) = self.reveal_clock.as_mut() {
            *clock += dt * 1000.0;
        }

        self.drift_timer = (self.drift_timer + dt).min(BACKDROP_DRIFT_DURATION);
        let t = self.drift_timer / BACKDROP_DRIFT_DURATION;
        self.drift = Vector2::new(self.drift_end.x * t, self.drift_end.y * t);

        if !self.is_animating {
            return;
        }
        if let Some(tween) = self.tween_offset.as_mut() {
            self.offset_x = tween.apply(dt);
        }

        self.animation_timer += dt;
        if self.animation_timer >= SLIDE_ENTER_DURATION {
            self.is_animating = false;
            self.tween_offset = None;
            self.offset_x = 0.0;
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        if !self.visible {
            return;
        }

        let x = self.offset_x;

        // Backdrop glow
        d.draw_circle(
            (RENDER_WIDTH as f32 * 0.8 + self.drift.x) as i32,
            (RENDER_HEIGHT as f32 * 0.25 + self.drift.y) as i32,
            420.0,
            BACKDROP_GLOW,
        );

        d.draw_text(self.spec.title, (x + 160.0) as i32, 90, 72, TEXT_PRIMARY);
        d.draw_text(self.spec.subtitle, (x + 160.0) as i32, 180, 36, TEXT_SECONDARY);

        for (i, line) in self.spec.body.iter().enumerate() {
            let y = 300 + i as i32 * 80;
            d.draw_circle((x + 176.0) as i32, y + 18, 8.0, ACCENT);
            d.draw_text(line, (x + 210.0) as i32, y, 40, TEXT_PRIMARY);
        }

        for (group, cells) in self.spec.groups.iter().zip(&self.layout.cells) {
            for (i, (label, cell)) in group.labels.iter().zip(cells).enumerate() {
                let pose = reveal::pose(group, i, self.reveal_clock);
                draw_element(d, label, *cell, x, pose);
            }
        }
    }
}

fn draw_element(d: &mut RaylibDrawHandle, label: &str, cell: Rectangle, offset_x: f32, pose: Pose) {
    if pose.opacity <= 0.0 {
        return;
    }

    let width = cell.width * pose.scale;
    let height = cell.height * pose.scale;
    let rect = Rectangle::new(
        cell.x + offset_x + pose.offset.x + (cell.width - width) * 0.5,
        cell.y + pose.offset.y + (cell.height - height) * 0.5,
        width,
        height,
    );

    d.draw_rectangle_rounded(rect, 0.2, 8, faded(CARD_FILL, pose.opacity));
    d.draw_rectangle_rec(
        Rectangle::new(rect.x + 12.0, rect.y + 14.0, 6.0, rect.height - 28.0),
        faded(ACCENT, pose.opacity),
    );

    let font_size = (28.0 * pose.scale) as i32;
    let line_height = 40.0 * pose.scale;
    let line_count = label.lines().count() as f32;
    let mut y = rect.y + (rect.height - line_count * line_height) * 0.5 + (line_height - font_size as f32) * 0.5;
    for line in label.lines() {
        let text_width = measure_text(line, font_size) as f32;
        let text_x = rect.x + (rect.width - text_width) * 0.5;
        d.draw_text(line, text_x as i32, y as i32, font_size, faded(TEXT_PRIMARY, pose.opacity));
        y += line_height;
    }
}
