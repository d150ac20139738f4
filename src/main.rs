use std::time::Duration;
use anyhow::{Result, anyhow};
use clap::Parser;
use raylib::prelude::*;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod autoplay;
mod chrome;
mod config;
mod constants;
mod deck;
mod input;
mod layout;
mod navigator;
mod palette;
mod presentation;
mod reveal;
mod scheduler;
mod slide;
mod stage;
mod state;

use crate::config::Args;
use crate::constants::*;
use crate::deck::Deck;
use crate::input::{Command, command_for_key};
use crate::presentation::Presentation;

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&args.log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let deck = Deck::builtin();
    let config = args.into_config(deck.len())?;

    let (mut rl, thread) = raylib::init()
        .size(config.width, config.height)
        .title("Deck Viewer")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);
    // Esc goes through the exit prompt like the close button
    rl.set_exit_key(None);

    if config.fullscreen {
        rl.toggle_fullscreen();
    }

    let mut framebuffer = rl
        .load_render_texture(&thread, RENDER_WIDTH as u32, RENDER_HEIGHT as u32)
        .map_err(|e| anyhow!("failed to create render texture: {e:?}"))?;

    let mut presentation = Presentation::new(deck, &config);

    // The close flag stays raised once set, so only its rising edge counts
    let mut close_was_requested = false;

    // --- Main Loop ---
    loop {
        let close_requested = rl.window_should_close();
        let mut wants_close = close_requested && !close_was_requested;
        close_was_requested = close_requested;

        // Map window coordinates onto the fixed-size render target
        let scale = Vector2::new(
            RENDER_WIDTH as f32 / rl.get_screen_width() as f32,
            RENDER_HEIGHT as f32 / rl.get_screen_height() as f32,
        );

        // --- Input ---
        if presentation.exit_prompt_visible() {
            if rl.is_key_pressed(KeyboardKey::KEY_Y) || rl.is_key_pressed(KeyboardKey::KEY_ENTER) {
                info!("presentation closed");
                break;
            }
            if rl.is_key_pressed(KeyboardKey::KEY_N) || rl.is_key_pressed(KeyboardKey::KEY_ESCAPE) {
                presentation.cancel_close();
            }
        } else {
            let ctrl_down = rl.is_key_down(KeyboardKey::KEY_LEFT_CONTROL) || rl.is_key_down(KeyboardKey::KEY_RIGHT_CONTROL);
            while let Some(key) = rl.get_key_pressed() {
                if key == KeyboardKey::KEY_ESCAPE {
                    wants_close = true;
                    continue;
                }
                match command_for_key(key, ctrl_down) {
                    Some(Command::ToggleFullscreen) => rl.toggle_fullscreen(),
                    Some(command) => {
                        presentation.handle(command);
                    }
                    None => {}
                }
            }

            let wheel = rl.get_mouse_wheel_move();
            if wheel != 0.0 {
                // raylib reports scrolling up as positive
                presentation.on_wheel(-wheel);
            }

            let mouse = rl.get_mouse_position();
            let mouse = Vector2::new(mouse.x * scale.x, mouse.y * scale.y);
            if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
                presentation.on_pointer_pressed(mouse);
            }
            if rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
                presentation.on_pointer_released(mouse);
            }
        }

        if wants_close && !presentation.exit_prompt_visible() && presentation.request_close() {
            info!("presentation closed");
            break;
        }

        presentation.on_visibility(rl.is_window_minimized());

        // --- Update Logic ---
        let elapsed = Duration::from_secs_f32(rl.get_frame_time().max(0.0));
        for transition in presentation.tick(elapsed) {
            debug!(slide = transition.current, "autoplay advanced");
        }

        // --- Render into fixed size "framebuffer" ---
        rl.draw_texture_mode(&thread, &mut framebuffer, |mut tmd| {
            let mut d = tmd.begin_drawing(&thread);
            d.clear_background(palette::BACKGROUND);
            presentation.stage().draw(&mut d);
            chrome::draw(&mut d, &presentation);
        });

        // Draw the framebuffer scaled to the window (render textures are stored upside down)
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);

        let sw = d.get_screen_width() as f32;
        let sh = d.get_screen_height() as f32;

        d.draw_texture_pro(
            &framebuffer,
            Rectangle::new(0.0, 0.0, framebuffer.width() as f32, -(framebuffer.height() as f32)),
            Rectangle::new(0.0, 0.0, sw, sh),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }

    Ok(())
}
