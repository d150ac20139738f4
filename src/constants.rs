pub const RENDER_WIDTH: i32 = 1920;           // Width of the render texture
pub const RENDER_HEIGHT: i32 = 1080;          // Height of the render texture
pub const FPS: u32 = 60;                      // Frames per second

pub const TOTAL_SLIDES: u32 = 14;

pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u64 = 10_000;
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 1_000; // Quiet time after a manual jump before autoplay resumes

pub const SWIPE_THRESHOLD: f32 = 50.0;        // Minimum horizontal travel for a swipe (pixels)
pub const WHEEL_THROTTLE_MS: u64 = 300;       // One wheel step per window

pub const SLIDE_OFFSET: f32 = 100.0;          // Horizontal offset a slide enters from (pixels)
pub const SLIDE_ACTIVATE_DELAY_MS: u64 = 50;  // Delay before the target slide becomes active
pub const ELEMENT_REVEAL_DELAY_MS: u64 = 200; // Delay between activation and element choreography
pub const SLIDE_ENTER_DURATION: f32 = 0.5;    // Duration of the enter slide-in (seconds)
