use std::time::Duration;
use anyhow::{Result, ensure};
use clap::Parser;

use crate::constants::*;

/// Fourteen-slide deck viewer.
#[derive(Parser, Debug)]
#[command(name = "deckview", version, about)]
pub struct Args {
    /// Start advancing slides automatically
    #[arg(long)]
    pub autoplay: bool,

    /// Time each slide stays up during autoplay (milliseconds)
    #[arg(long, default_value_t = DEFAULT_AUTOPLAY_INTERVAL_MS)]
    pub interval_ms: u64,

    /// Quiet time after manual navigation before autoplay resumes (milliseconds)
    #[arg(long, default_value_t = DEFAULT_SETTLE_DELAY_MS)]
    pub settle_ms: u64,

    /// Slide to open on, counted from 1
    #[arg(long, default_value_t = 1)]
    pub start_slide: u32,

    /// Window width
    #[arg(long, default_value_t = RENDER_WIDTH / 2)]
    pub width: i32,

    /// Window height
    #[arg(long, default_value_t = RENDER_HEIGHT / 2)]
    pub height: i32,

    /// Open in fullscreen
    #[arg(long)]
    pub fullscreen: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub autoplay: bool,
    pub interval: Duration,
    pub settle_delay: Duration,
    pub start_slide: u32,
    pub width: i32,
    pub height: i32,
    pub fullscreen: bool,
    pub log_level: String,
}

impl Args {
    /// Validates the arguments against a deck of `total_slides`.
    pub fn into_config(self, total_slides: u32) -> Result<Config> {
        ensure!(self.interval_ms > 0, "--interval-ms must be positive");
        ensure!(
            (1..=total_slides).contains(&self.start_slide),
            "--start-slide must be between 1 and {}, got {}",
            total_slides,
            self.start_slide
        );
        ensure!(
            self.width > 0 && self.height > 0,
            "window size must be positive, got {}x{}",
            self.width,
            self.height
        );

        Ok(Config {
            autoplay: self.autoplay,
            interval: Duration::from_millis(self.interval_ms),
            settle_delay: Duration::from_millis(self.settle_ms),
            start_slide: self.start_slide,
            width: self.width,
            height: self.height,
            fullscreen: self.fullscreen,
            log_level: self.log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Config> {
        let args = Args::try_parse_from(std::iter::once("deckview").chain(args.iter().copied()))?;
        args.into_config(TOTAL_SLIDES)
    }

    #[test]
    fn defaults() {
        let config = parse(&[]).unwrap();
        assert!(!config.autoplay);
        assert_eq!(config.interval, Duration::from_millis(DEFAULT_AUTOPLAY_INTERVAL_MS));
        assert_eq!(config.settle_delay, Duration::from_millis(DEFAULT_SETTLE_DELAY_MS));
        assert_eq!(config.start_slide, 1);
        assert_eq!((config.width, config.height), (960, 540));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn autoplay_flags() {
        let config = parse(&["--autoplay", "--interval-ms", "8000", "--settle-ms", "500"]).unwrap();
        assert!(config.autoplay);
        assert_eq!(config.interval, Duration::from_millis(8000));
        assert_eq!(config.settle_delay, Duration::from_millis(500));
    }

    #[test]
    fn rejects_zero_interval() {
        let err = parse(&["--interval-ms", "0"]).unwrap_err();
        assert!(err.to_string().contains("--interval-ms"));
    }

    #[test]
    fn rejects_start_slide_outside_deck() {
        assert!(parse(&["--start-slide", "0"]).is_err());
        assert!(parse(&["--start-slide", "15"]).is_err());
        assert_eq!(parse(&["--start-slide", "14"]).unwrap().start_slide, 14);
    }
}
