//! Capture-source contract and pre-session frame preparation
//!
//! The platform screen grab lives in the host; this module fixes its output
//! contract and owns the pure state around it: scaling a captured frame to
//! the editor window and the delay countdown.

use std::path::Path;

use image::RgbaImage;
use image::imageops::FilterType;

use crate::error::Result;

/// Produces a full-screen RGBA frame
///
/// Implemented by the host's platform grab. A failure is fatal to that
/// capture attempt; the caller logs it and does not retry.
pub trait CaptureSource {
    fn capture_frame(&mut self) -> Result<RgbaImage>;
}

/// Editor window dimensions, decided by the host at startup and passed in
/// explicitly at session construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

impl WindowSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Scale a captured frame down to fit the editor window
///
/// Frames already within the window are returned unchanged; otherwise the
/// frame is resized with its aspect ratio preserved.
pub fn fit_to_window(frame: RgbaImage, window: WindowSize) -> RgbaImage {
    let (w, h) = (frame.width(), frame.height());
    if w <= window.width && h <= window.height {
        return frame;
    }
    let scale = (window.width as f32 / w as f32).min(window.height as f32 / h as f32);
    let scaled_w = ((w as f32 * scale) as u32).max(1);
    let scaled_h = ((h as f32 * scale) as u32).max(1);
    log::debug!("scaling captured frame {}x{} -> {}x{}", w, h, scaled_w, scaled_h);
    image::imageops::resize(&frame, scaled_w, scaled_h, FilterType::CatmullRom)
}

/// Load an image file into an RGBA buffer for a fresh editor session
pub fn load_image(path: &Path) -> Result<RgbaImage> {
    Ok(image::open(path)?.to_rgba8())
}

/// Result of advancing the delay countdown by one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownState {
    /// Seconds left before the capture fires
    Pending(u32),
    /// The capture should fire now
    Finished,
}

/// Delay countdown driven by the host's one-second tick
///
/// The host runs a single timer per capture and stops ticking once the
/// capture window is dismissed; a finished countdown stays finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
}

impl Countdown {
    /// Start a countdown of `delay` seconds; zero fires immediately
    pub fn new(delay: u32) -> Self {
        Self { remaining: delay }
    }

    pub fn is_finished(&self) -> bool {
        self.remaining == 0
    }

    /// Advance by one tick
    pub fn tick(&mut self) -> CountdownState {
        if self.remaining == 0 {
            return CountdownState::Finished;
        }
        self.remaining -= 1;
        if self.remaining == 0 {
            CountdownState::Finished
        } else {
            CountdownState::Pending(self.remaining)
        }
    }
}
