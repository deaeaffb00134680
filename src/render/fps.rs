//! Frame-rate overlay with caller-held state.

use super::{Canvas, Color, Point};
use std::time::Instant;

/// Frames averaged per rate update.
const DEFAULT_WINDOW: u32 = 10;

/// Frame-rate estimate updated once every `window` frames.
///
/// The caller owns the counter and passes the current instant to
/// [`FpsCounter::tick`] once per frame.
#[derive(Clone, Debug)]
pub struct FpsCounter {
    window: u32,
    frames: u32,
    since: Option<Instant>,
    fps: f32,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}

impl FpsCounter {
    /// Creates a counter averaging over `window` frames (at least one).
    pub fn new(window: u32) -> Self {
        Self {
            window: window.max(1),
            frames: 0,
            since: None,
            fps: 0.0,
        }
    }

    /// Records a frame shown at `now` and returns the current estimate.
    ///
    /// The first tick only starts the clock; the estimate stays `0` until a
    /// full window has elapsed.
    pub fn tick(&mut self, now: Instant) -> f32 {
        let Some(since) = self.since else {
            self.since = Some(now);
            return self.fps;
        };
        self.frames += 1;
        if self.frames >= self.window {
            let secs = now.saturating_duration_since(since).as_secs_f32();
            if secs > 0.0 {
                self.fps = self.frames as f32 / secs;
            }
            self.frames = 0;
            self.since = Some(now);
        }
        self.fps
    }

    /// Returns the latest estimate in frames per second.
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Returns the overlay text, e.g. `FPS: 29.97`.
    pub fn label(&self) -> String {
        format!("FPS: {:.2}", self.fps)
    }
}

/// Writes the counter's label in the top-left corner of `canvas`.
pub fn draw_fps<C: Canvas + ?Sized>(canvas: &mut C, counter: &FpsCounter) {
    canvas.draw_text(Point::new(10, 25), &counter.label(), Color::CYAN);
}
