//! Frame pacing
//!
//! Blocks at the end of each frame so the loop runs at a fixed target rate,
//! and keeps a rolling frame-rate estimate.

use std::thread;
use std::time::{Duration, Instant};

/// Frames averaged for the FPS estimate
const FPS_WINDOW: usize = 60;

/// Time budget of one frame at `target_fps`, or `None` when unlimited
pub fn frame_interval(target_fps: u32) -> Option<Duration> {
    (target_fps > 0).then(|| Duration::from_secs_f64(1.0 / target_fps as f64))
}

/// Fixed-rate frame limiter
pub struct FrameClock {
    interval: Option<Duration>,
    last_tick: Instant,
    // Ring buffer of recent frame end times
    frame_times: [Option<Instant>; FPS_WINDOW],
    frame_index: usize,
    fps: u32,
}

impl FrameClock {
    pub fn new(target_fps: u32) -> Self {
        Self {
            interval: frame_interval(target_fps),
            last_tick: Instant::now(),
            frame_times: [None; FPS_WINDOW],
            frame_index: 0,
            fps: 0,
        }
    }

    /// Sleep out the rest of the current frame, then start the next one
    ///
    /// Returns the wall time the finished frame took, sleep included.
    pub fn tick(&mut self) -> Duration {
        if let Some(interval) = self.interval {
            let elapsed = self.last_tick.elapsed();
            if elapsed < interval {
                thread::sleep(interval - elapsed);
            }
        }

        let now = Instant::now();
        let frame_time = now - self.last_tick;
        self.last_tick = now;

        // The slot about to be overwritten holds the oldest sample
        let oldest = self.frame_times[self.frame_index];
        self.frame_times[self.frame_index] = Some(now);
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;

        if let Some(oldest) = oldest {
            let elapsed = (now - oldest).as_secs_f64();
            if elapsed > 0.0 {
                self.fps = (FPS_WINDOW as f64 / elapsed).round() as u32;
            }
        }

        frame_time
    }

    /// Frame rate over the last 60 frames (0 until enough frames have passed)
    pub fn fps(&self) -> u32 {
        self.fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_interval() {
        assert_eq!(frame_interval(0), None);
        let interval = frame_interval(60).unwrap();
        assert!((interval.as_secs_f64() - 1.0 / 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_tick_waits_for_interval() {
        let mut clock = FrameClock::new(200);
        let start = Instant::now();
        for _ in 0..4 {
            clock.tick();
        }
        // The first frame started before `start`; the other three are full 5 ms frames
        assert!(start.elapsed() >= Duration::from_millis(15));
    }

    #[test]
    fn test_fps_estimate_needs_full_window() {
        let mut clock = FrameClock::new(0);
        for _ in 0..FPS_WINDOW {
            clock.tick();
        }
        assert_eq!(clock.fps(), 0);

        clock.tick();
        assert!(clock.fps() > 0);
    }
}
