//! Pacing policies applied between scheduler ticks.

use std::thread;
use std::time::Duration;

/// Decides how long the driver waits at each suspension point.
pub trait Pacer {
    fn pause(&mut self);
}

impl<P: Pacer + ?Sized> Pacer for Box<P> {
    fn pause(&mut self) {
        (**self).pause();
    }
}

/// Sleeps for a fixed frame interval.
#[derive(Debug, Clone, Copy)]
pub struct FramePacer {
    interval: Duration,
}

impl FramePacer {
    /// Pace at `fps` steps per second. Zero disables the delay.
    pub fn from_fps(fps: u32) -> Self {
        let interval = if fps == 0 {
            Duration::ZERO
        } else {
            Duration::from_secs(1) / fps
        };
        Self { interval }
    }

    /// The time slept per pause.
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Pacer for FramePacer {
    fn pause(&mut self) {
        if !self.interval.is_zero() {
            thread::sleep(self.interval);
        }
    }
}

/// Never waits.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPacing;

impl Pacer for NoPacing {
    #[inline]
    fn pause(&mut self) {}
}
