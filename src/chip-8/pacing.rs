use std::time::Duration;

/// Fixed delay between frames, roughly 60Hz.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Blocking time source used to pace frames.
pub trait Clock {
    fn sleep(&mut self, duration: Duration);
}

/// Sleeps the calling thread.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
