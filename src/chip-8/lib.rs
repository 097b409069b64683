mod config;
mod error;
mod execution;
mod framebuffer;
pub mod input;
mod keypad;
mod machine;
mod pacing;
mod platform;
pub mod runtime;
mod surface;

#[cfg(test)]
mod test_support;

pub use config::{Config, Rgba};
pub use error::Error;
pub use execution::{Core, Idle, Step};
pub use framebuffer::{Framebuffer, FRAME_BUFFER_PIXEL_HEIGHT, FRAME_BUFFER_PIXEL_WIDTH};
pub use keypad::{logical_key, platform_key, Keypad, KEYPAD_SIZE};
pub use machine::{Machine, RunState};
pub use pacing::{Clock, SystemClock, FRAME_INTERVAL};
pub use platform::{Backend, Event, EventSource};
pub use surface::Surface;

pub trait Input {
    fn is_key_down(&self, key: u8) -> bool;
    fn last_key_down(&self) -> Option<u8>;
}
