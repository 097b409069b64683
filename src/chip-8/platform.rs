use minifb::Key;

use crate::config::Rgba;

/// A platform event, as seen by the input handler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    Quit,
    KeyDown(Key),
    KeyUp(Key),
    Other,
}

/// A queue of pending platform events.
pub trait EventSource {
    /// Takes the oldest pending event, `None` once the queue is empty.
    fn poll_event(&mut self) -> Option<Event>;
}

/// The windowing library underneath a [`Surface`]. Acquisition and release are split into
/// stages so the surface can unwind exactly what it acquired.
///
/// [`Surface`]: crate::Surface
pub trait Backend: EventSource {
    /// Brings up the process-wide video, audio and timer services.
    fn init(&mut self) -> Result<(), String>;
    fn create_window(&mut self, title: &str, width: u32, height: u32) -> Result<(), String>;
    fn create_renderer(&mut self) -> Result<(), String>;

    fn set_draw_color(&mut self, color: Rgba);
    fn clear(&mut self);
    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32);
    fn present(&mut self) -> Result<(), String>;

    fn destroy_renderer(&mut self);
    fn destroy_window(&mut self);
    /// Shuts down what `init` brought up.
    fn quit(&mut self);
}
