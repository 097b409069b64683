pub const FRAME_BUFFER_PIXEL_WIDTH: usize = 64;
pub const FRAME_BUFFER_PIXEL_HEIGHT: usize = 32;

/// The monochrome CHIP-8 display as written by an execution core. Tracks whether it changed
/// since the host last drew it.
pub struct Framebuffer {
    framebuffer: [bool; FRAME_BUFFER_PIXEL_WIDTH * FRAME_BUFFER_PIXEL_HEIGHT],
    dirty: bool,
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self {
            framebuffer: [false; FRAME_BUFFER_PIXEL_WIDTH * FRAME_BUFFER_PIXEL_HEIGHT],
            dirty: true,
        }
    }
}

impl Framebuffer {
    pub fn width(&self) -> usize {
        FRAME_BUFFER_PIXEL_WIDTH
    }

    pub fn height(&self) -> usize {
        FRAME_BUFFER_PIXEL_HEIGHT
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        self.framebuffer[Self::index(x, y)]
    }

    /// Coordinates wrap around the edges of the display.
    pub fn set(&mut self, x: usize, y: usize, lit: bool) {
        self.framebuffer[Self::index(x, y)] = lit;
        self.dirty = true;
    }

    pub fn cls(&mut self) {
        self.framebuffer = [false; FRAME_BUFFER_PIXEL_WIDTH * FRAME_BUFFER_PIXEL_HEIGHT];
        self.dirty = true;
    }

    fn index(x: usize, y: usize) -> usize {
        let x_norm = x % FRAME_BUFFER_PIXEL_WIDTH;
        let y_norm = y % FRAME_BUFFER_PIXEL_HEIGHT;

        y_norm * FRAME_BUFFER_PIXEL_WIDTH + x_norm
    }
}

#[cfg(test)]
mod tests {
    use super::Framebuffer;

    #[test]
    fn test_default() {
        let fb = Framebuffer::default();

        assert_eq!(fb.is_dirty(), true);
        assert_eq!(fb.get(0, 0), false);
        assert_eq!(fb.get(63, 31), false);
    }

    #[test]
    fn test_set_marks_dirty() {
        let mut fb = Framebuffer::default();
        fb.clear_dirty();

        fb.set(5, 7, true);

        assert_eq!(fb.is_dirty(), true);
        assert_eq!(fb.get(5, 7), true);
        assert_eq!(fb.get(7, 5), false);
    }

    #[test]
    fn test_set_wraps() {
        let mut fb = Framebuffer::default();

        fb.set(64 + 3, 32 + 1, true);

        assert_eq!(fb.get(3, 1), true);
    }

    #[test]
    fn test_cls() {
        let mut fb = Framebuffer::default();
        fb.set(1, 1, true);
        fb.clear_dirty();

        fb.cls();

        assert_eq!(fb.get(1, 1), false);
        assert_eq!(fb.is_dirty(), true);
    }
}
