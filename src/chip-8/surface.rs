use log::debug;

use crate::config::Config;
use crate::framebuffer::Framebuffer;
use crate::platform::{Backend, Event, EventSource};
use crate::Error;

const WINDOW_TITLE: &str = "CHIP8 Emulator";

/// How far construction got. Teardown walks back from here.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
enum Stage {
    Released,
    Platform,
    Window,
    Renderer,
}

/// The window and its render target. Owns the platform subsystem for as long as it lives;
/// dropping the surface releases whatever is still held.
pub struct Surface<B: Backend> {
    backend: B,
    stage: Stage,
}

impl<B: Backend> Surface<B> {
    /// Brings up the platform, a window sized from `config` and an accelerated render target.
    /// On failure everything acquired so far is released before the error is returned.
    pub fn create(backend: B, config: &Config) -> Result<Self, Error> {
        config.validate()?;

        let mut surface = Self {
            backend,
            stage: Stage::Released,
        };

        surface.backend.init().map_err(Error::PlatformInit)?;
        surface.stage = Stage::Platform;
        debug!("Platform initialized");

        let (width, height) = config.physical_size();
        surface
            .backend
            .create_window(WINDOW_TITLE, width, height)
            .map_err(Error::WindowCreate)?;
        surface.stage = Stage::Window;
        debug!("Created {}x{} window", width, height);

        surface
            .backend
            .create_renderer()
            .map_err(Error::RendererCreate)?;
        surface.stage = Stage::Renderer;
        debug!("Created renderer");

        Ok(surface)
    }

    pub fn is_live(&self) -> bool {
        self.stage == Stage::Renderer
    }

    /// Clears the render target to the background color.
    pub fn clear(&mut self, config: &Config) {
        self.backend.set_draw_color(config.bg());
        self.backend.clear();
    }

    /// Redraws the whole target from `framebuffer`, each lit cell as a square of
    /// `scale_factor` physical pixels in the foreground color.
    pub fn draw(&mut self, framebuffer: &Framebuffer, config: &Config) {
        self.clear(config);
        self.backend.set_draw_color(config.fg());

        let scale = config.scale_factor;
        let width = config.window_width.min(framebuffer.width() as u32);
        let height = config.window_height.min(framebuffer.height() as u32);
        for y in 0..height {
            for x in 0..width {
                if framebuffer.get(x as usize, y as usize) {
                    self.backend.fill_rect(x * scale, y * scale, scale, scale);
                }
            }
        }
    }

    pub fn present(&mut self) -> Result<(), String> {
        self.backend.present()
    }

    /// Releases the render target, the window and then the platform, in that order.
    /// Calling it again is a no-op.
    pub fn destroy(&mut self) {
        if self.stage >= Stage::Renderer {
            self.backend.destroy_renderer();
        }
        if self.stage >= Stage::Window {
            self.backend.destroy_window();
        }
        if self.stage >= Stage::Platform {
            self.backend.quit();
            debug!("Platform shut down");
        }

        self.stage = Stage::Released;
    }
}

impl<B: Backend> EventSource for Surface<B> {
    fn poll_event(&mut self) -> Option<Event> {
        if self.is_live() {
            self.backend.poll_event()
        } else {
            None
        }
    }
}

impl<B: Backend> Drop for Surface<B> {
    fn drop(&mut self) {
        self.destroy();
    }
}
