use chip_8::{platform_key, runtime, Backend, Config, Error, Event, EventSource, Idle, Rgba};
use chip_8::{SystemClock, KEYPAD_SIZE};
use log::{error, info};
use minifb::{Key, Scale, Window, WindowOptions};

use std::collections::VecDeque;

/// Backend over a minifb window. The render target is a software buffer of the window's
/// physical size, published with `update_with_buffer`.
///
/// minifb cannot query the output device size, so the window is not centered; the OS picks
/// its position.
struct MiniFBBackend {
    window: Option<Window>,
    buffer: Option<Vec<u32>>,
    width: usize,
    height: usize,
    draw_color: u32,
    key_states: [bool; KEYPAD_SIZE],
    events: VecDeque<Event>,
}

impl MiniFBBackend {
    fn new() -> Self {
        Self {
            window: None,
            buffer: None,
            width: 0,
            height: 0,
            draw_color: 0,
            key_states: [false; KEYPAD_SIZE],
            events: VecDeque::new(),
        }
    }

    /// minifb only processes OS events while updating, so the queue is refilled after every
    /// published frame.
    fn pump_events(&mut self) {
        let window = match &self.window {
            Some(window) => window,
            None => return,
        };

        if !window.is_open() || window.is_key_down(Key::Escape) {
            self.events.push_back(Event::Quit);
        }

        for key in 0..KEYPAD_SIZE as u8 {
            if let Some(key_enum) = platform_key(key) {
                let is_down = window.is_key_down(key_enum);
                let was_down = self.key_states[key as usize];

                if is_down && !was_down {
                    self.events.push_back(Event::KeyDown(key_enum));
                } else if !is_down && was_down {
                    self.events.push_back(Event::KeyUp(key_enum));
                }
                self.key_states[key as usize] = is_down;
            }
        }
    }
}

impl EventSource for MiniFBBackend {
    fn poll_event(&mut self) -> Option<Event> {
        self.events.pop_front()
    }
}

impl Backend for MiniFBBackend {
    fn init(&mut self) -> Result<(), String> {
        // minifb connects to the display server per window, nothing is process wide.
        Ok(())
    }

    fn create_window(&mut self, title: &str, width: u32, height: u32) -> Result<(), String> {
        let mut opts = WindowOptions::default();
        opts.scale = Scale::X1;

        let window = Window::new(title, width as usize, height as usize, opts)
            .map_err(|e| e.to_string())?;

        self.window = Some(window);
        self.width = width as usize;
        self.height = height as usize;

        Ok(())
    }

    fn create_renderer(&mut self) -> Result<(), String> {
        if self.window.is_none() {
            return Err("no window to render to".to_string());
        }
        self.buffer = Some(vec![0; self.width * self.height]);

        Ok(())
    }

    fn set_draw_color(&mut self, color: Rgba) {
        self.draw_color = color.to_0rgb();
    }

    fn clear(&mut self) {
        let color = self.draw_color;
        if let Some(buffer) = self.buffer.as_mut() {
            buffer.iter_mut().for_each(|pixel| *pixel = color);
        }
    }

    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32) {
        let color = self.draw_color;
        let stride = self.width;
        let x_end = ((x + width) as usize).min(self.width);
        let y_end = ((y + height) as usize).min(self.height);
        if x as usize >= x_end {
            return;
        }

        if let Some(buffer) = self.buffer.as_mut() {
            for row in (y as usize)..y_end {
                let start = row * stride;
                for pixel in &mut buffer[start + x as usize..start + x_end] {
                    *pixel = color;
                }
            }
        }
    }

    fn present(&mut self) -> Result<(), String> {
        match (self.window.as_mut(), self.buffer.as_ref()) {
            (Some(window), Some(buffer)) => {
                window.update_with_buffer(buffer).map_err(|e| e.to_string())?
            }
            _ => return Err("no render target".to_string()),
        }
        self.pump_events();

        Ok(())
    }

    fn destroy_renderer(&mut self) {
        self.buffer = None;
    }

    fn destroy_window(&mut self) {
        self.window = None;
        self.key_states = [false; KEYPAD_SIZE];
        self.events.clear();
    }

    fn quit(&mut self) {}
}

fn run() -> Result<(), Error> {
    let config = Config::resolve(std::env::args_os())?;
    let (width, height) = config.physical_size();
    info!(
        "Running {}x{} at scale {} ({}x{} window)",
        config.window_width, config.window_height, config.scale_factor, width, height
    );

    runtime::run(&config, MiniFBBackend::new(), &mut Idle, &mut SystemClock)
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}
