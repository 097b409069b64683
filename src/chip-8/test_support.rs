use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use crate::config::Rgba;
use crate::execution::{Core, Step};
use crate::framebuffer::Framebuffer;
use crate::machine::RunState;
use crate::pacing::Clock;
use crate::platform::{Backend, Event, EventSource};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Init,
    CreateWindow(String, u32, u32),
    CreateRenderer,
    SetDrawColor(Rgba),
    Clear,
    FillRect(u32, u32, u32, u32),
    Present,
    DestroyRenderer,
    DestroyWindow,
    Quit,
}

#[derive(Debug, Default)]
pub struct Log {
    pub calls: Vec<Call>,
    pub events: VecDeque<Event>,
    live: i32,
}

impl Log {
    pub fn count(&self, call: &Call) -> usize {
        self.calls.iter().filter(|&c| c == call).count()
    }

    /// Successful acquisitions not yet released.
    pub fn live_resources(&self) -> i32 {
        self.live
    }
}

/// Records every backend call in a log shared between clones.
#[derive(Clone, Default)]
pub struct MockBackend {
    log: Rc<RefCell<Log>>,
    fail_init: bool,
    fail_window: bool,
    fail_renderer: bool,
    fail_present: bool,
    /// Events queued after each successful present, the way a real backend pumps its queue.
    events_per_present: Vec<Vec<Event>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self) -> Rc<RefCell<Log>> {
        Rc::clone(&self.log)
    }

    pub fn with_events(self, events: Vec<Event>) -> Self {
        self.log.borrow_mut().events.extend(events);
        self
    }

    /// The `n`th present (0 based) queues `events`.
    pub fn events_after_present(mut self, n: usize, events: Vec<Event>) -> Self {
        if self.events_per_present.len() <= n {
            self.events_per_present.resize(n + 1, vec![]);
        }
        self.events_per_present[n] = events;
        self
    }

    pub fn failing_init(mut self) -> Self {
        self.fail_init = true;
        self
    }

    pub fn failing_window(mut self) -> Self {
        self.fail_window = true;
        self
    }

    pub fn failing_renderer(mut self) -> Self {
        self.fail_renderer = true;
        self
    }

    pub fn failing_present(mut self) -> Self {
        self.fail_present = true;
        self
    }

    fn record(&self, call: Call) {
        self.log.borrow_mut().calls.push(call);
    }

    fn acquire(&self, call: Call, fail: bool, message: &str) -> Result<(), String> {
        self.record(call);
        if fail {
            return Err(message.to_string());
        }
        self.log.borrow_mut().live += 1;

        Ok(())
    }

    fn release(&self, call: Call) {
        self.record(call);
        self.log.borrow_mut().live -= 1;
    }
}

impl EventSource for MockBackend {
    fn poll_event(&mut self) -> Option<Event> {
        self.log.borrow_mut().events.pop_front()
    }
}

impl Backend for MockBackend {
    fn init(&mut self) -> Result<(), String> {
        self.acquire(Call::Init, self.fail_init, "no video device")
    }

    fn create_window(&mut self, title: &str, width: u32, height: u32) -> Result<(), String> {
        self.acquire(
            Call::CreateWindow(title.to_string(), width, height),
            self.fail_window,
            "no display",
        )
    }

    fn create_renderer(&mut self) -> Result<(), String> {
        self.acquire(Call::CreateRenderer, self.fail_renderer, "no accelerated driver")
    }

    fn set_draw_color(&mut self, color: Rgba) {
        self.record(Call::SetDrawColor(color));
    }

    fn clear(&mut self) {
        self.record(Call::Clear);
    }

    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32) {
        self.record(Call::FillRect(x, y, width, height));
    }

    fn present(&mut self) -> Result<(), String> {
        let presented = self.log.borrow().count(&Call::Present);
        self.record(Call::Present);
        if self.fail_present {
            return Err("device lost".to_string());
        }

        if let Some(events) = self.events_per_present.get(presented) {
            self.log.borrow_mut().events.extend(events.iter().cloned());
        }

        Ok(())
    }

    fn destroy_renderer(&mut self) {
        self.release(Call::DestroyRenderer);
    }

    fn destroy_window(&mut self) {
        self.release(Call::DestroyWindow);
    }

    fn quit(&mut self) {
        self.release(Call::Quit);
    }
}

/// A clock that only advances when slept on.
#[derive(Debug, Default)]
pub struct SimulatedClock {
    pub elapsed: Duration,
    pub sleeps: usize,
}

impl Clock for SimulatedClock {
    fn sleep(&mut self, duration: Duration) {
        self.elapsed += duration;
        self.sleeps += 1;
    }
}

/// Lights one pixel per step and asks to quit after `quit_after` steps.
pub struct ScriptedCore {
    pub steps: usize,
    pub quit_after: Option<usize>,
    pub budgets: Vec<Duration>,
}

impl ScriptedCore {
    pub fn new(quit_after: Option<usize>) -> Self {
        Self {
            steps: 0,
            quit_after,
            budgets: vec![],
        }
    }
}

impl Core for ScriptedCore {
    fn step(&mut self, state: RunState, framebuffer: &mut Framebuffer, budget: Duration) -> Step {
        framebuffer.set(self.steps % framebuffer.width(), 0, true);
        self.steps += 1;
        self.budgets.push(budget);

        let state = match self.quit_after {
            Some(limit) if self.steps >= limit => RunState::Quit,
            _ => state,
        };

        Step { state, dirty: true }
    }
}
