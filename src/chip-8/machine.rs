use crate::keypad::Keypad;

/// Coarse lifecycle of the emulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    /// Nothing transitions here yet; reserved for a pause binding.
    Paused,
    /// Terminal.
    Quit,
}

#[derive(Debug)]
pub struct Machine {
    state: RunState,
    pub keypad: Keypad,
}

impl Machine {
    pub fn new() -> Self {
        Self {
            state: RunState::Running,
            keypad: Keypad::default(),
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state != RunState::Quit
    }

    pub fn quit(&mut self) {
        self.transition(RunState::Quit);
    }

    /// Moves to `next`. Nothing leaves `Quit`.
    pub fn transition(&mut self, next: RunState) {
        if self.state == RunState::Quit || self.state == next {
            return;
        }

        log::info!("Machine {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    pub fn toggle_pause(&mut self) {
        match self.state {
            RunState::Running => self.transition(RunState::Paused),
            RunState::Paused => self.transition(RunState::Running),
            RunState::Quit => {}
        }
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}
