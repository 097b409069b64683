use std::time::Duration;

use crate::framebuffer::Framebuffer;
use crate::machine::RunState;

/// Outcome of running an execution core for one timeslice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub state: RunState,
    /// Whether the frame buffer changed, i.e. whether drawing it is worthwhile.
    pub dirty: bool,
}

/// The CPU collaborator driven once per frame by the main loop. Returning
/// [`RunState::Quit`] ends the run, e.g. on a fatal fault.
pub trait Core {
    fn step(&mut self, state: RunState, framebuffer: &mut Framebuffer, budget: Duration) -> Step;
}

/// Executes nothing. Stands in until a CPU is plugged in.
#[derive(Debug, Default)]
pub struct Idle;

impl Core for Idle {
    fn step(&mut self, state: RunState, _framebuffer: &mut Framebuffer, _budget: Duration) -> Step {
        Step {
            state,
            dirty: false,
        }
    }
}
