use log::{info, warn};

use crate::config::Config;
use crate::execution::Core;
use crate::framebuffer::Framebuffer;
use crate::input;
use crate::machine::{Machine, RunState};
use crate::pacing::{Clock, FRAME_INTERVAL};
use crate::platform::Backend;
use crate::surface::Surface;
use crate::Error;

/// Runs the emulator until the machine quits.
///
/// Each frame: drain input, step `core` for one frame interval unless paused, sleep a fixed
/// [`FRAME_INTERVAL`] and present. The sleep does not account for time spent on the frame.
/// A failure to create the surface is returned before any frame runs.
pub fn run<B, C, K>(config: &Config, backend: B, core: &mut C, clock: &mut K) -> Result<(), Error>
where
    B: Backend,
    C: Core,
    K: Clock,
{
    let mut surface = Surface::create(backend, config)?;
    surface.clear(config);

    let mut machine = Machine::new();
    let mut framebuffer = Framebuffer::default();
    let mut frames: u64 = 0;

    info!("Starting main loop");
    while machine.is_running() {
        input::poll(&mut machine, &mut surface);

        if machine.state() == RunState::Running {
            let step = core.step(machine.state(), &mut framebuffer, FRAME_INTERVAL);
            machine.transition(step.state);

            if step.dirty {
                surface.draw(&framebuffer, config);
                framebuffer.clear_dirty();
            }
        }

        clock.sleep(FRAME_INTERVAL);

        if let Err(e) = surface.present() {
            warn!("Skipping frame {}: {}", frames, e);
        }
        frames += 1;
    }

    info!("Stopped after {} frames", frames);
    surface.destroy();

    Ok(())
}
