use log::debug;

use crate::keypad::logical_key;
use crate::machine::Machine;
use crate::platform::{Event, EventSource};

/// Drains the pending events into `machine` and returns how many were consumed.
///
/// A quit request ends the scan at once: it wins over anything queued behind it, and those
/// events are left where they are. Key events only touch the keypad, never the run-state.
pub fn poll(machine: &mut Machine, events: &mut dyn EventSource) -> usize {
    let mut consumed = 0;

    while let Some(event) = events.poll_event() {
        consumed += 1;

        match event {
            Event::Quit => {
                debug!("Quit requested");
                machine.quit();
                return consumed;
            }
            Event::KeyDown(key) => {
                if let Some(key) = logical_key(key) {
                    machine.keypad.press(key);
                }
            }
            Event::KeyUp(key) => {
                if let Some(key) = logical_key(key) {
                    machine.keypad.release(key);
                }
            }
            Event::Other => {}
        }
    }

    consumed
}
