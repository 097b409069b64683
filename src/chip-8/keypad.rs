use minifb::Key;

use crate::Input;

pub const KEYPAD_SIZE: usize = 16;

/// Maps a platform key to its CHIP-8 key on the usual layout:
///
/// ```text
/// 1 2 3 4      1 2 3 C
/// Q W E R  =>  4 5 6 D
/// A S D F      7 8 9 E
/// Z X C V      A 0 B F
/// ```
pub fn logical_key(key: Key) -> Option<u8> {
    match key {
        Key::Key1 => Some(0x1),
        Key::Key2 => Some(0x2),
        Key::Key3 => Some(0x3),
        Key::Key4 => Some(0xc),

        Key::Q => Some(0x4),
        Key::W => Some(0x5),
        Key::E => Some(0x6),
        Key::R => Some(0xd),

        Key::A => Some(0x7),
        Key::S => Some(0x8),
        Key::D => Some(0x9),
        Key::F => Some(0xe),

        Key::Z => Some(0xa),
        Key::X => Some(0x0),
        Key::C => Some(0xb),
        Key::V => Some(0xf),
        _ => None,
    }
}

/// Inverse of [`logical_key`].
pub fn platform_key(key: u8) -> Option<Key> {
    match key {
        0x1 => Some(Key::Key1),
        0x2 => Some(Key::Key2),
        0x3 => Some(Key::Key3),
        0xc => Some(Key::Key4),

        0x4 => Some(Key::Q),
        0x5 => Some(Key::W),
        0x6 => Some(Key::E),
        0xd => Some(Key::R),

        0x7 => Some(Key::A),
        0x8 => Some(Key::S),
        0x9 => Some(Key::D),
        0xe => Some(Key::F),

        0xa => Some(Key::Z),
        0x0 => Some(Key::X),
        0xb => Some(Key::C),
        0xf => Some(Key::V),
        _ => None,
    }
}

/// Which of the 16 CHIP-8 keys are held.
#[derive(Debug, Default)]
pub struct Keypad {
    key_states: [bool; KEYPAD_SIZE],
    last_down: Option<u8>,
}

impl Keypad {
    /// Keys outside `0..KEYPAD_SIZE` are ignored.
    pub fn press(&mut self, key: u8) {
        if let Some(state) = self.key_states.get_mut(key as usize) {
            *state = true;
            self.last_down = Some(key);
        }
    }

    pub fn release(&mut self, key: u8) {
        if let Some(state) = self.key_states.get_mut(key as usize) {
            *state = false;
        }
        if self.last_down == Some(key) {
            self.last_down = None;
        }
    }
}

impl Input for Keypad {
    fn is_key_down(&self, key: u8) -> bool {
        self.key_states.get(key as usize).copied().unwrap_or(false)
    }

    fn last_key_down(&self) -> Option<u8> {
        self.last_down
    }
}
