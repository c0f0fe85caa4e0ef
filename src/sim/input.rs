/// The fixed set of keys the race reacts to
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Key {
    Forward,
    Backward,
    Left,
    Right,
    Drift,
    UseItem,
}

impl Key {
    pub const AMOUNT: usize = 6;
    pub const ALL: [Self; Self::AMOUNT] = [
        Self::Forward,
        Self::Backward,
        Self::Left,
        Self::Right,
        Self::Drift,
        Self::UseItem,
    ];

    /// Maps a host key code (`KeyboardEvent.code` naming) onto a race key
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Some(match code {
            "KeyW" | "ArrowUp" => Self::Forward,
            "KeyS" | "ArrowDown" => Self::Backward,
            "KeyA" | "ArrowLeft" => Self::Left,
            "KeyD" | "ArrowRight" => Self::Right,
            "ShiftLeft" | "ShiftRight" => Self::Drift,
            "Space" => Self::UseItem,
            _ => return None,
        })
    }
}

/// Current press state of every [`Key`].
///
/// The host writes into it from its event handlers, the race polls it once per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InputState {
    keys: [bool; Key::AMOUNT],
}

impl InputState {
    pub const DEFAULT: Self = Self {
        keys: [false; Key::AMOUNT],
    };

    #[must_use]
    pub const fn is_pressed(&self, key: Key) -> bool {
        self.keys[key as usize]
    }

    pub const fn set(&mut self, key: Key, pressed: bool) {
        self.keys[key as usize] = pressed;
    }

    pub const fn press(&mut self, key: Key) {
        self.set(key, true);
    }

    pub const fn release(&mut self, key: Key) {
        self.set(key, false);
    }

    /// Returns true if the code belonged to a race key
    pub fn handle_key_code(&mut self, code: &str, pressed: bool) -> bool {
        let Some(key) = Key::from_code(code) else {
            return false;
        };

        self.set(key, pressed);
        true
    }

    #[must_use]
    pub const fn with(mut self, key: Key) -> Self {
        self.keys[key as usize] = true;
        self
    }
}
