//! Held-key state for the eight movement keys

/// Movement direction on screen (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// The recognised control keys: arrows plus their WASD twins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    W,
    A,
    S,
    D,
}

impl Key {
    pub const ALL: [Key; 8] = [
        Key::ArrowUp,
        Key::ArrowDown,
        Key::ArrowLeft,
        Key::ArrowRight,
        Key::W,
        Key::A,
        Key::S,
        Key::D,
    ];

    /// Map a DOM `KeyboardEvent.key` value. Letters match in either case so
    /// caps lock or shift does not drop input.
    pub fn from_dom_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Key::ArrowUp),
            "ArrowDown" => Some(Key::ArrowDown),
            "ArrowLeft" => Some(Key::ArrowLeft),
            "ArrowRight" => Some(Key::ArrowRight),
            "w" | "W" => Some(Key::W),
            "a" | "A" => Some(Key::A),
            "s" | "S" => Some(Key::S),
            "d" | "D" => Some(Key::D),
            _ => None,
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            Key::ArrowUp | Key::W => Direction::Up,
            Key::ArrowDown | Key::S => Direction::Down,
            Key::ArrowLeft | Key::A => Direction::Left,
            Key::ArrowRight | Key::D => Direction::Right,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Pressed flags for every [`Key`]. Written by key events, read once per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pressed: [bool; 8],
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: Key, pressed: bool) {
        self.pressed[key.index()] = pressed;
    }

    pub fn press(&mut self, key: Key) {
        self.set(key, true);
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        self.pressed[key.index()]
    }

    /// Apply a DOM key event. Returns false (and changes nothing) for keys
    /// outside the control set.
    pub fn key_event(&mut self, dom_key: &str, pressed: bool) -> bool {
        match Key::from_dom_key(dom_key) {
            Some(key) => {
                self.set(key, pressed);
                true
            }
            None => false,
        }
    }

    /// True if either key bound to `dir` is down
    pub fn held(&self, dir: Direction) -> bool {
        Key::ALL
            .iter()
            .any(|&key| key.direction() == dir && self.is_pressed(key))
    }

    /// Forget every key (focus lost, so the matching keyups will never arrive)
    pub fn release_all(&mut self) {
        self.pressed = [false; 8];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognised_keys() {
        for name in [
            "ArrowUp", "ArrowDown", "ArrowLeft", "ArrowRight", "w", "a", "s", "d",
        ] {
            assert!(Key::from_dom_key(name).is_some(), "{name} should map");
        }
        assert_eq!(Key::from_dom_key("W"), Some(Key::W));
    }

    #[test]
    fn test_unrecognised_key_ignored() {
        let mut input = InputState::new();
        assert!(!input.key_event("Enter", true));
        assert!(!input.key_event("x", true));
        assert!(!input.key_event("Up", true));
        assert_eq!(input, InputState::default());
    }

    #[test]
    fn test_arrow_and_wasd_are_ored() {
        let mut input = InputState::new();
        assert!(input.key_event("a", true));
        assert!(input.held(Direction::Left));
        assert!(!input.held(Direction::Right));

        input.key_event("ArrowLeft", true);
        input.key_event("a", false);
        assert!(input.held(Direction::Left));

        input.key_event("ArrowLeft", false);
        assert!(!input.held(Direction::Left));
    }

    #[test]
    fn test_release_all() {
        let mut input = InputState::new();
        for key in Key::ALL {
            input.press(key);
        }
        input.release_all();
        assert!(Key::ALL.iter().all(|&k| !input.is_pressed(k)));
    }
}
