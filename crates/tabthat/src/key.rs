//! Navigation keys.

/// Keys the tab list reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Up,
    Right,
    Down,
    Home,
    End,
    /// Any key without a tab binding.
    Other,
}

impl Key {
    /// Map a legacy `keyCode` value.
    pub fn from_code(code: u32) -> Self {
        match code {
            35 => Self::End,
            36 => Self::Home,
            37 => Self::Left,
            38 => Self::Up,
            39 => Self::Right,
            40 => Self::Down,
            _ => Self::Other,
        }
    }

    /// Map a `KeyboardEvent.key` name, including the old unprefixed arrows.
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowLeft" | "Left" => Self::Left,
            "ArrowUp" | "Up" => Self::Up,
            "ArrowRight" | "Right" => Self::Right,
            "ArrowDown" | "Down" => Self::Down,
            "Home" => Self::Home,
            "End" => Self::End,
            _ => Self::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(Key::from_code(35), Key::End);
        assert_eq!(Key::from_code(36), Key::Home);
        assert_eq!(Key::from_code(37), Key::Left);
        assert_eq!(Key::from_code(38), Key::Up);
        assert_eq!(Key::from_code(39), Key::Right);
        assert_eq!(Key::from_code(40), Key::Down);
        assert_eq!(Key::from_code(13), Key::Other);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Key::from_name("ArrowLeft"), Key::Left);
        assert_eq!(Key::from_name("Left"), Key::Left);
        assert_eq!(Key::from_name("ArrowDown"), Key::Down);
        assert_eq!(Key::from_name("End"), Key::End);
        assert_eq!(Key::from_name("Enter"), Key::Other);
        assert_eq!(Key::from_name("arrowleft"), Key::Other);
    }
}
