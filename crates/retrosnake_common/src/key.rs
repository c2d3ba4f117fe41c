/// Frontend-independent key identifiers.
///
/// Frontends map their native key codes onto this set; anything without a
/// mapping becomes `Key::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Escape,
    Space,
    #[default]
    None,
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` value.
    pub fn from_dom_key(key: &str) -> Key {
        match key {
            "ArrowUp" => Key::Up,
            "ArrowDown" => Key::Down,
            "ArrowLeft" => Key::Left,
            "ArrowRight" => Key::Right,
            "Escape" => Key::Escape,
            " " => Key::Space,
            _ => Key::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_arrow_keys_map_to_arrows() {
        assert_eq!(Key::from_dom_key("ArrowUp"), Key::Up);
        assert_eq!(Key::from_dom_key("ArrowDown"), Key::Down);
        assert_eq!(Key::from_dom_key("ArrowLeft"), Key::Left);
        assert_eq!(Key::from_dom_key("ArrowRight"), Key::Right);
    }

    #[test]
    fn unknown_dom_keys_are_none() {
        assert_eq!(Key::from_dom_key("w"), Key::None);
        assert_eq!(Key::from_dom_key("Enter"), Key::None);
        assert_eq!(Key::from_dom_key(""), Key::None);
    }
}
