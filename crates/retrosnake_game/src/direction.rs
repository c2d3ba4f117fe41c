use retrosnake_common::key::Key;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    Up,
    Down,
    Left,
    #[default]
    Right,
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Unit step in grid cells; y grows downwards.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Only the arrow keys steer.
    pub fn from_key(key: Key) -> Option<Direction> {
        match key {
            Key::Up => Some(Direction::Up),
            Key::Down => Some(Direction::Down),
            Key::Left => Some(Direction::Left),
            Key::Right => Some(Direction::Right),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    #[test]
    fn opposite_is_an_involution() {
        for dir in ALL {
            assert_ne!(dir.opposite(), dir);
            assert_eq!(dir.opposite().opposite(), dir);
            assert!(dir.is_opposite(dir.opposite()));
        }
    }

    #[test]
    fn opposite_deltas_cancel() {
        for dir in ALL {
            let (dx, dy) = dir.delta();
            let (ox, oy) = dir.opposite().delta();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }

    #[test]
    fn arrow_keys_map_to_directions() {
        assert_eq!(Direction::from_key(Key::Up), Some(Direction::Up));
        assert_eq!(Direction::from_key(Key::Down), Some(Direction::Down));
        assert_eq!(Direction::from_key(Key::Left), Some(Direction::Left));
        assert_eq!(Direction::from_key(Key::Right), Some(Direction::Right));
        assert_eq!(Direction::from_key(Key::Space), None);
        assert_eq!(Direction::from_key(Key::Escape), None);
        assert_eq!(Direction::from_key(Key::None), None);
    }
}
