/// Entities: the Player record and the movement request vocabulary.

/// Requested step, one per turn.
///
/// Unrecognized input never becomes a `Direction`: the input layer maps
/// unbound keys to `None` and the driver skips the turn, which matches the
/// "stay" semantics of the original input translation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// (row delta, col delta) for this direction.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Player state. `row`/`col` always index the current grid and that cell
/// always holds the player marker; the movement resolver is the only writer
/// and keeps both halves of that invariant in the same step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Player {
    pub row: usize,
    pub col: usize,
    /// Treasure count, non-decreasing within a level.
    pub treasure: u32,
}

impl Player {
    pub fn new(row: usize, col: usize) -> Self {
        Player { row, col, treasure: 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deltas_match_screen_orientation() {
        assert_eq!(Direction::Up.delta(), (-1, 0));
        assert_eq!(Direction::Down.delta(), (1, 0));
        assert_eq!(Direction::Left.delta(), (0, -1));
        assert_eq!(Direction::Right.delta(), (0, 1));
    }

    #[test]
    fn new_player_has_no_treasure() {
        let p = Player::new(4, 7);
        assert_eq!((p.row, p.col, p.treasure), (4, 7, 0));
    }
}
