/// Tile types and their properties.
/// Properties are queried via methods, not stored as flags,
/// so tile semantics are centralized here.

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tile {
    Open,     // walkable floor
    Pillar,   // impassable, blocks monster sight
    Player,   // the player marker (exactly one on a live grid)
    Monster,
    Treasure, // pickup, +1 treasure
    Amulet,   // pickup, grows the dungeon
    Exit,     // level exit, needs at least one treasure
    Door,     // side door, no treasure requirement
}

impl Tile {
    /// Can the player never step onto this tile?
    pub fn is_blocking(self) -> bool {
        matches!(self, Tile::Pillar | Tile::Monster)
    }

    /// Does this tile cut a monster's line of sight?
    pub fn blocks_sight(self) -> bool {
        matches!(self, Tile::Pillar)
    }

    /// Map symbol as it appears in level files and on screen.
    pub fn to_char(self) -> char {
        match self {
            Tile::Open => '.',
            Tile::Pillar => '#',
            Tile::Player => '@',
            Tile::Monster => 'M',
            Tile::Treasure => 'T',
            Tile::Amulet => 'A',
            Tile::Exit => 'X',
            Tile::Door => 'D',
        }
    }

    /// Parse a map symbol. Unknown symbols load as open floor;
    /// the loader logs them but does not reject the level.
    pub fn from_char(c: char) -> Option<Tile> {
        match c {
            '.' => Some(Tile::Open),
            '#' => Some(Tile::Pillar),
            '@' => Some(Tile::Player),
            'M' => Some(Tile::Monster),
            'T' => Some(Tile::Treasure),
            'A' => Some(Tile::Amulet),
            'X' => Some(Tile::Exit),
            'D' => Some(Tile::Door),
            _ => None,
        }
    }
}

impl Default for Tile {
    fn default() -> Self {
        Tile::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legend_round_trips() {
        for t in [
            Tile::Open, Tile::Pillar, Tile::Player, Tile::Monster,
            Tile::Treasure, Tile::Amulet, Tile::Exit, Tile::Door,
        ] {
            assert_eq!(Tile::from_char(t.to_char()), Some(t));
        }
    }

    #[test]
    fn unknown_symbol_is_none() {
        assert_eq!(Tile::from_char('?'), None);
        assert_eq!(Tile::from_char(' '), None);
    }

    #[test]
    fn blocking_and_sight() {
        assert!(Tile::Pillar.is_blocking());
        assert!(Tile::Monster.is_blocking());
        assert!(!Tile::Exit.is_blocking());
        assert!(Tile::Pillar.blocks_sight());
        assert!(!Tile::Monster.blocks_sight());
    }
}
