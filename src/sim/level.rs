/// Level loader.
///
/// ## Level format
///
/// A whitespace-separated token stream:
///
/// ```text
/// rows cols playerRow playerCol
/// <rows * cols tile symbols, row-major>
/// ```
///
/// Tile legend: `.` open  `#` pillar  `M` monster  `T` treasure
/// `A` amulet  `X` exit  `D` door  (`@` is stamped by the loader).
/// Unknown symbols load as open floor and are logged, not rejected.
///
/// ## Sources (priority order):
///   1. `levels/` directory (individual `.txt` files, sorted by name)
///   2. Built-in embedded levels
///
/// Failures are all-or-nothing: no grid is ever returned partially built.

use std::path::Path;

use log::{debug, warn};
use thiserror::Error;

use crate::domain::entity::Player;
use crate::domain::grid::{Grid, GridError};
use crate::domain::tile::Tile;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read level source: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed level: {0}")]
    Parse(String),
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// A level source ready to parse: display name + raw token stream.
#[derive(Clone, Debug)]
pub struct LevelDef {
    pub name: String,
    pub source: String,
}

// ══════════════════════════════════════════════════════════════
// Parsing
// ══════════════════════════════════════════════════════════════

/// Parse a level from its token stream and stamp the player marker.
pub fn parse_level(src: &str) -> Result<(Grid, Player), LoadError> {
    let mut tokens = src.split_whitespace();

    let rows = next_int(&mut tokens, "row count")?;
    let cols = next_int(&mut tokens, "column count")?;
    let start_row = next_int(&mut tokens, "starting row")?;
    let start_col = next_int(&mut tokens, "starting column")?;

    if rows < 0 || cols < 0 {
        return Err(GridError::InvalidDimensions.into());
    }
    let (rows, cols) = (rows as usize, cols as usize);

    // Overflow guard before any allocation (Grid::new re-checks).
    rows.checked_mul(cols)
        .ok_or(GridError::Overflow { rows, cols })?;

    let mut grid = Grid::new(rows, cols)?;
    for r in 0..rows {
        for c in 0..cols {
            let tok = tokens.next().ok_or_else(|| {
                LoadError::Parse(format!(
                    "level data ends early: expected {} tiles, got {}",
                    rows * cols,
                    r * cols + c,
                ))
            })?;
            let ch = tok.chars().next().unwrap_or(' ');
            let tile = Tile::from_char(ch).unwrap_or_else(|| {
                warn!("unknown tile symbol {ch:?} at ({r}, {c}), loading as open floor");
                Tile::Open
            });
            grid.set(r, c, tile);
        }
    }

    if start_row < 0 || start_col < 0 || !grid.in_bounds(start_row as usize, start_col as usize) {
        return Err(LoadError::Parse(format!(
            "starting position ({start_row}, {start_col}) is outside the {rows} x {cols} grid",
        )));
    }
    let player = Player::new(start_row as usize, start_col as usize);
    grid.set(player.row, player.col, Tile::Player);

    debug!("parsed level: {rows} x {cols}, start ({}, {})", player.row, player.col);
    Ok((grid, player))
}

fn next_int<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    what: &str,
) -> Result<i64, LoadError> {
    let tok = tokens
        .next()
        .ok_or_else(|| LoadError::Parse(format!("missing {what}")))?;
    tok.parse::<i64>()
        .map_err(|_| LoadError::Parse(format!("bad {what}: {tok:?}")))
}

// ══════════════════════════════════════════════════════════════
// Level sourcing: directory scan + embedded fallback
// ══════════════════════════════════════════════════════════════

/// Collect level definitions: `levels_dir/*.txt` sorted by filename,
/// or the built-in set when the directory yields nothing. Each file is
/// parse-checked up front; broken files are skipped with a warning rather
/// than aborting the session at level transition.
pub fn collect_levels(levels_dir: &Path) -> Vec<LevelDef> {
    let mut found: Vec<(String, LevelDef)> = vec![];

    if let Ok(entries) = std::fs::read_dir(levels_dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().map_or(false, |e| e == "txt") {
                if let Ok(source) = std::fs::read_to_string(&path) {
                    if let Err(e) = parse_level(&source) {
                        warn!("skipping level {}: {e}", path.display());
                        continue;
                    }
                    let name = path
                        .file_stem()
                        .unwrap_or_default()
                        .to_string_lossy()
                        .to_string();
                    found.push((name.clone(), LevelDef { name, source }));
                }
            }
        }
    }

    if found.is_empty() {
        debug!("no levels in {}, using embedded set", levels_dir.display());
        return embedded_levels();
    }

    found.sort_by(|a, b| a.0.cmp(&b.0));
    found.into_iter().map(|(_, def)| def).collect()
}

fn embedded_levels() -> Vec<LevelDef> {
    vec![
        make_embedded(
            "Antechamber",
            "7 9 1 1
             . . . # . . . . .
             . . . # . T . . .
             . . . # . . . . .
             . . M . . # # # .
             . . . # . . A . .
             . T . # . . . . D
             . . . # . . . . X",
        ),
        make_embedded(
            "Pillar Gallery",
            "8 11 4 0
             . . # . . . M . . . .
             . # . # . . . . # . .
             . . . . . # . . T . .
             T . # . . # . . # # .
             . . # . M # . . . . .
             . # . . . . . # . A .
             . . . # . . # . . # D
             M . . # . . . . . # X",
        ),
        make_embedded(
            "The Long Stair",
            "9 7 8 3
             . . . X . . .
             . # # # # # .
             . T . M . T .
             . # . # . # .
             . . . . . . .
             # # . # . # #
             . M . # . M .
             . . . A . . .
             . . . . . . .",
        ),
    ]
}

fn make_embedded(name: &str, source: &str) -> LevelDef {
    LevelDef {
        name: name.to_string(),
        source: source.to_string(),
    }
}

// ══════════════════════════════════════════════════════════════
// Tests
// ══════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::Direction;
    use crate::domain::rules::{resolve_move, Status};

    #[test]
    fn two_by_two_source_parses_and_stamps_player() {
        let (mut grid, mut player) = parse_level("2 2 0 0 . # T X").unwrap();
        assert_eq!(grid.get(0, 0), Tile::Player); // stamped over '.'
        assert_eq!(grid.get(0, 1), Tile::Pillar);
        assert_eq!(grid.get(1, 0), Tile::Treasure);
        assert_eq!(grid.get(1, 1), Tile::Exit);
        assert_eq!((player.row, player.col, player.treasure), (0, 0, 0));

        // Moving right runs into the pillar.
        assert_eq!(resolve_move(&mut grid, &mut player, Some(Direction::Right)), Status::Stay);
    }

    #[test]
    fn player_stamp_replaces_underlying_symbol() {
        let (grid, player) = parse_level("1 3 0 1 T M T").unwrap();
        assert_eq!(grid.get(0, 1), Tile::Player);
        assert_eq!((player.row, player.col), (0, 1));
    }

    #[test]
    fn truncated_tile_data_is_rejected() {
        let err = parse_level("2 2 0 0 . #").unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn missing_header_is_rejected() {
        assert!(matches!(parse_level(""), Err(LoadError::Parse(_))));
        assert!(matches!(parse_level("3 3"), Err(LoadError::Parse(_))));
    }

    #[test]
    fn negative_dimensions_are_rejected() {
        let err = parse_level("-1 4 0 0").unwrap_err();
        assert!(matches!(err, LoadError::Grid(GridError::InvalidDimensions)));
    }

    #[test]
    fn oversized_dimensions_fail_before_allocation() {
        let err = parse_level("100000000000 100000000000 0 0").unwrap_err();
        assert!(matches!(err, LoadError::Grid(GridError::Overflow { .. })));
    }

    #[test]
    fn out_of_bounds_start_is_rejected() {
        let err = parse_level("2 2 5 0 . . . .").unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
        let err = parse_level("2 2 0 -1 . . . .").unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn unknown_symbols_load_as_open_floor() {
        let (grid, _) = parse_level("1 3 0 0 . ? Z").unwrap();
        assert_eq!(grid.get(0, 1), Tile::Open);
        assert_eq!(grid.get(0, 2), Tile::Open);
    }

    #[test]
    fn collect_skips_broken_files_and_sorts_by_name() {
        let dir = std::env::temp_dir().join(format!("delver-levels-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("b-second.txt"), "1 1 0 0 .").unwrap();
        std::fs::write(dir.join("a-first.txt"), "1 2 0 0 . X").unwrap();
        std::fs::write(dir.join("broken.txt"), "2 2 0 0 .").unwrap(); // truncated
        std::fs::write(dir.join("notes.md"), "not a level").unwrap();

        let defs = collect_levels(&dir);
        std::fs::remove_dir_all(&dir).unwrap();

        let names: Vec<&str> = defs.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["a-first", "b-second"]);
    }

    #[test]
    fn missing_directory_falls_back_to_embedded() {
        let defs = collect_levels(Path::new("/nonexistent/delver-levels"));
        assert_eq!(defs.len(), embedded_levels().len());
    }

    #[test]
    fn embedded_levels_all_parse() {
        let defs = embedded_levels();
        assert!(!defs.is_empty());
        for def in defs {
            let (grid, player) = parse_level(&def.source)
                .unwrap_or_else(|e| panic!("embedded level {:?} broken: {e}", def.name));
            assert_eq!(grid.get(player.row, player.col), Tile::Player);
            // Exactly one way out somewhere on the map.
            let exits = grid
                .cells()
                .filter(|&(_, _, t)| t == Tile::Exit || t == Tile::Door)
                .count();
            assert!(exits >= 1, "level {:?} has no exit", def.name);
        }
    }
}
