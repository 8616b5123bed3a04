/// Movement resolution — one transition per call, no partial mutation.
///
/// Pure state machine over (grid, player, direction). Checks run in a fixed
/// priority order; the first denial wins and leaves both grid and player
/// untouched:
///
/// ┌───────────────────────────────┬─────────────────┐
/// │ Condition (priority order)     │ Outcome         │
/// ├───────────────────────────────┼─────────────────┤
/// │ target outside the grid        │ Stay, no change │
/// │ target is pillar or monster    │ Stay, no change │
/// │ target is exit, treasure == 0  │ Stay, no change │
/// │ target is door                 │ Leave + move    │
/// │ target is exit, treasure > 0   │ Escape + move   │
/// │ target is amulet               │ AmuletFound + move │
/// │ target is treasure             │ TreasureFound + move, treasure += 1 │
/// │ target is open floor           │ Move            │
/// └───────────────────────────────┴─────────────────┘
///
/// A cell holds exactly one symbol, so the refinement rows are mutually
/// exclusive; the order only matters for the denials at the top.
///
/// On any moving outcome the origin cell reverts to open floor, the target
/// becomes the player marker, and the player's recorded position updates —
/// all in the same step, keeping the position/marker dual representation
/// consistent.

use super::entity::{Direction, Player};
use super::grid::Grid;
use super::tile::Tile;

/// Outcome of one movement attempt, consumed by the driver.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Status {
    /// Blocked or no-op; nothing changed.
    Stay,
    /// Stepped onto open floor.
    Move,
    /// Stepped through a side door (no treasure needed).
    Leave,
    /// Stepped onto the exit with treasure in hand.
    Escape,
    /// Picked up the amulet.
    AmuletFound,
    /// Picked up a treasure.
    TreasureFound,
}

/// Apply one requested step. See the module table for the exact order.
///
/// `None` is the unrecognized-input catch-all: a zero-delta step. It targets
/// the player's own cell, which is never blocking, so it resolves as a
/// `Move` that changes nothing — a turn still passes.
pub fn resolve_move(grid: &mut Grid, player: &mut Player, dir: Option<Direction>) -> Status {
    let (dr, dc) = dir.map_or((0, 0), Direction::delta);
    let next_row = player.row as isize + dr;
    let next_col = player.col as isize + dc;

    if next_row < 0 || next_col < 0 {
        return Status::Stay;
    }
    let (next_row, next_col) = (next_row as usize, next_col as usize);
    if !grid.in_bounds(next_row, next_col) {
        return Status::Stay;
    }

    let target = grid.get(next_row, next_col);
    if target.is_blocking() {
        return Status::Stay;
    }

    let status = match target {
        Tile::Door => Status::Leave,
        Tile::Exit => {
            if player.treasure == 0 {
                return Status::Stay;
            }
            Status::Escape
        }
        Tile::Amulet => Status::AmuletFound,
        Tile::Treasure => {
            player.treasure += 1;
            Status::TreasureFound
        }
        _ => Status::Move,
    };

    grid.set(player.row, player.col, Tile::Open);
    player.row = next_row;
    player.col = next_col;
    grid.set(next_row, next_col, Tile::Player);
    status
}
