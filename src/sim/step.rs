/// The turn function: advances the world by one player turn.
///
/// Processing order:
///   1. Movement resolution (may pick up treasure / amulet, may leave)
///   2. Amulet growth — the dungeon doubles when the amulet is taken
///   3. Monster pass — skipped when the player left the level this turn
///   4. Death check (monster contact wins over any movement status)
///
/// The monster pass runs even on a `Stay`: standing still does not stop
/// monsters with line of sight from closing in.

use log::{info, warn};

use crate::domain::ai;
use crate::domain::entity::Direction;
use crate::domain::rules::{self, Status};
use super::world::{Phase, WorldState};

/// What the driver needs to know about one completed turn.
#[derive(Clone, Copy, Debug)]
pub struct TurnReport {
    pub status: Status,
    pub monster_contact: bool,
}

pub fn take_turn(world: &mut WorldState, dir: Option<Direction>) -> TurnReport {
    if world.phase != Phase::Playing {
        return TurnReport { status: Status::Stay, monster_contact: false };
    }

    world.turns += 1;
    if world.message_timer > 0 {
        world.message_timer -= 1;
        if world.message_timer == 0 {
            world.message.clear();
        }
    }

    let status = rules::resolve_move(&mut world.grid, &mut world.player, dir);

    if status == Status::AmuletFound {
        // The amulet reveals a larger dungeon. On overflow the grid is
        // unchanged and play continues on the old bounds.
        match world.grid.resize_double() {
            Ok(()) => {
                info!(
                    "amulet taken, dungeon now {} x {}",
                    world.grid.rows(),
                    world.grid.cols(),
                );
                world.set_message("The dungeon grows around you!", 4);
            }
            Err(e) => {
                warn!("amulet resize failed: {e}");
                world.set_message("The walls groan, but hold.", 4);
            }
        }
    }

    // Leaving the level ends the turn before monsters react.
    let left = matches!(status, Status::Leave | Status::Escape);
    let monster_contact = if left {
        false
    } else {
        ai::advance_monsters(&mut world.grid, &world.player)
    };

    if monster_contact {
        world.phase = Phase::Dead;
    }

    TurnReport { status, monster_contact }
}
