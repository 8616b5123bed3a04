/// WorldState: the complete snapshot of a running session.
///
/// Owns the grid and the player exclusively; a new level replaces both.
/// Phase transitions are driven by `step::take_turn` and by the driver's
/// level sequencing (Leave/Escape statuses).

use log::info;

use crate::domain::entity::Player;
use crate::domain::grid::Grid;
use crate::sim::level::{self, LevelDef, LoadError};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Playing,
    /// Escaped through the exit (or cleared the last level).
    Won,
    /// A monster reached the player.
    Dead,
}

pub struct WorldState {
    pub grid: Grid,
    pub player: Player,
    pub phase: Phase,

    pub current_level: usize,
    pub total_levels: usize,
    pub level_name: String,
    pub turns: u64,

    // Transient HUD message.
    pub message: String,
    pub message_timer: u32,
}

impl WorldState {
    pub fn new() -> Self {
        WorldState {
            // A 0x0 grid is a valid empty grid; a real level replaces it.
            grid: Grid::new(0, 0).expect("empty grid"),
            player: Player::new(0, 0),
            phase: Phase::Playing,
            current_level: 0,
            total_levels: 0,
            level_name: String::new(),
            turns: 0,
            message: String::new(),
            message_timer: 0,
        }
    }

    /// Install a level: fresh grid, fresh player (treasure resets).
    /// On failure the previous grid and player are left untouched.
    pub fn load_level(&mut self, idx: usize, defs: &[LevelDef]) -> Result<(), LoadError> {
        let def = &defs[idx];
        let (grid, player) = level::parse_level(&def.source)?;
        info!(
            "level {}/{} {:?}: {} x {}",
            idx + 1,
            defs.len(),
            def.name,
            grid.rows(),
            grid.cols(),
        );

        self.grid = grid;
        self.player = player;
        self.phase = Phase::Playing;
        self.current_level = idx;
        self.total_levels = defs.len();
        self.level_name = def.name.clone();
        self.turns = 0;
        self.set_message(&def.name, 6);
        Ok(())
    }

    pub fn set_message(&mut self, msg: &str, turns: u32) {
        self.message = msg.to_string();
        self.message_timer = turns;
    }
}
