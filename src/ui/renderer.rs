/// Presentation layer: full-frame terminal renderer.
///
/// One frame per turn, so no diffing or double buffering: every draw
/// rebuilds the screen with batched `queue!` commands and a single flush.

use std::io::{self, BufWriter, Stdout, Write};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::domain::tile::Tile;
use crate::sim::world::{Phase, WorldState};

pub struct Renderer {
    out: BufWriter<Stdout>,
}

impl Renderer {
    pub fn new() -> Self {
        Renderer {
            out: BufWriter::new(io::stdout()),
        }
    }

    pub fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(self.out, EnterAlternateScreen, Hide)?;
        Ok(())
    }

    pub fn cleanup(&mut self) -> io::Result<()> {
        execute!(self.out, Show, LeaveAlternateScreen, ResetColor)?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    pub fn draw(&mut self, world: &WorldState) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;

        // HUD line.
        queue!(
            self.out,
            SetForegroundColor(Color::White),
            Print(format!(
                "Level {}/{}  {}   Treasure: {}   Turns: {}",
                world.current_level + 1,
                world.total_levels,
                world.level_name,
                world.player.treasure,
                world.turns,
            )),
        )?;

        // The grid, row-major below the HUD. Commands are queued, so the
        // per-cell MoveTo still flushes as one batch.
        for (r, c, tile) in world.grid.cells() {
            queue!(
                self.out,
                MoveTo(c as u16, (r + 2) as u16),
                SetForegroundColor(tile_color(tile)),
                Print(tile.to_char()),
            )?;
        }

        let below = (world.grid.rows() + 3) as u16;
        match world.phase {
            Phase::Playing => {
                if !world.message.is_empty() {
                    queue!(
                        self.out,
                        MoveTo(0, below),
                        SetForegroundColor(Color::Cyan),
                        Print(&world.message),
                    )?;
                }
            }
            Phase::Won => {
                queue!(
                    self.out,
                    MoveTo(0, below),
                    SetForegroundColor(Color::Green),
                    Print("You escaped the dungeon!  [r] replay level  [q] quit"),
                )?;
            }
            Phase::Dead => {
                queue!(
                    self.out,
                    MoveTo(0, below),
                    SetForegroundColor(Color::Red),
                    Print("A monster got you.  [r] retry level  [q] quit"),
                )?;
            }
        }

        queue!(self.out, ResetColor)?;
        self.out.flush()
    }
}

fn tile_color(tile: Tile) -> Color {
    match tile {
        Tile::Open => Color::DarkGrey,
        Tile::Pillar => Color::Grey,
        Tile::Player => Color::Yellow,
        Tile::Monster => Color::Red,
        Tile::Treasure => Color::DarkYellow,
        Tile::Amulet => Color::Magenta,
        Tile::Exit => Color::Green,
        Tile::Door => Color::Cyan,
    }
}
