/// Monster AI — straight-line sight, one step per turn.
///
/// Monsters have no pathfinding. Each turn the four cardinal rays from the
/// player's cell are scanned outward; a pillar ends the ray (no monster
/// beyond it sees the player). Every monster met before that moves exactly
/// one cell inward along its ray, and scanning continues outward over the
/// already-updated grid — so two monsters with a gap between them both
/// advance in the same pass (a conga line).
///
/// A monster that is already adjacent steps onto the player's cell; the
/// final check reads that cell to report contact. This routine never touches
/// the player's recorded position.

use super::entity::Player;
use super::grid::Grid;
use super::tile::Tile;

const DIRS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Advance every monster with line of sight one cell toward the player.
/// Returns true iff a monster now occupies the player's cell.
pub fn advance_monsters(grid: &mut Grid, player: &Player) -> bool {
    for &(dr, dc) in &DIRS {
        let mut r = player.row as isize + dr;
        let mut c = player.col as isize + dc;

        while r >= 0
            && c >= 0
            && (r as usize) < grid.rows()
            && (c as usize) < grid.cols()
        {
            let (ru, cu) = (r as usize, c as usize);
            let tile = grid.get(ru, cu);
            if tile.blocks_sight() {
                break;
            }
            if tile == Tile::Monster {
                // One step inward; (r - dr, c - dc) is on the segment back
                // to the player, so it is always in bounds.
                grid.set((r - dr) as usize, (c - dc) as usize, Tile::Monster);
                grid.set(ru, cu, Tile::Open);
            }
            r += dr;
            c += dc;
        }
    }

    grid.get(player.row, player.col) == Tile::Monster
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Same diagram helper as the movement tests.
    fn grid_from(rows: &[&str]) -> (Grid, Player) {
        let mut g = Grid::new(rows.len(), rows[0].len()).unwrap();
        let mut player = Player::new(0, 0);
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                let t = Tile::from_char(ch).unwrap_or(Tile::Open);
                g.set(r, c, t);
                if t == Tile::Player {
                    player = Player::new(r, c);
                }
            }
        }
        (g, player)
    }

    #[test]
    fn adjacent_monster_reaches_player() {
        // 3x3, player center, monster directly left: one call, contact.
        let (mut g, p) = grid_from(&[
            "...",
            "M@.",
            "...",
        ]);
        assert!(advance_monsters(&mut g, &p));
        assert_eq!(g.get(1, 0), Tile::Open);
        assert_eq!(g.get(1, 1), Tile::Monster);
        // The AI never moves the player record.
        assert_eq!((p.row, p.col), (1, 1));
    }

    #[test]
    fn distant_monster_closes_one_cell_per_call() {
        let (mut g, p) = grid_from(&[
            "@...M",
        ]);
        assert!(!advance_monsters(&mut g, &p));
        assert_eq!(g.get(0, 4), Tile::Open);
        assert_eq!(g.get(0, 3), Tile::Monster);

        assert!(!advance_monsters(&mut g, &p));
        assert_eq!(g.get(0, 2), Tile::Monster);
    }

    #[test]
    fn pillar_cuts_line_of_sight() {
        let (mut g, p) = grid_from(&[
            "@.#.M",
        ]);
        let before = g.clone();
        assert!(!advance_monsters(&mut g, &p));
        assert_eq!(g, before, "monster behind a pillar must not move");
    }

    #[test]
    fn monster_off_ray_never_moves() {
        // Diagonal monster: no cardinal ray sees it.
        let (mut g, p) = grid_from(&[
            "M..",
            ".@.",
            "...",
        ]);
        let before = g.clone();
        assert!(!advance_monsters(&mut g, &p));
        assert_eq!(g, before);
    }

    #[test]
    fn all_four_rays_advance() {
        let (mut g, p) = grid_from(&[
            "..M..",
            ".....",
            "M.@.M",
            ".....",
            "..M..",
        ]);
        assert!(!advance_monsters(&mut g, &p));
        assert_eq!(g.get(1, 2), Tile::Monster); // from above
        assert_eq!(g.get(3, 2), Tile::Monster); // from below
        assert_eq!(g.get(2, 1), Tile::Monster); // from the left
        assert_eq!(g.get(2, 3), Tile::Monster); // from the right
        assert_eq!(g.get(0, 2), Tile::Open);
        assert_eq!(g.get(4, 2), Tile::Open);
        assert_eq!(g.get(2, 0), Tile::Open);
        assert_eq!(g.get(2, 4), Tile::Open);
    }

    #[test]
    fn conga_line_advances_together() {
        // Both monsters on one ray move one step in a single pass: the
        // nearer one vacates its cell, the farther one fills the gap.
        let (mut g, p) = grid_from(&[
            "@.M.M",
        ]);
        assert!(!advance_monsters(&mut g, &p));
        assert_eq!(g.get(0, 1), Tile::Monster);
        assert_eq!(g.get(0, 2), Tile::Open);
        assert_eq!(g.get(0, 3), Tile::Monster);
        assert_eq!(g.get(0, 4), Tile::Open);

        // Next pass: the near monster makes contact.
        assert!(advance_monsters(&mut g, &p));
        assert_eq!(g.get(0, 0), Tile::Monster);
        assert_eq!(g.get(0, 2), Tile::Monster);
    }

    #[test]
    fn no_monsters_returns_false() {
        let (mut g, p) = grid_from(&[
            ".@.",
        ]);
        assert!(!advance_monsters(&mut g, &p));
    }
}
