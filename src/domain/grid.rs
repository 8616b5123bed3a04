/// Grid: owned storage for the dungeon map.
///
/// One contiguous row-major buffer, single owner. All runtime mutation goes
/// through `get`/`set`, which assert bounds: the resolver and the monster AI
/// always range-check before touching the grid, so an out-of-range index here
/// is a logic bug and panics instead of clamping.
///
/// The only growth operation is `resize_double`, which rebuilds the whole
/// buffer (original content in the top-left quadrant, tiled into the other
/// three with the player marker suppressed). Rebuilding wholesale keeps the
/// uniform-row invariant trivially true and makes failure atomic: either the
/// new buffer fully replaces the old one, or the grid is left untouched.

use thiserror::Error;

use super::tile::Tile;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    /// A negative row or column count was requested (only reachable from
    /// parsed input; `usize` dimensions cannot go negative in-process).
    #[error("invalid grid dimensions")]
    InvalidDimensions,
    /// rows * cols (or a doubling) exceeds the addressable index range.
    #[error("grid of {rows} x {cols} exceeds the addressable range")]
    Overflow { rows: usize, cols: usize },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Create a rows x cols grid of open floor.
    pub fn new(rows: usize, cols: usize) -> Result<Grid, GridError> {
        let len = rows
            .checked_mul(cols)
            .ok_or(GridError::Overflow { rows, cols })?;
        Ok(Grid {
            rows,
            cols,
            tiles: vec![Tile::Open; len],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Read one cell. Panics on out-of-range indices.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Tile {
        assert!(
            self.in_bounds(row, col),
            "grid read out of bounds: ({row}, {col}) on {} x {}",
            self.rows, self.cols,
        );
        self.tiles[row * self.cols + col]
    }

    /// Write one cell. Panics on out-of-range indices.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, tile: Tile) {
        assert!(
            self.in_bounds(row, col),
            "grid write out of bounds: ({row}, {col}) on {} x {}",
            self.rows, self.cols,
        );
        self.tiles[row * self.cols + col] = tile;
    }

    /// Read-only iteration over all cells in row-major order, the query
    /// surface the renderer draws from.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Tile)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .map(|(i, &t)| (i / self.cols, i % self.cols, t))
    }

    /// Double both dimensions, tiling the current content into all four
    /// quadrants. The top-left quadrant is an exact copy; the other three
    /// replace the player marker with open floor so the player is not
    /// duplicated. On `Overflow` the grid is left unmodified.
    pub fn resize_double(&mut self) -> Result<(), GridError> {
        let new_rows = self
            .rows
            .checked_mul(2)
            .ok_or(GridError::Overflow { rows: self.rows, cols: self.cols })?;
        let new_cols = self
            .cols
            .checked_mul(2)
            .ok_or(GridError::Overflow { rows: self.rows, cols: self.cols })?;
        let len = new_rows
            .checked_mul(new_cols)
            .ok_or(GridError::Overflow { rows: new_rows, cols: new_cols })?;

        let mut tiles = Vec::with_capacity(len);
        for r in 0..new_rows {
            for c in 0..new_cols {
                let t = self.tiles[(r % self.rows) * self.cols + (c % self.cols)];
                let in_original = r < self.rows && c < self.cols;
                if !in_original && t == Tile::Player {
                    tiles.push(Tile::Open);
                } else {
                    tiles.push(t);
                }
            }
        }

        // Old buffer drops here; the two storages never coexist as live grids.
        self.rows = new_rows;
        self.cols = new_cols;
        self.tiles = tiles;
        Ok(())
    }
}
