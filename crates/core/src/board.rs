//! Board module - settled piece cells
//!
//! Once a falling piece settles it decomposes into individual cells that no
//! longer remember which piece they came from. The board keeps them in a flat
//! array indexed by cell, which doubles as the occupancy index for collision
//! checks.
//! Coordinates: (x, y) where x ranges 0..17 (left to right), y ranges 0..24 (top to bottom)

use crate::grid::{in_bounds, CELL_COUNT};
use crate::pieces::piece_type;
use crate::types::{PieceKind, Pos, Rgb, GRID_HEIGHT, GRID_WIDTH};

/// A board slot: empty, or a settled cell remembering its piece kind (for color)
pub type Cell = Option<PieceKind>;

/// Settled cells - 18 columns x 25 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; CELL_COUNT],
    /// Number of occupied cells
    count: usize,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
            count: 0,
        }
    }

    /// Calculate flat index from a cell
    #[inline(always)]
    fn index(pos: Pos) -> Option<usize> {
        if !in_bounds(pos) {
            return None;
        }
        Some((pos.y as usize) * (GRID_WIDTH as usize) + (pos.x as usize))
    }

    pub fn width(&self) -> u8 {
        GRID_WIDTH
    }

    pub fn height(&self) -> u8 {
        GRID_HEIGHT
    }

    /// Get cell at `pos`. Returns None if out of bounds
    pub fn get(&self, pos: Pos) -> Option<Cell> {
        Self::index(pos).map(|idx| self.cells[idx])
    }

    /// Check if position holds a settled cell
    pub fn is_occupied(&self, pos: Pos) -> bool {
        matches!(self.get(pos), Some(Some(_)))
    }

    /// Place a settled cell. Returns false if out of bounds
    pub fn set(&mut self, pos: Pos, kind: PieceKind) -> bool {
        match Self::index(pos) {
            Some(idx) => {
                if self.cells[idx].is_none() {
                    self.count += 1;
                }
                self.cells[idx] = Some(kind);
                true
            }
            None => false,
        }
    }

    /// Remove the settled cell at `pos`, returning what was there
    pub fn remove(&mut self, pos: Pos) -> Option<PieceKind> {
        let idx = Self::index(pos)?;
        let taken = self.cells[idx].take();
        if taken.is_some() {
            self.count -= 1;
        }
        taken
    }

    /// Decompose a piece into individual settled cells.
    ///
    /// Returns how many cells were written; cells outside the grid are skipped.
    pub fn settle(&mut self, cells: &[Pos], kind: PieceKind) -> usize {
        cells.iter().filter(|&&pos| self.set(pos, kind)).count()
    }

    /// Number of settled cells
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterate settled cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Pos, PieceKind)> + '_ {
        let width = GRID_WIDTH as usize;
        self.cells.iter().enumerate().filter_map(move |(idx, cell)| {
            cell.map(|kind| (Pos::new((idx % width) as i8, (idx / width) as i8), kind))
        })
    }

    /// Color of the settled cell at `pos`
    pub fn color_at(&self, pos: Pos) -> Option<Rgb> {
        self.get(pos).flatten().map(|kind| piece_type(kind).color)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
