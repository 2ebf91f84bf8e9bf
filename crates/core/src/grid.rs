//! Grid geometry - the fixed 18x25 lattice every entity lives on.
//!
//! Occupancy is not tracked here. Callers compose occupancy predicates from
//! the entity state (snake body, settled [`Board`](crate::board::Board),
//! falling piece).

use crate::types::{Pos, GRID_HEIGHT, GRID_WIDTH};

/// Total number of cells on the grid
pub const CELL_COUNT: usize = (GRID_WIDTH as usize) * (GRID_HEIGHT as usize);

/// Check if a cell lies inside the grid
#[inline(always)]
pub fn in_bounds(pos: Pos) -> bool {
    pos.x >= 0 && pos.x < GRID_WIDTH as i8 && pos.y >= 0 && pos.y < GRID_HEIGHT as i8
}

/// True when the cell is at or below the bottom edge
#[inline(always)]
pub fn below_floor(pos: Pos) -> bool {
    pos.y >= GRID_HEIGHT as i8
}

/// Every cell of the grid, column by column (x outer, y inner).
///
/// Random placement indexes into this order, so it is part of the
/// deterministic-seed contract.
pub fn cells() -> impl Iterator<Item = Pos> {
    (0..GRID_WIDTH as i8).flat_map(|x| (0..GRID_HEIGHT as i8).map(move |y| Pos::new(x, y)))
}

/// Center cell, used as the snake's starting head
pub fn center() -> Pos {
    Pos::new((GRID_WIDTH / 2) as i8, (GRID_HEIGHT / 2) as i8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_cover_exactly_the_grid() {
        assert!(in_bounds(Pos::new(0, 0)));
        assert!(in_bounds(Pos::new(17, 24)));
        assert!(!in_bounds(Pos::new(-1, 0)));
        assert!(!in_bounds(Pos::new(0, -1)));
        assert!(!in_bounds(Pos::new(18, 0)));
        assert!(!in_bounds(Pos::new(0, 25)));
    }

    #[test]
    fn cells_enumerates_column_major() {
        let all: Vec<Pos> = cells().collect();
        assert_eq!(all.len(), CELL_COUNT);
        assert_eq!(all[0], Pos::new(0, 0));
        assert_eq!(all[1], Pos::new(0, 1));
        assert_eq!(all[25], Pos::new(1, 0));
        assert!(all.iter().all(|&p| in_bounds(p)));
    }

    #[test]
    fn center_matches_snake_start() {
        assert_eq!(center(), Pos::new(9, 12));
    }
}
