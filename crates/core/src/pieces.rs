//! Pieces module - tetromino catalog and kick-based rotation
//!
//! The catalog is a static table of seven piece types. Every falling piece
//! holds a `&'static PieceType`; nothing ever copies or mutates an entry.
//!
//! Rotation states are listed per piece, so pieces with symmetric shapes carry
//! fewer states (O has one, I/S/Z have two, T/L/J have four). Rotation indices
//! wrap modulo that count.

use crate::types::{PieceKind, Pos, Rgb, GRID_WIDTH};

/// Offset of a single cell relative to the piece anchor
pub type CellOffset = (i8, i8);

/// Shape of a piece - 4 cell offsets from the anchor
pub type PieceShape = [CellOffset; 4];

/// Immutable catalog entry
#[derive(Debug, PartialEq, Eq)]
pub struct PieceType {
    pub kind: PieceKind,
    pub color: Rgb,
    pub rotations: &'static [PieceShape],
}

impl PieceType {
    pub fn rotation_count(&self) -> usize {
        self.rotations.len()
    }

    /// Shape for a rotation index (wrapped)
    pub fn shape(&self, rotation: usize) -> &'static PieceShape {
        &self.rotations[rotation % self.rotations.len()]
    }

    /// Absolute cells of this piece anchored at `(x, y)`
    pub fn cells(&self, rotation: usize, x: i8, y: i8) -> [Pos; 4] {
        self.shape(rotation).map(|(dx, dy)| Pos::new(x + dx, y + dy))
    }

    /// Rotation index after one clockwise / counter-clockwise step
    pub fn next_rotation(&self, rotation: usize, clockwise: bool) -> usize {
        let n = self.rotation_count();
        if clockwise {
            (rotation + 1) % n
        } else {
            (rotation + n - 1) % n
        }
    }
}

const I_ROTATIONS: &[PieceShape] = &[
    [(0, 0), (1, 0), (2, 0), (3, 0)], // horizontal
    [(0, 0), (0, 1), (0, 2), (0, 3)], // vertical
];

const O_ROTATIONS: &[PieceShape] = &[[(0, 0), (1, 0), (0, 1), (1, 1)]];

const T_ROTATIONS: &[PieceShape] = &[
    [(1, 0), (0, 1), (1, 1), (2, 1)], // up
    [(1, 0), (1, 1), (1, 2), (2, 1)], // right
    [(0, 1), (1, 1), (2, 1), (1, 2)], // down
    [(0, 1), (1, 0), (1, 1), (1, 2)], // left
];

const L_ROTATIONS: &[PieceShape] = &[
    [(0, 0), (0, 1), (0, 2), (1, 2)],
    [(0, 0), (1, 0), (2, 0), (0, 1)],
    [(0, 0), (1, 0), (1, 1), (1, 2)],
    [(2, 0), (0, 1), (1, 1), (2, 1)],
];

const J_ROTATIONS: &[PieceShape] = &[
    [(1, 0), (1, 1), (1, 2), (0, 2)],
    [(0, 0), (0, 1), (1, 1), (2, 1)],
    [(0, 0), (1, 0), (0, 1), (0, 2)],
    [(0, 0), (1, 0), (2, 0), (2, 1)],
];

const S_ROTATIONS: &[PieceShape] = &[
    [(1, 0), (2, 0), (0, 1), (1, 1)],
    [(0, 0), (0, 1), (1, 1), (1, 2)],
];

const Z_ROTATIONS: &[PieceShape] = &[
    [(0, 0), (1, 0), (1, 1), (2, 1)],
    [(1, 0), (0, 1), (1, 1), (0, 2)],
];

/// The seven piece types, indexed by [`PieceKind::index`]
pub static CATALOG: [PieceType; 7] = [
    PieceType {
        kind: PieceKind::I,
        color: Rgb::new(0xff, 0x6b, 0x6b),
        rotations: I_ROTATIONS,
    },
    PieceType {
        kind: PieceKind::O,
        color: Rgb::new(0xff, 0xd9, 0x3d),
        rotations: O_ROTATIONS,
    },
    PieceType {
        kind: PieceKind::T,
        color: Rgb::new(0x6c, 0x5c, 0xe7),
        rotations: T_ROTATIONS,
    },
    PieceType {
        kind: PieceKind::L,
        color: Rgb::new(0xa8, 0xe6, 0xcf),
        rotations: L_ROTATIONS,
    },
    PieceType {
        kind: PieceKind::J,
        color: Rgb::new(0xfd, 0x79, 0xa8),
        rotations: J_ROTATIONS,
    },
    PieceType {
        kind: PieceKind::S,
        color: Rgb::new(0x74, 0xb9, 0xff),
        rotations: S_ROTATIONS,
    },
    PieceType {
        kind: PieceKind::Z,
        color: Rgb::new(0xe1, 0x70, 0x55),
        rotations: Z_ROTATIONS,
    },
];

/// Look up the catalog entry for a kind
pub fn piece_type(kind: PieceKind) -> &'static PieceType {
    &CATALOG[kind.index()]
}

/// Spawn row for new pieces
pub const SPAWN_Y: i8 = 0;

/// Spawn x is drawn from `[0, SPAWN_X_RANGE)`, leaving room for rotations
pub const SPAWN_X_RANGE: u32 = (GRID_WIDTH - 4) as u32;

/// Horizontal shifts tried when a rotation is blocked: pivot first, then
/// one cell left/right, then two cells left/right.
pub const KICK_OFFSETS: [i8; 5] = [0, -1, 1, -2, 2];

/// Try to rotate a piece with horizontal kicks.
///
/// Returns `Some((new_rotation, dx))` for the first placement whose cells all
/// satisfy `is_free`, or None if every kick fails.
pub fn try_rotate(
    piece: &PieceType,
    rotation: usize,
    x: i8,
    y: i8,
    clockwise: bool,
    is_free: impl Fn(Pos) -> bool,
) -> Option<(usize, i8)> {
    let new_rotation = piece.next_rotation(rotation, clockwise);

    KICK_OFFSETS.iter().copied().find_map(|dx| {
        let fits = piece
            .cells(new_rotation, x + dx, y)
            .iter()
            .all(|&pos| is_free(pos));
        fits.then_some((new_rotation, dx))
    })
}
