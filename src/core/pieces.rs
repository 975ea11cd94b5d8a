//! Piece geometry - tetromino offset tables and SRS wall-kick data.
//!
//! Every shape is four mino offsets relative to the piece anchor. The four
//! rotation states per shape were generated once from the spawn silhouette:
//! J/L/S/T/Z rotate their three non-pivot minos 90 degrees about mino 0
//! (`x' = px - (y - py)`, `y' = py + (x - px)` clockwise, y grows downward),
//! and I rotates about the half-cell midpoint of its two spine minos. Baking
//! the results into tables removes the floating-point pivot math and its
//! truncation edge cases from the hot path.
//!
//! Kick offsets are in the same y-down coordinate system as the board.
//! Reference: https://tetris.wiki/SRS

use crate::types::{PieceKind, Rotation, BOARD_WIDTH};

/// Offset of a single mino relative to the piece anchor.
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets from the anchor.
pub type PieceShape = [MinoOffset; 4];

/// Spawn anchor: horizontal center of the board, one row into the field.
/// Several silhouettes extend one row above the anchor, so spawn cells sit
/// on rows 0..=2.
pub const SPAWN_COL: i8 = (BOARD_WIDTH / 2) as i8;
pub const SPAWN_ROW: i8 = 1;

/// Get the mino offsets for a piece kind and rotation.
pub fn offsets(kind: PieceKind, rotation: Rotation) -> PieceShape {
    match kind {
        PieceKind::I => i_offsets(rotation),
        PieceKind::L => l_offsets(rotation),
        PieceKind::J => j_offsets(rotation),
        PieceKind::O => O_OFFSETS,
        PieceKind::S => s_offsets(rotation),
        PieceKind::T => t_offsets(rotation),
        PieceKind::Z => z_offsets(rotation),
    }
}

/// Spawn-orientation offsets, used for NEXT/HOLD previews.
pub fn preview_offsets(kind: PieceKind) -> PieceShape {
    offsets(kind, Rotation::North)
}

/// I piece. The half-cell pivot keeps mino 0 moving, so no offset is fixed
/// across rotations.
fn i_offsets(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(1, -1), (0, -1), (-1, -1), (-2, -1)],
        Rotation::East => [(0, 1), (0, 0), (0, -1), (0, -2)],
        Rotation::South => [(-2, 0), (-1, 0), (0, 0), (1, 0)],
        Rotation::West => [(-1, -2), (-1, -1), (-1, 0), (-1, 1)],
    }
}

/// O piece - rotation is the identity.
const O_OFFSETS: PieceShape = [(0, 0), (0, -1), (-1, -1), (-1, 0)];

fn l_offsets(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(0, 0), (1, 0), (-1, -1), (-1, 0)],
        Rotation::East => [(0, 0), (0, 1), (1, -1), (0, -1)],
        Rotation::South => [(0, 0), (-1, 0), (1, 1), (1, 0)],
        Rotation::West => [(0, 0), (0, -1), (-1, 1), (0, 1)],
    }
}

fn j_offsets(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(0, 0), (1, 0), (1, -1), (-1, 0)],
        Rotation::East => [(0, 0), (0, 1), (1, 1), (0, -1)],
        Rotation::South => [(0, 0), (-1, 0), (-1, 1), (1, 0)],
        Rotation::West => [(0, 0), (0, -1), (-1, -1), (0, 1)],
    }
}

fn s_offsets(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(0, 0), (1, -1), (0, -1), (-1, 0)],
        Rotation::East => [(0, 0), (1, 1), (1, 0), (0, -1)],
        Rotation::South => [(0, 0), (-1, 1), (0, 1), (1, 0)],
        Rotation::West => [(0, 0), (-1, -1), (-1, 0), (0, 1)],
    }
}

fn t_offsets(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(0, 1), (0, 0), (-1, 1), (1, 1)],
        Rotation::East => [(0, 1), (1, 1), (0, 0), (0, 2)],
        Rotation::South => [(0, 1), (0, 2), (1, 1), (-1, 1)],
        Rotation::West => [(0, 1), (-1, 1), (0, 2), (0, 0)],
    }
}

fn z_offsets(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(0, 0), (1, 0), (0, -1), (-1, -1)],
        Rotation::East => [(0, 0), (0, 1), (1, 0), (1, -1)],
        Rotation::South => [(0, 0), (-1, 0), (0, 1), (1, 1)],
        Rotation::West => [(0, 0), (0, -1), (-1, 0), (-1, 1)],
    }
}

/// SRS wall-kick data: five (dx, dy) offsets tried in order per rotation
/// transition. The first entry is always (0, 0), the unshifted rotation.
/// Indexed by [`kick_index`].
pub type KickTable = [[(i8, i8); 5]; 8];

/// Kick table row for a rotation transition.
pub fn kick_index(from: Rotation, clockwise: bool) -> usize {
    match (from, clockwise) {
        (Rotation::North, true) => 0,  // 0 -> 1
        (Rotation::North, false) => 1, // 0 -> 3
        (Rotation::East, false) => 2,  // 1 -> 0
        (Rotation::East, true) => 3,   // 1 -> 2
        (Rotation::South, false) => 4, // 2 -> 1
        (Rotation::South, true) => 5,  // 2 -> 3
        (Rotation::West, false) => 6,  // 3 -> 2
        (Rotation::West, true) => 7,   // 3 -> 0
    }
}

/// Kick offsets for one rotation attempt. O never reaches here (rotation is
/// rejected earlier), so only two tables exist.
pub fn kicks(kind: PieceKind, from: Rotation, clockwise: bool) -> &'static [(i8, i8); 5] {
    let table = match kind {
        PieceKind::I => &I_KICKS,
        _ => &JLSTZ_KICKS,
    };
    &table[kick_index(from, clockwise)]
}

/// Kick table shared by J, L, S, T, Z.
pub const JLSTZ_KICKS: KickTable = [
    // 0 -> 1
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    // 0 -> 3
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    // 1 -> 0
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    // 1 -> 2
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    // 2 -> 1
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    // 2 -> 3
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    // 3 -> 2
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    // 3 -> 0
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
];

/// I piece kick table.
pub const I_KICKS: KickTable = [
    // 0 -> 1
    [(0, 0), (-2, 0), (1, 0), (-2, 1), (1, -2)],
    // 0 -> 3
    [(0, 0), (-1, 0), (2, 0), (-1, -2), (2, 1)],
    // 1 -> 0
    [(0, 0), (2, 0), (-1, 0), (2, -1), (-1, 2)],
    // 1 -> 2
    [(0, 0), (-1, 0), (2, 0), (-1, -2), (2, 1)],
    // 2 -> 1
    [(0, 0), (1, 0), (-2, 0), (1, 2), (-2, -1)],
    // 2 -> 3
    [(0, 0), (2, 0), (-1, 0), (2, -1), (-1, 2)],
    // 3 -> 2
    [(0, 0), (-2, 0), (1, 0), (-2, 1), (1, -2)],
    // 3 -> 0
    [(0, 0), (1, 0), (-2, 0), (1, 2), (-2, -1)],
];
