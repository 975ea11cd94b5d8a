//! Piece geometry and movement through the public API.

use gridfall::core::pieces::{kicks, offsets, preview_offsets};
use gridfall::core::{Board, Piece, ShapeBag};
use gridfall::types::{PieceKind, Rotation};

/// A piece of the given kind at the spawn anchor on an empty board.
fn spawn(kind: PieceKind) -> (Piece, Board) {
    let board = Board::new();
    let mut bag = ShapeBag::new(1);
    let mut piece = Piece::new(&mut bag);
    assert!(piece.reset_to(kind, &board));
    (piece, board)
}

// ============== Shape tables ==============

#[test]
fn test_every_kind_spawns_four_in_bounds_cells() {
    for kind in PieceKind::ALL {
        let (piece, _) = spawn(kind);
        let cells = piece.cells();
        assert_eq!(cells.len(), 4);
        for (x, y) in cells {
            assert!((0..10).contains(&x), "{kind:?} spawns off-board at x={x}");
            assert!((0..20).contains(&y), "{kind:?} spawns off-board at y={y}");
        }
    }
}

#[test]
fn test_i_piece_alternates_row_and_column() {
    let horizontal = offsets(PieceKind::I, Rotation::North);
    assert!(horizontal.iter().all(|&(_, y)| y == horizontal[0].1));

    let vertical = offsets(PieceKind::I, Rotation::East);
    assert!(vertical.iter().all(|&(x, _)| x == vertical[0].0));
}

#[test]
fn test_preview_matches_spawn_orientation() {
    for kind in PieceKind::ALL {
        assert_eq!(preview_offsets(kind), offsets(kind, Rotation::North));
    }
}

// ============== Rotation ==============

#[test]
fn test_four_clockwise_rotations_are_identity() {
    let mid = Board::new();
    for kind in PieceKind::ALL {
        if kind == PieceKind::O {
            continue;
        }
        let (mut piece, _) = spawn(kind);
        for _ in 0..8 {
            piece.move_down(&mid);
        }
        let home = piece.cells();
        for _ in 0..4 {
            assert!(piece.rotate(true, &mid));
        }
        assert_eq!(piece.cells(), home, "{kind:?}");
    }
}

#[test]
fn test_cw_then_ccw_is_identity() {
    let board = Board::new();
    let (mut piece, _) = spawn(PieceKind::J);
    for _ in 0..8 {
        piece.move_down(&board);
    }
    let home = piece.cells();
    assert!(piece.rotate(true, &board));
    assert!(piece.rotate(false, &board));
    assert_eq!(piece.cells(), home);
}

#[test]
fn test_o_rotation_is_rejected() {
    let (mut piece, board) = spawn(PieceKind::O);
    let home = piece.cells();
    assert!(!piece.rotate(true, &board));
    assert_eq!(piece.cells(), home);
}

#[test]
fn test_first_kick_entry_is_always_unshifted() {
    for kind in PieceKind::ALL {
        if kind == PieceKind::O {
            continue;
        }
        for from in [Rotation::North, Rotation::East, Rotation::South, Rotation::West] {
            for clockwise in [true, false] {
                assert_eq!(kicks(kind, from, clockwise)[0], (0, 0));
            }
        }
    }
}

#[test]
fn test_wall_kick_resolves_at_left_wall() {
    // T pointing right, flush against the wall: the plain rotation needs
    // column -1 and only succeeds through a rightward kick.
    let (mut piece, board) = spawn(PieceKind::T);
    for _ in 0..8 {
        piece.move_down(&board);
    }
    assert!(piece.rotate(true, &board));
    while piece.move_left(&board) {}

    assert!(piece.rotate(true, &board));
    assert_eq!(piece.rotation(), Rotation::South);
    assert!(piece.cells().iter().all(|&(x, _)| x >= 0));
}

#[test]
fn test_rotation_fails_when_no_kick_fits() {
    // Horizontal I in a one-row slot at the floor, everything else filled.
    let (mut piece, mut board) = spawn(PieceKind::I);
    while piece.move_down(&board) {}

    let slot = piece.cells();
    for y in 0..20 {
        for x in 0..10 {
            if !slot.contains(&(x, y)) {
                board.set(x, y, Some(PieceKind::S));
            }
        }
    }

    assert!(!piece.rotate(true, &board));
    assert!(!piece.rotate(false, &board));
    assert_eq!(piece.cells(), slot);
}

// ============== Movement and drops ==============

#[test]
fn test_left_then_right_returns_home() {
    let (mut piece, board) = spawn(PieceKind::S);
    let home = piece.cells();
    assert!(piece.move_left(&board));
    assert!(piece.move_right(&board));
    assert_eq!(piece.cells(), home);
}

#[test]
fn test_walls_block_lateral_movement() {
    let (mut piece, board) = spawn(PieceKind::L);
    while piece.move_left(&board) {}
    assert_eq!(piece.cells().iter().map(|&(x, _)| x).min(), Some(0));
    assert!(!piece.move_left(&board));

    while piece.move_right(&board) {}
    assert_eq!(piece.cells().iter().map(|&(x, _)| x).max(), Some(9));
    assert!(!piece.move_right(&board));
}

#[test]
fn test_hard_drop_spans_the_empty_board() {
    // O's lowest cells spawn on row 1 and land on row 19.
    let (mut piece, board) = spawn(PieceKind::O);
    assert_eq!(piece.hard_drop(&board), 18);
    assert_eq!(piece.cells().iter().map(|&(_, y)| y).max(), Some(19));
}

#[test]
fn test_ghost_and_hard_drop_agree() {
    let mut board = Board::new();
    for x in 3..7 {
        board.set(x, 12, Some(PieceKind::Z));
    }
    for kind in PieceKind::ALL {
        let mut bag = ShapeBag::new(1);
        let mut piece = Piece::new(&mut bag);
        assert!(piece.reset_to(kind, &board));

        let ghost = piece.ghost_cells(&board);
        piece.hard_drop(&board);
        assert_eq!(piece.cells(), ghost, "{kind:?}");
    }
}

#[test]
fn test_lock_fills_board_cells() {
    let (mut piece, mut board) = spawn(PieceKind::T);
    piece.hard_drop(&board);
    let cells = piece.cells();
    piece.lock_into(&mut board);

    for (x, y) in cells {
        assert_eq!(board.cell(x, y), Some(PieceKind::T));
    }
    assert!(!board.is_open(cells[0].0, cells[0].1));
}
