//! The active falling tetromino.
//!
//! A piece is an anchor position plus a (kind, rotation) pair; its four
//! absolute cells are always recomputed from the geometry tables in
//! [`pieces`](crate::core::pieces), never migrated incrementally. The piece
//! also carries the preview shape and the hold slot, both refilled from the
//! match's [`ShapeBag`].
//!
//! Cells may sit on negative rows while the piece is still partially above
//! the visible field; every collision check here treats those rows as vacant
//! and `lock_into` never writes them.

use crate::core::pieces::{kicks, offsets, PieceShape, SPAWN_COL, SPAWN_ROW};
use crate::core::{Board, ShapeBag};
use crate::types::{PieceKind, Rotation};

#[derive(Debug, Clone)]
pub struct Piece {
    kind: PieceKind,
    rotation: Rotation,
    col: i8,
    row: i8,
    next: PieceKind,
    hold: Option<PieceKind>,
}

impl Piece {
    /// Create the first piece of a match, drawing the current and preview
    /// shapes from the bag.
    pub fn new(bag: &mut ShapeBag) -> Self {
        let kind = bag.draw();
        let next = bag.draw();
        Self {
            kind,
            rotation: Rotation::North,
            col: SPAWN_COL,
            row: SPAWN_ROW,
            next,
            hold: None,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn next_shape(&self) -> PieceKind {
        self.next
    }

    pub fn held_shape(&self) -> Option<PieceKind> {
        self.hold
    }

    pub fn is_holding(&self) -> bool {
        self.hold.is_some()
    }

    /// The four absolute board cells occupied by the piece.
    pub fn cells(&self) -> PieceShape {
        let mut cells = offsets(self.kind, self.rotation);
        for (x, y) in &mut cells {
            *x += self.col;
            *y += self.row;
        }
        cells
    }

    /// Drop the piece one row. Returns false (and leaves the piece in place)
    /// when any cell would reach the floor or an occupied cell.
    pub fn move_down(&mut self, board: &Board) -> bool {
        if self.cells().iter().any(|&(x, y)| !board.is_open(x, y + 1)) {
            return false;
        }
        self.row += 1;
        true
    }

    pub fn move_left(&mut self, board: &Board) -> bool {
        self.shift(-1, board)
    }

    pub fn move_right(&mut self, board: &Board) -> bool {
        self.shift(1, board)
    }

    fn shift(&mut self, dx: i8, board: &Board) -> bool {
        if self.cells().iter().any(|&(x, y)| !board.is_open(x + dx, y)) {
            return false;
        }
        self.col += dx;
        true
    }

    /// Rotate with wall kicks. The target cells are tried at each kick
    /// offset in table order; the first fit is committed. When every kick is
    /// blocked the piece is left untouched. O never rotates.
    pub fn rotate(&mut self, clockwise: bool, board: &Board) -> bool {
        if self.kind == PieceKind::O {
            return false;
        }

        let next_rotation = if clockwise {
            self.rotation.rotate_cw()
        } else {
            self.rotation.rotate_ccw()
        };
        let target = offsets(self.kind, next_rotation);

        for &(dx, dy) in kicks(self.kind, self.rotation, clockwise) {
            let fits = target
                .iter()
                .all(|&(ox, oy)| board.is_open(self.col + dx + ox, self.row + dy + oy));
            if fits {
                self.col += dx;
                self.row += dy;
                self.rotation = next_rotation;
                return true;
            }
        }

        false
    }

    /// Where the piece would land: its cells shifted down by one less than
    /// the first blocking drop distance.
    pub fn ghost_cells(&self, board: &Board) -> PieceShape {
        let cells = self.cells();
        let mut distance: i8 = 0;

        loop {
            distance += 1;
            let blocked = cells.iter().any(|&(x, y)| !board.is_open(x, y + distance));
            if blocked {
                break;
            }
        }

        let mut ghost = cells;
        for (_, y) in &mut ghost {
            *y += distance - 1;
        }
        ghost
    }

    /// Move straight to the ghost position. Returns the number of rows
    /// descended (fed into hard-drop scoring).
    pub fn hard_drop(&mut self, board: &Board) -> u32 {
        let ghost = self.ghost_cells(board);
        let dropped = ghost[0].1 - self.cells()[0].1;
        self.row += dropped;
        dropped as u32
    }

    /// Write the piece into the board. Cells still above the visible field
    /// (row < 0) are skipped.
    pub fn lock_into(&self, board: &mut Board) {
        for (x, y) in self.cells() {
            if y >= 0 {
                board.set(x, y, Some(self.kind));
            }
        }
    }

    /// Respawn as `kind` at the spawn anchor. Returns false when any spawn
    /// cell is already occupied - the caller treats that as game over.
    pub fn reset_to(&mut self, kind: PieceKind, board: &Board) -> bool {
        self.kind = kind;
        self.rotation = Rotation::North;
        self.col = SPAWN_COL;
        self.row = SPAWN_ROW;
        self.cells().iter().all(|&(x, y)| board.is_open(x, y))
    }

    /// Respawn as the preview shape and draw a fresh preview from the bag.
    pub fn reset_to_next(&mut self, board: &Board, bag: &mut ShapeBag) -> bool {
        let kind = self.next;
        self.next = bag.draw();
        self.reset_to(kind, board)
    }

    /// Stash or swap with the hold slot. The first hold stashes the current
    /// shape and takes the preview; later holds swap with the stashed shape.
    /// Either branch respawns at the anchor and reports spawn failure.
    pub fn hold_swap(&mut self, board: &Board, bag: &mut ShapeBag) -> bool {
        match self.hold {
            None => {
                self.hold = Some(self.kind);
                self.reset_to_next(board, bag)
            }
            Some(held) => {
                self.hold = Some(self.kind);
                self.reset_to(held, board)
            }
        }
    }
}
