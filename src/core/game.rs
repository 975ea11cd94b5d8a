//! Match loop - phases, gravity, locking, line clears, and scoring.
//!
//! [`Game`] is a deterministic state machine driven by two inputs: discrete
//! [`GameAction`]s and a fixed-rate [`Game::tick`] carrying the held
//! soft-drop level. Given the same seed and the same input sequence, two
//! matches play out identically.

use arrayvec::ArrayVec;

use crate::core::{Board, Piece, ShapeBag};
use crate::types::{
    GameAction, Phase, LINE_CLEAR_TICKS, LINE_SCORES, MOVE_COOLDOWN_TICKS, SOFT_DROP_DIVISOR,
    START_FALL_SPEED,
};

#[derive(Debug, Clone)]
pub struct Game {
    phase: Phase,
    board: Board,
    piece: Piece,
    bag: ShapeBag,
    score: u32,
    level: u32,
    lines: u32,
    /// Ticks accumulated toward the next gravity step.
    fall_timer: u32,
    /// Gravity interval in ticks, fixed for the session.
    fall_speed: u32,
    /// Rows awaiting removal, ascending, while the clear animation runs.
    cleared_rows: ArrayVec<i8, 4>,
    clear_timer: u32,
    /// Hold already spent for the current piece.
    has_held: bool,
    /// Lateral cooldown: negative after a left move, positive after a right
    /// move, decaying toward zero. A repeat in the same direction waits for
    /// zero; a reversal fires immediately.
    move_cooldown: i8,
    /// Hard drop landed; force the lock on the next tick.
    pending_drop: bool,
}

impl Game {
    /// New match with a clock-derived shape sequence.
    pub fn new() -> Self {
        Self::from_bag(ShapeBag::from_entropy())
    }

    /// New match with a deterministic shape sequence.
    pub fn with_seed(seed: u32) -> Self {
        Self::from_bag(ShapeBag::new(seed))
    }

    fn from_bag(mut bag: ShapeBag) -> Self {
        let piece = Piece::new(&mut bag);
        Self {
            phase: Phase::NotStarted,
            board: Board::new(),
            piece,
            bag,
            score: 0,
            level: 1,
            lines: 0,
            fall_timer: 0,
            fall_speed: START_FALL_SPEED,
            cleared_rows: ArrayVec::new(),
            clear_timer: 0,
            has_held: false,
            move_cooldown: 0,
            pending_drop: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Rows currently flashing out, ascending. Empty when no clear is
    /// running.
    pub fn clearing_rows(&self) -> &[i8] {
        &self.cleared_rows
    }

    pub fn is_clearing(&self) -> bool {
        self.clear_timer > 0
    }

    /// Ticks left on the clear animation, for the presentation layer.
    pub fn clear_ticks_remaining(&self) -> u32 {
        self.clear_timer
    }

    /// Apply a discrete input intent. Piece intents are live only while a
    /// match is in progress and no clear animation is running; Confirm
    /// starts the first match or restarts after game over.
    pub fn apply(&mut self, action: GameAction) {
        match self.phase {
            Phase::NotStarted => {
                if action == GameAction::Confirm {
                    self.phase = Phase::InProgress;
                }
            }
            Phase::GameOver => {
                if action == GameAction::Confirm {
                    self.restart();
                }
            }
            Phase::InProgress => {
                if self.clear_timer > 0 {
                    return;
                }
                self.apply_piece_action(action);
            }
        }
    }

    fn apply_piece_action(&mut self, action: GameAction) {
        match action {
            GameAction::MoveLeft => {
                if self.move_cooldown >= 0 && self.piece.move_left(&self.board) {
                    self.move_cooldown = -MOVE_COOLDOWN_TICKS;
                }
            }
            GameAction::MoveRight => {
                if self.move_cooldown <= 0 && self.piece.move_right(&self.board) {
                    self.move_cooldown = MOVE_COOLDOWN_TICKS;
                }
            }
            GameAction::RotateCw => {
                self.piece.rotate(true, &self.board);
            }
            GameAction::RotateCcw => {
                self.piece.rotate(false, &self.board);
            }
            GameAction::Hold => {
                if !self.has_held {
                    self.has_held = true;
                    if !self.piece.hold_swap(&self.board, &mut self.bag) {
                        self.phase = Phase::GameOver;
                    }
                }
            }
            GameAction::HardDrop => {
                self.score += self.piece.hard_drop(&self.board) * 2;
                self.pending_drop = true;
            }
            GameAction::Confirm => {}
        }
    }

    /// Advance the simulation by one tick. `soft_drop` is the held drop
    /// level: while true, gravity runs at a quarter of its interval and each
    /// gravity step earns one point.
    pub fn tick(&mut self, soft_drop: bool) {
        if self.phase != Phase::InProgress {
            return;
        }

        if self.move_cooldown > 0 {
            self.move_cooldown -= 1;
        } else if self.move_cooldown < 0 {
            self.move_cooldown += 1;
        }

        if self.clear_timer > 0 {
            self.clear_timer -= 1;
            if self.clear_timer == 0 {
                self.finish_line_clear();
            }
            return;
        }

        let threshold = if soft_drop {
            self.fall_speed / SOFT_DROP_DIVISOR
        } else {
            self.fall_speed
        };

        if self.fall_timer >= threshold || self.pending_drop {
            if self.piece.move_down(&self.board) {
                if soft_drop {
                    self.score += 1;
                }
            } else {
                self.lock_active_piece();
            }
            self.fall_timer = 0;
            self.pending_drop = false;
        } else {
            self.fall_timer += 1;
        }
    }

    /// Write the piece into the board, then either start the clear animation
    /// or spawn the successor right away.
    fn lock_active_piece(&mut self) {
        self.piece.lock_into(&mut self.board);

        let mut rows: ArrayVec<i8, 4> = ArrayVec::new();
        for (_, y) in self.piece.cells() {
            if y >= 0 && !rows.contains(&y) && self.board.is_row_full(y) {
                rows.push(y);
            }
        }
        rows.sort_unstable();

        if rows.is_empty() {
            self.spawn_next_piece();
        } else {
            self.cleared_rows = rows;
            self.clear_timer = LINE_CLEAR_TICKS;
        }
    }

    /// End of the clear animation: remove the rows (ascending, so the shift
    /// of rows above never disturbs a pending index), bank the score, and
    /// spawn the successor.
    fn finish_line_clear(&mut self) {
        for &y in &self.cleared_rows {
            self.board.clear_row(y);
        }

        let count = self.cleared_rows.len();
        self.score += LINE_SCORES[count] * self.level;
        self.lines += count as u32;
        self.level = self.lines / 10 + 1;
        self.cleared_rows.clear();

        self.spawn_next_piece();
    }

    fn spawn_next_piece(&mut self) {
        self.has_held = false;
        if !self.piece.reset_to_next(&self.board, &mut self.bag) {
            self.phase = Phase::GameOver;
        }
    }

    /// Fresh match reusing the RNG stream, so consecutive sessions do not
    /// repeat a shape sequence.
    fn restart(&mut self) {
        *self = Self::with_seed(self.bag.state());
        self.phase = Phase::InProgress;
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn set_progress(&mut self, lines: u32) {
        self.lines = lines;
        self.level = lines / 10 + 1;
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
