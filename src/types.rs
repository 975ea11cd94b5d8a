//! Core types shared across the application.
//! Pure data with no external dependencies.

/// Board dimensions.
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Duration of one simulation tick, for the presentation loop.
pub const TICK_MS: u32 = 16;

/// Gravity interval at session start, in ticks.
pub const START_FALL_SPEED: u32 = 32;

/// Divisor applied to the gravity interval while soft drop is held.
pub const SOFT_DROP_DIVISOR: u32 = 4;

/// Length of the line-clear animation, in ticks.
pub const LINE_CLEAR_TICKS: u32 = 30;

/// Magnitude of the lateral-move cooldown, in ticks.
pub const MOVE_COOLDOWN_TICKS: i8 = 4;

/// Ticks a soft-drop press stays latched without a repeat or release.
pub const SOFT_DROP_HOLD_TICKS: u32 = 9;

/// Points per simultaneous line clear, indexed by row count (multiplied by level).
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Tetromino piece kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    L,
    J,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All seven kinds, in bag-refill order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::L,
        PieceKind::J,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];
}

/// Rotation states (North = spawn orientation), clockwise order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    pub fn rotate_cw(self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    pub fn rotate_ccw(self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }
}

/// Discrete input intents consumed by the engine.
///
/// Soft drop is a held *level*, not an intent; it is passed to `Game::tick`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    RotateCw,
    RotateCcw,
    Hold,
    HardDrop,
    Confirm,
}

/// Top-level game phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    InProgress,
    GameOver,
}

/// Cell on the board (None = empty, Some = locked mino of that kind).
pub type Cell = Option<PieceKind>;
