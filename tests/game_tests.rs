//! Match-level behavior through the public API.

use gridfall::core::{Game, ShapeBag};
use gridfall::types::{
    GameAction, Phase, PieceKind, SOFT_DROP_DIVISOR, START_FALL_SPEED,
};

fn started(seed: u32) -> Game {
    let mut game = Game::with_seed(seed);
    game.apply(GameAction::Confirm);
    game
}

/// Hard-drop the current piece and run ticks until its successor is live.
fn drop_and_settle(game: &mut Game) {
    game.apply(GameAction::HardDrop);
    game.tick(false);
    while game.is_clearing() {
        game.tick(false);
    }
}

#[test]
fn test_every_seven_draws_form_a_full_bag() {
    let mut bag = ShapeBag::new(9001);
    for _ in 0..20 {
        let mut counts = std::collections::HashMap::new();
        for _ in 0..7 {
            *counts.entry(bag.draw()).or_insert(0u32) += 1;
        }
        for kind in PieceKind::ALL {
            assert_eq!(counts.get(&kind), Some(&1), "{kind:?} not exactly once");
        }
    }
}

#[test]
fn test_confirm_gates_the_match() {
    let mut game = Game::with_seed(11);
    assert_eq!(game.phase(), Phase::NotStarted);

    game.apply(GameAction::HardDrop);
    game.tick(false);
    assert_eq!(game.score(), 0);

    game.apply(GameAction::Confirm);
    assert_eq!(game.phase(), Phase::InProgress);
}

#[test]
fn test_gravity_interval_in_ticks() {
    let mut game = started(11);
    let start_row = game.piece().cells()[0].1;

    for _ in 0..START_FALL_SPEED {
        game.tick(false);
    }
    assert_eq!(game.piece().cells()[0].1, start_row);

    game.tick(false);
    assert_eq!(game.piece().cells()[0].1, start_row + 1);
}

#[test]
fn test_soft_drop_accelerates_and_scores() {
    let mut game = started(11);
    let start_row = game.piece().cells()[0].1;

    for _ in 0..=(START_FALL_SPEED / SOFT_DROP_DIVISOR) {
        game.tick(true);
    }
    assert_eq!(game.piece().cells()[0].1, start_row + 1);
    assert_eq!(game.score(), 1);
}

#[test]
fn test_hard_drop_scores_twice_the_distance() {
    let mut game = started(11);
    let lowest = game.piece().cells().iter().map(|&(_, y)| y).max().unwrap();
    let expected = (19 - lowest) as u32 * 2;

    game.apply(GameAction::HardDrop);
    assert_eq!(game.score(), expected);
}

#[test]
fn test_hold_swaps_once_per_piece() {
    let mut game = started(11);
    let first = game.piece().kind();
    let preview = game.piece().next_shape();

    game.apply(GameAction::Hold);
    assert_eq!(game.piece().held_shape(), Some(first));
    assert_eq!(game.piece().kind(), preview);

    let current = game.piece().kind();
    game.apply(GameAction::Hold);
    assert_eq!(game.piece().kind(), current, "second hold must be inert");

    drop_and_settle(&mut game);
    game.apply(GameAction::Hold);
    assert_eq!(game.piece().kind(), first, "hold re-arms after locking");
}

#[test]
fn test_center_stack_ends_the_match() {
    let mut game = started(11);
    for _ in 0..60 {
        if game.phase() == Phase::GameOver {
            break;
        }
        drop_and_settle(&mut game);
    }
    assert_eq!(game.phase(), Phase::GameOver);

    // Piece inputs are dead after game over.
    let score = game.score();
    game.apply(GameAction::HardDrop);
    game.tick(false);
    assert_eq!(game.score(), score);
}

#[test]
fn test_restart_gives_a_fresh_match() {
    let mut game = started(11);
    for _ in 0..60 {
        if game.phase() == Phase::GameOver {
            break;
        }
        drop_and_settle(&mut game);
    }
    assert_eq!(game.phase(), Phase::GameOver);

    game.apply(GameAction::Confirm);
    assert_eq!(game.phase(), Phase::InProgress);
    assert_eq!(game.score(), 0);
    assert_eq!(game.lines(), 0);
    assert_eq!(game.level(), 1);
    assert!(game.board().cells().iter().all(|cell| cell.is_none()));
    assert!(!game.piece().is_holding());
}

#[test]
fn test_matches_with_same_seed_replay_identically() {
    let mut a = started(77);
    let mut b = started(77);

    for i in 0..1000u32 {
        if i % 23 == 0 {
            a.apply(GameAction::MoveRight);
            b.apply(GameAction::MoveRight);
        }
        if i % 41 == 0 {
            a.apply(GameAction::RotateCcw);
            b.apply(GameAction::RotateCcw);
        }
        if i % 79 == 0 {
            a.apply(GameAction::Hold);
            b.apply(GameAction::Hold);
        }
        if i % 113 == 0 {
            a.apply(GameAction::HardDrop);
            b.apply(GameAction::HardDrop);
        }
        let soft = i % 7 == 0;
        a.tick(soft);
        b.tick(soft);
    }

    assert_eq!(a.score(), b.score());
    assert_eq!(a.lines(), b.lines());
    assert_eq!(a.phase(), b.phase());
    assert_eq!(a.board().cells(), b.board().cells());
}
