//! Engine integration tests - the full move/score/round lifecycle through
//! the public API, with seeded AI sequences for determinism.

use std::collections::HashMap;

use tui_connect4::core::rng::ColumnPicker;
use tui_connect4::core::{streak, Board, GameEngine};
use tui_connect4::types::{Color, GameConfig, Notification};

fn drain(engine: &mut GameEngine) -> Vec<Notification> {
    engine.take_notifications().into_iter().collect()
}

/// Drive one human turn; if the AI's random pick was absorbed as invalid,
/// hand the AI a concrete column so the scripted game keeps alternating.
fn human_turn(engine: &mut GameEngine, col: usize, stream: &mut Vec<Notification>) {
    engine.play(Color::Human, col);
    stream.extend(drain(engine));
    if engine.last_color() == Some(Color::Human) {
        let cols = engine.config().cols;
        if let Some(open) = (0..cols).find(|&c| !engine.board().is_column_full(c)) {
            engine.play(Color::Ai, open);
            stream.extend(drain(engine));
        }
    }
}

#[test]
fn test_first_move_on_empty_board() {
    let seed = 12345;
    let mut engine = GameEngine::new(GameConfig::default(), seed);

    engine.play(Color::Human, 3);
    let events = drain(&mut engine);

    // Human coin falls to the bottom row; a lone coin scores 1 everywhere.
    assert_eq!(
        events[0],
        Notification::Placed {
            move_number: 1,
            color: Color::Human,
            row: 5,
            column: 3,
        }
    );
    assert_eq!(events[1], Notification::Score { human: 1, ai: 0 });

    // The AI answered within the same call, on the seeded picker's column.
    let expected_col = ColumnPicker::new(seed, 7).pick();
    assert!(matches!(
        events[2],
        Notification::Placed { move_number: 2, color: Color::Ai, column, .. }
            if column == expected_col
    ));
    assert_eq!(events[3], Notification::Score { human: 1, ai: 1 });
    assert_eq!(engine.moves(), 2);
}

#[test]
fn test_vertical_win_notifies_and_resets() {
    // Seed where the AI's first three picks stay away from column 0.
    let seed = (1..)
        .find(|&s| {
            let mut picker = ColumnPicker::new(s, 7);
            (0..3).all(|_| picker.pick() != 0)
        })
        .unwrap();
    let mut engine = GameEngine::new(GameConfig::default(), seed);

    for _ in 0..3 {
        engine.play(Color::Human, 0);
        drain(&mut engine);
    }
    // Column 0 now holds human coins at rows 5, 4, 3.
    assert_eq!(engine.board().get(5, 0), Some(Some(Color::Human)));
    assert_eq!(engine.board().get(4, 0), Some(Some(Color::Human)));
    assert_eq!(engine.board().get(3, 0), Some(Some(Color::Human)));

    engine.play(Color::Human, 0);
    let events = drain(&mut engine);
    assert!(matches!(
        events[0],
        Notification::Placed {
            color: Color::Human,
            row: 2,
            column: 0,
            ..
        }
    ));
    assert_eq!(events[1], Notification::Win { color: Color::Human });
    assert_eq!(events.len(), 2, "a winning move ends the turn sequence");

    // Full reset: board empty, scores zero, move counter zero, new round.
    assert_eq!(engine.board().pieces(), 0);
    assert_eq!(engine.human_score(), 0);
    assert_eq!(engine.ai_score(), 0);
    assert_eq!(engine.moves(), 0);
    assert_eq!(engine.last_color(), None);
    assert_eq!(engine.round(), 1);
}

#[test]
fn test_filling_the_board_ties_and_resets() {
    // 1x2 board with an unreachable threshold: the second placement is the
    // last valid one and forces the tie.
    let mut engine = GameEngine::new(GameConfig::new(1, 2, 9), 1);

    engine.play(Color::Ai, 0);
    assert_eq!(engine.moves(), 1);
    drain(&mut engine);

    engine.play(Color::Human, 1);
    let events = drain(&mut engine);
    assert!(matches!(
        events[0],
        Notification::Placed {
            color: Color::Human,
            row: 0,
            column: 1,
            ..
        }
    ));
    assert!(matches!(events[1], Notification::Score { .. }));
    assert_eq!(events[2], Notification::Tie);
    assert_eq!(events.len(), 3, "tie preempts the AI's turn");

    assert_eq!(engine.moves(), 0);
    assert_eq!(engine.board().pieces(), 0);
    assert_eq!(engine.round(), 1);
}

#[test]
fn test_same_color_twice_is_rejected_regardless_of_column() {
    let mut engine = GameEngine::new(GameConfig::default(), 1);

    engine.play(Color::Ai, 5);
    assert_eq!(engine.moves(), 1);
    drain(&mut engine);

    // Re-invoking with the same color is rejected even though column 5
    // (and every other column) could accept a coin.
    engine.play(Color::Ai, 5);
    assert_eq!(drain(&mut engine), vec![Notification::Rejected]);
    engine.play(Color::Ai, 2);
    assert_eq!(drain(&mut engine), vec![Notification::Rejected]);
    assert_eq!(engine.moves(), 1);
}

#[test]
fn test_ai_pick_into_full_column_is_absorbed_without_retry() {
    // On a 2-column board, seed 2's first pick is column 1. Fill column 1
    // before the human moves so the AI's sub-move hits a full column.
    let seed = 2;
    assert_eq!(ColumnPicker::new(seed, 2).pick(), 1);
    let mut engine = GameEngine::new(GameConfig::new(2, 2, 9), seed);

    engine.play(Color::Ai, 1);
    drain(&mut engine);
    engine.play(Color::Human, 1);

    let events = drain(&mut engine);
    assert!(matches!(
        events[0],
        Notification::Placed {
            color: Color::Human,
            ..
        }
    ));
    assert!(matches!(events[1], Notification::Score { .. }));
    assert_eq!(events[2], Notification::Rejected);
    assert_eq!(events.len(), 3, "no second AI attempt this turn");
    assert_eq!(engine.moves(), 2);
    assert_eq!(engine.last_color(), Some(Color::Human));
}

#[test]
fn test_accepted_placements_alternate_colors() {
    let mut engine = GameEngine::new(GameConfig::default(), 777);
    let mut stream = Vec::new();

    for i in 0..120 {
        human_turn(&mut engine, i % 7, &mut stream);
    }

    let mut prev: Option<Color> = None;
    for event in &stream {
        match *event {
            Notification::Placed { color, .. } => {
                assert_ne!(prev, Some(color), "two consecutive placements shared a color");
                prev = Some(color);
            }
            // A reset clears the alternation sentinel: either color may open.
            Notification::Win { .. } | Notification::Tie => prev = None,
            _ => {}
        }
    }
}

#[test]
fn test_move_counter_tracks_accepted_placements() {
    let mut engine = GameEngine::new(GameConfig::default(), 31337);
    let mut stream = Vec::new();

    for i in 0..80 {
        human_turn(&mut engine, (i * 3) % 7, &mut stream);
    }

    let mut since_reset = 0u32;
    for event in &stream {
        match event {
            Notification::Placed { move_number, .. } => {
                since_reset += 1;
                assert_eq!(*move_number, since_reset);
            }
            Notification::Win { .. } | Notification::Tie => since_reset = 0,
            _ => {}
        }
    }
    assert_eq!(engine.moves(), since_reset);
}

#[test]
fn test_occupied_cells_never_change_within_a_round() {
    let mut engine = GameEngine::new(GameConfig::default(), 424242);
    let mut occupied: HashMap<(usize, usize), Color> = HashMap::new();
    let mut stream = Vec::new();

    for i in 0..150 {
        human_turn(&mut engine, (i * 5) % 7, &mut stream);
    }

    for event in &stream {
        match *event {
            Notification::Placed {
                color, row, column, ..
            } => {
                // Gravity only ever targets a cell that was empty.
                assert!(
                    occupied.insert((row, column), color).is_none(),
                    "cell ({}, {}) written twice in one round",
                    row,
                    column
                );
            }
            Notification::Win { .. } | Notification::Tie => occupied.clear(),
            _ => {}
        }
    }

    // Whatever the stream recorded since the last reset is still on the board.
    for (&(row, col), &color) in &occupied {
        assert_eq!(engine.board().get(row, col), Some(Some(color)));
    }
}

#[test]
fn test_streak_values_stay_in_bounds() {
    let mut board = Board::new(6, 7);
    let colors = [Color::Human, Color::Ai];
    for i in 0..40 {
        board.drop_piece((i * 11) % 7, colors[i % 2]);
    }

    for row in 0..6 {
        for col in 0..7 {
            let Some(Some(color)) = board.get(row, col) else {
                continue;
            };
            for value in [
                streak::vertical_streak(&board, row, col, color, 3),
                streak::horizontal_streak(&board, row, col, color, 3),
                streak::diagonal_streak(&board, row, col, color, 3),
                streak::antidiagonal_streak(&board, row, col, color, 3),
            ] {
                assert!((1..=7).contains(&value));
            }
        }
    }
}

#[test]
fn test_streaks_do_not_combine_across_gaps() {
    let mut board = Board::new(6, 7);
    // Bottom row: human coins at 0, 1, 3, 4 with a hole at 2.
    for col in [0, 1, 3, 4] {
        board.drop_piece(col, Color::Human);
    }
    assert_eq!(streak::horizontal_streak(&board, 5, 1, Color::Human, 3), 2);
    assert_eq!(streak::horizontal_streak(&board, 5, 3, Color::Human, 3), 2);
}

#[test]
fn test_seeded_games_replay_identically() {
    let mut a = GameEngine::new(GameConfig::default(), 2024);
    let mut b = GameEngine::new(GameConfig::default(), 2024);
    let mut stream_a = Vec::new();
    let mut stream_b = Vec::new();

    for i in 0..60 {
        human_turn(&mut a, (i * 2) % 7, &mut stream_a);
        human_turn(&mut b, (i * 2) % 7, &mut stream_b);
    }

    assert_eq!(stream_a, stream_b);
    assert_eq!(a.moves(), b.moves());
    assert_eq!(a.round(), b.round());
}
