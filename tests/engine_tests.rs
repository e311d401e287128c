use tictactoe::{GameEngine, GameStatus, Mark, CELLS, LINES};

fn play(engine: &mut GameEngine, cells: &[usize]) {
    for &cell in cells {
        assert!(engine.apply_move(cell), "move at {} was rejected", cell);
    }
}

#[test]
fn test_initial_state() {
    let engine = GameEngine::new();
    assert_eq!(engine.turn(), Mark::X);
    assert_eq!(engine.status(), GameStatus::InProgress);
    assert!(engine.cells().iter().all(|c| c.is_none()));
    assert_eq!(engine.cells().len(), CELLS);
}

#[test]
fn test_turn_alternates_on_accepted_moves() {
    let mut engine = GameEngine::new();
    assert_eq!(engine.turn(), Mark::X);
    engine.apply_move(4);
    assert_eq!(engine.turn(), Mark::O);
    engine.apply_move(0);
    assert_eq!(engine.turn(), Mark::X);
}

#[test]
fn test_top_row_win_scenario() {
    // X claims the top row on the fifth move overall.
    let mut engine = GameEngine::new();
    play(&mut engine, &[0, 3, 1, 4, 2]);

    assert_eq!(
        engine.status(),
        GameStatus::Won {
            mark: Mark::X,
            line: LINES[0],
        }
    );
    // no alternation after the winning move
    assert_eq!(engine.turn(), Mark::X);

    let cells = engine.cells();
    assert_eq!(cells[0], Some(Mark::X));
    assert_eq!(cells[1], Some(Mark::X));
    assert_eq!(cells[2], Some(Mark::X));
    assert_eq!(cells[3], Some(Mark::O));
    assert_eq!(cells[4], Some(Mark::O));
    assert!(cells[5..].iter().all(|c| c.is_none()));
}

#[test]
fn test_o_can_win() {
    // X scatters over 0, 1, 8 while O fills the middle row.
    let mut engine = GameEngine::new();
    play(&mut engine, &[0, 3, 1, 4, 8, 5]);

    assert_eq!(
        engine.status(),
        GameStatus::Won {
            mark: Mark::O,
            line: LINES[1],
        }
    );
    assert_eq!(engine.turn(), Mark::O);
}

#[test]
fn test_every_line_is_detected() {
    for (i, line) in LINES.iter().enumerate() {
        let mut engine = GameEngine::new();
        let [a, b, c] = line.cells();
        let spare: Vec<usize> = (0..CELLS).filter(|cell| !line.crosses(*cell)).collect();

        // X fills the line; O plays two harmless squares in between.
        play(&mut engine, &[a, spare[0], b, spare[1], c]);
        assert_eq!(
            engine.status(),
            GameStatus::Won {
                mark: Mark::X,
                line: *line,
            },
            "line {} was not detected",
            i
        );
    }
}

#[test]
fn test_draw_scenario() {
    // X O X
    // X O O
    // O X X
    let mut engine = GameEngine::new();
    play(&mut engine, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(engine.status(), GameStatus::Draw);
    assert!(engine.cells().iter().all(|c| c.is_some()));
}

#[test]
fn test_double_line_reports_first_in_scan_order() {
    // X's final move at the center completes both the middle row {3,4,5}
    // and the diagonal {0,4,8}; the row comes first in scan order.
    let mut engine = GameEngine::new();
    play(&mut engine, &[0, 1, 3, 2, 5, 6, 8, 7, 4]);

    assert_eq!(
        engine.status(),
        GameStatus::Won {
            mark: Mark::X,
            line: LINES[1],
        }
    );
}

#[test]
fn test_move_rejected_on_occupied_cell() {
    let mut engine = GameEngine::new();
    assert!(engine.apply_move(4));

    let before = engine.state();
    assert!(!engine.apply_move(4));
    assert_eq!(engine.state(), before);
    assert_eq!(engine.turn(), Mark::O);
    assert_eq!(engine.cells()[4], Some(Mark::X));
}

#[test]
fn test_move_rejected_out_of_range() {
    let mut engine = GameEngine::new();
    let before = engine.state();

    assert!(!engine.apply_move(CELLS));
    assert!(!engine.apply_move(1_000));
    assert_eq!(engine.state(), before);
}

#[test]
fn test_moves_rejected_after_win() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[0, 3, 1, 4, 2]);
    let before = engine.state();

    // 5 is empty but the game is over
    assert!(!engine.apply_move(5));
    assert_eq!(engine.state(), before);
}

#[test]
fn test_moves_rejected_after_draw() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    let before = engine.state();

    assert!(!engine.apply_move(0));
    assert_eq!(engine.state(), before);
}

#[test]
fn test_reset_mid_game() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[4, 0, 8]);

    engine.reset();
    assert_eq!(engine.turn(), Mark::X);
    assert_eq!(engine.status(), GameStatus::InProgress);
    assert!(engine.cells().iter().all(|c| c.is_none()));
}

#[test]
fn test_reset_after_terminal() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[0, 3, 1, 4, 2]);
    assert!(engine.status().is_terminal());

    engine.reset();
    assert_eq!(engine.status(), GameStatus::InProgress);
    assert_eq!(engine.turn(), Mark::X);
    assert!(engine.cells().iter().all(|c| c.is_none()));

    // a fresh game is playable after the reset
    assert!(engine.apply_move(4));
    assert_eq!(engine.cells()[4], Some(Mark::X));
}

#[test]
fn test_state_roundtrip() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[4, 0, 8]);

    let state = engine.state();
    let restored = GameEngine::from_state(state);
    assert_eq!(restored.state(), state);
    assert_eq!(restored.turn(), engine.turn());
    assert_eq!(restored.cells(), engine.cells());
}
