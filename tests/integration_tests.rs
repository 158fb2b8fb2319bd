//! Integration tests for the frame loop: start-up, ticks, input and game over.

use tui_snake::core::{Food, Head, Heading, Length, SimpleRng};
use tui_snake::ecs::Stage;
use tui_snake::engine::{Game, GameConfig};
use tui_snake::types::{Control, Direction, Position};

fn started(config: GameConfig) -> Game {
    let mut game = Game::new(&config).unwrap();
    game.start().unwrap();
    game
}

/// Live segments as `(position, body index)`, head first.
fn segments(game: &Game) -> Vec<(Position, u32)> {
    let mut out: Vec<_> = game
        .world()
        .segments()
        .map(|(_, s)| (s.position, s.body))
        .collect();
    out.sort_by_key(|(_, body)| *body);
    out
}

fn head(game: &Game) -> Position {
    game.world().resource::<Head>().unwrap().0
}

fn length(game: &Game) -> u32 {
    game.world().resource::<Length>().unwrap().0
}

fn food(game: &Game) -> Position {
    game.world().resource::<Food>().unwrap().0
}

#[test]
fn test_single_tick_without_input() {
    let mut game = started(GameConfig::default());
    assert!(game.step(1000).unwrap());

    assert_eq!(head(&game), Position::new(2, 2));
    assert_eq!(
        segments(&game),
        vec![(Position::new(2, 2), 0), (Position::new(2, 1), 1)]
    );
    assert_eq!(length(&game), 2);
    assert_eq!(food(&game), Position::new(2, 4));
}

#[test]
fn test_single_tick_eating() {
    let mut game = started(GameConfig {
        food: Position::new(2, 2),
        ..GameConfig::default()
    });
    assert!(game.step(1000).unwrap());

    assert_eq!(length(&game), 3);
    assert_eq!(
        segments(&game),
        vec![
            (Position::new(2, 2), 0),
            (Position::new(2, 1), 1),
            (Position::new(1, 1), 2),
        ]
    );
    let food = food(&game);
    assert!(!segments(&game).iter().any(|(p, _)| *p == food));
}

#[test]
fn test_frames_between_ticks_change_nothing() {
    let mut game = started(GameConfig::default());
    let before = game.snapshot().unwrap();
    for _ in 0..62 {
        game.step(16).unwrap();
    }
    assert_eq!(game.snapshot().unwrap(), before);

    // 63 * 16 = 1008 ms: the 63rd frame ticks.
    game.step(16).unwrap();
    assert_eq!(head(&game), Position::new(2, 2));
}

#[test]
fn test_last_movement_control_wins() {
    let mut game = started(GameConfig::default());
    game.push_control(Control::Left);
    game.push_control(Control::Up);
    game.push_control(Control::Right);
    game.step(1000).unwrap();

    assert_eq!(game.world().resource::<Heading>().unwrap().0, Direction::Right);
    assert_eq!(head(&game), Position::new(3, 1));
}

#[test]
fn test_control_between_ticks_applies_on_next_tick() {
    let mut game = started(GameConfig::default());
    game.push_control(Control::Left);
    game.step(16).unwrap();
    assert_eq!(head(&game), Position::new(2, 1));

    game.step(1000).unwrap();
    assert_eq!(head(&game), Position::new(1, 1));
}

#[test]
fn test_pause_control_is_ignored() {
    let mut game = started(GameConfig::default());
    game.push_control(Control::Pause);
    assert!(game.step(1000).unwrap());
    assert_eq!(head(&game), Position::new(2, 2));
}

#[test]
fn test_reversal_is_allowed() {
    let mut game = started(GameConfig::default());
    game.push_control(Control::Up);
    game.step(1000).unwrap();
    assert_eq!(head(&game), Position::new(2, 0));
    assert_eq!(segments(&game).len(), 2);
}

#[test]
fn test_wraps_across_every_edge() {
    let mut game = started(GameConfig::default());
    game.push_control(Control::Up);
    game.step(1000).unwrap();
    game.step(1000).unwrap();
    assert_eq!(head(&game), Position::new(2, 9));

    game.push_control(Control::Down);
    game.step(1000).unwrap();
    assert_eq!(head(&game), Position::new(2, 0));

    game.push_control(Control::Left);
    game.step(1000).unwrap();
    game.step(1000).unwrap();
    game.step(1000).unwrap();
    assert_eq!(head(&game), Position::new(9, 0));

    game.push_control(Control::Right);
    game.step(1000).unwrap();
    assert_eq!(head(&game), Position::new(0, 0));
}

/// A 2x2 loop: the head moves into the cell the tail leaves on the same tick.
#[test]
fn test_chasing_the_tail_is_not_a_bite() {
    let mut game = started(GameConfig {
        head: Position::new(0, 0),
        body: vec![Position::new(1, 0), Position::new(1, 1), Position::new(0, 1)],
        direction: Direction::Down,
        self_collision_ends_game: true,
        ..GameConfig::default()
    });
    let laps = [
        (None, Position::new(0, 1)),
        (Some(Control::Right), Position::new(1, 1)),
        (Some(Control::Up), Position::new(1, 0)),
    ];
    for (control, expected) in laps {
        if let Some(control) = control {
            game.push_control(control);
        }
        assert!(game.step(1000).unwrap());
        assert_eq!(head(&game), expected);
        assert!(!game.is_finished());
    }
    assert_eq!(length(&game), 4);
    assert_eq!(segments(&game).len(), 4);
}

#[test]
fn test_exit_latches_quit() {
    let mut game = started(GameConfig::default());
    game.push_control(Control::Exit);
    assert!(!game.step(16).unwrap());
    assert!(game.is_finished());

    game.push_control(Control::Down);
    assert!(!game.step(1000).unwrap());
    assert!(game.is_finished());
    assert_eq!(head(&game), Position::new(2, 1));
    assert!(game.snapshot().unwrap().finished);
}

#[test]
fn test_filling_the_board_ends_the_game() {
    let mut game = started(GameConfig {
        bounds: Position::new(3, 1),
        head: Position::new(1, 0),
        body: vec![Position::new(0, 0)],
        direction: Direction::Right,
        food: Position::new(2, 0),
        ..GameConfig::default()
    });
    assert!(!game.step(1000).unwrap());
    assert_eq!(length(&game), 3);
    assert_eq!(segments(&game).len(), 3);
    assert_eq!(food(&game), Position::new(2, 0));
}

/// Random controls over many frames; checks the per-tick invariants.
#[test]
fn test_long_run_invariants() {
    let mut game = started(GameConfig {
        seed: 99,
        food: Position::new(2, 3),
        ..GameConfig::default()
    });
    let mut rng = SimpleRng::new(7);
    let moves = [Control::Up, Control::Down, Control::Left, Control::Right];

    for frame in 0..2_000 {
        if rng.next_range(3) == 0 {
            game.push_control(moves[rng.next_range(4) as usize]);
        }
        let before = length(&game);
        let delta = if frame % 4 == 0 { 1000 } else { 16 };
        if !game.step(delta).unwrap() {
            break;
        }

        let after = length(&game);
        assert!(after == before || after == before + 1, "grew by more than one");

        if delta == 1000 {
            let segs = segments(&game);
            assert_eq!(segs.len() as u32, after, "segment count drifted from length");
            assert_eq!(segs[0], (head(&game), 0));
            let bodies: Vec<u32> = segs.iter().map(|(_, b)| *b).collect();
            assert_eq!(bodies, (0..after).collect::<Vec<_>>());
        }
        let food = food(&game);
        assert!(!segments(&game).iter().any(|(p, _)| *p == food));
    }
}

#[test]
fn test_same_seed_and_inputs_replay_identically() {
    let run = || {
        let mut game = started(GameConfig {
            seed: 4242,
            food: Position::new(2, 2),
            ..GameConfig::default()
        });
        let script = [Control::Right, Control::Down, Control::Left, Control::Up];
        let mut frames = Vec::new();
        for (i, control) in script.iter().cycle().take(40).enumerate() {
            if i % 3 == 0 {
                game.push_control(*control);
            }
            game.step(1000).unwrap();
            frames.push(game.snapshot().unwrap());
        }
        frames
    };
    assert_eq!(run(), run());
}

#[test]
fn test_update_order() {
    let game = started(GameConfig::default());
    assert_eq!(
        game.schedule().order(Stage::Update),
        vec![
            "capture_controls",
            "tick",
            "change_direction",
            "exit",
            "move_head",
            "food_collision",
            "eat",
            "move_tail",
            "trace_state",
        ]
    );
    assert_eq!(game.schedule().order(Stage::StartUp), vec!["add_initial_data"]);
    assert_eq!(game.schedule().order(Stage::TearDown), vec!["report_final_state"]);
}
