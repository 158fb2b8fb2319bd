use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_snake::core::food::place_food;
use tui_snake::core::SimpleRng;
use tui_snake::engine::{Game, GameConfig};
use tui_snake::types::{Control, Position};

fn started() -> Game {
    let mut game = Game::new(&GameConfig::default()).unwrap();
    game.start().unwrap();
    game
}

fn bench_idle_frame(c: &mut Criterion) {
    let mut game = started();

    c.bench_function("frame_16ms", |b| {
        b.iter(|| {
            game.step(black_box(16)).unwrap();
        })
    });
}

fn bench_tick_frame(c: &mut Criterion) {
    let mut game = started();
    let turns = [Control::Right, Control::Down, Control::Left, Control::Up];
    let mut i = 0;

    c.bench_function("tick_frame", |b| {
        b.iter(|| {
            game.push_control(turns[i % turns.len()]);
            i += 1;
            game.step(black_box(1000)).unwrap();
        })
    });
}

fn bench_place_food_crowded(c: &mut Criterion) {
    let bounds = Position::new(10, 10);
    // Everything but the last row is taken.
    let occupied: Vec<Position> = (0..9)
        .flat_map(|y| (0..10).map(move |x| Position::new(x, y)))
        .collect();
    let mut rng = SimpleRng::new(12345);

    c.bench_function("place_food_90_percent_full", |b| {
        b.iter(|| place_food(&mut rng, black_box(bounds), black_box(&occupied)))
    });
}

fn bench_schedule_build(c: &mut Criterion) {
    let config = GameConfig::default();

    c.bench_function("game_new", |b| {
        b.iter(|| Game::new(black_box(&config)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_idle_frame,
    bench_tick_frame,
    bench_place_food_crowded,
    bench_schedule_build
);
criterion_main!(benches);
