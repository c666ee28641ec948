use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};

use damson_chess::game_state::chess_types::Move;
use damson_chess::game_state::game_state::GameState;
use damson_chess::move_generation::legal_move_generator::generate_legal_moves;

fn bench_legality(c: &mut Criterion) {
    let mut group = c.benchmark_group("legality");

    group.throughput(Throughput::Elements(64 * 64));
    group.bench_function("validate_all_pairs_startpos", |b| {
        let mut game = GameState::new_game();
        b.iter(|| {
            let mut legal = 0usize;
            for from_row in 0..8i8 {
                for from_col in 0..8i8 {
                    for to_row in 0..8i8 {
                        for to_col in 0..8i8 {
                            let mv = Move::new(from_row, from_col, to_row, to_col);
                            if game.is_valid_move(black_box(mv)) {
                                legal += 1;
                            }
                        }
                    }
                }
            }
            legal
        })
    });

    group.bench_function("generate_legal_moves_startpos", |b| {
        let mut game = GameState::new_game();
        b.iter(|| generate_legal_moves(&mut game).len())
    });

    group.bench_function("is_complete_startpos", |b| {
        let mut game = GameState::new_game();
        b.iter(|| black_box(game.is_complete()))
    });

    group.finish();
}

criterion_group!(benches, bench_legality);
criterion_main!(benches);
