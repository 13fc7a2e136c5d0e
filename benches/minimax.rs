use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use lib::chess::Position;
use lib::eval::Standard;
use lib::search::{Minimax, Search};

fn bench(c: &mut Criterion) {
    let mm = Minimax::new(Standard::new());

    for depth in 1..=3 {
        c.benchmark_group("benches")
            .sample_size(10)
            .bench_function(format!("minimax/{}", depth), |b| {
                b.iter_batched_ref(
                    Position::initial,
                    |pos| mm.search(pos, depth),
                    BatchSize::SmallInput,
                );
            });
    }
}

criterion_group!(benches, bench);
criterion_main!(benches);
