use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use rapidresq::traffic_model::predictor::{TrafficInput, Weather};
use rapidresq::traffic_model::routing::{find_best_route, RouteOption};

/// Generates dummy candidate routes with varied distances, signal counts,
/// and congestion levels.
fn generate_route_batch(batch_size: usize) -> Vec<RouteOption> {
    (0..batch_size)
        .map(|i| RouteOption {
            id: format!("route-{}", i),
            name: format!("Candidate {}", i),
            distance_km: 5.0 + (i % 20) as f64,
            signal_count: (i % 15) as u32,
            traffic_input: TrafficInput {
                time_of_day: (i % 24) as i64,
                day_of_week: (i % 7) as i64,
                weather: Weather::Clear,
                historical_congestion_level: (i % 11) as f64,
            },
            coordinates: Vec::new(),
        })
        .collect()
}

fn bench_find_best_route(c: &mut Criterion) {
    let batch_sizes = [3, 50, 500];
    let mut group = c.benchmark_group("Find_Best_Route");

    for &batch in batch_sizes.iter() {
        let routes = generate_route_batch(batch);
        group.bench_with_input(
            BenchmarkId::new("find_best_route", batch),
            &batch,
            |b, &_batch| {
                b.iter(|| {
                    let best = find_best_route(black_box(&routes));
                    black_box(best);
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_find_best_route);
criterion_main!(benches);
