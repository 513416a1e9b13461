use criterion::{black_box, criterion_group, criterion_main, Criterion};
use metro_graph::{compute_fastest, compute_fewest_changes, Connections, NetworkGraph, Stations};

const GRID_SIZE: usize = 30;

fn station_name(row: usize, col: usize) -> String {
    format!("S{row}-{col}")
}

/// Square grid where every row and every column is its own line
fn build_grid_network() -> NetworkGraph {
    let mut graph = NetworkGraph::new();
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            graph.add_station(&station_name(row, col));
        }
    }

    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            let here = station_name(row, col);
            let weight = 1.0 + ((row * 7 + col * 3) % 5) as f64;
            if col + 1 < GRID_SIZE {
                graph
                    .add_connection(&here, &station_name(row, col + 1), &format!("Row {row}"), weight)
                    .expect("grid stations exist");
            }
            if row + 1 < GRID_SIZE {
                graph
                    .add_connection(&here, &station_name(row + 1, col), &format!("Col {col}"), weight)
                    .expect("grid stations exist");
            }
        }
    }
    graph
}

fn benchmark_routing(c: &mut Criterion) {
    let graph = build_grid_network();
    let start = station_name(0, 0);
    let end = station_name(GRID_SIZE - 1, GRID_SIZE - 1);

    c.bench_function("fastest_corner_to_corner", |b| {
        b.iter(|| compute_fastest(black_box(&graph), black_box(&start), black_box(&end)));
    });

    c.bench_function("fewest_changes_corner_to_corner", |b| {
        b.iter(|| compute_fewest_changes(black_box(&graph), black_box(&start), black_box(&end)));
    });

    // Close the middle column so routes have to detour around it
    let mut closed = graph.clone();
    for row in 1..GRID_SIZE - 1 {
        closed
            .apply_closure(&station_name(row, GRID_SIZE / 2))
            .expect("grid station exists");
    }

    c.bench_function("fastest_with_closures", |b| {
        b.iter(|| compute_fastest(black_box(&closed), black_box(&start), black_box(&end)));
    });
}

criterion_group!(benches, benchmark_routing);
criterion_main!(benches);
