use criterion::{criterion_group, criterion_main, Criterion};
use grid_astar::{AstarSearch, CellTag, Dijkstra, Grid, Heuristic, Manhattan};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

const N_GRIDS: usize = 32;

/// Random square grids with start and goal in opposite corners.
fn random_grids(n: usize, density: f64) -> Vec<Grid> {
    let mut rng = StdRng::seed_from_u64(0);
    (0..N_GRIDS)
        .map(|_| {
            let mut tags = vec![vec![CellTag::Free; n]; n];
            for tag in tags.iter_mut().flatten() {
                if rng.gen_bool(density) {
                    *tag = CellTag::Obstacle;
                }
            }
            tags[0][0] = CellTag::Start;
            tags[n - 1][n - 1] = CellTag::Goal;
            tags
        })
        .filter_map(|tags| Grid::build(&tags).ok())
        .collect()
}

fn bench_heuristic<H: Heuristic>(c: &mut Criterion, name: &str, search: AstarSearch<H>) {
    for (n, density) in [(10, 0.3), (64, 0.3), (256, 0.2)] {
        let grids = random_grids(n, density);
        c.bench_function(format!("{name}, {n}x{n}, density {density}").as_str(), |b| {
            b.iter(|| {
                for grid in &grids {
                    black_box(search.search(grid));
                }
            })
        });
    }
}

fn astar_bench(c: &mut Criterion) {
    bench_heuristic(c, "Astar", AstarSearch::with_heuristic(Manhattan));
}

fn dijkstra_bench(c: &mut Criterion) {
    bench_heuristic(c, "Dijkstra", AstarSearch::with_heuristic(Dijkstra));
}

criterion_group!(benches, astar_bench, dijkstra_bench);
criterion_main!(benches);
