use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tabula::{
    puzzle::Puzzle,
    solver::constraints::{
        either_or::EitherOrConstraint, equal::EqualConstraint, not_equal::NotEqualConstraint,
        rank_exact_diff::RankExactDiffConstraint, rank_greater::RankGreaterConstraint,
    },
    solver::engine::Solver,
};

// Puzzle definition shared with tests/scenarios.rs.
fn readme_puzzle() -> Puzzle {
    let mut puzzle = Puzzle::new(5).unwrap();
    for tag in ["A", "B", "C", "D"] {
        puzzle.add_category(tag).unwrap();
    }
    puzzle
        .add_constraint(EqualConstraint::new("A2", "B1"))
        .unwrap();
    puzzle
        .add_constraint(RankExactDiffConstraint::new("B3", "B5", "A", 1))
        .unwrap();
    puzzle
        .add_constraint(RankGreaterConstraint::new("B4", "B3", "C"))
        .unwrap();
    puzzle
        .add_constraint(EqualConstraint::new("B2", "C2"))
        .unwrap();
    puzzle
        .add_constraint(RankExactDiffConstraint::new("C4", "C2", "A", 1))
        .unwrap();
    puzzle
        .add_constraint(EqualConstraint::new("C3", "D1"))
        .unwrap();
    puzzle
        .add_constraint(RankExactDiffConstraint::new("D2", "D5", "A", 4))
        .unwrap();
    puzzle
        .add_constraint(
            EitherOrConstraint::new(vec![
                vec![("A3", "D3"), ("A1", "B2")],
                vec![("A3", "D1")],
            ])
            .unwrap(),
        )
        .unwrap();
    puzzle
        .add_constraint(NotEqualConstraint::new("A3", "D1"))
        .unwrap();
    puzzle
        .add_constraint(RankGreaterConstraint::new("C5", "C1", "D"))
        .unwrap();
    puzzle
}

fn open_grid(rows: usize) -> Puzzle {
    let mut puzzle = Puzzle::new(rows).unwrap();
    for tag in ["A", "B", "C"] {
        puzzle.add_category(tag).unwrap();
    }
    puzzle
}

fn bench_readme_puzzle(c: &mut Criterion) {
    let puzzle = readme_puzzle();
    c.bench_function("solve_readme_puzzle", |b| {
        b.iter(|| {
            let solver = Solver::new();
            let (solution, _stats) = solver.solve(black_box(&puzzle)).unwrap();
            assert!(solution.is_some());
        })
    });
}

fn bench_open_grids(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve_open_grid");
    for rows in [3, 4, 5] {
        let puzzle = open_grid(rows);
        group.bench_with_input(BenchmarkId::from_parameter(rows), &puzzle, |b, puzzle| {
            b.iter(|| {
                let solver = Solver::new();
                let (solution, _stats) = solver.solve(black_box(puzzle)).unwrap();
                assert!(solution.is_some());
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_readme_puzzle, bench_open_grids);
criterion_main!(benches);
