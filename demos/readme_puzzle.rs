//! Solves the 5x5 sample puzzle from the README and prints the grid.
//!
//! ```text
//! cargo run --example readme_puzzle -- --stats
//! ```

use clap::Parser;
use tabula::{
    error::Result,
    puzzle::Puzzle,
    solver::constraints::{
        either_or::EitherOrConstraint, equal::EqualConstraint, not_equal::NotEqualConstraint,
        rank_exact_diff::RankExactDiffConstraint, rank_greater::RankGreaterConstraint,
    },
    solver::engine::Solver,
    solver::stats::render_stats_table,
};

#[derive(Parser)]
struct Args {
    /// Print per-constraint propagation statistics after solving.
    #[arg(long)]
    stats: bool,
}

// Puzzle definition shared with tests/scenarios.rs.
fn readme_puzzle() -> Result<Puzzle> {
    let mut puzzle = Puzzle::new(5)?;
    for tag in ["A", "B", "C", "D"] {
        puzzle.add_category(tag)?;
    }
    puzzle.add_constraint(EqualConstraint::new("A2", "B1"))?;
    puzzle.add_constraint(RankExactDiffConstraint::new("B3", "B5", "A", 1))?;
    puzzle.add_constraint(RankGreaterConstraint::new("B4", "B3", "C"))?;
    puzzle.add_constraint(EqualConstraint::new("B2", "C2"))?;
    puzzle.add_constraint(RankExactDiffConstraint::new("C4", "C2", "A", 1))?;
    puzzle.add_constraint(EqualConstraint::new("C3", "D1"))?;
    puzzle.add_constraint(RankExactDiffConstraint::new("D2", "D5", "A", 4))?;
    puzzle.add_constraint(EitherOrConstraint::new(vec![
        vec![("A3", "D3"), ("A1", "B2")],
        vec![("A3", "D1")],
    ])?)?;
    puzzle.add_constraint(NotEqualConstraint::new("A3", "D1"))?;
    puzzle.add_constraint(RankGreaterConstraint::new("C5", "C1", "D"))?;
    Ok(puzzle)
}

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt::try_init();
    let args = Args::parse();

    let puzzle = readme_puzzle()?;
    let (solution, stats) = Solver::new().solve(&puzzle)?;

    match solution {
        Some(grid) => {
            println!("Solution found!");
            println!("{}", grid.render_table());
            println!(
                "nodes visited: {}, backtracks: {}",
                stats.nodes_visited, stats.backtracks
            );
        }
        None => println!("No solution found."),
    }

    if args.stats {
        println!("{}", render_stats_table(&stats, puzzle.constraints()));
    }

    Ok(())
}
