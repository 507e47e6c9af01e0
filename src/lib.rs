//! Tabula is a logic-grid puzzle solver: a small constraint satisfaction
//! engine for the classic "five houses, five owners" family of puzzles.
//!
//! A puzzle has `N` rows and any number of *categories*, each contributing
//! `N` named variables (`A1..AN` for category `A`) whose domains are subsets
//! of the row indices `0..N-1`. Clues are expressed with a standard
//! vocabulary of constraints, and the solver alternates constraint
//! propagation with backtracking search until every variable is pinned to a
//! row.
//!
//! # Core Concepts
//!
//! - **[`Puzzle`](puzzle::Puzzle)**: the container of variables and
//!   constraints. Declaring a category creates its `N` variables with full
//!   domains and an implicit all-different over them.
//! - **[`Constraint`](solver::constraint::Constraint)**: a rule with a single
//!   capability, pruning candidate rows from variable domains. The crate
//!   provides the full clue vocabulary: equality, inequality, all-different,
//!   either-or packs, and two rank comparisons.
//! - **[`Solver`](solver::engine::Solver)**: runs propagation to a fixpoint,
//!   then branches on the unassigned variable with the fewest remaining
//!   candidates, snapshotting the puzzle on each guess.
//! - **[`Grid`](grid::Grid)**: the solved puzzle projected to a row-indexed
//!   mapping from category tag to variable name.
//!
//! # Example
//!
//! ```
//! use tabula::puzzle::Puzzle;
//! use tabula::solver::constraints::equal::EqualConstraint;
//! use tabula::solver::engine::Solver;
//!
//! # fn main() -> tabula::error::Result<()> {
//! let mut puzzle = Puzzle::new(2)?;
//! puzzle.add_category("A")?;
//! puzzle.add_category("B")?;
//! puzzle.add_constraint(EqualConstraint::new("A1", "B1"))?;
//!
//! let (solution, stats) = Solver::new().solve(&puzzle)?;
//! let grid = solution.expect("one equality over a 2x2 grid is satisfiable");
//!
//! assert_eq!(grid.rows()[0]["A"], "A1");
//! assert_eq!(grid.rows()[0]["B"], "B1");
//! assert_eq!(grid.rows()[1]["A"], "A2");
//! assert!(stats.nodes_visited >= 1);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod grid;
pub mod puzzle;
pub mod solver;
