use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, trace};

use crate::{
    error::{Error, Result},
    grid::Grid,
    puzzle::{Puzzle, RowIndex},
    solver::constraint::Constraint,
};

/// The position of a constraint in the puzzle's constraint list.
pub type ConstraintId = usize;

/// Holds performance statistics for a single constraint.
#[derive(Debug, Default, Clone, Copy)]
pub struct PerConstraintStats {
    /// The number of times the constraint's `propagate` method was called.
    pub revisions: u64,
    /// The number of those calls that narrowed at least one domain.
    pub prunings: u64,
    /// The total time spent inside `propagate`, in microseconds.
    pub time_spent_micros: u64,
}

/// Holds statistics for the entire search process.
#[derive(Debug, Default)]
pub struct SearchStats {
    /// The total number of frames visited in the search tree.
    pub nodes_visited: u64,
    /// The total number of abandoned branches.
    pub backtracks: u64,
    /// A map from [`ConstraintId`] to the performance statistics for that
    /// constraint.
    pub constraint_stats: HashMap<ConstraintId, PerConstraintStats>,
}

/// The search driver: propagation to fixpoint plus backtracking over puzzle
/// snapshots.
///
/// Runs are deterministic: constraints propagate in insertion order, the
/// branch variable is the unassigned one with the fewest remaining rows
/// (ties broken by declaration order), and candidate rows are tried in
/// ascending order.
#[derive(Debug, Default)]
pub struct Solver;

impl Solver {
    pub fn new() -> Self {
        Self
    }

    /// Attempts to solve the puzzle.
    ///
    /// The caller's puzzle is never mutated; all narrowing happens on private
    /// clones.
    ///
    /// # Returns
    ///
    /// * `Ok((Some(grid), stats))` when a complete assignment is found.
    /// * `Ok((None, stats))` when the clue set is unsatisfiable.
    /// * `Err(error)` for caller or internal bugs (unknown names, malformed
    ///   constraints), which are never swallowed by the search.
    pub fn solve(&self, puzzle: &Puzzle) -> Result<(Option<Grid>, SearchStats)> {
        let mut stats = SearchStats::default();
        match self.search(puzzle.clone(), &mut stats) {
            Ok(Some(solved)) => Ok((Some(Grid::from_puzzle(&solved)?), stats)),
            Ok(None) => Ok((None, stats)),
            Err(error) if error.is_contradiction() => Ok((None, stats)),
            Err(error) => Err(error),
        }
    }

    /// Counts complete assignments, giving up once `limit` have been seen.
    ///
    /// With `limit == 2` this answers whether a clue set is ambiguous. Note
    /// that every clue form is invariant under a relabelling of the rows, so
    /// any satisfiable puzzle admits a whole orbit of assignments; the count
    /// compares clue sets, it does not certify a unique grid.
    pub fn count_solutions(
        &self,
        puzzle: &Puzzle,
        limit: usize,
    ) -> Result<(usize, SearchStats)> {
        let mut stats = SearchStats::default();
        let mut count = 0;
        match self.count(puzzle.clone(), limit, &mut count, &mut stats) {
            Ok(()) => Ok((count, stats)),
            Err(error) if error.is_contradiction() => Ok((count, stats)),
            Err(error) => Err(error),
        }
    }

    /// Runs the constraint list to a fixpoint.
    ///
    /// Each pass visits every constraint in insertion order and accumulates
    /// whether any domain changed; the loop stops on the first quiet pass.
    /// A contradiction aborts the current search frame.
    pub fn propagate(&self, puzzle: &mut Puzzle, stats: &mut SearchStats) -> Result<()> {
        let constraints: Vec<Arc<dyn Constraint>> = puzzle.constraints().to_vec();
        loop {
            let mut changed = false;
            for (constraint_id, constraint) in constraints.iter().enumerate() {
                let constraint_stats = stats.constraint_stats.entry(constraint_id).or_default();
                constraint_stats.revisions += 1;

                let start_time = Instant::now();
                let result = constraint.propagate(puzzle);
                constraint_stats.time_spent_micros += start_time.elapsed().as_micros() as u64;

                if result? {
                    constraint_stats.prunings += 1;
                    changed = true;
                }
            }
            if !changed {
                debug!("propagation reached a fixpoint");
                return Ok(());
            }
        }
    }

    fn search(&self, mut puzzle: Puzzle, stats: &mut SearchStats) -> Result<Option<Puzzle>> {
        stats.nodes_visited += 1;
        self.propagate(&mut puzzle, stats)?;

        if puzzle.is_complete() {
            return Ok(Some(puzzle));
        }

        let name = self.select_variable(&puzzle)?;
        let rows: Vec<RowIndex> = puzzle.variable(&name)?.domain().iter().cloned().collect();
        trace!(variable = %name, candidates = rows.len(), "branching");

        for row in rows {
            let mut guess = puzzle.clone();
            guess.variable_mut(&name)?.assign(row)?;
            match self.search(guess, stats) {
                Ok(Some(solved)) => return Ok(Some(solved)),
                Ok(None) => stats.backtracks += 1,
                Err(error) if error.is_contradiction() => stats.backtracks += 1,
                Err(error) => return Err(error),
            }
        }
        Ok(None)
    }

    fn count(
        &self,
        mut puzzle: Puzzle,
        limit: usize,
        count: &mut usize,
        stats: &mut SearchStats,
    ) -> Result<()> {
        stats.nodes_visited += 1;
        self.propagate(&mut puzzle, stats)?;

        if puzzle.is_complete() {
            *count += 1;
            return Ok(());
        }

        let name = self.select_variable(&puzzle)?;
        let rows: Vec<RowIndex> = puzzle.variable(&name)?.domain().iter().cloned().collect();

        for row in rows {
            if *count >= limit {
                return Ok(());
            }
            let mut guess = puzzle.clone();
            guess.variable_mut(&name)?.assign(row)?;
            match self.count(guess, limit, count, stats) {
                Ok(()) => {}
                Err(error) if error.is_contradiction() => stats.backtracks += 1,
                Err(error) => return Err(error),
            }
        }
        Ok(())
    }

    /// Minimum-remaining-values selection: the unassigned variable with the
    /// smallest domain, ties broken by declaration order.
    fn select_variable(&self, puzzle: &Puzzle) -> Result<String> {
        let mut best: Option<(&str, usize)> = None;
        for name in puzzle.variable_names() {
            let len = puzzle.variable(name)?.domain().len();
            if len > 1 && best.map_or(true, |(_, smallest)| len < smallest) {
                best = Some((name, len));
            }
        }
        best.map(|(name, _)| name.to_string()).ok_or_else(|| {
            Error::Internal("no branch variable in an incomplete puzzle".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::solver::constraints::{
        either_or::EitherOrConstraint, equal::EqualConstraint, not_equal::NotEqualConstraint,
    };

    fn puzzle_with_categories(rows: usize, tags: &[&str]) -> Puzzle {
        let mut puzzle = Puzzle::new(rows).unwrap();
        for tag in tags {
            puzzle.add_category(tag).unwrap();
        }
        puzzle
    }

    fn domains(puzzle: &Puzzle) -> Vec<Vec<RowIndex>> {
        puzzle
            .variable_names()
            .map(|name| {
                puzzle
                    .variable(name)
                    .unwrap()
                    .domain()
                    .iter()
                    .cloned()
                    .collect()
            })
            .collect()
    }

    #[test]
    fn a_forced_equality_solves_without_branching_far() {
        let mut puzzle = puzzle_with_categories(2, &["A", "B"]);
        puzzle
            .add_constraint(EqualConstraint::new("A1", "B1"))
            .unwrap();

        let (solution, _stats) = Solver::new().solve(&puzzle).unwrap();
        let grid = solution.unwrap();

        assert_eq!(grid.rows()[0]["A"], "A1");
        assert_eq!(grid.rows()[0]["B"], "B1");
        assert_eq!(grid.rows()[1]["A"], "A2");
        assert_eq!(grid.rows()[1]["B"], "B2");
    }

    #[test]
    fn an_inequality_is_respected_in_the_returned_grid() {
        let mut puzzle = puzzle_with_categories(2, &["A", "B"]);
        puzzle
            .add_constraint(NotEqualConstraint::new("A1", "B1"))
            .unwrap();

        let (solution, _stats) = Solver::new().solve(&puzzle).unwrap();
        let grid = solution.unwrap();

        assert_eq!(grid.rows()[0]["A"], "A1");
        assert_eq!(grid.rows()[0]["B"], "B2");
    }

    #[test]
    fn contradictory_clues_are_reported_as_unsolvable() {
        let mut puzzle = puzzle_with_categories(2, &["A", "B"]);
        puzzle
            .add_constraint(EqualConstraint::new("A1", "B1"))
            .unwrap();
        puzzle
            .add_constraint(NotEqualConstraint::new("A1", "B1"))
            .unwrap();

        let (solution, _stats) = Solver::new().solve(&puzzle).unwrap();
        assert!(solution.is_none());
    }

    #[test]
    fn the_callers_puzzle_is_left_untouched() {
        let mut puzzle = puzzle_with_categories(3, &["A", "B"]);
        puzzle
            .add_constraint(EqualConstraint::new("A1", "B2"))
            .unwrap();

        let before = domains(&puzzle);
        Solver::new().solve(&puzzle).unwrap();
        assert_eq!(domains(&puzzle), before);
    }

    #[test]
    fn an_eliminated_alternative_forces_the_other() {
        let mut puzzle = puzzle_with_categories(3, &["A", "B", "C"]);
        puzzle
            .add_constraint(EqualConstraint::new("A1", "B1"))
            .unwrap();
        puzzle
            .add_constraint(
                EitherOrConstraint::new(vec![vec![("A1", "C1")], vec![("A1", "C2")]]).unwrap(),
            )
            .unwrap();
        puzzle
            .add_constraint(NotEqualConstraint::new("A1", "C1"))
            .unwrap();

        let (solution, _stats) = Solver::new().solve(&puzzle).unwrap();
        let grid = solution.unwrap();

        // A1, B1 and C2 share row 0 in the first solution found.
        assert_eq!(grid.rows()[0]["A"], "A1");
        assert_eq!(grid.rows()[0]["B"], "B1");
        assert_eq!(grid.rows()[0]["C"], "C2");
    }

    #[test]
    fn propagation_is_idempotent_at_a_fixpoint() {
        let mut puzzle = puzzle_with_categories(3, &["A", "B"]);
        puzzle
            .add_constraint(EqualConstraint::new("A1", "B1"))
            .unwrap();
        puzzle.variable_mut("A2").unwrap().assign(1).unwrap();

        let solver = Solver::new();
        let mut stats = SearchStats::default();
        solver.propagate(&mut puzzle, &mut stats).unwrap();
        let settled = domains(&puzzle);

        solver.propagate(&mut puzzle, &mut stats).unwrap();
        assert_eq!(domains(&puzzle), settled);
    }

    #[test]
    fn counting_caps_at_the_requested_limit() {
        let puzzle = puzzle_with_categories(3, &["A"]);

        let solver = Solver::new();
        let (total, _) = solver.count_solutions(&puzzle, 100).unwrap();
        assert_eq!(total, 6);

        let (capped, _) = solver.count_solutions(&puzzle, 2).unwrap();
        assert_eq!(capped, 2);
    }

    #[test]
    fn counting_an_unsolvable_puzzle_yields_zero() {
        let mut puzzle = puzzle_with_categories(2, &["A", "B"]);
        puzzle
            .add_constraint(EqualConstraint::new("A1", "B1"))
            .unwrap();
        puzzle
            .add_constraint(NotEqualConstraint::new("A1", "B1"))
            .unwrap();

        let (total, _) = Solver::new().count_solutions(&puzzle, 10).unwrap();
        assert_eq!(total, 0);
    }

    #[test]
    fn stats_track_revisions_and_prunings() {
        let mut puzzle = puzzle_with_categories(2, &["A", "B"]);
        puzzle
            .add_constraint(EqualConstraint::new("A1", "B1"))
            .unwrap();

        let (_, stats) = Solver::new().solve(&puzzle).unwrap();
        assert!(stats.nodes_visited >= 1);
        // Every constraint is revised at least once per pass.
        for id in 0..puzzle.constraints().len() {
            assert!(stats.constraint_stats[&id].revisions >= 1);
        }
    }
}
