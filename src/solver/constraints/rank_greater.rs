use crate::{
    error::Result,
    puzzle::Puzzle,
    solver::constraint::{Constraint, ConstraintDescriptor},
    solver::constraints::rank::prune_rank_pair,
};

/// "The row of `left` carries a higher rank in `category` than the row of
/// `right`."
///
/// Ranks are the `1..N` integers in a category's variable names, so this
/// expresses clues over naturally ordered categories (prices, days, house
/// positions).
#[derive(Debug, Clone)]
pub struct RankGreaterConstraint {
    vars: [String; 2],
    category: String,
}

impl RankGreaterConstraint {
    pub fn new(
        left: impl Into<String>,
        right: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            vars: [left.into(), right.into()],
            category: category.into(),
        }
    }
}

impl Constraint for RankGreaterConstraint {
    fn variables(&self) -> &[String] {
        &self.vars
    }

    fn descriptor(&self) -> ConstraintDescriptor {
        ConstraintDescriptor {
            name: "RankGreaterConstraint".to_string(),
            description: format!(
                "rank({}) > rank({}) in {}",
                self.vars[0], self.vars[1], self.category
            ),
        }
    }

    fn propagate(&self, puzzle: &mut Puzzle) -> Result<bool> {
        prune_rank_pair(puzzle, &self.vars[0], &self.vars[1], &self.category, |a, b| a > b)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::puzzle::RowIndex;

    /// Rows and ranks of category `P` coincide: `Pk` sits in row `k-1`.
    fn pinned_position_puzzle(rows: usize) -> Puzzle {
        let mut puzzle = Puzzle::new(rows).unwrap();
        puzzle.add_category("P").unwrap();
        puzzle.add_category("X").unwrap();
        for rank in 1..=rows {
            puzzle
                .variable_mut(&format!("P{rank}"))
                .unwrap()
                .assign(rank - 1)
                .unwrap();
        }
        puzzle
    }

    fn domain_of(puzzle: &Puzzle, name: &str) -> Vec<RowIndex> {
        puzzle.variable(name).unwrap().domain().iter().cloned().collect()
    }

    #[test]
    fn prunes_the_extremes_of_both_sides() {
        let mut puzzle = pinned_position_puzzle(3);
        let constraint = RankGreaterConstraint::new("X1", "X2", "P");

        assert!(constraint.propagate(&mut puzzle).unwrap());
        // X1 cannot take the lowest rank, X2 cannot take the highest.
        assert_eq!(domain_of(&puzzle, "X1"), vec![1, 2]);
        assert_eq!(domain_of(&puzzle, "X2"), vec![0, 1]);

        assert!(!constraint.propagate(&mut puzzle).unwrap());
    }

    #[test]
    fn right_side_is_pruned_against_a_narrowed_left() {
        let mut puzzle = pinned_position_puzzle(3);
        puzzle.variable_mut("X1").unwrap().assign(2).unwrap();

        let constraint = RankGreaterConstraint::new("X1", "X2", "P");
        assert!(constraint.propagate(&mut puzzle).unwrap());
        assert_eq!(domain_of(&puzzle, "X2"), vec![0, 1]);
    }

    #[test]
    fn left_pinned_to_the_minimum_rank_contradicts() {
        let mut puzzle = pinned_position_puzzle(3);
        puzzle.variable_mut("X1").unwrap().assign(0).unwrap();

        let constraint = RankGreaterConstraint::new("X1", "X2", "P");
        assert!(constraint.propagate(&mut puzzle).unwrap_err().is_contradiction());
    }

    #[test]
    fn unpinned_category_keeps_all_rank_pairs_open() {
        // Without P pinned down, every row can still take every P-rank, so
        // any pair of distinct ranks witnesses the comparison.
        let mut puzzle = Puzzle::new(3).unwrap();
        puzzle.add_category("P").unwrap();
        puzzle.add_category("X").unwrap();

        let constraint = RankGreaterConstraint::new("X1", "X2", "P");
        assert!(!constraint.propagate(&mut puzzle).unwrap());
    }
}
