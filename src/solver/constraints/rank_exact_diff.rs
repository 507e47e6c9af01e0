use crate::{
    error::Result,
    puzzle::Puzzle,
    solver::constraint::{Constraint, ConstraintDescriptor},
    solver::constraints::rank::prune_rank_pair,
};

/// "The rank of `left`'s row minus the rank of `right`'s row, measured in
/// `category`, is exactly `difference`."
///
/// A negative `difference` places `left` below `right`. This reading assumes
/// the ranked category's values are evenly spaced.
#[derive(Debug, Clone)]
pub struct RankExactDiffConstraint {
    vars: [String; 2],
    category: String,
    difference: i64,
}

impl RankExactDiffConstraint {
    pub fn new(
        left: impl Into<String>,
        right: impl Into<String>,
        category: impl Into<String>,
        difference: i64,
    ) -> Self {
        Self {
            vars: [left.into(), right.into()],
            category: category.into(),
            difference,
        }
    }
}

impl Constraint for RankExactDiffConstraint {
    fn variables(&self) -> &[String] {
        &self.vars
    }

    fn descriptor(&self) -> ConstraintDescriptor {
        ConstraintDescriptor {
            name: "RankExactDiffConstraint".to_string(),
            description: format!(
                "rank({}) - rank({}) == {} in {}",
                self.vars[0], self.vars[1], self.difference, self.category
            ),
        }
    }

    fn propagate(&self, puzzle: &mut Puzzle) -> Result<bool> {
        let difference = self.difference;
        prune_rank_pair(puzzle, &self.vars[0], &self.vars[1], &self.category, |a, b| {
            a - b == difference
        })
    }
}
