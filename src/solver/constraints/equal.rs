use im::OrdSet;

use crate::{
    error::{Error, Result},
    puzzle::{Puzzle, RowIndex},
    solver::constraint::{Constraint, ConstraintDescriptor},
};

/// "A and B name the same row."
///
/// Both domains are pruned to their intersection; an empty intersection is a
/// contradiction.
#[derive(Debug, Clone)]
pub struct EqualConstraint {
    vars: [String; 2],
}

impl EqualConstraint {
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            vars: [a.into(), b.into()],
        }
    }
}

/// Prunes `a` and `b` to their shared candidate rows.
///
/// Kept separate from the constraint so the either-or propagator can enforce
/// the pairs of its sole surviving alternative the same way.
pub(crate) fn enforce_equal(puzzle: &mut Puzzle, a: &str, b: &str) -> Result<bool> {
    let shared: OrdSet<RowIndex> = {
        let dom_a = puzzle.variable(a)?.domain();
        let dom_b = puzzle.variable(b)?.domain();
        dom_a.iter().filter(|row| dom_b.contains(row)).cloned().collect()
    };
    if shared.is_empty() {
        return Err(Error::Contradiction(format!(
            "`{a}` and `{b}` cannot name the same row"
        )));
    }
    let mut changed = puzzle.variable_mut(a)?.intersect(&shared)?;
    changed |= puzzle.variable_mut(b)?.intersect(&shared)?;
    Ok(changed)
}

impl Constraint for EqualConstraint {
    fn variables(&self) -> &[String] {
        &self.vars
    }

    fn descriptor(&self) -> ConstraintDescriptor {
        ConstraintDescriptor {
            name: "EqualConstraint".to_string(),
            description: format!("{} == {}", self.vars[0], self.vars[1]),
        }
    }

    fn propagate(&self, puzzle: &mut Puzzle) -> Result<bool> {
        enforce_equal(puzzle, &self.vars[0], &self.vars[1])
    }
}
