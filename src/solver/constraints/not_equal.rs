use crate::{
    error::Result,
    puzzle::Puzzle,
    solver::constraint::{Constraint, ConstraintDescriptor},
};

/// "A and B name different rows."
///
/// Standard arc consistency for a binary disequality: nothing can be pruned
/// until one side collapses to a single row, at which point that row is
/// removed from the other side.
#[derive(Debug, Clone)]
pub struct NotEqualConstraint {
    vars: [String; 2],
}

impl NotEqualConstraint {
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            vars: [a.into(), b.into()],
        }
    }
}

impl Constraint for NotEqualConstraint {
    fn variables(&self) -> &[String] {
        &self.vars
    }

    fn descriptor(&self) -> ConstraintDescriptor {
        ConstraintDescriptor {
            name: "NotEqualConstraint".to_string(),
            description: format!("{} != {}", self.vars[0], self.vars[1]),
        }
    }

    fn propagate(&self, puzzle: &mut Puzzle) -> Result<bool> {
        let mut changed = false;
        for (this, other) in [(0, 1), (1, 0)] {
            let var = puzzle.variable(&self.vars[this])?;
            if var.is_assigned() {
                let row = var.assigned_value()?;
                changed |= puzzle.variable_mut(&self.vars[other])?.remove(row)?;
            }
        }
        Ok(changed)
    }
}
