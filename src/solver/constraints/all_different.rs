use crate::{
    error::{Error, Result},
    puzzle::{Puzzle, RowIndex},
    solver::constraint::{Constraint, ConstraintDescriptor},
};

/// Every listed variable ends up in a distinct row.
///
/// Propagation is the simple assigned-value form: each row already owned by
/// one variable in the group is removed from the domains of the others. Two
/// group members assigned the same row is a contradiction. An implicit
/// instance over each category's variables is added by
/// [`Puzzle::add_category`].
#[derive(Debug, Clone)]
pub struct AllDifferentConstraint {
    vars: Vec<String>,
}

impl AllDifferentConstraint {
    pub fn new<I, S>(vars: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            vars: vars.into_iter().map(Into::into).collect(),
        }
    }
}

impl Constraint for AllDifferentConstraint {
    fn variables(&self) -> &[String] {
        &self.vars
    }

    fn descriptor(&self) -> ConstraintDescriptor {
        ConstraintDescriptor {
            name: "AllDifferentConstraint".to_string(),
            description: format!("AllDifferent({})", self.vars.join(", ")),
        }
    }

    fn propagate(&self, puzzle: &mut Puzzle) -> Result<bool> {
        let mut assigned: Vec<(RowIndex, &String)> = Vec::new();
        for name in &self.vars {
            let var = puzzle.variable(name)?;
            if var.is_assigned() {
                let row = var.assigned_value()?;
                if let Some((_, owner)) = assigned.iter().find(|(taken, _)| *taken == row) {
                    return Err(Error::Contradiction(format!(
                        "`{owner}` and `{name}` both occupy row {row}"
                    )));
                }
                assigned.push((row, name));
            }
        }

        let mut changed = false;
        for (row, owner) in &assigned {
            for name in &self.vars {
                if name != *owner {
                    changed |= puzzle.variable_mut(name)?.remove(*row)?;
                }
            }
        }
        Ok(changed)
    }
}
