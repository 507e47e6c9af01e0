use crate::{
    error::{Error, Result},
    puzzle::Puzzle,
    solver::constraint::{Constraint, ConstraintDescriptor},
    solver::constraints::equal::enforce_equal,
};

/// An exclusive choice between packs of equalities: exactly one alternative's
/// pairs all name the same rows.
///
/// An alternative counts as feasible while every one of its pairs still has a
/// non-empty domain intersection. The check is per pair, not joint, matching
/// the behavior of a satisfaction check on a complete assignment; a pack
/// whose pairs are only jointly infeasible is discovered once enforcement or
/// later propagation wipes a domain. When a single alternative survives, its
/// pairs are enforced as equalities.
#[derive(Debug, Clone)]
pub struct EitherOrConstraint {
    alternatives: Vec<Vec<(String, String)>>,
    vars: Vec<String>,
}

impl EitherOrConstraint {
    /// Builds the constraint from a non-empty list of non-empty alternatives.
    pub fn new<S: Into<String>>(alternatives: Vec<Vec<(S, S)>>) -> Result<Self> {
        if alternatives.is_empty() {
            return Err(Error::InvalidArgument(
                "either-or needs at least one alternative".to_string(),
            ));
        }
        let alternatives: Vec<Vec<(String, String)>> = alternatives
            .into_iter()
            .map(|alt| alt.into_iter().map(|(x, y)| (x.into(), y.into())).collect())
            .collect();
        if alternatives.iter().any(Vec::is_empty) {
            return Err(Error::InvalidArgument(
                "each either-or alternative needs at least one pair".to_string(),
            ));
        }
        let vars = alternatives
            .iter()
            .flatten()
            .flat_map(|(x, y)| [x.clone(), y.clone()])
            .collect();
        Ok(Self { alternatives, vars })
    }
}

impl Constraint for EitherOrConstraint {
    fn variables(&self) -> &[String] {
        &self.vars
    }

    fn descriptor(&self) -> ConstraintDescriptor {
        let alts = self
            .alternatives
            .iter()
            .map(|alt| {
                let pairs = alt
                    .iter()
                    .map(|(x, y)| format!("{x} == {y}"))
                    .collect::<Vec<_>>()
                    .join(" && ");
                format!("({pairs})")
            })
            .collect::<Vec<_>>()
            .join(" | ");
        ConstraintDescriptor {
            name: "EitherOrConstraint".to_string(),
            description: alts,
        }
    }

    fn propagate(&self, puzzle: &mut Puzzle) -> Result<bool> {
        let mut feasible = Vec::new();
        for alternative in &self.alternatives {
            let mut alive = true;
            for (x, y) in alternative {
                let dom_x = puzzle.variable(x)?.domain();
                let dom_y = puzzle.variable(y)?.domain();
                if !dom_x.iter().any(|row| dom_y.contains(row)) {
                    alive = false;
                    break;
                }
            }
            if alive {
                feasible.push(alternative);
            }
        }

        match feasible.as_slice() {
            [] => Err(Error::Contradiction(
                "no alternative of the either-or clue remains feasible".to_string(),
            )),
            [only] => {
                let mut changed = false;
                for (x, y) in only.iter() {
                    changed |= enforce_equal(puzzle, x, y)?;
                }
                Ok(changed)
            }
            _ => Ok(false),
        }
    }
}
