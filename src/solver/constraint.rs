use crate::{error::Result, puzzle::Puzzle};

/// A human-readable identity for a constraint, used in reporting.
#[derive(Debug, Clone)]
pub struct ConstraintDescriptor {
    pub name: String,
    pub description: String,
}

/// A clue, expressed as a rule that prunes candidate rows from variable
/// domains.
///
/// Constraints hold only variable names and constants, never references into
/// a particular [`Puzzle`], so a single constraint can be shared across all
/// the puzzle clones produced while branching.
pub trait Constraint: std::fmt::Debug {
    /// The names of the variables this constraint mentions. Used to validate
    /// the constraint when it is added to a puzzle.
    fn variables(&self) -> &[String];

    /// The constraint's identity for stats and debug output.
    fn descriptor(&self) -> ConstraintDescriptor;

    /// Prunes domains as far as this constraint's semantics allow.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` if at least one domain shrank.
    /// * `Ok(false)` if the puzzle was already consistent with this rule.
    /// * `Err` with the contradiction kind if propagation would leave a
    ///   domain empty or prove the clue unsatisfiable.
    fn propagate(&self, puzzle: &mut Puzzle) -> Result<bool>;
}
