use im::OrdSet;

use crate::{
    error::Result,
    puzzle::{Puzzle, RowIndex},
};

/// Prunes `left` and `right` so that some pair of ranks drawn from the given
/// category can still satisfy `pred`.
///
/// A row survives on the `left` side iff some row of `right`'s domain and
/// some pair of still-possible ranks `(a, b)` at those rows satisfy
/// `pred(a, b)`, and symmetrically for the `right` side. Both keep-sets are
/// computed against the domains as they stood before any pruning, and each
/// side's rank possibilities are looked up independently. Rows whose rank
/// possibilities are empty never survive.
pub(crate) fn prune_rank_pair(
    puzzle: &mut Puzzle,
    left: &str,
    right: &str,
    category: &str,
    pred: impl Fn(i64, i64) -> bool,
) -> Result<bool> {
    let left_rows: Vec<RowIndex> = puzzle.variable(left)?.domain().iter().cloned().collect();
    let right_rows: Vec<RowIndex> = puzzle.variable(right)?.domain().iter().cloned().collect();

    let left_ranks: Vec<Vec<usize>> = left_rows
        .iter()
        .map(|&row| puzzle.ranks_possible_for_row(category, row))
        .collect::<Result<_>>()?;
    let right_ranks: Vec<Vec<usize>> = right_rows
        .iter()
        .map(|&row| puzzle.ranks_possible_for_row(category, row))
        .collect::<Result<_>>()?;

    let pair_ok = |ranks_a: &[usize], ranks_b: &[usize]| {
        ranks_a
            .iter()
            .any(|&a| ranks_b.iter().any(|&b| pred(a as i64, b as i64)))
    };

    let keep_left: OrdSet<RowIndex> = left_rows
        .iter()
        .zip(&left_ranks)
        .filter(|(_, ranks)| right_ranks.iter().any(|other| pair_ok(ranks, other)))
        .map(|(&row, _)| row)
        .collect();
    let keep_right: OrdSet<RowIndex> = right_rows
        .iter()
        .zip(&right_ranks)
        .filter(|(_, ranks)| left_ranks.iter().any(|other| pair_ok(other, ranks)))
        .map(|(&row, _)| row)
        .collect();

    let mut changed = puzzle.variable_mut(left)?.intersect(&keep_left)?;
    changed |= puzzle.variable_mut(right)?.intersect(&keep_right)?;
    Ok(changed)
}
