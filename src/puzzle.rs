use std::sync::Arc;

use im::{HashMap, OrdSet};

use crate::{
    error::{Error, Result},
    solver::constraint::Constraint,
    solver::constraints::all_different::AllDifferentConstraint,
};

/// An index into the rows of the solution grid, in `0..N-1`.
pub type RowIndex = usize;

/// A named unknown whose domain is the set of rows it may still occupy.
///
/// Domains are persistent ordered sets, so cloning a variable (and with it a
/// whole [`Puzzle`]) shares structure instead of copying. Iteration order is
/// ascending row index, which is also the branching order used by the solver.
#[derive(Debug, Clone)]
pub struct Variable {
    name: String,
    domain: OrdSet<RowIndex>,
}

impl Variable {
    pub(crate) fn new(name: String, rows: usize) -> Self {
        Self {
            name,
            domain: (0..rows).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The candidate rows, ascending. Never empty.
    pub fn domain(&self) -> &OrdSet<RowIndex> {
        &self.domain
    }

    /// `true` iff exactly one candidate row remains.
    pub fn is_assigned(&self) -> bool {
        self.domain.len() == 1
    }

    /// The sole remaining row of an assigned variable.
    pub fn assigned_value(&self) -> Result<RowIndex> {
        match self.domain.get_min() {
            Some(&row) if self.domain.len() == 1 => Ok(row),
            _ => Err(Error::NotAssigned(self.name.clone())),
        }
    }

    /// Collapses the domain to the single row `row`.
    pub fn assign(&mut self, row: RowIndex) -> Result<()> {
        if !self.domain.contains(&row) {
            return Err(Error::NotInDomain {
                variable: self.name.clone(),
                row,
            });
        }
        self.domain = OrdSet::unit(row);
        Ok(())
    }

    /// Removes `row` if present, reporting whether anything changed.
    ///
    /// Removing the last candidate is a domain wipeout and fails with the
    /// contradiction kind, so propagators can simply bubble it up.
    pub fn remove(&mut self, row: RowIndex) -> Result<bool> {
        if !self.domain.contains(&row) {
            return Ok(false);
        }
        if self.domain.len() == 1 {
            return Err(Error::Contradiction(format!(
                "removing row {row} would wipe out the domain of `{}`",
                self.name
            )));
        }
        self.domain.remove(&row);
        Ok(true)
    }

    /// Replaces the domain with its intersection with `keep`.
    pub fn intersect(&mut self, keep: &OrdSet<RowIndex>) -> Result<bool> {
        let next: OrdSet<RowIndex> = self
            .domain
            .iter()
            .filter(|row| keep.contains(row))
            .cloned()
            .collect();
        if next.is_empty() {
            return Err(Error::Contradiction(format!(
                "no candidate rows remain for `{}`",
                self.name
            )));
        }
        let changed = next.len() < self.domain.len();
        self.domain = next;
        Ok(changed)
    }
}

/// A logic-grid puzzle: `N` rows, variables grouped by category, and an
/// ordered list of constraints.
///
/// The puzzle is mutable during setup (category and constraint additions) and
/// during solving (domain narrowing). The solver never narrows the caller's
/// instance; it works on clones, which are cheap because domains share
/// structure and constraints are shared by reference.
#[derive(Debug, Clone)]
pub struct Puzzle {
    size: usize,
    variables: HashMap<String, Variable>,
    insertion_order: Vec<String>,
    categories: HashMap<String, Vec<String>>,
    constraints: Vec<Arc<dyn Constraint>>,
}

impl Puzzle {
    /// Creates an empty puzzle with `size` rows. `size` must be at least 2.
    pub fn new(size: usize) -> Result<Self> {
        if size < 2 {
            return Err(Error::InvalidArgument(format!(
                "a puzzle needs at least two rows, got {size}"
            )));
        }
        Ok(Self {
            size,
            variables: HashMap::new(),
            insertion_order: Vec::new(),
            categories: HashMap::new(),
            constraints: Vec::new(),
        })
    }

    /// The number of rows, which is also the number of values per category.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Declares a category, creating variables `<tag>1..<tag>N` with full
    /// domains and an implicit all-different over them.
    pub fn add_category(&mut self, tag: &str) -> Result<()> {
        if tag.is_empty() || !tag.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(Error::InvalidArgument(format!(
                "category tag `{tag}` must be a non-empty alphabetic string"
            )));
        }
        if self.categories.contains_key(tag) {
            return Err(Error::DuplicateCategory(tag.to_string()));
        }

        let names: Vec<String> = (1..=self.size).map(|rank| format!("{tag}{rank}")).collect();
        for name in &names {
            self.variables
                .insert(name.clone(), Variable::new(name.clone(), self.size));
            self.insertion_order.push(name.clone());
        }
        self.categories.insert(tag.to_string(), names.clone());

        // The N variables of a category form a permutation of the rows.
        self.add_constraint(AllDifferentConstraint::new(names))
    }

    /// Appends a constraint, checking that every variable it names exists.
    pub fn add_constraint<C: Constraint + 'static>(&mut self, constraint: C) -> Result<()> {
        for name in constraint.variables() {
            if !self.variables.contains_key(name) {
                return Err(Error::UnknownVariable(name.clone()));
            }
        }
        self.constraints.push(Arc::new(constraint));
        Ok(())
    }

    pub fn variable(&self, name: &str) -> Result<&Variable> {
        self.variables
            .get(name)
            .ok_or_else(|| Error::UnknownVariable(name.to_string()))
    }

    pub fn variable_mut(&mut self, name: &str) -> Result<&mut Variable> {
        self.variables
            .get_mut(name)
            .ok_or_else(|| Error::UnknownVariable(name.to_string()))
    }

    /// The rank integers `k` such that `<category><k>` still has `row` in its
    /// domain. Rank-based propagators use this to compare two rows through
    /// the lens of a ranked category.
    pub fn ranks_possible_for_row(&self, category: &str, row: RowIndex) -> Result<Vec<usize>> {
        let names = self
            .categories
            .get(category)
            .ok_or_else(|| Error::UnknownCategory(category.to_string()))?;
        let mut ranks = Vec::new();
        for (index, name) in names.iter().enumerate() {
            if self.variable(name)?.domain().contains(&row) {
                ranks.push(index + 1);
            }
        }
        Ok(ranks)
    }

    /// `true` iff every variable is pinned to a single row.
    pub fn is_complete(&self) -> bool {
        self.variables.values().all(Variable::is_assigned)
    }

    /// Variable names in the order they were declared.
    pub fn variable_names(&self) -> impl Iterator<Item = &str> {
        self.insertion_order.iter().map(String::as_str)
    }

    pub fn constraints(&self) -> &[Arc<dyn Constraint>] {
        &self.constraints
    }
}
