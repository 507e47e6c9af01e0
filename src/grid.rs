use std::collections::BTreeMap;

use prettytable::{Cell, Row as TableRow, Table};

use crate::{
    error::{Error, Result},
    puzzle::Puzzle,
};

/// One row of the solved grid: category tag to the variable placed there.
/// The map is ordered, so categories iterate lexicographically.
pub type GridRow = BTreeMap<String, String>;

/// A fully assigned puzzle projected to its row-indexed form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<GridRow>,
}

impl Grid {
    /// Projects a fully assigned puzzle: for each variable pinned to row `r`,
    /// records `rows[r][tag] = name`, with the tag recovered by stripping the
    /// trailing decimal digits of the variable name.
    pub fn from_puzzle(puzzle: &Puzzle) -> Result<Self> {
        let mut rows = vec![GridRow::new(); puzzle.size()];
        for name in puzzle.variable_names() {
            let row = puzzle.variable(name)?.assigned_value()?;
            let tag = category_tag(name)?;
            rows[row].insert(tag.to_string(), name.to_string());
        }
        Ok(Self { rows })
    }

    /// The rows of the grid, indexed by row number.
    pub fn rows(&self) -> &[GridRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Renders the grid as a text table, one line per row, categories in
    /// lexicographic order.
    pub fn render_table(&self) -> String {
        let mut table = Table::new();

        let tags: Vec<&String> = self
            .rows
            .first()
            .map(|row| row.keys().collect())
            .unwrap_or_default();
        let mut header = vec![Cell::new("row")];
        header.extend(tags.iter().map(|tag| Cell::new(tag)));
        table.add_row(TableRow::new(header));

        for (index, row) in self.rows.iter().enumerate() {
            let mut cells = vec![Cell::new(&index.to_string())];
            cells.extend(row.values().map(|name| Cell::new(name)));
            table.add_row(TableRow::new(cells));
        }

        table.to_string()
    }
}

/// The alphabetic prefix of a `<tag><rank>` variable name.
fn category_tag(name: &str) -> Result<&str> {
    let tag = name.trim_end_matches(|c: char| c.is_ascii_digit());
    if tag.is_empty() || tag.len() == name.len() {
        return Err(Error::InvalidArgument(format!(
            "variable name `{name}` does not follow the <tag><rank> convention"
        )));
    }
    Ok(tag)
}
