use std::sync::Arc;

use prettytable::{Cell, Row, Table};

use crate::solver::{constraint::Constraint, engine::SearchStats};

/// Renders per-constraint propagation statistics as a text table.
///
/// Rows follow the puzzle's constraint list, which is also the order the
/// propagation loop visits them, so the table reads top to bottom the way a
/// pass over the clues runs. A clue the search never reached (for example
/// after a contradiction at the root) still gets a row, with zero counts.
/// The prune rate says how often a pass over the clue actually narrowed a
/// domain; a clue stuck at 0% did all of its work through the search's
/// branching instead.
pub fn render_stats_table(stats: &SearchStats, constraints: &[Arc<dyn Constraint>]) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("#"),
        Cell::new("Clue"),
        Cell::new("Passes"),
        Cell::new("Prunings"),
        Cell::new("Prune rate"),
        Cell::new("Total time (ms)"),
    ]));

    let mut passes_total = 0u64;
    let mut prunings_total = 0u64;
    let mut micros_total = 0u64;

    for (position, constraint) in constraints.iter().enumerate() {
        let per_clue = stats
            .constraint_stats
            .get(&position)
            .copied()
            .unwrap_or_default();
        passes_total += per_clue.revisions;
        prunings_total += per_clue.prunings;
        micros_total += per_clue.time_spent_micros;

        let prune_rate = if per_clue.revisions > 0 {
            format!(
                "{:.0}%",
                100.0 * per_clue.prunings as f64 / per_clue.revisions as f64
            )
        } else {
            "-".to_string()
        };

        table.add_row(Row::new(vec![
            Cell::new(&position.to_string()),
            Cell::new(&constraint.descriptor().description),
            Cell::new(&per_clue.revisions.to_string()),
            Cell::new(&per_clue.prunings.to_string()),
            Cell::new(&prune_rate),
            Cell::new(&format!("{:.2}", per_clue.time_spent_micros as f64 / 1000.0)),
        ]));
    }

    table.add_row(Row::new(vec![
        Cell::new(""),
        Cell::new(&format!(
            "total ({} nodes, {} backtracks)",
            stats.nodes_visited, stats.backtracks
        )),
        Cell::new(&passes_total.to_string()),
        Cell::new(&prunings_total.to_string()),
        Cell::new(""),
        Cell::new(&format!("{:.2}", micros_total as f64 / 1000.0)),
    ]));

    table.to_string()
}
