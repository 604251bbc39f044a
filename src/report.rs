use crate::assigner::Assignment;
use crate::constants::dataset::{COLUMN_DOMAIN, COLUMN_RANK_INDEX};
use crate::constants::report::COLUMN_GAP;

/// Summary line for an assignment, e.g. `Next 2 Trexa domains have been assigned to ERIK`.
pub fn summary_line(assignment: &Assignment) -> String {
    format!(
        "Next {} {} domains have been assigned to {}",
        assignment.assigned_count(),
        assignment.ordering.label(),
        assignment.assignee
    )
}

/// Full report: summary line followed by the rank/domain table.
///
/// Every line ends with `\n`. The table keeps the selection order.
pub fn render_report(assignment: &Assignment) -> String {
    let rows: Vec<Vec<String>> = assignment
        .selected
        .iter()
        .map(|record| vec![record.rank_index.to_string(), record.domain.clone()])
        .collect();
    let mut out = summary_line(assignment);
    out.push('\n');
    out.push_str(&render_table(&[COLUMN_RANK_INDEX, COLUMN_DOMAIN], &rows));
    out
}

/// Right-align each column to its widest cell (header included).
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (idx, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(idx) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let mut out = String::new();
    push_row(&mut out, headers.iter().copied(), &widths);
    for row in rows {
        push_row(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn push_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line: Vec<String> = cells
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:>width$}"))
        .collect();
    out.push_str(&line.join(COLUMN_GAP));
    out.push('\n');
}
