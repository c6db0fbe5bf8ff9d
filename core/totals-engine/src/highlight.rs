//! FILENAME: core/totals-engine/src/highlight.rs
//! PURPOSE: Hover highlight state of table columns and totals rows.
//! CONTEXT: The renderer maps this state to CSS classes. Column highlights
//! are frozen while the add-total dropdown is open so the column the
//! dropdown belongs to stays marked.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::config::ColumnKind;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HighlightState {
    edit_allowed: bool,
    dropdown_open: bool,
    body_columns: BTreeSet<usize>,
    footer_columns: BTreeSet<usize>,
    totals_row: Option<usize>,
}

fn toggle(set: &mut BTreeSet<usize>, on: bool, column: usize) {
    if on {
        set.insert(column);
    } else {
        set.remove(&column);
    }
}

impl HighlightState {
    pub fn new(edit_allowed: bool) -> Self {
        HighlightState {
            edit_allowed,
            ..Self::default()
        }
    }

    /// Open or close the add-total dropdown of `column`.
    /// Closing also clears the body and footer highlight of that column.
    pub fn set_dropdown_open(&mut self, open: bool, column: usize) {
        self.dropdown_open = open;
        self.toggle_body_column(open, column);
        self.toggle_footer_column(open, column);
    }

    pub fn is_dropdown_open(&self) -> bool {
        self.dropdown_open
    }

    pub fn toggle_body_column(&mut self, on: bool, column: usize) {
        if self.dropdown_open {
            return;
        }
        toggle(&mut self.body_columns, on, column);
    }

    pub fn toggle_footer_column(&mut self, on: bool, column: usize) {
        if self.dropdown_open {
            return;
        }
        toggle(&mut self.footer_columns, on, column);
    }

    /// Clear the highlighted totals row, then highlight `row` if given.
    /// Only editable tables highlight totals rows.
    pub fn reset_totals_row(&mut self, row: Option<usize>) {
        if !self.edit_allowed {
            return;
        }
        self.totals_row = row;
    }

    /// Body cells of metric columns react to hover in edit mode only.
    pub fn is_cell_hoverable(&self, kind: ColumnKind) -> bool {
        kind == ColumnKind::Metric && self.edit_allowed
    }

    pub fn is_body_column_highlighted(&self, column: usize) -> bool {
        self.body_columns.contains(&column)
    }

    pub fn is_footer_column_highlighted(&self, column: usize) -> bool {
        self.footer_columns.contains(&column)
    }

    pub fn highlighted_totals_row(&self) -> Option<usize> {
        self.totals_row
    }
}
