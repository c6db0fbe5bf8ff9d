//! FILENAME: core/totals-engine/src/editor.rs
//! PURPOSE: Host-side owner of a table's used totals.
//! CONTEXT: Wraps the pure registry operations: each mutation replaces the
//! stored collection and hands the new one to the change callback, which
//! the host uses to push the totals to its query layer.

use std::fmt;

use crate::config::{ColumnHeader, TableConfig};
use crate::error::Result;
use crate::footer::{build_footer, has_footer, FooterRow};
use crate::localize::Localize;
use crate::registry::{self, DisplayTotal, PickerRow, UsedTotal};
use crate::total_type::TotalType;
use crate::values::ValuesProvider;
use crate::{log_debug, log_enter, log_error, log_exit, log_info};

/// Callback receiving the collection after every mutation.
pub type ChangeCallback = Box<dyn FnMut(&[UsedTotal])>;

pub struct TotalsEditor<L: Localize> {
    localize: L,
    totals: Vec<UsedTotal>,
    edit_allowed: bool,
    on_change: Option<ChangeCallback>,
}

impl<L: Localize> TotalsEditor<L> {
    pub fn new(config: TableConfig, localize: L) -> Self {
        TotalsEditor {
            localize,
            totals: config.totals,
            edit_allowed: config.totals_edit_allowed,
            on_change: None,
        }
    }

    /// Register the callback notified after each add/remove.
    pub fn on_change(mut self, callback: impl FnMut(&[UsedTotal]) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn totals(&self) -> &[UsedTotal] {
        &self.totals
    }

    pub fn is_edit_allowed(&self) -> bool {
        self.edit_allowed
    }

    /// Current state as a config document.
    pub fn to_config(&self) -> TableConfig {
        TableConfig {
            totals_edit_allowed: self.edit_allowed,
            totals: self.totals.clone(),
        }
    }

    fn replace(&mut self, next: Vec<UsedTotal>) {
        self.totals = next;
        if let Some(callback) = self.on_change.as_mut() {
            callback(self.totals.as_slice());
        }
    }

    /// Returns whether the total was added. Adding a used type does nothing
    /// and does not notify.
    pub fn add_total(&mut self, total_type: TotalType) -> bool {
        log_enter!("TOTALS", "add_total", "type={}", total_type);

        let (next, changed) = registry::add_total(&self.totals, total_type, &self.localize);
        if !changed {
            log_debug!("TOTALS", "add {} skipped, already used", total_type);
            log_exit!("TOTALS", "add_total", "unchanged");
            return false;
        }

        log_info!("TOTALS", "added {} ({} used)", total_type, next.len());
        self.replace(next);
        log_exit!("TOTALS", "add_total");
        true
    }

    pub fn add_total_by_name(&mut self, type_name: &str) -> Result<bool> {
        let total_type = match type_name.parse::<TotalType>() {
            Ok(t) => t,
            Err(e) => {
                log_error!("TOTALS", "add_total_by_name: {}", e);
                return Err(e);
            }
        };
        Ok(self.add_total(total_type))
    }

    pub fn remove_total(&mut self, total_type: TotalType) {
        log_enter!("TOTALS", "remove_total", "type={}", total_type);

        let next = registry::remove_total(&self.totals, total_type);
        log_info!("TOTALS", "removed {} ({} used)", total_type, next.len());
        self.replace(next);

        log_exit!("TOTALS", "remove_total");
    }

    /// Whether the add-total button is shown under `column_index`.
    /// Only editable tables show it, never on the first column, only on
    /// metric columns, and only while another total can still be added.
    pub fn shows_add_total(&self, column_index: usize, header: &ColumnHeader) -> bool {
        self.edit_allowed
            && column_index != 0
            && header.is_metric()
            && registry::can_add_more(&self.totals)
    }

    /// Picker rows, or `None` when every type is already used and the add
    /// affordance should not be shown.
    pub fn picker(&self) -> Option<Vec<PickerRow>> {
        if !registry::can_add_more(&self.totals) {
            return None;
        }
        Some(registry::build_picker(&self.totals, &self.localize))
    }

    pub fn display_totals<P: ValuesProvider + ?Sized>(&self, provider: &P) -> Vec<DisplayTotal> {
        registry::order_for_display(&self.totals, provider)
    }

    pub fn has_footer(&self, headers: &[ColumnHeader]) -> bool {
        has_footer(headers, &self.totals, self.edit_allowed)
    }

    pub fn footer<P: ValuesProvider + ?Sized>(
        &self,
        headers: &[ColumnHeader],
        provider: &P,
    ) -> Vec<FooterRow> {
        build_footer(headers, &self.totals, provider, self.edit_allowed)
    }
}

impl<L: Localize> fmt::Debug for TotalsEditor<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TotalsEditor")
            .field("totals", &self.totals)
            .field("edit_allowed", &self.edit_allowed)
            .field("has_callback", &self.on_change.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::localize::MessageCatalog;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn editor() -> TotalsEditor<MessageCatalog> {
        let config = TableConfig {
            totals_edit_allowed: true,
            totals: Vec::new(),
        };
        TotalsEditor::new(config, MessageCatalog::english())
    }

    #[test]
    fn test_callback_sees_every_mutation() {
        let seen: Rc<RefCell<Vec<Vec<TotalType>>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut editor = editor().on_change(move |totals| {
            sink.borrow_mut().push(totals.iter().map(|t| t.total_type).collect());
        });

        assert!(editor.add_total(TotalType::Med));
        assert!(editor.add_total(TotalType::Sum));
        assert!(!editor.add_total(TotalType::Med));
        editor.remove_total(TotalType::Med);

        assert_eq!(
            *seen.borrow(),
            vec![
                vec![TotalType::Med],
                vec![TotalType::Med, TotalType::Sum],
                vec![TotalType::Sum],
            ]
        );
    }

    #[test]
    fn test_add_by_name() {
        let mut editor = editor();
        assert!(editor.add_total_by_name("nat").unwrap());
        assert_eq!(editor.totals()[0].alias, "Total");
        assert!(editor.add_total_by_name("bogus").is_err());
        assert_eq!(editor.totals().len(), 1);
    }

    #[test]
    fn test_picker_hidden_when_full() {
        let mut editor = editor();
        for t in TotalType::ALL {
            assert!(editor.picker().is_some());
            editor.add_total(t);
        }
        assert!(editor.picker().is_none());
    }

    #[test]
    fn test_shows_add_total_per_column() {
        let mut editor = editor();
        let attribute = ColumnHeader::attribute("Region");
        let metric = ColumnHeader::metric("Sales");

        assert!(!editor.shows_add_total(0, &metric));
        assert!(!editor.shows_add_total(1, &attribute));
        assert!(editor.shows_add_total(1, &metric));

        for t in TotalType::ALL {
            editor.add_total(t);
        }
        assert!(!editor.shows_add_total(1, &metric));
    }

    #[test]
    fn test_read_only_editor_never_shows_add_total() {
        let editor = TotalsEditor::new(TableConfig::default(), MessageCatalog::english());
        assert!(!editor.shows_add_total(2, &ColumnHeader::metric("Sales")));
    }

    #[test]
    fn test_to_config_round_trips_state() {
        let mut editor = editor();
        editor.add_total(TotalType::Avg);
        let config = editor.to_config();
        assert!(config.totals_edit_allowed);
        assert_eq!(config.totals, vec![UsedTotal::new(TotalType::Avg, "Avg")]);
    }
}
