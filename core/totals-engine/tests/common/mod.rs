//! FILENAME: tests/common/mod.rs
//! Test harness and fixtures for totals engine integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use totals_engine::{
    ColumnHeader, MessageCatalog, RawCell, TableConfig, TableData, TotalType, TotalsEditor, UsedTotal,
};

/// Localizer returning the message key itself.
pub fn identity(key: &str) -> String {
    key.to_string()
}

/// Used totals of the given types, aliases equal to the type tag.
pub fn used(types: &[TotalType]) -> Vec<UsedTotal> {
    types.iter().map(|t| UsedTotal::new(*t, t.as_str())).collect()
}

pub fn types_of(totals: &[UsedTotal]) -> Vec<TotalType> {
    totals.iter().map(|t| t.total_type).collect()
}

/// Editor wired to a recording change callback.
pub struct TestHarness {
    pub editor: TotalsEditor<MessageCatalog>,
    pub notifications: Rc<RefCell<Vec<Vec<UsedTotal>>>>,
}

impl TestHarness {
    pub fn new() -> Self {
        Self::with_config(TableConfig {
            totals_edit_allowed: true,
            totals: Vec::new(),
        })
    }

    pub fn with_config(config: TableConfig) -> Self {
        let notifications = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&notifications);
        let editor = TotalsEditor::new(config, MessageCatalog::english())
            .on_change(move |totals| sink.borrow_mut().push(totals.to_vec()));

        TestHarness { editor, notifications }
    }

    pub fn notification_count(&self) -> usize {
        self.notifications.borrow().len()
    }

    pub fn last_notification(&self) -> Option<Vec<UsedTotal>> {
        self.notifications.borrow().last().cloned()
    }
}

/// Small sales table: one attribute column and two metric columns.
pub struct SalesFixture;

impl SalesFixture {
    pub fn headers() -> Vec<ColumnHeader> {
        vec![
            ColumnHeader::attribute("Region"),
            ColumnHeader::metric("Sales"),
            ColumnHeader::metric("Quantity"),
        ]
    }

    pub fn data() -> Vec<(&'static str, f64, f64)> {
        vec![
            ("East", 1500.0, 10.0),
            ("West", 2300.0, 15.0),
            ("North", 900.0, 5.0),
            ("South", 3100.0, 20.0),
            ("Central", 1200.0, 8.0),
        ]
    }

    pub fn table() -> TableData {
        TableData {
            headers: Self::headers(),
            raw_data: Self::data()
                .into_iter()
                .map(|(region, sales, quantity)| {
                    vec![
                        Some(RawCell::element(region, region)),
                        Some(sales.to_string().into()),
                        Some(quantity.into()),
                    ]
                })
                .collect(),
        }
    }
}
