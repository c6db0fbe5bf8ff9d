//! FILENAME: core/totals-engine/src/values.rs
//! Values shown in totals rows.
//!
//! Ordering and selection of totals never look at numbers; the values a
//! totals row displays come from a `ValuesProvider`. Two providers exist:
//! - `PreviewValues`: fixed sample rows for previews and demos
//! - `ComputedValues`: aggregates computed from the table's own data

use crate::config::TableData;
use crate::total_type::TotalType;

/// One optional value per table column. `None` renders as a blank cell.
pub type TotalValues = Vec<Option<f64>>;

/// Source of the per-column values of a totals row.
pub trait ValuesProvider {
    /// `canonical_index` is the position of `total_type` in `TotalType::ALL`.
    fn values_for(&self, total_type: TotalType, canonical_index: usize) -> TotalValues;
}

// ============================================================================
// PREVIEW VALUES
// ============================================================================

const PREVIEW_ROWS: [[Option<f64>; 10]; 3] = [
    [
        None,
        Some(1279876.1234894),
        Some(123.123),
        None,
        Some(256.0),
        Some(815.0),
        Some(99.0),
        Some(9876983.0),
        None,
        Some(9845.0),
    ],
    [
        None,
        Some(45894267842.1239),
        Some(45.98),
        Some(12.32),
        None,
        Some(12.0),
        Some(113.0),
        Some(231.0),
        Some(45.0),
        Some(112.32),
    ],
    [
        None,
        Some(12.99),
        Some(0.012),
        Some(189415616.28),
        Some(12.0001),
        Some(1.008),
        Some(2.0),
        Some(2.098765),
        Some(0.1),
        Some(10.0987),
    ],
];

/// Fixed sample values, row chosen by `canonical_index % 3`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreviewValues;

impl ValuesProvider for PreviewValues {
    fn values_for(&self, _total_type: TotalType, canonical_index: usize) -> TotalValues {
        PREVIEW_ROWS[canonical_index % PREVIEW_ROWS.len()].to_vec()
    }
}

// ============================================================================
// COMPUTED VALUES
// ============================================================================

/// Running aggregate over the numeric cells of one column.
#[derive(Debug, Clone, Default)]
pub struct TotalAccumulator {
    pub sum: f64,
    pub count: usize,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Every value seen, kept for the median.
    values: Vec<f64>,
}

impl TotalAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_number(&mut self, value: f64) {
        self.count += 1;
        self.sum += value;
        self.min = Some(self.min.map_or(value, |m| m.min(value)));
        self.max = Some(self.max.map_or(value, |m| m.max(value)));
        self.values.push(value);
    }

    pub fn median(&self) -> Option<f64> {
        if self.values.is_empty() {
            return None;
        }

        let mut sorted = self.values.clone();
        sorted.sort_by(f64::total_cmp);

        let mid = sorted.len() / 2;
        if sorted.len() % 2 == 0 {
            Some((sorted[mid - 1] + sorted[mid]) / 2.0)
        } else {
            Some(sorted[mid])
        }
    }

    /// Final value for `total_type`, `None` when nothing was accumulated.
    /// Rollup totals are computed by the backend and never derived here.
    pub fn compute(&self, total_type: TotalType) -> Option<f64> {
        if self.count == 0 {
            return None;
        }

        match total_type {
            TotalType::Sum => Some(self.sum),
            TotalType::Avg => Some(self.sum / self.count as f64),
            TotalType::Min => self.min,
            TotalType::Max => self.max,
            TotalType::Nat => None,
            TotalType::Med => self.median(),
        }
    }
}

impl Extend<f64> for TotalAccumulator {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.add_number(value);
        }
    }
}

/// Aggregates computed over the metric columns of a table.
#[derive(Debug, Clone)]
pub struct ComputedValues {
    /// One accumulator per column; `None` for attribute columns.
    columns: Vec<Option<TotalAccumulator>>,
}

impl ComputedValues {
    pub fn from_table(data: &TableData) -> Self {
        let columns = (0..data.column_count())
            .map(|col| {
                data.metric_values(col).map(|values| {
                    let mut acc = TotalAccumulator::new();
                    acc.extend(values);
                    acc
                })
            })
            .collect();

        ComputedValues { columns }
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}

impl ValuesProvider for ComputedValues {
    fn values_for(&self, total_type: TotalType, _canonical_index: usize) -> TotalValues {
        self.columns
            .iter()
            .map(|acc| acc.as_ref().and_then(|a| a.compute(total_type)))
            .collect()
    }
}
