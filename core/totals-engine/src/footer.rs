//! FILENAME: core/totals-engine/src/footer.rs
//! Footer model for tables with totals rows.
//!
//! The footer holds one row per used total, in canonical order. The first
//! column of a row carries the total's alias, every other column the value
//! of that column (blank when the provider has none).

use serde::{Deserialize, Serialize};

use crate::config::ColumnHeader;
use crate::registry::{order_for_display, UsedTotal};
use crate::total_type::TotalType;
use crate::values::ValuesProvider;

/// Content of one footer cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FooterCell {
    Alias(String),
    Value(f64),
    Empty,
}

/// One totals row of the footer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterRow {
    pub total_type: TotalType,
    pub cells: Vec<FooterCell>,
}

/// Whether the table renders a footer at all.
///
/// Editable tables always have one (it hosts the add-total affordance).
/// Otherwise a footer is shown for more than one total, unless every
/// column is a metric.
pub fn has_footer(headers: &[ColumnHeader], used: &[UsedTotal], edit_allowed: bool) -> bool {
    if edit_allowed {
        return true;
    }

    let only_metrics = headers.iter().all(ColumnHeader::is_metric);
    used.len() > 1 && !only_metrics
}

pub fn build_footer<P: ValuesProvider + ?Sized>(
    headers: &[ColumnHeader],
    used: &[UsedTotal],
    provider: &P,
    edit_allowed: bool,
) -> Vec<FooterRow> {
    if !has_footer(headers, used, edit_allowed) {
        return Vec::new();
    }

    order_for_display(used, provider)
        .into_iter()
        .map(|display| {
            let cells = (0..headers.len())
                .map(|col| {
                    if col == 0 {
                        FooterCell::Alias(display.total.alias.clone())
                    } else {
                        match display.values.get(col).copied().flatten() {
                            Some(value) => FooterCell::Value(value),
                            None => FooterCell::Empty,
                        }
                    }
                })
                .collect();

            FooterRow {
                total_type: display.total.total_type,
                cells,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::PreviewValues;

    fn headers() -> Vec<ColumnHeader> {
        vec![
            ColumnHeader::attribute("Region"),
            ColumnHeader::metric("Sales"),
            ColumnHeader::metric("Units"),
            ColumnHeader::metric("Margin"),
        ]
    }

    fn totals(types: &[TotalType]) -> Vec<UsedTotal> {
        types.iter().map(|t| UsedTotal::new(*t, t.as_str().to_uppercase())).collect()
    }

    #[test]
    fn test_editable_tables_always_have_footer() {
        assert!(has_footer(&headers(), &[], true));
    }

    #[test]
    fn test_read_only_footer_rules() {
        let two = totals(&[TotalType::Sum, TotalType::Avg]);
        let one = totals(&[TotalType::Sum]);
        assert!(has_footer(&headers(), &two, false));
        assert!(!has_footer(&headers(), &one, false));

        let only_metrics = vec![ColumnHeader::metric("A"), ColumnHeader::metric("B")];
        assert!(!has_footer(&only_metrics, &two, false));
    }

    #[test]
    fn test_build_footer_rows() {
        let rows = build_footer(
            &headers(),
            &totals(&[TotalType::Max, TotalType::Sum]),
            &PreviewValues,
            true,
        );

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].total_type, TotalType::Sum);
        assert_eq!(
            rows[0].cells,
            vec![
                FooterCell::Alias("SUM".to_string()),
                FooterCell::Value(1279876.1234894),
                FooterCell::Value(123.123),
                FooterCell::Empty,
            ]
        );
        // max sits at canonical index 3, so it reuses the first preview row
        assert_eq!(rows[1].cells[0], FooterCell::Alias("MAX".to_string()));
        assert_eq!(rows[1].cells[1], FooterCell::Value(1279876.1234894));
    }

    #[test]
    fn test_missing_values_render_empty() {
        let wide: Vec<ColumnHeader> = (0..12)
            .map(|i| if i == 0 { ColumnHeader::attribute("a") } else { ColumnHeader::metric("m") })
            .collect();
        let rows = build_footer(&wide, &totals(&[TotalType::Avg]), &PreviewValues, true);
        assert_eq!(rows[0].cells.len(), 12);
        assert_eq!(rows[0].cells[11], FooterCell::Empty);
    }

    #[test]
    fn test_no_footer_no_rows() {
        let rows = build_footer(&headers(), &totals(&[TotalType::Avg]), &PreviewValues, false);
        assert!(rows.is_empty());
    }
}
