//! FILENAME: core/totals-engine/src/registry.rs
//! PURPOSE: Selection, ordering and mutation rules for totals rows.
//! CONTEXT: Every operation is a pure transform over the caller-owned list
//! of used totals. Mutations return a new collection which the host stores
//! in place of the old one; see `TotalsEditor` for a wrapper doing that.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::localize::Localize;
use crate::total_type::{TotalType, DROPDOWN_HEADING_KEY};
use crate::values::{TotalValues, ValuesProvider};

// ============================================================================
// TYPES
// ============================================================================

/// Localized description of one total type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalDescriptor {
    #[serde(rename = "type")]
    pub total_type: TotalType,
    pub title: String,
    pub alias: String,
}

impl TotalDescriptor {
    /// Resolves title and alias. The localizer is called on every lookup.
    pub fn for_type<L: Localize + ?Sized>(total_type: TotalType, localize: &L) -> Self {
        TotalDescriptor {
            total_type,
            title: localize.localize(&total_type.title_key()),
            alias: localize.localize(&total_type.alias_key()),
        }
    }
}

/// A total attached to a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsedTotal {
    #[serde(rename = "type")]
    pub total_type: TotalType,

    #[serde(default)]
    pub alias: String,

    /// Required by the backend schema; always stamped empty by this crate.
    #[serde(default)]
    pub output_measure_indexes: Vec<u32>,
}

impl UsedTotal {
    pub fn new(total_type: TotalType, alias: impl Into<String>) -> Self {
        UsedTotal {
            total_type,
            alias: alias.into(),
            output_measure_indexes: Vec::new(),
        }
    }
}

/// Role marker of the picker heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PickerRole {
    Header,
}

/// One entry of the total type picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PickerRow {
    /// Non-selectable heading. `title` is a message key left for the UI.
    Header { role: PickerRole, title: String },
    Item {
        #[serde(flatten)]
        descriptor: TotalDescriptor,
        disabled: bool,
    },
}

impl PickerRow {
    pub fn is_header(&self) -> bool {
        matches!(self, PickerRow::Header { .. })
    }

    pub fn total_type(&self) -> Option<TotalType> {
        match self {
            PickerRow::Header { .. } => None,
            PickerRow::Item { descriptor, .. } => Some(descriptor.total_type),
        }
    }

    /// Selectable rows are items that are not already used.
    pub fn is_selectable(&self) -> bool {
        matches!(self, PickerRow::Item { disabled: false, .. })
    }
}

/// A used total in display order, with the values of its row attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayTotal {
    #[serde(flatten)]
    pub total: UsedTotal,
    pub values: TotalValues,
}

// ============================================================================
// OPERATIONS
// ============================================================================

/// All total types in canonical order.
pub fn list_types() -> [TotalType; 6] {
    TotalType::ALL
}

/// Looks up title and alias of the total type named `type_name`.
pub fn describe<L: Localize + ?Sized>(type_name: &str, localize: &L) -> Result<TotalDescriptor> {
    let total_type = type_name.parse::<TotalType>()?;
    Ok(TotalDescriptor::for_type(total_type, localize))
}

fn is_used(used: &[UsedTotal], total_type: TotalType) -> bool {
    used.iter().any(|u| u.total_type == total_type)
}

/// Picker rows: the heading followed by every type in canonical order,
/// disabled when already used.
pub fn build_picker<L: Localize + ?Sized>(used: &[UsedTotal], localize: &L) -> Vec<PickerRow> {
    let mut rows = Vec::with_capacity(TotalType::ALL.len() + 1);
    rows.push(PickerRow::Header {
        role: PickerRole::Header,
        title: DROPDOWN_HEADING_KEY.to_string(),
    });

    rows.extend(list_types().into_iter().map(|t| PickerRow::Item {
        descriptor: TotalDescriptor::for_type(t, localize),
        disabled: is_used(used, t),
    }));

    rows
}

/// Stamps an empty `output_measure_indexes` on every total.
pub fn reset_output_measure_indexes(used: &[UsedTotal]) -> Vec<UsedTotal> {
    used.iter()
        .map(|u| UsedTotal {
            output_measure_indexes: Vec::new(),
            ..u.clone()
        })
        .collect()
}

/// Appends `total_type` unless it is already used.
///
/// Returns the new collection and whether it changed. On change every
/// element is re-stamped with `reset_output_measure_indexes`; the no-op
/// case hands back the input untouched.
pub fn add_total<L: Localize + ?Sized>(
    used: &[UsedTotal],
    total_type: TotalType,
    localize: &L,
) -> (Vec<UsedTotal>, bool) {
    if is_used(used, total_type) {
        return (used.to_vec(), false);
    }

    let descriptor = TotalDescriptor::for_type(total_type, localize);
    let mut next = used.to_vec();
    next.push(UsedTotal::new(total_type, descriptor.alias));

    (reset_output_measure_indexes(&next), true)
}

/// Removes every total of `total_type` and re-stamps the rest.
pub fn remove_total(used: &[UsedTotal], total_type: TotalType) -> Vec<UsedTotal> {
    let remaining: Vec<UsedTotal> = used
        .iter()
        .filter(|u| u.total_type != total_type)
        .cloned()
        .collect();

    reset_output_measure_indexes(&remaining)
}

/// Whether another total can be added at all.
pub fn can_add_more(used: &[UsedTotal]) -> bool {
    used.len() < TotalType::ALL.len()
}

/// Used totals in canonical order with the values of each row.
/// Only the first entry of a type is kept.
pub fn order_for_display<P: ValuesProvider + ?Sized>(
    used: &[UsedTotal],
    provider: &P,
) -> Vec<DisplayTotal> {
    list_types()
        .into_iter()
        .enumerate()
        .filter_map(|(index, t)| {
            let total = used.iter().find(|u| u.total_type == t)?;
            Some(DisplayTotal {
                total: total.clone(),
                values: provider.values_for(t, index),
            })
        })
        .collect()
}
