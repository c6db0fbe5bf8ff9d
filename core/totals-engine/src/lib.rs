//! FILENAME: core/totals-engine/src/lib.rs
//! Totals rows for table visualizations.
//!
//! A table can show summary rows (sum, average, min, max, rollup, median)
//! below its data. This crate decides which totals exist, which are in use,
//! how the picker for adding one looks, and in which order and with which
//! values the rows are displayed. Rendering stays with the host.
//!
//! Layers:
//! - `total_type`: The fixed catalog of aggregate kinds
//! - `registry`: Pure selection, ordering and mutation rules
//! - `values`: Where the numbers of a totals row come from
//! - `footer` / `highlight`: Footer rows and hover state for the renderer
//! - `editor`: Host wrapper owning the used totals and notifying on change

pub mod logging;

pub mod config;
pub mod editor;
pub mod error;
pub mod footer;
pub mod highlight;
pub mod localize;
pub mod registry;
pub mod total_type;
pub mod values;

pub use config::{
    AttributeElement, ColumnHeader, ColumnKind, RawCell, Scalar, TableConfig, TableData,
};
pub use editor::{ChangeCallback, TotalsEditor};
pub use error::{Result, TotalsError};
pub use footer::{build_footer, has_footer, FooterCell, FooterRow};
pub use highlight::HighlightState;
pub use localize::{Localize, MessageCatalog};
pub use registry::{
    add_total, build_picker, can_add_more, describe, list_types, order_for_display,
    remove_total, reset_output_measure_indexes, DisplayTotal, PickerRole, PickerRow,
    TotalDescriptor, UsedTotal,
};
pub use total_type::{TotalType, DROPDOWN_HEADING_KEY};
pub use values::{ComputedValues, PreviewValues, TotalAccumulator, TotalValues, ValuesProvider};
