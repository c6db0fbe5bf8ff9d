//! FILENAME: core/totals-engine/src/total_type.rs
//! PURPOSE: The fixed catalog of aggregate kinds a totals row can show.
//! CONTEXT: The declaration order of `TotalType` is significant. It is the
//! order of the picker list and the canonical index handed to value
//! providers, so new variants must only ever be appended.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TotalsError;

/// Prefix shared by every totals message key.
pub const MESSAGE_KEY_PREFIX: &str = "visualizations.totals";

/// Message key of the non-selectable heading shown above the picker items.
pub const DROPDOWN_HEADING_KEY: &str = "visualizations.totals.dropdownHeading";

/// Aggregate kinds available for totals rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TotalType {
    Sum,
    Avg,
    Min,
    Max,
    /// Rollup total, computed natively by the backend.
    Nat,
    /// Median.
    Med,
}

impl TotalType {
    /// Every total type in canonical order.
    pub const ALL: [TotalType; 6] = [
        TotalType::Sum,
        TotalType::Avg,
        TotalType::Min,
        TotalType::Max,
        TotalType::Nat,
        TotalType::Med,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TotalType::Sum => "sum",
            TotalType::Avg => "avg",
            TotalType::Min => "min",
            TotalType::Max => "max",
            TotalType::Nat => "nat",
            TotalType::Med => "med",
        }
    }

    /// Position of this type in `TotalType::ALL`.
    pub fn canonical_index(self) -> usize {
        self as usize
    }

    pub fn title_key(self) -> String {
        format!("{}.funcTitle.{}", MESSAGE_KEY_PREFIX, self.as_str())
    }

    pub fn alias_key(self) -> String {
        format!("{}.funcAlias.{}", MESSAGE_KEY_PREFIX, self.as_str())
    }
}

impl fmt::Display for TotalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TotalType {
    type Err = TotalsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TotalType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| TotalsError::UnknownTotalType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_index_matches_declaration_order() {
        for (i, t) in TotalType::ALL.iter().enumerate() {
            assert_eq!(t.canonical_index(), i);
        }
    }

    #[test]
    fn test_parse_known_and_unknown() {
        assert_eq!("nat".parse::<TotalType>().unwrap(), TotalType::Nat);
        assert_eq!("med".parse::<TotalType>().unwrap(), TotalType::Med);

        let err = "Sum".parse::<TotalType>().unwrap_err();
        assert!(matches!(err, TotalsError::UnknownTotalType(ref s) if s == "Sum"));
    }

    #[test]
    fn test_message_keys() {
        assert_eq!(TotalType::Avg.title_key(), "visualizations.totals.funcTitle.avg");
        assert_eq!(TotalType::Nat.alias_key(), "visualizations.totals.funcAlias.nat");
    }

    #[test]
    fn test_serde_uses_lowercase_tags() {
        let json = serde_json::to_string(&TotalType::Med).unwrap();
        assert_eq!(json, "\"med\"");
        let back: TotalType = serde_json::from_str("\"max\"").unwrap();
        assert_eq!(back, TotalType::Max);
        assert!(serde_json::from_str::<TotalType>("\"bogus\"").is_err());
    }
}
