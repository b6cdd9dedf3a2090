//! Static attributes of a stockyard × product combination.

use serde::{Deserialize, Serialize};

/// Rail wagon classification.
///
/// The dataset service reports free-form type labels; anything outside the
/// known fleet falls back to [`WagonType::Boy`], the default wagon type of
/// the documented fallback record.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WagonType {
    #[default]
    Boy,
    Boxn,
    Bcn,
}

impl WagonType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WagonType::Boy => "BOY",
            WagonType::Boxn => "BOXN",
            WagonType::Bcn => "BCN",
        }
    }

    /// Parse an upstream label, defaulting on anything unrecognized.
    pub fn parse_or_default(label: &str) -> Self {
        match label {
            "BOY" => WagonType::Boy,
            "BOXN" => WagonType::Boxn,
            "BCN" => WagonType::Bcn,
            _ => WagonType::default(),
        }
    }

    /// Stable label encoding for the categorical feature column.
    ///
    /// The model boundary consumes a purely numeric vector, so the wagon
    /// type is encoded by fleet code rather than passed as a string.
    pub fn label_code(&self) -> f64 {
        match self {
            WagonType::Boy => 0.0,
            WagonType::Boxn => 1.0,
            WagonType::Bcn => 2.0,
        }
    }
}

impl core::fmt::Display for WagonType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference attributes for one stockyard × product key.
///
/// Read-only per request, sourced fresh on every lookup. Invariant: every
/// provider must hand out `wagon_capacity_tonnes > 0` (the pipeline divides
/// by it without further guards).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceData {
    pub wagon_capacity_tonnes: f64,
    pub wagon_type: WagonType,
    pub loading_cost: f64,
    pub distance_km: f64,
    pub max_storage_capacity_tonnes: f64,
}

impl ReferenceData {
    /// The documented fallback record.
    ///
    /// Every combination not explicitly enumerated by a provider, and every
    /// failed remote lookup, resolves to exactly this record.
    pub fn default_record() -> Self {
        Self {
            wagon_capacity_tonnes: 50.0,
            wagon_type: WagonType::Boy,
            loading_cost: 1500.0,
            distance_km: 1500.0,
            max_storage_capacity_tonnes: 5000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_record_matches_documented_values() {
        let record = ReferenceData::default_record();
        assert_eq!(record.wagon_capacity_tonnes, 50.0);
        assert_eq!(record.wagon_type, WagonType::Boy);
        assert_eq!(record.loading_cost, 1500.0);
        assert_eq!(record.distance_km, 1500.0);
        assert_eq!(record.max_storage_capacity_tonnes, 5000.0);
    }

    #[test]
    fn unknown_wagon_label_falls_back_to_boy() {
        assert_eq!(WagonType::parse_or_default("BOXN"), WagonType::Boxn);
        assert_eq!(WagonType::parse_or_default("BFNS"), WagonType::Boy);
    }
}
