use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// EmissionRecord – one row of the source table
// ---------------------------------------------------------------------------

/// One observation: CO2 emissions for a country-year pair.
///
/// Serde field names match the source CSV columns so exporting a filtered
/// view round-trips the input contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionRecord {
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "CO2 emission (Tons)")]
    pub emission: f64,
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table with pre-computed bounds
// ---------------------------------------------------------------------------

/// The full cleaned dataset, immutable after load.
///
/// Bounds are derived once at construction and used to size the filter
/// controls: the distinct country list, the observed year set, and the
/// global emission min/max.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// All records (rows), in source order.
    pub records: Vec<EmissionRecord>,
    /// Sorted distinct country names.
    pub countries: Vec<String>,
    /// Observed year values.
    pub years: BTreeSet<i32>,
    /// Smallest emission value across all records (0.0 when empty).
    pub emission_min: f64,
    /// Largest emission value across all records (0.0 when empty).
    pub emission_max: f64,
}

impl Dataset {
    /// Build the dataset and its derived bounds from cleaned records.
    pub fn from_records(records: Vec<EmissionRecord>) -> Self {
        let mut country_set: BTreeSet<String> = BTreeSet::new();
        let mut years: BTreeSet<i32> = BTreeSet::new();
        let mut emission_min = f64::INFINITY;
        let mut emission_max = f64::NEG_INFINITY;

        for rec in &records {
            country_set.insert(rec.country.clone());
            years.insert(rec.year);
            emission_min = emission_min.min(rec.emission);
            emission_max = emission_max.max(rec.emission);
        }

        if records.is_empty() {
            emission_min = 0.0;
            emission_max = 0.0;
        }

        Dataset {
            records,
            countries: country_set.into_iter().collect(),
            years,
            emission_min,
            emission_max,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(country: &str, year: i32, emission: f64) -> EmissionRecord {
        EmissionRecord {
            country: country.to_string(),
            year,
            emission,
        }
    }

    #[test]
    fn bounds_derived_from_records() {
        let ds = Dataset::from_records(vec![
            rec("Spain", 2000, 250.0),
            rec("France", 1995, 120.0),
            rec("Spain", 2010, 310.0),
        ]);

        assert_eq!(ds.len(), 3);
        assert_eq!(ds.countries, vec!["France".to_string(), "Spain".to_string()]);
        assert_eq!(
            ds.years.iter().copied().collect::<Vec<_>>(),
            vec![1995, 2000, 2010]
        );
        assert_eq!(ds.emission_min, 120.0);
        assert_eq!(ds.emission_max, 310.0);
    }

    #[test]
    fn empty_dataset_has_zero_bounds() {
        let ds = Dataset::from_records(Vec::new());
        assert!(ds.is_empty());
        assert!(ds.countries.is_empty());
        assert_eq!(ds.emission_min, 0.0);
        assert_eq!(ds.emission_max, 0.0);
    }
}
