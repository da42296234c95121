use super::model::Dataset;

// ---------------------------------------------------------------------------
// Filter criteria: the current country + range selections
// ---------------------------------------------------------------------------

/// The user's current selections: one country plus two inclusive ranges.
/// Rebuilt fresh on every interaction; nothing here outlives the UI session.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    /// Selected country. `None` means nothing selected (matches no rows).
    pub country: Option<String>,
    /// Inclusive lower year bound.
    pub year_min: i32,
    /// Inclusive upper year bound.
    pub year_max: i32,
    /// Inclusive lower emission bound (tons).
    pub emission_min: f64,
    /// Inclusive upper emission bound (tons).
    pub emission_max: f64,
}

/// Year-slider bounds exposed to the UI.
pub const YEAR_BOUNDS: (i32, i32) = (1990, 2020);

impl FilterCriteria {
    /// Default criteria for a freshly loaded dataset: first country selected,
    /// full year span, full observed emission span.
    pub fn for_dataset(dataset: &Dataset) -> Self {
        FilterCriteria {
            country: dataset.countries.first().cloned(),
            year_min: YEAR_BOUNDS.0,
            year_max: YEAR_BOUNDS.1,
            emission_min: dataset.emission_min,
            emission_max: dataset.emission_max,
        }
    }
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Return indices of records that pass all three filters: country equality,
/// year within the inclusive year range, emission within the inclusive
/// emission range.
///
/// An unset country, a country not present in the dataset, or ranges that
/// match nothing all yield an empty result rather than an error; downstream
/// chart derivation handles an empty view.
pub fn filtered_indices(dataset: &Dataset, criteria: &FilterCriteria) -> Vec<usize> {
    let Some(country) = &criteria.country else {
        return Vec::new();
    };

    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| {
            rec.country == *country
                && rec.year >= criteria.year_min
                && rec.year <= criteria.year_max
                && rec.emission >= criteria.emission_min
                && rec.emission <= criteria.emission_max
        })
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::EmissionRecord;

    fn rec(country: &str, year: i32, emission: f64) -> EmissionRecord {
        EmissionRecord {
            country: country.to_string(),
            year,
            emission,
        }
    }

    fn sample_dataset() -> Dataset {
        Dataset::from_records(vec![
            rec("A", 1990, 100.0),
            rec("A", 2000, 200.0),
            rec("B", 1995, 50.0),
        ])
    }

    fn criteria(country: &str) -> FilterCriteria {
        FilterCriteria {
            country: Some(country.to_string()),
            year_min: 1990,
            year_max: 2020,
            emission_min: 0.0,
            emission_max: 1000.0,
        }
    }

    #[test]
    fn matches_all_three_predicates() {
        let ds = sample_dataset();
        let idx = filtered_indices(&ds, &criteria("A"));
        assert_eq!(idx, vec![0, 1]);
    }

    #[test]
    fn year_bounds_are_inclusive() {
        let ds = sample_dataset();
        let mut c = criteria("A");
        c.year_min = 1990;
        c.year_max = 1990;
        assert_eq!(filtered_indices(&ds, &c), vec![0]);

        c.year_min = 1991;
        assert!(filtered_indices(&ds, &c).is_empty());
    }

    #[test]
    fn emission_bounds_are_inclusive() {
        let ds = sample_dataset();
        let mut c = criteria("A");
        c.emission_min = 100.0;
        c.emission_max = 100.0;
        assert_eq!(filtered_indices(&ds, &c), vec![0]);
    }

    #[test]
    fn exact_range_with_no_member_is_empty() {
        let ds = sample_dataset();
        let mut c = criteria("A");
        c.emission_min = 150.0;
        c.emission_max = 150.0;
        assert!(filtered_indices(&ds, &c).is_empty());
    }

    #[test]
    fn unknown_country_yields_empty_view() {
        let ds = sample_dataset();
        assert!(filtered_indices(&ds, &criteria("Z")).is_empty());
    }

    #[test]
    fn unset_country_yields_empty_view() {
        let ds = sample_dataset();
        let mut c = criteria("A");
        c.country = None;
        assert!(filtered_indices(&ds, &c).is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let ds = sample_dataset();
        let c = criteria("A");

        let once = filtered_indices(&ds, &c);
        let subset: Vec<EmissionRecord> =
            once.iter().map(|&i| ds.records[i].clone()).collect();
        let again = filtered_indices(&Dataset::from_records(subset.clone()), &c);

        let twice: Vec<EmissionRecord> =
            again.iter().map(|&i| subset[i].clone()).collect();
        assert_eq!(subset, twice);
    }

    #[test]
    fn default_criteria_track_dataset_bounds() {
        let ds = sample_dataset();
        let c = FilterCriteria::for_dataset(&ds);
        assert_eq!(c.country.as_deref(), Some("A"));
        assert_eq!((c.year_min, c.year_max), YEAR_BOUNDS);
        assert_eq!(c.emission_min, 50.0);
        assert_eq!(c.emission_max, 200.0);
    }
}
