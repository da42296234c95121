use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// Chart datasets derived from the filtered view
// ---------------------------------------------------------------------------

/// One pie wedge: a year's share of the filtered total.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub year: i32,
    pub value: f64,
    /// `value / total` over the filtered view; 0.0 when the total is not
    /// positive.
    pub fraction: f64,
}

/// The three chart-ready series for the current filtered view. Recomputed
/// from scratch on every filter change, never mutated in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartData {
    /// (year, emission) per retained record, in dataset order.
    pub bar: Vec<(i32, f64)>,
    /// One wedge per retained record, proportional to its emission.
    pub pie: Vec<PieSlice>,
    /// (year, emission) points ordered ascending by year.
    pub line: Vec<[f64; 2]>,
}

impl ChartData {
    /// Derive all three series from the filtered view. An empty view yields
    /// three empty series.
    pub fn derive(dataset: &Dataset, indices: &[usize]) -> Self {
        ChartData {
            bar: bar_series(dataset, indices),
            pie: pie_series(dataset, indices),
            line: line_series(dataset, indices),
        }
    }
}

/// One (year, emission) pair per retained record.
pub fn bar_series(dataset: &Dataset, indices: &[usize]) -> Vec<(i32, f64)> {
    indices
        .iter()
        .map(|&i| {
            let rec = &dataset.records[i];
            (rec.year, rec.emission)
        })
        .collect()
}

/// One wedge per retained record, each proportional to its emission relative
/// to the sum over the view.
pub fn pie_series(dataset: &Dataset, indices: &[usize]) -> Vec<PieSlice> {
    let total: f64 = indices.iter().map(|&i| dataset.records[i].emission).sum();

    indices
        .iter()
        .map(|&i| {
            let rec = &dataset.records[i];
            let fraction = if total > 0.0 { rec.emission / total } else { 0.0 };
            PieSlice {
                year: rec.year,
                value: rec.emission,
                fraction,
            }
        })
        .collect()
}

/// The same pairs as a connected sequence, ordered ascending by year.
pub fn line_series(dataset: &Dataset, indices: &[usize]) -> Vec<[f64; 2]> {
    let mut points: Vec<[f64; 2]> = indices
        .iter()
        .map(|&i| {
            let rec = &dataset.records[i];
            [rec.year as f64, rec.emission]
        })
        .collect();
    points.sort_by(|a, b| a[0].total_cmp(&b[0]));
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{filtered_indices, FilterCriteria};
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
            rec("A", 2000, 200.0),
            rec("A", 1990, 100.0),
            rec("B", 1995, 50.0),
        ])
    }

    fn view_for(country: &str, ds: &Dataset) -> Vec<usize> {
        let criteria = FilterCriteria {
            country: Some(country.to_string()),
            year_min: 1990,
            year_max: 2020,
            emission_min: 0.0,
            emission_max: 1000.0,
        };
        filtered_indices(ds, &criteria)
    }

    #[test]
    fn scenario_country_a() {
        let ds = sample_dataset();
        let indices = view_for("A", &ds);
        let charts = ChartData::derive(&ds, &indices);

        assert_eq!(charts.bar, vec![(2000, 200.0), (1990, 100.0)]);
        assert_eq!(charts.line, vec![[1990.0, 100.0], [2000.0, 200.0]]);

        let fractions: Vec<f64> = charts.pie.iter().map(|s| s.fraction).collect();
        assert!((fractions[0] - 2.0 / 3.0).abs() < 1e-12);
        assert!((fractions[1] - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn pie_fractions_sum_to_one() {
        let ds = sample_dataset();
        let indices = view_for("A", &ds);
        let total: f64 = pie_series(&ds, &indices).iter().map(|s| s.fraction).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn line_is_sorted_ascending_by_year() {
        let ds = sample_dataset();
        let indices = view_for("A", &ds);
        let line = line_series(&ds, &indices);
        assert!(line.windows(2).all(|w| w[0][0] < w[1][0]));
    }

    #[test]
    fn empty_view_yields_empty_series() {
        let ds = sample_dataset();
        let indices = view_for("Z", &ds);
        let charts = ChartData::derive(&ds, &indices);

        assert!(charts.bar.is_empty());
        assert!(charts.pie.is_empty());
        assert!(charts.line.is_empty());
    }

    #[test]
    fn zero_total_gives_zero_fractions() {
        let ds = Dataset::from_records(vec![rec("A", 1990, 0.0), rec("A", 2000, 0.0)]);
        let indices = view_for("A", &ds);
        let pie = pie_series(&ds, &indices);
        assert_eq!(pie.len(), 2);
        assert!(pie.iter().all(|s| s.fraction == 0.0));
    }
}
