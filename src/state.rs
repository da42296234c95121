use crate::charts::ChartData;
use crate::color::YearColors;
use crate::data::filter::{FilterCriteria, filtered_indices};
use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// The dataset is injected at construction and read-only from then on; every
/// control change goes through [`AppState::refilter`], which recomputes the
/// cached view and the three chart datasets.
pub struct AppState {
    /// Loaded dataset, immutable until replaced wholesale via `set_dataset`.
    pub dataset: Dataset,

    /// Current filter selections.
    pub criteria: FilterCriteria,

    /// Indices of records passing the current filters (cached).
    pub visible_indices: Vec<usize>,

    /// Chart datasets derived from the current filtered view.
    pub charts: ChartData,

    /// Year → colour mapping for bar/pie rendering.
    pub year_colors: YearColors,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Build the state around an already loaded dataset.
    pub fn new(dataset: Dataset) -> Self {
        let criteria = FilterCriteria::for_dataset(&dataset);
        let year_colors = YearColors::new(&dataset.years);
        let mut state = AppState {
            dataset,
            criteria,
            visible_indices: Vec::new(),
            charts: ChartData::default(),
            year_colors,
            status_message: None,
        };
        state.refilter();
        state
    }

    /// Replace the dataset (File → Open), resetting filters and colours.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.criteria = FilterCriteria::for_dataset(&dataset);
        self.year_colors = YearColors::new(&dataset.years);
        self.dataset = dataset;
        self.status_message = None;
        self.refilter();
    }

    /// Recompute the filtered view and chart datasets after a filter change.
    pub fn refilter(&mut self) {
        self.visible_indices = filtered_indices(&self.dataset, &self.criteria);
        self.charts = ChartData::derive(&self.dataset, &self.visible_indices);
    }

    /// Select a country and recompute.
    pub fn set_country(&mut self, country: String) {
        self.criteria.country = Some(country);
        self.refilter();
    }

    /// Set the inclusive year range, normalising an inverted pair.
    pub fn set_year_range(&mut self, low: i32, high: i32) {
        self.criteria.year_min = low.min(high);
        self.criteria.year_max = low.max(high);
        self.refilter();
    }

    /// Set the inclusive emission range, normalising an inverted pair.
    pub fn set_emission_range(&mut self, low: f64, high: f64) {
        self.criteria.emission_min = low.min(high);
        self.criteria.emission_max = low.max(high);
        self.refilter();
    }
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

    fn sample_state() -> AppState {
        AppState::new(Dataset::from_records(vec![
            rec("A", 1990, 100.0),
            rec("A", 2000, 200.0),
            rec("B", 1995, 50.0),
        ]))
    }

    #[test]
    fn new_state_selects_first_country_and_filters() {
        let state = sample_state();
        assert_eq!(state.criteria.country.as_deref(), Some("A"));
        assert_eq!(state.visible_indices, vec![0, 1]);
        assert_eq!(state.charts.bar.len(), 2);
    }

    #[test]
    fn changing_country_recomputes_charts() {
        let mut state = sample_state();
        state.set_country("B".to_string());
        assert_eq!(state.visible_indices, vec![2]);
        assert_eq!(state.charts.line, vec![[1995.0, 50.0]]);
    }

    #[test]
    fn inverted_ranges_are_normalised() {
        let mut state = sample_state();
        state.set_year_range(2000, 1990);
        assert_eq!(state.criteria.year_min, 1990);
        assert_eq!(state.criteria.year_max, 2000);

        state.set_emission_range(500.0, 10.0);
        assert_eq!(state.criteria.emission_min, 10.0);
        assert_eq!(state.criteria.emission_max, 500.0);
    }

    #[test]
    fn replacing_dataset_resets_criteria() {
        let mut state = sample_state();
        state.set_country("B".to_string());
        state.status_message = Some("old error".to_string());

        state.set_dataset(Dataset::from_records(vec![rec("C", 2010, 30.0)]));
        assert_eq!(state.criteria.country.as_deref(), Some("C"));
        assert_eq!(state.visible_indices, vec![0]);
        assert!(state.status_message.is_none());
    }
}
