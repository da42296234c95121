use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::filter::YEAR_BOUNDS;
use crate::state::AppState;

/// Emission slider increment (tons), matching the source dashboard's control.
const EMISSION_STEP: f64 = 1e8;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel: country selector plus the two range
/// controls. Each change triggers one synchronous refilter.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    if state.dataset.is_empty() {
        ui.label("No records loaded.");
        return;
    }

    // ---- Country selector ----
    ui.strong("Select a Country");
    let current = state.criteria.country.clone().unwrap_or_default();
    let countries = state.dataset.countries.clone();
    egui::ComboBox::from_id_salt("country")
        .selected_text(&current)
        .show_ui(ui, |ui: &mut Ui| {
            for country in &countries {
                if ui.selectable_label(current == *country, country).clicked() {
                    state.set_country(country.clone());
                }
            }
        });
    ui.separator();

    // ---- Year range ----
    ui.strong("Select the year range");
    let mut year_low = state.criteria.year_min;
    let mut year_high = state.criteria.year_max;
    let mut year_changed = false;
    year_changed |= ui
        .add(
            egui::Slider::new(&mut year_low, YEAR_BOUNDS.0..=YEAR_BOUNDS.1)
                .step_by(5.0)
                .text("from"),
        )
        .changed();
    year_changed |= ui
        .add(
            egui::Slider::new(&mut year_high, YEAR_BOUNDS.0..=YEAR_BOUNDS.1)
                .step_by(5.0)
                .text("to"),
        )
        .changed();
    if year_changed {
        state.set_year_range(year_low, year_high);
    }
    ui.separator();

    // ---- Emission range ----
    ui.strong("Select emissions range (CO2)");
    let bounds = state.dataset.emission_min..=state.dataset.emission_max;
    let mut emission_low = state.criteria.emission_min;
    let mut emission_high = state.criteria.emission_max;
    let mut emission_changed = false;
    emission_changed |= ui
        .add(
            egui::Slider::new(&mut emission_low, bounds.clone())
                .step_by(EMISSION_STEP)
                .custom_formatter(|v, _| format_tons(v))
                .text("from"),
        )
        .changed();
    emission_changed |= ui
        .add(
            egui::Slider::new(&mut emission_high, bounds)
                .step_by(EMISSION_STEP)
                .custom_formatter(|v, _| format_tons(v))
                .text("to"),
        )
        .changed();
    if emission_changed {
        state.set_emission_range(emission_low, emission_high);
    }
}

/// Compact tons label for the emission sliders and chart legends.
pub(crate) fn format_tons(v: f64) -> String {
    if v.abs() >= 1e9 {
        format!("{:.1}B", v / 1e9)
    } else if v.abs() >= 1e6 {
        format!("{:.1}M", v / 1e6)
    } else {
        format!("{v:.0}")
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Export filtered view…").clicked() {
                export_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} records loaded, {} matching",
            state.dataset.len(),
            state.visible_indices.len()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

/// Replace the dataset from a user-picked CSV. A failed load keeps the
/// previous dataset and surfaces the error in the status line.
pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open emissions data")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} records for {} countries",
                    dataset.len(),
                    dataset.countries.len()
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

/// Save the current filtered view as CSV or JSON.
pub fn export_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export filtered view")
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .set_file_name("filtered_emissions.csv")
        .save_file();

    if let Some(path) = file {
        match crate::data::export::write_view(&path, &state.dataset, &state.visible_indices) {
            Ok(()) => {
                log::info!(
                    "Exported {} records to {}",
                    state.visible_indices.len(),
                    path.display()
                );
                state.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to export: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
