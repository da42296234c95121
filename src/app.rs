use eframe::egui;

use crate::data::model::Dataset;
use crate::state::AppState;
use crate::ui::{charts, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct Co2DashApp {
    pub state: AppState,
}

impl Co2DashApp {
    /// Build the app around the dataset loaded at startup.
    pub fn new(dataset: Dataset) -> Self {
        Self {
            state: AppState::new(dataset),
        }
    }
}

impl eframe::App for Co2DashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: the three charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            charts::central_panel(ui, &self.state);
        });
    }
}
