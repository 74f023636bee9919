use crate::panel::PanelState;

pub mod bills;
pub mod council_members;
pub mod office_contacts;
pub mod person;
pub mod state;
pub mod state_rep;
pub mod users;

pub use state::{AppState, Tab};

pub const LOADING_TEXT: &str = "Loading...";

/// A labeled value in a details grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub label: &'static str,
    pub value: String,
}

impl Field {
    pub fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub label: String,
    pub url: String,
}

/// Draw a two-column label/value grid.
pub(crate) fn show_fields(ui: &mut egui::Ui, id: &str, fields: &[Field]) {
    egui::Grid::new(id).num_columns(2).show(ui, |ui| {
        for field in fields {
            ui.strong(field.label);
            ui.label(&field.value);
            ui.end_row();
        }
    });
}

/// Draw what a panel shows before it has data. Returns `true` when the user
/// asked to retry a failed load.
pub(crate) fn show_placeholder<T>(ui: &mut egui::Ui, state: &PanelState<T>) -> bool {
    match state {
        PanelState::Unloaded => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(LOADING_TEXT);
            });
            false
        }
        PanelState::Failed(reason) => {
            let color = ui.visuals().error_fg_color;
            ui.colored_label(color, format!("Could not load: {}", reason));
            ui.button("Retry").clicked()
        }
        PanelState::Loaded(_) => false,
    }
}

pub fn ui_main(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::top("header").show(ctx, |ui| {
        egui::Frame::default()
            .outer_margin(egui::vec2(0.0, 4.0))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    for tab in Tab::ALL {
                        if ui
                            .selectable_label(state.tab() == tab, tab.title())
                            .clicked()
                        {
                            state.open(tab);
                        }
                    }
                });
            });
    });

    egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Backend: {}", state.backend_label()));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(state.status_message());
            });
        });
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| state.show_page(ui));
    });
}
