use chrono::{Local, NaiveDate};
use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::DatePickerButton;

use rusty_ticker::QuickPeriod;

use crate::state::AppState;

fn today() -> NaiveDate {
    Local::now().date_naive()
}

// ---------------------------------------------------------------------------
// Left side panel – range selection and report
// ---------------------------------------------------------------------------

/// Render the left panel: date pickers, quick periods, text report.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Date Range");
    ui.separator();

    if state.session.dataset().is_none() {
        ui.label("No dataset loaded.");
        return;
    }

    egui::Grid::new("date_range")
        .num_columns(2)
        .spacing([8.0, 6.0])
        .show(ui, |ui: &mut Ui| {
            ui.label("Start");
            ui.add(DatePickerButton::new(&mut state.start).id_salt("start_date"));
            ui.end_row();

            ui.label("End");
            ui.add(DatePickerButton::new(&mut state.end).id_salt("end_date"));
            ui.end_row();
        });

    if ui.button("Analyze").clicked() {
        state.analyze_selected();
    }

    ui.add_space(4.0);
    ui.horizontal_wrapped(|ui: &mut Ui| {
        for period in QuickPeriod::ALL_PERIODS {
            let active = state.active_period == Some(period);
            if ui.selectable_label(active, period.token()).clicked() {
                state.apply_period(period, today());
            }
        }
    });

    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for section in state.report() {
                ui.strong(section.title);
                for line in &section.lines {
                    ui.label(line);
                }
                ui.add_space(6.0);
            }
        });
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
            let can_export = state.analysis.is_some();
            if ui
                .add_enabled(can_export, egui::Button::new("Export report…"))
                .clicked()
            {
                save_report_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = state.session.dataset() {
            let selected = state.analysis.as_ref().map_or(0, |a| a.records.len());
            ui.label(format!("{} records loaded, {} selected", ds.len(), selected));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open market data")
        .add_filter("CSV", &["csv"])
        .add_filter("All files", &["*"])
        .pick_file();

    if let Some(path) = file {
        state.load_file(&path, today());
    }
}

fn save_report_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export statistics report")
        .add_filter("JSON", &["json"])
        .set_file_name("report.json")
        .save_file();

    if let Some(path) = file {
        if let Err(e) = state.export_report(&path) {
            log::error!("Failed to export report: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}
