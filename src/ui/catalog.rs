use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::color::ACCENT_RED;
use crate::data::model::CarRecord;
use crate::state::AppState;

/// Target width of one card; the grid fits as many columns as it can.
const CARD_WIDTH: f32 = 320.0;

// ---------------------------------------------------------------------------
// Landing splash
// ---------------------------------------------------------------------------

pub fn landing(ui: &mut Ui, state: &mut AppState) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.add_space(ui.available_height() * 0.2);
        ui.label(
            RichText::new("Feel the Speed")
                .size(48.0)
                .strong()
                .color(ACCENT_RED),
        );
        ui.add_space(16.0);
        ui.label(
            RichText::new(
                "Discover the world's fastest sports cars with detailed specs, \
                 performance data, and pricing information.",
            )
            .size(18.0),
        );
        ui.add_space(32.0);
        if ui
            .button(RichText::new("Explore All Cars").size(18.0))
            .clicked()
        {
            state.show_catalog();
        }
    });
}

// ---------------------------------------------------------------------------
// Catalog: heading, grid, empty state
// ---------------------------------------------------------------------------

pub fn catalog_view(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading(state.heading());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui: &mut Ui| {
            if ui.button("✖ Close").clicked() {
                state.show_landing();
            }
        });
    });
    ui.add_space(12.0);

    if state.loading {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.add(egui::Spinner::new().size(48.0).color(ACCENT_RED));
        });
        return;
    }

    if state.visible_indices.is_empty() {
        empty_state(ui, state);
        return;
    }

    card_grid(ui, state);
}

fn card_grid(ui: &mut Ui, state: &AppState) {
    let n_cols = ((ui.available_width() / CARD_WIDTH).floor() as usize).max(1);
    let cars: Vec<&CarRecord> = state.visible_cars().collect();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for row in cars.chunks(n_cols) {
                ui.columns(n_cols, |columns: &mut [Ui]| {
                    for (col, car) in columns.iter_mut().zip(row) {
                        car_card(col, car, state.maker_colors.color_for(&car.car_maker));
                    }
                });
                ui.add_space(8.0);
            }
        });
}

fn car_card(ui: &mut Ui, car: &CarRecord, maker_color: Color32) {
    egui::Frame::group(ui.style())
        .inner_margin(12.0)
        .show(ui, |ui: &mut Ui| {
            ui.set_width(ui.available_width());

            ui.horizontal(|ui: &mut Ui| {
                ui.vertical(|ui: &mut Ui| {
                    ui.label(RichText::new(&car.car_maker).color(maker_color));
                    ui.label(RichText::new(&car.car_model).size(20.0).strong());
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui: &mut Ui| {
                    ui.label(RichText::new(car.year.to_string()).strong().color(ACCENT_RED));
                });
            });
            ui.separator();

            for (name, value) in detail_rows(car) {
                ui.horizontal(|ui: &mut Ui| {
                    ui.label(name);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui: &mut Ui| {
                        ui.label(RichText::new(value).strong());
                    });
                });
            }

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("${}", car.price_usd))
                    .size(18.0)
                    .strong()
                    .color(ACCENT_RED),
            );
        });
}

/// Label / value rows shown on a card. 0-60 is skipped when unknown.
fn detail_rows(car: &CarRecord) -> Vec<(&'static str, String)> {
    let mut rows = vec![
        ("Engine", format!("{}L", car.engine_size)),
        ("Horsepower", format!("{} HP", car.horsepower)),
        ("Torque", format!("{} lb-ft", car.torque)),
    ];
    if let Some(t) = car.acceleration_zero_sixty.as_deref().filter(|t| !t.is_empty()) {
        rows.push(("0-60 mph", format!("{t}s")));
    }
    rows
}

fn empty_state(ui: &mut Ui, state: &mut AppState) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.add_space(48.0);
        ui.label(RichText::new("No cars found matching your criteria").size(20.0));
        ui.weak("Try adjusting your search or filters");
        ui.add_space(12.0);
        if ui.button("Clear all filters").clicked() {
            state.clear_filters();
        }
    });
}
