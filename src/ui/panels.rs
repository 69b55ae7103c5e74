use eframe::egui::{self, RichText, Ui};

use crate::color::ACCENT_RED;
use crate::data::filter::{SortDirection, SortKey};
use crate::state::AppState;

pub const APP_NAME: &str = "Sports Car Hub";

// ---------------------------------------------------------------------------
// Top bar – title and filter controls
// ---------------------------------------------------------------------------

/// Render the header: title, year search, maker select, sort and clear.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    ui.add_space(6.0);
    ui.horizontal(|ui: &mut Ui| {
        ui.label(RichText::new(APP_NAME).heading().strong().color(ACCENT_RED));
        ui.add_space(24.0);
        year_search(ui, state);
    });

    ui.add_space(4.0);
    ui.horizontal(|ui: &mut Ui| {
        maker_select(ui, state);
        sort_button(ui, state);

        if state.criteria.is_active() && ui.button("✖ Clear Filters").clicked() {
            state.clear_filters();
        }
    });
    ui.add_space(6.0);
}

fn year_search(ui: &mut Ui, state: &mut AppState) {
    let mut query = state.criteria.year_query.clone();
    let response = ui.add(
        egui::TextEdit::singleline(&mut query)
            .hint_text("Search by year...")
            .desired_width(240.0),
    );
    if response.changed() {
        state.set_year_query(query);
    }

    // Inline clear only resets the year text.
    if !state.criteria.year_query.is_empty() && ui.small_button("✖").clicked() {
        state.set_year_query(String::new());
    }
}

fn maker_select(ui: &mut Ui, state: &mut AppState) {
    let selected_text = state
        .criteria
        .maker
        .clone()
        .unwrap_or_else(|| "All Makers".to_string());

    // Applied after the popup closes: `makers()` borrows `state` inside it.
    let mut choice = None;
    egui::ComboBox::from_id_salt("maker_select")
        .selected_text(selected_text)
        .show_ui(ui, |ui: &mut Ui| {
            let current = state.criteria.maker.as_deref();
            if ui.selectable_label(current.is_none(), "All Makers").clicked() {
                choice = Some(None);
            }
            for maker in state.catalog.makers() {
                if ui
                    .selectable_label(current == Some(maker.as_str()), maker)
                    .clicked()
                {
                    choice = Some(Some(maker.clone()));
                }
            }
        });

    if let Some(maker) = choice {
        state.select_maker(maker);
    }
}

fn sort_button(ui: &mut Ui, state: &mut AppState) {
    let sort = state.criteria.sort;
    let active = sort.key() == Some(SortKey::Year);
    let label = match (active, sort.direction()) {
        (false, _) => "Year".to_string(),
        (true, SortDirection::Ascending) => "Year ⏶".to_string(),
        (true, SortDirection::Descending) => "Year ⏷".to_string(),
    };
    if ui.selectable_label(active, label).clicked() {
        state.toggle_year_sort();
    }
}

// ---------------------------------------------------------------------------
// Footer
// ---------------------------------------------------------------------------

pub fn footer(ui: &mut Ui) {
    ui.add_space(4.0);
    ui.horizontal(|ui: &mut Ui| {
        ui.label(RichText::new(APP_NAME).strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui: &mut Ui| {
            ui.weak(format!("© 2025 {APP_NAME}. All rights reserved."));
        });
    });
    ui.add_space(4.0);
}
