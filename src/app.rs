use std::sync::mpsc::{Receiver, TryRecvError};

use eframe::egui;

use crate::config::CatalogConfig;
use crate::data::loader::{self, LoadError};
use crate::data::model::Catalog;
use crate::state::{AppState, ViewMode};
use crate::ui::{catalog, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SportsCarHubApp {
    pub state: AppState,
    /// Pending catalog request; `None` once its outcome has been applied.
    load_receiver: Option<Receiver<Result<Catalog, LoadError>>>,
}

impl SportsCarHubApp {
    /// Create the app and fire the one catalog request.
    pub fn new(cc: &eframe::CreationContext<'_>, config: CatalogConfig) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        let ctx = cc.egui_ctx.clone();
        let load_receiver = loader::spawn_load(config, move || ctx.request_repaint());

        let mut state = AppState::default();
        state.begin_loading();

        Self {
            state,
            load_receiver: Some(load_receiver),
        }
    }

    /// Apply the load outcome if the worker has delivered it.
    fn poll_load(&mut self) {
        let Some(receiver) = &self.load_receiver else {
            return;
        };
        match receiver.try_recv() {
            Ok(outcome) => {
                self.state.finish_load(outcome);
                self.load_receiver = None;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                self.state.finish_load(Err(LoadError::Interrupted));
                self.load_receiver = None;
            }
        }
    }
}

impl eframe::App for SportsCarHubApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_load();

        // ---- Top panel: title + filter controls ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Bottom panel: footer ----
        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            panels::footer(ui);
        });

        // ---- Central panel: splash or card grid ----
        egui::CentralPanel::default().show(ctx, |ui| match self.state.view {
            ViewMode::Landing => catalog::landing(ui, &mut self.state),
            ViewMode::Catalog => catalog::catalog_view(ui, &mut self.state),
        });
    }
}
