use crate::color::MakerPalette;
use crate::data::filter::{Criteria, derive_view};
use crate::data::loader::LoadError;
use crate::data::model::{CarRecord, Catalog};

// ---------------------------------------------------------------------------
// View toggle
// ---------------------------------------------------------------------------

/// Which main screen is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Introductory splash.
    #[default]
    Landing,
    /// Card grid of the derived view.
    Catalog,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// Every setter that touches the catalog or the criteria recomputes
/// `visible_indices` before returning.
#[derive(Default)]
pub struct AppState {
    /// Base collection; empty until (and unless) the load succeeds.
    pub catalog: Catalog,

    /// Current filter / sort selections.
    pub criteria: Criteria,

    /// Indices into `catalog` in display order (cached derived view).
    pub visible_indices: Vec<usize>,

    /// Accent colour per manufacturer.
    pub maker_colors: MakerPalette,

    pub view: ViewMode,

    /// Whether the catalog request is still outstanding.
    pub loading: bool,

    /// Last load failure, for diagnostics only. Never rendered.
    pub load_error: Option<String>,
}

impl AppState {
    /// Mark the catalog request as outstanding.
    pub fn begin_loading(&mut self) {
        self.loading = true;
        self.load_error = None;
    }

    /// Apply the outcome of the catalog request.
    ///
    /// A failure leaves the catalog empty, which renders exactly like a
    /// successful load of zero cars.
    pub fn finish_load(&mut self, outcome: Result<Catalog, LoadError>) {
        match outcome {
            Ok(catalog) => {
                log::info!(
                    "Loaded {} cars from {} makers",
                    catalog.len(),
                    catalog.makers().len()
                );
                if catalog.is_empty() {
                    log::warn!("Catalog endpoint returned no cars");
                }
                self.set_catalog(catalog);
            }
            Err(e) => {
                log::error!("Error fetching data: {e}");
                self.load_error = Some(e.to_string());
                self.set_catalog(Catalog::default());
            }
        }
        self.loading = false;
    }

    /// Replace the base collection and rebuild everything derived from it.
    pub fn set_catalog(&mut self, catalog: Catalog) {
        self.maker_colors = MakerPalette::new(catalog.makers());
        self.catalog = catalog;
        self.refilter();
    }

    /// Recompute `visible_indices` from the catalog and criteria.
    pub fn refilter(&mut self) {
        self.visible_indices = derive_view(self.catalog.records(), &self.criteria);
        log::debug!(
            "{:?} -> {} of {} cars",
            self.criteria,
            self.visible_indices.len(),
            self.catalog.len()
        );
    }

    /// Records of the derived view, in display order.
    pub fn visible_cars(&self) -> impl Iterator<Item = &CarRecord> + '_ {
        let records = self.catalog.records();
        self.visible_indices.iter().map(move |&i| &records[i])
    }

    pub fn set_year_query(&mut self, query: String) {
        self.criteria.year_query = query;
        self.refilter();
    }

    /// `None` selects all makers.
    pub fn select_maker(&mut self, maker: Option<String>) {
        self.criteria.maker = maker;
        self.refilter();
    }

    /// Press of the year sort control.
    pub fn toggle_year_sort(&mut self) {
        self.criteria.sort = self.criteria.sort.toggle_year();
        self.refilter();
    }

    /// Reset year query, maker and sort to their defaults.
    pub fn clear_filters(&mut self) {
        self.criteria = Criteria::default();
        self.refilter();
    }

    pub fn show_catalog(&mut self) {
        self.view = ViewMode::Catalog;
    }

    pub fn show_landing(&mut self) {
        self.view = ViewMode::Landing;
    }

    /// Title above the card grid, e.g. "Sports Cars from 2020 by Porsche".
    pub fn heading(&self) -> String {
        let mut heading = if self.criteria.year_query.is_empty() {
            "All Sports Cars".to_string()
        } else {
            format!("Sports Cars from {}", self.criteria.year_query)
        };
        if let Some(maker) = &self.criteria.maker {
            heading.push_str(&format!(" by {maker}"));
        }
        heading
    }
}
