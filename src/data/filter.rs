use super::model::CarRecord;

// ---------------------------------------------------------------------------
// Sort state machine
// ---------------------------------------------------------------------------

/// Field the view is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Year,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Year sort toggle.
///
/// ```text
///  Unsorted ──toggle──▶ YearAscending ◀──toggle──▶ YearDescending
///      ▲                      │                        │
///      └────────── reset ─────┴────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortState {
    #[default]
    Unsorted,
    YearAscending,
    YearDescending,
}

impl SortState {
    /// Transition for a press of the year sort control.
    pub fn toggle_year(self) -> Self {
        match self {
            SortState::Unsorted | SortState::YearDescending => SortState::YearAscending,
            SortState::YearAscending => SortState::YearDescending,
        }
    }

    pub fn key(self) -> Option<SortKey> {
        match self {
            SortState::Unsorted => None,
            SortState::YearAscending | SortState::YearDescending => Some(SortKey::Year),
        }
    }

    /// Direction is ascending while unsorted.
    pub fn direction(self) -> SortDirection {
        match self {
            SortState::YearDescending => SortDirection::Descending,
            _ => SortDirection::Ascending,
        }
    }
}

// ---------------------------------------------------------------------------
// Criteria
// ---------------------------------------------------------------------------

/// Everything that parameterises the derived view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    /// Raw text from the year box; trimmed only when matching.
    pub year_query: String,
    /// `None` = all makers.
    pub maker: Option<String>,
    pub sort: SortState,
}

impl Criteria {
    /// Whether any criterion differs from its default.
    pub fn is_active(&self) -> bool {
        !self.year_query.is_empty() || self.maker.is_some() || self.sort.key().is_some()
    }
}

// ---------------------------------------------------------------------------
// Derived view
// ---------------------------------------------------------------------------

/// Year substring predicate. An empty (after trimming) query matches everything.
pub fn matches_year(record: &CarRecord, query: &str) -> bool {
    let query = query.trim();
    query.is_empty() || record.year.to_string().contains(query)
}

/// Exact, case-sensitive maker predicate. `None` matches everything.
pub fn matches_maker(record: &CarRecord, maker: Option<&str>) -> bool {
    maker.map_or(true, |m| record.car_maker == m)
}

/// Return indices of records to display, in display order.
///
/// Year filter, then maker filter, then sort. Sorting is stable, so records
/// sharing a year keep their relative order from `records`.
pub fn derive_view(records: &[CarRecord], criteria: &Criteria) -> Vec<usize> {
    let maker = criteria.maker.as_deref();
    let mut indices: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, r)| matches_year(r, &criteria.year_query))
        .filter(|(_, r)| matches_maker(r, maker))
        .map(|(i, _)| i)
        .collect();

    if criteria.sort.key() == Some(SortKey::Year) {
        match criteria.sort.direction() {
            SortDirection::Ascending => indices.sort_by_key(|&i| records[i].year),
            SortDirection::Descending => {
                indices.sort_by(|&a, &b| records[b].year.cmp(&records[a].year))
            }
        }
    }

    indices
}
