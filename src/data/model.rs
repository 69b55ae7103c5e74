use std::collections::BTreeSet;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// CarRecord – one entry of the remote catalog
// ---------------------------------------------------------------------------

/// A single sports car as served by the catalog API.
///
/// Numeric-looking fields other than `id` and `year` arrive as free-form
/// text and are displayed verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarRecord {
    pub id: i64,
    pub car_maker: String,
    pub car_model: String,
    pub year: i32,
    /// Displacement in liters.
    pub engine_size: String,
    pub horsepower: String,
    /// Torque in lb-ft.
    pub torque: String,
    /// Seconds; `None` means unknown and the row is not shown.
    #[serde(default)]
    pub acceleration_zero_sixty: Option<String>,
    pub price_usd: String,
}

// ---------------------------------------------------------------------------
// Catalog – the base collection
// ---------------------------------------------------------------------------

/// The full, unfiltered record collection with its pre-computed maker list.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<CarRecord>,
    /// Distinct manufacturer names, ascending.
    makers: Vec<String>,
}

impl Catalog {
    /// Build the maker index from the loaded records.
    pub fn from_records(records: Vec<CarRecord>) -> Self {
        let makers: BTreeSet<&str> = records.iter().map(|r| r.car_maker.as_str()).collect();
        let makers = makers.into_iter().map(str::to_owned).collect();
        Catalog { records, makers }
    }

    pub fn records(&self) -> &[CarRecord] {
        &self.records
    }

    /// Every manufacturer present, once each, in lexicographic order.
    pub fn makers(&self) -> &[String] {
        &self.makers
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
