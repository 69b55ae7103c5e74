/// Data layer: record types, loading, and the derived view.
///
/// Architecture:
/// ```text
///   GET /cars (JSON array)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  fetch + decode → Catalog   (worker thread, once)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Catalog  │  Vec<CarRecord>, distinct maker list
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  year substring, maker, year sort → display indices
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod filter;
