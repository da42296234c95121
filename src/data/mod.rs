/// Data layer: core types, loading, filtering, and export.
///
/// Architecture:
/// ```text
///  emissions .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + clean rows → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  Vec<EmissionRecord>, derived bounds
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  country + year/emission ranges → filtered indices
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  export   │  filtered view → .csv / .json
///   └──────────┘
/// ```

pub mod export;
pub mod filter;
pub mod loader;
pub mod model;
