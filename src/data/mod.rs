/// Data layer: core types and CSV loading.
///
/// Architecture:
/// ```text
///   predictions.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  header check → rows → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  Vec<Observation>, derived series
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
