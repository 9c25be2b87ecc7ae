/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader  │  parse file → LaunchDataset
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ LaunchDataset │  Vec<LaunchRecord>, sites, payload bounds
///   └───────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter  │  site + payload predicates → FilteredView
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
