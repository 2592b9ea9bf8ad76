/// Data layer: the in-memory table, CSV I/O, and the column transform.
///
/// Architecture:
/// ```text
///   data/male.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ transform  │  lowercase the `name` column in place
///   └───────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  writer   │  Dataset → same path (overwrite)
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod transform;
pub mod writer;
