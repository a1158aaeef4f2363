/// Data layer: run-group discovery, CSV loading and aggregation.
///
/// Architecture:
/// ```text
///   base path
///        │
///        ▼
///   ┌───────────┐
///   │ enumerate │  walk base → relative run-group paths
///   └───────────┘
///        │  (user picks groups)
///        ▼
///   ┌──────────┐
///   │  loader   │  *.csv in one group → padded runs
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate │  running max → mean / p10 / std per step
///   └───────────┘
/// ```

pub mod aggregate;
pub mod enumerate;
pub mod error;
pub mod loader;
pub mod model;
