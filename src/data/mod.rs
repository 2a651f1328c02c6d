/// Data layer: core types, loading, and the two chart transformations.
///
/// Architecture:
/// ```text
///  spacex_launch_dash.csv (URL or file)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse CSV → LaunchTable
///   └──────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │ LaunchTable  │  Vec<LaunchRecord>, payload bounds (immutable)
///   └─────────────┘
///        │
///        ├──────────────────────┐
///        ▼                      ▼
///   ┌───────────┐         ┌──────────┐
///   │ aggregate  │ → pie   │  filter   │ → scatter
///   └───────────┘         └──────────┘
/// ```

pub mod aggregate;
pub mod error;
pub mod export;
pub mod filter;
pub mod loader;
pub mod model;
