/// Data layer: record types, loading, and tag filtering.
///
/// Architecture:
/// ```text
///  dir of .json docs / .json array / .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + validate → RatingStore
///   └──────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │ RatingStore │  Vec<ChannelRating>, sort + accessors
///   └─────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  tag predicate → sub-store + source indices
///   └──────────┘
/// ```
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
