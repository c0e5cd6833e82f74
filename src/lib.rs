//! In-memory store of channel sentiment ratings (kindness vs volatility),
//! with loading, stable sorting, tag filtering, and a trend-line fit.
//!
//! The crate exposes data shapes only; rendering them is the consumer's job.

pub mod data;
pub mod report;
pub mod stats;

pub use data::error::{InvalidFieldError, LoadError, UnknownTagError};
pub use data::filter::{filter_by_tag, filter_by_tag_strict, known_tags};
pub use data::loader::load_all;
pub use data::model::{ChannelRating, RatingStore, SortField};
