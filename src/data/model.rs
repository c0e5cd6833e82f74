use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::InvalidFieldError;

// ---------------------------------------------------------------------------
// ChannelRating – one analyzed channel
// ---------------------------------------------------------------------------

/// One channel's precomputed sentiment summary. Field names on disk are
/// kebab-case (`channel-name`, `num-comments-analyzed`, ...).
///
/// Records are immutable once loaded: every query reads them as-is, and
/// sorting reorders the collection, never the records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ChannelRating {
    /// Display name, also the stable identifier for cross-referencing.
    pub channel_name: String,
    /// How many comments the scores were derived from.
    pub num_comments_analyzed: u64,
    /// Net sentiment polarity, nominally in [-1, 1].
    pub kindness: f64,
    /// Sentiment dispersion, nominally positive.
    pub volatility: f64,
    /// Category labels (religion, politics, topic, ...). Order irrelevant;
    /// membership is exact case-sensitive string equality.
    pub tags: Vec<String>,
}

impl ChannelRating {
    /// `(kindness, volatility)` – the canonical plotting coordinate.
    pub fn coordinate(&self) -> (f64, f64) {
        (self.kindness, self.volatility)
    }

    /// Whether this channel carries the given tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Conventional display label: name followed by comment count,
    /// e.g. `"SomeChannel (1234)"`.
    pub fn display_label(&self) -> String {
        format!("{} ({})", self.channel_name, self.num_comments_analyzed)
    }

    /// Schema checks beyond what deserialization enforces.
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.channel_name.is_empty() {
            return Err("channel-name must not be empty".to_string());
        }
        if self.tags.iter().any(|t| t.is_empty()) {
            return Err("tags must not contain empty strings".to_string());
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// SortField – recognized sort keys
// ---------------------------------------------------------------------------

/// The fields [`RatingStore::sort_by`] understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Kindness,
    Volatility,
    NumCommentsAnalyzed,
    ChannelName,
}

impl FromStr for SortField {
    type Err = InvalidFieldError;

    /// Accepts the on-disk kebab-case names and their snake_case spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kindness" => Ok(SortField::Kindness),
            "volatility" => Ok(SortField::Volatility),
            "num-comments-analyzed" | "num_comments_analyzed" => {
                Ok(SortField::NumCommentsAnalyzed)
            }
            "channel-name" | "channel_name" => Ok(SortField::ChannelName),
            other => Err(InvalidFieldError(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// RatingStore – the loaded collection
// ---------------------------------------------------------------------------

/// Ordered collection of [`ChannelRating`] records with query operations.
///
/// Built once per use, either by [`load_all`](super::loader::load_all) or
/// from an explicit record list; the only mutation is the in-place
/// [`sort_by`](Self::sort_by). A tag-filtered sub-store (see
/// [`filter_by_tag`](super::filter::filter_by_tag)) is a fresh instance.
#[derive(Debug, Clone, Default)]
pub struct RatingStore {
    ratings: Vec<ChannelRating>,
}

impl RatingStore {
    /// Wrap an already-constructed record sequence.
    pub fn from_records(ratings: Vec<ChannelRating>) -> Self {
        RatingStore { ratings }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }

    /// The records in store order.
    pub fn records(&self) -> &[ChannelRating] {
        &self.ratings
    }

    /// One name per record, in store order.
    pub fn names(&self) -> Vec<String> {
        self.ratings.iter().map(|r| r.channel_name.clone()).collect()
    }

    /// One comment count per record, same indexing as [`names`](Self::names).
    pub fn comment_counts(&self) -> Vec<u64> {
        self.ratings.iter().map(|r| r.num_comments_analyzed).collect()
    }

    /// `(kindness, volatility)` per record, in store order. Consumers rely on
    /// positional correspondence with [`names`](Self::names) and
    /// [`comment_counts`](Self::comment_counts).
    pub fn coordinates(&self) -> Vec<(f64, f64)> {
        self.ratings.iter().map(ChannelRating::coordinate).collect()
    }

    /// One display label (`"Name (count)"`) per record, in store order.
    pub fn labels(&self) -> Vec<String> {
        self.ratings.iter().map(ChannelRating::display_label).collect()
    }

    /// Look up a record by its stable identifier.
    pub fn find(&self, channel_name: &str) -> Option<&ChannelRating> {
        self.ratings.iter().find(|r| r.channel_name == channel_name)
    }

    /// Stable in-place sort by the named field. Unknown fields fail with
    /// [`InvalidFieldError`] and leave the order untouched; ties keep their
    /// prior relative order, so re-runs over the same input reproduce the
    /// same layout.
    pub fn sort_by(&mut self, field: &str, ascending: bool) -> Result<(), InvalidFieldError> {
        let field: SortField = field.parse()?;
        self.ratings.sort_by(|a, b| {
            let ord = match field {
                SortField::Kindness => a.kindness.total_cmp(&b.kindness),
                SortField::Volatility => a.volatility.total_cmp(&b.volatility),
                SortField::NumCommentsAnalyzed => {
                    a.num_comments_analyzed.cmp(&b.num_comments_analyzed)
                }
                SortField::ChannelName => a.channel_name.cmp(&b.channel_name),
            };
            if ascending {
                ord
            } else {
                ord.reverse()
            }
        });
        Ok(())
    }
}

impl fmt::Display for RatingStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RatingStore with {} ratings", self.len())
    }
}
