//! Text summary of a loaded dataset – the derived view the CLI prints.

use std::fmt;

use crate::data::filter::{filter_by_tag, known_tags};
use crate::data::model::RatingStore;
use crate::stats::{linear_fit_coords, LinearFit};

// ---------------------------------------------------------------------------
// TagGroup – one highlighted subset
// ---------------------------------------------------------------------------

/// The records sharing one tag, as display labels plus their indices in the
/// source store's order at build time.
#[derive(Debug, Clone)]
pub struct TagGroup {
    pub tag: String,
    pub labels: Vec<String>,
    pub indices: Vec<usize>,
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

/// Everything the CLI reports about a dataset: counts, score ranges, the
/// kindness/volatility trend fit, and one [`TagGroup`] per known tag.
#[derive(Debug, Clone)]
pub struct Summary {
    pub num_records: usize,
    pub kindness_range: Option<(f64, f64)>,
    pub volatility_range: Option<(f64, f64)>,
    pub trend: Option<LinearFit>,
    pub groups: Vec<TagGroup>,
}

impl Summary {
    /// Derive a summary from the store's current order. Groups capture
    /// indices relative to that order, so build the summary after any sort.
    pub fn build(store: &RatingStore) -> Self {
        let coords = store.coordinates();

        let kindness_range = min_max(coords.iter().map(|&(k, _)| k));
        let volatility_range = min_max(coords.iter().map(|&(_, v)| v));
        let trend = linear_fit_coords(&coords);

        let groups = known_tags(store)
            .into_iter()
            .map(|tag| {
                let (sub, indices) = filter_by_tag(store, tag);
                TagGroup {
                    tag: tag.to_string(),
                    labels: sub.labels(),
                    indices,
                }
            })
            .collect();

        Summary {
            num_records: store.len(),
            kindness_range,
            volatility_range,
            trend,
            groups,
        }
    }
}

fn min_max(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let mut range: Option<(f64, f64)> = None;
    for v in values {
        range = Some(match range {
            None => (v, v),
            Some((lo, hi)) => (lo.min(v), hi.max(v)),
        });
    }
    range
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} channel ratings", self.num_records)?;
        if let Some((lo, hi)) = self.kindness_range {
            writeln!(f, "kindness   [{lo:.3}, {hi:.3}]")?;
        }
        if let Some((lo, hi)) = self.volatility_range {
            writeln!(f, "volatility [{lo:.3}, {hi:.3}]")?;
        }
        if let Some(trend) = self.trend {
            writeln!(
                f,
                "trend      m = {:.3}, b = {:.3}",
                trend.slope, trend.intercept
            )?;
        }
        for group in &self.groups {
            writeln!(f, "[{}] {}", group.tag, group.labels.join(", "))?;
        }
        Ok(())
    }
}
