use std::collections::BTreeSet;

use super::error::UnknownTagError;
use super::model::RatingStore;

// ---------------------------------------------------------------------------
// Tag filtering
// ---------------------------------------------------------------------------

/// Linear scan for records carrying `tag` (case-sensitive exact match).
///
/// Returns a new store with the matching records in their current relative
/// order, plus each match's index in `store`'s *current* order. The indices
/// let callers correlate the subset with any per-record artifact built from
/// the unfiltered ordering, so sort first, filter after: re-sorting the
/// source store invalidates previously derived index lists.
///
/// A tag that matches nothing is not an error; it yields an empty store and
/// an empty index list.
pub fn filter_by_tag(store: &RatingStore, tag: &str) -> (RatingStore, Vec<usize>) {
    let mut matching = Vec::new();
    let mut indices = Vec::new();
    for (idx, record) in store.records().iter().enumerate() {
        if record.has_tag(tag) {
            matching.push(record.clone());
            indices.push(idx);
        }
    }
    (RatingStore::from_records(matching), indices)
}

/// Like [`filter_by_tag`], but a tag that matches no record at all is an
/// [`UnknownTagError`] instead of a silent empty result.
pub fn filter_by_tag_strict(
    store: &RatingStore,
    tag: &str,
) -> Result<(RatingStore, Vec<usize>), UnknownTagError> {
    let (matching, indices) = filter_by_tag(store, tag);
    if matching.is_empty() {
        return Err(UnknownTagError(tag.to_string()));
    }
    Ok((matching, indices))
}

/// The sorted set of distinct tags present in the store.
pub fn known_tags(store: &RatingStore) -> BTreeSet<&str> {
    store
        .records()
        .iter()
        .flat_map(|r| r.tags.iter().map(String::as_str))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::ChannelRating;

    fn rating(name: &str, comments: u64, kindness: f64, tags: &[&str]) -> ChannelRating {
        ChannelRating {
            channel_name: name.to_string(),
            num_comments_analyzed: comments,
            kindness,
            volatility: 1.0,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn sample_store() -> RatingStore {
        RatingStore::from_records(vec![
            rating("X", 10, 0.2, &["a", "b"]),
            rating("Y", 5, -0.1, &["b"]),
        ])
    }

    #[test]
    fn filters_records_and_reports_source_indices() {
        let store = sample_store();

        let (by_a, idx_a) = filter_by_tag(&store, "a");
        assert_eq!(by_a.names(), vec!["X"]);
        assert_eq!(idx_a, vec![0]);

        let (by_b, idx_b) = filter_by_tag(&store, "b");
        assert_eq!(by_b.names(), vec!["X", "Y"]);
        assert_eq!(idx_b, vec![0, 1]);
    }

    #[test]
    fn absent_tag_is_an_empty_result_not_an_error() {
        let store = sample_store();
        let (empty, indices) = filter_by_tag(&store, "nonexistent-tag");
        assert!(empty.is_empty());
        assert!(indices.is_empty());
    }

    #[test]
    fn tag_match_is_case_sensitive() {
        let store = sample_store();
        let (empty, _) = filter_by_tag(&store, "A");
        assert!(empty.is_empty());
    }

    #[test]
    fn strict_mode_rejects_unused_tag() {
        let store = sample_store();
        assert_eq!(
            filter_by_tag_strict(&store, "nope").unwrap_err(),
            UnknownTagError("nope".to_string())
        );
        let (by_b, _) = filter_by_tag_strict(&store, "b").unwrap();
        assert_eq!(by_b.len(), 2);
    }

    #[test]
    fn indices_follow_current_sort_order() {
        let mut store = sample_store();
        store.sort_by("kindness", true).unwrap(); // Y now first
        let (by_a, idx_a) = filter_by_tag(&store, "a");
        assert_eq!(by_a.names(), vec!["X"]);
        assert_eq!(idx_a, vec![1]);
    }

    #[test]
    fn union_over_known_tags_covers_every_tagged_record() {
        let store = sample_store();
        let tags = known_tags(&store);
        assert_eq!(tags.iter().copied().collect::<Vec<_>>(), vec!["a", "b"]);

        let mut seen: Vec<String> = Vec::new();
        for tag in &tags {
            let (sub, _) = filter_by_tag(&store, tag);
            for name in sub.names() {
                if !seen.contains(&name) {
                    seen.push(name);
                }
            }
        }
        seen.sort_unstable();
        assert_eq!(seen, vec!["X", "Y"]);
    }
}
