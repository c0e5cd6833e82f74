//! End-to-end: write a dataset to disk, load it, sort, filter, summarize.

use std::fs;

use channel_ratings::report::Summary;
use channel_ratings::{filter_by_tag, load_all, stats};

fn doc(name: &str, comments: u64, kindness: f64, volatility: f64, tags: &[&str]) -> String {
    let tags = tags
        .iter()
        .map(|t| format!("\"{t}\""))
        .collect::<Vec<_>>()
        .join(",");
    format!(
        r#"{{"channel-name":"{name}","num-comments-analyzed":{comments},"kindness":{kindness},"volatility":{volatility},"tags":[{tags}]}}"#
    )
}

#[test]
fn load_sort_filter_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.json"), doc("Aria", 120, 0.7, 1.05, &["chess"])).unwrap();
    fs::write(dir.path().join("b.json"), doc("Briar", 40, -0.2, 1.40, &["left", "chess"])).unwrap();
    fs::write(dir.path().join("c.json"), doc("Cello", 900, 0.3, 1.20, &["left"])).unwrap();

    let mut store = load_all(dir.path()).unwrap();
    assert_eq!(store.len(), 3);

    // Sort first; filtered index lists are relative to the sorted order.
    store.sort_by("kindness", true).unwrap();
    assert_eq!(store.names(), vec!["Briar", "Cello", "Aria"]);

    let (chess, chess_idx) = filter_by_tag(&store, "chess");
    assert_eq!(chess.labels(), vec!["Briar (40)", "Aria (120)"]);
    assert_eq!(chess_idx, vec![0, 2]);

    let (left, left_idx) = filter_by_tag(&store, "left");
    assert_eq!(left.names(), vec!["Briar", "Cello"]);
    assert_eq!(left_idx, vec![0, 1]);

    // Trend over the canonical coordinates is well-defined.
    let fit = stats::linear_fit_coords(&store.coordinates()).unwrap();
    assert!(fit.slope < 0.0); // kinder channels are calmer in this fixture

    let summary = Summary::build(&store);
    assert_eq!(summary.num_records, 3);
    assert_eq!(summary.groups.len(), 2);
}

#[test]
fn malformed_document_aborts_whole_load() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("good.json"), doc("Good", 10, 0.1, 1.1, &[])).unwrap();
    fs::write(dir.path().join("bad.json"), "{not json").unwrap();

    assert!(load_all(dir.path()).is_err());
}
