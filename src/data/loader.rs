use std::path::{Path, PathBuf};

use log::{debug, info};

use super::error::LoadError;
use super::model::{ChannelRating, RatingStore};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load every rating record found at `path` into a [`RatingStore`].
///
/// Supported layouts:
/// * directory – one JSON document per channel (the canonical layout);
///   entries are visited in file-name order so repeated loads of the same
///   dataset produce the same record order
/// * `.json`   – a single file holding a top-level array of documents
/// * `.csv`    – header row with the five record field names; the `tags`
///   cell holds semicolon-separated labels
///
/// Loading is all-or-nothing: the first unreadable or schema-invalid
/// document fails the whole call with [`LoadError`] and no store is built.
pub fn load_all(path: &Path) -> Result<RatingStore, LoadError> {
    if path.is_dir() {
        return load_dir(path);
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "json" => load_json_array(path),
        "csv" => load_csv(path),
        // No extension: treat as a (possibly missing) directory so the
        // caller sees the underlying I/O error.
        "" => load_dir(path),
        _ => Err(LoadError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

// ---------------------------------------------------------------------------
// Directory loader
// ---------------------------------------------------------------------------

fn load_dir(dir: &Path) -> Result<RatingStore, LoadError> {
    let mut paths: Vec<PathBuf> = Vec::new();
    let entries = std::fs::read_dir(dir).map_err(|source| LoadError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    for entry in entries {
        let entry = entry.map_err(|source| LoadError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() {
            paths.push(path);
        }
    }
    // Filesystem enumeration order is arbitrary; sort for reproducible loads.
    paths.sort();

    let mut ratings = Vec::with_capacity(paths.len());
    for path in &paths {
        ratings.push(load_document(path)?);
    }

    info!("loaded {} rating records from {}", ratings.len(), dir.display());
    Ok(RatingStore::from_records(ratings))
}

/// Parse and validate a single per-channel JSON document.
fn load_document(path: &Path) -> Result<ChannelRating, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let record: ChannelRating =
        serde_json::from_str(&text).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    record.validate().map_err(|reason| LoadError::InvalidRecord {
        path: path.to_path_buf(),
        reason,
    })?;
    debug!("loaded {} from {}", record.channel_name, path.display());
    Ok(record)
}

// ---------------------------------------------------------------------------
// Single-file JSON loader
// ---------------------------------------------------------------------------

/// Expected schema: a top-level array of record documents:
///
/// ```json
/// [
///   {
///     "channel-name": "SomeChannel",
///     "num-comments-analyzed": 1234,
///     "kindness": 0.42,
///     "volatility": 1.17,
///     "tags": ["education", "chess"]
///   },
///   ...
/// ]
/// ```
fn load_json_array(path: &Path) -> Result<RatingStore, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let ratings: Vec<ChannelRating> =
        serde_json::from_str(&text).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    for record in &ratings {
        record.validate().map_err(|reason| LoadError::InvalidRecord {
            path: path.to_path_buf(),
            reason,
        })?;
    }

    info!("loaded {} rating records from {}", ratings.len(), path.display());
    Ok(RatingStore::from_records(ratings))
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row naming the five record fields; `tags` holds
/// semicolon-separated labels, e.g. `"education;chess"`.
fn load_csv(path: &Path) -> Result<RatingStore, LoadError> {
    let csv_err = |source| LoadError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let invalid = |reason: String| LoadError::InvalidRecord {
        path: path.to_path_buf(),
        reason,
    };

    let mut reader = csv::Reader::from_path(path).map_err(csv_err)?;
    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_err)?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let column = |name: &str| -> Result<usize, LoadError> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| invalid(format!("CSV missing '{name}' column")))
    };
    let name_idx = column("channel-name")?;
    let comments_idx = column("num-comments-analyzed")?;
    let kindness_idx = column("kindness")?;
    let volatility_idx = column("volatility")?;
    let tags_idx = column("tags")?;

    let mut ratings = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let row = result.map_err(csv_err)?;
        let cell = |idx: usize| row.get(idx).unwrap_or("");

        let num_comments_analyzed = cell(comments_idx)
            .trim()
            .parse::<u64>()
            .map_err(|e| invalid(format!("row {row_no}: num-comments-analyzed: {e}")))?;
        let kindness = cell(kindness_idx)
            .trim()
            .parse::<f64>()
            .map_err(|e| invalid(format!("row {row_no}: kindness: {e}")))?;
        let volatility = cell(volatility_idx)
            .trim()
            .parse::<f64>()
            .map_err(|e| invalid(format!("row {row_no}: volatility: {e}")))?;
        let tags: Vec<String> = cell(tags_idx)
            .split(';')
            .filter(|t| !t.is_empty())
            .map(|t| t.trim().to_string())
            .collect();

        let record = ChannelRating {
            channel_name: cell(name_idx).to_string(),
            num_comments_analyzed,
            kindness,
            volatility,
            tags,
        };
        record
            .validate()
            .map_err(|reason| invalid(format!("row {row_no}: {reason}")))?;
        ratings.push(record);
    }

    info!("loaded {} rating records from {}", ratings.len(), path.display());
    Ok(RatingStore::from_records(ratings))
}
