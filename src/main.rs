use std::path::Path;

use anyhow::Context;

use channel_ratings::report::Summary;
use channel_ratings::{load_all, RatingStore};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "channel-ratings".to_string());

    let mut store: RatingStore = load_all(Path::new(&path))
        .with_context(|| format!("loading rating dataset from '{path}'"))?;
    store
        .sort_by("kindness", true)
        .context("sorting by kindness")?;

    print!("{}", Summary::build(&store));
    Ok(())
}
