//! `jsgrab fetch` – download every URL from an existing list.

use anyhow::Result;
use jsgrab_core::config::JsgrabConfig;
use jsgrab_core::fetch::{Fetcher, Outcome};
use jsgrab_core::urlset::JsUrlSet;
use std::path::Path;

pub fn run_fetch(list: &Path, out: &Path, cfg: &JsgrabConfig) -> Result<()> {
    let urls = JsUrlSet::read_from(list)?;
    if urls.is_empty() {
        anyhow::bail!("URL list {} is empty", list.display());
    }

    let results = Fetcher::new(out, cfg).fetch_all(&urls);
    for result in &results {
        match &result.outcome {
            Outcome::Saved { filename, .. } => println!("Saved {} as {}", result.url, filename),
            Outcome::Failed(err) => println!("Error downloading {}: {}", result.url, err),
        }
    }

    let saved = results.iter().filter(|r| r.is_saved()).count();
    println!("{} saved, {} failed", saved, results.len() - saved);
    Ok(())
}
