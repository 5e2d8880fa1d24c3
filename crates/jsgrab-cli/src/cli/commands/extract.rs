//! `jsgrab extract` – write the JS URL list from a HAR capture.

use anyhow::Result;
use jsgrab_core::config::JsgrabConfig;
use jsgrab_core::error::PipelineError;
use jsgrab_core::exchange::{BaseScope, TransactionSource};
use jsgrab_core::extract::extract;
use jsgrab_core::har::HarSource;
use std::path::Path;

use super::parse_base_url;

pub fn run_extract(
    har: &Path,
    out: &Path,
    base_url: Option<&str>,
    cfg: &JsgrabConfig,
) -> Result<()> {
    let source = HarSource::load(har, parse_base_url(base_url)?)?;
    let base = source
        .selected_base_url()
        .ok_or(PipelineError::NoSelection)?;
    let scope = BaseScope::from_url(&base);

    let urls = extract(source.exchanges(), &scope);
    if urls.is_empty() {
        return Err(PipelineError::NoUrlsFound.into());
    }

    let list_path = out.join(&cfg.list_filename);
    urls.write_to(&list_path)?;
    println!("Found {} JS URL(s) in scope {}", urls.len(), scope.as_str());
    println!("List written to {}", list_path.display());
    Ok(())
}
