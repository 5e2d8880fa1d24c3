//! `jsgrab run` – full extract, persist, fetch pipeline.

use anyhow::Result;
use jsgrab_core::config::JsgrabConfig;
use jsgrab_core::har::HarSource;
use jsgrab_core::pipeline::run_pipeline;
use std::path::Path;

use super::parse_base_url;

pub fn run_full(har: &Path, out: &Path, base_url: Option<&str>, cfg: &JsgrabConfig) -> Result<()> {
    let source = HarSource::load(har, parse_base_url(base_url)?)?;
    let report = run_pipeline(&source, out, cfg)?;

    println!("List written to {}", report.list_path.display());
    println!(
        "{} JS URL(s): {} saved, {} failed",
        report.urls_found, report.saved, report.failed
    );
    Ok(())
}
