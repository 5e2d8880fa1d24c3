//! End-to-end extract, persist, fetch orchestration.

use std::path::{Path, PathBuf};

use crate::config::JsgrabConfig;
use crate::error::PipelineError;
use crate::exchange::{BaseScope, TransactionSource};
use crate::extract::extract;
use crate::fetch::Fetcher;

/// Summary of one pipeline run.
#[derive(Debug)]
pub struct PipelineReport {
    /// Where the URL list was written.
    pub list_path: PathBuf,
    pub urls_found: usize,
    pub saved: usize,
    pub failed: usize,
}

/// Runs the full pipeline against `source`, writing the URL list and the
/// downloaded files into `out_dir`.
///
/// Stage failures (no selection, no URLs, list unwritable) abort before any
/// download happens; per-URL failures only show up in the report counts.
pub fn run_pipeline(
    source: &dyn TransactionSource,
    out_dir: &Path,
    config: &JsgrabConfig,
) -> Result<PipelineReport, PipelineError> {
    let base = source.selected_base_url().ok_or(PipelineError::NoSelection)?;
    let scope = BaseScope::from_url(&base);
    tracing::info!(scope = %scope.as_str(), "starting extraction");

    let urls = extract(source.exchanges(), &scope);
    if urls.is_empty() {
        return Err(PipelineError::NoUrlsFound);
    }
    tracing::info!(count = urls.len(), "extraction complete");

    let list_path = out_dir.join(&config.list_filename);
    urls.write_to(&list_path)?;
    tracing::info!(list = %list_path.display(), "URL list written");

    let results = Fetcher::new(out_dir, config).fetch_all(&urls);
    let saved = results.iter().filter(|r| r.is_saved()).count();

    Ok(PipelineReport {
        list_path,
        urls_found: urls.len(),
        saved,
        failed: results.len() - saved,
    })
}
