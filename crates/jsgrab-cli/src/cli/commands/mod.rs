mod extract;
mod fetch;
mod run;

pub use extract::run_extract;
pub use fetch::run_fetch;
pub use run::run_full;

use anyhow::{Context, Result};
use url::Url;

/// Parses an optional `--base-url` override.
pub(crate) fn parse_base_url(raw: Option<&str>) -> Result<Option<Url>> {
    raw.map(|s| Url::parse(s).with_context(|| format!("invalid base URL: {s}")))
        .transpose()
}
