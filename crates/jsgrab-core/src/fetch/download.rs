//! Single blocking GET with the body buffered in memory.

use std::time::Duration;

use crate::error::DownloadError;

/// Fetches `url` with one GET and returns the body bytes.
///
/// Follows redirects; only a final HTTP 200 counts as success. Transport
/// failures and other statuses come back as per-URL errors for the caller
/// to record. No retry.
pub fn download(
    url: &str,
    connect_timeout: Duration,
    timeout: Duration,
) -> Result<Vec<u8>, DownloadError> {
    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(connect_timeout)?;
    easy.timeout(timeout)?;

    let mut body = Vec::new();
    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if code != 200 {
        return Err(DownloadError::Http(code));
    }
    Ok(body)
}
