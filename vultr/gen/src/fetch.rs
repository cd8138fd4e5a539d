//! Reference page retrieval and content slicing.

use std::time::Duration;

use tracing::{info, instrument};

use crate::errors::{GeneratorError, Result};

/// Fetches the reference page and returns its body.
///
/// One GET, no retry.
///
/// ## Errors
///
/// Returns `GeneratorError::Fetch` on transport failures and
/// `GeneratorError::HttpStatus` on a non-success response.
#[instrument(skip(timeout))]
pub async fn fetch_page(url: &str, timeout: Duration) -> Result<String> {
    let client = reqwest::Client::builder().timeout(timeout).build()?;

    info!("Fetching API reference");
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(GeneratorError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.text().await?;
    info!(bytes = body.len(), "Fetched API reference");
    Ok(body)
}

/// Returns the part of `html` from the start of `start` up to `end`.
///
/// The start marker is included (it opens the content element), the end
/// marker is not.
///
/// ## Errors
///
/// Returns `GeneratorError::MarkerNotFound` when either marker is absent or
/// when the end marker only occurs before the start marker.
///
/// ## Examples
///
/// ```
/// use vultr_gen::fetch::slice_content;
///
/// let html = "<body><main>content</main><!-- end --></body>";
/// assert_eq!(slice_content(html, "<main>", "<!-- end -->").unwrap(), "<main>content</main>");
/// assert!(slice_content(html, "<article>", "<!-- end -->").is_err());
/// ```
pub fn slice_content<'a>(html: &'a str, start: &str, end: &str) -> Result<&'a str> {
    let missing = |marker: &str| GeneratorError::MarkerNotFound {
        marker: marker.to_string(),
    };

    let begin = html.find(start).ok_or_else(|| missing(start))?;
    let finish = html[begin..]
        .find(end)
        .map(|offset| begin + offset)
        .ok_or_else(|| missing(end))?;

    Ok(&html[begin..finish])
}
