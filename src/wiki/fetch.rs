use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum WikiError {
    #[error("Failed to fetch {url}: {source}")]
    FetchFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Fetch the reference wiki page as raw HTML.
///
/// One GET per run, no retries. A transport failure or non-success status
/// is fatal to the whole run.
pub async fn fetch_wiki_page(url: &str) -> Result<String, WikiError> {
    let wrap = |source: reqwest::Error| WikiError::FetchFailed {
        url: url.to_string(),
        source,
    };

    let response = reqwest::get(url).await.map_err(wrap)?;
    let body = response
        .error_for_status()
        .map_err(wrap)?
        .text()
        .await
        .map_err(wrap)?;

    debug!(url = %url, bytes = body.len(), "Fetched wiki page");
    Ok(body)
}
