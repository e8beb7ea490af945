use nb_core::{Error, Result};

/// Turn a non-2xx reply into an `Error::Api` carrying the status and body,
/// so a failed stage names what the server said before the run aborts.
pub(crate) async fn expect_success(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let url = response.url().clone();
    let body = response.text().await.unwrap_or_default();
    Err(Error::Api(format!("{} from {}: {}", status, url, body)))
}
