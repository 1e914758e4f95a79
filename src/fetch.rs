use std::time::Duration;

use reqwest::blocking::Client;
use tracing::info;

use crate::error::Error;

// screener.in serves a block page to clients without a browser User-Agent.
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetch the company page and return its body as text. One GET, no retries;
/// transport errors, timeouts, and non-2xx statuses all abort the run.
pub fn fetch_page(url: &str) -> Result<String, Error> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(FETCH_TIMEOUT)
        .build()?;

    info!("Fetching {}", url);
    let body = client.get(url).send()?.error_for_status()?.text()?;
    Ok(body)
}
