use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use tracing::{info, warn};

pub const KANTIN_URL: &str = "https://beslenme.manas.edu.kg/menu";
pub const BUFFET_URL: &str = "https://beslenme.manas.edu.kg/1";

const USER_AGENT: &str = "Mozilla/5.0 (compatible; manas-menu-scraper/1.0)";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_RETRIES: u32 = 3;
const BASE_BACKOFF_MS: u64 = 2000;

pub fn client() -> Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()
        .context("Failed to build HTTP client")
}

/// GET a page as text, retrying rate limits and server errors with
/// exponential backoff. Any other non-2xx status is fatal.
pub async fn fetch_html(client: &Client, url: &str) -> Result<String> {
    info!("Fetching {}", url);
    let mut attempt = 0;
    loop {
        let response = client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch {}", url))?;
        let status = response.status();

        if status.is_success() {
            return response
                .text()
                .await
                .with_context(|| format!("Failed to read body of {}", url));
        }

        let retryable = status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error();
        if !retryable || attempt >= MAX_RETRIES {
            anyhow::bail!("Bad status fetching {}: {}", url, status);
        }

        let backoff = Duration::from_millis(BASE_BACKOFF_MS * 2u64.pow(attempt));
        warn!(
            "Got {} from {} (attempt {}/{}), backing off {:.1}s",
            status,
            url,
            attempt + 1,
            MAX_RETRIES,
            backoff.as_secs_f64()
        );
        tokio::time::sleep(backoff).await;
        attempt += 1;
    }
}
