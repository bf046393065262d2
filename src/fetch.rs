//! Homepage fetch with an explicit redirect budget.
//!
//! Library redirect-following is disabled on purpose: redirects are
//! walked in an explicit loop with a decrementing hop budget, so an
//! unbounded redirect chain surfaces as a distinct
//! [`FetchError::RedirectBudget`] error instead of being swallowed by
//! client internals. `Location` values are resolved against the
//! current URL, so relative redirects work.
//!
//! This module is the extraction core's only collaborator on the input
//! side: it hands over a fully retrieved HTML body and nothing else.

use reqwest::header::LOCATION;
use reqwest::redirect::Policy;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};
use url::Url;

/// Errors surfaced by the fetch collaborator.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Terminal response with a non-2xx status.
    #[error("request failed with status {0}")]
    Status(StatusCode),
    /// The redirect chain outlived its hop budget.
    #[error("redirect chain exceeded budget of {budget} hops")]
    RedirectBudget { budget: usize },
    /// A 3xx response without a usable `Location` header.
    #[error("redirect response missing a Location header")]
    MissingLocation,
    /// The start URL or a redirect target failed to parse.
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
    /// Connection, TLS, timeout, or body-read failure.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// Build the shared HTTP client: no automatic redirects, bounded
/// request timeout, descriptive user agent.
pub fn build_client(timeout: Duration) -> Result<Client, FetchError> {
    let client = Client::builder()
        .user_agent(default_user_agent())
        .redirect(Policy::none())
        .timeout(timeout)
        .build()?;
    Ok(client)
}

fn default_user_agent() -> String {
    format!(
        "{}/{} (+rust; {})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS
    )
}

/// Fetch `url`, following up to `max_redirects` redirect hops, and
/// return the response body as text.
#[instrument(level = "info", skip(client))]
pub async fn fetch_html(
    client: &Client,
    url: &str,
    max_redirects: usize,
) -> Result<String, FetchError> {
    let mut url = Url::parse(url)?;
    let mut budget = max_redirects;

    loop {
        let resp = client.get(url.clone()).send().await?;
        let status = resp.status();

        if status.is_redirection() {
            if budget == 0 {
                warn!(%status, %url, "Redirect budget exhausted");
                return Err(FetchError::RedirectBudget {
                    budget: max_redirects,
                });
            }
            budget -= 1;

            let location = resp
                .headers()
                .get(LOCATION)
                .and_then(|v| v.to_str().ok())
                .ok_or(FetchError::MissingLocation)?;
            let next = url.join(location)?;
            debug!(from = %url, to = %next, remaining = budget, "Following redirect");
            url = next;
            continue;
        }

        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = resp.text().await?;
        info!(bytes = body.len(), %url, "Fetched HTML");
        return Ok(body);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_client() {
        assert!(build_client(Duration::from_secs(5)).is_ok());
    }

    #[test]
    fn test_user_agent_identifies_package() {
        let ua = default_user_agent();
        assert!(ua.starts_with("time_latest_stories/"));
    }

    #[tokio::test]
    async fn test_invalid_start_url() {
        let client = build_client(Duration::from_secs(1)).unwrap();
        let err = fetch_html(&client, "not a url", 10).await;
        assert!(matches!(err, Err(FetchError::Url(_))));
    }

    #[test]
    fn test_error_messages() {
        let err = FetchError::RedirectBudget { budget: 10 };
        assert_eq!(err.to_string(), "redirect chain exceeded budget of 10 hops");

        let err = FetchError::Status(StatusCode::SERVICE_UNAVAILABLE);
        assert!(err.to_string().contains("503"));

        assert_eq!(
            FetchError::MissingLocation.to_string(),
            "redirect response missing a Location header"
        );
    }
}
