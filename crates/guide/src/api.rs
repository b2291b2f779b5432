//! REST client for the NPO `guide-channel` endpoint.
//!
//! One call fetches one channel's schedule for one calendar day. Calls are
//! not retried; the caller decides what a failure means for the listing.

use npo2xml_core::program::ProgramRecord;
use reqwest::header::USER_AGENT;

pub const DEFAULT_BASE_URL: &str = "https://npo.nl";
pub const DEFAULT_USER_AGENT: &str = "NPO2XML (https://github.com/NoahvdAa/NPO2XML)";
pub const GUIDE_CHANNEL_PATH: &str = "/start/api/domain/guide-channel";

/// Longest prefix of an error response body kept in [`GuideApiError::Status`].
pub const MAX_ERROR_BODY_CHARS: usize = 512;

/// Errors from the guide API layer.
#[derive(Debug, thiserror::Error)]
pub enum GuideApiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The guide returned a non-2xx status code.
    #[error("Guide API error ({status}): {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Start of the response body, at most [`MAX_ERROR_BODY_CHARS`].
        body: String,
    },

    /// The body was not a JSON array of program objects.
    #[error("Invalid guide response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl GuideApiError {
    /// True for failures to obtain a response, false for unusable bodies.
    pub fn is_fetch(&self) -> bool {
        !matches!(self, GuideApiError::Decode(_))
    }
}

/// HTTP client for the guide API.
#[derive(Debug, Clone)]
pub struct GuideApi {
    client: reqwest::Client,
    base_url: String,
    user_agent: String,
}

impl GuideApi {
    /// * `base_url` - scheme and host, e.g. `https://npo.nl`.
    pub fn new(base_url: impl Into<String>, user_agent: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, user_agent)
    }

    /// Create an API client reusing an existing [`reqwest::Client`].
    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        user_agent: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            user_agent: user_agent.into(),
        }
    }

    /// Fetch the schedule of one channel for one day.
    ///
    /// `date` must already be in the guide's `DD-MM-YYYY` form.
    pub async fn fetch_day(
        &self,
        channel_guid: &str,
        date: &str,
    ) -> Result<Vec<ProgramRecord>, GuideApiError> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, GUIDE_CHANNEL_PATH))
            .query(&[("date", date), ("guid", channel_guid)])
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(GuideApiError::Status {
                status: status.as_u16(),
                body: truncate_chars(&body, MAX_ERROR_BODY_CHARS),
            });
        }

        let body = response.text().await?;
        let records: Vec<ProgramRecord> = serde_json::from_str(&body)?;

        tracing::debug!(
            channel_guid,
            date,
            records = records.len(),
            "Fetched guide day",
        );

        Ok(records)
    }
}

fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((end, _)) => format!("{}...", &s[..end]),
        None => s.to_string(),
    }
}
