use async_trait::async_trait;
use progression_core::{Credit, CreditTuple, Outcome};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::ProgressionConfig;
use crate::error::{CalculationError, ConfigError};

/// The remote progression calculator.
#[async_trait]
pub trait ProgressionApi: Send + Sync {
    /// Ask the calculator for the outcome of one credit tuple. One attempt, no retries.
    async fn calculate(&self, credits: CreditTuple) -> Result<Outcome, CalculationError>;
}

/// `ProgressionApi` over `POST <base>/api/calculate`.
#[derive(Clone, Debug)]
pub struct HttpProgressionClient {
    client: Client,
    endpoint: String,
}

impl HttpProgressionClient {
    /// # Errors
    ///
    /// Returns `ConfigError::Http` if the HTTP client cannot be built.
    pub fn new(config: &ProgressionConfig) -> Result<Self, ConfigError> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self {
            client,
            endpoint: config.calculate_url(),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ProgressionApi for HttpProgressionClient {
    async fn calculate(&self, credits: CreditTuple) -> Result<Outcome, CalculationError> {
        debug!(endpoint = %self.endpoint, %credits, "requesting progression outcome");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&CalculateRequest::from(credits))
            .send()
            .await
            .map_err(|err| {
                warn!(error = %err, "progression calculator unreachable");
                CalculationError::Unreachable
            })?;

        let status = response.status();
        // A status line arrived, so anything from here on is the server's answer.
        let body = response.bytes().await.map_err(|err| {
            warn!(%status, error = %err, "failed to read calculator response body");
            CalculationError::Unreachable
        })?;

        if !status.is_success() {
            let message = rejection_message(status, &body);
            warn!(%status, %message, "calculator rejected request");
            return Err(CalculationError::Rejected { message });
        }

        let parsed: CalculateResponse = serde_json::from_slice(&body).map_err(|err| {
            warn!(%status, error = %err, "calculator returned an unreadable outcome");
            CalculationError::rejected("unexpected response from server")
        })?;

        debug!(outcome = %parsed.outcome, "received progression outcome");
        Ok(Outcome::new(parsed.outcome))
    }
}

fn rejection_message(status: StatusCode, body: &[u8]) -> String {
    serde_json::from_slice::<ErrorResponse>(body)
        .map(|payload| payload.error)
        .unwrap_or_else(|_| format!("request failed with status {}", status.as_u16()))
}

#[derive(Debug, Serialize)]
struct CalculateRequest {
    pass_credit: Credit,
    defer_credit: Credit,
    fail_credit: Credit,
}

impl From<CreditTuple> for CalculateRequest {
    fn from(credits: CreditTuple) -> Self {
        Self {
            pass_credit: credits.pass,
            defer_credit: credits.defer,
            fail_credit: credits.fail,
        }
    }
}

#[derive(Debug, Deserialize)]
struct CalculateResponse {
    outcome: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}
