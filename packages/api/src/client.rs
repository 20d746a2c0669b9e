//! # Submission client — one POST to the signup endpoint
//!
//! [`Submitter`] is the seam between the form and the network. The form only ever
//! calls [`Submitter::submit`]; production code plugs in [`HttpSubmitter`], tests
//! plug in an in-memory recorder.
//!
//! A submission is a single request: no retry, no backoff, no idempotency key, and
//! the transport's default timeouts. Every failure comes back as a [`SubmitError`]
//! so the caller decides whether to log, surface or retry it.

use crate::models::{RegistrationRecord, SignupResponse};
use crate::settings::Settings;

/// Why a submission did not produce a response.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The request never completed (DNS, connection refused, TLS, ...).
    #[error("signup request failed: {0}")]
    Transport(#[source] reqwest::Error),
    /// The server answered with a non-2xx status.
    #[error("signup rejected with status {status}: {body}")]
    Status { status: u16, body: String },
    /// The 2xx body could not be read as JSON.
    #[error("invalid signup response: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Sends a validated registration somewhere.
pub trait Submitter {
    fn submit(
        &self,
        record: &RegistrationRecord,
    ) -> impl std::future::Future<Output = Result<SignupResponse, SubmitError>>;
}

/// [`Submitter`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpSubmitter {
    http: reqwest::Client,
    url: String,
}

impl HttpSubmitter {
    /// Post to an explicit signup URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.signup_url())
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for HttpSubmitter {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl Submitter for HttpSubmitter {
    async fn submit(&self, record: &RegistrationRecord) -> Result<SignupResponse, SubmitError> {
        let response = self
            .http
            .post(&self.url)
            .json(record)
            .send()
            .await
            .map_err(SubmitError::Transport)?;

        let status = response.status();
        let body = response.text().await.map_err(SubmitError::Transport)?;

        if !status.is_success() {
            return Err(SubmitError::Status {
                status: status.as_u16(),
                body,
            });
        }

        if body.trim().is_empty() {
            return Ok(SignupResponse::Null);
        }
        serde_json::from_str(&body).map_err(SubmitError::Decode)
    }
}
