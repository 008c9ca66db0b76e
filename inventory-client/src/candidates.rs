//! Ordered multi-host fallback.
//!
//! A [`CandidateChain`] tries each base address in priority order, one at
//! a time. The first reply that is a 2xx carrying a parseable JSON body
//! wins; otherwise the chain moves on and, once every candidate has
//! failed, reports the last failure along with the full attempt list.

use crate::error::{ApiError, AttemptError};
use crate::transport::{ApiRequest, RawResponse, Transport};

pub const PRODUCTION_URL: &str = "https://backend-lnia.onrender.com";
pub const LOCAL_URL: &str = "http://localhost:5000";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidateChain {
    candidates: Vec<String>,
}

impl CandidateChain {
    pub fn new<S: Into<String>>(candidates: impl IntoIterator<Item = S>) -> Self {
        Self {
            candidates: candidates
                .into_iter()
                .map(|c| c.into().trim_end_matches('/').to_string())
                .collect(),
        }
    }

    /// Deployed instance first, then a local one.
    pub fn standard() -> Self {
        Self::new([PRODUCTION_URL, LOCAL_URL])
    }

    pub fn production_only() -> Self {
        Self::new([PRODUCTION_URL])
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub async fn execute(
        &self,
        transport: &dyn Transport,
        request: &ApiRequest,
    ) -> Result<serde_json::Value, ApiError> {
        let mut attempts = Vec::with_capacity(self.candidates.len());

        for base in &self.candidates {
            tracing::debug!(candidate = %base, path = %request.display_path(), "trying api call");
            let outcome = match transport.send(base, request).await {
                Ok(resp) => classify(resp),
                Err(e) => Err(AttemptError::Transport(e.0)),
            };
            match outcome {
                Ok(value) => {
                    tracing::info!(
                        candidate = %base,
                        path = %request.display_path(),
                        "api call succeeded"
                    );
                    return Ok(value);
                }
                Err(err) => {
                    tracing::warn!(candidate = %base, error = %err, "api candidate failed");
                    attempts.push((base.clone(), err));
                }
            }
        }

        let last = attempts
            .last()
            .map(|(_, e)| e.clone())
            .unwrap_or(AttemptError::NoCandidates);
        Err(ApiError::Exhausted {
            last: Box::new(last),
            attempts,
        })
    }
}

impl Default for CandidateChain {
    fn default() -> Self {
        Self::standard()
    }
}

/// Status is checked before content type, so an HTML error page from a
/// proxy reports as an HTTP failure rather than a protocol one.
fn classify(resp: RawResponse) -> Result<serde_json::Value, AttemptError> {
    if !resp.is_success() {
        return Err(AttemptError::Status {
            status: resp.status,
            body: resp.body,
        });
    }
    if !resp.is_json() {
        return Err(AttemptError::NonJson {
            status: resp.status,
            content_type: resp.content_type,
        });
    }
    serde_json::from_str(&resp.body).map_err(|e| AttemptError::MalformedJson(e.to_string()))
}
