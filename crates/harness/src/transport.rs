//! HTTP transport for solver requests.
//!
//! The [`Transport`] trait is the seam between the runner and the network,
//! so the runner can be driven by an in-memory stub in tests. The real
//! implementation, [`HttpTransport`], uses `ureq` (sync): one POST per call,
//! no redirects, no retries, no timeout beyond ureq's defaults.

use crate::error::TransportError;

/// Status and body text of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

/// Sends one encoded problem to a solver and returns its response.
///
/// Implementations must report non-2xx statuses as
/// [`TransportError::Status`] rather than returning them as a response.
pub trait Transport {
    fn post_json(&self, url: &str, payload: &[u8]) -> Result<TransportResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn post_json(&self, url: &str, payload: &[u8]) -> Result<TransportResponse, TransportError> {
        (**self).post_json(url, payload)
    }
}

/// Blocking HTTP transport backed by `ureq`.
///
/// Holds no connection state: every call builds its own agent, and the
/// agent and response body are dropped when the call returns.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpTransport;

impl HttpTransport {
    pub fn new() -> Self {
        HttpTransport
    }
}

impl Transport for HttpTransport {
    fn post_json(&self, url: &str, payload: &[u8]) -> Result<TransportResponse, TransportError> {
        let config = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .max_redirects(0)
            .build();
        let agent: ureq::Agent = config.into();

        tracing::debug!(url, bytes = payload.len(), "POST");

        let response = agent
            .post(url)
            .header("content-type", "application/json")
            .send(payload)
            .map_err(|e| TransportError::Connection {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        tracing::debug!(url, status = status.as_u16(), "response received");

        let mut body = response.into_body();

        if !status.is_success() {
            // The status is the failure; the body is only for diagnosis.
            let text = body
                .read_to_vec()
                .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
                .unwrap_or_default();
            return Err(TransportError::Status {
                url: url.to_string(),
                status: status.as_u16(),
                body: text,
            });
        }

        let body = body.read_to_string().map_err(|e| TransportError::Body {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        Ok(TransportResponse {
            status: status.as_u16(),
            body,
        })
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
