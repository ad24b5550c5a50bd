//! HTTP transport for the assessment exchange.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): a stub that fails, since submissions only happen in
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! The transport only reports whether a reply arrived. Interpreting status
//! codes and bodies is left to [`interpret_reply`] so it can be tested
//! without a network.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::Value;
use survey::AssessmentResult;

use super::assessment::SubmitError;

/// Raw HTTP reply: status line plus body text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl HttpReply {
    #[must_use]
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request never completed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Network seam used by the form controller.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// POST `body` as `application/json` to `path`.
    async fn post_json(&self, path: &str, body: &str) -> Result<HttpReply, TransportError>;
}

/// Browser `fetch` transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

impl Transport for GlooTransport {
    async fn post_json(&self, path: &str, body: &str) -> Result<HttpReply, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            let to_err = |e: gloo_net::Error| TransportError(e.to_string());
            let resp = gloo_net::http::Request::post(path)
                .header("Content-Type", "application/json")
                .body(body.to_owned())
                .map_err(to_err)?
                .send()
                .await
                .map_err(to_err)?;
            let status = resp.status();
            let status_text = resp.status_text();
            let body = resp.text().await.map_err(to_err)?;
            Ok(HttpReply { status, status_text, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, body);
            Err(TransportError("not available on server".to_owned()))
        }
    }
}

/// Turn a reply into a result or the message to show the user.
///
/// Non-2xx replies use the body's `error` string when present and the status
/// text otherwise. A body that is not JSON at all is reported as malformed.
///
/// # Errors
///
/// Returns [`SubmitError::Server`] or [`SubmitError::MalformedBody`].
pub fn interpret_reply(reply: &HttpReply) -> Result<AssessmentResult, SubmitError> {
    if reply.ok() {
        return serde_json::from_str(&reply.body).map_err(|e| SubmitError::MalformedBody(e.to_string()));
    }

    let body: Value = serde_json::from_str(&reply.body).map_err(|e| SubmitError::MalformedBody(e.to_string()))?;
    let message = body
        .get("error")
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty())
        .map_or_else(|| status_fallback(reply), str::to_owned);
    Err(SubmitError::Server(message))
}

fn status_fallback(reply: &HttpReply) -> String {
    if reply.status_text.trim().is_empty() {
        format!("HTTP {}", reply.status)
    } else {
        reply.status_text.clone()
    }
}
