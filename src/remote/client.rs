//! HTTP transport for the remote natural-language classifier.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::core::error::{Result, RouteError};
use crate::providers::ClassifierTransport;

/// Reqwest-backed classifier transport.
///
/// POSTs the utterance plus the destination snapshot as JSON and expects a
/// single-string answer back. Every failure mode - connection, non-success
/// status, undecodable or empty body - maps into [`RouteError`]; callers
/// log and end the cycle, they never raise.
pub struct HttpClassifier {
    client: Client,
    endpoint: String,
}

impl HttpClassifier {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    /// Create a transport from environment variables.
    ///
    /// Required: VOXROUTE_API_URL
    pub fn from_env() -> Result<Self> {
        let endpoint = std::env::var("VOXROUTE_API_URL")
            .map_err(|_| RouteError::Transport("VOXROUTE_API_URL not set".into()))?;
        Ok(Self::new(endpoint))
    }
}

#[derive(Serialize)]
struct ClassifyRequest<'a> {
    voice_input: &'a str,
    possible_destinations: &'a [String],
}

#[derive(Deserialize)]
struct ClassifyResponse {
    response: String,
}

#[async_trait]
impl ClassifierTransport for HttpClassifier {
    async fn classify(&self, utterance: &str, catalog: &[String]) -> Result<String> {
        let request = ClassifyRequest {
            voice_input: utterance,
            possible_destinations: catalog,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| RouteError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(RouteError::Transport(format!(
                "API error {status}: {error_text}"
            )));
        }

        let body: ClassifyResponse = response
            .json()
            .await
            .map_err(|e| RouteError::MalformedResponse(e.to_string()))?;

        if body.response.trim().is_empty() {
            return Err(RouteError::MalformedResponse("empty response".into()));
        }

        Ok(body.response)
    }
}
