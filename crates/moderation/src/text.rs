//! Text moderation against the OpenAI moderations endpoint.

use std::time::Duration;

use serde::Deserialize;

use crate::ModerationError;

const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/moderations";

/// HTTP request timeout for a single classifier call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct TextModerationResponse {
    #[serde(default)]
    results: Vec<TextModerationResult>,
}

#[derive(Debug, Deserialize)]
struct TextModerationResult {
    flagged: bool,
}

/// Client for the text-moderation classifier.
pub struct TextModerationClient {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl TextModerationClient {
    pub fn new(api_key: String) -> Self {
        Self::with_endpoint(api_key, DEFAULT_ENDPOINT.to_string())
    }

    pub fn with_endpoint(api_key: String, endpoint: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self {
            client,
            api_key,
            endpoint,
        }
    }

    /// Classify a piece of text. Returns `true` when the content is flagged.
    pub async fn check(&self, input: &str) -> Result<bool, ModerationError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&serde_json::json!({ "input": input }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ModerationError::Response(format!(
                "text classifier returned HTTP {}",
                response.status().as_u16()
            )));
        }

        let body: TextModerationResponse = response.json().await?;
        parse_verdict(body)
    }
}

/// Extract the flagged verdict from a classifier response.
///
/// An empty `results` array means the classification did not run; that is
/// a service failure, not a clean verdict.
fn parse_verdict(body: TextModerationResponse) -> Result<bool, ModerationError> {
    body.results
        .first()
        .map(|r| r.flagged)
        .ok_or_else(|| ModerationError::Response("text classifier returned no results".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn response_from(json: &str) -> TextModerationResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn flagged_result_is_reported() {
        let body = response_from(r#"{"results": [{"flagged": true}]}"#);
        assert!(parse_verdict(body).unwrap());
    }

    #[test]
    fn clean_result_is_reported() {
        let body = response_from(r#"{"results": [{"flagged": false}]}"#);
        assert!(!parse_verdict(body).unwrap());
    }

    #[test]
    fn empty_results_is_a_service_error() {
        let body = response_from(r#"{"results": []}"#);
        assert_matches!(parse_verdict(body), Err(ModerationError::Response(_)));

        let body = response_from(r#"{}"#);
        assert_matches!(parse_verdict(body), Err(ModerationError::Response(_)));
    }
}
