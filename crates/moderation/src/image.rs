//! Image moderation against the Sightengine check endpoint.

use std::time::Duration;

use kwaground_core::moderation::ImageScores;
use serde::Deserialize;

use crate::ModerationError;

const DEFAULT_ENDPOINT: &str = "https://api.sightengine.com/1.0/check.json";

/// Classifier models requested for every image.
const MODELS: &str = "nudity,gore,offensive,weapon";

/// HTTP request timeout for a single classifier call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Deserialize)]
struct ImageModerationResponse {
    status: String,
    #[serde(default)]
    nudity: Option<NudityScores>,
    #[serde(default)]
    gore: Option<f64>,
    #[serde(default)]
    offensive: Option<OffensiveScores>,
    #[serde(default)]
    weapon: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct NudityScores {
    raw: f64,
}

#[derive(Debug, Deserialize)]
struct OffensiveScores {
    prob: f64,
}

/// Client for the image-moderation classifier.
pub struct ImageModerationClient {
    client: reqwest::Client,
    api_user: String,
    api_secret: String,
    endpoint: String,
}

impl ImageModerationClient {
    pub fn new(api_user: String, api_secret: String) -> Self {
        Self::with_endpoint(api_user, api_secret, DEFAULT_ENDPOINT.to_string())
    }

    pub fn with_endpoint(api_user: String, api_secret: String, endpoint: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self {
            client,
            api_user,
            api_secret,
            endpoint,
        }
    }

    /// Score an image across the configured classifier models.
    pub async fn check(
        &self,
        bytes: Vec<u8>,
        filename: &str,
    ) -> Result<ImageScores, ModerationError> {
        let media = reqwest::multipart::Part::bytes(bytes).file_name(filename.to_string());
        let form = reqwest::multipart::Form::new()
            .part("media", media)
            .text("models", MODELS)
            .text("api_user", self.api_user.clone())
            .text("api_secret", self.api_secret.clone());

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ModerationError::Response(format!(
                "image classifier returned HTTP {}",
                response.status().as_u16()
            )));
        }

        let body: ImageModerationResponse = response.json().await?;
        parse_scores(body)
    }
}

/// Extract per-model scores from a classifier response.
///
/// Any status other than "success" means the image was not scored; missing
/// model sections default to zero so a partial response still produces a
/// usable verdict.
fn parse_scores(body: ImageModerationResponse) -> Result<ImageScores, ModerationError> {
    if body.status != "success" {
        return Err(ModerationError::Response(format!(
            "image classifier status was '{}'",
            body.status
        )));
    }
    Ok(ImageScores {
        nudity_raw: body.nudity.map(|n| n.raw).unwrap_or(0.0),
        gore: body.gore.unwrap_or(0.0),
        offensive_prob: body.offensive.map(|o| o.prob).unwrap_or(0.0),
        weapon: body.weapon.unwrap_or(0.0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn response_from(json: &str) -> ImageModerationResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn success_response_yields_scores() {
        let body = response_from(
            r#"{
                "status": "success",
                "nudity": {"raw": 0.12},
                "gore": 0.01,
                "offensive": {"prob": 0.45},
                "weapon": 0.02
            }"#,
        );
        let scores = parse_scores(body).unwrap();
        assert_eq!(scores.nudity_raw, 0.12);
        assert_eq!(scores.gore, 0.01);
        assert_eq!(scores.offensive_prob, 0.45);
        assert_eq!(scores.weapon, 0.02);
        assert!(scores.exceeds_thresholds());
    }

    #[test]
    fn missing_model_sections_default_to_zero() {
        let body = response_from(r#"{"status": "success"}"#);
        let scores = parse_scores(body).unwrap();
        assert_eq!(scores.nudity_raw, 0.0);
        assert_eq!(scores.weapon, 0.0);
        assert!(!scores.exceeds_thresholds());
    }

    #[test]
    fn failure_status_is_a_service_error() {
        let body = response_from(r#"{"status": "failure"}"#);
        assert_matches!(parse_scores(body), Err(ModerationError::Response(_)));
    }
}
