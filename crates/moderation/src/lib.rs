//! The content moderation gate guarding event publication.
//!
//! Two third-party classifiers are consulted before an event is persisted:
//! a text classifier over the title and description, and (when an image is
//! attached) an image classifier scoring nudity/gore/offensive/weapon
//! content. The gate distinguishes "the classifier call failed"
//! ([`ModerationError`]) from "the classifier flagged the content"
//! ([`Verdict::Flagged`]); callers must never conflate the two.
//!
//! Either classifier may be left unconfigured, in which case its review is
//! skipped and the content is treated as clean.

use kwaground_core::moderation::ImageScores;

pub mod image;
pub mod text;

pub use image::ImageModerationClient;
pub use text::TextModerationClient;

/// Error type for moderation service failures.
///
/// This covers transport and response-shape failures only. A successful
/// call that flags content is not an error.
#[derive(Debug, thiserror::Error)]
pub enum ModerationError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("Moderation request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service responded, but not with the expected shape.
    #[error("Moderation response malformed: {0}")]
    Response(String),
}

/// The gate's decision on a piece of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Clean,
    Flagged,
}

/// Combined text + image moderation, with either side optional.
pub struct ModerationGate {
    text: Option<TextModerationClient>,
    image: Option<ImageModerationClient>,
}

impl ModerationGate {
    pub fn new(text: Option<TextModerationClient>, image: Option<ImageModerationClient>) -> Self {
        Self { text, image }
    }

    /// Build the gate from environment variables.
    ///
    /// | Variable                 | Enables          |
    /// |--------------------------|------------------|
    /// | `OPENAI_API_KEY`         | text moderation  |
    /// | `SIGHTENGINE_API_USER` + `SIGHTENGINE_API_SECRET` | image moderation |
    ///
    /// Unset variables leave the corresponding review disabled.
    pub fn from_env() -> Self {
        let text = std::env::var("OPENAI_API_KEY")
            .ok()
            .map(TextModerationClient::new);

        let image = match (
            std::env::var("SIGHTENGINE_API_USER").ok(),
            std::env::var("SIGHTENGINE_API_SECRET").ok(),
        ) {
            (Some(user), Some(secret)) => Some(ImageModerationClient::new(user, secret)),
            _ => None,
        };

        if text.is_none() {
            tracing::info!("Text moderation disabled (OPENAI_API_KEY not set)");
        }
        if image.is_none() {
            tracing::info!("Image moderation disabled (Sightengine credentials not set)");
        }

        Self { text, image }
    }

    /// Review submitted text. Skipped (clean) when unconfigured.
    pub async fn review_text(&self, input: &str) -> Result<Verdict, ModerationError> {
        let Some(client) = &self.text else {
            return Ok(Verdict::Clean);
        };
        let flagged = client.check(input).await?;
        Ok(if flagged { Verdict::Flagged } else { Verdict::Clean })
    }

    /// Review an attached image. Skipped (clean) when unconfigured.
    pub async fn review_image(
        &self,
        bytes: Vec<u8>,
        filename: &str,
    ) -> Result<Verdict, ModerationError> {
        let Some(client) = &self.image else {
            return Ok(Verdict::Clean);
        };
        let scores: ImageScores = client.check(bytes, filename).await?;
        Ok(if scores.exceeds_thresholds() {
            Verdict::Flagged
        } else {
            Verdict::Clean
        })
    }
}
