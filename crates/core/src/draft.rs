//! Draft event validation.
//!
//! A draft carries the raw form fields of a submission. Validation runs
//! before any moderation call, upload, or insert -- an invalid draft never
//! reaches the network.

use serde::Deserialize;
use validator::Validate;

use crate::error::CoreError;
use crate::tags::parse_tags;

/// Maximum allowed description length, in characters.
pub const MAX_DESCRIPTION_LEN: u64 = 300;

/// A user-authored event draft, as submitted from the form.
///
/// Dates and times are kept as the raw form text here; the API layer parses
/// them into typed values after validation passes.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct EventDraft {
    #[validate(length(min = 1, message = "Event title is required"))]
    pub title: String,

    #[validate(length(
        min = 1,
        max = 300,
        message = "Event description is required and must be at most 300 characters"
    ))]
    pub description: String,

    #[validate(length(min = 1, message = "Event date is required"))]
    pub date: String,

    /// Optional start time.
    pub time: Option<String>,

    #[validate(length(min = 1, message = "Event location is required"))]
    pub location: String,

    #[validate(length(min = 1, message = "Event category is required"))]
    pub category: String,

    /// Optional free-text price ("Free" or an amount).
    pub price: Option<String>,

    /// Optional comma-separated tag string.
    pub tags: Option<String>,
}

/// Fields checked for required-ness, in the order failures are reported.
const REQUIRED_FIELDS: [&str; 5] = ["title", "description", "date", "location", "category"];

impl EventDraft {
    /// Validate required fields and the description length limit.
    ///
    /// Returns the first failed requirement as a [`CoreError::Validation`]
    /// naming what is missing or over limit.
    pub fn validate_draft(&self) -> Result<(), CoreError> {
        let Err(errors) = self.validate() else {
            return Ok(());
        };

        let field_errors = errors.field_errors();
        for field in REQUIRED_FIELDS {
            if let Some(failures) = field_errors.get(field) {
                let message = failures
                    .iter()
                    .find_map(|f| f.message.as_ref())
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {field}"));
                return Err(CoreError::Validation(message));
            }
        }
        Err(CoreError::Validation(
            "Please fill in all required fields".to_string(),
        ))
    }

    /// The parsed tag list (trimmed, lower-cased, empties dropped).
    pub fn tag_list(&self) -> Vec<String> {
        self.tags.as_deref().map(parse_tags).unwrap_or_default()
    }

    /// The combined text submitted to the text-moderation classifier.
    pub fn moderation_input(&self) -> String {
        format!("{}\n{}", self.title, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn valid_draft() -> EventDraft {
        EventDraft {
            title: "Jazz Night".to_string(),
            description: "An evening of live jazz.".to_string(),
            date: "2026-09-12".to_string(),
            time: Some("19:00".to_string()),
            location: "Westlands, Nairobi".to_string(),
            category: "Concerts".to_string(),
            price: Some("Free".to_string()),
            tags: Some("music, outdoor".to_string()),
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert!(valid_draft().validate_draft().is_ok());
    }

    #[test]
    fn each_missing_required_field_fails() {
        for field in REQUIRED_FIELDS {
            let mut draft = valid_draft();
            match field {
                "title" => draft.title.clear(),
                "description" => draft.description.clear(),
                "date" => draft.date.clear(),
                "location" => draft.location.clear(),
                "category" => draft.category.clear(),
                _ => unreachable!(),
            }
            let err = draft.validate_draft().unwrap_err();
            assert_matches!(err, CoreError::Validation(msg) => {
                assert!(msg.contains(field) || msg.to_lowercase().contains(field),
                    "message {msg:?} should name the {field} requirement");
            });
        }
    }

    #[test]
    fn optional_fields_may_be_absent() {
        let draft = EventDraft {
            time: None,
            price: None,
            tags: None,
            ..valid_draft()
        };
        assert!(draft.validate_draft().is_ok());
    }

    #[test]
    fn description_over_limit_fails() {
        let mut draft = valid_draft();
        draft.description = "x".repeat(MAX_DESCRIPTION_LEN as usize + 1);
        let err = draft.validate_draft().unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) => {
            assert!(msg.contains("300"), "message {msg:?} should state the limit");
        });
    }

    #[test]
    fn description_at_limit_passes() {
        let mut draft = valid_draft();
        draft.description = "x".repeat(MAX_DESCRIPTION_LEN as usize);
        assert!(draft.validate_draft().is_ok());
    }

    #[test]
    fn tag_list_parses_raw_string() {
        let draft = valid_draft();
        assert_eq!(draft.tag_list(), vec!["music", "outdoor"]);

        let no_tags = EventDraft {
            tags: None,
            ..valid_draft()
        };
        assert!(no_tags.tag_list().is_empty());
    }

    #[test]
    fn moderation_input_joins_title_and_description() {
        let draft = valid_draft();
        assert_eq!(
            draft.moderation_input(),
            "Jazz Night\nAn evening of live jazz."
        );
    }
}
