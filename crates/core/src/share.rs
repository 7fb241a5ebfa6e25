//! Share-summary composition and the share fallback chain.
//!
//! Sharing an event produces one human-readable summary and attempts a list
//! of delivery targets in strict order: the host's native share surface,
//! then the clipboard, then a legacy copy mechanism. A target that is not
//! available falls through to the next; a target that is available but
//! fails ends the attempt with an error. Exactly one outcome is produced
//! per invocation -- there are no retries.

use chrono::{NaiveDate, NaiveTime};

use crate::price::normalize_price;

/// Format a date for display, e.g. `September 12, 2026`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Format a time of day for display, e.g. `7:30 pm`.
pub fn format_time(time: NaiveTime) -> String {
    time.format("%-I:%M %P").to_string()
}

/// Build the shareable summary text for an event.
///
/// `date` and `time` are already display-formatted; `price` is normalized
/// here. Optional fields are omitted rather than rendered empty.
pub fn compose_share_text(
    title: &str,
    description: &str,
    date: &str,
    time: Option<&str>,
    location: &str,
    price: Option<&str>,
    url: &str,
) -> String {
    let mut text = format!("{title}\n\nCheck out this event: {title}\n\n{description}\n\n");
    text.push_str(&format!("Date: {date}\n"));
    if let Some(time) = time {
        text.push_str(&format!("Time: {time}\n"));
    }
    text.push_str(&format!("Location: {location}\n"));
    if let Some(price) = price {
        text.push_str(&format!("Price: {}\n", normalize_price(price)));
    }
    text.push_str(&format!("\nView more at: {url}"));
    text
}

/// How a share ultimately succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// Delivered through a native share surface.
    Shared,
    /// Copied for the user to paste.
    Copied,
}

/// The result of offering the summary to a single target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareAttempt {
    /// This target cannot run in the current environment; try the next one.
    Unavailable,
    /// The target handled the share.
    Delivered(ShareOutcome),
}

/// A share that could not be completed by any target.
#[derive(Debug, thiserror::Error)]
#[error("Share failed: {0}")]
pub struct ShareError(pub String);

/// One delivery strategy in the fallback chain.
pub trait ShareTarget {
    fn deliver(&self, text: &str) -> Result<ShareAttempt, ShareError>;
}

/// Offer `text` to each target in order.
///
/// Unavailable targets fall through; the first delivery wins; a delivery
/// error stops the chain. With no target available the share fails.
pub fn share(text: &str, targets: &[&dyn ShareTarget]) -> Result<ShareOutcome, ShareError> {
    for target in targets {
        match target.deliver(text)? {
            ShareAttempt::Unavailable => continue,
            ShareAttempt::Delivered(outcome) => return Ok(outcome),
        }
    }
    Err(ShareError("no share target available".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct FixedTarget(Result<ShareAttempt, &'static str>);

    impl ShareTarget for FixedTarget {
        fn deliver(&self, _text: &str) -> Result<ShareAttempt, ShareError> {
            self.0.map_err(|msg| ShareError(msg.to_string()))
        }
    }

    struct CountingTarget {
        calls: Cell<usize>,
        result: ShareAttempt,
    }

    impl ShareTarget for CountingTarget {
        fn deliver(&self, _text: &str) -> Result<ShareAttempt, ShareError> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.result)
        }
    }

    #[test]
    fn first_available_target_wins() {
        let native = FixedTarget(Ok(ShareAttempt::Delivered(ShareOutcome::Shared)));
        let clipboard = CountingTarget {
            calls: Cell::new(0),
            result: ShareAttempt::Delivered(ShareOutcome::Copied),
        };
        let outcome = share("text", &[&native, &clipboard]).unwrap();
        assert_eq!(outcome, ShareOutcome::Shared);
        assert_eq!(clipboard.calls.get(), 0, "later targets must not run");
    }

    #[test]
    fn unavailable_targets_fall_through() {
        let native = FixedTarget(Ok(ShareAttempt::Unavailable));
        let clipboard = FixedTarget(Ok(ShareAttempt::Delivered(ShareOutcome::Copied)));
        let outcome = share("text", &[&native, &clipboard]).unwrap();
        assert_eq!(outcome, ShareOutcome::Copied);
    }

    #[test]
    fn a_failing_target_ends_the_chain() {
        let clipboard = FixedTarget(Err("clipboard write rejected"));
        let legacy = CountingTarget {
            calls: Cell::new(0),
            result: ShareAttempt::Delivered(ShareOutcome::Copied),
        };
        let err = share("text", &[&clipboard, &legacy]).unwrap_err();
        assert!(err.to_string().contains("clipboard write rejected"));
        assert_eq!(legacy.calls.get(), 0);
    }

    #[test]
    fn no_available_target_fails() {
        let a = FixedTarget(Ok(ShareAttempt::Unavailable));
        let b = FixedTarget(Ok(ShareAttempt::Unavailable));
        assert!(share("text", &[&a, &b]).is_err());
    }

    #[test]
    fn date_and_time_formatting() {
        let date = NaiveDate::from_ymd_opt(2026, 9, 5).unwrap();
        assert_eq!(format_date(date), "September 5, 2026");

        let time = NaiveTime::from_hms_opt(19, 30, 0).unwrap();
        assert_eq!(format_time(time), "7:30 pm");

        let morning = NaiveTime::from_hms_opt(9, 5, 0).unwrap();
        assert_eq!(format_time(morning), "9:05 am");
    }

    #[test]
    fn summary_includes_all_present_fields() {
        let text = compose_share_text(
            "Jazz Night",
            "Live jazz.",
            "September 5, 2026",
            Some("7:30 pm"),
            "Westlands",
            Some("500"),
            "https://kwaground.example/events/1",
        );
        assert!(text.starts_with("Jazz Night\n\nCheck out this event: Jazz Night"));
        assert!(text.contains("Date: September 5, 2026\n"));
        assert!(text.contains("Time: 7:30 pm\n"));
        assert!(text.contains("Location: Westlands\n"));
        assert!(text.contains("Price: KSh 500\n"));
        assert!(text.ends_with("View more at: https://kwaground.example/events/1"));
    }

    #[test]
    fn summary_omits_absent_optional_fields() {
        let text = compose_share_text(
            "Jazz Night",
            "Live jazz.",
            "September 5, 2026",
            None,
            "Westlands",
            None,
            "https://kwaground.example/events/1",
        );
        assert!(!text.contains("Time:"));
        assert!(!text.contains("Price:"));
    }
}
