//! Image moderation thresholds and the flagging decision.
//!
//! The classifier returns per-model scores in `[0, 1]`; a submission is
//! flagged when any score exceeds its threshold. The thresholds and the
//! decision are pure so the gate's HTTP plumbing stays separate.

/// Nudity score threshold (raw model output).
pub const NUDITY_THRESHOLD: f64 = 0.4;
/// Gore score threshold.
pub const GORE_THRESHOLD: f64 = 0.3;
/// Offensive-content probability threshold.
pub const OFFENSIVE_THRESHOLD: f64 = 0.4;
/// Weapon score threshold.
pub const WEAPON_THRESHOLD: f64 = 0.5;

/// Scores returned by the image-moderation classifier.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ImageScores {
    pub nudity_raw: f64,
    pub gore: f64,
    pub offensive_prob: f64,
    pub weapon: f64,
}

impl ImageScores {
    /// Whether any score exceeds its configured threshold.
    pub fn exceeds_thresholds(&self) -> bool {
        self.nudity_raw > NUDITY_THRESHOLD
            || self.gore > GORE_THRESHOLD
            || self.offensive_prob > OFFENSIVE_THRESHOLD
            || self.weapon > WEAPON_THRESHOLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_scores_pass() {
        let scores = ImageScores::default();
        assert!(!scores.exceeds_thresholds());

        let at_limits = ImageScores {
            nudity_raw: NUDITY_THRESHOLD,
            gore: GORE_THRESHOLD,
            offensive_prob: OFFENSIVE_THRESHOLD,
            weapon: WEAPON_THRESHOLD,
        };
        assert!(
            !at_limits.exceeds_thresholds(),
            "thresholds are strict: a score exactly at the limit passes"
        );
    }

    #[test]
    fn any_single_score_over_threshold_flags() {
        let cases = [
            ImageScores {
                nudity_raw: 0.41,
                ..Default::default()
            },
            ImageScores {
                gore: 0.31,
                ..Default::default()
            },
            ImageScores {
                offensive_prob: 0.41,
                ..Default::default()
            },
            ImageScores {
                weapon: 0.51,
                ..Default::default()
            },
        ];
        for scores in cases {
            assert!(scores.exceeds_thresholds(), "{scores:?} should flag");
        }
    }
}
