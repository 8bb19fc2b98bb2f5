use super::domain::Verdict;

/// Weights and thresholds applied by the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringRubric {
    pub points_per_severity: u32,
    /// Weight, in percent, for findings that match the stated skin focus.
    pub focus_weight_percent: u32,
    pub safe_threshold: u8,
    pub caution_threshold: u8,
}

impl ScoringRubric {
    pub const MAX_SCORE: u8 = 100;

    pub fn standard() -> Self {
        Self {
            points_per_severity: 6,
            focus_weight_percent: 125,
            safe_threshold: 80,
            caution_threshold: 55,
        }
    }

    /// `floor(severity * points * weight)` computed in integers, saturating.
    pub(crate) fn penalty_for(&self, severity: u32, boosted: bool) -> u64 {
        let weight_percent = if boosted {
            u64::from(self.focus_weight_percent)
        } else {
            100
        };

        u64::from(severity)
            .saturating_mul(u64::from(self.points_per_severity))
            .saturating_mul(weight_percent)
            / 100
    }

    pub(crate) fn score_for(&self, penalty: u64) -> u8 {
        let max = u64::from(Self::MAX_SCORE);
        (max - penalty.min(max)) as u8
    }

    pub fn verdict_for(&self, score: u8) -> Verdict {
        if score >= self.safe_threshold {
            Verdict::Safe
        } else if score >= self.caution_threshold {
            Verdict::Caution
        } else {
            Verdict::Avoid
        }
    }
}

impl Default for ScoringRubric {
    fn default() -> Self {
        Self::standard()
    }
}
