use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PerformanceLevel {
    Excellent,
    Good,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

impl PerformanceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PerformanceLevel::Excellent => "Excellent",
            PerformanceLevel::Good => "Good",
            PerformanceLevel::NeedsImprovement => "Needs Improvement",
        }
    }
}

impl std::fmt::Display for PerformanceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub gpa: f64,
    pub marks_10th: f64,
    pub marks_12th: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            gpa: 50.0,
            marks_10th: 25.0,
            marks_12th: 25.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Performance {
    pub level: PerformanceLevel,
    /// 0 – 100, one decimal.
    pub score: f64,
}

const EXCELLENT_THRESHOLD: f64 = 85.0;
const GOOD_THRESHOLD: f64 = 70.0;

/// Academic score out of 100: GPA on a 10-point scale, marks as percentages.
/// A missing component contributes nothing.
pub fn performance_level(
    gpa: Option<f64>,
    marks_10th: Option<f64>,
    marks_12th: Option<f64>,
    weights: &ScoreWeights,
) -> Performance {
    let score = gpa.map_or(0.0, |g| g / 10.0 * weights.gpa)
        + marks_10th.map_or(0.0, |m| m / 100.0 * weights.marks_10th)
        + marks_12th.map_or(0.0, |m| m / 100.0 * weights.marks_12th);

    let level = if score >= EXCELLENT_THRESHOLD {
        PerformanceLevel::Excellent
    } else if score >= GOOD_THRESHOLD {
        PerformanceLevel::Good
    } else {
        PerformanceLevel::NeedsImprovement
    };

    Performance {
        level,
        score: round1(score),
    }
}

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
