use std::fmt;

use serde::{Deserialize, Serialize};

/// Categorical verdict derived from the final probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdmissionDecision {
    #[serde(rename = "Likely Admit")]
    LikelyAdmit,
    Possible,
    Reach,
    Unlikely,
    /// The target school is not in the catalog; never produced by `classify`.
    Unknown,
}

impl AdmissionDecision {
    pub const LIKELY_ADMIT_THRESHOLD: f64 = 0.70;
    pub const POSSIBLE_THRESHOLD: f64 = 0.40;
    pub const REACH_THRESHOLD: f64 = 0.15;

    pub fn classify(probability: f64) -> Self {
        if probability >= Self::LIKELY_ADMIT_THRESHOLD {
            AdmissionDecision::LikelyAdmit
        } else if probability >= Self::POSSIBLE_THRESHOLD {
            AdmissionDecision::Possible
        } else if probability >= Self::REACH_THRESHOLD {
            AdmissionDecision::Reach
        } else {
            AdmissionDecision::Unlikely
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            AdmissionDecision::LikelyAdmit => "Likely Admit",
            AdmissionDecision::Possible => "Possible",
            AdmissionDecision::Reach => "Reach",
            AdmissionDecision::Unlikely => "Unlikely",
            AdmissionDecision::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for AdmissionDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
