use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ComponentScores;
use crate::admissions::catalog::RoundKind;

const WEIGHT_TOLERANCE: f64 = 1e-6;

/// Named component weightings. `Holistic` uses all seven components; `Core` keeps the
/// academic / extracurricular / application / demographic subset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringProfile {
    #[default]
    Holistic,
    Core,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown scoring profile '{0}'")]
pub struct UnknownScoringProfile(pub String);

impl FromStr for ScoringProfile {
    type Err = UnknownScoringProfile;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "holistic" | "full" => Ok(ScoringProfile::Holistic),
            "core" | "classic" => Ok(ScoringProfile::Core),
            other => Err(UnknownScoringProfile(other.to_string())),
        }
    }
}

/// Weight applied to each component score when folding them into the total.
/// A zero weight deactivates the component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentWeights {
    pub academic: f64,
    pub major_alignment: f64,
    pub extracurricular: f64,
    pub application: f64,
    pub demographic: f64,
    pub demonstrated_interest: f64,
    pub contextual: f64,
}

impl ComponentWeights {
    pub const fn holistic() -> Self {
        Self {
            academic: 0.35,
            major_alignment: 0.15,
            extracurricular: 0.25,
            application: 0.15,
            demographic: 0.05,
            demonstrated_interest: 0.03,
            contextual: 0.02,
        }
    }

    pub const fn core() -> Self {
        Self {
            academic: 0.45,
            major_alignment: 0.0,
            extracurricular: 0.30,
            application: 0.20,
            demographic: 0.05,
            demonstrated_interest: 0.0,
            contextual: 0.0,
        }
    }

    fn entries(&self) -> [(&'static str, f64); 7] {
        [
            ("academic", self.academic),
            ("major_alignment", self.major_alignment),
            ("extracurricular", self.extracurricular),
            ("application", self.application),
            ("demographic", self.demographic),
            ("demonstrated_interest", self.demonstrated_interest),
            ("contextual", self.contextual),
        ]
    }

    pub fn sum(&self) -> f64 {
        self.entries().iter().map(|(_, weight)| weight).sum()
    }

    pub fn validate(&self) -> Result<(), WeightsError> {
        for (component, weight) in self.entries() {
            if !weight.is_finite() || weight < 0.0 {
                return Err(WeightsError::InvalidWeight { component, weight });
            }
        }
        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(WeightsError::DoesNotSumToOne { sum });
        }
        Ok(())
    }

    /// Weighted sum of the component scores (unclamped).
    pub fn apply(&self, scores: &ComponentScores) -> f64 {
        scores.academic * self.academic
            + scores.major_alignment * self.major_alignment
            + scores.extracurricular * self.extracurricular
            + scores.application * self.application
            + scores.demographic * self.demographic
            + scores.demonstrated_interest * self.demonstrated_interest
            + scores.contextual * self.contextual
    }
}

impl Default for ComponentWeights {
    fn default() -> Self {
        Self::holistic()
    }
}

impl From<ScoringProfile> for ComponentWeights {
    fn from(profile: ScoringProfile) -> Self {
        match profile {
            ScoringProfile::Holistic => Self::holistic(),
            ScoringProfile::Core => Self::core(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WeightsError {
    #[error("weight for {component} must be a finite non-negative number (found {weight})")]
    InvalidWeight {
        component: &'static str,
        weight: f64,
    },
    #[error("component weights must sum to 1.0 (found {sum:.4})")]
    DoesNotSumToOne { sum: f64 },
    #[error("round multiplier for {round} must be positive (found {multiplier})")]
    InvalidMultiplier { round: RoundKind, multiplier: f64 },
    #[error("regular decision is the 1.0 baseline (found {multiplier})")]
    RegularDecisionNotBaseline { multiplier: f64 },
}

/// Probability multiplier per application round. Rounds absent from the table use 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundMultipliers(BTreeMap<RoundKind, f64>);

impl RoundMultipliers {
    pub const REGULAR_DECISION: f64 = 1.0;

    pub fn get(&self, round: RoundKind) -> f64 {
        self.0
            .get(&round)
            .copied()
            .unwrap_or(Self::REGULAR_DECISION)
    }

    pub fn with(mut self, round: RoundKind, multiplier: f64) -> Self {
        self.0.insert(round, multiplier);
        self
    }

    fn validate(&self) -> Result<(), WeightsError> {
        for (round, multiplier) in &self.0 {
            if !multiplier.is_finite() || *multiplier <= 0.0 {
                return Err(WeightsError::InvalidMultiplier {
                    round: *round,
                    multiplier: *multiplier,
                });
            }
        }
        match self.0.get(&RoundKind::RegularDecision) {
            Some(&multiplier) if multiplier != Self::REGULAR_DECISION => {
                Err(WeightsError::RegularDecisionNotBaseline { multiplier })
            }
            _ => Ok(()),
        }
    }
}

impl Default for RoundMultipliers {
    fn default() -> Self {
        Self(BTreeMap::from([
            (RoundKind::EarlyDecision, 3.0),
            (RoundKind::EarlyDecisionI, 3.0),
            (RoundKind::EarlyDecisionII, 2.0),
            (RoundKind::RestrictiveEarlyAction, 2.5),
            (RoundKind::SingleChoiceEarlyAction, 2.5),
            (RoundKind::EarlyAction, 1.5),
            (RoundKind::RegularDecision, Self::REGULAR_DECISION),
            (RoundKind::Rolling, 1.2),
        ]))
    }
}

/// Share of the blended probability given to each source, keyed by which external
/// models produced an estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlendWeights {
    /// Both models available: neural network share.
    pub ensemble_neural_network: f64,
    /// Both models available: gradient-boosting share.
    pub ensemble_gradient_boosting: f64,
    /// Exactly one model available: that model's share; the engine keeps the rest.
    pub single_model: f64,
}

impl BlendWeights {
    pub fn ensemble_engine(&self) -> f64 {
        (1.0 - self.ensemble_neural_network - self.ensemble_gradient_boosting).max(0.0)
    }

    pub fn single_model_engine(&self) -> f64 {
        (1.0 - self.single_model).max(0.0)
    }
}

impl Default for BlendWeights {
    fn default() -> Self {
        Self {
            ensemble_neural_network: 0.40,
            ensemble_gradient_boosting: 0.30,
            single_model: 0.70,
        }
    }
}

/// Rubric configuration for the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationConfig {
    pub weights: ComponentWeights,
    pub round_multipliers: RoundMultipliers,
    pub blend: BlendWeights,
}

impl EvaluationConfig {
    pub fn for_profile(profile: ScoringProfile) -> Self {
        Self {
            weights: profile.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), WeightsError> {
        self.weights.validate()?;
        self.round_multipliers.validate()
    }
}
