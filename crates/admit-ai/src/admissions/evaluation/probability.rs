use serde::{Deserialize, Serialize};

use super::super::catalog::{RoundKind, SchoolRecord, SelectivityTier};
use super::config::RoundMultipliers;

pub const MIN_PROBABILITY: f64 = 0.01;
pub const MAX_PROBABILITY: f64 = 0.95;

/// How the chosen application round moved the probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationRoundImpact {
    pub round: RoundKind,
    pub multiplier: f64,
    pub base_probability: f64,
    pub final_probability: f64,
}

pub(crate) fn clamp_probability(probability: f64) -> f64 {
    if probability.is_nan() {
        return MIN_PROBABILITY;
    }
    probability.clamp(MIN_PROBABILITY, MAX_PROBABILITY)
}

/// Exponent and ceiling of the curve lifting the base acceptance rate for a tier.
const fn tier_curve(tier: SelectivityTier) -> (f64, f64) {
    match tier {
        SelectivityTier::MostCompetitive => (2.0, 0.80),
        SelectivityTier::HighlyCompetitive => (1.5, 0.85),
        SelectivityTier::VeryCompetitive => (1.3, 0.90),
        SelectivityTier::Competitive => (1.0, 0.92),
    }
}

/// Probability before any round adjustment, in [0.01, 0.95].
pub fn base_probability(total_score: f64, school: &SchoolRecord) -> f64 {
    let normalized = (total_score / 100.0).clamp(0.0, 1.0);
    let (exponent, ceiling) = tier_curve(school.selectivity_tier);
    let base_rate = school.acceptance_rate;
    clamp_probability(base_rate + normalized.powf(exponent) * (ceiling - base_rate))
}

/// Configured multiplier for `round`, or the 1.0 regular-decision baseline when the
/// school does not offer it.
pub fn round_multiplier(
    school: &SchoolRecord,
    round: RoundKind,
    multipliers: &RoundMultipliers,
) -> f64 {
    if school.offers(round) {
        multipliers.get(round)
    } else {
        RoundMultipliers::REGULAR_DECISION
    }
}

pub fn round_impact(
    total_score: f64,
    school: &SchoolRecord,
    round: RoundKind,
    multipliers: &RoundMultipliers,
) -> ApplicationRoundImpact {
    let base = base_probability(total_score, school);
    let multiplier = round_multiplier(school, round, multipliers);
    ApplicationRoundImpact {
        round,
        multiplier,
        base_probability: base,
        final_probability: clamp_probability(base * multiplier),
    }
}

pub fn probability(
    total_score: f64,
    school: &SchoolRecord,
    round: RoundKind,
    multipliers: &RoundMultipliers,
) -> f64 {
    round_impact(total_score, school, round, multipliers).final_probability
}
