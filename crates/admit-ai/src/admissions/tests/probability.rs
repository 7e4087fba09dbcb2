use super::common::*;
use crate::admissions::catalog::{RoundKind, SelectivityTier};
use crate::admissions::evaluation::probability::{
    base_probability, probability, round_impact, round_multiplier, MAX_PROBABILITY,
    MIN_PROBABILITY,
};
use crate::admissions::evaluation::{AdmissionDecision, RoundMultipliers};

#[test]
fn tier_curves_lift_the_base_rate() {
    let mut school = state_university();
    school.acceptance_rate = 0.1;

    let expectations = [
        (SelectivityTier::MostCompetitive, 0.1 + 0.25 * 0.7),
        (SelectivityTier::HighlyCompetitive, 0.1 + 0.5_f64.powf(1.5) * 0.75),
        (SelectivityTier::VeryCompetitive, 0.1 + 0.5_f64.powf(1.3) * 0.8),
        (SelectivityTier::Competitive, 0.1 + 0.5 * 0.82),
    ];
    for (tier, expected) in expectations {
        school.selectivity_tier = tier;
        assert_close(base_probability(50.0, &school), expected);
    }
}

#[test]
fn steeper_tiers_reward_the_same_score_less() {
    let mut school = state_university();
    school.acceptance_rate = 0.1;
    let mut previous = f64::MAX;
    for tier in [
        SelectivityTier::Competitive,
        SelectivityTier::VeryCompetitive,
        SelectivityTier::HighlyCompetitive,
        SelectivityTier::MostCompetitive,
    ] {
        school.selectivity_tier = tier;
        let probability = base_probability(60.0, &school);
        assert!(probability < previous, "{tier:?}");
        previous = probability;
    }
}

#[test]
fn probability_is_bounded_at_both_ends() {
    let mut school = state_university();
    school.acceptance_rate = 0.001;
    assert_eq!(base_probability(0.0, &school), MIN_PROBABILITY);

    school.acceptance_rate = 1.0;
    assert_eq!(base_probability(0.0, &school), MAX_PROBABILITY);
}

#[test]
fn unoffered_round_falls_back_to_regular_decision_multiplier() {
    let multipliers = RoundMultipliers::default();
    let mit = school(TOP_TECH);

    for round in RoundKind::ALL {
        let applied = round_multiplier(&mit, round, &multipliers);
        if mit.offers(round) {
            assert_eq!(applied, multipliers.get(round), "{round}");
        } else {
            assert_eq!(applied, 1.0, "{round}");
        }
    }
    assert_eq!(
        round_multiplier(&mit, RoundKind::EarlyDecision, &multipliers),
        1.0
    );
    assert_eq!(
        round_multiplier(&mit, RoundKind::EarlyAction, &multipliers),
        1.5
    );
}

#[test]
fn unoffered_round_ignores_configured_regular_decision_entry() {
    let multipliers = RoundMultipliers::default().with(RoundKind::RegularDecision, 0.5);
    let mit = school(TOP_TECH);

    assert!(!mit.offers(RoundKind::EarlyDecision));
    assert_eq!(
        round_multiplier(&mit, RoundKind::EarlyDecision, &multipliers),
        1.0
    );
}

#[test]
fn early_decision_one_is_honoured_where_early_decision_is_listed() {
    let multipliers = RoundMultipliers::default();
    let duke = school(EARLY_DECISION_SCHOOL);
    assert_eq!(
        round_multiplier(&duke, RoundKind::EarlyDecisionI, &multipliers),
        3.0
    );
    assert_eq!(
        round_multiplier(&duke, RoundKind::EarlyDecisionII, &multipliers),
        1.0
    );
}

#[test]
fn round_impact_records_before_and_after() {
    let duke = school(EARLY_DECISION_SCHOOL);
    let multipliers = RoundMultipliers::default();

    let impact = round_impact(40.0, &duke, RoundKind::EarlyDecision, &multipliers);
    assert_eq!(impact.round, RoundKind::EarlyDecision);
    assert_eq!(impact.multiplier, 3.0);
    assert_close(impact.final_probability, impact.base_probability * 3.0);

    let capped = round_impact(95.0, &duke, RoundKind::EarlyDecision, &multipliers);
    assert_eq!(capped.final_probability, MAX_PROBABILITY);
    assert_eq!(
        probability(95.0, &duke, RoundKind::EarlyDecision, &multipliers),
        MAX_PROBABILITY
    );
}

#[test]
fn decision_bands_follow_thresholds() {
    assert_eq!(AdmissionDecision::classify(0.95), AdmissionDecision::LikelyAdmit);
    assert_eq!(AdmissionDecision::classify(0.70), AdmissionDecision::LikelyAdmit);
    assert_eq!(AdmissionDecision::classify(0.6999), AdmissionDecision::Possible);
    assert_eq!(AdmissionDecision::classify(0.40), AdmissionDecision::Possible);
    assert_eq!(AdmissionDecision::classify(0.3999), AdmissionDecision::Reach);
    assert_eq!(AdmissionDecision::classify(0.15), AdmissionDecision::Reach);
    assert_eq!(AdmissionDecision::classify(0.1499), AdmissionDecision::Unlikely);
    assert_eq!(AdmissionDecision::classify(0.01), AdmissionDecision::Unlikely);
}

#[test]
fn decisions_serialize_with_display_labels() {
    let encoded = serde_json::to_string(&AdmissionDecision::LikelyAdmit).expect("serializes");
    assert_eq!(encoded, "\"Likely Admit\"");
    assert_eq!(AdmissionDecision::Unknown.to_string(), "Unknown");
}
