mod blend;
mod config;
mod keywords;
mod narrative;
mod policy;
pub mod probability;
pub mod rules;

pub use blend::{blend, blend_probability, BlendMethod, BlendSummary, ExternalEstimate};
pub use config::{
    BlendWeights, ComponentWeights, EvaluationConfig, RoundMultipliers, ScoringProfile,
    UnknownScoringProfile, WeightsError,
};
pub use keywords::{MajorCategory, MAJOR_CATEGORIES};
pub use policy::AdmissionDecision;
pub use probability::ApplicationRoundImpact;

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::catalog::SchoolCatalog;
use super::domain::ApplicantProfile;

const UNKNOWN_SCHOOL_ADVICE: &str = "Please select a school from the available list";

/// Stateless evaluator that applies the rubric configuration to a profile against the
/// shared catalog.
#[derive(Debug, Clone)]
pub struct AdmissionsEngine {
    catalog: Arc<SchoolCatalog>,
    config: EvaluationConfig,
}

impl AdmissionsEngine {
    pub fn new(catalog: Arc<SchoolCatalog>, config: EvaluationConfig) -> Result<Self, WeightsError> {
        config.validate()?;
        Ok(Self { catalog, config })
    }

    pub fn config(&self) -> &EvaluationConfig {
        &self.config
    }

    pub fn catalog(&self) -> &SchoolCatalog {
        &self.catalog
    }

    pub fn evaluate(&self, profile: &ApplicantProfile) -> EvaluationResult {
        self.evaluate_with_estimate(profile, None)
    }

    /// Evaluate and, when `estimate` carries at least one model probability, blend it
    /// into the final probability.
    pub fn evaluate_with_estimate(
        &self,
        profile: &ApplicantProfile,
        estimate: Option<&ExternalEstimate>,
    ) -> EvaluationResult {
        let Some(school) = self.catalog.lookup(&profile.target_school) else {
            debug!(school = %profile.target_school, "target school not in catalog");
            return EvaluationResult::unknown_school(&profile.target_school);
        };

        let scores = rules::score_profile(profile, school, &self.config.weights);
        let round_impact = probability::round_impact(
            scores.total,
            school,
            profile.application_round,
            &self.config.round_multipliers,
        );

        let probability_blend = estimate
            .filter(|estimate| !estimate.is_empty())
            .map(|estimate| {
                blend(
                    round_impact.final_probability,
                    Some(estimate),
                    &self.config.blend,
                )
            });
        let admission_probability = probability_blend
            .as_ref()
            .map_or(round_impact.final_probability, |summary| {
                summary.final_probability
            });

        debug!(
            school = %school.name,
            total = scores.total,
            base_probability = round_impact.base_probability,
            multiplier = round_impact.multiplier,
            probability = admission_probability,
            "evaluated applicant"
        );

        let findings = narrative::analyze_profile(profile, school, &scores);
        let reasoning = narrative::reasoning(school, admission_probability, &findings);
        let advice = narrative::advice(school, &findings.weaknesses);

        EvaluationResult {
            decision: AdmissionDecision::classify(admission_probability),
            admission_probability,
            reasoning,
            detailed_analysis: narrative::detailed_analysis(school, &scores),
            strengths: findings.strengths,
            weaknesses: findings.weaknesses,
            score_breakdown: Some(scores),
            advice,
            fit_analysis: narrative::fit_analysis(profile, school),
            application_round_impact: Some(round_impact),
            probability_blend,
        }
    }
}

/// Component scores in [0, 100] plus their weighted total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentScores {
    pub academic: f64,
    pub major_alignment: f64,
    pub extracurricular: f64,
    pub application: f64,
    pub demographic: f64,
    pub demonstrated_interest: f64,
    pub contextual: f64,
    pub total: f64,
}

/// Explained outcome of one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub decision: AdmissionDecision,
    pub admission_probability: f64,
    pub reasoning: Vec<String>,
    pub detailed_analysis: BTreeMap<String, String>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub score_breakdown: Option<ComponentScores>,
    pub advice: Vec<String>,
    pub fit_analysis: BTreeMap<String, String>,
    pub application_round_impact: Option<ApplicationRoundImpact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probability_blend: Option<BlendSummary>,
}

impl EvaluationResult {
    pub fn unknown_school(name: &str) -> Self {
        Self {
            decision: AdmissionDecision::Unknown,
            admission_probability: 0.0,
            reasoning: vec![format!("School '{name}' not found in database")],
            detailed_analysis: BTreeMap::new(),
            strengths: Vec::new(),
            weaknesses: Vec::new(),
            score_breakdown: None,
            advice: vec![UNKNOWN_SCHOOL_ADVICE.to_string()],
            fit_analysis: BTreeMap::new(),
            application_round_impact: None,
            probability_blend: None,
        }
    }

    pub fn is_unknown_school(&self) -> bool {
        self.decision == AdmissionDecision::Unknown
    }
}
