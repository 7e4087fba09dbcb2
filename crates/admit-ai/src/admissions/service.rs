use std::sync::Arc;

use tracing::{info, warn};

use super::catalog::{ap_subjects, SchoolCatalog, SchoolRecord};
use super::domain::ApplicantProfile;
use super::evaluation::{
    AdmissionsEngine, EvaluationConfig, EvaluationResult, ExternalEstimate, WeightsError,
};

/// Source of model-based probabilities blended with the rule engine.
pub trait ExternalPredictor: Send + Sync {
    fn predict(&self, profile: &ApplicantProfile) -> Result<Option<ExternalEstimate>, PredictorError>;
}

/// Predictor used when no model is deployed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoExternalPredictor;

impl ExternalPredictor for NoExternalPredictor {
    fn predict(&self, _profile: &ApplicantProfile) -> Result<Option<ExternalEstimate>, PredictorError> {
        Ok(None)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PredictorError {
    #[error("predictor unavailable: {0}")]
    Unavailable(String),
    #[error("predictor failed: {0}")]
    Failed(String),
}

/// Facade composing the shared catalog, the engine, and an optional predictor.
pub struct AdmissionsService<P> {
    engine: Arc<AdmissionsEngine>,
    predictor: Arc<P>,
}

impl<P> AdmissionsService<P>
where
    P: ExternalPredictor + 'static,
{
    pub fn new(
        catalog: Arc<SchoolCatalog>,
        config: EvaluationConfig,
        predictor: Arc<P>,
    ) -> Result<Self, AdmissionsServiceError> {
        let engine = AdmissionsEngine::new(catalog, config)?;
        info!(schools = engine.catalog().len(), "admissions engine ready");
        Ok(Self {
            engine: Arc::new(engine),
            predictor,
        })
    }

    pub fn engine(&self) -> &AdmissionsEngine {
        &self.engine
    }

    /// Evaluate a profile. A caller-supplied estimate takes precedence over the
    /// predictor; predictor failures degrade to the engine probability alone.
    pub fn evaluate(
        &self,
        profile: &ApplicantProfile,
        estimate: Option<ExternalEstimate>,
    ) -> EvaluationResult {
        let estimate = estimate.or_else(|| match self.predictor.predict(profile) {
            Ok(estimate) => estimate,
            Err(error) => {
                warn!(%error, school = %profile.target_school, "external predictor failed; using engine probability");
                None
            }
        });

        let result = self
            .engine
            .evaluate_with_estimate(profile, estimate.as_ref());
        info!(
            school = %profile.target_school,
            decision = %result.decision,
            probability = result.admission_probability,
            "admissions evaluation complete"
        );
        result
    }

    pub fn schools(&self) -> Vec<String> {
        self.engine
            .catalog()
            .list_names()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn school(&self, name: &str) -> Result<SchoolRecord, AdmissionsServiceError> {
        self.engine
            .catalog()
            .lookup(name)
            .cloned()
            .ok_or_else(|| AdmissionsServiceError::UnknownSchool(name.to_string()))
    }

    pub fn ap_subjects(&self) -> &'static [&'static str] {
        ap_subjects()
    }
}

/// Error raised by the admissions service.
#[derive(Debug, thiserror::Error)]
pub enum AdmissionsServiceError {
    #[error(transparent)]
    Weights(#[from] WeightsError),
    #[error("school '{0}' not found")]
    UnknownSchool(String),
}
