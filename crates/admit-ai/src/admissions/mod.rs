//! College admissions evaluation: reference catalog, scoring engine, narrative, and the
//! service/router pair that exposes them.

pub mod catalog;
pub mod domain;
pub mod evaluation;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use catalog::{
    ap_subjects, CatalogImportError, RoundKind, SchoolCatalog, SchoolRecord, SelectivityTier,
};
pub use domain::{
    Activity, ApCourse, ApplicantProfile, Competition, CurriculumDifficulty,
    DemonstratedInterest, GpaTrend, GradeLevel, LanguageProficiency, SubjectTestScore,
};
pub use evaluation::{
    AdmissionDecision, AdmissionsEngine, ApplicationRoundImpact, BlendSummary, ComponentScores,
    ComponentWeights, EvaluationConfig, EvaluationResult, ExternalEstimate, ScoringProfile,
    WeightsError,
};
pub use router::admissions_router;
pub use service::{
    AdmissionsService, AdmissionsServiceError, ExternalPredictor, NoExternalPredictor,
    PredictorError,
};
