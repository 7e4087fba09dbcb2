use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::response::Response;
use serde_json::Value;

use crate::admissions::catalog::{RoundKind, SchoolCatalog, SchoolRecord, SelectivityTier};
use crate::admissions::domain::{
    Activity, ApCourse, ApplicantProfile, Competition, CurriculumDifficulty,
    DemonstratedInterest, GpaTrend, LanguageProficiency,
};
use crate::admissions::evaluation::{AdmissionsEngine, EvaluationConfig, ExternalEstimate};
use crate::admissions::service::{AdmissionsService, ExternalPredictor, PredictorError};

pub(super) const TOP_TECH: &str = "MIT";
pub(super) const EARLY_DECISION_SCHOOL: &str = "Duke University";

pub(super) fn catalog() -> Arc<SchoolCatalog> {
    Arc::new(SchoolCatalog::builtin())
}

pub(super) fn engine() -> AdmissionsEngine {
    AdmissionsEngine::new(catalog(), EvaluationConfig::default()).expect("default weights valid")
}

pub(super) fn school(name: &str) -> SchoolRecord {
    SchoolCatalog::builtin()
        .lookup(name)
        .cloned()
        .expect("school in builtin catalog")
}

/// Small synthetic school for isolating rules.
pub(super) fn state_university() -> SchoolRecord {
    SchoolRecord {
        name: "State University".to_string(),
        rank: None,
        acceptance_rate: 0.5,
        avg_gpa_unweighted: 3.5,
        avg_gpa_weighted: 4.0,
        sat_25th: 1200,
        sat_75th: 1400,
        act_range: (25, 31),
        selectivity_tier: SelectivityTier::Competitive,
        values_demonstrated_interest: true,
        need_blind: false,
        available_application_rounds: [RoundKind::EarlyAction, RoundKind::RegularDecision]
            .into_iter()
            .collect(),
        popular_majors: Vec::new(),
    }
}

fn ap(subject: &str, score: u8) -> ApCourse {
    ApCourse {
        subject: subject.to_string(),
        score,
    }
}

fn activity(name: &str, role: &str) -> Activity {
    Activity {
        name: name.to_string(),
        role: role.to_string(),
        description: String::new(),
    }
}

fn competition(name: &str, level: &str) -> Competition {
    Competition {
        name: name.to_string(),
        level: level.to_string(),
        award: String::new(),
    }
}

/// Bare profile: every optional fact absent, average materials.
pub(super) fn minimal_profile(target_school: &str) -> ApplicantProfile {
    ApplicantProfile {
        gpa_unweighted: 3.5,
        gpa_weighted: None,
        gpa_trend: GpaTrend::Stable,
        gpa_by_year: BTreeMap::new(),
        class_rank: None,
        class_size: None,
        sat_score: None,
        act_score: None,
        sat_subject_tests: Vec::new(),
        ap_courses: Vec::new(),
        ib_diploma: false,
        ib_score: None,
        curriculum_difficulty: CurriculumDifficulty::Unspecified,
        language: LanguageProficiency::default(),
        extracurriculars: Vec::new(),
        competitions: Vec::new(),
        research_experience: String::new(),
        lor_quality: 3,
        essay_quality: 3,
        interest: DemonstratedInterest::default(),
        country: "United States".to_string(),
        state_province: "Ohio".to_string(),
        first_generation: false,
        legacy_status: false,
        recruited_athlete: false,
        fee_waiver: false,
        family_income_bracket: None,
        high_school_type: None,
        target_school: target_school.to_string(),
        target_major: String::new(),
        application_round: RoundKind::RegularDecision,
    }
}

/// 3.95 GPA, 1580 SAT, ten AP fives, very high rigor, computer science applicant.
pub(super) fn strong_profile(target_school: &str) -> ApplicantProfile {
    ApplicantProfile {
        gpa_unweighted: 3.95,
        sat_score: Some(1580),
        ap_courses: vec![
            ap("AP Calculus BC", 5),
            ap("AP Physics C: Mechanics", 5),
            ap("AP Chemistry", 5),
            ap("AP Computer Science A", 5),
            ap("AP English Language and Composition", 5),
            ap("AP United States History", 5),
            ap("AP Spanish Language and Culture", 5),
            ap("AP Psychology", 5),
            ap("AP Macroeconomics", 5),
            ap("AP Art History", 5),
        ],
        curriculum_difficulty: CurriculumDifficulty::VeryHigh,
        extracurriculars: vec![
            activity("Robotics Team", "Captain"),
            activity("Hackathon Club", "Organizer"),
            activity("Varsity Soccer", "Midfielder"),
            activity("Youth Orchestra", "Violinist"),
            activity("Library Volunteer", "Volunteer"),
        ],
        competitions: vec![
            competition("USA Computing Olympiad", "National"),
            competition("State Science Fair", "State"),
            competition("Regional Math League", "Regional"),
        ],
        lor_quality: 4,
        essay_quality: 4,
        state_province: "Massachusetts".to_string(),
        target_major: "Computer Science".to_string(),
        ..minimal_profile(target_school)
    }
}

pub(super) fn service() -> Arc<AdmissionsService<StubPredictor>> {
    service_with(Arc::new(StubPredictor::default()))
}

pub(super) fn service_with(
    predictor: Arc<StubPredictor>,
) -> Arc<AdmissionsService<StubPredictor>> {
    Arc::new(
        AdmissionsService::new(catalog(), EvaluationConfig::default(), predictor)
            .expect("service builds"),
    )
}

/// Predictor returning a canned answer and counting calls.
#[derive(Default)]
pub(super) struct StubPredictor {
    pub answer: Option<ExternalEstimate>,
    pub fail: bool,
    pub calls: Mutex<u32>,
}

impl StubPredictor {
    pub fn returning(estimate: ExternalEstimate) -> Self {
        Self {
            answer: Some(estimate),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn call_count(&self) -> u32 {
        *self.calls.lock().expect("lock")
    }
}

impl ExternalPredictor for StubPredictor {
    fn predict(
        &self,
        _profile: &ApplicantProfile,
    ) -> Result<Option<ExternalEstimate>, PredictorError> {
        *self.calls.lock().expect("lock") += 1;
        if self.fail {
            return Err(PredictorError::Unavailable("model offline".to_string()));
        }
        Ok(self.answer)
    }
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

pub(super) async fn json_body(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let value = serde_json::from_slice(&bytes).expect("json body");
    (status, value)
}
