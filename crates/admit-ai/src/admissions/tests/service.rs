use std::sync::Arc;

use super::common::*;
use crate::admissions::evaluation::{BlendMethod, ExternalEstimate};
use crate::admissions::service::AdmissionsServiceError;

#[test]
fn service_consults_predictor_when_caller_supplies_nothing() {
    let predictor = Arc::new(StubPredictor::returning(ExternalEstimate {
        neural_network: Some(0.5),
        gradient_boosting: None,
    }));
    let service = service_with(predictor.clone());

    let result = service.evaluate(&strong_profile(TOP_TECH), None);

    assert_eq!(predictor.call_count(), 1);
    let summary = result.probability_blend.expect("blended");
    assert_eq!(summary.method, BlendMethod::NeuralNetworkHybrid);
    assert_close(
        result.admission_probability,
        0.5 * 0.7 + summary.engine_probability * 0.3,
    );
}

#[test]
fn caller_estimate_takes_precedence_over_predictor() {
    let predictor = Arc::new(StubPredictor::returning(ExternalEstimate {
        neural_network: Some(0.5),
        gradient_boosting: None,
    }));
    let service = service_with(predictor.clone());
    let supplied = ExternalEstimate {
        neural_network: None,
        gradient_boosting: Some(0.3),
    };

    let result = service.evaluate(&strong_profile(TOP_TECH), Some(supplied));

    assert_eq!(predictor.call_count(), 0);
    assert_eq!(
        result.probability_blend.expect("blended").method,
        BlendMethod::GradientBoostingHybrid
    );
}

#[test]
fn predictor_failure_degrades_to_engine_probability() {
    let failing = service_with(Arc::new(StubPredictor::failing()));
    let plain = service();

    let degraded = failing.evaluate(&strong_profile(TOP_TECH), None);
    let baseline = plain.evaluate(&strong_profile(TOP_TECH), None);

    assert!(degraded.probability_blend.is_none());
    assert_eq!(degraded, baseline);
}

#[test]
fn reference_lookups_expose_catalog() {
    let service = service();

    let schools = service.schools();
    assert_eq!(schools.len(), 53);
    assert!(schools.windows(2).all(|pair| pair[0] <= pair[1]));

    let record = service.school("Duke University").expect("known school");
    assert_eq!(record.name, "Duke University");

    match service.school("Hogwarts") {
        Err(AdmissionsServiceError::UnknownSchool(name)) => assert_eq!(name, "Hogwarts"),
        other => panic!("expected unknown school, got {other:?}"),
    }

    assert_eq!(service.ap_subjects().len(), 38);
}
