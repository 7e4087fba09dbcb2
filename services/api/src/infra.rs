use admit_ai::admissions::{
    AdmissionsService, EvaluationConfig, NoExternalPredictor, SchoolCatalog, ScoringProfile,
};
use admit_ai::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) type DefaultAdmissionsService = AdmissionsService<NoExternalPredictor>;

/// Load the catalog from `path`, or the built-in catalog when no path is configured.
pub(crate) fn load_catalog(path: Option<&Path>) -> Result<Arc<SchoolCatalog>, AppError> {
    let catalog = match path {
        Some(path) => {
            let catalog = SchoolCatalog::from_path(path)?;
            info!(path = %path.display(), schools = catalog.len(), "loaded school catalog");
            catalog
        }
        None => SchoolCatalog::builtin(),
    };
    Ok(Arc::new(catalog))
}

pub(crate) fn build_service(
    catalog: Arc<SchoolCatalog>,
    profile: ScoringProfile,
) -> Result<Arc<DefaultAdmissionsService>, AppError> {
    let service = AdmissionsService::new(
        catalog,
        EvaluationConfig::for_profile(profile),
        Arc::new(NoExternalPredictor),
    )?;
    Ok(Arc::new(service))
}

pub(crate) fn parse_scoring_profile(raw: &str) -> Result<ScoringProfile, String> {
    raw.parse::<ScoringProfile>()
        .map_err(|err| format!("{err} (expected holistic or core)"))
}
