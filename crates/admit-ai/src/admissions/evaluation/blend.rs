use serde::{Deserialize, Serialize};

use super::config::BlendWeights;
use super::probability::clamp_probability;

/// Confidence reported when only one source produced a probability.
const SINGLE_SOURCE_CONFIDENCE: f64 = 0.7;

/// Probabilities produced outside the rule engine, each in [0, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ExternalEstimate {
    #[serde(default)]
    pub neural_network: Option<f64>,
    #[serde(default)]
    pub gradient_boosting: Option<f64>,
}

impl ExternalEstimate {
    pub fn is_empty(&self) -> bool {
        usable(self.neural_network).is_none() && usable(self.gradient_boosting).is_none()
    }
}

fn usable(probability: Option<f64>) -> Option<f64> {
    probability
        .filter(|value| value.is_finite())
        .map(|value| value.clamp(0.0, 1.0))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendMethod {
    EngineOnly,
    NeuralNetworkHybrid,
    GradientBoostingHybrid,
    FullEnsemble,
}

/// Audit trail for a blended probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlendSummary {
    pub method: BlendMethod,
    pub engine_probability: f64,
    pub engine_weight: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neural_network_probability: Option<f64>,
    pub neural_network_weight: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient_boosting_probability: Option<f64>,
    pub gradient_boosting_weight: f64,
    pub final_probability: f64,
    /// Agreement between sources: 1 - min(2 * stddev, 1).
    pub confidence: f64,
}

pub fn blend(
    engine_probability: f64,
    estimate: Option<&ExternalEstimate>,
    weights: &BlendWeights,
) -> BlendSummary {
    let neural_network = estimate.and_then(|estimate| usable(estimate.neural_network));
    let gradient_boosting = estimate.and_then(|estimate| usable(estimate.gradient_boosting));

    let (method, engine_weight, nn_weight, gb_weight) = match (neural_network, gradient_boosting) {
        (Some(_), Some(_)) => (
            BlendMethod::FullEnsemble,
            weights.ensemble_engine(),
            weights.ensemble_neural_network,
            weights.ensemble_gradient_boosting,
        ),
        (Some(_), None) => (
            BlendMethod::NeuralNetworkHybrid,
            weights.single_model_engine(),
            weights.single_model,
            0.0,
        ),
        (None, Some(_)) => (
            BlendMethod::GradientBoostingHybrid,
            weights.single_model_engine(),
            0.0,
            weights.single_model,
        ),
        (None, None) => (BlendMethod::EngineOnly, 1.0, 0.0, 0.0),
    };

    let final_probability = if method == BlendMethod::EngineOnly {
        engine_probability
    } else {
        clamp_probability(
            engine_probability * engine_weight
                + neural_network.unwrap_or(0.0) * nn_weight
                + gradient_boosting.unwrap_or(0.0) * gb_weight,
        )
    };

    let sources: Vec<f64> = std::iter::once(engine_probability)
        .chain(neural_network)
        .chain(gradient_boosting)
        .collect();

    BlendSummary {
        method,
        engine_probability,
        engine_weight,
        neural_network_probability: neural_network,
        neural_network_weight: nn_weight,
        gradient_boosting_probability: gradient_boosting,
        gradient_boosting_weight: gb_weight,
        final_probability,
        confidence: agreement(&sources),
    }
}

/// Pure blending step: the engine probability is returned unchanged when no external
/// estimate is usable.
pub fn blend_probability(
    engine_probability: f64,
    estimate: Option<&ExternalEstimate>,
    weights: &BlendWeights,
) -> f64 {
    blend(engine_probability, estimate, weights).final_probability
}

fn agreement(sources: &[f64]) -> f64 {
    if sources.len() < 2 {
        return SINGLE_SOURCE_CONFIDENCE;
    }
    let count = sources.len() as f64;
    let mean = sources.iter().sum::<f64>() / count;
    let variance = sources
        .iter()
        .map(|value| (value - mean).powi(2))
        .sum::<f64>()
        / count;
    1.0 - (2.0 * variance.sqrt()).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weights() -> BlendWeights {
        BlendWeights::default()
    }

    #[test]
    fn absent_estimate_leaves_engine_probability_untouched() {
        let summary = blend(0.37, None, &weights());
        assert_eq!(summary.method, BlendMethod::EngineOnly);
        assert_eq!(summary.final_probability, 0.37);
        assert_eq!(summary.confidence, SINGLE_SOURCE_CONFIDENCE);

        let empty = ExternalEstimate::default();
        assert_eq!(blend_probability(0.37, Some(&empty), &weights()), 0.37);
    }

    #[test]
    fn full_ensemble_uses_forty_thirty_thirty() {
        let estimate = ExternalEstimate {
            neural_network: Some(0.5),
            gradient_boosting: Some(0.2),
        };
        let summary = blend(0.3, Some(&estimate), &weights());
        assert_eq!(summary.method, BlendMethod::FullEnsemble);
        let expected = 0.5 * 0.4 + 0.2 * 0.3 + 0.3 * 0.3;
        assert!((summary.final_probability - expected).abs() < 1e-9);
        assert!(summary.confidence > 0.0 && summary.confidence < 1.0);
    }

    #[test]
    fn single_model_takes_seventy_percent() {
        let estimate = ExternalEstimate {
            neural_network: None,
            gradient_boosting: Some(0.6),
        };
        let summary = blend(0.2, Some(&estimate), &weights());
        assert_eq!(summary.method, BlendMethod::GradientBoostingHybrid);
        assert!((summary.final_probability - (0.6 * 0.7 + 0.2 * 0.3)).abs() < 1e-9);
    }

    #[test]
    fn blended_probability_is_clamped_and_ignores_non_finite_inputs() {
        let estimate = ExternalEstimate {
            neural_network: Some(1.5),
            gradient_boosting: Some(f64::NAN),
        };
        let summary = blend(0.95, Some(&estimate), &weights());
        assert_eq!(summary.method, BlendMethod::NeuralNetworkHybrid);
        assert_eq!(summary.neural_network_probability, Some(1.0));
        assert_eq!(summary.final_probability, 0.95);
    }

    #[test]
    fn identical_sources_have_full_confidence() {
        let estimate = ExternalEstimate {
            neural_network: Some(0.4),
            gradient_boosting: Some(0.4),
        };
        let confidence = blend(0.4, Some(&estimate), &weights()).confidence;
        assert!((confidence - 1.0).abs() < 1e-9);
    }
}
