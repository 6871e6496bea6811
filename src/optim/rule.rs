use serde::{Serialize, Deserialize};
use std::str::FromStr;

use crate::activation::activation::ActivationFunction;
use crate::error::NetworkError;

/// Selects which weight-update formula the trainer applies.
///
/// - `Perceptron` — update proportional to error × input sample.
/// - `Adaline`    — the same update additionally scaled by the activation
///   derivative at the current net value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingRule {
    Perceptron,
    Adaline,
}

impl TrainingRule {
    /// Produces the replacement weight for one input column.
    pub fn update_weight(
        &self,
        old_weight: f64,
        learning_rate: f64,
        error: f64,
        train_sample: f64,
        activation: &ActivationFunction,
        net_value: f64,
    ) -> f64 {
        match self {
            TrainingRule::Perceptron => old_weight + learning_rate * error * train_sample,
            TrainingRule::Adaline => {
                old_weight
                    + learning_rate * error * train_sample * activation.derivative(net_value)
            }
        }
    }
}

impl FromStr for TrainingRule {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "perceptron" => Ok(TrainingRule::Perceptron),
            "adaline" => Ok(TrainingRule::Adaline),
            other => Err(NetworkError::InvalidInput(format!(
                "unknown training rule `{other}`"
            ))),
        }
    }
}
