use serde::{Serialize, Deserialize};
use std::f64::consts::E;
use std::str::FromStr;

use crate::error::NetworkError;

/// Forward activation functions paired with their derivatives.
///
/// `Step` is flat almost everywhere, so its derivative is zero; pair it
/// with the perceptron rule, which never consults the derivative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationFunction {
    Step,
    Identity,
    Sigmoid,
    Tanh,
}

impl ActivationFunction {
    /// Element-wise activation.
    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Step => if x > 0.0 { 1.0 } else { 0.0 },
            ActivationFunction::Identity => x,
            ActivationFunction::Sigmoid => 1.0 / (1.0 + E.powf(-x)),
            ActivationFunction::Tanh => x.tanh(),
        }
    }

    /// Element-wise derivative of the activation.
    pub fn derivative(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Step => 0.0,
            ActivationFunction::Identity => 1.0,
            ActivationFunction::Sigmoid => {
                let fx = self.function(x);
                fx * (1.0 - fx)
            }
            ActivationFunction::Tanh => {
                let t = x.tanh();
                1.0 - t * t
            }
        }
    }
}

impl FromStr for ActivationFunction {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "step" => Ok(ActivationFunction::Step),
            "identity" => Ok(ActivationFunction::Identity),
            "sigmoid" => Ok(ActivationFunction::Sigmoid),
            "tanh" => Ok(ActivationFunction::Tanh),
            other => Err(NetworkError::UnsupportedActivation(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_thresholds_at_zero() {
        let f = ActivationFunction::Step;
        assert_eq!(f.function(0.3), 1.0);
        assert_eq!(f.function(0.0), 0.0);
        assert_eq!(f.function(-0.3), 0.0);
    }

    #[test]
    fn sigmoid_is_centered_at_one_half() {
        let f = ActivationFunction::Sigmoid;
        assert!((f.function(0.0) - 0.5).abs() < 1e-9);
        assert!((f.derivative(0.0) - 0.25).abs() < 1e-9);
    }

    #[test]
    fn tanh_derivative_peaks_at_zero() {
        let f = ActivationFunction::Tanh;
        assert!((f.derivative(0.0) - 1.0).abs() < 1e-9);
        assert!(f.derivative(2.0) < 1.0);
    }

    #[test]
    fn identity_passes_values_through() {
        let f = ActivationFunction::Identity;
        assert_eq!(f.function(-1.25), -1.25);
        assert_eq!(f.derivative(-1.25), 1.0);
    }

    #[test]
    fn selectors_parse_from_snake_case_names() {
        assert_eq!("step".parse::<ActivationFunction>().unwrap(), ActivationFunction::Step);
        assert_eq!("tanh".parse::<ActivationFunction>().unwrap(), ActivationFunction::Tanh);
    }

    #[test]
    fn unknown_selectors_are_rejected() {
        let err = "softplus".parse::<ActivationFunction>().unwrap_err();
        assert!(matches!(err, NetworkError::UnsupportedActivation(_)));
    }
}
