use crate::activation::activation::ActivationFunction;
use crate::layers::input::InputLayer;
use crate::math::matrix::Matrix;
use crate::network::spec::TrainSpec;
use crate::optim::rule::TrainingRule;

/// Complete state of a single-layer network: training data, current
/// input layer, hyperparameters, and the running history of a training
/// run.
///
/// The trainer takes a `Network` by value and hands back the updated
/// state, so two callers can never train the same instance at once.
#[derive(Debug, Clone)]
pub struct Network {
    /// rows × columns feature matrix; one row per training sample.
    pub training_set: Matrix,
    /// One target scalar per training row (single-output architectures).
    pub target_output_set: Vec<f64>,
    /// rows × outputs target matrix (multi-output architectures); only
    /// the reporting pass reads it.
    pub target_output_matrix: Matrix,
    /// Current input layer; replaced wholesale on every weight update.
    pub input_layer: InputLayer,
    pub learning_rate: f64,
    pub max_epochs: usize,
    /// Per-row tolerance below which no weight update is triggered.
    pub target_error: f64,
    pub training_rule: TrainingRule,
    pub activation: ActivationFunction,
    /// One entry per completed epoch: the squared error of the final
    /// sample processed in that epoch. Not an epoch-wide mean, despite
    /// the name.
    pub mean_squared_error_list: Vec<f64>,
    /// Signed error of the last sample of the last epoch.
    pub training_error: f64,
    /// Estimated outputs appended by the single-layer reporting pass.
    pub estimated_output_as_array: Vec<f64>,
}

impl Network {
    /// Builds a network with a randomly initialized input layer sized to
    /// the training matrix.
    pub fn new(
        training_set: Matrix,
        target_output_set: Vec<f64>,
        learning_rate: f64,
        max_epochs: usize,
        target_error: f64,
        training_rule: TrainingRule,
        activation: ActivationFunction,
    ) -> Network {
        let input_layer = InputLayer::random(training_set.cols);

        Network {
            training_set,
            target_output_set,
            target_output_matrix: Matrix::default(),
            input_layer,
            learning_rate,
            max_epochs,
            target_error,
            training_rule,
            activation,
            mean_squared_error_list: Vec::new(),
            training_error: 0.0,
            estimated_output_as_array: Vec::new(),
        }
    }

    /// Builds a network from a serializable training specification.
    pub fn from_spec(
        spec: &TrainSpec,
        training_set: Matrix,
        target_output_set: Vec<f64>,
    ) -> Network {
        Network::new(
            training_set,
            target_output_set,
            spec.learning_rate,
            spec.max_epochs,
            spec.target_error,
            spec.training_rule,
            spec.activation.clone(),
        )
    }

    /// Replaces the random input layer, e.g. with fixed weights.
    pub fn with_input_layer(mut self, input_layer: InputLayer) -> Network {
        self.input_layer = input_layer;
        self
    }

    /// Attaches a rows × outputs target matrix for multi-output reporting.
    pub fn with_target_matrix(mut self, target_output_matrix: Matrix) -> Network {
        self.target_output_matrix = target_output_matrix;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sizes_the_input_layer_to_the_feature_columns() {
        let network = Network::new(
            Matrix::from_data(vec![vec![0.0, 1.0, 2.0]]),
            vec![1.0],
            0.1,
            10,
            0.0,
            TrainingRule::Perceptron,
            ActivationFunction::Step,
        );
        assert_eq!(network.input_layer.neurons.len(), 3);
        assert_eq!(network.input_layer.neuron_count, 4);
        assert!(network.mean_squared_error_list.is_empty());
    }

    #[test]
    fn from_spec_copies_the_hyperparameters() {
        let spec = TrainSpec {
            name: "demo".to_string(),
            training_rule: TrainingRule::Adaline,
            activation: ActivationFunction::Sigmoid,
            learning_rate: 0.05,
            max_epochs: 25,
            target_error: 0.01,
        };
        let network = Network::from_spec(
            &spec,
            Matrix::from_data(vec![vec![1.0], vec![2.0]]),
            vec![0.0, 1.0],
        );
        assert_eq!(network.training_rule, TrainingRule::Adaline);
        assert_eq!(network.activation, ActivationFunction::Sigmoid);
        assert_eq!(network.learning_rate, 0.05);
        assert_eq!(network.max_epochs, 25);
        assert_eq!(network.target_error, 0.01);
    }
}
