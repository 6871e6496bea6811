pub mod math;
pub mod activation;
pub mod layers;
pub mod network;
pub mod optim;
pub mod train;
pub mod error;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::activation::ActivationFunction;
pub use layers::input::{InputLayer, Neuron};
pub use network::network::Network;
pub use network::spec::TrainSpec;
pub use optim::rule::TrainingRule;
pub use train::trainer::train_network;
pub use train::report::{print_trained_network, RowDiagnostic};
pub use error::NetworkError;
