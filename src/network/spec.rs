use serde::{Serialize, Deserialize};
use crate::activation::activation::ActivationFunction;
use crate::optim::rule::TrainingRule;

/// A fully serializable description of a training run: the rule and
/// activation selectors plus the scalar hyperparameters.
///
/// `TrainSpec` can be saved to / loaded from JSON independently of any
/// training data, making it possible to store run configurations before
/// training starts. Trained weights are never written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainSpec {
    /// Human-readable name used as the config file stem.
    pub name: String,
    pub training_rule: TrainingRule,
    pub activation: ActivationFunction,
    pub learning_rate: f64,
    pub max_epochs: usize,
    pub target_error: f64,
}

impl TrainSpec {
    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a `TrainSpec` from a JSON file.
    pub fn load_json(path: &str) -> std::io::Result<TrainSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}
