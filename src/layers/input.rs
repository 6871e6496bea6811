use rand::prelude::*;
use std::fmt;

/// One unit of the input layer, holding the weight of its single
/// incoming connection.
#[derive(Debug, Clone, PartialEq)]
pub struct Neuron {
    pub weight: f64,
}

impl Neuron {
    pub fn new(weight: f64) -> Neuron {
        Neuron { weight }
    }
}

/// The input layer: one neuron per feature column plus an implicit bias
/// unit that is counted in `neuron_count` but not stored.
///
/// Training never mutates a layer in place; every weight update builds a
/// full replacement through `from_neurons`.
#[derive(Debug, Clone, PartialEq)]
pub struct InputLayer {
    pub neurons: Vec<Neuron>,
    pub neuron_count: usize,
}

impl InputLayer {
    /// Builds a layer of `feature_count` neurons with uniform random
    /// weights in [-1, 1). The bias unit raises `neuron_count` by one.
    pub fn random(feature_count: usize) -> InputLayer {
        let mut rng = rand::thread_rng();
        let neurons = (0..feature_count)
            .map(|_| Neuron::new(rng.gen::<f64>() * 2.0 - 1.0))
            .collect();

        InputLayer {
            neurons,
            neuron_count: feature_count + 1,
        }
    }

    /// Wraps an explicit neuron list, e.g. a replacement layer produced
    /// during training. No bias unit is added to the count here.
    pub fn from_neurons(neurons: Vec<Neuron>) -> InputLayer {
        let neuron_count = neurons.len();
        InputLayer { neurons, neuron_count }
    }
}

impl fmt::Display for InputLayer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, " ~ [input layer] ~")?;
        for (n, neuron) in self.neurons.iter().enumerate() {
            writeln!(f, "neuron #{}: weight {:.6}", n + 1, neuron.weight)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_layer_counts_the_bias_unit() {
        let layer = InputLayer::random(4);
        assert_eq!(layer.neurons.len(), 4);
        assert_eq!(layer.neuron_count, 5);
    }

    #[test]
    fn random_weights_stay_in_range() {
        let layer = InputLayer::random(32);
        assert!(layer
            .neurons
            .iter()
            .all(|n| n.weight >= -1.0 && n.weight < 1.0));
    }

    #[test]
    fn explicit_layers_count_only_their_neurons() {
        let layer = InputLayer::from_neurons(vec![Neuron::new(0.1), Neuron::new(0.2)]);
        assert_eq!(layer.neuron_count, 2);
        assert_eq!(layer.neurons[1].weight, 0.2);
    }

    #[test]
    fn display_lists_every_neuron() {
        let layer = InputLayer::from_neurons(vec![Neuron::new(0.5), Neuron::new(-0.25)]);
        let rendered = layer.to_string();
        assert!(rendered.contains("neuron #1: weight 0.500000"));
        assert!(rendered.contains("neuron #2: weight -0.250000"));
    }
}
