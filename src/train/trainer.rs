use log::{debug, trace};

use crate::error::NetworkError;
use crate::layers::input::{InputLayer, Neuron};
use crate::network::network::Network;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains a Perceptron or Adaline network for exactly `max_epochs` full
/// passes over the training set and returns the updated state.
///
/// For each row, the weighted sum of the row's features against the
/// current per-column weights is pushed through the activation function;
/// when the absolute error against the row's target exceeds
/// `target_error`, the input layer is replaced with one whose weights
/// have been adjusted by the configured rule. The tolerance only gates
/// whether a single row updates the weights; it never ends the run
/// early.
///
/// After the run, `mean_squared_error_list` holds one entry per epoch
/// (the squared error of that epoch's final row) and `training_error`
/// holds the signed error of the last row of the last epoch.
///
/// # Errors
/// All input validation happens before the first weight update, so an
/// `Err` means the network was never mutated. `InvalidInput` is returned
/// for an empty training matrix, a target list whose length differs from
/// the row count, an input layer with fewer neurons than feature
/// columns, or a negative (or NaN) tolerance.
pub fn train_network(mut network: Network) -> Result<Network, NetworkError> {
    let rows = network.training_set.rows;
    let columns = network.training_set.cols;

    validate(&network, rows, columns)?;

    let mut error = 0.0;

    for epoch in 0..network.max_epochs {
        let mut estimated = 0.0;
        let mut actual = 0.0;

        for i in 0..rows {
            let mut net_value = 0.0;

            for j in 0..columns {
                net_value +=
                    network.input_layer.neurons[j].weight * network.training_set.data[i][j];
            }

            estimated = network.activation.function(net_value);
            actual = network.target_output_set[i];

            error = actual - estimated;

            if error.abs() > network.target_error {
                let neurons = teach_layer(columns, i, &network, net_value, error);
                network.input_layer = InputLayer::from_neurons(neurons);
            }
        }

        let mean_squared_error = (actual - estimated).powi(2);
        trace!("epoch {}: squared error {:.6}", epoch + 1, mean_squared_error);
        network.mean_squared_error_list.push(mean_squared_error);
    }

    network.training_error = error;
    debug!(
        "finished {} epochs; final error {:.6}",
        network.max_epochs, network.training_error
    );

    Ok(network)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

fn validate(network: &Network, rows: usize, columns: usize) -> Result<(), NetworkError> {
    if rows == 0 || columns == 0 {
        return Err(NetworkError::InvalidInput(format!(
            "training set must have at least one row and one column, got {rows}x{columns}"
        )));
    }
    if network.target_output_set.len() != rows {
        return Err(NetworkError::InvalidInput(format!(
            "expected {} target outputs, got {}",
            rows,
            network.target_output_set.len()
        )));
    }
    if network.input_layer.neurons.len() < columns {
        return Err(NetworkError::InvalidInput(format!(
            "input layer has {} neurons for {} feature columns",
            network.input_layer.neurons.len(),
            columns
        )));
    }
    if network.target_error < 0.0 || network.target_error.is_nan() {
        return Err(NetworkError::InvalidInput(format!(
            "target error must be non-negative, got {}",
            network.target_error
        )));
    }
    Ok(())
}

/// Builds the replacement neuron list for one weight update: each feature
/// column's weight is adjusted independently by the configured rule.
fn teach_layer(
    columns: usize,
    row: usize,
    network: &Network,
    net_value: f64,
    error: f64,
) -> Vec<Neuron> {
    let mut neurons = Vec::with_capacity(columns);

    for j in 0..columns {
        let old_weight = network.input_layer.neurons[j].weight;
        let new_weight = network.training_rule.update_weight(
            old_weight,
            network.learning_rate,
            error,
            network.training_set.data[row][j],
            &network.activation,
            net_value,
        );
        neurons.push(Neuron::new(new_weight));
    }

    neurons
}
