use crate::error::NetworkError;
use crate::network::network::Network;

/// Per-row record produced by the reporting passes.
#[derive(Debug, Clone, PartialEq)]
pub struct RowDiagnostic {
    pub inputs: Vec<f64>,
    pub estimated: f64,
    pub target: f64,
    /// Signed difference `estimated - target`.
    pub error: f64,
}

/// Recomputes each row's estimated output exactly as the trainer does
/// and pairs it with the row's scalar target. Every estimate is also
/// appended to `estimated_output_as_array`; nothing else on the network
/// changes.
pub fn single_layer_diagnostics(
    network: &mut Network,
) -> Result<Vec<RowDiagnostic>, NetworkError> {
    let rows = network.training_set.rows;
    let columns = network.training_set.cols;

    if network.target_output_set.len() != rows {
        return Err(NetworkError::InvalidInput(format!(
            "expected {} target outputs, got {}",
            rows,
            network.target_output_set.len()
        )));
    }
    check_layer_size(network, columns)?;

    let mut diagnostics = Vec::with_capacity(rows);

    for i in 0..rows {
        let estimated = estimate_row(network, i, columns);
        network.estimated_output_as_array.push(estimated);

        let target = network.target_output_set[i];
        diagnostics.push(RowDiagnostic {
            inputs: network.training_set.data[i].clone(),
            estimated,
            target,
            error: estimated - target,
        });
    }

    Ok(diagnostics)
}

/// Multi-output counterpart: the comparison point is the sum of the
/// row of `target_output_matrix`. Provisional contract, kept as-is
/// until a full multi-layer result pass exists.
pub fn multi_layer_diagnostics(network: &Network) -> Result<Vec<RowDiagnostic>, NetworkError> {
    let rows = network.training_set.rows;
    let columns = network.training_set.cols;

    if network.target_output_matrix.rows != rows {
        return Err(NetworkError::InvalidInput(format!(
            "expected {} target matrix rows, got {}",
            rows, network.target_output_matrix.rows
        )));
    }
    check_layer_size(network, columns)?;

    let mut diagnostics = Vec::with_capacity(rows);

    for i in 0..rows {
        let estimated = estimate_row(network, i, columns);
        let target: f64 = network.target_output_matrix.data[i].iter().sum();

        diagnostics.push(RowDiagnostic {
            inputs: network.training_set.data[i].clone(),
            estimated,
            target,
            error: estimated - target,
        });
    }

    Ok(diagnostics)
}

/// Prints one block per row in the layout of the original console
/// report.
pub fn print_diagnostics(diagnostics: &[RowDiagnostic]) {
    for d in diagnostics {
        println!("inputs: {:?}", d.inputs);
        println!("net output: {:.6}", d.estimated);
        println!("real output: {:.6}", d.target);
        println!("error: {:.6}", d.error);
        println!("------------------------------------");
    }
}

/// Runs the reporting pass for a trained network and prints it. Pass
/// `single_layer = false` to compare against summed rows of the target
/// matrix instead of the scalar targets.
pub fn print_trained_network(
    network: &mut Network,
    single_layer: bool,
) -> Result<(), NetworkError> {
    let diagnostics = if single_layer {
        single_layer_diagnostics(network)?
    } else {
        multi_layer_diagnostics(network)?
    };
    print_diagnostics(&diagnostics);
    Ok(())
}

fn check_layer_size(network: &Network, columns: usize) -> Result<(), NetworkError> {
    if network.input_layer.neurons.len() < columns {
        return Err(NetworkError::InvalidInput(format!(
            "input layer has {} neurons for {} feature columns",
            network.input_layer.neurons.len(),
            columns
        )));
    }
    Ok(())
}

fn estimate_row(network: &Network, row: usize, columns: usize) -> f64 {
    let mut net_value = 0.0;
    for j in 0..columns {
        net_value += network.input_layer.neurons[j].weight * network.training_set.data[row][j];
    }
    network.activation.function(net_value)
}
