use lamina_nn::{
    print_trained_network, train_network, ActivationFunction, Matrix, Network, TrainingRule,
};

// Trains an AND gate with the bias folded in as a third, always-on
// input column, then prints the per-row report.
fn main() {
    env_logger::init();

    let training_set = Matrix::from_data(vec![
        vec![0.0, 0.0, 1.0],
        vec![0.0, 1.0, 1.0],
        vec![1.0, 0.0, 1.0],
        vec![1.0, 1.0, 1.0],
    ]);
    let targets = vec![0.0, 0.0, 0.0, 1.0];

    let network = Network::new(
        training_set,
        targets,
        0.1,
        100,
        0.0,
        TrainingRule::Perceptron,
        ActivationFunction::Step,
    );

    match train_network(network) {
        Ok(mut trained) => {
            println!("{}", trained.input_layer);
            if let Err(e) = print_trained_network(&mut trained, true) {
                eprintln!("report failed: {e}");
            }
        }
        Err(e) => eprintln!("training failed: {e}"),
    }
}
