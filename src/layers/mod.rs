pub mod input;

pub use input::{InputLayer, Neuron};
