//! Fixed-topology feedforward control network, 6 inputs -> 8 hidden -> 2 outputs, tanh throughout

use serde::{Serialize, Deserialize};
use rand::Rng;

use crate::prelude::*;
use super::Command;

pub const INPUT_SIZE: usize = 6;
pub const HIDDEN_SIZE: usize = 8;
pub const OUTPUT_SIZE: usize = 2;

/// One individual: a flat weight vector plus its last scored fitness.
/// Weight layout is interleaved per unit: for each hidden unit its 6 input weights then its
/// bias, then for each output unit its 8 hidden weights then its bias. Crossover and mutation
/// treat the vector as opaque, only `predict` knows the layout.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct NeuralNetwork {
	pub weights: Vec<Float>,
	pub fitness: Float
}

impl NeuralNetwork {
	/// ```
	/// use luso_lander::prelude::NeuralNetwork;
	/// assert_eq!(NeuralNetwork::weight_count(), 74);
	/// ```
	pub fn weight_count() -> usize {
		(INPUT_SIZE * HIDDEN_SIZE) + (HIDDEN_SIZE * OUTPUT_SIZE) + HIDDEN_SIZE + OUTPUT_SIZE
	}
	/// Every weight drawn independently from [-1, 1)
	pub fn new_random(rng: &mut impl Rng) -> Self {
		let mut weights = Vec::<Float>::new();
		for _ in 0..Self::weight_count() {
			weights.push((rng.gen::<f64>() * 2.0 - 1.0) as Float);
		}
		Self {
			weights,
			fitness: 0.0
		}
	}
	/// Forward pass + discrete decode: output 0 picks rotation with dead zone [-0.33, 0.33],
	/// output 1 fires the thruster when positive
	pub fn predict(&self, inputs: &[Float; INPUT_SIZE]) -> Command {
		let mut index = 0;
		let mut hidden = [0.0 as Float; HIDDEN_SIZE];
		for h in 0..HIDDEN_SIZE {
			for i in 0..INPUT_SIZE {
				hidden[h] += inputs[i] * self.weights[index];
				index += 1;
			}
			hidden[h] = (hidden[h] + self.weights[index]).tanh();
			index += 1;
		}
		let mut outputs = [0.0 as Float; OUTPUT_SIZE];
		for o in 0..OUTPUT_SIZE {
			for h in 0..HIDDEN_SIZE {
				outputs[o] += hidden[h] * self.weights[index];
				index += 1;
			}
			outputs[o] = (outputs[o] + self.weights[index]).tanh();
			index += 1;
		}
		// Done
		Command {
			rotation: if outputs[0] < -0.33 {
				-1
			}
			else if outputs[0] > 0.33 {
				1
			}
			else {
				0
			},
			thrust: outputs[1] > 0.0
		}
	}
	/// Each weight independently shifted by up to +/- `magnitude` with probability `rate`
	pub fn mutate(&mut self, rate: Float, magnitude: Float, rng: &mut impl Rng) {
		for weight in &mut self.weights {
			if (rng.gen::<f64>() as Float) < rate {
				*weight += ((rng.gen::<f64>() * 2.0 - 1.0) as Float) * magnitude;
			}
		}
	}
}
