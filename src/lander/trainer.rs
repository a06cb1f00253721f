//! Generational evolution loop over control networks. The host runs the actual episodes and
//! reports how each one ended, this module does the bookkeeping: scoring, elitism, selection,
//! crossover, mutation.

use serde::{Serialize, Deserialize};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::prelude::*;
use super::{EpisodeOutcome, fitness, network::NeuralNetwork};

// Structs

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct TrainerConfig {
	pub population_size: usize,
	/// Per-weight mutation probability
	pub mutation_rate: Float,
	/// Maximum +/- shift a mutated weight gets
	pub mutation_magnitude: Float,
	/// How many of the best individuals survive each generation unmodified
	pub elite_count: usize
}

impl Default for TrainerConfig {
	fn default() -> Self {
		Self {
			population_size: 20,
			mutation_rate: 0.1,
			mutation_magnitude: 0.5,
			elite_count: 2
		}
	}
}

pub struct Trainer {
	pub config: TrainerConfig,
	pub population: Vec<NeuralNetwork>,
	pub generation: UInt,
	pub best_fitness: Float,
	rng: ChaCha8Rng
}

impl Trainer {
	pub fn new(config: TrainerConfig, seed: u64) -> Self {
		let mut rng = ChaCha8Rng::seed_from_u64(seed);
		let mut population = Vec::<NeuralNetwork>::new();
		for _ in 0..config.population_size {
			population.push(NeuralNetwork::new_random(&mut rng));
		}
		Self {
			config,
			population,
			generation: 0,
			best_fitness: 0.0,
			rng
		}
	}
	/// Best individual of the current population by last scored fitness
	pub fn best(&self) -> &NeuralNetwork {
		let mut best = &self.population[0];
		for individual in &self.population {
			if individual.fitness > best.fitness {
				best = individual;
			}
		}
		best
	}
	/// Scores every individual with the host-provided episode runner, then evolves the
	/// population one generation
	pub fn run_generation<F: FnMut(&NeuralNetwork) -> EpisodeOutcome>(&mut self, mut evaluate: F) {
		for i in 0..self.population.len() {
			let outcome = evaluate(&self.population[i]);
			let score = fitness(&outcome);
			self.population[i].fitness = score;
			if score > self.best_fitness {
				self.best_fitness = score;
			}
		}
		self.evolve();
		self.generation += 1;
	}
	/// Elites survive unchanged, the rest of the next generation comes from roulette-wheel
	/// parent selection + single-point crossover + mutation
	fn evolve(&mut self) {
		self.population.sort_by(|a, b| b.fitness.partial_cmp(&a.fitness).expect("Fitness must never be NaN"));
		let mut new_population = Vec::<NeuralNetwork>::new();
		for i in 0..self.config.elite_count.min(self.population.len()) {
			new_population.push(self.population[i].clone());
		}
		while new_population.len() < self.config.population_size {
			let parent1 = self.select_parent().clone();
			let parent2 = self.select_parent().clone();
			// Single-point crossover over the flat weight vector
			let mut child = parent1;
			let crossover_point = self.rng.gen_range(0..child.weights.len());
			for i in crossover_point..child.weights.len() {
				child.weights[i] = parent2.weights[i];
			}
			child.mutate(self.config.mutation_rate, self.config.mutation_magnitude, &mut self.rng);
			new_population.push(child);
		}
		self.population = new_population;
	}
	/// Fitness-proportionate (roulette-wheel) selection
	fn select_parent(&mut self) -> &NeuralNetwork {
		let mut total_fitness = 0.0;
		for individual in &self.population {
			total_fitness += individual.fitness;
		}
		let random_point = (self.rng.gen::<f64>() as Float) * total_fitness;
		let mut current_sum = 0.0;
		for individual in &self.population {
			current_sum += individual.fitness;
			if current_sum >= random_point {
				return individual;
			}
		}
		&self.population[0]
	}
}
