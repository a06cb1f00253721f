use ntest::timeout;
use rand::SeedableRng;
use crate::prelude::*;
use crate::lander::{fold_angle, network};

// Initial states
fn zero_network() -> NeuralNetwork {
	NeuralNetwork {
		weights: vec![0.0; NeuralNetwork::weight_count()],
		fitness: 0.0
	}
}
fn neutral_inputs() -> [Float; network::INPUT_SIZE] {
	[1.0, 0.5, -0.5, 0.25, 0.1, -0.1]
}
/// Deterministic stand-in for a simulated episode: rewards weight 0 being near zero
fn toy_episode(network: &NeuralNetwork) -> EpisodeOutcome {
	EpisodeOutcome {
		landed: false,
		crashed: false,
		fuel_remaining: (100.0 - network.weights[0].abs() * 100.0).max(0.0),
		final_velocity: V2::zeros(),
		final_angle: 0.0,
		distance_to_target: 0.0
	}
}

// Tests
#[test]
fn network_weight_count() {
	assert_eq!(NeuralNetwork::weight_count(), 74);// 6*8 + 8*2 + 8 + 2
	let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(1);
	let network = NeuralNetwork::new_random(&mut rng);
	assert_eq!(network.weights.len(), 74);
	for weight in &network.weights {
		assert!(*weight >= -1.0 && *weight <= 1.0);
	}
}
#[test]
fn zero_network_is_neutral() {
	let command = zero_network().predict(&neutral_inputs());
	assert_eq!(command, Command{rotation: 0, thrust: false});// tanh(0) = 0 everywhere
}
#[test]
fn rotation_and_thrust_decoding() {
	// With all other weights zero the outputs are just tanh(bias):
	// output 0 bias lives at index 64, output 1 bias at index 73
	let mut network = zero_network();
	network.weights[64] = 1.0;// tanh(1) > 0.33
	assert_eq!(network.predict(&neutral_inputs()).rotation, 1);
	network.weights[64] = -1.0;
	assert_eq!(network.predict(&neutral_inputs()).rotation, -1);
	network.weights[64] = 0.3;// tanh(0.3) is inside the dead zone
	assert_eq!(network.predict(&neutral_inputs()).rotation, 0);
	network.weights[73] = 0.1;// Any positive output fires the thruster
	assert!(network.predict(&neutral_inputs()).thrust);
}
#[test]
fn state_normalization() {
	let state = LanderState {
		fuel: 50.0,
		velocity: V2::new(1.0, -2.0),
		angle: 90.0,
		offset_to_target: V2::new(25.0, -10.0)
	};
	assert_eq!(state.to_inputs(), [0.5, 1.0, -2.0, 0.25, 0.5, -0.2]);
}
#[test]
fn mutation_rate_extremes() {
	let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(2);
	let original = NeuralNetwork::new_random(&mut rng);
	// Rate 0 never touches anything
	let mut unchanged = original.clone();
	unchanged.mutate(0.0, 0.5, &mut rng);
	assert_eq!(unchanged, original);
	// Rate 1 shifts every weight
	let mut mutated = original.clone();
	mutated.mutate(1.0, 0.5, &mut rng);
	assert_ne!(mutated, original);
	for (before, after) in original.weights.iter().zip(mutated.weights.iter()) {
		assert!((after - before).abs() <= 0.5 + EPSILON);
	}
}
#[test]
fn landing_criteria() {
	let criteria = LandingCriteria::default();
	assert!(criteria.is_successful(1.0, 10.0, 2.0));
	assert!(!criteria.is_successful(3.0, 10.0, 2.0));// Too fast
	assert!(criteria.is_successful(1.0, 350.0, 2.0));// Folds to 10 degrees
	assert!(!criteria.is_successful(1.0, 200.0, 2.0));// Folds to 160 degrees
	assert!(!criteria.is_successful(1.0, 10.0, 10.0));// Off target
}
#[test]
fn angle_folding() {
	assert_eq!(fold_angle(0.0), 0.0);
	assert_eq!(fold_angle(350.0), 10.0);
	assert_eq!(fold_angle(-15.0), 15.0);
	assert_eq!(fold_angle(180.0), 180.0);
	assert_eq!(fold_angle(540.0), 180.0);
}
#[test]
fn fitness_perfect_landing() {
	let outcome = EpisodeOutcome {
		landed: true,
		crashed: false,
		fuel_remaining: 100.0,
		final_velocity: V2::zeros(),
		final_angle: 0.0,
		distance_to_target: 0.0
	};
	// 1000 landing + 100 + 100 gentleness + 200 upright + 200 fuel + 300 on target
	assert_eq!(fitness(&outcome), 1900.0);
}
#[test]
fn fitness_crash() {
	let outcome = EpisodeOutcome {
		landed: false,
		crashed: true,
		fuel_remaining: 0.0,
		final_velocity: V2::new(5.0, -8.0),
		final_angle: 90.0,
		distance_to_target: 100.0
	};
	assert_eq!(fitness(&outcome), -500.0);
}
#[test]
fn fitness_rewards_closeness() {
	let far = EpisodeOutcome {
		landed: false,
		crashed: false,
		fuel_remaining: 0.0,
		final_velocity: V2::zeros(),
		final_angle: 0.0,
		distance_to_target: 80.0
	};
	let mut near = far.clone();
	near.distance_to_target = 20.0;
	assert!(fitness(&near) > fitness(&far));
}
#[test]
#[timeout(10000)]
fn trainer_keeps_improving_under_deterministic_episodes() {
	let mut trainer = Trainer::new(TrainerConfig::default(), 7);
	assert_eq!(trainer.population.len(), 20);
	trainer.run_generation(toy_episode);
	let first_best = trainer.best_fitness;
	assert!(first_best > 0.0);// The toy score is always at least 300
	for _ in 0..9 {
		trainer.run_generation(toy_episode);
		assert_eq!(trainer.population.len(), 20);
	}
	assert_eq!(trainer.generation, 10);
	// Elites re-score identically under a deterministic evaluator, so the best never regresses
	assert!(trainer.best_fitness >= first_best);
	// After evolving, the first two slots hold the elites: already scored, in descending order,
	// and a re-run of their episodes reproduces the stored fitness exactly
	assert!(trainer.population[0].fitness >= trainer.population[1].fitness);
	for elite in &trainer.population[0..2] {
		assert_eq!(fitness(&toy_episode(elite)), elite.fitness);
	}
	assert_eq!(trainer.best().fitness, trainer.population.iter().map(|n| n.fitness).fold(Float::MIN, Float::max));
}
