//! Lander-AI collaborator surface: the state a host feeds in, the commands it gets back,
//! and the scoring used by the generational trainer. Episode physics belongs to the host,
//! nothing in here integrates forces.

use serde::{Serialize, Deserialize};

use crate::prelude::*;

pub mod network;
pub mod trainer;

// Structs

/// Snapshot of the lander a host hands to the network each control tick
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct LanderState {
	/// Remaining fuel, full tank is 100
	pub fuel: Float,
	pub velocity: V2,
	/// Heading in degrees
	pub angle: Float,
	/// Target position minus lander position
	pub offset_to_target: V2
}

impl LanderState {
	/// Network input vector, normalized to roughly unit scale
	pub fn to_inputs(&self) -> [Float; network::INPUT_SIZE] {
		[
			self.fuel / 100.0,
			self.velocity.x,
			self.velocity.y,
			self.angle / 360.0,
			self.offset_to_target.x / 50.0,
			self.offset_to_target.y / 50.0
		]
	}
}

/// Discrete control decision decoded from the network outputs
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug)]
pub struct Command {
	/// -1, 0 or 1
	pub rotation: i8,
	pub thrust: bool
}

/// What counts as a successful touchdown
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct LandingCriteria {
	pub max_speed: Float,
	/// Degrees off vertical
	pub max_angle: Float,
	pub target_radius: Float
}

impl LandingCriteria {
	pub fn is_successful(&self, speed: Float, angle: Float, distance_to_target: Float) -> bool {
		speed <= self.max_speed
			&& fold_angle(angle) <= self.max_angle
			&& distance_to_target <= self.target_radius
	}
}

impl Default for LandingCriteria {
	fn default() -> Self {
		Self {
			max_speed: 2.0,
			max_angle: 15.0,
			target_radius: 5.0
		}
	}
}

/// How one simulated episode ended, reported back by the host for scoring
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct EpisodeOutcome {
	pub landed: bool,
	pub crashed: bool,
	pub fuel_remaining: Float,
	pub final_velocity: V2,
	/// Degrees
	pub final_angle: Float,
	pub distance_to_target: Float
}

// Functions

/// Folds any heading into [0, 180] degrees off vertical
/// ```
/// use luso_lander::lander::fold_angle;
/// assert_eq!(fold_angle(350.0), 10.0);
/// assert_eq!(fold_angle(-15.0), 15.0);
/// assert_eq!(fold_angle(180.0), 180.0);
/// ```
pub fn fold_angle(angle: Float) -> Float {
	let wrapped = angle.abs() % 360.0;
	if wrapped > 180.0 {
		360.0 - wrapped
	}
	else {
		wrapped
	}
}

/// Scores an episode: big bonus for touching down (scaled by how gentle and upright), crash
/// penalty, fuel economy bonus, and a closeness-to-target bonus that applies either way
pub fn fitness(outcome: &EpisodeOutcome) -> Float {
	let mut fitness: Float = 0.0;
	if outcome.landed {
		fitness += 1000.0;
		fitness += (100.0 - outcome.final_velocity.x.abs() * 10.0).clamp(0.0, 500.0);
		fitness += (100.0 - outcome.final_velocity.y.abs() * 10.0).clamp(0.0, 500.0);
		fitness += (1.0 - (outcome.final_angle / 180.0).abs()) * 200.0;
	}
	if outcome.crashed {
		fitness -= 500.0;
	}
	fitness += outcome.fuel_remaining * 2.0;
	fitness += (1.0 - (outcome.distance_to_target / 100.0).clamp(0.0, 1.0)) * 300.0;
	fitness
}
