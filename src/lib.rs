//! Luso Lander terrain engine: procedural landing-site generation + lander AI training
//! Reworked as a standalone crate, 2026-8-6

use std::env;
use colored::Colorize;

// Modules
pub mod terrain;
pub mod lander;
pub mod resource_interface;

// Tests
#[cfg(test)]
mod tests;

// Prelude
#[allow(unused)]
pub mod prelude {
	use super::*;
	// Name of this app
	pub const APP_NAME: &str = "Luso Lander";
	// Types
	pub type Float = f32;
	pub type Int = i64;
	pub type UInt = u64;
	// Example of basic usage: https://rapier.rs/docs/user_guides/rust/introduction_to_nalgebra
	pub type P2 = nalgebra::Point2<Float>;
	pub type V2 = nalgebra::Vector2<Float>;
	pub type P3 = nalgebra::Point3<Float>;
	pub type V3 = nalgebra::Vector3<Float>;
	pub const EPSILON: Float = 1.0e-6;// Arbitrary
	pub use std::f32::consts::PI;
	// Misc
	pub use crate::{
		terrain::{
			HeightField,
			GenerationRequest,
			GeneratedTerrain,
			coerce_grid_size,
			fractal,
			classify::{TerrainBand, ColorMap, bands_ascending},
			mesh::TerrainMesh,
			boundary::CollisionBoundary,
			presets::TerrainPreset
		},
		lander::{
			LanderState,
			Command,
			LandingCriteria,
			EpisodeOutcome,
			fitness,
			network::NeuralNetwork,
			trainer::{Trainer, TrainerConfig}
		},
		resource_interface
	};
	// Copied from extras
	pub fn to_string_err<T, E: ToString>(result: Result<T, E>) -> Result<T, String> {
		match result {
			Ok(t) => Ok(t),
			Err(e) => Err(e.to_string())
		}
	}
	pub fn to_string_err_with_message<T, E: ToString>(result: Result<T, E>, message: &str) -> Result<T, String> {
		match result {
			Ok(t) => Ok(t),
			Err(e) => Err(format!("Message: {}, Error: {}", message, e.to_string()))
		}
	}
	pub fn prompt(s: &str) -> String {
		dialoguer::Input::new()
			.with_prompt(s)
			.interact_text()
			.unwrap()
	}
}

use prelude::*;

pub fn ui_main() {
	// Parse arguments
	let args: Vec<String> = env::args().collect();
	if args.len() < 2 {// Just the program name
		panic!("Not enough arguments, see crate::ui_main()");
	}
	else {
		match &args[1][..] {
			"-generate" => {
				assert!(args.len() >= 3, "Not enough arguments");
				let preset = resource_interface::load_preset(&args[2]).unwrap();
				let size = prompt("Grid size").parse::<UInt>().unwrap();
				let seed = prompt("Seed").parse::<u64>().unwrap();
				let request = GenerationRequest::from_preset(&preset, size, seed);
				let terrain = request.generate();
				println!(
					"{}",
					format!(
						"Generated {}x{} \"{}\" terrain (seed {}): {} vertices, {} triangles",
						terrain.height_field.size(),
						terrain.height_field.size(),
						&preset.name,
						seed,
						terrain.mesh.vertices.len(),
						terrain.mesh.triangles.len()
					).green()
				);
				resource_interface::save_terrain(&preset.name, &terrain).unwrap();
				println!("Saved to {}{}/", resource_interface::OUTPUT_DIR, &preset.name);
			},
			"-presets" => {
				for preset in TerrainPreset::all() {
					println!(
						"{}: {} bands, roughness={}, base level={}",
						preset.name.bold(),
						preset.bands.len(),
						preset.roughness,
						preset.base_level
					);
				}
			},
			_ => panic!("Invalid arguments")
		}
	}
}
