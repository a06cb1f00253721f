//! Terrain main module file
//! A generation request runs: fractal synthesis -> normalization -> (classification | meshing | boundary extraction)

use serde::{Serialize, Deserialize};
use crate::prelude::*;

pub mod fractal;
pub mod classify;
pub mod mesh;
pub mod boundary;
pub mod presets;

// Structs

/// A square grid of elevation values, `2^k + 1` cells along each side.
/// Row `y = 0` is the base row: it stays flat so the landing zone always has a level reference edge.
/// After normalization every value is within `[base_level, 1]` and the base row equals `base_level` exactly.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct HeightField {
	/// elevation = grid[y][x], where x and y are in grid index units
	pub grid: Vec<Vec<Float>>
}

impl HeightField {
	/// Constant field, mostly useful for tests and as a degenerate case
	pub fn flat(size: usize, value: Float) -> Self {
		Self {
			grid: vec![vec![value; size]; size]
		}
	}
	/// Number of "fence posts" along each side, not "spaces"
	pub fn size(&self) -> usize {
		self.grid.len()
	}
	pub fn get(&self, x: usize, y: usize) -> Float {
		self.grid[y][x]
	}
	pub fn base_row(&self) -> &[Float] {
		&self.grid[0]
	}
	pub fn min_max(&self) -> (Float, Float) {
		let mut min = Float::MAX;
		let mut max = Float::MIN;
		for row in &self.grid {
			for value in row {
				if *value < min {
					min = *value;
				}
				if *value > max {
					max = *value;
				}
			}
		}
		(min, max)
	}
}

/// Rounds a requested grid edge up to the nearest `2^k + 1` the subdivision algorithm needs, never failing.
/// Anything below the minimum of 3 is silently clamped.
/// ```
/// use luso_lander::terrain::coerce_grid_size;
/// assert_eq!(coerce_grid_size(100), 129);
/// assert_eq!(coerce_grid_size(3), 3);
/// assert_eq!(coerce_grid_size(257), 257);
/// assert_eq!(coerce_grid_size(1), 3);
/// assert_eq!(coerce_grid_size(2), 3);
/// ```
pub fn coerce_grid_size(requested: UInt) -> usize {
	let floored = requested.max(3) as usize;
	(floored - 1).next_power_of_two() + 1
}

/// Everything one generation call needs. Consumed once; identical requests produce bit-identical output.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct GenerationRequest {
	/// Requested grid edge, coerced up to the nearest 2^k + 1
	pub size: UInt,
	pub seed: u64,
	/// Displacement decay per subdivision level, must be > 0
	pub roughness: Float,
	/// Initial displacement amplitude, must be > 0
	pub initial_height: Float,
	/// Target floor in [0, 1], clamped on generation
	pub base_level: Float,
	/// Power-law exponent applied to non-base rows, > 1 flattens valleys, < 1 sharpens peaks
	pub mountain_height: Float,
	/// World-units per grid cell
	pub terrain_scale: Float,
	/// Height bands in ascending threshold order
	pub bands: Vec<TerrainBand>,
	/// Whether the host can collide against the full surface mesh, otherwise a 2D edge is derived
	pub volume_collider: bool
}

impl GenerationRequest {
	pub fn from_preset(preset: &TerrainPreset, size: UInt, seed: u64) -> Self {
		Self {
			size,
			seed,
			roughness: preset.roughness,
			initial_height: preset.initial_height,
			base_level: preset.base_level,
			mountain_height: preset.mountain_height,
			terrain_scale: preset.terrain_scale,
			bands: preset.bands.clone(),
			volume_collider: true
		}
	}
	/// Runs the whole pipeline. Pure computation, no I/O, single-threaded.
	pub fn generate(&self) -> GeneratedTerrain {
		let size = coerce_grid_size(self.size);
		let base_level = self.base_level.clamp(0.0, 1.0);
		// Height field
		let mut height_field = fractal::synthesize(size, self.seed, self.roughness, self.initial_height, base_level);
		fractal::normalize(&mut height_field, base_level, self.mountain_height);
		// The three independent consumers
		let color_map = classify::classify(&height_field, &self.bands);
		let mesh = mesh::build(&height_field, self.terrain_scale);
		let boundary = boundary::extract(&height_field, &mesh, self.terrain_scale, self.volume_collider);
		// Done
		GeneratedTerrain {
			height_field,
			color_map,
			mesh,
			boundary
		}
	}
}

impl Default for GenerationRequest {
	fn default() -> Self {
		Self {
			size: 256,
			seed: 0,
			roughness: 0.7,
			initial_height: 1.0,
			base_level: 0.0,
			mountain_height: 1.5,
			terrain_scale: 10.0,
			bands: TerrainPreset::moon().bands,
			volume_collider: true
		}
	}
}

/// Everything one generation call produces. The caller keeps whichever artifacts it needs, nothing is retained here.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct GeneratedTerrain {
	pub height_field: HeightField,
	pub color_map: ColorMap,
	pub mesh: TerrainMesh,
	pub boundary: CollisionBoundary
}
