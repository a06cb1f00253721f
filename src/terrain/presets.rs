//! Named parameter bundles: band tables + generation settings per celestial body

use serde::{Serialize, Deserialize};

use crate::prelude::*;
use super::classify::TerrainBand;

/// A complete, named parameter set for one kind of terrain
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct TerrainPreset {
	pub name: String,
	/// Ascending by threshold
	pub bands: Vec<TerrainBand>,
	pub roughness: Float,
	pub initial_height: Float,
	pub mountain_height: Float,
	pub terrain_scale: Float,
	pub base_level: Float
}

impl TerrainPreset {
	fn new(name: &str, bands: Vec<TerrainBand>) -> Self {
		Self {
			name: name.to_owned(),
			bands,
			roughness: 0.7,
			initial_height: 2.0,
			mountain_height: 1.5,
			terrain_scale: 10.0,
			base_level: 0.2
		}
	}
	pub fn moon() -> Self {
		Self::new("Moon", vec![
			TerrainBand::new("Deep Crater", 0.2, [26, 26, 26]),
			TerrainBand::new("Crater", 0.4, [51, 51, 51]),
			TerrainBand::new("Low Ground", 0.6, [102, 102, 102]),
			TerrainBand::new("High Ground", 0.8, [153, 153, 153]),
			TerrainBand::new("Peak", 1.0, [204, 204, 204])
		])
	}
	pub fn earth() -> Self {
		Self::new("Earth", vec![
			TerrainBand::new("Water", 0.3, [51, 102, 204]),
			TerrainBand::new("Beach", 0.35, [230, 204, 153]),
			TerrainBand::new("Grass", 0.6, [77, 179, 51]),
			TerrainBand::new("Forest", 0.8, [51, 128, 26]),
			TerrainBand::new("Mountain", 0.9, [128, 102, 77]),
			TerrainBand::new("Snow", 1.0, [230, 230, 230])
		])
	}
	pub fn mars() -> Self {
		Self::new("Mars", vec![
			TerrainBand::new("Deep Valley", 0.3, [102, 51, 26]),
			TerrainBand::new("Valley", 0.5, [153, 77, 51]),
			TerrainBand::new("Plains", 0.7, [204, 102, 51]),
			TerrainBand::new("Hills", 0.85, [179, 77, 26]),
			TerrainBand::new("Mountains", 1.0, [128, 51, 26])
		])
	}
	pub fn all() -> Vec<Self> {
		vec![
			Self::moon(),
			Self::earth(),
			Self::mars()
		]
	}
	/// Simple lookup table, case-insensitive
	pub fn from_name(name: &str) -> Option<Self> {
		for preset in Self::all() {
			if preset.name.to_lowercase() == name.to_lowercase() {
				return Some(preset);
			}
		}
		None
	}
}
