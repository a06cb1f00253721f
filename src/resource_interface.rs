//! For saving generated artifacts & loading presets and trained networks

use std::{error::Error, fs};
use std::io::Error as IoError;
use serde_json;

use crate::prelude::*;

// STATICS
pub static OUTPUT_DIR: &str = "output/";
pub static PRESETS_DIR: &str = "presets/";
pub static NETWORKS_DIR: &str = "networks/";

// Load

/// Built-in presets first, then `presets/<name>.json` for custom ones
pub fn load_preset(name: &str) -> Result<TerrainPreset, Box<dyn Error>> {
	match TerrainPreset::from_name(name) {
		Some(preset) => Ok(preset),
		None => {
			let raw_string: String = load_file_with_better_error(&(PRESETS_DIR.to_owned() + name + ".json"))?;
			let preset: TerrainPreset = serde_json::from_str(&raw_string)?;
			Ok(preset)
		}
	}
}

pub fn load_network(name: &str) -> Result<NeuralNetwork, Box<dyn Error>> {
	let raw_string: String = load_file_with_better_error(&(NETWORKS_DIR.to_owned() + name + ".json"))?;
	let network: NeuralNetwork = serde_json::from_str(&raw_string)?;
	Ok(network)
}

// Save

/// Writes everything a generation call produced for inspection: height field, mesh and
/// boundary as JSON, the color buffer as a PNG
pub fn save_terrain(name: &str, terrain: &GeneratedTerrain) -> Result<(), Box<dyn Error>> {
	let dir = format!("{}{}/", OUTPUT_DIR, name);
	fs::create_dir_all(&dir)?;
	fs::write(dir.clone() + "heightfield.json", serde_json::to_string(&terrain.height_field)?)?;
	fs::write(dir.clone() + "mesh.json", serde_json::to_string(&terrain.mesh)?)?;
	fs::write(dir.clone() + "boundary.json", serde_json::to_string(&terrain.boundary)?)?;
	fs::write(dir + "texture.png", terrain.color_map.to_png_bytes()?)?;
	Ok(())
}

pub fn save_network(name: &str, network: &NeuralNetwork) -> Result<(), Box<dyn Error>> {
	fs::create_dir_all(NETWORKS_DIR)?;
	let raw_string = serde_json::to_string(network)?;
	fs::write(&(NETWORKS_DIR.to_owned() + name + ".json"), &raw_string)?;
	Ok(())
}

// Misc
pub fn load_file_with_better_error(path: &str) -> Result<String, Box<dyn Error>> {
	match fs::read_to_string(path) {
		Ok(contents) => Ok(contents),
		Err(err) => {
			// Combine the error with the path information
			Err(Box::new(IoError::new(err.kind(), format!("Error reading file '{}': {}", path, err))))
		}
	}
}
