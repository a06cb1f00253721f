//! Height-band classification: normalized elevations -> per-cell colors

use std::io::Cursor;
use serde::{Serialize, Deserialize};
use image::{RgbImage, ImageFormat};

use crate::prelude::*;
use super::HeightField;

// Structs

/// One entry of a band table: everything at or below `height` (and above the previous band) gets `color`
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct TerrainBand {
	pub name: String,
	/// Upper height threshold, tables must be ascending on this
	pub height: Float,
	pub color: [u8; 3]
}

impl TerrainBand {
	pub fn new(name: &str, height: Float, color: [u8; 3]) -> Self {
		Self {
			name: name.to_owned(),
			height,
			color
		}
	}
}

/// Row-major color buffer, one pixel per height field cell, ready for a texture uploader
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct ColorMap {
	pub width: usize,
	pub height: usize,
	/// pixel = pixels[y * width + x]
	pub pixels: Vec<[u8; 3]>
}

impl ColorMap {
	pub fn get(&self, x: usize, y: usize) -> [u8; 3] {
		self.pixels[y * self.width + x]
	}
	/// Encodes the buffer as a PNG file in memory
	pub fn to_png_bytes(&self) -> Result<Vec<u8>, String> {
		let mut raw = Vec::<u8>::new();
		for pixel in &self.pixels {
			raw.extend_from_slice(pixel);
		}
		let image = RgbImage::from_raw(self.width as u32, self.height as u32, raw)
			.ok_or(format!("Pixel buffer does not match {}x{}", self.width, self.height))?;
		let mut out = Cursor::new(Vec::<u8>::new());
		to_string_err_with_message(image.write_to(&mut out, ImageFormat::Png), "PNG encoding")?;
		Ok(out.into_inner())
	}
}

// Functions

/// Colors every cell of the field from the band table. Hard band edges, no interpolation.
pub fn classify(field: &HeightField, bands: &[TerrainBand]) -> ColorMap {
	let size = field.size();
	let mut pixels = Vec::<[u8; 3]>::new();
	for y in 0..size {
		for x in 0..size {
			pixels.push(color_for_height(field.get(x, y), bands));
		}
	}
	ColorMap {
		width: size,
		height: size,
		pixels
	}
}

/// First band whose threshold is >= the height wins (equality maps to that band, not the next one up).
/// Above every threshold: the last band. Empty table: grayscale ramp from black to white.
/// An unordered table silently misclassifies, keeping tables ascending is the caller's job.
pub fn color_for_height(height: Float, bands: &[TerrainBand]) -> [u8; 3] {
	if bands.is_empty() {
		let value = (height.clamp(0.0, 1.0) * 255.0) as u8;
		return [value, value, value];
	}
	for band in bands {
		if height <= band.height {
			return band.color;
		}
	}
	bands[bands.len() - 1].color
}

/// Checks the ascending-threshold invariant of a band table
pub fn bands_ascending(bands: &[TerrainBand]) -> bool {
	for pair in bands.windows(2) {
		if pair[0].height > pair[1].height {
			return false;
		}
	}
	true
}
