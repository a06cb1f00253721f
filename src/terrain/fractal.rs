//! Fractal height field synthesis (midpoint displacement, a.k.a. diamond-square)

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::prelude::*;
use super::HeightField;

/// Fills a `size` x `size` grid (`size = 2^k + 1`) with raw elevations by iterative midpoint displacement.
///
/// All randomness comes from a single ChaCha stream seeded here, consumed in a fixed order
/// (2 corner draws, then one draw per diamond/square cell, row by row per step level), so the
/// same arguments always reproduce the same grid bit-for-bit. The generator must never be
/// shared with another call.
///
/// `roughness <= 0` or `initial_height <= 0` is a contract violation and produces degenerate
/// output, callers are expected to validate.
pub fn synthesize(size: usize, seed: u64, roughness: Float, initial_height: Float, base_level: Float) -> HeightField {
	let mut rng = ChaCha8Rng::seed_from_u64(seed);
	let mut grid = vec![vec![0.0 as Float; size]; size];
	// Base row is a constant floor
	let base_height = base_level * initial_height;
	for x in 0..size {
		grid[0][x] = base_height;
	}
	// Top corners get independent starting displacements
	grid[size - 1][0] = base_height + rand_unit(&mut rng) * initial_height;
	grid[size - 1][size - 1] = base_height + rand_unit(&mut rng) * initial_height;
	// Subdivide, halving the step and decaying the displacement each level
	let mut step = size - 1;
	let mut scale = initial_height;
	while step > 1 {
		let half = step / 2;
		// Diamond pass: cell centers from their 4 diagonal corners
		let mut y = half;
		while y < size {
			let mut x = half;
			while x < size {
				let average = (
					grid[y - half][x - half]
					+ grid[y - half][x + half]
					+ grid[y + half][x - half]
					+ grid[y + half][x + half]
				) / 4.0;
				grid[y][x] = average + (rand_unit(&mut rng) * 2.0 - 1.0) * scale;
				x += step;
			}
			y += step;
		}
		// Square pass: edge midpoints from whichever axis neighbors exist (2, 3 or 4 of them).
		// Runs only after the diamond pass has finished this level. Starts at y = half so the
		// base row is never revisited (and consumes no draws for it).
		let mut y = half;
		while y < size {
			let mut x = (y + half) % step;
			while x < size {
				let mut average = 0.0;
				let mut count = 0;
				if x >= half {
					average += grid[y][x - half];
					count += 1;
				}
				if x + half < size {
					average += grid[y][x + half];
					count += 1;
				}
				if y >= half {
					average += grid[y - half][x];
					count += 1;
				}
				if y + half < size {
					average += grid[y + half][x];
					count += 1;
				}
				if count > 0 {
					average /= count as Float;
					grid[y][x] = average + (rand_unit(&mut rng) * 2.0 - 1.0) * scale;
				}
				x += step;
			}
			y += half;
		}
		step /= 2;
		scale *= roughness;
	}
	// Done
	HeightField {
		grid
	}
}

/// Rescales a raw field into `[base_level, 1]` and applies the mountain-height power curve.
///
/// The base row is forced back to exactly `base_level` in every column no matter what the raw
/// values were. A completely flat field is returned unchanged (nothing to divide by).
pub fn normalize(field: &mut HeightField, base_level: Float, mountain_height: Float) {
	let (min, max) = field.min_max();
	let range = max - min;
	if range > 0.0 {
		let size = field.size();
		for y in 0..size {
			for x in 0..size {
				if y == 0 {
					// Flat-base invariant
					field.grid[y][x] = base_level;
				}
				else {
					let normalized = (field.grid[y][x] - min) / range;
					let rescaled = base_level + normalized * (1.0 - base_level);
					// Power applied after the rescale
					field.grid[y][x] = rescaled.powf(mountain_height);
				}
			}
		}
	}
}

/// One draw in [0, 1), drawn at f64 precision then narrowed
fn rand_unit(rng: &mut ChaCha8Rng) -> Float {
	rng.gen::<f64>() as Float
}
