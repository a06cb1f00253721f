//! Triangulated render surface built from a height field

use serde::{Serialize, Deserialize};

use crate::prelude::*;
use super::HeightField;

/// One vertex per height field cell in row-major order, two triangles per grid square
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct TerrainMesh {
	pub vertices: Vec<P3>,
	pub triangles: Vec<[u32; 3]>,
	pub uvs: Vec<[f32; 2]>,
	pub normals: Vec<V3>
}

impl TerrainMesh {
	pub fn is_valid(&self) -> Result<(), String> {
		// Check that all indices are within limits
		for triangle in &self.triangles {
			for index in triangle {
				if index >= &(self.vertices.len() as u32) {
					return Err(format!("TerrainMesh::is_valid(): index out of bounds"));
				}
			}
		}
		// Check attribute lengths agree
		if self.uvs.len() != self.vertices.len() || self.normals.len() != self.vertices.len() {
			return Err(format!("TerrainMesh::is_valid(): attribute length mismatch"));
		}
		// Done
		Ok(())
	}
	/// Gets the `vertices` index corresponding to grid X and Y coordinates
	/// ```
	/// use luso_lander::prelude::TerrainMesh;
	/// assert_eq!(TerrainMesh::vertex_index(3, 2, 9), 21);
	/// assert_eq!(TerrainMesh::vertex_index(0, 0, 9), 0);
	/// ```
	pub fn vertex_index(x: usize, y: usize, width: usize) -> u32 {
		(y * width + x) as u32
	}
}

/// Builds the surface: vertex `(x, y)` lands at world `(x, height, y) * terrain_scale`,
/// UVs span the unit square, winding keeps faces pointing up (+Y).
pub fn build(field: &HeightField, terrain_scale: Float) -> TerrainMesh {
	let size = field.size();
	// Vertices and UVs
	let mut vertices = Vec::<P3>::new();
	let mut uvs = Vec::<[f32; 2]>::new();
	for y in 0..size {
		for x in 0..size {
			vertices.push(P3::new(
				x as Float * terrain_scale,
				field.get(x, y) * terrain_scale,
				y as Float * terrain_scale
			));
			uvs.push([
				x as f32 / (size - 1) as f32,
				y as f32 / (size - 1) as f32
			]);
		}
	}
	// Triangles, two per grid square
	let mut triangles = Vec::<[u32; 3]>::new();
	for y in 0..size - 1 {
		for x in 0..size - 1 {
			let i = TerrainMesh::vertex_index(x, y, size);
			let w = size as u32;
			// 1
			triangles.push([i, i + w, i + 1]);
			// 2
			triangles.push([i + 1, i + w, i + w + 1]);
		}
	}
	// Smooth normals
	let normals = smooth_normals(&vertices, &triangles);
	// Done
	TerrainMesh {
		vertices,
		triangles,
		uvs,
		normals
	}
}

/// Per-vertex normals by accumulating each face normal onto its 3 corners, then normalizing
fn smooth_normals(vertices: &Vec<P3>, triangles: &Vec<[u32; 3]>) -> Vec<V3> {
	let mut normals = vec![V3::zeros(); vertices.len()];
	for triangle in triangles {
		let a = vertices[triangle[0] as usize];
		let b = vertices[triangle[1] as usize];
		let c = vertices[triangle[2] as usize];
		let face_normal = (b - a).cross(&(c - a));// Not normalized here, larger faces weigh more
		for index in triangle {
			normals[*index as usize] += face_normal;
		}
	}
	for normal in &mut normals {
		let magnitude = normal.magnitude();
		if magnitude > EPSILON {// Degenerate faces contribute nothing
			*normal /= magnitude;
		}
	}
	normals
}
