//! Collision data derived from a generated terrain

use serde::{Serialize, Deserialize};

use crate::prelude::*;
use super::{HeightField, mesh::TerrainMesh};

/// What a physics host collides against
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub enum CollisionBoundary {
	/// Full 3D collision surface, same vertex/triangle data as the render mesh
	Surface(TerrainMesh),
	/// 2D fallback: ordered polyline for hosts that only do planar collision
	Edge(Vec<P2>)
}

/// Derives collision data. `prefer_volume` picks the full surface; otherwise an ordered
/// polyline `(x * scale, height * scale)` is emitted across the base row.
// TODO: make the 2D edge follow the terrain silhouette (per-column surface height) instead of
// the flat base row, the lander currently only ever touches a level floor in 2D hosts
pub fn extract(field: &HeightField, mesh: &TerrainMesh, terrain_scale: Float, prefer_volume: bool) -> CollisionBoundary {
	if prefer_volume {
		CollisionBoundary::Surface(mesh.clone())
	}
	else {
		let mut points = Vec::<P2>::new();
		for x in 0..field.size() {
			points.push(P2::new(
				x as Float * terrain_scale,
				field.get(x, 0) * terrain_scale
			));
		}
		CollisionBoundary::Edge(points)
	}
}
