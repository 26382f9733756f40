//! Reads the position/face subset of Wavefront OBJ.
//!
//! Only `v x y z` and `f a b c ...` lines are looked at; normals, texture
//! coordinates, groups and materials are skipped. Faces with more than
//! three corners are fan-triangulated. The result is recentered on its
//! bounding-box midpoint and scaled so the longest axis spans 2 units,
//! with a color ramp derived from the normalized position.
//!
//! Malformed coordinates are not reported: they become NaN and show up as
//! broken geometry.

use std::path::Path;

use glam::Vec3;

use super::{Mesh, Vertex};
use crate::error::CamkitError;

/// Parse OBJ text into a normalized, colored mesh.
#[must_use]
pub fn parse_obj(text: &str) -> Mesh {
    let mut positions: Vec<Vec3> = Vec::new();
    let mut indices: Vec<u32> = Vec::new();

    for line in text.lines() {
        let mut parts = line.split_whitespace();
        match parts.next() {
            Some("v") => {
                let mut coord = || parse_coord(parts.next());
                let (x, y, z) = (coord(), coord(), coord());
                positions.push(Vec3::new(x, y, z));
            }
            Some("f") => {
                let corners: Option<Vec<u32>> = parts
                    .map(|part| parse_index(part, positions.len()))
                    .collect();
                match corners {
                    Some(corners) => fan_triangulate(&corners, &mut indices),
                    None => log::debug!("skipping malformed face: {line}"),
                }
            }
            _ => {}
        }
    }

    let vertices = normalize_positions(&positions)
        .into_iter()
        .map(|p| Vertex {
            position: p.to_array(),
            color: ((p + Vec3::ONE) * 0.5).to_array(),
        })
        .collect();

    Mesh { vertices, indices }
}

/// Read and parse an OBJ file.
pub fn load_obj(path: &Path) -> Result<Mesh, CamkitError> {
    let text = std::fs::read_to_string(path)?;
    let mesh = parse_obj(&text);
    log::info!(
        "loaded {}: {} vertices, {} triangles",
        path.display(),
        mesh.vertices.len(),
        mesh.triangle_count()
    );
    Ok(mesh)
}

/// Like [`load_obj`], but falls back to [`Mesh::unit_cube`] when the file
/// cannot be read.
#[must_use]
pub fn load_obj_or_cube(path: &Path) -> Mesh {
    load_obj(path).unwrap_or_else(|e| {
        log::warn!("failed to load {}: {e}; using default cube", path.display());
        Mesh::unit_cube()
    })
}

fn parse_coord(token: Option<&str>) -> f32 {
    token.and_then(|t| t.parse().ok()).unwrap_or(f32::NAN)
}

/// First `/`-separated field of a face corner, converted to a 0-based
/// index. Negative values count back from the most recent vertex.
fn parse_index(corner: &str, vertex_count: usize) -> Option<u32> {
    let raw: i64 = corner.split('/').next()?.parse().ok()?;
    let index = match raw {
        0 => return None,
        r if r > 0 => r - 1,
        r => vertex_count as i64 + r,
    };
    u32::try_from(index).ok()
}

fn fan_triangulate(corners: &[u32], out: &mut Vec<u32>) {
    for pair in corners.get(1..).unwrap_or_default().windows(2) {
        out.extend_from_slice(&[corners[0], pair[0], pair[1]]);
    }
}

fn normalize_positions(positions: &[Vec3]) -> Vec<Vec3> {
    let (min, max) = positions.iter().fold(
        (Vec3::splat(f32::INFINITY), Vec3::splat(f32::NEG_INFINITY)),
        |(lo, hi), &p| (lo.min(p), hi.max(p)),
    );
    let center = (min + max) * 0.5;
    let extent = (max - min).max_element();
    // A single point (or coincident points) has no extent to fit.
    let scale = if extent > 0.0 { 2.0 / extent } else { 1.0 };

    positions.iter().map(|&p| (p - center) * scale).collect()
}
