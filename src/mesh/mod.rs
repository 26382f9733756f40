//! Upload-ready triangle meshes.
//!
//! [`Mesh`] holds interleaved position/color vertices and `u32` triangle
//! indices laid out so they can be handed to a vertex buffer as raw bytes.

/// Minimal Wavefront OBJ reader (positions and faces only).
pub mod obj;

use bytemuck::{Pod, Zeroable};

pub use obj::{load_obj, load_obj_or_cube, parse_obj};

/// One vertex: position followed by RGB color.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Model-space position.
    pub position: [f32; 3],
    /// Linear RGB in `[0, 1]`.
    pub color: [f32; 3],
}

/// Indexed triangle list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex data.
    pub vertices: Vec<Vertex>,
    /// Three indices per triangle.
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Number of complete triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Vertex data as bytes (24 bytes per vertex).
    #[must_use]
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index data as bytes.
    #[must_use]
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Axis-aligned bounds `(min, max)` of the vertex positions, or `None`
    /// for an empty mesh.
    #[must_use]
    pub fn bounds(&self) -> Option<([f32; 3], [f32; 3])> {
        let first = self.vertices.first()?.position;
        Some(self.vertices.iter().fold((first, first), |(lo, hi), v| {
            let p = v.position;
            (
                [lo[0].min(p[0]), lo[1].min(p[1]), lo[2].min(p[2])],
                [hi[0].max(p[0]), hi[1].max(p[1]), hi[2].max(p[2])],
            )
        }))
    }

    /// Unit cube centered on the origin, one flat color per face.
    ///
    /// Stands in for a model that failed to load.
    #[must_use]
    pub fn unit_cube() -> Self {
        const H: f32 = 0.5;
        const FACES: [([[f32; 3]; 4], [f32; 3]); 6] = [
            // front (+z)
            ([[-H, -H, H], [H, -H, H], [H, H, H], [-H, H, H]], [1.0, 0.0, 0.0]),
            // back (-z)
            ([[-H, -H, -H], [-H, H, -H], [H, H, -H], [H, -H, -H]], [0.0, 1.0, 1.0]),
            // top (+y)
            ([[-H, H, H], [H, H, H], [H, H, -H], [-H, H, -H]], [0.0, 1.0, 0.0]),
            // bottom (-y)
            ([[-H, -H, H], [-H, -H, -H], [H, -H, -H], [H, -H, H]], [1.0, 0.0, 1.0]),
            // right (+x)
            ([[H, -H, H], [H, -H, -H], [H, H, -H], [H, H, H]], [0.0, 0.0, 1.0]),
            // left (-x)
            ([[-H, -H, H], [-H, H, H], [-H, H, -H], [-H, -H, -H]], [1.0, 1.0, 0.0]),
        ];

        let mut mesh = Self {
            vertices: Vec::with_capacity(24),
            indices: Vec::with_capacity(36),
        };
        for (corners, color) in FACES {
            let base = mesh.vertices.len() as u32;
            mesh.vertices.extend(
                corners.iter().map(|&position| Vertex { position, color }),
            );
            mesh.indices.extend_from_slice(&[
                base,
                base + 1,
                base + 2,
                base,
                base + 2,
                base + 3,
            ]);
        }
        mesh
    }
}
