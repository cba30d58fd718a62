/// Indexed triangle meshes with independent position and UV indexing.
///
/// Source meshes index positions and texture coordinates separately, the
/// way OBJ-style data arrives. GPUs want one index per vertex, so
/// [`TriangleMesh::expand`] flattens to per-corner vertices before
/// upload.

use glam::{Vec2, Vec3};

use crate::error::{Error, Result};

/// One triangle's corner indices into the position and UV arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriangleIndices {
    pub positions: [u16; 3],
    pub uvs: [u16; 3],
}

/// An indexed triangle mesh as authored: positions and UVs are shared
/// between faces and indexed independently per corner.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleMesh {
    pub positions: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
    pub indices: Vec<TriangleIndices>,
}

impl TriangleMesh {
    /// Check that every index lands inside its array.
    pub fn validate(&self) -> Result<()> {
        for (face, triangle) in self.indices.iter().enumerate() {
            for &index in &triangle.positions {
                if usize::from(index) >= self.positions.len() {
                    return Err(Error::InvalidMesh(format!(
                        "face {face}: position index {index} out of bounds ({} positions)",
                        self.positions.len()
                    )));
                }
            }
            for &index in &triangle.uvs {
                if usize::from(index) >= self.uvs.len() {
                    return Err(Error::InvalidMesh(format!(
                        "face {face}: uv index {index} out of bounds ({} uvs)",
                        self.uvs.len()
                    )));
                }
            }
        }
        Ok(())
    }

    /// Flatten to one vertex per triangle corner.
    ///
    /// `flip_v` mirrors the V coordinate (`v -> 1 - v`) for backends
    /// whose texture origin is top-left. Fails if the mesh is invalid or
    /// the flattened vertex count overflows `u16` indices.
    pub fn expand(&self, flip_v: bool) -> Result<ExpandedMesh> {
        self.validate()?;

        let vertex_count = self.indices.len() * 3;
        if vertex_count > usize::from(u16::MAX) {
            return Err(Error::InvalidMesh(format!(
                "{} faces expand to {vertex_count} vertices, beyond 16-bit indexing",
                self.indices.len()
            )));
        }

        let mut positions = Vec::with_capacity(vertex_count);
        let mut uvs = Vec::with_capacity(vertex_count);
        for triangle in &self.indices {
            for corner in 0..3 {
                positions.push(self.positions[usize::from(triangle.positions[corner])]);
                let mut uv = self.uvs[usize::from(triangle.uvs[corner])];
                if flip_v {
                    uv.y = 1.0 - uv.y;
                }
                uvs.push(uv);
            }
        }

        Ok(ExpandedMesh {
            positions,
            uvs,
            indices: (0..vertex_count as u16).collect(),
        })
    }

    /// The demos' stock mesh: a unit cube centered on the origin, each
    /// face mapped to the full texture.
    pub fn unit_cube() -> Self {
        let positions = vec![
            Vec3::new(-0.5, -0.5, -0.5),
            Vec3::new(0.5, -0.5, -0.5),
            Vec3::new(0.5, 0.5, -0.5),
            Vec3::new(-0.5, 0.5, -0.5),
            Vec3::new(-0.5, -0.5, 0.5),
            Vec3::new(0.5, -0.5, 0.5),
            Vec3::new(0.5, 0.5, 0.5),
            Vec3::new(-0.5, 0.5, 0.5),
        ];
        let uvs = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
        ];
        // Two triangles per face, counter-clockwise from outside.
        let quads: [[u16; 4]; 6] = [
            [0, 3, 2, 1], // back  (-Z)
            [4, 5, 6, 7], // front (+Z)
            [0, 4, 7, 3], // left  (-X)
            [1, 2, 6, 5], // right (+X)
            [3, 7, 6, 2], // top   (+Y)
            [0, 1, 5, 4], // bottom (-Y)
        ];
        let mut indices = Vec::with_capacity(quads.len() * 2);
        for quad in quads {
            indices.push(TriangleIndices {
                positions: [quad[0], quad[1], quad[2]],
                uvs: [0, 3, 2],
            });
            indices.push(TriangleIndices {
                positions: [quad[0], quad[2], quad[3]],
                uvs: [0, 2, 1],
            });
        }

        Self {
            positions,
            uvs,
            indices,
        }
    }
}

/// A mesh flattened for upload: one position and one UV per corner,
/// sequential indices.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpandedMesh {
    pub positions: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
    pub indices: Vec<u16>,
}

impl ExpandedMesh {
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    pub fn uv_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.uvs)
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

#[cfg(test)]
#[path = "mesh_tests.rs"]
mod tests;
