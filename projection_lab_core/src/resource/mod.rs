//! Resource module — CPU-side mesh and texture containers.
//!
//! Everything here is plain validated data. Decoding image files or mesh
//! formats is the caller's job; uploading to a device is the backend's.

mod mesh;
mod texture;

pub use mesh::{ExpandedMesh, TriangleIndices, TriangleMesh};
pub use texture::RgbaTexture;
