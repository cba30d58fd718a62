/*!
# Projection Lab Core

Numeric core of a set of interactive 3D-projection demos: an orbit camera,
frustum geometry, perspective/orthographic projection math with
perspective-correct texture-mapping support, and the render-mode state
machine that drives the demos.

The crate deliberately stops at the backend seam: meshes and textures come
in as already-decoded arrays, and draw data goes out as byte buffers plus
column-major 4x4 uniforms through the [`renderer::GraphicsBackend`] trait.
Windowing, GPU resource lifetimes, and asset parsing belong to the caller.

## Architecture

- **camera**: `OrbitCamera` transform/view math and frustum builders
- **projection**: projection matrices, point projection, memoized
  whole-mesh reprojection with depth reciprocals
- **render**: `RenderMode` state machine and the owned `RenderState`
- **resource**: validated CPU-side mesh/texture containers
- **renderer**: backend trait, draw submissions, headless backend
*/

// Internal modules
mod error;
pub mod camera;
pub mod input;
pub mod log;
pub mod projection;
pub mod render;
pub mod renderer;
pub mod resource;

// Main projlab namespace module
pub mod projlab {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
        // Note: lab_* macros are NOT re-exported here - they are exported at the crate root
    }

    // Input sub-module
    pub mod input {
        pub use crate::input::*;
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Projection sub-module
    pub mod projection {
        pub use crate::projection::*;
    }

    // Render sub-module
    pub mod render {
        pub use crate::render::*;
    }

    // Renderer seam sub-module
    pub mod renderer {
        pub use crate::renderer::*;
    }

    // Resource sub-module
    pub mod resource {
        pub use crate::resource::*;
    }
}

pub use error::{Error, Result};

// Re-export math library at crate root
pub use glam;
