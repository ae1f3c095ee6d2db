//! # Geometries
//!
//! The immutable geometry values every kernel operation consumes and
//! produces.
//!
//! - [`Geom2`]: a 2D region described by directed sides
//! - [`Geom3`]: a 3D solid described by planar convex polygons
//! - [`Path2`]: an ordered 2D point sequence with an explicit closed flag
//!
//! Values are plain data. Operations never mutate their inputs; they return
//! new values instead.

pub mod geom2;
pub mod geom3;
pub mod path2;
pub mod plane;
pub mod poly3;

pub use geom2::{Geom2, Side};
pub use geom3::Geom3;
pub use path2::Path2;
pub use plane::Plane;
pub use poly3::Poly3;

use glam::{DVec2, DVec3};

/// RGBA color with every channel in `0.0..=1.0`.
pub type Rgba = [f64; 4];

/// Hashable identity of a 2D point.
///
/// Negative zero is folded into positive zero so that points produced by
/// different arithmetic paths still match.
pub(crate) type PointKey = (u64, u64);

pub(crate) fn point_key(point: DVec2) -> PointKey {
    ((point.x + 0.0).to_bits(), (point.y + 0.0).to_bits())
}

pub(crate) type VertexKey = (u64, u64, u64);

pub(crate) fn vertex_key(vertex: DVec3) -> VertexKey {
    (
        (vertex.x + 0.0).to_bits(),
        (vertex.y + 0.0).to_bits(),
        (vertex.z + 0.0).to_bits(),
    )
}

pub(crate) fn fmt_vec2(point: DVec2) -> String {
    format!("[{:.7}, {:.7}]", point.x, point.y)
}

pub(crate) fn fmt_vec3(vertex: DVec3) -> String {
    format!("[{:.7}, {:.7}, {:.7}]", vertex.x, vertex.y, vertex.z)
}
