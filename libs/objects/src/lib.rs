//! # Modeling Objects
//!
//! Fluent, immutable wrappers over the [`modeling`] kernel.
//!
//! ## Architecture
//!
//! ```text
//! PlanarRegion (Geom2) ──extrude──▶ SolidMesh (Geom3)
//!        ▲                               │
//!        └───────────project─────────────┘
//! Curve2D (Path2) ──expand──▶ PlanarRegion
//! Curve2D (Path2) ──extrude─▶ SolidMesh
//! ```
//!
//! Every operation returns a new wrapper around a new geometry value; the
//! receiver and operands are never changed. Shared operations live in
//! [`traits`]; kind-specific ones are inherent methods.
//!
//! Errors are the kernel's own [`ModelingError`], passed through unchanged.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use modeling_objects::prelude::*;
//!
//! let a = PlanarRegion::square(&SquareOptions { size: 5.0, ..Default::default() })?;
//! let b = a.translate([2.5, 2.5, 0.0]);
//! let both = a.union([&b])?;
//! assert_eq!(both.to_sides().len(), 8);
//! ```

pub mod curve;
pub mod prelude;
pub mod region;
pub mod solid;
pub mod traits;

pub use curve::Curve2D;
pub use region::PlanarRegion;
pub use solid::SolidMesh;

pub use modeling::{ModelingError, Result};

/// Option structs accepted by the wrapper methods.
pub mod options {
    pub use modeling::colors::ColorSpec;
    pub use modeling::expansions::{Corners, ExpandOptions, OffsetOptions};
    pub use modeling::extrusions::{
        ExtrudeHelicalOptions, ExtrudeLinearOptions, ExtrudeRectangularOptions,
        ExtrudeRotateOptions, ProjectOptions,
    };
    pub use modeling::geometries::path2::{AppendArcOptions, AppendBezierOptions};
    pub use modeling::primitives::{
        ArcOptions, CircleOptions, CubeOptions, CuboidOptions, CylinderEllipticOptions,
        CylinderOptions, EllipseOptions, EllipsoidOptions, GeodesicSphereOptions, Orientation,
        PolygonOptions, PolyhedronOptions, RectangleOptions, RoundedCuboidOptions,
        RoundedCylinderOptions, RoundedRectangleOptions, SphereOptions, SquareOptions,
        StarOptions, TorusOptions,
    };
    pub use modeling::transforms::{AlignMode, AlignOptions, CenterOptions, MirrorOptions};
}
