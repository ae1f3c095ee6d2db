//! Everything needed to build models with the wrappers.

pub use crate::options::*;
pub use crate::traits::{
    BooleanCombinable, GeometryWrapper, HullCombinable, Measurable, Operand, Transformable,
};
pub use crate::{Curve2D, ModelingError, PlanarRegion, Result, SolidMesh};
pub use glam::{DMat4, DVec2, DVec3};
