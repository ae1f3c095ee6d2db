//! # Configuration Constants
//!
//! Centralized constants for the modeling kernel. All tolerance checks,
//! tessellation defaults and recursion limits are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Resolution**: Default segment counts for curved primitives
//! - **Limits**: Stack growth parameters for recursive algorithms

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Base epsilon of the modeling kernel.
///
/// The epsilon of a concrete geometry is derived from this value scaled by
/// the average extent of the geometry (see `measure_epsilon` in the kernel).
///
/// # Example
///
/// ```rust
/// use config::constants::EPS;
///
/// let dimensions = [5.0, 5.0];
/// let epsilon = EPS * (dimensions[0] + dimensions[1]) / 2.0;
/// assert!((epsilon - 5e-5).abs() < 1e-12);
/// ```
pub const EPS: f64 = 1e-5;

/// Tolerance used to classify points against splitting planes and lines
/// during BSP construction and clipping.
///
/// # Example
///
/// ```rust
/// use config::constants::PLANE_EPSILON;
///
/// let distance: f64 = 4e-6;
/// let coplanar = distance.abs() < PLANE_EPSILON;
/// assert!(coplanar);
/// ```
pub const PLANE_EPSILON: f64 = 1e-5;

/// Tolerance for welding nearly-identical vertices after boolean operations.
///
/// # Example
///
/// ```rust
/// use config::constants::VERTEX_MERGE_EPSILON;
///
/// fn should_weld(a: [f64; 2], b: [f64; 2]) -> bool {
///     let dx = a[0] - b[0];
///     let dy = a[1] - b[1];
///     (dx * dx + dy * dy).sqrt() < VERTEX_MERGE_EPSILON
/// }
///
/// assert!(should_weld([1.0, 1.0], [1.0, 1.0 + 1e-7]));
/// ```
pub const VERTEX_MERGE_EPSILON: f64 = 1e-5;

/// Tolerance below which a computed area, length or determinant is treated
/// as zero.
pub const NUMERIC_EPSILON: f64 = 1e-12;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Default segment count for circles, ellipses, spheres, cylinders and arcs.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_SEGMENTS;
///
/// let user_segments: Option<usize> = None;
/// assert_eq!(user_segments.unwrap_or(DEFAULT_SEGMENTS), 32);
/// ```
pub const DEFAULT_SEGMENTS: usize = 32;

/// Default number of angular steps used by rotational extrusion.
pub const DEFAULT_ROTATE_SEGMENTS: usize = 12;

/// Default number of segments used when appending arcs or bezier curves to
/// a path.
pub const DEFAULT_CURVE_SEGMENTS: usize = 16;

/// Smallest segment count that still forms a closed polygon.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_SEGMENTS;
///
/// let requested = 2;
/// assert!(requested < MIN_SEGMENTS);
/// ```
pub const MIN_SEGMENTS: usize = 3;

/// Smallest segment count accepted when appending arcs to a path.
pub const MIN_ARC_SEGMENTS: usize = 4;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Remaining stack below which recursive kernel algorithms allocate a new
/// stack segment through `stacker`.
///
/// # Example
///
/// ```rust
/// use config::constants::STACK_RED_ZONE_BYTES;
///
/// assert!(STACK_RED_ZONE_BYTES >= 32 * 1024);
/// ```
pub const STACK_RED_ZONE_BYTES: usize = 128 * 1024;

/// Size of every stack segment allocated by `stacker` for deep BSP trees.
///
/// # Example
///
/// ```rust
/// use config::constants::{STACK_GROW_BYTES, STACK_RED_ZONE_BYTES};
///
/// assert!(STACK_GROW_BYTES > STACK_RED_ZONE_BYTES);
/// ```
pub const STACK_GROW_BYTES: usize = 8 * 1024 * 1024;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two values are equal within `EPS`.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-7));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPS
}

/// Checks if a value is zero within `EPS`.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-7));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPS
}

/// Epsilon of a geometry with the given extents.
///
/// `EPS` scaled by the mean of the dimensions, so larger models tolerate
/// proportionally larger numerical noise.
///
/// # Example
///
/// ```rust
/// use config::constants::scaled_epsilon;
///
/// let epsilon = scaled_epsilon(&[3.0, 5.0, 7.0]);
/// assert!((epsilon - 5e-5).abs() < 1e-12);
/// ```
pub fn scaled_epsilon(dimensions: &[f64]) -> f64 {
    if dimensions.is_empty() {
        return 0.0;
    }
    EPS * dimensions.iter().sum::<f64>() / dimensions.len() as f64
}
