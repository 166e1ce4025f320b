//! Floating-point 3D polytope library.
//!
//! - `geom3`: half-spaces, lazy H/V polytopes and resolved polyhedra with
//!   counter-clockwise facets.
//! - `library`: named constructors (Platonic, Archimedean, Catalan, Johnson,
//!   prisms, combinatorial polytopes) behind [`library::construct`].
//!
//! API Policy
//! - Consumed by the `polycat` registry through `construct`; everything else
//!   is public for tests, benches and examples, not as a stable surface.

pub mod geom3;
pub mod library;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom3::{Facet, Hs3, Poly3, Polyhedron};
pub use library::{construct, ConstructError};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom3::{Facet, Hs3, Poly3, Polyhedron};
    pub use crate::library::{construct, function_names, ConstructError};
    pub use nalgebra::Vector3 as Vec3;
}
