//! 3D Convex Polytopes (H- and V-representations; explicit, simple algorithms).
//!
//! Purpose
//! - Hull and facet machinery behind the named constructions in
//!   [`crate::library`]. Vertex counts stay in the low hundreds, so we favor
//!   clarity and explicit conversions over asymptotics.
//!
//! Assumptions and conventions
//! - Half-spaces use `n·x <= c`. V→H emits unit normals oriented outward,
//!   without assuming the origin is inside.
//! - Equality tests use tolerances from [`cfg`]: feasibility `1e-9`,
//!   tightness `1e-7`.
//! - Facets are derived from saturation sets of vertices; planes sharing a
//!   saturation set are one facet. Facet vertex cycles are counter-clockwise
//!   seen from outside.
//! - Arithmetic is `f64`; there is no exact mode.

mod cfg;
mod convert;
mod faces;
mod types;
mod util;

pub use faces::{Facet, Polyhedron};
pub use types::{Hs3, Poly3};

pub(crate) use cfg::DEDUP_EPS;
pub(crate) use util::dedup_points_in_place;
