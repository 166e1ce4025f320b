//! Tolerance defaults for 3D geometry (internal).
//!
//! Policy
//! - Fixed constants, not configurable per call. Catalog solids have
//!   coordinates of order 1..10, so absolute tolerances are adequate.

/// Feasibility/membership epsilon used by `Hs3::satisfies` and supporting-plane checks.
pub(crate) const FEAS_EPS: f64 = 1e-9;
/// Tightness threshold for "near-active" inequalities during facet enumeration.
pub(crate) const TIGHT_EPS: f64 = 1e-7;
/// Two points closer than this are the same vertex.
pub(crate) const DEDUP_EPS: f64 = 1e-7;
/// Cross products below this norm mark a vertex triple as collinear.
pub(crate) const COLLINEAR_EPS: f64 = 1e-12;
