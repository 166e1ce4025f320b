//! Core 3D types: half-spaces and polytopes with lazy H/V caches.

use nalgebra::Vector3;

use super::cfg::FEAS_EPS;
use super::convert::{h_to_vertices, v_to_halfspaces};
use super::faces::Polyhedron;

/// Closed half-space `n · x <= c` in R^3.
///
/// Invariants:
/// - `n` is not normalized; `c` is any finite real.
/// - Membership uses `<= c + FEAS_EPS`.
#[derive(Clone, Copy, Debug)]
pub struct Hs3 {
    pub n: Vector3<f64>,
    pub c: f64,
}

impl Hs3 {
    #[inline]
    pub fn new(n: Vector3<f64>, c: f64) -> Self {
        Self { n, c }
    }
    #[inline]
    pub fn satisfies(&self, p: Vector3<f64>) -> bool {
        self.n.dot(&p) <= self.c + FEAS_EPS
    }
}

/// Polytope in R^3; either representation may be empty, compute on demand.
///
/// Invariants:
/// - `h` and `v` are caches; one or both may be empty.
/// - Use `ensure_vertices_from_h()` or `ensure_halfspaces_from_v()` to populate.
#[derive(Clone, Debug, Default)]
pub struct Poly3 {
    pub h: Vec<Hs3>,
    pub v: Vec<Vector3<f64>>,
}

impl Poly3 {
    #[inline]
    pub fn from_h(h: Vec<Hs3>) -> Self {
        Self { h, v: Vec::new() }
    }

    /// H→V conversion by intersecting triples of constraint planes.
    ///
    /// Complexity: O(H^3 · H).
    pub fn ensure_vertices_from_h(&mut self) {
        if !self.v.is_empty() {
            return;
        }
        self.v = h_to_vertices(&self.h);
    }

    /// V→H conversion by enumerating supporting planes through vertex triples.
    ///
    /// Complexity: O(V^3 · V) worst case; non-supporting triples are rejected
    /// at the first vertex on the wrong side.
    pub fn ensure_halfspaces_from_v(&mut self) {
        if !self.h.is_empty() {
            return;
        }
        self.h = v_to_halfspaces(&self.v);
    }

    /// Check convexity by verifying each vertex satisfies all inequalities.
    pub fn is_convex(&mut self) -> bool {
        if self.h.is_empty() && self.v.is_empty() {
            return false;
        }
        if self.v.is_empty() {
            self.ensure_vertices_from_h();
        }
        if self.h.is_empty() {
            self.ensure_halfspaces_from_v();
        }
        self.v
            .iter()
            .all(|&x| self.h.iter().all(|h| h.satisfies(x)))
    }

    /// Resolve both representations and enumerate facets.
    ///
    /// Returns `None` when the input is empty or not full-dimensional.
    pub fn resolve(mut self) -> Option<Polyhedron> {
        if self.v.is_empty() {
            self.ensure_vertices_from_h();
        }
        Polyhedron::from_vertices(&self.v)
    }
}
