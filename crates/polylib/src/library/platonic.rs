//! Platonic solids in their standard coordinates (origin-centered).

use crate::geom3::Polyhedron;

use super::symmetry::{signed_permutations, Perms, Signs, PHI};

/// Alternate vertices of the cube `[-1,1]^3` (edge `2√2`).
pub fn tetrahedron() -> Option<Polyhedron> {
    Polyhedron::from_vertices(&signed_permutations(
        &[[1.0, 1.0, 1.0]],
        Perms::All,
        Signs::EvenMinus,
    ))
}

/// The cube `[-1,1]^3`.
pub fn cube() -> Option<Polyhedron> {
    Polyhedron::from_vertices(&signed_permutations(
        &[[1.0, 1.0, 1.0]],
        Perms::All,
        Signs::All,
    ))
}

/// Unit vectors `±e_i`.
pub fn octahedron() -> Option<Polyhedron> {
    Polyhedron::from_vertices(&signed_permutations(
        &[[1.0, 0.0, 0.0]],
        Perms::All,
        Signs::All,
    ))
}

/// `(±1,±1,±1)` and even permutations of `(0, ±1/φ, ±φ)` (edge `2/φ`).
pub fn dodecahedron() -> Option<Polyhedron> {
    let mut v = signed_permutations(&[[1.0, 1.0, 1.0]], Perms::All, Signs::All);
    v.extend(signed_permutations(
        &[[0.0, 1.0 / PHI, PHI]],
        Perms::Even,
        Signs::All,
    ));
    Polyhedron::from_vertices(&v)
}

/// Even permutations of `(0, ±1, ±φ)` (edge 2).
pub fn icosahedron() -> Option<Polyhedron> {
    Polyhedron::from_vertices(&signed_permutations(
        &[[0.0, 1.0, PHI]],
        Perms::Even,
        Signs::All,
    ))
}
