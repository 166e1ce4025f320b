//! Dimension- and size-parametric families: simplices, cross-polytopes,
//! uniform prisms and antiprisms.
//!
//! Only 3-dimensional members are constructed; other dimensions are rejected
//! with [`ConstructError::UnsupportedArgument`].

use std::f64::consts::TAU;

use nalgebra::{Matrix3x4, Vector3, Vector4};

use crate::geom3::Polyhedron;

use super::symmetry::{signed_permutations, Perms, Signs};
use super::{degenerate, unsupported, ConstructError};

/// Largest polygon accepted by prism/antiprism constructors.
pub const MAX_POLYGON_SIDES: u32 = 100;

/// Regular polygon with unit edge length.
#[derive(Clone, Copy, Debug)]
pub(crate) struct RegularPolygon {
    pub angle: f64,
    pub in_radius: f64,
    pub out_radius: f64,
}

impl RegularPolygon {
    pub fn new(n: usize) -> Self {
        let angle = TAU / n as f64;
        Self {
            angle,
            in_radius: 1.0 / (2.0 * (angle / 2.0).tan()),
            out_radius: 1.0 / (2.0 * (angle / 2.0).sin()),
        }
    }

    /// Vertex `i` shifted by `offset` steps, lifted to height `z`.
    pub fn point(&self, i: usize, offset: f64, z: f64) -> Vector3<f64> {
        let theta = self.angle * (i as f64 + offset);
        Vector3::new(self.out_radius * theta.cos(), self.out_radius * theta.sin(), z)
    }
}

/// Isometric chart of the hyperplane `x1 + x2 + x3 + x4 = const` in R^4.
///
/// Rows are the orthonormal Helmert basis of the sum-zero subspace.
pub(crate) fn sum_zero_basis() -> Matrix3x4<f64> {
    let (a, b, c) = (2f64.sqrt(), 6f64.sqrt(), 12f64.sqrt());
    Matrix3x4::new(
        1.0 / a, -1.0 / a, 0.0, 0.0, //
        1.0 / b, 1.0 / b, -2.0 / b, 0.0, //
        1.0 / c, 1.0 / c, 1.0 / c, -3.0 / c,
    )
}

/// Map points of a hyperplane `Σx = const` in R^4 to R^3, centered at their mean.
pub(crate) fn project_sum_zero(points: &[Vector4<f64>]) -> Vec<Vector3<f64>> {
    let basis = sum_zero_basis();
    let mean = points.iter().fold(Vector4::zeros(), |acc, p| acc + p) / points.len().max(1) as f64;
    points.iter().map(|p| basis * (p - mean)).collect()
}

fn check_polygon_sides(function: &'static str, n: u32) -> Result<usize, ConstructError> {
    if n < 3 {
        return Err(unsupported(function, n, "a polygon needs at least 3 sides"));
    }
    if n > MAX_POLYGON_SIDES {
        return Err(unsupported(
            function,
            n,
            format!("at most {MAX_POLYGON_SIDES} sides are supported"),
        ));
    }
    Ok(n as usize)
}

/// Standard `d`-simplex `conv(e_1, …, e_{d+1})`, mapped isometrically into R^3 (edge √2).
pub fn simplex(d: u32) -> Result<Polyhedron, ConstructError> {
    if d != 3 {
        return Err(unsupported("simplex", d, "only the 3-dimensional simplex is constructed"));
    }
    let corners: Vec<Vector4<f64>> = (0..4)
        .map(|i| {
            let mut e = Vector4::zeros();
            e[i] = 1.0;
            e
        })
        .collect();
    Polyhedron::from_vertices(&project_sum_zero(&corners)).ok_or_else(|| degenerate("simplex"))
}

/// `d`-dimensional cross-polytope `conv(±e_i)`.
pub fn cross_polytope(d: u32) -> Result<Polyhedron, ConstructError> {
    if d != 3 {
        return Err(unsupported(
            "cross_polytope",
            d,
            "only the 3-dimensional cross-polytope is constructed",
        ));
    }
    Polyhedron::from_vertices(&signed_permutations(&[[1.0, 0.0, 0.0]], Perms::All, Signs::All))
        .ok_or_else(|| degenerate("cross_polytope"))
}

/// Uniform `n`-gonal prism (unit edges), axis along z.
pub fn regular_prism(n: u32) -> Result<Polyhedron, ConstructError> {
    let n = check_polygon_sides("regular_prism", n)?;
    let geom = RegularPolygon::new(n);
    let mut verts = Vec::with_capacity(2 * n);
    for i in 0..n {
        verts.push(geom.point(i, 0.0, -0.5));
        verts.push(geom.point(i, 0.0, 0.5));
    }
    Polyhedron::from_vertices(&verts).ok_or_else(|| degenerate("regular_prism"))
}

/// Uniform `n`-gonal antiprism (unit edges), axis along z.
pub fn regular_antiprism(n: u32) -> Result<Polyhedron, ConstructError> {
    let n = check_polygon_sides("regular_antiprism", n)?;
    let geom = RegularPolygon::new(n);
    let half_height =
        (((geom.angle / 2.0).cos() - geom.angle.cos()) / 2.0).sqrt() * geom.out_radius;
    let mut verts = Vec::with_capacity(2 * n);
    for i in 0..n {
        verts.push(geom.point(i, 0.0, -half_height));
        verts.push(geom.point(i, 0.5, half_height));
    }
    Polyhedron::from_vertices(&verts).ok_or_else(|| degenerate("regular_antiprism"))
}
