//! Archimedean solids (origin-centered, uniform edge lengths).
//!
//! Non-chiral solids expand seed tuples under signed permutations:
//! - octahedral family: all permutations, all signs;
//! - tetrahedral family: all permutations, even number of minus signs;
//! - icosahedral family: even permutations, all signs.
//!
//! Snub solids are orbits of the Wythoff snub point under the chiral rotation
//! group: the unique point in a fundamental triangle that the three vertex
//! rotations of the triangle displace by equal distances.

use std::f64::consts::{SQRT_2, TAU};

use nalgebra::{Matrix2, Vector2, Vector3};

use crate::geom3::Polyhedron;

use super::symmetry::{
    icosahedral_rotations, octahedral_rotations, orbit, signed_permutations, Perms, Signs, PHI,
};

const SNUB_TOL: f64 = 1e-13;
const SNUB_MAX_ITERS: usize = 100;
const SNUB_FD_STEP: f64 = 1e-7;

fn octahedral(seeds: &[[f64; 3]]) -> Option<Polyhedron> {
    Polyhedron::from_vertices(&signed_permutations(seeds, Perms::All, Signs::All))
}

fn icosahedral(seeds: &[[f64; 3]]) -> Option<Polyhedron> {
    Polyhedron::from_vertices(&signed_permutations(seeds, Perms::Even, Signs::All))
}

/* Tetrahedral */

pub fn truncated_tetrahedron() -> Option<Polyhedron> {
    Polyhedron::from_vertices(&signed_permutations(
        &[[3.0, 1.0, 1.0]],
        Perms::All,
        Signs::EvenMinus,
    ))
}

/* Octahedral */

pub fn cuboctahedron() -> Option<Polyhedron> {
    octahedral(&[[1.0, 1.0, 0.0]])
}

pub fn truncated_cube() -> Option<Polyhedron> {
    octahedral(&[[SQRT_2 - 1.0, 1.0, 1.0]])
}

pub fn truncated_octahedron() -> Option<Polyhedron> {
    octahedral(&[[0.0, 1.0, 2.0]])
}

pub fn rhombicuboctahedron() -> Option<Polyhedron> {
    octahedral(&[[1.0, 1.0, 1.0 + SQRT_2]])
}

/// Great rhombicuboctahedron.
pub fn truncated_cuboctahedron() -> Option<Polyhedron> {
    octahedral(&[[1.0, 1.0 + SQRT_2, 1.0 + 2.0 * SQRT_2]])
}

pub fn snub_cube() -> Option<Polyhedron> {
    let seed = wythoff_snub_point(
        [Vector3::z(), Vector3::new(1.0, 1.0, 1.0), Vector3::new(1.0, 0.0, 1.0)],
        [4.0, 3.0, 2.0],
    )?;
    Polyhedron::from_vertices(&orbit(seed, &octahedral_rotations()))
}

/* Icosahedral */

pub fn icosidodecahedron() -> Option<Polyhedron> {
    let mut v = signed_permutations(&[[0.0, 0.0, PHI]], Perms::All, Signs::All);
    v.extend(signed_permutations(
        &[[0.5, PHI / 2.0, PHI * PHI / 2.0]],
        Perms::Even,
        Signs::All,
    ));
    Polyhedron::from_vertices(&v)
}

pub fn truncated_dodecahedron() -> Option<Polyhedron> {
    icosahedral(&[
        [0.0, 1.0 / PHI, 2.0 + PHI],
        [1.0 / PHI, PHI, 2.0 * PHI],
        [PHI, 2.0, PHI + 1.0],
    ])
}

pub fn truncated_icosahedron() -> Option<Polyhedron> {
    icosahedral(&[
        [0.0, 1.0, 3.0 * PHI],
        [1.0, 2.0 + PHI, 2.0 * PHI],
        [PHI, 2.0, PHI.powi(3)],
    ])
}

pub fn rhombicosidodecahedron() -> Option<Polyhedron> {
    icosahedral(&[
        [1.0, 1.0, PHI.powi(3)],
        [PHI * PHI, PHI, 2.0 * PHI],
        [2.0 + PHI, 0.0, PHI * PHI],
    ])
}

/// Great rhombicosidodecahedron.
pub fn truncated_icosidodecahedron() -> Option<Polyhedron> {
    icosahedral(&[
        [1.0 / PHI, 1.0 / PHI, 3.0 + PHI],
        [2.0 / PHI, PHI, 1.0 + 2.0 * PHI],
        [1.0 / PHI, PHI * PHI, 3.0 * PHI - 1.0],
        [2.0 * PHI - 1.0, 2.0, 2.0 + PHI],
        [PHI, 3.0, 2.0 * PHI],
    ])
}

pub fn snub_dodecahedron() -> Option<Polyhedron> {
    // face axis, vertex axis and edge midpoint of the dodecahedron in
    // `symmetry::icosahedral_rotations` coordinates
    let seed = wythoff_snub_point(
        [
            Vector3::new(0.0, PHI, 1.0),
            Vector3::new(1.0, 1.0, 1.0),
            Vector3::new(PHI, PHI * PHI, 1.0),
        ],
        [5.0, 3.0, 2.0],
    )?;
    Polyhedron::from_vertices(&orbit(seed, &icosahedral_rotations()))
}

/// Squared displacement of unit `p` under rotation by `2π/order` about unit `axis`.
#[inline]
fn displacement_sq(p: Vector3<f64>, axis: Vector3<f64>, order: f64) -> f64 {
    let d = axis.dot(&p);
    2.0 * (1.0 - (TAU / order).cos()) * (1.0 - d * d)
}

/// Unit point in the spherical triangle spanned by `axes` whose displacements
/// under the rotations of orders `orders` about the three axes coincide.
///
/// Newton iteration in barycentric-like coordinates with a finite-difference
/// Jacobian, started at the triangle centroid. `None` if it fails to converge.
pub(crate) fn wythoff_snub_point(
    axes: [Vector3<f64>; 3],
    orders: [f64; 3],
) -> Option<Vector3<f64>> {
    let axes = axes.map(|a| a.normalize());
    let point = |s: f64, t: f64| {
        (axes[0] + (axes[1] - axes[0]) * s + (axes[2] - axes[0]) * t).normalize()
    };
    let residual = |s: f64, t: f64| {
        let p = point(s, t);
        let d = [0, 1, 2].map(|k| displacement_sq(p, axes[k], orders[k]));
        Vector2::new(d[0] - d[1], d[1] - d[2])
    };
    let (mut s, mut t) = (1.0 / 3.0, 1.0 / 3.0);
    for _ in 0..SNUB_MAX_ITERS {
        let f = residual(s, t);
        if f.norm() < SNUB_TOL {
            return Some(point(s, t));
        }
        let ds = (residual(s + SNUB_FD_STEP, t) - f) / SNUB_FD_STEP;
        let dt = (residual(s, t + SNUB_FD_STEP) - f) / SNUB_FD_STEP;
        let step = Matrix2::from_columns(&[ds, dt]).try_inverse()? * f;
        s -= step.x;
        t -= step.y;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snub_cube_seed_matches_tribonacci_coordinates() {
        // (1, 1/t, t) up to scale, t the tribonacci constant
        let t = 1.839_286_755_214_161;
        let expected = Vector3::new(1.0, 1.0 / t, t).normalize();
        let p = wythoff_snub_point(
            [Vector3::z(), Vector3::new(1.0, 1.0, 1.0), Vector3::new(1.0, 0.0, 1.0)],
            [4.0, 3.0, 2.0],
        )
        .unwrap();
        assert!((p - expected).norm() < 1e-9, "{p:?}");
    }

    #[test]
    fn snub_point_displacements_agree() {
        let axes = [
            Vector3::new(0.0, PHI, 1.0).normalize(),
            Vector3::new(1.0, 1.0, 1.0).normalize(),
            Vector3::new(PHI, PHI * PHI, 1.0).normalize(),
        ];
        let p = wythoff_snub_point(axes, [5.0, 3.0, 2.0]).unwrap();
        let d5 = displacement_sq(p, axes[0], 5.0);
        let d3 = displacement_sq(p, axes[1], 3.0);
        let d2 = displacement_sq(p, axes[2], 2.0);
        assert!((d5 - d3).abs() < 1e-12 && (d3 - d2).abs() < 1e-12);
        assert!(d2 > 1e-3);
    }
}
