//! Johnson solids with unit edge length.
//!
//! Pyramids, cupolae and bipyramids are stacked from regular polygons in
//! horizontal planes (axis along z). J91 uses its closed-form coordinates.

use nalgebra::Vector3;

use crate::geom3::Polyhedron;

use super::families::RegularPolygon;
use super::symmetry::PHI;
use super::{degenerate, unsupported, ConstructError};

/// Indices accepted by [`johnson_solid`].
pub const SUPPORTED: [u32; 8] = [1, 2, 3, 4, 5, 12, 13, 91];

/// Johnson solid `J_k`.
pub fn johnson_solid(k: u32) -> Result<Polyhedron, ConstructError> {
    let verts = match k {
        1 => pyramid(4),
        2 => pyramid(5),
        3 => cupola(3),
        4 => cupola(4),
        5 => cupola(5),
        12 => bipyramid(3),
        13 => bipyramid(5),
        91 => bilunabirotunda(),
        _ => {
            return Err(unsupported(
                "johnson_solid",
                k,
                format!("supported indices are {SUPPORTED:?}"),
            ))
        }
    };
    Polyhedron::from_vertices(&verts)
        .map(|p| p.recentered())
        .ok_or_else(|| degenerate("johnson_solid"))
}

/// Regular `n`-gon base with an apex at unit distance from every base vertex.
fn pyramid(n: usize) -> Vec<Vector3<f64>> {
    let base = RegularPolygon::new(n);
    let height = (1.0 - base.out_radius * base.out_radius).sqrt();
    let mut verts: Vec<_> = (0..n).map(|i| base.point(i, 0.0, 0.0)).collect();
    verts.push(Vector3::new(0.0, 0.0, height));
    verts
}

/// `n`-gon on top of a `2n`-gon, joined by alternating squares and triangles.
fn cupola(n: usize) -> Vec<Vector3<f64>> {
    let top = RegularPolygon::new(n);
    let bottom = RegularPolygon::new(2 * n);
    let rad_diff = bottom.in_radius - top.in_radius;
    let height = (1.0 - rad_diff * rad_diff).sqrt();
    let mut verts: Vec<_> = (0..n).map(|i| top.point(i, 0.5, height)).collect();
    verts.extend((0..2 * n).map(|i| bottom.point(i, 0.5, 0.0)));
    verts
}

/// Two pyramids glued along their `n`-gon base.
fn bipyramid(n: usize) -> Vec<Vector3<f64>> {
    let base = RegularPolygon::new(n);
    let height = (1.0 - base.out_radius * base.out_radius).sqrt();
    let mut verts: Vec<_> = (0..n).map(|i| base.point(i, 0.0, 0.0)).collect();
    verts.push(Vector3::new(0.0, 0.0, height));
    verts.push(Vector3::new(0.0, 0.0, -height));
    verts
}

/// J91: `(±1/2, ±1/2, ±φ/2)`, `(±φ/2, 0, 0)`, `(0, ±φ²/2, ±1/2)`.
fn bilunabirotunda() -> Vec<Vector3<f64>> {
    let mut verts = Vec::with_capacity(14);
    for sx in [-1.0, 1.0] {
        for sy in [-1.0, 1.0] {
            for sz in [-1.0, 1.0] {
                verts.push(Vector3::new(sx * 0.5, sy * 0.5, sz * PHI / 2.0));
            }
        }
        verts.push(Vector3::new(sx * PHI / 2.0, 0.0, 0.0));
        for sz in [-1.0, 1.0] {
            verts.push(Vector3::new(0.0, sx * PHI * PHI / 2.0, sz * 0.5));
        }
    }
    verts
}
