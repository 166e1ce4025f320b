//! H↔V conversions and supporting plane helpers.

use std::collections::HashSet;

use nalgebra::{Matrix3, Vector3};

use super::cfg::{COLLINEAR_EPS, DEDUP_EPS, FEAS_EPS};
use super::types::Hs3;
use super::util::{combinations, dedup_points_in_place, quantize4};

pub(crate) fn h_to_vertices(hs: &[Hs3]) -> Vec<Vector3<f64>> {
    let mut out = Vec::new();
    if hs.len() < 4 {
        return out;
    }
    let idxs: Vec<usize> = (0..hs.len()).collect();
    // Intersect planes of each 3-tuple (if non-parallel) and keep feasible points.
    for comb in combinations(&idxs, 3) {
        let (h1, h2, h3) = (hs[comb[0]], hs[comb[1]], hs[comb[2]]);
        let a = Matrix3::from_rows(&[h1.n.transpose(), h2.n.transpose(), h3.n.transpose()]);
        if let Some(inv) = a.try_inverse() {
            let x = inv * Vector3::new(h1.c, h2.c, h3.c);
            if x.iter().all(|v| v.is_finite()) && hs.iter().all(|h| h.satisfies(x)) {
                out.push(x);
            }
        }
    }
    dedup_points_in_place(&mut out, DEDUP_EPS);
    out
}

pub(crate) fn v_to_halfspaces(vs: &[Vector3<f64>]) -> Vec<Hs3> {
    let mut out = Vec::new();
    if vs.len() < 4 {
        return out;
    }
    let idxs: Vec<usize> = (0..vs.len()).collect();
    let mut seen = HashSet::new();
    for comb in combinations(&idxs, 3) {
        let pts = [vs[comb[0]], vs[comb[1]], vs[comb[2]]];
        let Some((n, c)) = plane_through(pts) else {
            continue;
        };
        if let Some((n, c)) = orient_supporting(n, c, vs) {
            // quantize to dedup numerically equal planes
            if seen.insert(quantize4(n, c, FEAS_EPS)) {
                out.push(Hs3::new(n, c));
            }
        }
    }
    out
}

/// Unit normal `n` and offset `c` of the plane through three points.
fn plane_through(pts: [Vector3<f64>; 3]) -> Option<(Vector3<f64>, f64)> {
    let n = (pts[1] - pts[0]).cross(&(pts[2] - pts[0]));
    let norm = n.norm();
    if norm <= COLLINEAR_EPS || !norm.is_finite() {
        return None;
    }
    let n = n / norm;
    Some((n, n.dot(&pts[0])))
}

/// Flip `(n, c)` so that every point satisfies `n·x <= c`; `None` if the plane cuts the set.
fn orient_supporting(
    n: Vector3<f64>,
    c: f64,
    vs: &[Vector3<f64>],
) -> Option<(Vector3<f64>, f64)> {
    let mut above = false;
    let mut below = false;
    for v in vs {
        let s = n.dot(v) - c;
        above |= s > FEAS_EPS;
        below |= s < -FEAS_EPS;
        if above && below {
            return None;
        }
    }
    match (above, below) {
        (false, true) => Some((n, c)),
        (true, false) => Some((-n, -c)),
        // all points coplanar: not full-dimensional
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_cube_vertices() -> Vec<Vector3<f64>> {
        let mut v = Vec::new();
        for &x in &[-1.0, 1.0] {
            for &y in &[-1.0, 1.0] {
                for &z in &[-1.0, 1.0] {
                    v.push(Vector3::new(x, y, z));
                }
            }
        }
        v
    }

    #[test]
    fn cube_vertices_to_six_planes() {
        let hs = v_to_halfspaces(&unit_cube_vertices());
        assert_eq!(hs.len(), 6);
        for h in &hs {
            assert!((h.n.norm() - 1.0).abs() < 1e-12);
            assert!((h.c - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn cube_planes_to_eight_vertices() {
        let hs = v_to_halfspaces(&unit_cube_vertices());
        let vs = h_to_vertices(&hs);
        assert_eq!(vs.len(), 8);
        assert!(vs.iter().all(|v| v.iter().all(|x| (x.abs() - 1.0).abs() < 1e-9)));
    }

    #[test]
    fn off_origin_polytope_keeps_outward_orientation() {
        let shift = Vector3::new(10.0, -4.0, 3.0);
        let vs: Vec<_> = unit_cube_vertices().into_iter().map(|v| v + shift).collect();
        let hs = v_to_halfspaces(&vs);
        assert_eq!(hs.len(), 6);
        assert!(hs.iter().all(|h| h.satisfies(shift)));
        assert!(vs.iter().all(|&v| hs.iter().all(|h| h.satisfies(v))));
    }

    #[test]
    fn flat_point_set_has_no_supporting_planes() {
        let square = vec![
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(1.0, 1.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
        ];
        assert!(v_to_halfspaces(&square).is_empty());
    }
}
