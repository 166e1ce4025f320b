//! Combinatorial polytopes of dimension 3: associahedron, cyclohedron,
//! permutahedron and Tesler polytope.
//!
//! Purpose
//! - Associahedron and cyclohedron are nestohedra: generalized permutahedra
//!   `P_B = Σ_{T∈B} Δ_T` of a building set `B` on `{0,1,2,3}`, cut out of the
//!   hyperplane `Σx = |B|` by `Σ_{i∈S} x_i >= #{T ∈ B : T ⊆ S}`.
//! - The hyperplane is mapped isometrically to R^3 (`families::sum_zero_basis`).
//!
//! Assumptions
//! - Only the 3-dimensional members are built (`k = 4`, `n = 4`, Tesler `n = 3`).
//! - Results are recentered at their vertex centroid.
//!
//! References
//! - Postnikov, "Permutohedra, associahedra, and beyond" (2009).
//! - Mészáros, Morales, Rhoades, "The polytope of Tesler matrices" (2017).

use nalgebra::{Vector3, Vector4};

use crate::geom3::{Hs3, Polyhedron};

use super::families::{project_sum_zero, sum_zero_basis};
use super::{degenerate, unsupported, ConstructError};

/// Ground set size of the 3-dimensional members.
const GROUND: usize = 4;

/// Subsets of `{0..GROUND}` as bitmasks.
type Subset = u8;

const FULL: Subset = (1 << GROUND) - 1;

fn indicator(s: Subset) -> Vector4<f64> {
    Vector4::from_fn(|i, _| if s & (1 << i) != 0 { 1.0 } else { 0.0 })
}

/// Nestohedron of `building` (which must contain all singletons and the ground set).
fn nestohedron(function: &'static str, building: &[Subset]) -> Result<Polyhedron, ConstructError> {
    let basis = sum_zero_basis();
    let total = building.len() as f64;
    let center = Vector4::repeat(total / GROUND as f64);
    let hs: Vec<Hs3> = (1..FULL)
        .map(|s| {
            let z = building.iter().filter(|&&t| t & !s == 0).count() as f64;
            let a = indicator(s);
            // a·x >= z with x = center + Uᵀy
            Hs3::new(-(basis * a), a.dot(&center) - z)
        })
        .collect();
    Polyhedron::from_halfspaces(hs)
        .map(|p| p.recentered())
        .ok_or_else(|| degenerate(function))
}

/// Contiguous runs `{i, i+1, …, j}` of the path `0 - 1 - 2 - 3`.
fn path_intervals() -> Vec<Subset> {
    let mut out = Vec::new();
    for i in 0..GROUND {
        for j in i..GROUND {
            out.push((i..=j).fold(0, |s, k| s | (1 << k)));
        }
    }
    out
}

/// Cyclic runs of the 4-cycle, plus the ground set.
fn cycle_intervals() -> Vec<Subset> {
    let mut out = Vec::new();
    for len in 1..GROUND {
        for start in 0..GROUND {
            out.push((0..len).fold(0, |s, k| s | (1 << ((start + k) % GROUND))));
        }
    }
    out.push(FULL);
    out
}

/// Loday's associahedron (Stasheff polytope) `K_k`, dimension `k - 1`.
pub fn associahedron(k: u32) -> Result<Polyhedron, ConstructError> {
    if k as usize != GROUND {
        return Err(unsupported("associahedron", k, "only k = 4 (dimension 3) is constructed"));
    }
    nestohedron("associahedron", &path_intervals())
}

/// Bott–Taubes cyclohedron `W_k`, dimension `k - 1`.
pub fn cyclohedron(k: u32) -> Result<Polyhedron, ConstructError> {
    if k as usize != GROUND {
        return Err(unsupported("cyclohedron", k, "only k = 4 (dimension 3) is constructed"));
    }
    nestohedron("cyclohedron", &cycle_intervals())
}

/// Convex hull of the permutations of `(1, …, n)`, dimension `n - 1`.
pub fn permutahedron(n: u32) -> Result<Polyhedron, ConstructError> {
    if n as usize != GROUND {
        return Err(unsupported("permutahedron", n, "only n = 4 (dimension 3) is constructed"));
    }
    let mut points = Vec::with_capacity(24);
    for a in 0..GROUND {
        for b in 0..GROUND {
            for c in 0..GROUND {
                if a == b || b == c || a == c {
                    continue;
                }
                let d = 6 - a - b - c;
                let mut p = Vector4::zeros();
                p[a] = 1.0;
                p[b] = 2.0;
                p[c] = 3.0;
                p[d] = 4.0;
                points.push(p);
            }
        }
    }
    Polyhedron::from_vertices(&project_sum_zero(&points)).ok_or_else(|| degenerate("permutahedron"))
}

/// Tesler polytope `Tes_n(1, …, 1)`, dimension `n(n-1)/2`.
///
/// Upper-triangular non-negative `3×3` matrices with unit hook sums
/// `a_kk + Σ_{j>k} a_kj - Σ_{i<k} a_ik = 1`. Charted by `(a12, a13, a23)`:
/// the diagonal is determined, and `a11 >= 0`, `a22 >= 0` give the only
/// non-trivial facets (`a33 >= 0` always holds).
pub fn tesler_polytope(n: u32) -> Result<Polyhedron, ConstructError> {
    if n != 3 {
        return Err(unsupported("tesler_polytope", n, "only n = 3 (dimension 3) is constructed"));
    }
    let hs = vec![
        Hs3::new(-Vector3::x(), 0.0),
        Hs3::new(-Vector3::y(), 0.0),
        Hs3::new(-Vector3::z(), 0.0),
        // a11 = 1 - a12 - a13
        Hs3::new(Vector3::new(1.0, 1.0, 0.0), 1.0),
        // a22 = 1 + a12 - a23
        Hs3::new(Vector3::new(-1.0, 0.0, 1.0), 1.0),
    ];
    Polyhedron::from_halfspaces(hs)
        .map(|p| p.recentered())
        .ok_or_else(|| degenerate("tesler_polytope"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn building_sets_have_expected_sizes() {
        assert_eq!(path_intervals().len(), 10);
        let cyc = cycle_intervals();
        assert_eq!(cyc.len(), 13);
        assert!(cyc.contains(&FULL));
        // singletons are present in both
        for i in 0..GROUND {
            assert!(path_intervals().contains(&(1 << i)));
            assert!(cyc.contains(&(1 << i)));
        }
    }

    #[test]
    fn permutahedron_is_an_isometric_image() {
        let p = permutahedron(4).unwrap();
        let (lo, hi) = p.edge_length_range();
        assert!((lo - 2f64.sqrt()).abs() < 1e-9);
        assert!((hi - 2f64.sqrt()).abs() < 1e-9);
    }
}
