//! Coordinate symmetries: signed permutations, rotation groups and orbits.
//!
//! Catalog coordinates are written as seed tuples expanded under a symmetry
//! group, e.g. "all even permutations of (0, ±1, ±φ)". Snub solids instead
//! take the orbit of a single point under a rotation group generated by two
//! axis rotations.

use nalgebra::{Matrix3, Rotation3, Unit, Vector3};

use crate::geom3::{dedup_points_in_place, DEDUP_EPS};

/// Golden ratio φ = (1 + √5) / 2.
pub const PHI: f64 = 1.618_033_988_749_895;

/// Upper bound on generated group orders (the full icosahedral group has 120).
const MAX_GROUP_ORDER: usize = 120;

/// Which coordinate permutations to apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Perms {
    /// All six permutations.
    All,
    /// Identity and the two cyclic shifts.
    Even,
}

/// Which sign patterns to apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Signs {
    /// All eight sign patterns.
    All,
    /// Patterns with an even number of minus signs.
    EvenMinus,
}

const EVEN_PERMS: [[usize; 3]; 3] = [[0, 1, 2], [1, 2, 0], [2, 0, 1]];
const ODD_PERMS: [[usize; 3]; 3] = [[0, 2, 1], [2, 1, 0], [1, 0, 2]];

/// Expand seed tuples under permutations and sign changes; duplicates removed.
pub fn signed_permutations(seeds: &[[f64; 3]], perms: Perms, signs: Signs) -> Vec<Vector3<f64>> {
    let mut order: Vec<[usize; 3]> = EVEN_PERMS.to_vec();
    if perms == Perms::All {
        order.extend_from_slice(&ODD_PERMS);
    }
    let mut out = Vec::new();
    for seed in seeds {
        for p in &order {
            for mask in 0u8..8 {
                if signs == Signs::EvenMinus && mask.count_ones() % 2 == 1 {
                    continue;
                }
                let sign = |k: usize| if mask & (1 << k) != 0 { -1.0 } else { 1.0 };
                out.push(Vector3::new(
                    sign(0) * seed[p[0]],
                    sign(1) * seed[p[1]],
                    sign(2) * seed[p[2]],
                ));
            }
        }
    }
    dedup_points_in_place(&mut out, DEDUP_EPS);
    out
}

/// Rotation by `angle` (radians) about `axis` (any nonzero length).
pub fn axis_rotation(axis: Vector3<f64>, angle: f64) -> Matrix3<f64> {
    Rotation3::from_axis_angle(&Unit::new_normalize(axis), angle).into_inner()
}

/// Finite group generated by `generators` (closure by breadth-first products).
///
/// Elements are compared entrywise within `DEDUP_EPS`; generation stops at
/// `MAX_GROUP_ORDER` elements to stay finite on bad input.
pub fn rotation_group(generators: &[Matrix3<f64>]) -> Vec<Matrix3<f64>> {
    let mut group = vec![Matrix3::identity()];
    let mut next = 0;
    while next < group.len() && group.len() < MAX_GROUP_ORDER {
        let g = group[next];
        next += 1;
        for r in generators {
            let h = r * g;
            if !group.iter().any(|k| (k - h).amax() < DEDUP_EPS) {
                group.push(h);
            }
        }
    }
    group
}

/// Orbit of `seed` under `group`; duplicates removed.
pub fn orbit(seed: Vector3<f64>, group: &[Matrix3<f64>]) -> Vec<Vector3<f64>> {
    let mut out: Vec<Vector3<f64>> = group.iter().map(|g| g * seed).collect();
    dedup_points_in_place(&mut out, DEDUP_EPS);
    out
}

/// Chiral octahedral group O (order 24): 4-fold about z, 3-fold about (1,1,1).
pub fn octahedral_rotations() -> Vec<Matrix3<f64>> {
    rotation_group(&[
        axis_rotation(Vector3::z(), std::f64::consts::FRAC_PI_2),
        axis_rotation(Vector3::new(1.0, 1.0, 1.0), std::f64::consts::TAU / 3.0),
    ])
}

/// Chiral icosahedral group I (order 60) in the frame of the dodecahedron
/// `(±1,±1,±1) ∪ (0, ±1/φ, ±φ)`: 5-fold about the face axis `(0, φ, 1)`,
/// 3-fold about the vertex axis `(1, 1, 1)`.
pub fn icosahedral_rotations() -> Vec<Matrix3<f64>> {
    rotation_group(&[
        axis_rotation(Vector3::new(0.0, PHI, 1.0), std::f64::consts::TAU / 5.0),
        axis_rotation(Vector3::new(1.0, 1.0, 1.0), std::f64::consts::TAU / 3.0),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_permutation_counts() {
        let cube = signed_permutations(&[[1.0, 1.0, 1.0]], Perms::All, Signs::All);
        assert_eq!(cube.len(), 8);
        let tetra = signed_permutations(&[[1.0, 1.0, 1.0]], Perms::All, Signs::EvenMinus);
        assert_eq!(tetra.len(), 4);
        let icosa = signed_permutations(&[[0.0, 1.0, PHI]], Perms::Even, Signs::All);
        assert_eq!(icosa.len(), 12);
        let trunc_oct = signed_permutations(&[[0.0, 1.0, 2.0]], Perms::All, Signs::All);
        assert_eq!(trunc_oct.len(), 24);
    }

    #[test]
    fn rotation_group_orders() {
        assert_eq!(octahedral_rotations().len(), 24);
        assert_eq!(icosahedral_rotations().len(), 60);
        let c4 = rotation_group(&[axis_rotation(Vector3::z(), std::f64::consts::FRAC_PI_2)]);
        assert_eq!(c4.len(), 4);
    }

    #[test]
    fn icosahedral_group_preserves_dodecahedron() {
        let dodeca = {
            let mut v = signed_permutations(&[[1.0, 1.0, 1.0]], Perms::All, Signs::All);
            v.extend(signed_permutations(&[[0.0, 1.0 / PHI, PHI]], Perms::Even, Signs::All));
            v
        };
        assert_eq!(dodeca.len(), 20);
        for g in icosahedral_rotations() {
            for v in &dodeca {
                let w = g * v;
                assert!(dodeca.iter().any(|u| (u - w).norm() < 1e-9));
            }
        }
    }

    #[test]
    fn generic_orbit_has_group_order() {
        let seed = Vector3::new(0.3, 0.1, 0.9);
        assert_eq!(orbit(seed, &octahedral_rotations()).len(), 24);
        assert_eq!(orbit(seed, &icosahedral_rotations()).len(), 60);
    }
}
