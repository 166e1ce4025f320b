//! Small utilities: combinations, tolerant dedup and plane quantization.

use nalgebra::Vector3;

/// k-combinations of items (lexicographic).
pub(crate) fn combinations<T: Copy>(items: &[T], k: usize) -> Vec<Vec<T>> {
    let n = items.len();
    if k > n || k == 0 {
        return Vec::new();
    }
    let mut idxs: Vec<usize> = (0..k).collect();
    let mut out = Vec::new();
    loop {
        out.push(idxs.iter().map(|&i| items[i]).collect());
        // rightmost index that can still advance
        let Some(i) = (0..k).rev().find(|&i| idxs[i] != i + n - k) else {
            break;
        };
        idxs[i] += 1;
        for j in i + 1..k {
            idxs[j] = idxs[j - 1] + 1;
        }
    }
    out
}

/// Remove points within `tol` of an earlier point, keeping first occurrences in order.
///
/// Quadratic, but catalog inputs stay below a few hundred points and a
/// distance scan never splits a cluster the way grid rounding can.
pub(crate) fn dedup_points_in_place(points: &mut Vec<Vector3<f64>>, tol: f64) {
    let mut kept: Vec<Vector3<f64>> = Vec::with_capacity(points.len());
    for &p in points.iter() {
        if !kept.iter().any(|q| (p - q).norm() < tol) {
            kept.push(p);
        }
    }
    *points = kept;
}

fn quantize3(v: Vector3<f64>, tol: f64) -> (i64, i64, i64) {
    let s = 1.0 / tol;
    (
        (v[0] * s).round() as i64,
        (v[1] * s).round() as i64,
        (v[2] * s).round() as i64,
    )
}

pub(crate) fn quantize4(n: Vector3<f64>, c: f64, tol: f64) -> (i64, i64, i64, i64) {
    let (x, y, z) = quantize3(n, tol);
    let s = 1.0 / tol;
    (x, y, z, (c * s).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combinations_counts() {
        let items: Vec<usize> = (0..6).collect();
        assert_eq!(combinations(&items, 3).len(), 20);
        assert_eq!(combinations(&items, 6).len(), 1);
        assert!(combinations(&items, 7).is_empty());
        assert_eq!(combinations(&items, 1).len(), 6);
        let pairs = combinations(&[1, 2, 3], 2);
        assert_eq!(pairs, vec![vec![1, 2], vec![1, 3], vec![2, 3]]);
    }

    #[test]
    fn dedup_keeps_first_occurrence() {
        let mut pts = vec![
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(1.0 + 1e-12, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
        ];
        dedup_points_in_place(&mut pts, 1e-9);
        assert_eq!(pts.len(), 2);
        assert_eq!(pts[0], Vector3::new(1.0, 0.0, 0.0));
    }
}
