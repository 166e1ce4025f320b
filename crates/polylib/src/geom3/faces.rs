//! Resolved polyhedra: vertices plus facets with counter-clockwise vertex cycles.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use nalgebra::Vector3;

use super::cfg::{DEDUP_EPS, FEAS_EPS, TIGHT_EPS};
use super::convert::v_to_halfspaces;
use super::types::{Hs3, Poly3};
use super::util::dedup_points_in_place;

/// Facet (2-face): supporting plane `normal·x = offset` and its vertex cycle.
///
/// Invariants:
/// - `normal` has unit length and points outward.
/// - `vertices` index into the owning polyhedron, counter-clockwise seen from outside.
#[derive(Clone, Debug)]
pub struct Facet {
    pub normal: Vector3<f64>,
    pub offset: f64,
    pub vertices: Vec<usize>,
}

impl Facet {
    #[inline]
    pub fn order(&self) -> usize {
        self.vertices.len()
    }
}

/// Convex polyhedron with explicit vertices and facets.
///
/// Built only through [`Polyhedron::from_vertices`] / [`Polyhedron::from_halfspaces`],
/// so every stored point is a genuine vertex (incident to at least three facets).
#[derive(Clone, Debug, Default)]
pub struct Polyhedron {
    vertices: Vec<Vector3<f64>>,
    facets: Vec<Facet>,
}

impl Polyhedron {
    /// Convex hull of a point set.
    ///
    /// Algorithm
    /// - Dedup points, derive supporting planes (V→H).
    /// - For each plane, collect near-tight points; planes with the same tight
    ///   set are merged.
    /// - Points on fewer than three facets (face or edge interiors) are dropped.
    ///
    /// Returns `None` when fewer than four points remain or the set is flat.
    pub fn from_vertices(points: &[Vector3<f64>]) -> Option<Self> {
        let mut pts = points.to_vec();
        dedup_points_in_place(&mut pts, DEDUP_EPS);
        if pts.len() < 4 {
            return None;
        }
        let hs = v_to_halfspaces(&pts);
        let mut seen: HashSet<Vec<usize>> = HashSet::new();
        let mut raw: Vec<(Hs3, Vec<usize>)> = Vec::new();
        for h in hs {
            let tight: Vec<usize> = pts
                .iter()
                .enumerate()
                .filter(|(_, p)| (h.n.dot(p) - h.c).abs() <= TIGHT_EPS)
                .map(|(i, _)| i)
                .collect();
            if tight.len() >= 3 && seen.insert(tight.clone()) {
                raw.push((h, tight));
            }
        }
        if raw.len() < 4 {
            return None;
        }

        // Keep only points incident to >= 3 facets, then reindex.
        let mut incidence = vec![0usize; pts.len()];
        for (_, tight) in &raw {
            for &i in tight {
                incidence[i] += 1;
            }
        }
        let mut remap = vec![None; pts.len()];
        let mut vertices = Vec::new();
        for (i, p) in pts.iter().enumerate() {
            if incidence[i] >= 3 {
                remap[i] = Some(vertices.len());
                vertices.push(*p);
            }
        }
        let facets = raw
            .into_iter()
            .map(|(h, tight)| {
                let mut idx: Vec<usize> = tight.iter().filter_map(|&i| remap[i]).collect();
                order_ccw(h.n, &mut idx, &vertices);
                Facet {
                    normal: h.n,
                    offset: h.c,
                    vertices: idx,
                }
            })
            .collect();
        Some(Self { vertices, facets })
    }

    /// Bounded intersection of half-spaces.
    pub fn from_halfspaces(hs: Vec<Hs3>) -> Option<Self> {
        Poly3::from_h(hs).resolve()
    }

    #[inline]
    pub fn vertices(&self) -> &[Vector3<f64>] {
        &self.vertices
    }
    #[inline]
    pub fn facets(&self) -> &[Facet] {
        &self.facets
    }
    #[inline]
    pub fn n_vertices(&self) -> usize {
        self.vertices.len()
    }
    #[inline]
    pub fn n_facets(&self) -> usize {
        self.facets.len()
    }
    #[inline]
    pub fn n_edges(&self) -> usize {
        self.edges().len()
    }

    /// Undirected edges `(i, j)` with `i < j`, sorted.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let mut set = BTreeSet::new();
        for f in &self.facets {
            let k = f.vertices.len();
            for a in 0..k {
                let (i, j) = (f.vertices[a], f.vertices[(a + 1) % k]);
                set.insert((i.min(j), i.max(j)));
            }
        }
        set.into_iter().collect()
    }

    /// `V - E + F`; equals 2 for every convex polyhedron.
    pub fn euler_characteristic(&self) -> i64 {
        self.n_vertices() as i64 - self.n_edges() as i64 + self.n_facets() as i64
    }

    /// Shortest and longest edge.
    pub fn edge_length_range(&self) -> (f64, f64) {
        self.edges()
            .into_iter()
            .map(|(i, j)| (self.vertices[i] - self.vertices[j]).norm())
            .fold((f64::INFINITY, 0.0), |(lo, hi), l| (lo.min(l), hi.max(l)))
    }

    /// Histogram: facet order → number of facets.
    pub fn facet_orders(&self) -> BTreeMap<usize, usize> {
        let mut out = BTreeMap::new();
        for f in &self.facets {
            *out.entry(f.order()).or_insert(0) += 1;
        }
        out
    }

    /// Facet inequalities `normal·x <= offset`.
    pub fn halfspaces(&self) -> Vec<Hs3> {
        self.facets
            .iter()
            .map(|f| Hs3::new(f.normal, f.offset))
            .collect()
    }

    /// Both representations as lazy-cache polytope.
    pub fn to_poly3(&self) -> Poly3 {
        Poly3 {
            h: self.halfspaces(),
            v: self.vertices.clone(),
        }
    }

    /// Vertex centroid (not the volume centroid).
    pub fn centroid(&self) -> Vector3<f64> {
        let sum = self
            .vertices
            .iter()
            .fold(Vector3::zeros(), |acc, v| acc + v);
        sum / self.vertices.len().max(1) as f64
    }

    /// Translate so the vertex centroid sits at the origin.
    pub fn recentered(&self) -> Self {
        let c = self.centroid();
        Self {
            vertices: self.vertices.iter().map(|v| v - c).collect(),
            facets: self
                .facets
                .iter()
                .map(|f| Facet {
                    normal: f.normal,
                    offset: f.offset - f.normal.dot(&c),
                    vertices: f.vertices.clone(),
                })
                .collect(),
        }
    }

    /// Polar dual with respect to the unit sphere: facet `n·x <= c` ↦ vertex `n / c`.
    ///
    /// Pre: the origin lies strictly inside. Returns `None` otherwise.
    pub fn polar(&self) -> Option<Self> {
        if self.facets.iter().any(|f| f.offset <= FEAS_EPS) {
            return None;
        }
        let dual: Vec<Vector3<f64>> = self
            .facets
            .iter()
            .map(|f| f.normal / f.offset)
            .collect();
        Self::from_vertices(&dual)
    }
}

/// Sort facet vertex indices counter-clockwise around `normal`.
fn order_ccw(normal: Vector3<f64>, idx: &mut [usize], pts: &[Vector3<f64>]) {
    if idx.len() < 3 {
        return;
    }
    let center = idx.iter().fold(Vector3::zeros(), |acc, &i| acc + pts[i]) / idx.len() as f64;
    let u = (pts[idx[0]] - center).normalize();
    // (u, w, normal) is right-handed, so increasing angle is CCW seen from outside.
    let w = normal.cross(&u);
    let angle = |i: usize| {
        let d = pts[i] - center;
        w.dot(&d).atan2(u.dot(&d))
    };
    idx.sort_by(|&a, &b| {
        angle(a)
            .partial_cmp(&angle(b))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}
