//! Catalan solids as polar duals of the Archimedean solids.
//!
//! Every Archimedean constructor is origin-centered, so the polar exists; the
//! dual's vertices are the facet poles `n / c`.

use crate::geom3::Polyhedron;

use super::archimedean;

#[inline]
fn dual(solid: Option<Polyhedron>) -> Option<Polyhedron> {
    solid?.polar()
}

pub fn triakis_tetrahedron() -> Option<Polyhedron> {
    dual(archimedean::truncated_tetrahedron())
}

pub fn rhombic_dodecahedron() -> Option<Polyhedron> {
    dual(archimedean::cuboctahedron())
}

pub fn triakis_octahedron() -> Option<Polyhedron> {
    dual(archimedean::truncated_cube())
}

pub fn tetrakis_hexahedron() -> Option<Polyhedron> {
    dual(archimedean::truncated_octahedron())
}

pub fn deltoidal_icositetrahedron() -> Option<Polyhedron> {
    dual(archimedean::rhombicuboctahedron())
}

pub fn disdyakis_dodecahedron() -> Option<Polyhedron> {
    dual(archimedean::truncated_cuboctahedron())
}

pub fn pentagonal_icositetrahedron() -> Option<Polyhedron> {
    dual(archimedean::snub_cube())
}

pub fn rhombic_triacontahedron() -> Option<Polyhedron> {
    dual(archimedean::icosidodecahedron())
}

pub fn triakis_icosahedron() -> Option<Polyhedron> {
    dual(archimedean::truncated_dodecahedron())
}

pub fn pentakis_dodecahedron() -> Option<Polyhedron> {
    dual(archimedean::truncated_icosahedron())
}

pub fn deltoidal_hexecontahedron() -> Option<Polyhedron> {
    dual(archimedean::rhombicosidodecahedron())
}

pub fn disdyakis_triacontahedron() -> Option<Polyhedron> {
    dual(archimedean::truncated_icosidodecahedron())
}

pub fn pentagonal_hexecontahedron() -> Option<Polyhedron> {
    dual(archimedean::snub_dodecahedron())
}
