//! Named polytope constructors, dispatched by function name.
//!
//! Purpose
//! - One entry point, [`construct`], that maps a function name and optional
//!   integer argument (`"cube"`, `"regular_prism"` with `5`, ...) to a resolved
//!   [`Polyhedron`].
//!
//! Assumptions
//! - Nullary constructors take no argument; unary ones require exactly one.
//! - Constructors return origin-centered solids in their standard coordinates.
//!   Prisms, antiprisms and Johnson solids have unit edges.
//!
//! Layout
//! - `symmetry`: signed permutations and rotation groups for seed expansion.
//! - `platonic`, `archimedean`, `catalan`, `johnson`: named solids.
//! - `families`: simplex, cross-polytope, prisms and antiprisms.
//! - `combinatorial`: associahedron, cyclohedron, permutahedron, Tesler polytope.

use thiserror::Error;

use crate::geom3::Polyhedron;

pub mod archimedean;
pub mod catalan;
pub mod combinatorial;
pub mod families;
pub mod johnson;
pub mod platonic;
pub mod symmetry;


/// Why a named construction produced no polyhedron.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConstructError {
    #[error("unknown function `{0}`")]
    UnknownFunction(String),

    #[error("`{function}` requires an integer argument")]
    MissingArgument { function: &'static str },

    #[error("`{function}` takes no argument (got {arg})")]
    UnexpectedArgument { function: &'static str, arg: u32 },

    #[error("`{function}({arg})` is not supported: {reason}")]
    UnsupportedArgument {
        function: &'static str,
        arg: u32,
        reason: String,
    },

    #[error("degenerate geometry in `{0}`")]
    Degenerate(String),
}

pub(crate) fn degenerate(function: &str) -> ConstructError {
    ConstructError::Degenerate(function.to_owned())
}

pub(crate) fn unsupported(
    function: &'static str,
    arg: u32,
    reason: impl Into<String>,
) -> ConstructError {
    ConstructError::UnsupportedArgument {
        function,
        arg,
        reason: reason.into(),
    }
}

#[derive(Clone, Copy)]
enum Constructor {
    Nullary(fn() -> Option<Polyhedron>),
    Unary(fn(u32) -> Result<Polyhedron, ConstructError>),
}

use Constructor::{Nullary, Unary};

const FUNCTIONS: &[(&str, Constructor)] = &[
    // Platonic
    ("tetrahedron", Nullary(platonic::tetrahedron)),
    ("cube", Nullary(platonic::cube)),
    ("octahedron", Nullary(platonic::octahedron)),
    ("dodecahedron", Nullary(platonic::dodecahedron)),
    ("icosahedron", Nullary(platonic::icosahedron)),
    // Families
    ("simplex", Unary(families::simplex)),
    ("cross_polytope", Unary(families::cross_polytope)),
    ("regular_prism", Unary(families::regular_prism)),
    ("regular_antiprism", Unary(families::regular_antiprism)),
    // Archimedean
    ("truncated_tetrahedron", Nullary(archimedean::truncated_tetrahedron)),
    ("cuboctahedron", Nullary(archimedean::cuboctahedron)),
    ("truncated_cube", Nullary(archimedean::truncated_cube)),
    ("truncated_octahedron", Nullary(archimedean::truncated_octahedron)),
    ("rhombicuboctahedron", Nullary(archimedean::rhombicuboctahedron)),
    ("truncated_cuboctahedron", Nullary(archimedean::truncated_cuboctahedron)),
    ("icosidodecahedron", Nullary(archimedean::icosidodecahedron)),
    ("truncated_dodecahedron", Nullary(archimedean::truncated_dodecahedron)),
    ("truncated_icosahedron", Nullary(archimedean::truncated_icosahedron)),
    ("rhombicosidodecahedron", Nullary(archimedean::rhombicosidodecahedron)),
    ("truncated_icosidodecahedron", Nullary(archimedean::truncated_icosidodecahedron)),
    ("snub_cube", Nullary(archimedean::snub_cube)),
    ("snub_dodecahedron", Nullary(archimedean::snub_dodecahedron)),
    // Catalan
    ("triakis_tetrahedron", Nullary(catalan::triakis_tetrahedron)),
    ("rhombic_dodecahedron", Nullary(catalan::rhombic_dodecahedron)),
    ("triakis_octahedron", Nullary(catalan::triakis_octahedron)),
    ("tetrakis_hexahedron", Nullary(catalan::tetrakis_hexahedron)),
    ("deltoidal_icositetrahedron", Nullary(catalan::deltoidal_icositetrahedron)),
    ("disdyakis_dodecahedron", Nullary(catalan::disdyakis_dodecahedron)),
    ("pentagonal_icositetrahedron", Nullary(catalan::pentagonal_icositetrahedron)),
    ("rhombic_triacontahedron", Nullary(catalan::rhombic_triacontahedron)),
    ("triakis_icosahedron", Nullary(catalan::triakis_icosahedron)),
    ("pentakis_dodecahedron", Nullary(catalan::pentakis_dodecahedron)),
    ("deltoidal_hexecontahedron", Nullary(catalan::deltoidal_hexecontahedron)),
    ("disdyakis_triacontahedron", Nullary(catalan::disdyakis_triacontahedron)),
    ("pentagonal_hexecontahedron", Nullary(catalan::pentagonal_hexecontahedron)),
    // Johnson
    ("johnson_solid", Unary(johnson::johnson_solid)),
    // Combinatorial
    ("associahedron", Unary(combinatorial::associahedron)),
    ("cyclohedron", Unary(combinatorial::cyclohedron)),
    ("permutahedron", Unary(combinatorial::permutahedron)),
    ("tesler_polytope", Unary(combinatorial::tesler_polytope)),
];

/// Names accepted by [`construct`], in dispatch-table order.
pub fn function_names() -> impl Iterator<Item = &'static str> {
    FUNCTIONS.iter().map(|(name, _)| *name)
}

/// Build the polyhedron named `function`, passing `arg` to parametric constructors.
pub fn construct(function: &str, arg: Option<u32>) -> Result<Polyhedron, ConstructError> {
    let Some(&(name, ctor)) = FUNCTIONS.iter().find(|(name, _)| *name == function) else {
        return Err(ConstructError::UnknownFunction(function.to_owned()));
    };
    match (ctor, arg) {
        (Nullary(f), None) => f().ok_or_else(|| degenerate(name)),
        (Nullary(_), Some(arg)) => Err(ConstructError::UnexpectedArgument {
            function: name,
            arg,
        }),
        (Unary(f), Some(arg)) => f(arg),
        (Unary(_), None) => Err(ConstructError::MissingArgument { function: name }),
    }
}
