//! The standard shape table: identifier → (library call, display name).

use std::fmt;

use crate::library::LibraryCall;
use Category::*;

/// Family a catalog shape belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Platonic,
    Parametric,
    Prism,
    Archimedean,
    Catalan,
    Johnson,
    Combinatorial,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Platonic,
        Category::Parametric,
        Category::Prism,
        Category::Archimedean,
        Category::Catalan,
        Category::Johnson,
        Category::Combinatorial,
    ];

    /// Stable lowercase label used in serialized output.
    pub const fn label(self) -> &'static str {
        match self {
            Category::Platonic => "platonic",
            Category::Parametric => "parametric",
            Category::Prism => "prism",
            Category::Archimedean => "archimedean",
            Category::Catalan => "catalan",
            Category::Johnson => "johnson",
            Category::Combinatorial => "combinatorial",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// One registry row. The factory is "invoke `call` on the backend".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShapeEntry {
    pub id: &'static str,
    pub display_name: &'static str,
    pub category: Category,
    pub call: LibraryCall,
}

const fn entry(
    id: &'static str,
    display_name: &'static str,
    category: Category,
    call: LibraryCall,
) -> ShapeEntry {
    ShapeEntry {
        id,
        display_name,
        category,
        call,
    }
}

const fn named(id: &'static str, display_name: &'static str, category: Category) -> ShapeEntry {
    entry(id, display_name, category, LibraryCall::nullary(id))
}

/// Catalog in its canonical grouping order.
pub const STANDARD: &[ShapeEntry] = &[
    named("tetrahedron", "Tetrahedron", Platonic),
    named("cube", "Cube", Platonic),
    named("octahedron", "Octahedron", Platonic),
    named("dodecahedron", "Dodecahedron", Platonic),
    named("icosahedron", "Icosahedron", Platonic),
    entry("simplex_3d", "Simplex (3D)", Parametric, LibraryCall::unary("simplex", 3)),
    entry(
        "cross_polytope_3d",
        "Cross Polytope (3D)",
        Parametric,
        LibraryCall::unary("cross_polytope", 3),
    ),
    entry("triangular_prism", "Triangular Prism", Prism, LibraryCall::unary("regular_prism", 3)),
    entry("pentagonal_prism", "Pentagonal Prism", Prism, LibraryCall::unary("regular_prism", 5)),
    entry("hexagonal_prism", "Hexagonal Prism", Prism, LibraryCall::unary("regular_prism", 6)),
    entry(
        "square_antiprism",
        "Square Antiprism",
        Prism,
        LibraryCall::unary("regular_antiprism", 4),
    ),
    entry(
        "pentagonal_antiprism",
        "Pentagonal Antiprism",
        Prism,
        LibraryCall::unary("regular_antiprism", 5),
    ),
    named("truncated_tetrahedron", "Truncated Tetrahedron", Archimedean),
    named("cuboctahedron", "Cuboctahedron", Archimedean),
    named("truncated_cube", "Truncated Cube", Archimedean),
    named("truncated_octahedron", "Truncated Octahedron", Archimedean),
    named("rhombicuboctahedron", "Rhombicuboctahedron (Small)", Archimedean),
    named(
        "truncated_cuboctahedron",
        "Truncated Cuboctahedron (Great Rhombicuboctahedron)",
        Archimedean,
    ),
    named("icosidodecahedron", "Icosidodecahedron", Archimedean),
    named("truncated_dodecahedron", "Truncated Dodecahedron", Archimedean),
    named("truncated_icosahedron", "Truncated Icosahedron (Soccer Ball)", Archimedean),
    named("rhombicosidodecahedron", "Rhombicosidodecahedron (Small)", Archimedean),
    named(
        "truncated_icosidodecahedron",
        "Truncated Icosidodecahedron (Great Rhombicosidodecahedron)",
        Archimedean,
    ),
    named("snub_cube", "Snub Cube", Archimedean),
    named("snub_dodecahedron", "Snub Dodecahedron", Archimedean),
    named("triakis_tetrahedron", "Triakis Tetrahedron", Catalan),
    named("rhombic_dodecahedron", "Rhombic Dodecahedron", Catalan),
    named("triakis_octahedron", "Triakis Octahedron", Catalan),
    named("tetrakis_hexahedron", "Tetrakis Hexahedron (Tetrakis Cube)", Catalan),
    named("deltoidal_icositetrahedron", "Deltoidal Icositetrahedron", Catalan),
    named(
        "disdyakis_dodecahedron",
        "Disdyakis Dodecahedron (Hexakis Octahedron)",
        Catalan,
    ),
    named("pentagonal_icositetrahedron", "Pentagonal Icositetrahedron", Catalan),
    named("rhombic_triacontahedron", "Rhombic Triacontahedron", Catalan),
    named("triakis_icosahedron", "Triakis Icosahedron", Catalan),
    named("pentakis_dodecahedron", "Pentakis Dodecahedron", Catalan),
    named("deltoidal_hexecontahedron", "Deltoidal Hexecontahedron", Catalan),
    named(
        "disdyakis_triacontahedron",
        "Disdyakis Triacontahedron (Hexakis Icosahedron)",
        Catalan,
    ),
    named("pentagonal_hexecontahedron", "Pentagonal Hexecontahedron", Catalan),
    entry(
        "johnson_j1_square_pyramid",
        "Johnson Solid J1 (Square Pyramid)",
        Johnson,
        LibraryCall::unary("johnson_solid", 1),
    ),
    entry(
        "johnson_j2_pentagonal_pyramid",
        "Johnson Solid J2 (Pentagonal Pyramid)",
        Johnson,
        LibraryCall::unary("johnson_solid", 2),
    ),
    entry(
        "johnson_j3_triangular_cupola",
        "Johnson Solid J3 (Triangular Cupola)",
        Johnson,
        LibraryCall::unary("johnson_solid", 3),
    ),
    entry(
        "johnson_j4_square_cupola",
        "Johnson Solid J4 (Square Cupola)",
        Johnson,
        LibraryCall::unary("johnson_solid", 4),
    ),
    entry(
        "johnson_j5_pentagonal_cupola",
        "Johnson Solid J5 (Pentagonal Cupola)",
        Johnson,
        LibraryCall::unary("johnson_solid", 5),
    ),
    entry(
        "johnson_j12_triangular_bipyramid",
        "Johnson Solid J12 (Triangular Bipyramid)",
        Johnson,
        LibraryCall::unary("johnson_solid", 12),
    ),
    entry(
        "johnson_j13_pentagonal_bipyramid",
        "Johnson Solid J13 (Pentagonal Bipyramid)",
        Johnson,
        LibraryCall::unary("johnson_solid", 13),
    ),
    entry(
        "johnson_j91_bilunabirotunda",
        "Johnson Solid J91 (Bilunabirotunda)",
        Johnson,
        LibraryCall::unary("johnson_solid", 91),
    ),
    entry(
        "associahedron_k4",
        "Associahedron (3D, k=4)",
        Combinatorial,
        LibraryCall::unary("associahedron", 4),
    ),
    entry(
        "cyclohedron_k4",
        "Cyclohedron (3D, k=4)",
        Combinatorial,
        LibraryCall::unary("cyclohedron", 4),
    ),
    entry(
        "permutahedron_n4",
        "Permutahedron (3D, n=4)",
        Combinatorial,
        LibraryCall::unary("permutahedron", 4),
    ),
    entry(
        "tesler_polytope_n3",
        "Tesler Polytope (3D, n=3)",
        Combinatorial,
        LibraryCall::unary("tesler_polytope", 3),
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn standard_table_is_unique_and_grouped() {
        assert_eq!(STANDARD.len(), 50);
        let ids: HashSet<_> = STANDARD.iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), STANDARD.len());
        // categories appear in canonical order, each as one contiguous run
        let mut seen = Vec::new();
        for e in STANDARD {
            if seen.last() != Some(&e.category) {
                assert!(!seen.contains(&e.category), "{} splits its group", e.id);
                seen.push(e.category);
            }
        }
        assert_eq!(seen, Category::ALL);
    }

    #[test]
    fn category_sizes() {
        let count = |c| STANDARD.iter().filter(|e| e.category == c).count();
        assert_eq!(count(Platonic), 5);
        assert_eq!(count(Parametric), 2);
        assert_eq!(count(Prism), 5);
        assert_eq!(count(Archimedean), 13);
        assert_eq!(count(Catalan), 13);
        assert_eq!(count(Johnson), 8);
        assert_eq!(count(Combinatorial), 4);
    }

    #[test]
    fn display_names_are_non_empty() {
        assert!(STANDARD.iter().all(|e| !e.display_name.trim().is_empty()));
        assert_eq!(Category::Catalan.to_string(), "catalan");
    }
}
