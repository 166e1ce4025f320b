//! Seam to the external geometry library: call descriptors, opaque handles
//! and the availability capability checked once at registry construction.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use crate::error::LibraryError;

/// One library function invocation, e.g. `cube` or `regular_prism(5)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LibraryCall {
    pub function: &'static str,
    pub arg: Option<u32>,
}

impl LibraryCall {
    pub const fn nullary(function: &'static str) -> Self {
        Self {
            function,
            arg: None,
        }
    }

    pub const fn unary(function: &'static str, arg: u32) -> Self {
        Self {
            function,
            arg: Some(arg),
        }
    }
}

impl fmt::Display for LibraryCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.arg {
            Some(arg) => write!(f, "{}({arg})", self.function),
            None => f.write_str(self.function),
        }
    }
}

/// Read access to a library polyhedron.
///
/// Facets list vertex indices counter-clockwise seen from outside.
pub trait PolytopeData: Send + Sync {
    fn vertices(&self) -> Vec<[f64; 3]>;

    fn facets(&self) -> Vec<Vec<usize>>;

    /// Undirected edges `(i, j)` with `i < j`, sorted.
    fn edges(&self) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        for facet in self.facets() {
            let k = facet.len();
            for a in 0..k {
                let (i, j) = (facet[a], facet[(a + 1) % k]);
                out.push((i.min(j), i.max(j)));
            }
        }
        out.sort_unstable();
        out.dedup();
        out
    }

    fn n_vertices(&self) -> usize {
        self.vertices().len()
    }

    fn n_edges(&self) -> usize {
        self.edges().len()
    }

    fn n_facets(&self) -> usize {
        self.facets().len()
    }
}

/// Owned, opaque result of a library call. The registry only forwards it.
pub struct PolyhedronHandle(Box<dyn PolytopeData>);

impl PolyhedronHandle {
    pub fn new(data: impl PolytopeData + 'static) -> Self {
        Self(Box::new(data))
    }
}

impl Deref for PolyhedronHandle {
    type Target = dyn PolytopeData;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl fmt::Debug for PolyhedronHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PolyhedronHandle")
            .field("vertices", &self.n_vertices())
            .field("facets", &self.n_facets())
            .finish()
    }
}

/// A geometry library that resolves [`LibraryCall`]s.
pub trait PolytopeLibrary: Send + Sync {
    fn name(&self) -> &str;

    fn call(&self, call: &LibraryCall) -> Result<PolyhedronHandle, LibraryError>;
}

/// Capability object: either a loaded library or the reason it is absent.
#[derive(Clone)]
pub enum Backend {
    Loaded(Arc<dyn PolytopeLibrary>),
    Missing { reason: String },
}

impl Backend {
    /// The bundled library when built with the `native` feature, `Missing` otherwise.
    pub fn detect() -> Self {
        #[cfg(feature = "native")]
        {
            Self::Loaded(Arc::new(crate::native::NativeLibrary))
        }
        #[cfg(not(feature = "native"))]
        {
            Self::Missing {
                reason: "built without the `native` feature".to_string(),
            }
        }
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Missing {
            reason: reason.into(),
        }
    }

    pub fn with_library(library: impl PolytopeLibrary + 'static) -> Self {
        Self::Loaded(Arc::new(library))
    }

    #[inline]
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    /// Library name, or `"none"` when missing.
    pub fn name(&self) -> &str {
        match self {
            Self::Loaded(lib) => lib.name(),
            Self::Missing { .. } => "none",
        }
    }
}

impl fmt::Debug for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loaded(lib) => f.debug_tuple("Loaded").field(&lib.name()).finish(),
            Self::Missing { reason } => f.debug_struct("Missing").field("reason", reason).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Tetra;

    impl PolytopeData for Tetra {
        fn vertices(&self) -> Vec<[f64; 3]> {
            vec![
                [1.0, 1.0, 1.0],
                [1.0, -1.0, -1.0],
                [-1.0, 1.0, -1.0],
                [-1.0, -1.0, 1.0],
            ]
        }

        fn facets(&self) -> Vec<Vec<usize>> {
            vec![vec![0, 1, 2], vec![0, 3, 1], vec![0, 2, 3], vec![1, 3, 2]]
        }
    }

    #[test]
    fn call_display() {
        assert_eq!(LibraryCall::nullary("cube").to_string(), "cube");
        assert_eq!(LibraryCall::unary("regular_prism", 5).to_string(), "regular_prism(5)");
    }

    #[test]
    fn default_edges_are_derived_from_facets() {
        let h = PolyhedronHandle::new(Tetra);
        assert_eq!(h.n_vertices(), 4);
        assert_eq!(h.n_facets(), 4);
        assert_eq!(h.edges(), vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
        assert_eq!(format!("{h:?}"), "PolyhedronHandle { vertices: 4, facets: 4 }");
    }

    #[test]
    fn missing_backend_reports_no_name() {
        let b = Backend::unavailable("disabled for test");
        assert!(!b.is_loaded());
        assert_eq!(b.name(), "none");
    }

    #[test]
    fn handles_and_backends_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PolyhedronHandle>();
        assert_send_sync::<Backend>();
        assert_send_sync::<crate::ShapeRegistry>();
        assert_send_sync::<crate::BuiltShape>();
    }
}
