//! Bundled backend: forwards calls to `polylib::construct`.

use polylib::{ConstructError, Polyhedron};

use crate::error::LibraryError;
use crate::library::{LibraryCall, PolyhedronHandle, PolytopeData, PolytopeLibrary};

/// The in-process `polylib` geometry library.
#[derive(Clone, Copy, Debug, Default)]
pub struct NativeLibrary;

impl PolytopeLibrary for NativeLibrary {
    fn name(&self) -> &str {
        "polylib"
    }

    fn call(&self, call: &LibraryCall) -> Result<PolyhedronHandle, LibraryError> {
        match polylib::construct(call.function, call.arg) {
            Ok(p) => Ok(PolyhedronHandle::new(p)),
            Err(ConstructError::UnknownFunction(function)) => {
                Err(LibraryError::UnknownFunction(function))
            }
            Err(err) => Err(LibraryError::CallFailed {
                call: call.to_string(),
                reason: err.to_string(),
            }),
        }
    }
}

impl PolytopeData for Polyhedron {
    fn vertices(&self) -> Vec<[f64; 3]> {
        Polyhedron::vertices(self)
            .iter()
            .map(|v| [v.x, v.y, v.z])
            .collect()
    }

    fn facets(&self) -> Vec<Vec<usize>> {
        Polyhedron::facets(self)
            .iter()
            .map(|f| f.vertices.clone())
            .collect()
    }

    fn edges(&self) -> Vec<(usize, usize)> {
        Polyhedron::edges(self)
    }

    fn n_vertices(&self) -> usize {
        Polyhedron::n_vertices(self)
    }

    fn n_edges(&self) -> usize {
        Polyhedron::n_edges(self)
    }

    fn n_facets(&self) -> usize {
        Polyhedron::n_facets(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forwards_counts_through_the_handle() {
        let h = NativeLibrary.call(&LibraryCall::nullary("cube")).unwrap();
        assert_eq!((h.n_vertices(), h.n_edges(), h.n_facets()), (8, 12, 6));
        assert!(h.facets().iter().all(|f| f.len() == 4));
        assert!(h.vertices().iter().all(|v| v.iter().all(|x| x.abs() == 1.0)));
    }

    #[test]
    fn maps_construct_errors() {
        assert_eq!(
            NativeLibrary
                .call(&LibraryCall::nullary("klein_bottle"))
                .unwrap_err(),
            LibraryError::UnknownFunction("klein_bottle".into())
        );
        let err = NativeLibrary
            .call(&LibraryCall::unary("johnson_solid", 92))
            .unwrap_err();
        assert!(
            matches!(&err, LibraryError::CallFailed { call, .. } if call == "johnson_solid(92)"),
            "{err}"
        );
    }
}
