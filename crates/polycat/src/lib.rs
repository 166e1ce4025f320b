//! Shape registry over an external polytope library.
//!
//! A declarative table ([`catalog::STANDARD`]) maps shape identifiers to one
//! library call each and a display name. [`ShapeRegistry`] resolves
//! identifiers to factories and builds them against a [`Backend`], the
//! capability that says whether the geometry library is present.
//!
//! The registry adds no geometry of its own: handles are produced by the
//! library and forwarded unchanged.
//!
//! ```no_run
//! use polycat::{Backend, ShapeRegistry};
//!
//! let registry = ShapeRegistry::new(Backend::detect());
//! for entry in registry.list_shapes() {
//!     match registry.build(entry.id) {
//!         Ok(shape) => println!("{}: {} vertices", shape.display_name, shape.handle.n_vertices()),
//!         Err(err) => println!("{}", err.label()),
//!     }
//! }
//! ```

pub mod catalog;
pub mod error;
pub mod library;
#[cfg(feature = "native")]
pub mod native;
pub mod registry;

pub use catalog::{Category, ShapeEntry, STANDARD};
pub use error::{BuildError, LibraryError, RegistryError, Unavailability};
pub use library::{Backend, LibraryCall, PolyhedronHandle, PolytopeData, PolytopeLibrary};
pub use registry::{BuildOutcome, BuildReport, BuiltShape, Factory, ShapeRegistry};
