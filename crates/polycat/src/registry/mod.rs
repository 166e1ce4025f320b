//! Shape registry: lookup, enumeration and builds over one [`Backend`].
//!
//! Purpose
//! - Map shape identifiers to factories; each factory is one pass-through
//!   library call paired with the entry's display name.
//!
//! Assumptions
//! - The table is fixed at construction and never mutated.
//! - Backend availability is decided once, in [`ShapeRegistry::new`]; a
//!   missing library turns every build into [`BuildError::Unavailable`].
//! - Nothing is cached: every build produces a fresh handle.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::catalog::{Category, ShapeEntry, STANDARD};
use crate::error::{BuildError, RegistryError, Unavailability};
use crate::library::{Backend, LibraryCall, PolyhedronHandle};


/// A successfully built shape.
#[derive(Debug)]
pub struct BuiltShape {
    pub id: &'static str,
    pub display_name: &'static str,
    pub category: Category,
    pub call: LibraryCall,
    pub handle: PolyhedronHandle,
}

/// Per-entry result of [`ShapeRegistry::build_all`].
#[derive(Debug)]
pub struct BuildOutcome {
    pub entry: ShapeEntry,
    pub result: Result<BuiltShape, BuildError>,
}

/// Outcomes of a batch build, in table order.
#[derive(Debug, Default)]
pub struct BuildReport {
    outcomes: Vec<BuildOutcome>,
}

impl BuildReport {
    #[inline]
    pub fn outcomes(&self) -> &[BuildOutcome] {
        &self.outcomes
    }

    pub fn into_outcomes(self) -> Vec<BuildOutcome> {
        self.outcomes
    }

    pub fn successes(&self) -> impl Iterator<Item = &BuiltShape> + '_ {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = (&ShapeEntry, &BuildError)> + '_ {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (&o.entry, e)))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Every entry built.
    pub fn is_complete(&self) -> bool {
        self.outcomes.iter().all(|o| o.result.is_ok())
    }
}

/// Zero-argument factory for one entry.
#[derive(Clone, Copy, Debug)]
pub struct Factory<'a> {
    registry: &'a ShapeRegistry,
    entry: &'a ShapeEntry,
}

impl<'a> Factory<'a> {
    #[inline]
    pub fn entry(&self) -> &'a ShapeEntry {
        self.entry
    }

    pub fn call(&self) -> Result<BuiltShape, BuildError> {
        self.registry.build_entry(self.entry)
    }
}

/// Identifier → factory table bound to one backend.
#[derive(Debug, Clone)]
pub struct ShapeRegistry {
    entries: Vec<ShapeEntry>,
    backend: Backend,
}

impl ShapeRegistry {
    /// Registry over the standard catalog.
    pub fn new(backend: Backend) -> Self {
        Self::from_parts(STANDARD.to_vec(), backend)
    }

    /// Registry over a custom table.
    pub fn with_entries(entries: Vec<ShapeEntry>, backend: Backend) -> Result<Self, RegistryError> {
        if entries.is_empty() {
            return Err(RegistryError::Empty);
        }
        let mut seen = HashSet::new();
        if let Some(dup) = entries.iter().find(|e| !seen.insert(e.id)) {
            return Err(RegistryError::DuplicateIdentifier(dup.id));
        }
        Ok(Self::from_parts(entries, backend))
    }

    fn from_parts(entries: Vec<ShapeEntry>, backend: Backend) -> Self {
        match &backend {
            Backend::Loaded(lib) => {
                debug!(library = lib.name(), shapes = entries.len(), "shape registry ready");
            }
            Backend::Missing { reason } => {
                warn!(%reason, "geometry library not loaded; every build will be unavailable");
            }
        }
        Self { entries, backend }
    }

    /// All entries in table order. Never empty.
    #[inline]
    pub fn list_shapes(&self) -> &[ShapeEntry] {
        &self.entries
    }

    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|e| e.id)
    }

    pub fn get(&self, id: &str) -> Option<&ShapeEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn factory(&self, id: &str) -> Option<Factory<'_>> {
        self.get(id).map(|entry| Factory {
            registry: self,
            entry,
        })
    }

    #[inline]
    pub fn backend(&self) -> &Backend {
        &self.backend
    }

    /// Build one shape. Unknown identifiers are `NotFound`, never `Unavailable`.
    pub fn build(&self, id: &str) -> Result<BuiltShape, BuildError> {
        let entry = self
            .get(id)
            .ok_or_else(|| BuildError::NotFound(id.to_owned()))?;
        self.build_entry(entry)
    }

    /// Build every entry in order; failures are collected, not propagated.
    pub fn build_all(&self) -> BuildReport {
        let outcomes = self
            .entries
            .iter()
            .map(|entry| BuildOutcome {
                entry: *entry,
                result: self.build_entry(entry),
            })
            .collect();
        BuildReport { outcomes }
    }

    fn build_entry(&self, entry: &ShapeEntry) -> Result<BuiltShape, BuildError> {
        let result = match &self.backend {
            Backend::Loaded(lib) => lib.call(&entry.call).map_err(Unavailability::from),
            Backend::Missing { reason } => Err(Unavailability::LibraryMissing(reason.clone())),
        };
        match result {
            Ok(handle) => {
                debug!(
                    id = entry.id,
                    call = %entry.call,
                    vertices = handle.n_vertices(),
                    facets = handle.n_facets(),
                    "built {}",
                    entry.display_name
                );
                Ok(BuiltShape {
                    id: entry.id,
                    display_name: entry.display_name,
                    category: entry.category,
                    call: entry.call,
                    handle,
                })
            }
            Err(reason) => {
                warn!(id = entry.id, call = %entry.call, %reason, "shape unavailable");
                Err(BuildError::Unavailable {
                    id: entry.id.to_owned(),
                    reason,
                })
            }
        }
    }
}
