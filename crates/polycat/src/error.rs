//! Error types for library calls, registry construction and shape builds.

use thiserror::Error;

/// Failure reported by a [`crate::PolytopeLibrary`] implementation.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LibraryError {
    #[error("library has no function `{0}`")]
    UnknownFunction(String),

    #[error("`{call}` failed: {reason}")]
    CallFailed { call: String, reason: String },
}

/// Why a known shape could not be built.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Unavailability {
    #[error("geometry library not loaded: {0}")]
    LibraryMissing(String),

    #[error(transparent)]
    CallFailed(#[from] LibraryError),
}

/// Result of a failed [`crate::ShapeRegistry::build`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("no shape with identifier `{0}`")]
    NotFound(String),

    #[error("shape `{id}` is unavailable: {reason}")]
    Unavailable {
        id: String,
        #[source]
        reason: Unavailability,
    },
}

impl BuildError {
    /// Placeholder display name shown in place of a shape that failed to build.
    pub fn label(&self) -> String {
        match self {
            Self::NotFound(id) => format!("Error: Unknown Shape `{id}`"),
            Self::Unavailable {
                reason: Unavailability::LibraryMissing(_),
                ..
            } => "Error: Geometry Library Not Loaded".to_string(),
            Self::Unavailable {
                reason: Unavailability::CallFailed(err),
                ..
            } => match err {
                LibraryError::UnknownFunction(function) => format!("Error: {function} failed"),
                LibraryError::CallFailed { call, .. } => format!("Error: {call} failed"),
            },
        }
    }

    #[inline]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Invalid custom shape table.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("duplicate shape identifier `{0}`")]
    DuplicateIdentifier(&'static str),

    #[error("a registry needs at least one entry")]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_distinguish_missing_library_from_failed_call() {
        let missing = BuildError::Unavailable {
            id: "cube".into(),
            reason: Unavailability::LibraryMissing("not installed".into()),
        };
        assert_eq!(missing.label(), "Error: Geometry Library Not Loaded");

        let failed = BuildError::Unavailable {
            id: "triangular_prism".into(),
            reason: LibraryError::CallFailed {
                call: "regular_prism(3)".into(),
                reason: "degenerate".into(),
            }
            .into(),
        };
        assert_eq!(failed.label(), "Error: regular_prism(3) failed");
        assert!(!failed.is_not_found());
        assert!(BuildError::NotFound("x".into()).is_not_found());
    }

    #[test]
    fn messages_carry_the_identifier() {
        let err = BuildError::Unavailable {
            id: "cube".into(),
            reason: Unavailability::LibraryMissing("disabled".into()),
        };
        assert_eq!(
            err.to_string(),
            "shape `cube` is unavailable: geometry library not loaded: disabled"
        );
        assert_eq!(
            BuildError::NotFound("not_a_shape".into()).to_string(),
            "no shape with identifier `not_a_shape`"
        );
    }
}
