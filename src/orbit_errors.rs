use thiserror::Error;

/// Coarse classification of an [`OrbitError`].
///
/// * `Validation` – an input was out of range; the previous valid state is kept.
/// * `State` – an operation was called in the wrong controller state.
/// * `NotFound` – the scene no longer holds an entity the controller owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    State,
    NotFound,
}

#[derive(Error, Debug, Clone)]
pub enum OrbitError {
    #[error("Invalid orbital element {name} = {value}: {reason}")]
    InvalidElement {
        name: &'static str,
        value: f64,
        reason: String,
    },

    #[error("Unknown orbital element: {0}")]
    UnknownElement(String),

    #[error("Invalid orientation policy: {0}")]
    InvalidOrientationPolicy(String),

    #[error("Invalid sample count {0}: a closed orbit curve needs at least 3 points")]
    InvalidSampleCount(usize),

    #[error("Point buffer size mismatch: expected {expected}, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    #[error("Orbit curve already initialized")]
    AlreadyInitialized,

    #[error("Orbit curve not initialized")]
    NotInitialized,

    #[error("No scene attached")]
    SceneNotAttached,

    #[error("Scene entity not found: {0}")]
    EntityNotFound(String),
}

impl OrbitError {
    /// Classify the error into the validation / state / not-found taxonomy.
    pub fn kind(&self) -> ErrorKind {
        use OrbitError::*;
        match self {
            InvalidElement { .. }
            | UnknownElement(_)
            | InvalidOrientationPolicy(_)
            | InvalidSampleCount(_) => ErrorKind::Validation,
            AlreadyInitialized | NotInitialized | SceneNotAttached | BufferSizeMismatch { .. } => {
                ErrorKind::State
            }
            EntityNotFound(_) => ErrorKind::NotFound,
        }
    }
}

impl PartialEq for OrbitError {
    fn eq(&self, other: &Self) -> bool {
        use OrbitError::*;
        match (self, other) {
            // the reason text is informative only
            (InvalidElement { name: a, value: va, .. }, InvalidElement { name: b, value: vb, .. }) => {
                a == b && (va == vb || (va.is_nan() && vb.is_nan()))
            }
            (UnknownElement(a), UnknownElement(b)) => a == b,
            (InvalidOrientationPolicy(a), InvalidOrientationPolicy(b)) => a == b,
            (InvalidSampleCount(a), InvalidSampleCount(b)) => a == b,
            (
                BufferSizeMismatch {
                    expected: ea,
                    actual: aa,
                },
                BufferSizeMismatch {
                    expected: eb,
                    actual: ab,
                },
            ) => ea == eb && aa == ab,
            (EntityNotFound(a), EntityNotFound(b)) => a == b,

            (AlreadyInitialized, AlreadyInitialized) => true,
            (NotInitialized, NotInitialized) => true,
            (SceneNotAttached, SceneNotAttached) => true,

            _ => false,
        }
    }
}

#[cfg(test)]
mod orbit_errors_test {
    use super::*;

    #[test]
    fn test_error_kind() {
        let err = OrbitError::InvalidElement {
            name: "e",
            value: 1.0,
            reason: "must be < 1".into(),
        };
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(OrbitError::AlreadyInitialized.kind(), ErrorKind::State);
        assert_eq!(OrbitError::NotInitialized.kind(), ErrorKind::State);
        assert_eq!(
            OrbitError::BufferSizeMismatch {
                expected: 100,
                actual: 4
            }
            .kind(),
            ErrorKind::State
        );
        assert_eq!(
            OrbitError::EntityNotFound("orbitLine".into()).kind(),
            ErrorKind::NotFound
        );
    }

    #[test]
    fn test_invalid_element_eq_ignores_reason() {
        let a = OrbitError::InvalidElement {
            name: "e",
            value: 1.5,
            reason: "first".into(),
        };
        let b = OrbitError::InvalidElement {
            name: "e",
            value: 1.5,
            reason: "second".into(),
        };
        assert_eq!(a, b);
        assert_ne!(a, OrbitError::NotInitialized);
    }

    #[test]
    fn test_display() {
        let err = OrbitError::EntityNotFound("orbitLine".into());
        assert_eq!(err.to_string(), "Scene entity not found: orbitLine");
    }
}
