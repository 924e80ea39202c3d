use thiserror::Error;

/// Errors raised while turning a raw sample into a workout.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorkoutError {
    #[error("unknown workout type: {0:?}")]
    UnknownWorkoutType(String),

    #[error("{code} expects {expected} values, got {got}")]
    ArgumentCount {
        code: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("invalid {field}: {value}")]
    InvalidValue { field: &'static str, value: f64 },

    #[error("{training_type} produced a non-finite {field}: {value}")]
    NonFiniteResult {
        training_type: &'static str,
        field: &'static str,
        value: f64,
    },
}

pub type WorkoutResult<T> = Result<T, WorkoutError>;
