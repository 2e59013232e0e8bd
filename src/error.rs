use thiserror::Error;

/// Top-level error type for the stakeout engine.
#[derive(Debug, Error)]
pub enum StakeoutError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Request(#[from] RequestError),
}

impl StakeoutError {
    /// Returns `true` if the error is a zero-length baseline.
    ///
    /// Callers use this to ask for corrected baseline coordinates instead of
    /// treating the failure as fatal.
    #[must_use]
    pub fn is_invalid_baseline(&self) -> bool {
        matches!(self, Self::Geometry(GeometryError::InvalidBaseline { .. }))
    }
}

/// Errors related to geometric computations.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("invalid baseline: start ({x}, {y}) equals end, direction is undefined")]
    InvalidBaseline { x: f64, y: f64 },

    #[error("comparison vector has zero length, no angle can be determined")]
    DegenerateComparisonVector,

    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Errors related to survey operations.
#[derive(Debug, Error, PartialEq)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Errors related to loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Errors related to reading a survey request.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("failed to parse request: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Convenience type alias for results using [`StakeoutError`].
pub type Result<T> = std::result::Result<T, StakeoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_baseline_is_recognised() {
        let err: StakeoutError = GeometryError::InvalidBaseline { x: 1.0, y: 2.0 }.into();
        assert!(err.is_invalid_baseline());
        assert!(err.to_string().contains("(1, 2)"));
    }

    #[test]
    fn other_errors_are_not_invalid_baseline() {
        let err: StakeoutError = OperationError::InvalidInput("x".to_owned()).into();
        assert!(!err.is_invalid_baseline());
        let err: StakeoutError = GeometryError::DegenerateComparisonVector.into();
        assert!(!err.is_invalid_baseline());
    }
}
