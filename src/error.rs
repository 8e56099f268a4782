use thiserror::Error;

/// Errors raised by the propagation core.
#[derive(Error, Debug)]
pub enum TrackError {
    /// A vector was built from the wrong number of components
    #[error("Not a 3D vector: got {found} components")]
    Dimension { found: usize },

    /// A dot product was taken against components of a different arity
    #[error("Dimension mismatch: expected {expected} components, got {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// A zero (or non-finite) vector cannot be normalized
    #[error("Vector has no direction: length is {0}")]
    ZeroLength(f64),

    #[error("Undefined axis name: {0:?}")]
    InvalidAxis(String),

    #[error("Eccentricity {0} is outside [0, 1)")]
    Eccentricity(f64),

    #[error("Semi-major axis {0} must be positive")]
    SemiMajor(f64),

    /// Kepler's equation did not settle; only possible with a broken orbit invariant
    #[error("Kepler solver did not converge for M = {mean_anomaly} after {iterations} iterations")]
    Convergence { mean_anomaly: f64, iterations: usize },

    #[error("Invalid epoch {epoch:?}: {source}")]
    Epoch {
        epoch: String,
        source: chrono::ParseError,
    },
}

pub type Result<T> = std::result::Result<T, TrackError>;
