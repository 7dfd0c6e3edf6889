//! Error types for the orrery core

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// A body's elements are out of contract. Raised at construction, never at tick time.
    #[error("invalid configuration for body `{body}`: {reason}")]
    Configuration { body: String, reason: String },

    #[error("invalid simulation configuration: {0}")]
    Simulation(String),

    #[error(
        "Kepler solver did not converge after {iterations} iterations \
         (eccentricity {eccentricity}, mean anomaly {mean_anomaly})"
    )]
    NumericalDivergence {
        eccentricity: f64,
        mean_anomaly: f64,
        iterations: u32,
    },

    #[error("no body with id {0}")]
    UnknownBody(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Error {
    pub(crate) fn configuration(body: &str, reason: impl Into<String>) -> Self {
        Error::Configuration {
            body: body.to_string(),
            reason: reason.into(),
        }
    }
}
