//! Error type for connection establishment.

use thiserror::Error;

/// Errors that can occur while establishing the database connection.
#[derive(Debug, Error)]
pub enum DbError {
    /// The environment variable holding the connection URI is unset.
    #[error("{var} is not set")]
    MissingUri {
        /// Name of the variable that was consulted.
        var: &'static str,
        /// The underlying lookup failure.
        #[source]
        source: std::env::VarError,
    },

    /// The environment variable is set but contains only whitespace.
    #[error("{var} is set but empty")]
    EmptyUri {
        /// Name of the variable that was consulted.
        var: &'static str,
    },

    /// The connection string could not be parsed into client options.
    #[error("invalid connection string: {0}")]
    InvalidUri(#[source] mongodb::error::Error),

    /// The deployment did not answer the liveness ping within the
    /// server-selection window.
    #[error("could not reach deployment: {0}")]
    Unreachable(#[source] mongodb::error::Error),
}
