//! Connection settings and target derivation.

use crate::error::DbError;

/// Environment variable holding the base connection URI.
pub const URI_ENV_VAR: &str = "MONGODB_URI";

/// Database selected for the chat application.
pub const DEFAULT_DATABASE: &str = "live-chat-app";

/// Settings for establishing the MongoDB connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbSettings {
    /// Base connection URI, without a database path segment.
    pub uri: String,

    /// Name of the database to select on the deployment.
    pub database: String,

    /// Application name reported to the server during the handshake.
    pub app_name: String,

    /// TCP connect timeout, in milliseconds.
    pub connect_timeout_ms: u64,

    /// How long the driver waits to find a usable server before the
    /// connect attempt is reported failed, in milliseconds.
    pub server_selection_timeout_ms: u64,
}

impl Default for DbSettings {
    fn default() -> Self {
        Self {
            uri: "mongodb://127.0.0.1:27017".to_string(),
            database: DEFAULT_DATABASE.to_string(),
            app_name: "livechat".to_string(),
            connect_timeout_ms: 10_000,
            server_selection_timeout_ms: 30_000,
        }
    }
}

impl DbSettings {
    /// Builds settings from the `MONGODB_URI` environment variable.
    ///
    /// All other fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::MissingUri`] if the variable is unset and
    /// [`DbError::EmptyUri`] if it is set but blank.
    pub fn from_env() -> Result<Self, DbError> {
        let uri = std::env::var(URI_ENV_VAR).map_err(|source| DbError::MissingUri {
            var: URI_ENV_VAR,
            source,
        })?;

        if uri.trim().is_empty() {
            return Err(DbError::EmptyUri { var: URI_ENV_VAR });
        }

        Ok(Self {
            uri,
            ..Self::default()
        })
    }

    /// The derived connection target: the base URI with the database name
    /// appended as a path segment.
    ///
    /// A trailing slash on the base URI is normalized away so the result
    /// never contains a doubled separator.
    pub fn connection_string(&self) -> String {
        format!("{}/{}", self.uri.trim_end_matches('/'), self.database)
    }
}
