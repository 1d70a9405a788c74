//! Connection establishment and the owned database handle.

use std::time::Duration;

use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};

use crate::error::DbError;
use crate::settings::DbSettings;

/// An established connection to the chat application's database.
///
/// Wraps the driver client together with the selected database. Cloning is
/// cheap; clones share the driver's underlying connection pool.
#[derive(Clone, Debug)]
pub struct DbHandle {
    client: Client,
    database: Database,
}

impl DbHandle {
    /// The underlying driver client.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// The selected database.
    pub fn database(&self) -> &Database {
        &self.database
    }

    /// A typed collection within the selected database.
    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.database.collection(name)
    }

    /// Runs a `ping` command against the selected database.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Unreachable`] if the deployment does not answer
    /// within the server-selection window.
    pub async fn ping(&self) -> Result<(), DbError> {
        self.database
            .run_command(doc! { "ping": 1 })
            .await
            .map(|_| ())
            .map_err(DbError::Unreachable)
    }
}

/// Establishes the connection described by `settings`.
///
/// Parses the derived connection target, applies the handshake and timeout
/// options, then pings the deployment so that a returned handle is known to
/// have completed a real round-trip. The driver would otherwise accept the
/// options and connect lazily on first use.
///
/// Suspends the calling task until the driver reports success or failure;
/// there is no retry or reconnection logic here.
///
/// # Errors
///
/// Returns [`DbError::InvalidUri`] if the connection string is rejected and
/// [`DbError::Unreachable`] if the deployment cannot be reached.
pub async fn connect(settings: &DbSettings) -> Result<DbHandle, DbError> {
    let mut options = ClientOptions::parse(settings.connection_string())
        .await
        .map_err(DbError::InvalidUri)?;

    options.app_name = Some(settings.app_name.clone());
    options.connect_timeout = Some(Duration::from_millis(settings.connect_timeout_ms));
    options.server_selection_timeout =
        Some(Duration::from_millis(settings.server_selection_timeout_ms));

    let client = Client::with_options(options).map_err(DbError::InvalidUri)?;
    let database = client.database(&settings.database);

    let handle = DbHandle { client, database };
    handle.ping().await?;

    tracing::info!(
        database = %settings.database,
        app_name = %settings.app_name,
        "connected to MongoDB"
    );

    Ok(handle)
}
