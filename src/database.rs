use mongodb::{
    bson::{doc, Document},
    Client, Collection, Database,
};

use crate::{config::Settings, error::ApiError};

/// Handle to the document store, shared by every request for the life of
/// the process. The driver opens sockets lazily on first operation and
/// pools them internally, so cloning this handle is cheap and no handler
/// ever closes a connection.
#[derive(Clone)]
pub struct Store {
    database: Database,
}

impl Store {
    /// Parse the connection string and resolve the database it names.
    /// The connection string must include a database path segment.
    pub async fn connect(settings: &Settings) -> Result<Self, ApiError> {
        let client = Client::with_uri_str(&settings.database_url).await?;
        let database = client.default_database().ok_or_else(|| {
            ApiError::configuration("DATABASE_URL must name a default database")
        })?;

        Ok(Self { database })
    }

    pub fn collection(&self, name: &str) -> Collection<Document> {
        self.database.collection(name)
    }

    /// Round-trip a ping through the store.
    pub async fn health_check(&self) -> Result<(), ApiError> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}
