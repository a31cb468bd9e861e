//! Shared application state.

use mongodb::{Client, Database};

/// Cloned per handler wiring; the client shares one connection pool.
#[derive(Clone)]
pub struct AppState {
    /// Configuration loaded from environment variables
    pub config: crate::config::Config,
    /// MongoDB client
    pub mongo_client: Client,
    /// Handle to the application database
    pub db: Database,
}
