use mongodb::{options::ClientOptions, Client};
use std::time::Duration;
use tracing::info;

use super::MongoConfig;
use crate::common::{retry, retry_with_backoff, RetryConfig};

/// Error type for MongoDB connection handling
#[derive(Debug, thiserror::Error)]
pub enum MongoError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
}

/// Build a client for `url` with default pool settings.
///
/// The driver connects lazily: this only fails on an invalid connection
/// string, never on an unreachable server. Use [`ping_with_retry`] to find
/// out whether the server is actually there.
pub async fn connect(url: &str) -> Result<Client, MongoError> {
    let mut options = ClientOptions::parse(url).await?;

    options.max_pool_size = Some(100);
    options.min_pool_size = Some(5);
    options.connect_timeout = Some(Duration::from_secs(10));
    options.server_selection_timeout = Some(Duration::from_secs(30));

    Ok(Client::with_options(options)?)
}

/// Build a client from a [`MongoConfig`].
pub async fn connect_from_config(config: &MongoConfig) -> Result<Client, MongoError> {
    let mut options = ClientOptions::parse(&config.url).await?;

    options.max_pool_size = Some(config.max_pool_size);
    options.min_pool_size = Some(config.min_pool_size);
    options.connect_timeout = Some(Duration::from_secs(config.connect_timeout_secs));
    options.server_selection_timeout =
        Some(Duration::from_secs(config.server_selection_timeout_secs));

    if let Some(ref app_name) = config.app_name {
        options.app_name = Some(app_name.clone());
    }

    Ok(Client::with_options(options)?)
}

/// Verify the server is reachable, retrying with exponential backoff.
///
/// Startup callers log the error and carry on — an unreachable store must
/// not keep the process from serving (requests fail individually until the
/// connection succeeds).
pub async fn ping_with_retry(
    client: &Client,
    retry_config: Option<RetryConfig>,
) -> Result<(), MongoError> {
    let ping = || async {
        client
            .list_database_names()
            .await
            .map(|_| ())
            .map_err(|e| MongoError::ConnectionFailed(e.to_string()))
    };

    match retry_config {
        Some(config) => retry_with_backoff(ping, config).await?,
        None => retry(ping).await?,
    }

    info!("Successfully connected to MongoDB");
    Ok(())
}
