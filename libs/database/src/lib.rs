//! MongoDB connection management.
//!
//! This library owns everything between "I have a connection string" and
//! "I have a usable [`mongodb::Database`]": configuration loading, client
//! construction, startup retry, and health checks.
//!
//! The driver connects lazily — constructing a client never touches the
//! network, so a down database does not prevent the process from starting.
//! Callers that want to know whether the store is actually reachable use
//! [`mongodb::ping_with_retry`] or [`mongodb::check_health`].
//!
//! # Example
//!
//! ```ignore
//! use core_config::FromEnv;
//! use database::mongodb::{connect_from_config, ping_with_retry, MongoConfig};
//!
//! let config = MongoConfig::from_env()?;
//! let client = connect_from_config(&config).await?;
//! if let Err(e) = ping_with_retry(&client, None).await {
//!     tracing::warn!("MongoDB unreachable at startup: {e}");
//! }
//! let db = client.database(config.database());
//! ```

pub mod common;
pub mod mongodb;

pub use common::{retry_with_backoff, RetryConfig};
