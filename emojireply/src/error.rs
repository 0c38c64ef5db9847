use std::path::PathBuf;

use thiserror::Error;

/// Failure to load the plugin configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config {path:?}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Unexpected failure while reacting to a message. Never leaves the handler
#[derive(Error, Debug)]
pub enum HandlerError {
    /// The host delivered an event without a message id to react to
    #[error("Message from {sender_id} on {platform} has no message id")]
    MissingMessageId { sender_id: String, platform: String },
}
