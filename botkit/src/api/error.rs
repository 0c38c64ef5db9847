use thiserror::Error;

/// Error returned by the platform when a bot action fails
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never reached the platform, or the connection broke
    /// before a response arrived
    #[error("Transport Error: {0}")]
    Transport(String),
    /// The platform answered with a non-zero return code
    #[error("Action Failed (retcode {retcode}): {message}")]
    Action { retcode: i64, message: String },
}

impl ApiError {
    pub fn transport(msg: impl Into<String>) -> Self {
        ApiError::Transport(msg.into())
    }

    pub fn action(retcode: i64, msg: impl Into<String>) -> Self {
        ApiError::Action {
            retcode,
            message: msg.into(),
        }
    }
}
