use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("No handler registered for channel: {0}")]
    ChannelNotFound(String),

    #[error("Bridge operation failed: {0}")]
    OperationFailed(String),
}

pub type Result<T> = std::result::Result<T, BridgeError>;
