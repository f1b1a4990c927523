//! Errors surfaced to the host by the application layer.

use motorika_core::error::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("simulation already running")]
    AlreadyRunning,

    #[error("simulation not started")]
    NotStarted,

    #[error("game loop thread is gone")]
    Disconnected,

    #[error("shared state lock poisoned")]
    Poisoned,

    #[error("failed to spawn game loop thread: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("failed to read layout: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
