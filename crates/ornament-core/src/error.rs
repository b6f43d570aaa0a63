use thiserror::Error;

/// Errors raised while invoking a [`Callable`](crate::callable::Callable).
///
/// Wrappers never produce or translate these; they only pass them through.
#[derive(Debug, Error)]
pub enum CallError {
    #[error("'{name}' failed: {message}")]
    Failed { name: String, message: String },

    #[error("invalid arguments for '{name}': {message}")]
    InvalidArguments { name: String, message: String },

    #[error("'{name}' returned a value that cannot be encoded: {message}")]
    InvalidReturn { name: String, message: String },

    #[error("no plugin registered under '{0}'")]
    NotRegistered(String),
}

impl CallError {
    pub fn failed(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Failed {
            name: name.into(),
            message: message.into(),
        }
    }
}

/// Errors detected while assembling wrappers (fail-fast at build time).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("repeat count must be at least 1, got {0}")]
    InvalidRepeatCount(u32),

    #[error("config parse: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("config read: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("plugin '{0}' is not registered")]
    NotFound(String),
}
