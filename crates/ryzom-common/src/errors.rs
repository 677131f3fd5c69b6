use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CodeError {
    #[error("invalid color token: {0}")]
    InvalidToken(String),

    #[error("{channel} = {value} is out of range [{min}, {max}]")]
    ChannelOutOfRange {
        channel: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("invalid picker color: {0}")]
    InvalidPickerColor(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum RyzomError {
    #[error(transparent)]
    Code(#[from] CodeError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("{0}")]
    Other(String),
}
