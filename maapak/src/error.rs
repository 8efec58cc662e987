//! Error types for Maapak

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Maapak error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration could not be written
    #[error("Config write error: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),

    /// Standoff distance outside the supported range
    #[error("Standoff distance {value} m out of range ({min}..={max} m)")]
    DistanceOutOfRange {
        /// Rejected value
        value: i64,
        /// Smallest supported distance
        min: u8,
        /// Largest supported distance
        max: u8,
    },

    /// Malformed line in a replay recording
    #[error("Replay parse error at line {line}: {source}")]
    ReplayParse {
        /// 1-based line number
        line: usize,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// Unrecognised console command
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    /// Event channel closed while the session was still running
    #[error("Event channel closed")]
    ChannelClosed,

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}
