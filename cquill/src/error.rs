//! Error type for the aggregation layer.
//!
//! Tree construction and rendering in `cquill-ast` are infallible by
//! construction; errors only arise at this crate's edges, where host
//! input (binding names, build configuration) enters the system.

use thiserror::Error;

/// Result type for cquill operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A compile command was requested with no source files.
    #[error("no source files given to compile")]
    NoSources,

    /// A standard-library binding lookup failed.
    #[error("unknown standard-library binding `{0}`")]
    UnknownBinding(String),

    /// A build configuration file failed to parse.
    #[error("invalid build configuration")]
    Toml(#[from] toml::de::Error),
}
