use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all featgen operations.
#[derive(Debug, Error, Diagnostic)]
pub enum FeatgenError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A `group:artifact:version` string did not split into exactly three tokens.
    #[error("The string {coordinates} is not a valid Maven coordinates string")]
    #[diagnostic(help("Expected format is groupId:artifactId:version"))]
    MalformedCoordinate { coordinates: String },

    /// An artifact inclusion pattern could not be parsed.
    #[error("Invalid artifact pattern `{pattern}`: {message}")]
    #[diagnostic(help("Patterns have the form groupId:artifactId:extension:version"))]
    InvalidPattern { pattern: String, message: String },

    /// A dependency graph document was inconsistent.
    #[error("Invalid dependency graph: {message}")]
    InvalidGraph { message: String },

    /// The platform feature catalog is missing or unusable.
    #[error("Feature catalog error: {message}")]
    #[diagnostic(help("Ensure the platform git repository is cloned, or set platform.checkout"))]
    Catalog { message: String },

    /// Building the dependency graph of one artifact failed.
    #[error("Could not collect dependencies of {artifact}: {message}")]
    GraphCollection { artifact: String, message: String },

    /// Configuration could not be read or parsed.
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Reading an artifact archive failed.
    #[error("Archive error: {message}")]
    Archive { message: String },
}
