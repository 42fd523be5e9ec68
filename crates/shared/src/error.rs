//! Error types for the role definition lookup

use thiserror::Error;

/// Why a role name did not resolve to exactly one definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionFailure {
    /// The filtered listing returned nothing
    NotFound,
    /// The filtered listing returned more than one definition
    Ambiguous { count: usize },
    /// The sole match carried no identifier
    MissingId,
}

/// Error thrown when a role name cannot be resolved to a single definition.
///
/// The message is the same for every [`ResolutionFailure`]; match on
/// `failure` to tell them apart.
#[derive(Debug, Error)]
#[error("Error loading Role Definition List: could not find role '{role_name}'")]
pub struct RoleResolutionError {
    pub role_name: String,
    pub failure: ResolutionFailure,
}

/// Error thrown when a computed attribute cannot be written back to the caller
#[derive(Debug, Error)]
#[error("Error setting '{attribute}': {reason}")]
pub struct AttributeWriteError {
    pub attribute: String,
    pub reason: String,
}

impl AttributeWriteError {
    pub fn new(attribute: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
            reason: reason.into(),
        }
    }
}

/// Failure reported by a [`crate::RoleDefinitionsClient`]
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("role definition '{0}' was not found")]
    NotFound(String),

    #[error("could not decode response: {0}")]
    Decode(String),
}

/// General error type for role definition lookups
#[derive(Debug, Error)]
pub enum RoleDefinitionError {
    #[error("Invalid role name: {0}")]
    Validation(String),

    #[error("Error loading Role Definition List: {0}")]
    List(#[source] ClientError),

    #[error(transparent)]
    Resolution(#[from] RoleResolutionError),

    #[error("Error loading Role Definition: {0}")]
    Fetch(#[source] ClientError),

    #[error(transparent)]
    Write(#[from] AttributeWriteError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, RoleDefinitionError>;
