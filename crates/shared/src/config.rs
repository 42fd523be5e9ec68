//! Configuration types for the role definition lookup

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Default Azure Resource Manager endpoint
pub const DEFAULT_ENDPOINT: &str = "https://management.azure.com";

/// API version of the authorization role definitions endpoints
pub const DEFAULT_API_VERSION: &str = "2018-01-01-preview";

/// Mapping of internal role names to the provider's display names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleNameAliases(HashMap<String, String>);

impl Default for RoleNameAliases {
    fn default() -> Self {
        let mut aliases = HashMap::new();
        aliases.insert(
            "VirtualMachineContributor".to_string(),
            "Virtual Machine Contributor".to_string(),
        );
        Self(aliases)
    }
}

impl RoleNameAliases {
    /// An alias table without entries
    pub fn empty() -> Self {
        Self(HashMap::new())
    }

    /// Builder: add an alias
    pub fn with_alias(mut self, alias: impl Into<String>, canonical: impl Into<String>) -> Self {
        self.0.insert(alias.into(), canonical.into());
        self
    }

    /// Canonical name for `name`, or `name` itself when it is not an alias
    pub fn canonical<'a>(&'a self, name: &'a str) -> &'a str {
        self.0.get(name).map(|s| s.as_str()).unwrap_or(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Connection settings for the authorization API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizationClientConfig {
    /// Resource manager endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// `api-version` query parameter
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Pre-acquired bearer token
    #[serde(default)]
    pub access_token: Option<String>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

impl Default for AuthorizationClientConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_version: default_api_version(),
            access_token: None,
        }
    }
}

impl AuthorizationClientConfig {
    /// Builder: set endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Builder: set bearer token
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }
}

/// Lookup configuration (JSON or YAML file)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupConfig {
    /// Role name aliases applied before querying
    #[serde(default)]
    pub aliases: RoleNameAliases,

    /// Authorization API settings
    #[serde(default)]
    pub client: AuthorizationClientConfig,
}

impl LookupConfig {
    /// Load configuration from a file. `.yaml`/`.yml` files are read as YAML,
    /// everything else as JSON.
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let is_yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml") | Some("yml")
        );

        let config: Self = if is_yaml {
            serde_yaml::from_str(&content)?
        } else {
            serde_json::from_str(&content)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the client cannot work with
    pub fn validate(&self) -> crate::Result<()> {
        if self.client.endpoint.trim().is_empty() {
            return Err(crate::RoleDefinitionError::Config(
                "endpoint must not be empty".to_string(),
            ));
        }
        if self.client.api_version.trim().is_empty() {
            return Err(crate::RoleDefinitionError::Config(
                "apiVersion must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Logger interface for dependency injection
pub trait Logger: Send + Sync {
    fn debug(&self, message: &str, meta: Option<&HashMap<String, String>>);
    fn info(&self, message: &str, meta: Option<&HashMap<String, String>>);
    fn warn(&self, message: &str, meta: Option<&HashMap<String, String>>);
    fn error(&self, message: &str, meta: Option<&HashMap<String, String>>);
}

/// Logger that forwards to `tracing`
#[derive(Debug, Clone, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn debug(&self, message: &str, meta: Option<&HashMap<String, String>>) {
        tracing::debug!(meta = ?meta, "{}", message);
    }

    fn info(&self, message: &str, meta: Option<&HashMap<String, String>>) {
        tracing::info!(meta = ?meta, "{}", message);
    }

    fn warn(&self, message: &str, meta: Option<&HashMap<String, String>>) {
        tracing::warn!(meta = ?meta, "{}", message);
    }

    fn error(&self, message: &str, meta: Option<&HashMap<String, String>>) {
        tracing::error!(meta = ?meta, "{}", message);
    }
}

/// No-op logger for testing
#[derive(Debug, Clone, Default)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn debug(&self, _message: &str, _meta: Option<&HashMap<String, String>>) {}
    fn info(&self, _message: &str, _meta: Option<&HashMap<String, String>>) {}
    fn warn(&self, _message: &str, _meta: Option<&HashMap<String, String>>) {}
    fn error(&self, _message: &str, _meta: Option<&HashMap<String, String>>) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_aliases() {
        let aliases = RoleNameAliases::default();
        assert_eq!(aliases.len(), 1);
        assert_eq!(
            aliases.canonical("VirtualMachineContributor"),
            "Virtual Machine Contributor"
        );
        assert_eq!(aliases.canonical("Reader"), "Reader");
    }

    #[test]
    fn test_config_parse() {
        let json = r#"{
            "aliases": {
                "StorageBlobReader": "Storage Blob Data Reader"
            },
            "client": {
                "endpoint": "https://management.usgovcloudapi.net"
            }
        }"#;

        let config: LookupConfig = serde_json::from_str(json).unwrap();
        assert_eq!(
            config.aliases.canonical("StorageBlobReader"),
            "Storage Blob Data Reader"
        );
        assert_eq!(
            config.aliases.canonical("VirtualMachineContributor"),
            "VirtualMachineContributor"
        );
        assert_eq!(config.client.endpoint, "https://management.usgovcloudapi.net");
        assert_eq!(config.client.api_version, DEFAULT_API_VERSION);
        assert!(config.client.access_token.is_none());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: LookupConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, LookupConfig::default());
        assert_eq!(config.client.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_loggers_accept_metadata() {
        let mut meta = HashMap::new();
        meta.insert("id".to_string(), "/roles/1".to_string());

        let loggers: Vec<Box<dyn Logger>> = vec![Box::new(TracingLogger), Box::new(NullLogger)];
        for logger in &loggers {
            logger.debug("debug", None);
            logger.info("info", Some(&meta));
            logger.warn("warn", None);
            logger.error("error", Some(&meta));
        }
    }

    #[test]
    fn test_from_yaml_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(
            file,
            "aliases:\n  VirtualMachineContributor: Virtual Machine Contributor\nclient:\n  accessToken: secret\n"
        )
        .unwrap();

        let config = LookupConfig::from_file(file.path()).unwrap();
        assert_eq!(config.client.access_token.as_deref(), Some("secret"));
        assert_eq!(config.aliases.len(), 1);
    }

    #[test]
    fn test_from_file_rejects_empty_endpoint() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"client": {{"endpoint": ""}}}}"#).unwrap();

        let err = LookupConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, crate::RoleDefinitionError::Config(_)));
    }
}
