//! Outbound interface to the authorization API

use crate::{ClientError, RoleDefinition};
use async_trait::async_trait;

/// Client for the role definitions endpoints of the authorization API
#[async_trait]
pub trait RoleDefinitionsClient: Send + Sync {
    /// List role definitions under `scope` (empty for tenant level),
    /// optionally narrowed by an OData filter. Only the first page is returned.
    async fn list(
        &self,
        scope: &str,
        filter: Option<&str>,
    ) -> Result<Vec<RoleDefinition>, ClientError>;

    /// Fetch a role definition by its fully qualified identifier
    async fn get_by_id(&self, role_definition_id: &str) -> Result<RoleDefinition, ClientError>;
}
