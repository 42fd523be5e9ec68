//! BuiltInRoleDefinitionLookup - Resolve a built-in role by name and project it

use crate::flatten::{flatten_assignable_scopes, flatten_permissions};
use crate::resolution::{resolve_unique, role_name_filter};
use shared::{
    BuiltInRoleDefinition, Logger, LookupConfig, ResolutionFailure, ResourceData,
    RoleDefinitionError, RoleDefinitionsClient, RoleNameAliases, RoleResolutionError, Result,
};
use std::collections::HashMap;
use std::sync::Arc;

/// Looks up built-in role definitions through the authorization API
pub struct BuiltInRoleDefinitionLookup {
    client: Arc<dyn RoleDefinitionsClient>,
    aliases: RoleNameAliases,
    logger: Arc<dyn Logger>,
}

impl BuiltInRoleDefinitionLookup {
    /// Create a new lookup
    pub fn new(
        client: Arc<dyn RoleDefinitionsClient>,
        config: &LookupConfig,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            client,
            aliases: config.aliases.clone(),
            logger,
        }
    }

    /// Canonical display name for `name`
    pub fn normalize_name<'a>(&'a self, name: &'a str) -> &'a str {
        self.aliases.canonical(name)
    }

    /// Look up `name` and return the typed result
    pub async fn lookup(&self, name: &str) -> Result<BuiltInRoleDefinition> {
        let mut data = BuiltInRoleDefinition::new(name);
        self.read(name, &mut data).await?;
        Ok(data)
    }

    /// Look up `name` and write the result into `data`.
    ///
    /// On error, attributes written before the failure stay written.
    pub async fn read(&self, name: &str, data: &mut dyn ResourceData) -> Result<()> {
        if name.is_empty() {
            return Err(RoleDefinitionError::Validation(
                "name must not be empty".to_string(),
            ));
        }

        let role_name = self.normalize_name(name);
        if role_name != name {
            self.logger.debug(
                &format!("Role name '{}' normalized to '{}'", name, role_name),
                None,
            );
        }

        let filter = role_name_filter(role_name);
        let definitions = self
            .client
            .list("", Some(&filter))
            .await
            .map_err(|e| {
                self.logger
                    .error(&format!("Listing role '{}' failed: {}", role_name, e), None);
                RoleDefinitionError::List(e)
            })?;

        let role_definition_id = resolve_unique(&definitions)
            .map_err(|failure| self.unresolved(role_name, failure))?;

        data.set_id(&role_definition_id);
        data.set_name(role_name);

        let role = self
            .client
            .get_by_id(&role_definition_id)
            .await
            .map_err(|e| {
                self.logger.error(
                    &format!("Fetching role definition '{}' failed: {}", role_definition_id, e),
                    None,
                );
                RoleDefinitionError::Fetch(e)
            })?;

        let Some(props) = role.properties else {
            self.logger.warn(
                &format!("Role definition '{}' has no properties", role_definition_id),
                None,
            );
            return Ok(());
        };

        if let Some(provider_name) = props.role_name.as_deref() {
            data.set_name(provider_name);
        }
        data.set_description(props.description.as_deref());
        data.set_type(props.role_type.as_deref());
        data.set_permissions(flatten_permissions(props.permissions.as_deref()))?;
        let scopes = flatten_assignable_scopes(props.assignable_scopes.as_deref());
        data.set_assignable_scopes(scopes)?;

        let mut meta = HashMap::new();
        meta.insert("id".to_string(), role_definition_id);
        self.logger
            .info(&format!("Loaded role definition '{}'", role_name), Some(&meta));
        Ok(())
    }

    fn unresolved(&self, role_name: &str, failure: ResolutionFailure) -> RoleDefinitionError {
        self.logger.warn(
            &format!("Role '{}' did not resolve: {:?}", role_name, failure),
            None,
        );
        RoleResolutionError {
            role_name: role_name.to_string(),
            failure,
        }
        .into()
    }
}
