//! Role definition types as returned by the authorization API

use serde::{Deserialize, Serialize};

/// A single rule entry of a role definition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permission {
    /// Allowed control-plane actions
    pub actions: Option<Vec<String>>,

    /// Denied control-plane actions
    pub not_actions: Option<Vec<String>>,

    /// Allowed data-plane actions
    pub data_actions: Option<Vec<String>>,

    /// Denied data-plane actions
    pub not_data_actions: Option<Vec<String>>,
}

/// The `properties` object of a role definition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleDefinitionProperties {
    /// Display name (e.g. 'Virtual Machine Contributor')
    pub role_name: Option<String>,

    pub description: Option<String>,

    /// 'BuiltInRole' or 'CustomRole'
    #[serde(rename = "type")]
    pub role_type: Option<String>,

    pub permissions: Option<Vec<Permission>>,

    pub assignable_scopes: Option<Vec<String>>,
}

/// Role definition resource
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleDefinition {
    /// Fully qualified identifier, used for get-by-id
    pub id: Option<String>,

    /// Resource name (a GUID for built-in roles)
    pub name: Option<String>,

    /// Resource type, always 'Microsoft.Authorization/roleDefinitions'
    #[serde(rename = "type")]
    pub resource_type: Option<String>,

    pub properties: Option<RoleDefinitionProperties>,
}

impl RoleDefinition {
    /// Create a definition carrying only an identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }

    /// Builder: set properties
    pub fn with_properties(mut self, properties: RoleDefinitionProperties) -> Self {
        self.properties = Some(properties);
        self
    }
}

/// One page of a role definition listing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleDefinitionListResult {
    #[serde(default)]
    pub value: Vec<RoleDefinition>,

    /// Link to the next page; never followed
    pub next_link: Option<String>,
}
