//! Result of a built-in role definition lookup and the write-back seam
//! towards the caller.

use crate::AttributeWriteError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Projected permission entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionBlock {
    /// Allowed actions, in the order received
    pub actions: Vec<String>,

    /// Denied actions, in the order received
    pub not_actions: Vec<String>,

    pub data_actions: BTreeSet<String>,

    pub not_data_actions: BTreeSet<String>,
}

/// Caller-side result structure the lookup writes into.
///
/// Writes happen one attribute at a time. A failed write leaves the earlier
/// ones in place.
pub trait ResourceData {
    fn set_id(&mut self, id: &str);

    fn set_name(&mut self, name: &str);

    fn set_description(&mut self, description: Option<&str>);

    fn set_type(&mut self, role_type: Option<&str>);

    fn set_permissions(
        &mut self,
        permissions: Vec<PermissionBlock>,
    ) -> Result<(), AttributeWriteError>;

    fn set_assignable_scopes(&mut self, scopes: Vec<String>) -> Result<(), AttributeWriteError>;
}

/// Typed attributes of the built-in role definition data source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuiltInRoleDefinition {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub role_type: Option<String>,
    pub permissions: Vec<PermissionBlock>,
    pub assignable_scopes: Vec<String>,
}

impl BuiltInRoleDefinition {
    /// Create an empty result for the given input name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

impl ResourceData for BuiltInRoleDefinition {
    fn set_id(&mut self, id: &str) {
        self.id = id.to_string();
    }

    fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    fn set_description(&mut self, description: Option<&str>) {
        self.description = description.map(str::to_string);
    }

    fn set_type(&mut self, role_type: Option<&str>) {
        self.role_type = role_type.map(str::to_string);
    }

    fn set_permissions(
        &mut self,
        permissions: Vec<PermissionBlock>,
    ) -> Result<(), AttributeWriteError> {
        self.permissions = permissions;
        Ok(())
    }

    fn set_assignable_scopes(&mut self, scopes: Vec<String>) -> Result<(), AttributeWriteError> {
        self.assignable_scopes = scopes;
        Ok(())
    }
}
