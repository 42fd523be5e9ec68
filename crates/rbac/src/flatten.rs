//! Projection of provider role definition fields into result attributes

use shared::{Permission, PermissionBlock};

/// Project permissions. Missing lists become empty containers.
pub fn flatten_permissions(input: Option<&[Permission]>) -> Vec<PermissionBlock> {
    let Some(permissions) = input else {
        return Vec::new();
    };

    permissions
        .iter()
        .map(|permission| PermissionBlock {
            actions: permission.actions.clone().unwrap_or_default(),
            not_actions: permission.not_actions.clone().unwrap_or_default(),
            data_actions: permission
                .data_actions
                .iter()
                .flatten()
                .cloned()
                .collect(),
            not_data_actions: permission
                .not_data_actions
                .iter()
                .flatten()
                .cloned()
                .collect(),
        })
        .collect()
}

/// Project assignable scopes, keeping order
pub fn flatten_assignable_scopes(input: Option<&[String]>) -> Vec<String> {
    input.map(|scopes| scopes.to_vec()).unwrap_or_default()
}
