//! Resolution of a role name to a single role definition identifier

use shared::{ResolutionFailure, RoleDefinition};

/// OData filter selecting role definitions by display name.
///
/// The name is interpolated as-is; single quotes are not escaped.
pub fn role_name_filter(role_name: &str) -> String {
    format!("roleName eq '{}'", role_name)
}

/// Require exactly one definition in `definitions` and return its identifier
pub fn resolve_unique(definitions: &[RoleDefinition]) -> Result<String, ResolutionFailure> {
    match definitions {
        [] => Err(ResolutionFailure::NotFound),
        [only] => only.id.clone().ok_or(ResolutionFailure::MissingId),
        many => Err(ResolutionFailure::Ambiguous { count: many.len() }),
    }
}
