//! # RBAC
//!
//! Lookup of built-in role definitions by name.
//!
//! ## Components
//!
//! - `BuiltInRoleDefinitionLookup` - Name to role definition resolution and projection
//! - `resolution` - Filter construction and the exactly-one-match check
//! - `flatten` - Projection of permissions and assignable scopes

pub mod builtin_role_definition;
pub mod flatten;
pub mod resolution;

pub use builtin_role_definition::BuiltInRoleDefinitionLookup;
pub use flatten::{flatten_assignable_scopes, flatten_permissions};
pub use resolution::{resolve_unique, role_name_filter};
