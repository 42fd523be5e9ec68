//! # Authorization
//!
//! HTTP implementation of [`shared::RoleDefinitionsClient`] for the Azure
//! Resource Manager role definitions API.

pub mod role_definitions_client;

pub use role_definitions_client::AuthorizationClient;
