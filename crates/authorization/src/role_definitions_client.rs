//! AuthorizationClient - Role definitions over the resource manager REST API

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use shared::{
    AuthorizationClientConfig, ClientError, RoleDefinition, RoleDefinitionListResult,
    RoleDefinitionsClient,
};

const ROLE_DEFINITIONS_PATH: &str = "providers/Microsoft.Authorization/roleDefinitions";

/// Role definitions client backed by `reqwest`
#[derive(Debug, Clone)]
pub struct AuthorizationClient {
    config: AuthorizationClientConfig,
    client: Client,
}

impl AuthorizationClient {
    /// Create a new AuthorizationClient
    pub fn new(config: AuthorizationClientConfig) -> Self {
        Self::with_http_client(config, Client::new())
    }

    /// Create a client sharing an existing HTTP client
    pub fn with_http_client(config: AuthorizationClientConfig, client: Client) -> Self {
        Self { config, client }
    }

    fn endpoint(&self) -> &str {
        self.config.endpoint.trim_end_matches('/')
    }

    /// URL of the role definitions collection under `scope`
    pub fn list_url(&self, scope: &str) -> String {
        let scope = scope.trim_matches('/');
        if scope.is_empty() {
            format!("{}/{}", self.endpoint(), ROLE_DEFINITIONS_PATH)
        } else {
            format!("{}/{}/{}", self.endpoint(), scope, ROLE_DEFINITIONS_PATH)
        }
    }

    /// URL of a role definition identified by its fully qualified id
    pub fn resource_url(&self, role_definition_id: &str) -> String {
        format!(
            "{}/{}",
            self.endpoint(),
            role_definition_id.trim_start_matches('/')
        )
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.config.access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        not_found: impl FnOnce() -> ClientError,
    ) -> Result<T, ClientError> {
        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let response = check_status(response, not_found).await?;

        response
            .json::<T>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }
}

async fn check_status(
    response: Response,
    not_found: impl FnOnce() -> ClientError,
) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == StatusCode::NOT_FOUND {
        return Err(not_found());
    }

    let body = response.text().await.map_err(|e| {
        ClientError::Transport(format!(
            "could not read body of {} response: {}",
            status.as_u16(),
            e
        ))
    })?;
    Err(ClientError::Status {
        status: status.as_u16(),
        body,
    })
}

#[async_trait]
impl RoleDefinitionsClient for AuthorizationClient {
    async fn list(
        &self,
        scope: &str,
        filter: Option<&str>,
    ) -> Result<Vec<RoleDefinition>, ClientError> {
        let url = self.list_url(scope);
        tracing::debug!(url = %url, filter = ?filter, "Listing role definitions");

        let mut request = self
            .client
            .get(&url)
            .query(&[("api-version", self.config.api_version.as_str())]);
        if let Some(filter) = filter {
            request = request.query(&[("$filter", filter)]);
        }

        let page: RoleDefinitionListResult = self
            .send(request, || ClientError::NotFound(url.clone()))
            .await?;

        if page.next_link.is_some() {
            tracing::debug!(count = page.value.len(), "Ignoring further role definition pages");
        }
        Ok(page.value)
    }

    async fn get_by_id(&self, role_definition_id: &str) -> Result<RoleDefinition, ClientError> {
        let url = self.resource_url(role_definition_id);
        tracing::debug!(url = %url, "Fetching role definition");

        let request = self
            .client
            .get(&url)
            .query(&[("api-version", self.config.api_version.as_str())]);

        self.send(request, || ClientError::NotFound(role_definition_id.to_string()))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const ROLE_ID: &str =
        "/providers/Microsoft.Authorization/roleDefinitions/9980e02c-c2be-4d73-94e8-173b1dc7cf3c";

    fn create_client(server: &MockServer) -> AuthorizationClient {
        AuthorizationClient::new(
            AuthorizationClientConfig::default()
                .with_endpoint(server.uri())
                .with_access_token("test-token"),
        )
    }

    fn role_json() -> serde_json::Value {
        json!({
            "id": ROLE_ID,
            "name": "9980e02c-c2be-4d73-94e8-173b1dc7cf3c",
            "type": "Microsoft.Authorization/roleDefinitions",
            "properties": {
                "roleName": "Virtual Machine Contributor",
                "type": "BuiltInRole",
                "description": "Lets you manage virtual machines.",
                "assignableScopes": ["/"],
                "permissions": [{ "actions": ["Microsoft.Compute/*"], "notActions": [] }]
            }
        })
    }

    #[test]
    fn test_urls() {
        let client = AuthorizationClient::new(
            AuthorizationClientConfig::default().with_endpoint("https://management.azure.com/"),
        );

        assert_eq!(
            client.list_url(""),
            "https://management.azure.com/providers/Microsoft.Authorization/roleDefinitions"
        );
        assert_eq!(
            client.list_url("/subscriptions/1234/"),
            "https://management.azure.com/subscriptions/1234/providers/Microsoft.Authorization/roleDefinitions"
        );
        assert_eq!(
            client.resource_url(ROLE_ID),
            format!("https://management.azure.com{}", ROLE_ID)
        );
    }

    #[tokio::test]
    async fn test_list_sends_filter_and_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/providers/Microsoft.Authorization/roleDefinitions"))
            .and(query_param("$filter", "roleName eq 'Virtual Machine Contributor'"))
            .and(query_param("api-version", "2018-01-01-preview"))
            .and(header("authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "value": [role_json()],
                "nextLink": "https://example.invalid/next"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let roles = create_client(&server)
            .list("", Some("roleName eq 'Virtual Machine Contributor'"))
            .await
            .unwrap();

        assert_eq!(roles.len(), 1);
        assert_eq!(roles[0].id.as_deref(), Some(ROLE_ID));
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(ROLE_ID))
            .and(query_param("api-version", "2018-01-01-preview"))
            .respond_with(ResponseTemplate::new(200).set_body_json(role_json()))
            .mount(&server)
            .await;

        let role = create_client(&server).get_by_id(ROLE_ID).await.unwrap();
        let props = role.properties.unwrap();
        assert_eq!(props.role_type.as_deref(), Some("BuiltInRole"));
        assert_eq!(props.permissions.unwrap()[0].data_actions, None);
    }

    #[tokio::test]
    async fn test_get_by_id_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = create_client(&server).get_by_id(ROLE_ID).await.unwrap_err();
        match err {
            ClientError::NotFound(id) => assert_eq!(id, ROLE_ID),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_list_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403).set_body_string("AuthorizationFailed"))
            .mount(&server)
            .await;

        let err = create_client(&server).list("", None).await.unwrap_err();
        match err {
            ClientError::Status { status, body } => {
                assert_eq!(status, 403);
                assert_eq!(body, "AuthorizationFailed");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_invalid_body_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = create_client(&server).get_by_id(ROLE_ID).await.unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }
}
