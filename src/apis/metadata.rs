use crate::client::Client;
use crate::errors::ScwError;
use crate::http::resources::ResourceProxy;
use serde_json::Value;

/// Entry point for the instance metadata API.
///
/// The metadata endpoint lives on a link-local address and authenticates
/// requests by their source, so no auth token is involved. Only reachable
/// from inside a running instance.
#[derive(Debug, Clone)]
pub struct MetadataApi {
    client: Client,
}

impl MetadataApi {
    /// Link-local address of the metadata service.
    pub const DEFAULT_BASE_URL: &'static str = "http://169.254.42.42";

    /// Creates a metadata API client with the default base URL.
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: Client::builder(Self::DEFAULT_BASE_URL).build(),
        }
    }

    /// Wraps an already configured [`Client`], e.g. for tests against a
    /// local mock of the metadata service.
    #[must_use]
    pub const fn from_client(client: Client) -> Self {
        Self { client }
    }

    /// The underlying client configuration.
    #[must_use]
    pub const fn client(&self) -> &Client {
        &self.client
    }

    /// Returns a [`ResourceProxy`] bound to the metadata service.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be built; see
    /// [`Client::build_session`].
    pub fn query(&self) -> Result<ResourceProxy, ScwError> {
        self.client.query()
    }

    /// Fetches the configuration of the running instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the response status is
    /// not successful, or the response cannot be parsed as JSON.
    pub async fn metadata(&self) -> Result<Value, ScwError> {
        self.query()?.get("conf", &[("format", "json")]).await
    }
}

impl Default for MetadataApi {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let api = MetadataApi::new();
        assert_eq!(api.client().api_url(), "http://169.254.42.42");
        assert_eq!(api.client().auth_token(), None);
    }

    #[test]
    fn test_from_client_overrides_base_url() {
        let client = Client::builder("http://127.0.0.1:8080").build();
        let api = MetadataApi::from_client(client);
        assert_eq!(api.client().api_url(), "http://127.0.0.1:8080");
    }
}
