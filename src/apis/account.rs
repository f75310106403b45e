use crate::client::Client;
use crate::errors::ScwError;
use crate::http::resources::ResourceProxy;

/// Entry point for the account API (tokens, organizations, permissions).
#[derive(Debug, Clone)]
pub struct AccountApi {
    client: Client,
}

impl AccountApi {
    /// Base URL used when none is supplied through
    /// [`from_client`](AccountApi::from_client).
    pub const DEFAULT_BASE_URL: &'static str = "https://account.scaleway.com";

    /// Creates an account API client with the default base URL.
    #[must_use]
    pub fn new(auth_token: Option<String>) -> Self {
        let mut builder = Client::builder(Self::DEFAULT_BASE_URL);
        if let Some(token) = auth_token {
            builder = builder.auth_token(token);
        }
        Self {
            client: builder.build(),
        }
    }

    /// Wraps an already configured [`Client`], e.g. one with a custom base
    /// URL or TLS settings.
    #[must_use]
    pub const fn from_client(client: Client) -> Self {
        Self { client }
    }

    /// The underlying client configuration.
    #[must_use]
    pub const fn client(&self) -> &Client {
        &self.client
    }

    /// Returns a [`ResourceProxy`] bound to the account API.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be built; see
    /// [`Client::build_session`].
    pub fn query(&self) -> Result<ResourceProxy, ScwError> {
        self.client.query()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let api = AccountApi::new(None);
        assert_eq!(api.client().api_url(), "https://account.scaleway.com");
        assert_eq!(api.client().auth_token(), None);
    }

    #[test]
    fn test_new_with_token() {
        let api = AccountApi::new(Some("abc123".to_string()));
        assert_eq!(api.client().auth_token(), Some("abc123"));
    }

    #[test]
    fn test_from_client_overrides_base_url() {
        let client = Client::builder("https://account.example.test")
            .auth_token("abc123")
            .build();
        let api = AccountApi::from_client(client);
        assert_eq!(api.client().api_url(), "https://account.example.test");
    }
}
