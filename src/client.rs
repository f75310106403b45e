use crate::errors::ScwError;
use crate::http::resources::ResourceProxy;
use crate::user_agent::default_user_agent;
use reqwest::Client as ReqwestClient;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use std::time::Duration;

/// Header carrying the auth token on every authenticated request.
pub const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";

/// The base client shared by every API family.
///
/// A `Client` is an immutable configuration value: auth token, base URL,
/// TLS-verification flag, and User-Agent. It is also a session factory —
/// [`build_session`](Client::build_session) allocates a fresh HTTP client
/// on every call, so sessions are never shared or cached.
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) auth_token: Option<String>,
    pub(crate) base_url: String,
    pub(crate) verify_ssl: bool,
    pub(crate) user_agent: String,
    pub(crate) timeout: Option<Duration>,
    pub(crate) connect_timeout: Option<Duration>,
}

/// Builder for `Client` instances.
///
/// # Example
///
/// ```
/// use scaleway_rs::Client;
/// use std::time::Duration;
///
/// let client = Client::builder("https://account.scaleway.com")
///     .auth_token("a-token")
///     .timeout(Duration::from_secs(30))
///     .build();
/// ```
#[derive(Debug)]
pub struct ClientBuilder {
    base_url: String,
    auth_token: Option<String>,
    verify_ssl: bool,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl ClientBuilder {
    /// Sets the auth token sent as `X-Auth-Token` on every request.
    ///
    /// No validation is performed here; a token that cannot be encoded as
    /// ISO-8859-1 is rejected when a session is built.
    #[must_use]
    pub fn auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Enables or disables TLS certificate verification. Defaults to `true`.
    ///
    /// Disabling verification makes every connection through the session
    /// interceptable; a warning is logged each time such a session is built.
    #[must_use]
    pub const fn verify_ssl(mut self, verify: bool) -> Self {
        self.verify_ssl = verify;
        self
    }

    /// Replaces the computed default `User-Agent` with `user_agent`, exactly.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Sets the total request timeout.
    ///
    /// If not set, uses reqwest's default (no timeout).
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    ///
    /// A shorter timeout here can help fail fast if the network is
    /// unavailable. If not set, uses reqwest's default.
    #[must_use]
    pub const fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Builds the `Client`.
    #[must_use]
    pub fn build(self) -> Client {
        Client {
            auth_token: self.auth_token,
            base_url: self.base_url,
            verify_ssl: self.verify_ssl,
            user_agent: self
                .user_agent
                .unwrap_or_else(|| default_user_agent().to_string()),
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
        }
    }
}

impl Client {
    /// Creates a new builder for `Client` instances.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The API base URL every request path is resolved
    ///   against. The API-family types in [`crate::apis`] supply their own
    ///   defaults.
    #[must_use]
    pub fn builder(base_url: impl Into<String>) -> ClientBuilder {
        ClientBuilder {
            base_url: base_url.into(),
            auth_token: None,
            verify_ssl: true,
            user_agent: None,
            timeout: None,
            connect_timeout: None,
        }
    }

    /// The effective API base URL.
    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.base_url
    }

    /// The configured auth token, if any.
    #[must_use]
    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }

    /// The effective `User-Agent` string.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Whether sessions built by this client verify TLS certificates.
    #[must_use]
    pub const fn verify_ssl(&self) -> bool {
        self.verify_ssl
    }

    /// Builds the default headers attached to every request of a session.
    pub(crate) fn default_headers(&self) -> Result<HeaderMap, ScwError> {
        let mut headers = HeaderMap::new();

        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&self.user_agent).map_err(|_| {
                ScwError::InvalidInput(
                    "user agent contains characters not allowed in an HTTP header".to_string(),
                )
            })?,
        );

        if let Some(token) = &self.auth_token {
            // HTTP header values must always be ISO-8859-1 encoded.
            let value = HeaderValue::from_bytes(&latin1_bytes(token)?).map_err(|_| {
                ScwError::InvalidInput(
                    "auth token contains bytes not allowed in an HTTP header".to_string(),
                )
            })?;
            headers.insert(AUTH_TOKEN_HEADER, value);
        }

        Ok(headers)
    }

    /// Allocates a new HTTP session with the headers needed to query the
    /// Scaleway APIs.
    ///
    /// Each call produces an independent session; nothing is cached.
    ///
    /// # Errors
    ///
    /// Returns an error if the auth token or User-Agent cannot be carried
    /// in an HTTP header, or if the underlying HTTP client fails to build.
    pub fn build_session(&self) -> Result<ReqwestClient, ScwError> {
        if !self.verify_ssl {
            tracing::warn!(
                base_url = %self.base_url,
                "TLS certificate verification is disabled; connections made \
                 through this session can be intercepted"
            );
        }

        let mut builder = ReqwestClient::builder().default_headers(self.default_headers()?);

        if !self.verify_ssl {
            builder = builder.danger_accept_invalid_certs(true);
        }

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        if let Some(connect_timeout) = self.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }

        builder
            .build()
            .map_err(|e| ScwError::ClientBuild(e.to_string()))
    }

    /// Returns a [`ResourceProxy`] bound to [`api_url`](Client::api_url)
    /// and a freshly built session.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be built; see
    /// [`build_session`](Client::build_session).
    pub fn query(&self) -> Result<ResourceProxy, ScwError> {
        Ok(ResourceProxy::new(
            self.base_url.clone(),
            self.build_session()?,
        ))
    }
}

/// Encodes a token as ISO-8859-1 bytes.
///
/// Code points U+0000..=U+00FF map to single bytes; anything above cannot
/// be represented and is rejected. Auth tokens are UUID-like ASCII, so in
/// practice this is an identity transform.
pub(crate) fn latin1_bytes(token: &str) -> Result<Vec<u8>, ScwError> {
    token
        .chars()
        .map(|c| {
            let code_point = c as u32;
            u8::try_from(code_point).map_err(|_| {
                ScwError::InvalidInput(format!(
                    "auth token contains {c:?}, which cannot be encoded as ISO-8859-1"
                ))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builder_defaults() {
        let client = Client::builder("https://account.scaleway.com").build();
        assert_eq!(client.api_url(), "https://account.scaleway.com");
        assert_eq!(client.auth_token(), None);
        assert!(client.verify_ssl());
        assert_eq!(client.user_agent(), crate::default_user_agent());
    }

    #[test]
    fn test_client_builder_with_auth_token() {
        let client = Client::builder("https://account.scaleway.com")
            .auth_token("abc123")
            .build();
        assert_eq!(client.auth_token(), Some("abc123"));
    }

    #[test]
    fn test_client_builder_user_agent_override_is_exact() {
        let client = Client::builder("https://account.scaleway.com")
            .user_agent("my-tool/2.0")
            .build();
        assert_eq!(client.user_agent(), "my-tool/2.0");
    }

    #[test]
    fn test_client_builder_with_timeouts() {
        let client = Client::builder("https://account.scaleway.com")
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(5))
            .build();
        assert_eq!(client.timeout, Some(Duration::from_secs(30)));
        assert_eq!(client.connect_timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_default_headers_with_token() {
        let client = Client::builder("https://account.scaleway.com")
            .auth_token("abc123")
            .build();
        let headers = client.default_headers().unwrap();
        assert_eq!(
            headers.get(AUTH_TOKEN_HEADER).unwrap().as_bytes(),
            b"abc123"
        );
        assert_eq!(
            headers.get(USER_AGENT).unwrap().to_str().unwrap(),
            client.user_agent()
        );
    }

    #[test]
    fn test_default_headers_without_token() {
        let client = Client::builder("https://account.scaleway.com").build();
        let headers = client.default_headers().unwrap();
        assert!(!headers.contains_key(AUTH_TOKEN_HEADER));
        assert!(headers.contains_key(USER_AGENT));
    }

    #[test]
    fn test_default_headers_latin1_token() {
        // U+00E9 is a single 0xE9 byte in ISO-8859-1, two bytes in UTF-8.
        let client = Client::builder("https://account.scaleway.com")
            .auth_token("caf\u{e9}")
            .build();
        let headers = client.default_headers().unwrap();
        assert_eq!(
            headers.get(AUTH_TOKEN_HEADER).unwrap().as_bytes(),
            &[b'c', b'a', b'f', 0xE9]
        );
    }

    #[test]
    fn test_default_headers_rejects_wide_token() {
        let client = Client::builder("https://account.scaleway.com")
            .auth_token("token-\u{4e16}")
            .build();
        match client.default_headers() {
            Err(ScwError::InvalidInput(msg)) => assert!(msg.contains("ISO-8859-1")),
            other => panic!("expected InvalidInput, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_build_session_with_insecure_tls() {
        // Scenario: auth_token="abc123", verify_ssl=false.
        let client = Client::builder("https://self-signed.local")
            .auth_token("abc123")
            .verify_ssl(false)
            .build();
        assert!(!client.verify_ssl());
        assert!(client.build_session().is_ok());
    }

    #[test]
    fn test_build_session_default_config() {
        // Scenario: no arguments beyond the base URL.
        let client = Client::builder("https://account.scaleway.com").build();
        assert!(client.verify_ssl());
        assert!(client.build_session().is_ok());
    }

    #[test]
    fn test_query_binds_api_url() {
        let client = Client::builder("https://cp-par1.scaleway.com").build();
        let proxy = client.query().unwrap();
        assert_eq!(proxy.base_url(), "https://cp-par1.scaleway.com");
    }

    #[test]
    fn test_latin1_bytes_ascii_identity() {
        assert_eq!(latin1_bytes("abc123").unwrap(), b"abc123");
    }

    #[test]
    fn test_latin1_bytes_high_range() {
        assert_eq!(latin1_bytes("\u{a0}\u{ff}").unwrap(), vec![0xA0, 0xFF]);
    }

    #[test]
    fn test_latin1_bytes_rejects_above_ff() {
        assert!(latin1_bytes("\u{100}").is_err());
    }
}
