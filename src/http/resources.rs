//! The resource-request surface bound to one base URL and one session.

use super::common::{build_url, check_response, send_checked};
use crate::errors::ScwError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

/// A request entry point bound to a base URL and a configured session.
///
/// Produced by [`Client::query`](crate::Client::query); every proxy owns a
/// freshly built session, so proxies are independent of each other. Paths
/// are relative to the base URL and responses are deserialized from JSON.
///
/// # Example
///
/// ```no_run
/// # use scaleway_rs::ComputeApi;
/// # use serde_json::Value;
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let api = ComputeApi::par1(Some("a-token".to_string()));
/// let servers: Value = api.query()?.get("servers", &[("state", "running")]).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ResourceProxy {
    base_url: String,
    session: reqwest::Client,
}

impl ResourceProxy {
    pub(crate) const fn new(base_url: String, session: reqwest::Client) -> Self {
        Self { base_url, session }
    }

    /// The base URL every request path is resolved against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issues a GET request for the resource at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the response status is
    /// not successful, or the response cannot be parsed as JSON.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ScwError> {
        let url = build_url(&self.base_url, path, query);
        debug!("GET {}", url);

        let response = send_checked(self.session.get(&url)).await?;
        let response = check_response(response).await?;
        let text = response.text().await.map_err(ScwError::Http)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Issues a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the response status is
    /// not successful, or the response cannot be parsed as JSON.
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ScwError> {
        let url = build_url(&self.base_url, path, &[]);
        debug!("POST {}", url);

        let response = send_checked(self.session.post(&url).json(body)).await?;
        let response = check_response(response).await?;
        let text = response.text().await.map_err(ScwError::Http)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Issues a PATCH request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the response status is
    /// not successful, or the response cannot be parsed as JSON.
    pub async fn patch<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ScwError> {
        let url = build_url(&self.base_url, path, &[]);
        debug!("PATCH {}", url);

        let response = send_checked(self.session.patch(&url).json(body)).await?;
        let response = check_response(response).await?;
        let text = response.text().await.map_err(ScwError::Http)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Issues a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the response status is
    /// not successful, or the response cannot be parsed as JSON.
    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ScwError> {
        let url = build_url(&self.base_url, path, &[]);
        debug!("PUT {}", url);

        let response = send_checked(self.session.put(&url).json(body)).await?;
        let response = check_response(response).await?;
        let text = response.text().await.map_err(ScwError::Http)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Issues a DELETE request for the resource at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response status is
    /// not successful.
    pub async fn delete(&self, path: &str) -> Result<(), ScwError> {
        let url = build_url(&self.base_url, path, &[]);
        debug!("DELETE {}", url);

        let response = send_checked(self.session.delete(&url)).await?;
        check_response(response).await?;
        Ok(())
    }
}
