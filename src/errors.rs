use thiserror::Error;

/// Defines errors that can occur when talking to the Scaleway APIs.
///
/// # Example: Handling API Errors
///
/// ```ignore
/// match api.query()?.get::<Value>("servers", &[]).await {
///     Err(ScwError::Api { status_code: 401, .. }) => {
///         tracing::error!("auth token rejected");
///     }
///     Err(ScwError::Api { status_code, message, .. }) => {
///         tracing::error!("API error {}: {}", status_code, message);
///     }
///     // ...
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ScwError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("JSON deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    /// API error with structured context for debugging and automated handling.
    ///
    /// Contains the HTTP status code, a preview of the error body, and the
    /// request ID header when the API returned one (useful when contacting
    /// support or correlating with server-side logs).
    #[error("API error (HTTP {status_code}): {message}")]
    Api {
        /// HTTP status code (e.g., 400, 401, 404, 500)
        status_code: u16,
        /// Error message from the API response body
        message: String,
        /// Request ID from the `x-request-id` header, if available
        request_id: Option<String>,
    },
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// Failed to build the HTTP session.
    ///
    /// This typically only occurs in exceptional circumstances such as
    /// TLS backend initialization failures.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let error = ScwError::Api {
            status_code: 401,
            message: "invalid auth token".to_string(),
            request_id: Some("req-123".to_string()),
        };
        let display = format!("{}", error);
        assert!(display.contains("401"));
        assert!(display.contains("invalid auth token"));
    }

    #[test]
    fn test_api_error_without_request_id() {
        let error = ScwError::Api {
            status_code: 500,
            message: "internal error".to_string(),
            request_id: None,
        };
        let display = format!("{}", error);
        assert!(display.contains("500"));
        assert!(display.contains("internal error"));
    }

    #[test]
    fn test_invalid_input_display() {
        let error = ScwError::InvalidInput("token is not ISO-8859-1".to_string());
        let display = format!("{}", error);
        assert!(display.contains("Invalid input"));
        assert!(display.contains("ISO-8859-1"));
    }

    #[test]
    fn test_json_error_from() {
        let json_err = serde_json::from_str::<serde_json::Value>("not valid json").unwrap_err();
        let error: ScwError = json_err.into();
        let display = format!("{}", error);
        assert!(display.contains("JSON deserialization error"));
    }

    #[test]
    fn test_client_build_display() {
        let error = ScwError::ClientBuild("TLS initialization failed".to_string());
        let display = format!("{}", error);
        assert!(display.contains("Failed to build HTTP client"));
        assert!(display.contains("TLS initialization failed"));
    }
}
