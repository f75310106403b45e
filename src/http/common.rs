//! Shared transport plumbing: URL construction, response status checking,
//! and the TLS-failure diagnostic emitted before errors are propagated.

use crate::errors::ScwError;
use reqwest::Response;

/// Maximum characters to include from an error body in error messages.
const ERROR_BODY_PREVIEW_LENGTH: usize = 200;

/// Request ID header returned by the API, forwarded into [`ScwError::Api`]
/// so callers can correlate failures with server-side logs.
const REQUEST_ID_HEADER: &str = "x-request-id";

/// Joins a base URL, a resource path, and query parameters into a full URL.
///
/// Exactly one `/` separates the base URL from the path regardless of how
/// either side was written; query values are percent-encoded.
pub(crate) fn build_url(base_url: &str, path: &str, query: &[(&str, &str)]) -> String {
    let base = base_url.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    let query_string = if query.is_empty() {
        String::new()
    } else {
        let pairs: Vec<String> = query
            .iter()
            .map(|(key, value)| {
                format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
            })
            .collect();
        format!("?{}", pairs.join("&"))
    };

    format!("{base}/{path}{query_string}")
}

/// Sends a request, emitting a diagnostic on TLS negotiation failures.
///
/// The diagnostic goes to stderr so it is visible even without a tracing
/// subscriber installed; the original error is returned unchanged.
pub(crate) async fn send_checked(request: reqwest::RequestBuilder) -> Result<Response, ScwError> {
    match request.send().await {
        Ok(response) => Ok(response),
        Err(err) => {
            if error_chain_mentions_tls(&err) {
                emit_tls_diagnostic();
            }
            Err(ScwError::Http(err))
        }
    }
}

/// Walks an error's source chain looking for a TLS negotiation failure.
pub(crate) fn error_chain_mentions_tls(err: &(dyn std::error::Error + 'static)) -> bool {
    let mut current: Option<&(dyn std::error::Error + 'static)> = Some(err);
    while let Some(e) = current {
        let message = e.to_string().to_lowercase();
        if message.contains("tls")
            || message.contains("ssl")
            || message.contains("certificate")
            || message.contains("handshake")
        {
            return true;
        }
        current = e.source();
    }
    false
}

fn emit_tls_diagnostic() {
    eprintln!(
        "A TLS error was raised while sending the request. The handshake with \
         the server failed before any data could be exchanged. This usually \
         means the host is missing usable CA root certificates, or the TLS \
         backend could not complete SNI negotiation with the server. Check \
         that the system certificate store is installed and up to date (on \
         Debian/Ubuntu: apt-get install ca-certificates), that the system \
         clock is correct, and that no intercepting proxy is rewriting \
         certificates. The original error follows."
    );
}

/// Checks if an HTTP response is successful, returning it if so or a
/// structured API error otherwise.
pub(crate) async fn check_response(response: Response) -> Result<Response, ScwError> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(read_error_with_context(response).await)
    }
}

/// Reads an error response body and creates a detailed [`ScwError::Api`].
///
/// Extracts the HTTP status code, a truncated body preview, and the request
/// ID header when the API sent one.
async fn read_error_with_context(response: Response) -> ScwError {
    let status_code = response.status().as_u16();

    // Extract the request ID from the headers before consuming the body.
    let request_id = response
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(String::from);

    let error_body = response
        .text()
        .await
        .unwrap_or_else(|e| format!("Failed to read error body: {}", e));

    let message = truncate_for_context(&error_body, ERROR_BODY_PREVIEW_LENGTH);

    ScwError::Api {
        status_code,
        message,
        request_id,
    }
}

/// Truncates a string to the specified length, adding "..." if truncated.
///
/// Uses character-boundary-aware slicing to prevent panics on multi-byte
/// UTF-8 characters.
fn truncate_for_context(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let truncate_at = s
            .char_indices()
            .take_while(|(i, c)| i + c.len_utf8() <= max_len)
            .last()
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0);
        format!("{}...", &s[..truncate_at])
    }
}
