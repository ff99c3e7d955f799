//! Content resolver module
//!
//! Fetches the remote text document shown on the content page. A fetch can
//! fail in several ways (connect error, timeout, non-2xx status); the
//! failure is carried as a tagged [`FetchError`] so the caller decides what
//! to do with it. [`resolve_text`] is the page-facing entry point and never
//! fails: it substitutes the configured default text and logs the reason.

use std::time::Duration;

use crate::config::ContentConfig;
use crate::logger;

/// Why a remote fetch produced no usable text
#[derive(Debug)]
pub enum FetchError {
    /// Connect failure, timeout, or body read/decode error
    Request(reqwest::Error),
    /// Server answered with a non-success status
    Status(reqwest::StatusCode),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Request(e) if e.is_timeout() => write!(f, "request timed out: {e}"),
            Self::Request(e) => write!(f, "request failed: {e}"),
            Self::Status(code) => write!(f, "unexpected status: {code}"),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Request(e) => Some(e),
            Self::Status(_) => None,
        }
    }
}

/// Fetch `url` and return the response body as text
///
/// The body is returned byte-for-byte as decoded text; newline conversion
/// for HTML is the renderer's job. No retries.
pub async fn fetch_text(
    client: &reqwest::Client,
    url: &str,
    timeout: Duration,
) -> Result<String, FetchError> {
    let response = client
        .get(url)
        .timeout(timeout)
        .send()
        .await
        .map_err(FetchError::Request)?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }

    response.text().await.map_err(FetchError::Request)
}

/// Resolve the content page text, falling back to the configured default
///
/// Hard contract: never propagates an error, the content page renders
/// unconditionally.
pub async fn resolve_text(client: &reqwest::Client, content: &ContentConfig) -> String {
    let timeout = Duration::from_secs(content.fetch_timeout);
    match fetch_text(client, &content.text_url, timeout).await {
        Ok(text) => text,
        Err(e) => {
            logger::log_error(&format!(
                "Fetching text from {} failed: {e}",
                content.text_url
            ));
            content.default_text.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::SocketAddr;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one canned HTTP/1.1 response on a local port, then exit
    async fn one_shot_server(response: String) -> SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            // Drain the request head before answering
            let mut buf = [0u8; 4096];
            let mut head = Vec::new();
            loop {
                let n = stream.read(&mut buf).await.unwrap();
                head.extend_from_slice(&buf[..n]);
                if n == 0 || head.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.ok();
        });
        addr
    }

    fn http_response(status_line: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: text/plain; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        )
    }

    fn test_content(url: String) -> ContentConfig {
        ContentConfig {
            image_url: "https://example.com/image.png".to_string(),
            text_url: url,
            default_text: "Default text: No custom text file found or loaded.".to_string(),
            fetch_timeout: 5,
        }
    }

    #[tokio::test]
    async fn fetch_returns_body_unmodified() {
        let body = "first line\nsecond line\n";
        let addr = one_shot_server(http_response("200 OK", body)).await;
        let client = reqwest::Client::new();
        let text = fetch_text(&client, &format!("http://{addr}/doc"), Duration::from_secs(5))
            .await
            .unwrap();
        assert_eq!(text, body);
    }

    #[tokio::test]
    async fn non_success_status_is_tagged() {
        let addr = one_shot_server(http_response("404 Not Found", "gone")).await;
        let client = reqwest::Client::new();
        let err = fetch_text(&client, &format!("http://{addr}/doc"), Duration::from_secs(5))
            .await
            .unwrap_err();
        match err {
            FetchError::Status(code) => assert_eq!(code.as_u16(), 404),
            FetchError::Request(e) => panic!("expected status error, got {e}"),
        }
    }

    #[tokio::test]
    async fn resolve_defaults_on_connect_failure() {
        // Bind then drop to get a port with nothing listening
        let addr = {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            listener.local_addr().unwrap()
        };
        let client = reqwest::Client::new();
        let content = test_content(format!("http://{addr}/doc"));
        let text = resolve_text(&client, &content).await;
        assert_eq!(text, content.default_text);
    }

    #[tokio::test]
    async fn resolve_defaults_on_timeout() {
        // Accept the connection but never answer, so the per-request
        // timeout is what ends the fetch
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let silent = tokio::spawn(async move {
            let (stream, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(30)).await;
            drop(stream);
        });

        let client = reqwest::Client::new();
        let mut content = test_content(format!("http://{addr}/doc"));
        content.fetch_timeout = 1;

        let started = std::time::Instant::now();
        let text = resolve_text(&client, &content).await;
        assert_eq!(text, content.default_text);
        assert!(started.elapsed() >= Duration::from_secs(1));
        silent.abort();
    }

    #[tokio::test]
    async fn resolve_defaults_on_error_status() {
        let addr = one_shot_server(http_response("500 Internal Server Error", "boom")).await;
        let client = reqwest::Client::new();
        let content = test_content(format!("http://{addr}/doc"));
        let text = resolve_text(&client, &content).await;
        assert_eq!(text, content.default_text);
    }
}
