//! Wire-level checks for the reqwest fetcher: request shape and the
//! status-code-to-error-category mapping, against a minimal local server.

use prefixer_resolver::{ContentFetcher, HttpFetcher, ResolveError};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

fn request_complete(buf: &[u8]) -> bool {
    let text = String::from_utf8_lossy(buf);
    let Some(header_end) = text.find("\r\n\r\n") else {
        return false;
    };
    let content_length = text
        .lines()
        .filter_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().ok())?
        })
        .next()
        .unwrap_or(0);
    buf.len() >= header_end + 4 + content_length
}

/// Serves exactly one request with a canned HTTP response, handing the raw
/// request bytes back through the channel.
async fn serve_once(response: &'static str) -> (String, oneshot::Receiver<Vec<u8>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (request_tx, request_rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap_or(0);
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            if request_complete(&buf) {
                break;
            }
        }
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        request_tx.send(buf).ok();
    });

    (format!("http://{addr}/"), request_rx)
}

#[tokio::test]
async fn sends_bearer_credential_and_query_body() {
    let (endpoint, request_rx) = serve_once(
        "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: 34\r\n\r\n{\"data\":{\"page\":{\"slug\":\"hello\"}}}",
    )
    .await;

    let fetcher = HttpFetcher::with_endpoint(endpoint).unwrap();
    let response = fetcher.fetch("{ page { slug } }", "secret").await.unwrap();
    assert!(response.data.is_some());
    assert!(response.errors.is_none());

    let request = String::from_utf8(request_rx.await.unwrap()).unwrap();
    assert!(request.starts_with("POST / HTTP/1.1\r\n"));
    let lowered = request.to_ascii_lowercase();
    assert!(lowered.contains("authorization: bearer secret"));
    assert!(request.contains(r#"{"query":"{ page { slug } }"}"#));
}

#[tokio::test]
async fn maps_auth_statuses_to_distinct_categories() {
    let (endpoint, _rx) =
        serve_once("HTTP/1.1 401 Unauthorized\r\ncontent-length: 0\r\n\r\n").await;
    let fetcher = HttpFetcher::with_endpoint(endpoint).unwrap();
    let error = fetcher.fetch("{ slug }", "bad").await.unwrap_err();
    assert_eq!(error, ResolveError::InvalidCredential);

    let (endpoint, _rx) = serve_once("HTTP/1.1 403 Forbidden\r\ncontent-length: 0\r\n\r\n").await;
    let fetcher = HttpFetcher::with_endpoint(endpoint).unwrap();
    let error = fetcher.fetch("{ slug }", "limited").await.unwrap_err();
    assert_eq!(error, ResolveError::Forbidden);
}

#[tokio::test]
async fn maps_other_failures_to_generic_http() {
    let (endpoint, _rx) = serve_once(
        "HTTP/1.1 500 Internal Server Error\r\ncontent-length: 0\r\n\r\n",
    )
    .await;
    let fetcher = HttpFetcher::with_endpoint(endpoint).unwrap();
    let error = fetcher.fetch("{ slug }", "key").await.unwrap_err();
    assert_eq!(error, ResolveError::Http(500));
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_error() {
    // Bind then drop to get a port nothing is listening on.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let fetcher = HttpFetcher::with_endpoint(format!("http://{addr}/")).unwrap();
    let error = fetcher.fetch("{ slug }", "key").await.unwrap_err();
    assert!(matches!(error, ResolveError::Transport(_)));
}

#[tokio::test]
async fn undecodable_body_is_a_transport_error() {
    let (endpoint, _rx) = serve_once(
        "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: 8\r\n\r\nnot json",
    )
    .await;
    let fetcher = HttpFetcher::with_endpoint(endpoint).unwrap();
    let error = fetcher.fetch("{ slug }", "key").await.unwrap_err();
    assert!(matches!(error, ResolveError::Transport(_)));
}
