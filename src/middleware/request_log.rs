//! Per-request logging middleware.

use axum::{
    body::{Body, Bytes},
    extract::{ConnectInfo, Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};
use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use super::response_capture::ResponseCapture;
use crate::fields;
use crate::logging::Logger;
use crate::utils::duration::format_duration;

const FORWARDED_FOR: &str = "x-forwarded-for";

/// Logs one `Info` event per request once the downstream handler returns.
///
/// # Logged Fields
///
/// - `protocol`, `status`, `method`, `url`, `ip`, `duration`
/// - `referrer` (`N/A` when absent), `headers` (repeated values joined with
///   `", "`), `body` (the full request body)
///
/// The request body is buffered for logging and handed downstream unchanged.
/// A body that cannot be read is logged as empty; logging never fails the
/// request.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .nest_service("/file", ServeDir::new("files"))
///     .layer(middleware::from_fn_with_state(logger, request_log::layer));
/// ```
pub async fn layer(State(logger): State<Arc<Logger>>, req: Request, next: Next) -> Response {
    let start = Instant::now();

    let (parts, body) = req.into_parts();
    let body = axum::body::to_bytes(body, usize::MAX)
        .await
        .unwrap_or_default();
    let req = Request::from_parts(parts, Body::from(body.clone()));

    let ip = client_ip(&req);
    let referrer = referrer(req.headers());
    let headers = flatten_headers(req.headers());
    let protocol = format!("{:?}", req.version());
    let method = req.method().to_string();
    let url = req.uri().path().to_string();

    let mut capture = ResponseCapture::new();
    let response = next.run(req).await;
    capture.observe(&response);

    let duration = format_duration(start.elapsed());

    logger.info(
        "Request Information",
        &[
            fields! {
                "protocol" => protocol,
                "status" => capture.status().as_u16(),
                "method" => method,
                "url" => url,
                "ip" => ip,
                "duration" => duration,
            },
            fields! {
                "referrer" => referrer,
                "headers" => headers,
                "body" => body_text(&body),
            },
        ],
    );

    response
}

/// Prefers a non-empty `X-Forwarded-For`, then the transport peer address.
fn client_ip(req: &Request) -> String {
    let forwarded = req
        .headers()
        .get(FORWARDED_FOR)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty());

    if let Some(forwarded) = forwarded {
        return forwarded.to_string();
    }

    req.extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_default()
}

fn referrer(headers: &HeaderMap) -> String {
    headers
        .get(header::REFERER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .unwrap_or("N/A")
        .to_string()
}

fn flatten_headers(headers: &HeaderMap) -> BTreeMap<String, String> {
    headers
        .keys()
        .map(|name| {
            let joined = headers
                .get_all(name)
                .iter()
                .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
                .collect::<Vec<_>>()
                .join(", ");

            (name.as_str().to_string(), joined)
        })
        .collect()
}

fn body_text(body: &Bytes) -> String {
    String::from_utf8_lossy(body).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_flatten_joins_repeated_values() {
        let mut headers = HeaderMap::new();
        headers.append(header::ACCEPT, HeaderValue::from_static("text/html"));
        headers.append(header::ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(header::HOST, HeaderValue::from_static("localhost"));

        let flat = flatten_headers(&headers);

        assert_eq!(flat["accept"], "text/html, application/json");
        assert_eq!(flat["host"], "localhost");
        assert_eq!(flat.len(), 2);
    }

    #[test]
    fn test_referrer_defaults() {
        let mut headers = HeaderMap::new();
        assert_eq!(referrer(&headers), "N/A");

        headers.insert(header::REFERER, HeaderValue::from_static(""));
        assert_eq!(referrer(&headers), "N/A");

        headers.insert(header::REFERER, HeaderValue::from_static("https://a.test/"));
        assert_eq!(referrer(&headers), "https://a.test/");
    }

    #[test]
    fn test_client_ip_prefers_forwarded_for() {
        let peer: SocketAddr = "10.0.0.1:5555".parse().unwrap();

        let mut req = axum::http::Request::builder()
            .header(FORWARDED_FOR, "203.0.113.5")
            .body(Body::empty())
            .unwrap();
        req.extensions_mut().insert(ConnectInfo(peer));
        assert_eq!(client_ip(&req), "203.0.113.5");

        let mut req = axum::http::Request::builder()
            .header(FORWARDED_FOR, "")
            .body(Body::empty())
            .unwrap();
        req.extensions_mut().insert(ConnectInfo(peer));
        assert_eq!(client_ip(&req), "10.0.0.1:5555");

        let req = axum::http::Request::builder().body(Body::empty()).unwrap();
        assert_eq!(client_ip(&req), "");
    }
}
