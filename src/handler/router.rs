//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, route
//! matching, access logging.

use crate::config::AppState;
use crate::handler::pages;
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::{Body as _, Bytes};
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

/// Request context encapsulating what the page handlers need
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
    /// Host header, used to build the self-referential QR payload
    pub host: Option<&'a str>,
}

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let is_head = method == Method::HEAD;

    // 1. Check HTTP method
    if let Some(resp) = check_http_method(&method) {
        return Ok(resp);
    }

    // 2. Dispatch
    let ctx = RequestContext {
        path: &path,
        is_head,
        host: req.headers().get("host").and_then(|v| v.to_str().ok()),
    };
    let response = route_request(&ctx, &state).await;

    // 3. Access log
    if state.config.logging.access_log {
        let body_bytes = usize::try_from(response.body().size_hint().exact().unwrap_or(0))
            .unwrap_or(usize::MAX);
        logger::log_access(
            &peer_addr.to_string(),
            method.as_str(),
            &path,
            response.status().as_u16(),
            body_bytes,
        );
    }

    Ok(response)
}

/// Check HTTP method and return appropriate response for non-GET/HEAD methods
fn check_http_method(method: &Method) -> Option<Response<Full<Bytes>>> {
    match method {
        &Method::GET | &Method::HEAD => None,
        &Method::OPTIONS => Some(http::build_options_response()),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

/// Route request based on path
pub async fn route_request(
    ctx: &RequestContext<'_>,
    state: &Arc<AppState>,
) -> Response<Full<Bytes>> {
    match ctx.path {
        // Health check endpoints (always fast, no outbound fetch)
        "/healthz" | "/readyz" => http::build_health_response("ok"),

        "/" => pages::content_page(ctx, state).await,
        "/qr" => pages::qr_display_page(ctx),
        "/generate_qr" => pages::qr_image(ctx, state),

        "/favicon.ico" | "/favicon.svg" => pages::favicon(ctx),

        _ => http::build_404_response(),
    }
}
