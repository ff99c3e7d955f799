//! Page handlers
//!
//! The three routes of the application: the content page, the QR display
//! page, and the QR PNG image.

use crate::config::AppState;
use crate::content::resolve_text;
use crate::handler::router::RequestContext;
use crate::http;
use crate::logger;
use crate::qr;
use crate::render;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::sync::Arc;

static FAVICON: &str = include_str!("../../assets/favicon.svg");

/// Content page: remote text (or the default) plus the configured image
///
/// Always answers 200; a failed fetch only changes the text shown.
pub async fn content_page(ctx: &RequestContext<'_>, state: &Arc<AppState>) -> Response<Full<Bytes>> {
    let text = resolve_text(&state.client, &state.config.content).await;
    let html = render::content_page(
        &render::format_content(&text),
        &state.config.content.image_url,
    );
    http::build_html_response(html, ctx.is_head)
}

/// QR display page: static HTML embedding the PNG route
pub fn qr_display_page(ctx: &RequestContext<'_>) -> Response<Full<Bytes>> {
    http::build_html_response(render::qr_page(), ctx.is_head)
}

/// QR PNG route: encodes the absolute URL of the content page on this host
pub fn qr_image(ctx: &RequestContext<'_>, state: &Arc<AppState>) -> Response<Full<Bytes>> {
    let payload = content_page_url(ctx, state);
    match qr::encode(&payload) {
        Ok(png) => http::build_png_response(png, ctx.is_head),
        Err(e) => {
            logger::log_error(&format!("QR encoding for '{payload}' failed: {e}"));
            http::build_500_response()
        }
    }
}

/// Embedded favicon
pub fn favicon(ctx: &RequestContext<'_>) -> Response<Full<Bytes>> {
    http::build_svg_response(FAVICON, ctx.is_head)
}

/// Absolute URL of the content page, the QR payload
///
/// Prefers the configured public base URL; otherwise the request Host
/// header (what external clients actually used to reach us); otherwise the
/// bind address.
fn content_page_url(ctx: &RequestContext<'_>, state: &Arc<AppState>) -> String {
    if let Some(base) = &state.config.server.public_url {
        return format!("{}/", base.trim_end_matches('/'));
    }
    if let Some(host) = ctx.host {
        return format!("http://{host}/");
    }
    format!(
        "http://{}:{}/",
        state.config.server.host, state.config.server.port
    )
}
