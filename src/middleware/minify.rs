//! Release-build HTML minification.
//!
//! The page templates are indented for editing, and the home page carries every
//! section of the site, so stripping that whitespace noticeably shrinks the
//! largest response. Stylesheet and script are separate embedded files and
//! are left alone.

use axum::{
    body::Body,
    http::{HeaderMap, header},
    response::Response,
};

cfg_if::cfg_if! {
    if #[cfg(not(debug_assertions))] {
        use axum::body::to_bytes;
        use std::sync::LazyLock;

        static PAGE_CFG: LazyLock<minify_html::Cfg> = LazyLock::new(|| minify_html::Cfg {
            keep_closing_tags: true,
            keep_html_and_head_opening_tags: true,
            minify_doctype: false,
            ..Default::default()
        });

        async fn minify(response: Response<Body>) -> Response<Body> {
            let (mut parts, body) = response.into_parts();
            let bytes = to_bytes(body, usize::MAX).await.unwrap_or_default();
            let minified = minify_html::minify(&bytes, &PAGE_CFG);
            // Length changed; let the body report its own.
            parts.headers.remove(header::CONTENT_LENGTH);

            Response::from_parts(parts, Body::from(minified))
        }
    } else {
        /// Debug builds serve markup exactly as the templates render it.
        async fn minify(response: Response<Body>) -> Response<Body> {
            response
        }
    }
}

/// Whether a response carries a rendered page.
pub fn is_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|h| h.to_str().ok())
        .is_some_and(|h| h.starts_with("text/html"))
}

pub async fn minify_html_middleware(response: Response<Body>) -> Response<Body> {
    if !is_html(response.headers()) {
        return response;
    }

    minify(response).await
}
