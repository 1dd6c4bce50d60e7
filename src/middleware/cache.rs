use axum::{
    body::Body,
    http::{HeaderValue, Request, Response, header},
    middleware::Next,
};

const ASSET_EXTENSIONS: [&str; 16] = [
    "png", "jpg", "jpeg", "gif", "svg", "webp", "ico", "mp4", "mov", "webm", "css", "js", "woff",
    "woff2", "ttf", "eot",
];

/// Embedded assets and public media are cacheable; pages and API responses
/// are not.
pub fn is_asset_path(path: &str) -> bool {
    if path.starts_with("/static/") || path == "/robots.txt" {
        return true;
    }

    path.rsplit_once('.')
        .map(|(_, ext)| ASSET_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Middleware to set cache control headers
/// - Static files: Allow caching (1 year for immutable assets)
/// - All other routes: No caching (prevent browser cache)
pub async fn cache_control_middleware(req: Request<Body>, next: Next) -> Response<Body> {
    let path = req.uri().path().to_string();
    let mut response = next.run(req).await;

    let headers = response.headers_mut();

    if is_asset_path(&path) {
        headers.insert(
            header::CACHE_CONTROL,
            HeaderValue::from_static("public, max-age=31536000, immutable"),
        );
    } else {
        headers.insert(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store, no-cache, must-revalidate, proxy-revalidate"),
        );
        headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
        headers.insert(header::EXPIRES, HeaderValue::from_static("0"));
    }

    response
}
