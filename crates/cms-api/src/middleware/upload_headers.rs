// ============================================================================
// CMS API - Uploaded file headers
// File: crates/cms-api/src/middleware/upload_headers.rs
// ============================================================================

use axum::{
    http::{header, HeaderValue},
    response::Response,
};

/// Uploaded files are served same-origin, so SVGs are sandboxed to keep
/// embedded script inert and nothing is content-sniffed into HTML.
pub async fn harden_uploads(mut response: Response) -> Response {
    let is_svg = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("image/svg+xml"));

    let headers = response.headers_mut();
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    if is_svg {
        headers.insert(
            header::CONTENT_SECURITY_POLICY,
            HeaderValue::from_static("sandbox"),
        );
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    fn with_type(content_type: &str) -> Response {
        Response::builder()
            .header(header::CONTENT_TYPE, content_type)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_svg_is_sandboxed() {
        let response = harden_uploads(with_type("image/svg+xml")).await;
        assert_eq!(response.headers()[header::CONTENT_SECURITY_POLICY], "sandbox");
        assert_eq!(response.headers()[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
    }

    #[tokio::test]
    async fn test_raster_images_only_get_nosniff() {
        let response = harden_uploads(with_type("image/png")).await;
        assert!(response.headers().get(header::CONTENT_SECURITY_POLICY).is_none());
        assert_eq!(response.headers()[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
    }
}
