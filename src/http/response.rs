//! HTTP response building module
//!
//! Provides builders for the JSON and status responses used by the handler
//! set, including the CORS headers applied when enabled.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

/// Build a JSON response with the given status code.
pub fn json_response<T: Serialize>(
    status: StatusCode,
    body: &T,
    enable_cors: bool,
) -> Response<Full<Bytes>> {
    let json = match serde_json::to_string(body) {
        Ok(j) => j,
        Err(e) => {
            crate::logger::log_error(&format!("Failed to serialize response: {e}"));
            return internal_error(enable_cors);
        }
    };

    let mut builder = Response::builder()
        .status(status)
        .header("Content-Type", "application/json");
    if enable_cors {
        builder = builder.header("Access-Control-Allow-Origin", "*");
    }

    builder
        .body(Full::new(Bytes::from(json)))
        .unwrap_or_else(|e| {
            log_build_error(status.as_str(), &e);
            Response::new(Full::new(Bytes::from("Error")))
        })
}

/// Build the OPTIONS preflight response.
pub fn build_options_response(enable_cors: bool) -> Response<Full<Bytes>> {
    let mut builder = Response::builder()
        .status(204)
        .header("Allow", "GET, POST, OPTIONS");

    if enable_cors {
        builder = builder
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "GET, POST, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type, Authorization")
            .header("Access-Control-Max-Age", "86400");
    }

    builder.body(Full::new(Bytes::new())).unwrap_or_else(|e| {
        log_build_error("OPTIONS", &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// 404 Not Found response listing the known endpoints
pub fn not_found(enable_cors: bool) -> Response<Full<Bytes>> {
    let body = serde_json::json!({
        "error": "Not Found",
        "available_endpoints": ["/", "/api/health", "/api/login", "/api/secrets-info", "/api/test-apis"]
    });
    json_response(StatusCode::NOT_FOUND, &body, enable_cors)
}

/// 413 Payload Too Large response
pub fn build_413_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(413)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("413 Payload Too Large")))
        .unwrap_or_else(|e| {
            log_build_error("413", &e);
            Response::new(Full::new(Bytes::from("413 Payload Too Large")))
        })
}

/// Generic 500 response used by the catch-all responder.
///
/// The fault detail stays in the error log; the body never carries it.
pub fn internal_error(enable_cors: bool) -> Response<Full<Bytes>> {
    let mut builder = Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .header("Content-Type", "application/json");
    if enable_cors {
        builder = builder.header("Access-Control-Allow-Origin", "*");
    }

    builder
        .body(Full::new(Bytes::from(r#"{"error":"Internal server error"}"#)))
        .unwrap_or_else(|e| {
            log_build_error("500", &e);
            Response::new(Full::new(Bytes::from("Error")))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_response_sets_cors_header() {
        let body = serde_json::json!({"ok": true});
        let resp = json_response(StatusCode::OK, &body, true);
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get("Access-Control-Allow-Origin").unwrap(),
            "*"
        );
        assert_eq!(
            resp.headers().get("Content-Type").unwrap(),
            "application/json"
        );
    }

    #[test]
    fn test_json_response_without_cors() {
        let body = serde_json::json!({"ok": true});
        let resp = json_response(StatusCode::OK, &body, false);
        assert!(resp.headers().get("Access-Control-Allow-Origin").is_none());
    }

    #[test]
    fn test_options_response_headers() {
        let resp = build_options_response(true);
        assert_eq!(resp.status(), 204);
        assert_eq!(
            resp.headers()
                .get("Access-Control-Allow-Methods")
                .unwrap(),
            "GET, POST, OPTIONS"
        );
        assert_eq!(
            resp.headers()
                .get("Access-Control-Allow-Headers")
                .unwrap(),
            "Content-Type, Authorization"
        );
    }

    #[test]
    fn test_internal_error_is_generic() {
        let resp = internal_error(true);
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
