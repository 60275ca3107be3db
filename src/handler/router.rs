//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: body size guard, CORS
//! preflight, method/path dispatch, and the catch-all responder that turns
//! any handler fault into a generic 500.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

use crate::config::AppState;
use crate::handler::endpoints;
use crate::http;
use crate::logger;

/// Main entry point for HTTP request handling
///
/// Generic over the request body so tests can drive it with `Full<Bytes>`
/// while the server passes `hyper::body::Incoming`.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible>
where
    B: hyper::body::Body,
    B::Error: std::fmt::Display,
{
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let enable_cors = state.config.http.enable_cors;
    let access_log = state.config.logging.access_log;

    if access_log {
        logger::log_request(&method, req.uri(), req.version());
    }

    // 1. Check declared body size
    if let Some(resp) = check_body_size(&req, state.config.http.max_body_size) {
        return Ok(resp);
    }

    // 2. CORS preflight applies to every path
    if method == Method::OPTIONS {
        return Ok(http::build_options_response(enable_cors));
    }

    // 3. Dispatch; any undefined route/method combination is a 404
    let response = match (method, path.as_str()) {
        (Method::GET, "/") => endpoints::index(&state),
        (Method::GET, "/api/health") => endpoints::health(&state),
        (Method::GET, "/api/secrets-info") => endpoints::secrets_info(&state),
        (Method::GET, "/api/test-apis") => endpoints::test_apis(&state),
        (Method::POST, "/api/login") => match endpoints::login(req, &state).await {
            Ok(resp) => resp,
            // Catch-all responder: log the fault, answer with a generic 500
            Err(e) => {
                logger::log_error(&e);
                http::internal_error(enable_cors)
            }
        },
        _ => http::not_found(enable_cors),
    };

    if access_log {
        use hyper::body::Body as _;
        let size = response.body().size_hint().exact().unwrap_or(0);
        logger::log_response(response.status().as_u16(), size);
    }

    Ok(response)
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size<B>(req: &Request<B>, max_body_size: u64) -> Option<Response<Full<Bytes>>> {
    let content_length = req.headers().get("content-length")?;
    content_length.to_str().map_or_else(
        |_| {
            logger::log_warning("Content-Length header contains non-ASCII characters");
            None
        },
        |size_str| match size_str.parse::<u64>() {
            Ok(size) if size > max_body_size => {
                logger::log_error(&format!(
                    "Request body too large: {size} bytes (max: {max_body_size})"
                ));
                Some(http::build_413_response())
            }
            Err(_) => {
                logger::log_warning(&format!(
                    "Invalid Content-Length value: '{size_str}', skipping size check"
                ));
                None
            }
            _ => None,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::CredentialStore;
    use crate::config::{Config, SecretsConfig};
    use http_body_util::BodyExt;
    use hyper::StatusCode;

    fn test_state() -> Arc<AppState> {
        let config = Config::load_from("test-config-does-not-exist")
            .expect("default config should load");
        Arc::new(AppState::new(
            config,
            SecretsConfig::default(),
            CredentialStore::demo(),
        ))
    }

    fn request(method: &str, path: &str, body: &str) -> Request<Full<Bytes>> {
        Request::builder()
            .method(method)
            .uri(path)
            .body(Full::new(Bytes::from(body.to_string())))
            .expect("build request")
    }

    async fn body_json(response: Response<Full<Bytes>>) -> serde_json::Value {
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("collect body")
            .to_bytes();
        serde_json::from_slice(&bytes).expect("body should be JSON")
    }

    #[tokio::test]
    async fn test_known_routes_dispatch() {
        let state = test_state();
        for path in ["/", "/api/health", "/api/secrets-info", "/api/test-apis"] {
            let resp = handle_request(request("GET", path, ""), Arc::clone(&state))
                .await
                .expect("infallible");
            assert_eq!(resp.status(), StatusCode::OK, "GET {path}");
        }
    }

    #[tokio::test]
    async fn test_undefined_route_is_404() {
        let state = test_state();
        let resp = handle_request(request("GET", "/api/nope", ""), Arc::clone(&state))
            .await
            .expect("infallible");
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let json = body_json(resp).await;
        assert_eq!(json["error"], "Not Found");
    }

    #[tokio::test]
    async fn test_undefined_method_is_404() {
        // POST is only defined for /api/login; elsewhere it falls through
        let state = test_state();
        let resp = handle_request(request("POST", "/api/health", "{}"), Arc::clone(&state))
            .await
            .expect("infallible");
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = handle_request(request("GET", "/api/login", ""), state)
            .await
            .expect("infallible");
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_options_preflight() {
        let state = test_state();
        let resp = handle_request(request("OPTIONS", "/api/login", ""), state)
            .await
            .expect("infallible");
        assert_eq!(resp.status(), 204);
        assert_eq!(
            resp.headers().get("Access-Control-Allow-Origin").unwrap(),
            "*"
        );
    }

    #[tokio::test]
    async fn test_login_route_end_to_end() {
        let state = test_state();
        let resp = handle_request(
            request(
                "POST",
                "/api/login",
                r#"{"username":"officer","password":"officer123"}"#,
            ),
            Arc::clone(&state),
        )
        .await
        .expect("infallible");
        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["user"]["role"], "Registration Officer");
    }

    #[tokio::test]
    async fn test_malformed_login_hits_catch_all() {
        let state = test_state();
        let resp = handle_request(request("POST", "/api/login", "{broken"), state)
            .await
            .expect("infallible");
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(resp).await;
        assert_eq!(json["error"], "Internal server error");
    }

    #[tokio::test]
    async fn test_oversized_body_rejected() {
        let state = test_state();
        let req = Request::builder()
            .method("POST")
            .uri("/api/login")
            .header("content-length", "10485760")
            .body(Full::new(Bytes::new()))
            .expect("build request");
        let resp = handle_request(req, state).await.expect("infallible");
        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
