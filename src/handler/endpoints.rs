//! Endpoint handlers module
//!
//! One function per route. Handlers read only the immutable `AppState`
//! snapshot, so every response is computed from static data, the request
//! body, and the startup environment snapshot.

use chrono::{Local, SecondsFormat, Utc};
use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::{Request, Response, StatusCode};
use serde::Deserialize;

use crate::config::AppState;
use crate::http;
use crate::logger;

/// `GET /` - service banner with the known endpoint map
pub fn index(state: &AppState) -> Response<Full<Bytes>> {
    let body = serde_json::json!({
        "message": "NIMC Backend API is running!",
        "timestamp": timestamp_utc(),
        "endpoints": {
            "health": "/api/health",
            "login": "/api/login",
            "secrets": "/api/secrets-info",
            "apis": "/api/test-apis"
        }
    });
    http::json_response(StatusCode::OK, &body, state.config.http.enable_cors)
}

/// `GET /api/health` - always reports "Healthy"
pub fn health(state: &AppState) -> Response<Full<Bytes>> {
    let body = serde_json::json!({
        "status": "Healthy",
        "service": state.config.http.service_name,
        "timestamp": timestamp_utc(),
        "environment": state.secrets.environment,
        "secretsLoaded": state.secrets.weather_api_key.is_some()
    });
    http::json_response(StatusCode::OK, &body, state.config.http.enable_cors)
}

/// `GET /api/secrets-info` - presence and length of each secret, never
/// the value itself
pub fn secrets_info(state: &AppState) -> Response<Full<Bytes>> {
    logger::log_secrets_info_requested();
    let secrets = &state.secrets;
    let body = serde_json::json!({
        "message": "NIMC API Secrets Information",
        "environment": secrets.environment_or_default(),
        "appName": secrets.app_name_or_default(),
        "apiKeysFileMounted": secrets.api_keys_file_mounted,
        "loadedSecrets": {
            "weatherApiKey": presence_label(&secrets.weather_api_key),
            "paymentApiKey": presence_label(&secrets.payment_api_key),
            "encryptionKey": presence_label(&secrets.encryption_key),
            "smtpPassword": presence_label(&secrets.smtp_password)
        },
        "secretValues": {
            "weatherApiKeyLength": key_length(&secrets.weather_api_key),
            "paymentApiKeyLength": key_length(&secrets.payment_api_key),
            "encryptionKeyLength": key_length(&secrets.encryption_key),
            "smtpPasswordLength": key_length(&secrets.smtp_password)
        }
    });
    http::json_response(StatusCode::OK, &body, state.config.http.enable_cors)
}

/// Login request body; missing fields become empty strings, which can
/// never match a credential record.
#[derive(Deserialize)]
struct LoginRequest {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

/// `POST /api/login` - exact-match check against the credential store
///
/// Body read or parse failures propagate to the router's catch-all
/// responder.
pub async fn login<B>(req: Request<B>, state: &AppState) -> Result<Response<Full<Bytes>>, String>
where
    B: hyper::body::Body,
    B::Error: std::fmt::Display,
{
    let whole_body = req
        .collect()
        .await
        .map_err(|e| format!("Failed to read login request body: {e}"))?
        .to_bytes();

    let login_req: LoginRequest = serde_json::from_slice(&whole_body)
        .map_err(|e| format!("Invalid login payload: {e}"))?;

    logger::log_login_attempt(&login_req.username);
    let enable_cors = state.config.http.enable_cors;

    match state
        .credentials
        .verify(&login_req.username, &login_req.password)
    {
        Some(user) => {
            logger::log_login_success(&user.username);
            let body = serde_json::json!({
                "success": true,
                "message": format!("Welcome to NIMC Official Portal, {}!", user.role),
                "user": {
                    "username": user.username,
                    "role": user.role,
                    "loginTime": Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
                },
                "security": "All API keys are securely stored in Kubernetes Secrets"
            });
            Ok(http::json_response(StatusCode::OK, &body, enable_cors))
        }
        None => {
            logger::log_login_failure(&login_req.username);
            let body = serde_json::json!({
                "success": false,
                "error": "Invalid NIMC credentials"
            });
            Ok(http::json_response(
                StatusCode::UNAUTHORIZED,
                &body,
                enable_cors,
            ))
        }
    }
}

/// `GET /api/test-apis` - presence check per external service, no
/// outbound calls
pub fn test_apis(state: &AppState) -> Response<Full<Bytes>> {
    let secrets = &state.secrets;
    let body = serde_json::json!({
        "message": "NIMC External API Status",
        "apis": {
            "weatherService": configured_label(&secrets.weather_api_key),
            "paymentGateway": configured_label(&secrets.payment_api_key),
            "encryptionService": configured_label(&secrets.encryption_key),
            "emailService": configured_label(&secrets.smtp_password)
        },
        "note": "All API keys are securely stored in Kubernetes Secrets, not in code!"
    });
    http::json_response(StatusCode::OK, &body, state.config.http.enable_cors)
}

/// RFC 3339 UTC timestamp with millisecond precision
fn timestamp_utc() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn presence_label(value: &Option<String>) -> &'static str {
    if value.is_some() {
        "Loaded"
    } else {
        "Missing"
    }
}

fn configured_label(value: &Option<String>) -> &'static str {
    if value.is_some() {
        "Configured"
    } else {
        "Not configured"
    }
}

fn key_length(value: &Option<String>) -> usize {
    value.as_deref().map_or(0, str::len)
}
