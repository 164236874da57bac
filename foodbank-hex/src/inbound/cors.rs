//! CORS layer construction.

use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use foodbank_config::CorsSettings;

/// Builds the CORS layer for API routes.
///
/// Restrictive mode answers only origins that exactly match an entry of
/// `allowed_origins`; permissive mode answers `*`. Credentials are never
/// allowed.
pub fn cors_layer(settings: &CorsSettings) -> CorsLayer {
    let allow_origin = if settings.is_restrictive() {
        let allowed: Vec<HeaderValue> = settings
            .allowed_origins
            .iter()
            .filter_map(|origin| parse_origin(origin))
            .collect();
        tracing::info!("CORS restricted to {} origin(s)", allowed.len());
        AllowOrigin::list(allowed)
    } else {
        tracing::info!("CORS open to all origins");
        AllowOrigin::any()
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

fn parse_origin(origin: &str) -> Option<HeaderValue> {
    // `AllowOrigin::list` rejects the wildcard outright.
    if origin == "*" {
        tracing::warn!("Ignoring wildcard entry in restricted CORS origins");
        return None;
    }

    match HeaderValue::from_str(origin) {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Ignoring invalid CORS origin {:?}", origin);
            None
        }
    }
}
