use http::Method;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

pub const DEFAULT_CORS_ORIGINS: &str =
    "http://localhost,https://localhost,http://127.0.0.1,https://127.0.0.1";

/// Build the CORS layer for the item routes.
///
/// An origin is allowed when its scheme and host equal one of `cors_origins`.
/// An entry without a port admits any port on that host; a `"*"` entry allows
/// every origin.
pub fn build_cors_layer(cors_origins: Vec<String>) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    if cors_origins.iter().any(|o| o == "*") {
        return layer.allow_origin(Any);
    }

    layer.allow_origin(AllowOrigin::predicate(move |origin, _| {
        origin
            .to_str()
            .is_ok_and(|origin| is_allowed(&cors_origins, origin))
    }))
}

/// Normalize a comma-separated origin list: trimmed, blanks dropped.
#[must_use]
pub fn parse_origins(raw: &[String]) -> Vec<String> {
    raw.iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn is_allowed(cors_origins: &[String], origin: &str) -> bool {
    cors_origins.iter().any(|allowed| {
        let allowed = allowed.trim_end_matches('/');
        match origin.strip_prefix(allowed) {
            Some("") => true,
            Some(rest) => rest
                .strip_prefix(':')
                .is_some_and(|port| !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit())),
            None => false,
        }
    })
}
