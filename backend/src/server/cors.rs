//! Cross-origin resource sharing policy for the HTTP API.
//!
//! With no configured origins every origin, method and header is accepted
//! and credentials are allowed. A configured list restricts origins to that
//! list while still accepting any method and header.

use actix_cors::Cors;
use actix_web::http::Uri;
use tracing::warn;

/// Build the CORS middleware for `origins`.
///
/// Entries that are not absolute `scheme://host[:port]` origins are skipped
/// with a warning. If every entry is skipped the policy falls back to
/// permissive.
pub(crate) fn cors_layer(origins: &[String]) -> Cors {
    let allowed: Vec<&str> = origins
        .iter()
        .map(String::as_str)
        .filter(|origin| {
            let valid = is_origin(origin);
            if !valid {
                warn!(%origin, "ignoring invalid CORS origin");
            }
            valid
        })
        .collect();

    if allowed.is_empty() {
        return Cors::permissive();
    }

    allowed
        .into_iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
        .max_age(3600)
}

fn is_origin(origin: &str) -> bool {
    origin
        .parse::<Uri>()
        .is_ok_and(|uri| uri.scheme().is_some() && uri.host().is_some())
}
