// ============================================================================
// CONSTANTS - compile-time configuration
// ============================================================================

/// Backend base URL.
/// Configured at compile time:
/// - Development: http://localhost:8000 (default)
/// - Production: via BACKEND_URL env var (see build.rs / .env)
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};

/// localStorage key holding the JWT issued at login.
pub const AUTH_TOKEN_KEY: &str = "authToken";

/// GraphQL endpoint.
pub fn graphql_url() -> String {
    format!("{}/graphql/", BACKEND_URL)
}

/// Base URL for trail images.
pub fn media_url(image: &str) -> String {
    format!("{}/media/{}", BACKEND_URL, image)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_url_appends_image_path() {
        assert!(media_url("overlook.jpg").ends_with("/media/overlook.jpg"));
    }
}
