use poem::middleware::Cors;

/// Initialize CORS middleware for cross-origin requests
///
/// `origins` comes from CORS_ALLOWED_ORIGINS (comma-separated). When empty,
/// any origin is allowed.
pub fn init_cors(origins: &[String]) -> Cors {
    let cors = Cors::new()
        .allow_methods(vec!["GET", "POST", "DELETE", "OPTIONS"])
        .allow_headers(vec!["content-type", "authorization"]);

    if origins.is_empty() {
        return cors;
    }
    let origins: Vec<&str> = origins.iter().map(String::as_str).collect();
    cors.allow_origins(origins)
}

/// Split a comma-separated origin list, dropping blanks.
pub fn parse_origins(raw: Option<String>) -> Vec<String> {
    raw.map(|raw| {
        raw.split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}
