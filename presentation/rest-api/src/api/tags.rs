use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    /// Service banner
    Service,
    /// Liveness and storage checks
    Health,
    /// User management
    Users,
}
