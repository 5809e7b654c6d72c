use super::errors::UserError;

/// Service port for turning a plain password into its stored form.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, UserError>;
}
