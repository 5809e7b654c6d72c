use argon2::Argon2;
use argon2::password_hash::{PasswordHasher as _, SaltString};
use rand_core::OsRng;

use business::domain::user::errors::UserError;
use business::domain::user::services::PasswordHasher;

/// Argon2id hashing with the crate's default parameters and a random salt.
///
/// The output is a PHC string (`$argon2id$v=19$...`) that embeds the salt and
/// parameters, so it is all storage needs to keep.
#[derive(Default)]
pub struct Argon2PasswordHasher {
    argon2: Argon2<'static>,
}

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, password: &str) -> Result<String, UserError> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| {
                tracing::error!(error = %e, "password hashing failed");
                UserError::PasswordHash
            })
    }
}
