use serde::{Deserialize, Serialize};

use super::errors::UserError;

/// Storage-assigned user identifier. Always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(i64);

impl UserId {
    /// The first identifier a fresh table hands out.
    pub const FIRST: UserId = UserId(1);

    /// Wraps an identifier coming from storage or a trusted caller.
    pub fn new(id: i64) -> Result<Self, UserError> {
        if id <= 0 {
            return Err(UserError::InvalidId);
        }
        Ok(Self(id))
    }

    /// Parses a path segment. Only plain decimal digits are accepted, so signs,
    /// whitespace and trailing garbage are all rejected before storage is touched.
    pub fn parse(raw: &str) -> Result<Self, UserError> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(UserError::InvalidId);
        }
        let id = raw.parse::<i64>().map_err(|_| UserError::InvalidId)?;
        Self::new(id)
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
