use once_cell::sync::Lazy;
use regex::Regex;

use super::model::UserRegistration;

// Local part, then one or more dot-separated labels and an alphabetic TLD.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@(?:[A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// A single declarative check applied to a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    Required,
    /// Minimum length in characters.
    MinLength(usize),
    /// Maximum length in characters.
    MaxLength(usize),
    Email,
}

/// One field failing one constraint, reported back to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// The constraints a named field must satisfy, checked in order.
#[derive(Debug)]
pub struct FieldRule {
    pub field: &'static str,
    pub constraints: &'static [Constraint],
}

pub const ID_DOCUMENT: FieldRule = FieldRule {
    field: "id_document",
    constraints: &[
        Constraint::Required,
        Constraint::MinLength(5),
        Constraint::MaxLength(20),
    ],
};

pub const USERNAME: FieldRule = FieldRule {
    field: "username",
    constraints: &[
        Constraint::Required,
        Constraint::MinLength(3),
        Constraint::MaxLength(50),
    ],
};

pub const EMAIL: FieldRule = FieldRule {
    field: "email",
    constraints: &[Constraint::Required, Constraint::Email],
};

pub const PASSWORD: FieldRule = FieldRule {
    field: "password",
    constraints: &[Constraint::Required, Constraint::MinLength(6)],
};

impl Constraint {
    fn check(self, field: &str, value: Option<&str>) -> Result<(), String> {
        match (self, value) {
            (Constraint::Required, None) => Err(format!("{field} is required")),
            (Constraint::Required, Some(_)) => Ok(()),
            // Absence is reported by `Required` alone.
            (_, None) => Ok(()),
            (Constraint::MinLength(min), Some(v)) if v.chars().count() < min => Err(format!(
                "{field} must be at least {min} characters"
            )),
            (Constraint::MaxLength(max), Some(v)) if v.chars().count() > max => Err(format!(
                "{field} must be at most {max} characters"
            )),
            (Constraint::Email, Some(v)) if !is_email(v) => {
                Err(format!("{field} must be a valid email address"))
            }
            _ => Ok(()),
        }
    }
}

fn is_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_PATTERN.is_match(value)
}

impl FieldRule {
    /// Returns the first failing constraint for `value`, if any.
    pub fn evaluate(&self, value: Option<&str>) -> Option<FieldError> {
        self.constraints
            .iter()
            .find_map(|c| c.check(self.field, value).err())
            .map(|message| FieldError {
                field: self.field.to_string(),
                message,
            })
    }

    /// Keeps `value` only when it satisfies the rule, recording the failure otherwise.
    fn apply(&self, value: Option<String>, errors: &mut Vec<FieldError>) -> Option<String> {
        match self.evaluate(value.as_deref()) {
            Some(error) => {
                errors.push(error);
                None
            }
            None => value,
        }
    }
}

/// Validates a raw registration payload field by field.
///
/// Every failing field is reported, in declaration order.
pub fn validate_registration(
    id_document: Option<String>,
    username: Option<String>,
    email: Option<String>,
    password: Option<String>,
) -> Result<UserRegistration, Vec<FieldError>> {
    let mut errors = Vec::new();
    let id_document = ID_DOCUMENT.apply(id_document, &mut errors);
    let username = USERNAME.apply(username, &mut errors);
    let email = EMAIL.apply(email, &mut errors);
    let password = PASSWORD.apply(password, &mut errors);

    match (id_document, username, email, password) {
        (Some(id_document), Some(username), Some(email), Some(password)) if errors.is_empty() => {
            Ok(UserRegistration {
                id_document,
                username,
                email,
                password,
            })
        }
        _ => Err(errors),
    }
}
