use std::borrow::Cow;

use chrono::{DateTime, Utc};
use poem_openapi::Object;
use poem_openapi::registry::MetaSchemaRef;
use poem_openapi::types::{ParseError, ParseFromJSON, ParseResult, ToJSON, Type};
use serde_json::Value;

use business::domain::user::model::User;
use business::domain::user::use_cases::create::CreateUserParams;

/// JSON string field. Numbers and booleans are rejected instead of being
/// converted to text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrictString(pub String);

impl Type for StrictString {
    const IS_REQUIRED: bool = true;

    type RawValueType = String;

    type RawElementValueType = String;

    fn name() -> Cow<'static, str> {
        String::name()
    }

    fn schema_ref() -> MetaSchemaRef {
        String::schema_ref()
    }

    fn as_raw_value(&self) -> Option<&Self::RawValueType> {
        Some(&self.0)
    }

    fn raw_element_iter<'a>(
        &'a self,
    ) -> Box<dyn Iterator<Item = &'a Self::RawElementValueType> + 'a> {
        Box::new(self.as_raw_value().into_iter())
    }
}

impl ParseFromJSON for StrictString {
    fn parse_from_json(value: Option<Value>) -> ParseResult<Self> {
        match value.unwrap_or_default() {
            Value::String(text) => Ok(StrictString(text)),
            other => Err(ParseError::expected_type(other)),
        }
    }
}

impl ToJSON for StrictString {
    fn to_json(&self) -> Option<Value> {
        Some(Value::String(self.0.clone()))
    }
}

/// Registration payload.
///
/// Fields are nullable at the wire level so that missing fields are reported
/// per field by validation instead of failing body parsing.
#[derive(Debug, Clone, Object)]
pub struct CreateUserRequest {
    /// Identification document, 5 to 20 characters (required)
    pub id_document: Option<StrictString>,
    /// Username, 3 to 50 characters (required)
    pub username: Option<StrictString>,
    /// Email address (required)
    pub email: Option<StrictString>,
    /// Password, at least 6 characters (required, never returned)
    #[oai(write_only)]
    pub password: Option<StrictString>,
}

impl From<CreateUserRequest> for CreateUserParams {
    fn from(request: CreateUserRequest) -> Self {
        Self {
            id_document: request.id_document.map(|value| value.0),
            username: request.username.map(|value| value.0),
            email: request.email.map(|value| value.0),
            password: request.password.map(|value| value.0),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct UserResponse {
    /// User unique identifier
    pub id: i64,
    /// Identification document
    pub id_document: String,
    /// Username
    pub username: String,
    /// Email address
    pub email: String,
    /// Creation timestamp
    #[oai(skip_serializing_if_is_none)]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.value(),
            id_document: user.id_document,
            username: user.username,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn should_accept_only_json_strings() {
        assert_eq!(
            StrictString::parse_from_json(Some(json!("12345"))).ok(),
            Some(StrictString("12345".to_string()))
        );
        for value in [json!(12345), json!(true), json!(["a"]), json!({"a": "b"})] {
            assert!(StrictString::parse_from_json(Some(value)).is_err());
        }
    }

    #[test]
    fn should_treat_null_and_absent_fields_as_missing() {
        let request =
            CreateUserRequest::parse_from_json(Some(json!({"id_document": null}))).unwrap();
        assert!(request.id_document.is_none());
        assert!(request.username.is_none());
    }
}
