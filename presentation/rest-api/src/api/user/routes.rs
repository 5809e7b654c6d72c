use std::sync::Arc;

use poem_openapi::{ApiResponse, OpenApi, param::Path, payload::Json};

use business::domain::user::use_cases::create::CreateUserUseCase;
use business::domain::user::use_cases::delete::{DeleteUserParams, DeleteUserUseCase};
use business::domain::user::use_cases::get_all::GetAllUsersUseCase;
use business::domain::user::use_cases::get_by_id::{GetUserByIdParams, GetUserByIdUseCase};
use business::domain::user::value_objects::UserId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;
use crate::api::user::dto::{CreateUserRequest, UserResponse};

pub struct UserApi {
    create_use_case: Arc<dyn CreateUserUseCase>,
    get_all_use_case: Arc<dyn GetAllUsersUseCase>,
    get_by_id_use_case: Arc<dyn GetUserByIdUseCase>,
    delete_use_case: Arc<dyn DeleteUserUseCase>,
}

impl UserApi {
    pub fn new(
        create_use_case: Arc<dyn CreateUserUseCase>,
        get_all_use_case: Arc<dyn GetAllUsersUseCase>,
        get_by_id_use_case: Arc<dyn GetUserByIdUseCase>,
        delete_use_case: Arc<dyn DeleteUserUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            delete_use_case,
        }
    }
}

/// User management API
///
/// Endpoints for registering, listing, reading, and deleting users.
#[OpenApi]
impl UserApi {
    /// List all users
    ///
    /// Returns every stored user, oldest first. Without a database outside
    /// production, a single placeholder user is returned.
    #[oai(path = "/api/users", method = "get", tag = "ApiTags::Users")]
    async fn get_all_users(&self) -> GetAllUsersResponse {
        match self.get_all_use_case.execute().await {
            Ok(users) => {
                let responses: Vec<UserResponse> = users.into_iter().map(|u| u.into()).collect();
                GetAllUsersResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    503 => GetAllUsersResponse::ServiceUnavailable(json),
                    _ => GetAllUsersResponse::InternalError(json),
                }
            }
        }
    }

    /// Register a new user
    ///
    /// Validates the payload, stores the user with a hashed password, and
    /// returns it. The password is never echoed back.
    #[oai(path = "/api/users", method = "post", tag = "ApiTags::Users")]
    async fn create_user(&self, body: Json<CreateUserRequest>) -> CreateUserResponse {
        match self.create_use_case.execute(body.0.into()).await {
            Ok(user) => CreateUserResponse::Created(Json(user.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateUserResponse::BadRequest(json),
                    503 => CreateUserResponse::ServiceUnavailable(json),
                    _ => CreateUserResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a user by ID
    ///
    /// The ID must be a positive integer.
    #[oai(path = "/api/users/:id", method = "get", tag = "ApiTags::Users")]
    async fn get_user_by_id(&self, id: Path<String>) -> GetUserByIdResponse {
        let id = match UserId::parse(&id.0) {
            Ok(id) => id,
            Err(err) => return GetUserByIdResponse::BadRequest(err.into_error_response().1),
        };

        match self
            .get_by_id_use_case
            .execute(GetUserByIdParams { id })
            .await
        {
            Ok(user) => GetUserByIdResponse::Ok(Json(user.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => GetUserByIdResponse::BadRequest(json),
                    404 => GetUserByIdResponse::NotFound(json),
                    503 => GetUserByIdResponse::ServiceUnavailable(json),
                    _ => GetUserByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a user
    ///
    /// Permanently removes a user. Responds with an empty body on success.
    #[oai(path = "/api/users/:id", method = "delete", tag = "ApiTags::Users")]
    async fn delete_user(&self, id: Path<String>) -> DeleteUserResponse {
        let id = match UserId::parse(&id.0) {
            Ok(id) => id,
            Err(err) => return DeleteUserResponse::BadRequest(err.into_error_response().1),
        };

        match self.delete_use_case.execute(DeleteUserParams { id }).await {
            Ok(()) => DeleteUserResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => DeleteUserResponse::BadRequest(json),
                    404 => DeleteUserResponse::NotFound(json),
                    503 => DeleteUserResponse::ServiceUnavailable(json),
                    _ => DeleteUserResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(ApiResponse)]
enum GetAllUsersResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<UserResponse>>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
enum CreateUserResponse {
    #[oai(status = 201)]
    Created(Json<UserResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
enum GetUserByIdResponse {
    #[oai(status = 200)]
    Ok(Json<UserResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
enum DeleteUserResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use business::domain::environment::Environment;
    use business::domain::health::model::StorageStatus;
    use persistence::connection::ConnectionManager;
    use persistence::user::repository::UserRepositoryPostgres;
    use poem::http::StatusCode;
    use poem::test::TestClient;
    use serde_json::{Value, json};

    use crate::setup::test_support::{self, InMemoryUserRepository, StaticProbe};

    fn client() -> TestClient<impl poem::Endpoint> {
        let container = test_support::container(
            InMemoryUserRepository::shared(),
            StaticProbe::new(StorageStatus::Reachable),
            Environment::Test,
        );
        TestClient::new(test_support::app(container))
    }

    fn registration() -> Value {
        json!({
            "id_document": "123456789",
            "username": "John Test",
            "email": "john.test@example.com",
            "password": "A-Strong-P4sswOrd"
        })
    }

    async fn create(cli: &TestClient<impl poem::Endpoint>, body: Value) -> (StatusCode, Value) {
        let resp = cli.post("/api/users").body_json(&body).send().await;
        test_support::read_json(resp).await
    }

    #[tokio::test]
    async fn should_create_user_without_echoing_password() {
        let cli = client();

        let (status, body) = create(&cli, registration()).await;

        assert_eq!(status, StatusCode::CREATED);
        assert!(body["id"].as_i64().unwrap() > 0);
        assert_eq!(body["username"], "John Test");
        assert_eq!(body["email"], "john.test@example.com");
        assert!(body.get("password").is_none());
        assert!(body.get("password_hash").is_none());
    }

    #[tokio::test]
    async fn should_read_back_created_user() {
        let cli = client();
        let (_, created) = create(&cli, registration()).await;
        let id = created["id"].as_i64().unwrap();

        let (status, fetched) =
            test_support::read_json(cli.get(format!("/api/users/{id}")).send().await).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);

        let (status, listed) =
            test_support::read_json(cli.get("/api/users").send().await).await;
        assert_eq!(status, StatusCode::OK);
        assert!(listed.as_array().unwrap().contains(&created));
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_id() {
        let cli = client();

        let (status, body) =
            test_support::read_json(cli.get("/api/users/999999").send().await).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"status": "error", "error": "not_found"}));

        let resp = cli.delete("/api/users/999999").send().await;
        resp.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_delete_user_with_empty_body() {
        let cli = client();
        let (_, created) = create(&cli, registration()).await;
        let id = created["id"].as_i64().unwrap();

        let resp = cli.delete(format!("/api/users/{id}")).send().await;
        resp.assert_status(StatusCode::NO_CONTENT);
        resp.assert_text("").await;

        let resp = cli.get(format!("/api/users/{id}")).send().await;
        resp.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_reject_invalid_email_with_field_details() {
        let cli = client();
        let mut body = registration();
        body["email"] = json!("not-an-email");

        let (status, body) = create(&cli, body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "error");
        assert_eq!(body["error"], "invalid_request");
        assert_eq!(body["details"][0]["field"], "email");
        assert!(
            body["details"][0]["message"]
                .as_str()
                .unwrap()
                .contains("email")
        );
    }

    #[tokio::test]
    async fn should_reject_short_password() {
        let cli = client();
        let mut body = registration();
        body["password"] = json!("short");

        let (status, body) = create(&cli, body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["details"][0]["field"], "password");
    }

    #[tokio::test]
    async fn should_reject_missing_field_without_storing() {
        let repository = InMemoryUserRepository::shared();
        let container = test_support::container(
            repository.clone(),
            StaticProbe::new(StorageStatus::Reachable),
            Environment::Test,
        );
        let cli = TestClient::new(test_support::app(container));
        let mut body = registration();
        body.as_object_mut().unwrap().remove("id_document");

        let (status, body) = create(&cli, body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["details"][0]["message"], "id_document is required");
        assert_eq!(repository.count(), 0);
    }

    #[tokio::test]
    async fn should_reject_non_positive_or_non_numeric_ids() {
        let cli = client();

        for path in ["/api/users/0", "/api/users/-4", "/api/users/abc", "/api/users/1.5"] {
            let (status, body) = test_support::read_json(cli.get(path).send().await).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{path}");
            assert_eq!(body["error"], "invalid_id", "{path}");

            let resp = cli.delete(path).send().await;
            resp.assert_status(StatusCode::BAD_REQUEST);
        }
    }

    #[tokio::test]
    async fn should_report_malformed_json_body() {
        let cli = client();

        let resp = cli
            .post("/api/users")
            .content_type("application/json")
            .body("{\"username\": ")
            .send()
            .await;
        let (status, body) = test_support::read_json(resp).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({
                "status": "error",
                "error": "malformed_body",
                "details": [{"field": "body", "message": "Invalid format"}]
            })
        );
    }

    #[tokio::test]
    async fn should_reject_non_string_fields_as_malformed() {
        let repository = InMemoryUserRepository::shared();
        let container = test_support::container(
            repository.clone(),
            StaticProbe::new(StorageStatus::Reachable),
            Environment::Test,
        );
        let cli = TestClient::new(test_support::app(container));

        for (field, value) in [("id_document", json!(12345)), ("password", json!(123456))] {
            let mut body = registration();
            body[field] = value;

            let (status, body) = create(&cli, body).await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "{field}");
            assert_eq!(body["error"], "malformed_body", "{field}");
        }
        assert_eq!(repository.count(), 0);
    }

    #[tokio::test]
    async fn should_report_null_field_through_validation() {
        let cli = client();
        let mut body = registration();
        body["username"] = Value::Null;

        let (status, body) = create(&cli, body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "invalid_request");
        assert_eq!(body["details"][0]["message"], "username is required");
    }

    #[tokio::test]
    async fn should_treat_trailing_slash_like_bare_path() {
        let cli = client();
        create(&cli, registration()).await;

        let bare = test_support::read_json(cli.get("/api/users").send().await).await;
        let slashed = test_support::read_json(cli.get("/api/users/").send().await).await;
        assert_eq!(bare, slashed);

        let (status, body) = test_support::read_json(cli.get("/api/users/0/").send().await).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "invalid_id");
    }

    fn storage_less_client(environment: Environment) -> TestClient<impl poem::Endpoint> {
        let connections = Arc::new(ConnectionManager::new());
        connections.initialize(None).unwrap();
        let container = test_support::container(
            Arc::new(UserRepositoryPostgres::new(connections, environment)),
            StaticProbe::new(StorageStatus::Disabled),
            environment,
        );
        TestClient::new(test_support::app(container))
    }

    #[tokio::test]
    async fn should_serve_placeholder_without_database_in_development() {
        let cli = storage_less_client(Environment::Development);

        let (status, body) = test_support::read_json(cli.get("/api/users").send().await).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([{
                "id": 1,
                "id_document": "123456789",
                "username": "testuser",
                "email": "testuser@example.com"
            }])
        );
    }

    #[tokio::test]
    async fn should_refuse_without_database_in_production() {
        let cli = storage_less_client(Environment::Production);

        let (status, body) = test_support::read_json(cli.get("/api/users").send().await).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            body,
            json!({"status": "error", "error": "database_not_configured"})
        );

        let (status, _) = create(&cli, registration()).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn should_serve_banner_at_root() {
        let cli = client();

        let (status, body) = test_support::read_json(cli.get("/").send().await).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "NOVACORE API V1 ONLINE"}));
    }
}
