use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        health::livez,
        users::{create_user, delete_user, get_user, list_users, update_user},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    let user_routes = Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{uuid}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .layer(cors);

    Router::new()
        .route("/livez", get(livez))
        .merge(user_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use axum::{
        body::Body,
        http::{Request, Response, StatusCode},
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use userstore_core::storage::RepositoryError;

    use crate::storage::inmemory::InMemoryRepository;

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn body_json(response: Response<Body>) -> Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    async fn create(app: &Router, name: &str, email: &str) -> Value {
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/users",
                json!({"name": name, "email": email}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        body_json(response).await
    }

    #[tokio::test]
    async fn test_livez() {
        let app = create_app(AppState::default());

        let response = app.oneshot(empty_request("GET", "/livez")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_users_empty() {
        let app = create_app(AppState::default());

        let response = app.oneshot(empty_request("GET", "/users")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!([]));
    }

    #[tokio::test]
    async fn test_create_get_delete_scenario() {
        let app = create_app(AppState::default());

        let created = create(&app, "John Doe", "john@example.com").await;
        assert_eq!(created["message"], "User created successfully");
        assert_eq!(created["user"]["name"], "John Doe");
        assert!(created["user"].get("password").is_none());

        let uuid = created["user"]["uuid"].as_str().unwrap().to_string();
        assert!(uuid::Uuid::parse_str(&uuid).is_ok());

        let response = app
            .clone()
            .oneshot(empty_request("GET", &format!("/users/{uuid}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, created["user"]);

        let response = app
            .clone()
            .oneshot(empty_request("DELETE", &format!("/users/{uuid}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"message": "User deleted successfully"})
        );

        let response = app
            .oneshot(empty_request("GET", &format!("/users/{uuid}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({"message": "User not found"}));
    }

    #[tokio::test]
    async fn test_create_assigns_distinct_uuids() {
        let app = create_app(AppState::default());

        let first = create(&app, "A", "a@example.com").await;
        let second = create(&app, "B", "b@example.com").await;

        assert_ne!(first["user"]["uuid"], second["user"]["uuid"]);
    }

    #[tokio::test]
    async fn test_create_invalid_email_writes_nothing() {
        let app = create_app(AppState::default());

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/users",
                json!({"name": "John", "email": "not-an-email"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body["message"], "The given data was invalid.");
        assert_eq!(
            body["errors"]["email"],
            json!(["The email field must be a valid email address."])
        );

        let response = app.oneshot(empty_request("GET", "/users")).await.unwrap();
        assert_eq!(body_json(response).await, json!([]));
    }

    #[tokio::test]
    async fn test_create_missing_email() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(json_request("POST", "/users", json!({"name": "John"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body["errors"]["email"], json!(["The email field is required."]));
    }

    #[tokio::test]
    async fn test_create_malformed_json() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/users")
                    .header("Content-Type", "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_json(response).await["message"].is_string());
    }

    #[tokio::test]
    async fn test_update_name_only_keeps_email() {
        let app = create_app(AppState::default());
        let created = create(&app, "John", "john@example.com").await;
        let uuid = created["user"]["uuid"].as_str().unwrap();

        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                &format!("/users/{uuid}"),
                json!({"name": "Johnny"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["message"], "User updated successfully");
        assert_eq!(body["user"]["name"], "Johnny");
        assert_eq!(body["user"]["email"], "john@example.com");
        assert_eq!(body["user"]["uuid"], uuid);
    }

    #[tokio::test]
    async fn test_update_empty_body_returns_stored_user() {
        let app = create_app(AppState::default());
        let created = create(&app, "John", "john@example.com").await;
        let uuid = created["user"]["uuid"].as_str().unwrap();

        let response = app
            .oneshot(json_request("PUT", &format!("/users/{uuid}"), json!({})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["user"], created["user"]);
    }

    #[tokio::test]
    async fn test_update_invalid_email() {
        let app = create_app(AppState::default());
        let created = create(&app, "John", "john@example.com").await;
        let uuid = created["user"]["uuid"].as_str().unwrap();

        let response = app
            .oneshot(json_request(
                "PUT",
                &format!("/users/{uuid}"),
                json!({"email": "nope"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_create_wrong_type_fields_are_validation_errors() {
        let app = create_app(AppState::default());

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/users",
                json!({"name": 42, "email": "a@b.com"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body_json(response).await,
            json!({
                "message": "The given data was invalid.",
                "errors": {"name": ["The name field must be a string."]}
            })
        );

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/users",
                json!({"name": "x", "email": 123}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body_json(response).await["errors"]["email"],
            json!(["The email field must be a string."])
        );

        let listed = app.oneshot(empty_request("GET", "/users")).await.unwrap();
        assert_eq!(body_json(listed).await, json!([]));
    }

    #[tokio::test]
    async fn test_update_wrong_type_email_is_validation_error() {
        let app = create_app(AppState::default());
        let created = create(&app, "John", "john@example.com").await;
        let uuid = created["user"]["uuid"].as_str().unwrap();

        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                &format!("/users/{uuid}"),
                json!({"email": 1}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body_json(response).await["errors"]["email"],
            json!(["The email field must be a string."])
        );

        let stored = app
            .oneshot(empty_request("GET", &format!("/users/{uuid}")))
            .await
            .unwrap();
        assert_eq!(body_json(stored).await["email"], "john@example.com");
    }

    #[tokio::test]
    async fn test_string_body_is_bad_request() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(json_request("POST", "/users", json!("John")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_unknown_uuid_with_invalid_payload_is_not_found() {
        let app = create_app(AppState::default());
        let uri = format!("/users/{}", uuid::Uuid::new_v4());

        let response = app
            .oneshot(json_request("PUT", &uri, json!({"email": "nope"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({"message": "User not found"}));
    }

    #[tokio::test]
    async fn test_unknown_uuid_is_not_found() {
        let app = create_app(AppState::default());
        let uri = format!("/users/{}", uuid::Uuid::new_v4());

        for request in [
            empty_request("GET", &uri),
            empty_request("DELETE", &uri),
            json_request("PUT", &uri, json!({"name": "X"})),
        ] {
            let response = app.clone().oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::NOT_FOUND);
        }
    }

    #[tokio::test]
    async fn test_non_uuid_path_is_not_found() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(empty_request("GET", "/users/not-a-uuid"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({"message": "User not found"}));
    }

    #[tokio::test]
    async fn test_store_failure_surfaces_message() {
        let repository = InMemoryRepository::failing(RepositoryError::Store(
            "Cannot do operations on a non-existent table".to_string(),
        ));
        let app = create_app(AppState::new(Arc::new(repository)));

        let response = app.oneshot(empty_request("GET", "/users")).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({"message": "Cannot do operations on a non-existent table"})
        );
    }

    #[tokio::test]
    async fn test_connection_failure_is_unavailable() {
        let repository =
            InMemoryRepository::failing(RepositoryError::ConnectionFailed("refused".to_string()));
        let app = create_app(AppState::new(Arc::new(repository)));

        let response = app
            .oneshot(json_request(
                "POST",
                "/users",
                json!({"name": "John", "email": "john@example.com"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
