use std::sync::Arc;

use actix_web::{http::StatusCode, test, web};
use bands_api::app::create_app;
use bands_api::dto::{LoginResponse, UserResponse};
use bands_api::routes::user::AppState;
use bands_core::repositories::{InMemorySessionRepository, InMemoryUserRepository};
use bands_core::services::auth::{AuthService, AuthServiceConfig};
use serde_json::{json, Value};

#[cfg(test)]
mod tests {
    use super::*;

    type TestState = AppState<InMemoryUserRepository, InMemorySessionRepository>;

    /// Helper function to create test application state
    fn create_test_app_state() -> web::Data<TestState> {
        let auth_service = Arc::new(AuthService::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemorySessionRepository::new()),
            AuthServiceConfig::for_tests(),
        ));
        web::Data::new(AppState::new(auth_service))
    }

    fn paolo() -> Value {
        json!({ "name": "Paolo", "email": "paolo@paolo.com", "password": "123456" })
    }

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(create_app(create_test_app_state())).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
    }

    #[actix_web::test]
    async fn test_register_returns_created_without_secret() {
        let app = test::init_service(create_app(create_test_app_state())).await;

        let req = test::TestRequest::post()
            .uri("/api/user")
            .set_json(paolo())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        let object = body.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert_eq!(body["name"], "Paolo");
        assert_eq!(body["email"], "paolo@paolo.com");
        assert!(body["id"].as_str().is_some());
        assert!(!body.to_string().contains("123456"));
    }

    #[actix_web::test]
    async fn test_register_duplicate_is_conflict() {
        let app = test::init_service(create_app(create_test_app_state())).await;

        let req = test::TestRequest::post().uri("/api/user").set_json(paolo()).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

        let req = test::TestRequest::post().uri("/api/user").set_json(paolo()).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "email_already_taken");
        assert!(body["timestamp"].is_string());
    }

    #[actix_web::test]
    async fn test_register_invalid_data() {
        let app = test::init_service(create_app(create_test_app_state())).await;

        let cases = vec![
            json!({ "name": "", "email": "paolo@paolo.com", "password": "123456" }),
            json!({ "name": "Paolo", "email": "nope", "password": "123456" }),
            json!({ "name": "Paolo", "email": "paolo@paolo.com", "password": "123" }),
            json!({ "name": "Paolo", "password": "123456" }),
        ];

        for case in cases {
            let req = test::TestRequest::post().uri("/api/user").set_json(&case).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "case: {}", case);

            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["error"], "invalid_data");
        }
    }

    #[actix_web::test]
    async fn test_malformed_json_is_bad_request() {
        let app = test::init_service(create_app(create_test_app_state())).await;

        let req = test::TestRequest::post()
            .uri("/api/user")
            .insert_header(("content-type", "application/json"))
            .set_payload("{ not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "invalid_data");
        assert!(body["message"].as_str().unwrap().starts_with("Malformed request:"));
    }

    #[actix_web::test]
    async fn test_login_and_me_flow() {
        let app = test::init_service(create_app(create_test_app_state())).await;

        let req = test::TestRequest::post().uri("/api/user").set_json(paolo()).to_request();
        let registered: UserResponse = test::call_and_read_body_json(&app, req).await;

        let req = test::TestRequest::post()
            .uri("/api/user/login")
            .set_json(json!({ "email": "paolo@paolo.com", "password": "123456" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let login: LoginResponse = test::read_body_json(resp).await;
        assert_eq!(login.email, "paolo@paolo.com");
        assert!(!login.token.is_empty());

        let req = test::TestRequest::get()
            .uri(&format!("/api/user/me?token={}", login.token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let me: UserResponse = test::read_body_json(resp).await;
        assert_eq!(me, registered);

        let req = test::TestRequest::get()
            .uri("/api/user/me")
            .insert_header(("Authorization", format!("Bearer {}", login.token)))
            .to_request();
        let me: UserResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(me.id, registered.id);
    }

    #[actix_web::test]
    async fn test_login_wrong_password_is_forbidden() {
        let app = test::init_service(create_app(create_test_app_state())).await;

        let req = test::TestRequest::post().uri("/api/user").set_json(paolo()).to_request();
        test::call_service(&app, req).await;

        for body in [
            json!({ "email": "paolo@paolo.com", "password": "12345asd" }),
            json!({ "email": "nobody@paolo.com", "password": "123456" }),
        ] {
            let req = test::TestRequest::post().uri("/api/user/login").set_json(&body).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::FORBIDDEN);

            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["error"], "unauthorized");
            assert!(body.get("token").is_none());
        }
    }

    #[actix_web::test]
    async fn test_login_empty_fields_is_bad_request() {
        let app = test::init_service(create_app(create_test_app_state())).await;

        let req = test::TestRequest::post()
            .uri("/api/user/login")
            .set_json(json!({ "email": "", "password": "" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "invalid_data");
        assert!(body["details"]["email"].is_array());
        assert!(body["details"]["password"].is_array());
    }

    #[actix_web::test]
    async fn test_me_rejects_missing_and_altered_tokens() {
        let app = test::init_service(create_app(create_test_app_state())).await;

        let req = test::TestRequest::post().uri("/api/user").set_json(paolo()).to_request();
        test::call_service(&app, req).await;
        let req = test::TestRequest::post()
            .uri("/api/user/login")
            .set_json(json!({ "email": "paolo@paolo.com", "password": "123456" }))
            .to_request();
        let login: LoginResponse = test::call_and_read_body_json(&app, req).await;

        let mut altered: Vec<char> = login.token.chars().collect();
        altered[5] = if altered[5] == 'Z' { 'Y' } else { 'Z' };
        let altered: String = altered.into_iter().collect();

        for uri in [
            "/api/user/me".to_string(),
            format!("/api/user/me?token={}", altered),
        ] {
            let req = test::TestRequest::get().uri(&uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::FORBIDDEN, "uri: {}", uri);

            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["error"], "unauthorized");
        }
    }

    #[actix_web::test]
    async fn test_unknown_route_is_not_found() {
        let app = test::init_service(create_app(create_test_app_state())).await;

        let req = test::TestRequest::get().uri("/api/nothing").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_empty_query_token_falls_back_to_bearer() {
        let app = test::init_service(create_app(create_test_app_state())).await;

        let req = test::TestRequest::post().uri("/api/user").set_json(paolo()).to_request();
        let registered: UserResponse = test::call_and_read_body_json(&app, req).await;
        let req = test::TestRequest::post()
            .uri("/api/user/login")
            .set_json(json!({ "email": "paolo@paolo.com", "password": "123456" }))
            .to_request();
        let login: LoginResponse = test::call_and_read_body_json(&app, req).await;

        let req = test::TestRequest::get()
            .uri("/api/user/me?token=")
            .insert_header(("Authorization", format!("Bearer {}", login.token)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let me: UserResponse = test::read_body_json(resp).await;
        assert_eq!(me, registered);
    }
}
