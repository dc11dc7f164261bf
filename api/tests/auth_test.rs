//! Integration tests for register, login and logout

mod common;

use actix_web::{http::StatusCode, test};
use serde_json::{json, Value};

use sl_api::app::create_app;

use common::*;

#[actix_web::test]
async fn test_register_sets_session_cookie() {
    let app = test::init_service(create_app(state())).await;

    let resp = test::call_service(&app, register_request("a@x.com", "pw1").to_request()).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let cookie = session_cookie(&resp).expect("session cookie");
    assert_eq!(cookie.value().len(), 64);
    assert_eq!(cookie.http_only(), Some(true));

    let body: Value = test::read_body_json(resp).await;
    assert!(body["user_id"].is_string());
    assert_eq!(body["expires_in"], 86_400);
    assert!(body.get("session_token").is_none());
}

#[actix_web::test]
async fn test_register_missing_fields() {
    let app = test::init_service(create_app(state())).await;

    for (email, password) in [("", "pw1"), ("a@x.com", "")] {
        let resp =
            test::call_service(&app, register_request(email, password).to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(session_cookie(&resp).is_none());

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "INVALID_INPUT");
    }

    // A body without the fields at all behaves the same
    let req = test::TestRequest::post()
        .uri("/register")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_register_duplicate_email() {
    let app = test::init_service(create_app(state())).await;

    let resp = test::call_service(&app, register_request("a@x.com", "pw1").to_request()).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = test::call_service(&app, register_request("a@x.com", "pw2").to_request()).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "DUPLICATE_EMAIL");

    // The first account is untouched
    let resp = test::call_service(&app, login_request("a@x.com", "pw1").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_login_success() {
    let app = test::init_service(create_app(state())).await;
    let resp = test::call_service(&app, register_request("a@x.com", "pw1").to_request()).await;
    let registered: Value = test::read_body_json(resp).await;

    let resp = test::call_service(&app, login_request("a@x.com", "pw1").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(session_cookie(&resp).is_some());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["user_id"], registered["user_id"]);
}

#[actix_web::test]
async fn test_form_encoded_register_and_login() {
    let app = test::init_service(create_app(state())).await;

    let req = test::TestRequest::post()
        .uri("/register")
        .set_form([("email", "a@x.com"), ("password", "pw1")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert!(session_cookie(&resp).is_some());

    let req = test::TestRequest::post()
        .uri("/login")
        .set_form([("email", "a@x.com"), ("password", "pw1")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(session_cookie(&resp).is_some());

    let req = test::TestRequest::post()
        .uri("/login")
        .set_form([("email", "a@x.com"), ("password", "wrong")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_login_failures_are_identical() {
    let app = test::init_service(create_app(state())).await;
    test::call_service(&app, register_request("a@x.com", "pw1").to_request()).await;

    let wrong_password =
        test::call_service(&app, login_request("a@x.com", "nope").to_request()).await;
    let unknown_email =
        test::call_service(&app, login_request("b@x.com", "pw1").to_request()).await;
    let empty = test::call_service(&app, login_request("", "").to_request()).await;

    for resp in [&wrong_password, &unknown_email, &empty] {
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert!(session_cookie(resp).is_none());
    }

    let a: Value = test::read_body_json(wrong_password).await;
    let b: Value = test::read_body_json(unknown_email).await;
    assert_eq!(a["error"], "AUTH_FAILED");
    assert_eq!(a["error"], b["error"]);
    assert_eq!(a["message"], b["message"]);
}

#[actix_web::test]
async fn test_logout_revokes_session() {
    let app = test::init_service(create_app(state())).await;
    let resp = test::call_service(&app, register_request("a@x.com", "pw1").to_request()).await;
    let token = session_cookie(&resp).unwrap().value().to_string();

    let req = with_session(test::TestRequest::post().uri("/logout"), &token).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let cleared = session_cookie(&resp).expect("removal cookie");
    assert_eq!(cleared.value(), "");

    // The old token no longer works
    let req = with_session(test::TestRequest::get().uri("/urls"), &token).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // Logging out again is harmless
    let req = with_session(test::TestRequest::post().uri("/logout"), &token).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::post().uri("/logout").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_malformed_json_is_bad_request() {
    let app = test::init_service(create_app(state())).await;

    let req = test::TestRequest::post()
        .uri("/login")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "INVALID_INPUT");
}

#[actix_web::test]
async fn test_health_and_unknown_route() {
    let app = test::init_service(create_app(state())).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");

    let resp = test::call_service(&app, test::TestRequest::get().uri("/nope").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
