//! Helpers shared by the HTTP integration tests

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::{cookie::Cookie, dev::ServiceResponse, test, web};
use serde_json::json;

use sl_api::app::{AppState, InMemoryShortener};
use sl_core::repositories::{
    InMemoryLinkRepository, InMemorySessionRepository, InMemoryUserRepository,
};
use sl_core::services::ShortenerConfig;
use sl_shared::config::AppConfig;

pub const COOKIE: &str = "sl_session";

pub type TestState =
    AppState<InMemoryUserRepository, InMemoryLinkRepository, InMemorySessionRepository>;

/// Default configuration with a cheap bcrypt cost
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.auth.password.bcrypt_cost = 4;
    config
}

pub fn state_with(config: AppConfig) -> web::Data<TestState> {
    let shortener = InMemoryShortener::new(
        Arc::new(InMemoryUserRepository::new()),
        Arc::new(InMemoryLinkRepository::new()),
        Arc::new(InMemorySessionRepository::new()),
        ShortenerConfig::from(&config),
    )
    .unwrap();

    web::Data::new(AppState::new(Arc::new(shortener), &config))
}

pub fn state() -> web::Data<TestState> {
    state_with(test_config())
}

/// Session cookie set by a response, if any
pub fn session_cookie<B>(resp: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    resp.response()
        .cookies()
        .find(|cookie| cookie.name() == COOKIE)
        .map(|cookie| cookie.into_owned())
}

pub fn register_request(email: &str, password: &str) -> test::TestRequest {
    test::TestRequest::post()
        .uri("/register")
        .set_json(json!({ "email": email, "password": password }))
}

pub fn login_request(email: &str, password: &str) -> test::TestRequest {
    test::TestRequest::post()
        .uri("/login")
        .set_json(json!({ "email": email, "password": password }))
}

pub fn create_request(token: &str, destination: &str) -> test::TestRequest {
    test::TestRequest::post()
        .uri("/urls")
        .cookie(Cookie::new(COOKIE, token.to_string()))
        .set_json(json!({ "destination_url": destination }))
}

/// Attach a session cookie to a request
pub fn with_session(req: test::TestRequest, token: &str) -> test::TestRequest {
    req.cookie(Cookie::new(COOKIE, token.to_string()))
}
