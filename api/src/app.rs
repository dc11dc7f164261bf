//! Application state and factory
//!
//! This module holds the state shared by all workers and builds the
//! Actix-web application around it.

use std::sync::Arc;

use actix_web::{web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use sl_core::repositories::{
    InMemoryLinkRepository, InMemorySessionRepository, InMemoryUserRepository, LinkRepository,
    SessionRepository, UserRepository,
};
use sl_core::services::ShortenerService;
use sl_shared::config::AppConfig;
use sl_shared::types::HealthResponse;

use crate::handlers::{json_error_handler, not_found};
use crate::middleware::{SecurityHeaders, SessionCookies};
use crate::routes::{auth, links, redirect};

/// Shortener backed by the in-memory repositories
pub type InMemoryShortener =
    ShortenerService<InMemoryUserRepository, InMemoryLinkRepository, InMemorySessionRepository>;

/// State shared by every worker
pub struct AppState<U, L, S>
where
    U: UserRepository,
    L: LinkRepository,
    S: SessionRepository,
{
    pub shortener: Arc<ShortenerService<U, L, S>>,
    pub cookies: SessionCookies,
    pub security: SecurityHeaders,
}

impl<U, L, S> AppState<U, L, S>
where
    U: UserRepository,
    L: LinkRepository,
    S: SessionRepository,
{
    pub fn new(shortener: Arc<ShortenerService<U, L, S>>, config: &AppConfig) -> Self {
        Self {
            shortener,
            cookies: SessionCookies::from(&config.auth.session),
            security: SecurityHeaders::for_environment(config.environment),
        }
    }
}

/// Create and configure the application
pub fn create_app<U, L, S>(
    app_state: web::Data<AppState<U, L, S>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<
            impl actix_web::body::MessageBody,
        >,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    L: LinkRepository + 'static,
    S: SessionRepository + 'static,
{
    let cookies = web::Data::new(app_state.cookies.clone());
    let security = app_state.security;

    App::new()
        .app_data(app_state)
        .app_data(cookies)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .wrap(security)
        .wrap(TracingLogger::default())
        .route("/", web::get().to(index))
        .route("/health", web::get().to(health_check))
        // Session endpoints
        .route("/register", web::post().to(auth::register::<U, L, S>))
        .route("/login", web::post().to(auth::login::<U, L, S>))
        .route("/logout", web::post().to(auth::logout::<U, L, S>))
        // Link management
        .service(
            web::resource("/urls")
                .route(web::get().to(links::list::<U, L, S>))
                .route(web::post().to(links::create::<U, L, S>)),
        )
        .route("/urls.json", web::get().to(links::list_detailed::<U, L, S>))
        .service(
            web::resource("/urls/{code}")
                .route(web::get().to(links::show::<U, L, S>))
                .route(web::post().to(links::update::<U, L, S>))
                .route(web::delete().to(links::delete::<U, L, S>)),
        )
        .route("/urls/{code}/delete", web::post().to(links::delete::<U, L, S>))
        // Public redirect
        .route("/u/{code}", web::get().to(redirect::follow::<U, L, S>))
        .default_service(web::route().to(not_found))
}

async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Hello!")
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::healthy(
        "shortlink-api",
        env!("CARGO_PKG_VERSION"),
    ))
}
