//! Request and response bodies
//!
//! Request bodies arrive either as JSON or as an urlencoded form, so plain
//! HTML forms can drive the same endpoints.

use actix_web::web;

pub mod auth;
pub mod link;

pub use auth::{AuthResponse, LoginRequest, RegisterRequest};
pub use link::{CreateLinkRequest, LinkListResponse, LinkResponse, MessageResponse, UpdateLinkRequest};

/// Request body sent as JSON or as an urlencoded form
pub type JsonOrForm<T> = web::Either<web::Json<T>, web::Form<T>>;

/// Body of either encoding
pub fn into_body<T>(body: JsonOrForm<T>) -> T {
    match body {
        web::Either::Left(web::Json(inner)) => inner,
        web::Either::Right(web::Form(inner)) => inner,
    }
}
