use actix_web::{web, HttpResponse};

use sl_core::repositories::{LinkRepository, SessionRepository, UserRepository};

use crate::app::AppState;
use crate::dto::MessageResponse;
use crate::handlers::ApiError;
use crate::middleware::SessionToken;

/// Handler for DELETE /urls/{code} and POST /urls/{code}/delete
pub async fn delete<U, L, S>(
    state: web::Data<AppState<U, L, S>>,
    session: SessionToken,
    code: web::Path<String>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    L: LinkRepository + 'static,
    S: SessionRepository + 'static,
{
    state
        .shortener
        .delete_link(session.as_deref(), &code)
        .await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Short link deleted")))
}
