use actix_web::{web, HttpResponse};

use sl_core::repositories::{LinkRepository, SessionRepository, UserRepository};

use crate::app::AppState;
use crate::dto::MessageResponse;
use crate::handlers::ApiError;
use crate::middleware::SessionToken;

/// Handler for POST /logout
///
/// Revokes the caller's session and clears the cookie. Succeeds without a
/// session too, so repeating it is harmless.
pub async fn logout<U, L, S>(
    state: web::Data<AppState<U, L, S>>,
    session: SessionToken,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    L: LinkRepository + 'static,
    S: SessionRepository + 'static,
{
    state.shortener.logout(session.as_deref()).await?;

    Ok(HttpResponse::Ok()
        .cookie(state.cookies.clear())
        .json(MessageResponse::new("Logged out successfully")))
}
