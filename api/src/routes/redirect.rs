use actix_web::{http::header, web, HttpResponse};

use sl_core::repositories::{LinkRepository, SessionRepository, UserRepository};

use crate::app::AppState;
use crate::handlers::ApiError;

/// Handler for GET /u/{code}
///
/// Anyone may follow a short link. Redirects are temporary (302) because the
/// owner can change the destination at any time.
pub async fn follow<U, L, S>(
    state: web::Data<AppState<U, L, S>>,
    code: web::Path<String>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    L: LinkRepository + 'static,
    S: SessionRepository + 'static,
{
    let destination = state.shortener.resolve_for_redirect(&code).await?;

    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, destination))
        .finish())
}
