use actix_web::{web, HttpResponse};

use sl_core::repositories::{LinkRepository, SessionRepository, UserRepository};

use crate::app::AppState;
use crate::dto::{into_body, JsonOrForm, LinkResponse, UpdateLinkRequest};
use crate::handlers::ApiError;
use crate::middleware::SessionToken;

/// Handler for POST /urls/{code}
///
/// Replaces the destination of one of the caller's links.
///
/// ## Errors
/// - 401 Unauthorized: No valid session
/// - 404 Not Found: Unknown code
/// - 403 Forbidden: Link owned by another user
/// - 400 Bad Request: Missing destination
pub async fn update<U, L, S>(
    state: web::Data<AppState<U, L, S>>,
    session: SessionToken,
    code: web::Path<String>,
    request: JsonOrForm<UpdateLinkRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    L: LinkRepository + 'static,
    S: SessionRepository + 'static,
{
    let request = into_body(request);
    let link = state
        .shortener
        .update_link(session.as_deref(), &code, &request.destination_url)
        .await?;

    Ok(HttpResponse::Ok().json(LinkResponse::from(link)))
}
