use actix_web::{web, HttpResponse};

use sl_core::repositories::{LinkRepository, SessionRepository, UserRepository};

use crate::app::AppState;
use crate::dto::LinkResponse;
use crate::handlers::ApiError;

/// Handler for GET /urls/{code}
///
/// Public lookup of a single link; 404 for unknown codes.
pub async fn show<U, L, S>(
    state: web::Data<AppState<U, L, S>>,
    code: web::Path<String>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    L: LinkRepository + 'static,
    S: SessionRepository + 'static,
{
    let link = state.shortener.get_link(&code).await?;
    Ok(HttpResponse::Ok().json(LinkResponse::from(link)))
}
