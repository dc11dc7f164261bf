use actix_web::{web, HttpResponse};

use sl_core::repositories::{LinkRepository, SessionRepository, UserRepository};

use crate::app::AppState;
use crate::dto::{LinkListResponse, LinkResponse};
use crate::handlers::ApiError;
use crate::middleware::SessionToken;

/// Handler for GET /urls
///
/// Returns `{ "links": { "<code>": "<destination>" } }` for the caller's
/// links only.
pub async fn list<U, L, S>(
    state: web::Data<AppState<U, L, S>>,
    session: SessionToken,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    L: LinkRepository + 'static,
    S: SessionRepository + 'static,
{
    let links = state.shortener.list_my_links(session.as_deref()).await?;
    Ok(HttpResponse::Ok().json(LinkListResponse { links }))
}

/// Handler for GET /urls.json
///
/// Full records of the caller's links, oldest first.
pub async fn list_detailed<U, L, S>(
    state: web::Data<AppState<U, L, S>>,
    session: SessionToken,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    L: LinkRepository + 'static,
    S: SessionRepository + 'static,
{
    let links: Vec<LinkResponse> = state
        .shortener
        .all_links_for(session.as_deref())
        .await?
        .into_iter()
        .map(LinkResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(links))
}
