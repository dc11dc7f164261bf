use actix_web::{web, HttpResponse};

use sl_core::repositories::{LinkRepository, SessionRepository, UserRepository};

use crate::app::AppState;
use crate::dto::{into_body, CreateLinkRequest, JsonOrForm, LinkResponse};
use crate::handlers::ApiError;
use crate::middleware::SessionToken;

/// Handler for POST /urls
///
/// # Request Body
///
/// ```json
/// { "destination_url": "http://example.com" }
/// ```
///
/// or the form field `longURL=http://example.com`.
///
/// # Response
///
/// ## Success (201 Created)
/// The new link, with a `Location` header pointing at it.
///
/// ## Errors
/// - 400 Bad Request: Missing destination or one with control characters
/// - 401 Unauthorized: No valid session
/// - 503 Service Unavailable: No free short code could be found
pub async fn create<U, L, S>(
    state: web::Data<AppState<U, L, S>>,
    session: SessionToken,
    request: JsonOrForm<CreateLinkRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    L: LinkRepository + 'static,
    S: SessionRepository + 'static,
{
    let request = into_body(request);
    let link = state
        .shortener
        .create_link(session.as_deref(), &request.destination_url)
        .await?;

    Ok(HttpResponse::Created()
        .insert_header(("Location", format!("/urls/{}", link.code)))
        .json(LinkResponse::from(link)))
}
