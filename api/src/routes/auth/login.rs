use actix_web::{web, HttpResponse};

use sl_core::repositories::{LinkRepository, SessionRepository, UserRepository};

use crate::app::AppState;
use crate::dto::{into_body, AuthResponse, JsonOrForm, LoginRequest};
use crate::handlers::ApiError;

/// Handler for POST /login
///
/// Checks the credentials and starts a new session. Accepts JSON or an
/// urlencoded form.
///
/// # Response
///
/// ## Success (200 OK)
/// Sets the session cookie and returns `{ "user_id", "expires_in" }`.
///
/// ## Errors
/// - 401 Unauthorized: Bad email or password (the two are not told apart)
pub async fn login<U, L, S>(
    state: web::Data<AppState<U, L, S>>,
    request: JsonOrForm<LoginRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    L: LinkRepository + 'static,
    S: SessionRepository + 'static,
{
    let request = into_body(request);
    let auth = state
        .shortener
        .login(&request.email, &request.password)
        .await?;

    Ok(HttpResponse::Ok()
        .cookie(state.cookies.issue(&auth.session_token))
        .json(AuthResponse {
            user_id: auth.user_id,
            expires_in: auth.expires_in,
        }))
}
