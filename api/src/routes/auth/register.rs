use actix_web::{web, HttpResponse};
use validator::Validate;

use sl_core::repositories::{LinkRepository, SessionRepository, UserRepository};

use crate::app::AppState;
use crate::dto::{into_body, AuthResponse, JsonOrForm, RegisterRequest};
use crate::handlers::ApiError;

/// Handler for POST /register
///
/// Creates the account and signs the new user in.
///
/// # Request Body
///
/// JSON as below, or the same fields as an urlencoded form.
///
/// ```json
/// {
///     "email": "a@x.com",
///     "password": "pw1"
/// }
/// ```
///
/// # Response
///
/// ## Success (201 Created)
/// Sets the session cookie.
/// ```json
/// {
///     "user_id": "1f0c...",
///     "expires_in": 86400
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Missing email or password
/// - 409 Conflict: Email already registered
pub async fn register<U, L, S>(
    state: web::Data<AppState<U, L, S>>,
    request: JsonOrForm<RegisterRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    L: LinkRepository + 'static,
    S: SessionRepository + 'static,
{
    let request = into_body(request);
    request.validate()?;

    let auth = state
        .shortener
        .sign_up(&request.email, &request.password)
        .await?;

    Ok(HttpResponse::Created()
        .cookie(state.cookies.issue(&auth.session_token))
        .json(AuthResponse {
            user_id: auth.user_id,
            expires_in: auth.expires_in,
        }))
}
