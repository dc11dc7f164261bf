//! Session cookie handling for authenticated endpoints.
//!
//! The session token travels in a cookie. `SessionToken` pulls it out of the
//! request; `SessionCookies` builds the cookies that set and clear it. Whether
//! the token is valid is decided by the core services, not here.

use std::future::{ready, Ready};

use actix_web::{
    cookie::{time::Duration as CookieDuration, Cookie, SameSite},
    dev::Payload,
    web, Error, FromRequest, HttpRequest,
};
use sl_shared::config::SessionConfig;

/// Cookie name used when no `SessionCookies` is registered
pub const DEFAULT_COOKIE_NAME: &str = "sl_session";

/// Session cookie settings, registered as app data
#[derive(Debug, Clone)]
pub struct SessionCookies {
    name: String,
    max_age_seconds: Option<i64>,
    secure: bool,
    http_only: bool,
    same_site: SameSite,
}

impl SessionCookies {
    /// Name of the cookie carrying the session token
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cookie handing `token` to the client
    pub fn issue(&self, token: &str) -> Cookie<'static> {
        let mut cookie = Cookie::build(self.name.clone(), token.to_string())
            .path("/")
            .secure(self.secure)
            .http_only(self.http_only)
            .same_site(self.same_site)
            .finish();

        if let Some(seconds) = self.max_age_seconds {
            cookie.set_max_age(CookieDuration::seconds(seconds));
        }
        cookie
    }

    /// Cookie telling the client to forget its session token
    pub fn clear(&self) -> Cookie<'static> {
        let mut cookie = Cookie::build(self.name.clone(), "")
            .path("/")
            .secure(self.secure)
            .http_only(self.http_only)
            .same_site(self.same_site)
            .finish();
        cookie.make_removal();
        cookie
    }
}

impl Default for SessionCookies {
    fn default() -> Self {
        Self::from(&SessionConfig::default())
    }
}

impl From<&SessionConfig> for SessionCookies {
    fn from(config: &SessionConfig) -> Self {
        let same_site = match config.same_site.to_ascii_lowercase().as_str() {
            "strict" => SameSite::Strict,
            "none" => SameSite::None,
            _ => SameSite::Lax,
        };

        Self {
            name: config.cookie_name.clone(),
            max_age_seconds: config.max_age_seconds,
            secure: config.secure,
            http_only: config.http_only,
            same_site,
        }
    }
}

/// Session token presented by the caller, if any
///
/// Extraction never fails; a request without the cookie yields an empty
/// token and the core services treat the caller as anonymous.
#[derive(Debug, Clone, Default)]
pub struct SessionToken(Option<String>);

impl SessionToken {
    /// Token value, `None` when absent or empty
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl FromRequest for SessionToken {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Ok(SessionToken(extract_session_token(req))))
    }
}

/// Reads the session cookie named by the registered `SessionCookies`
fn extract_session_token(req: &HttpRequest) -> Option<String> {
    let name = req
        .app_data::<web::Data<SessionCookies>>()
        .map(|cookies| cookies.name().to_string())
        .unwrap_or_else(|| DEFAULT_COOKIE_NAME.to_string());

    req.cookie(&name)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_issue_cookie_attributes() {
        let cookies = SessionCookies::default();
        let cookie = cookies.issue("abc");

        assert_eq!(cookie.name(), "sl_session");
        assert_eq!(cookie.value(), "abc");
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.max_age(), Some(CookieDuration::seconds(86_400)));
    }

    #[test]
    fn test_issue_without_max_age() {
        let cookies = SessionCookies::from(&SessionConfig {
            max_age_seconds: None,
            same_site: "Strict".to_string(),
            ..SessionConfig::default()
        });
        let cookie = cookies.issue("abc");

        assert_eq!(cookie.max_age(), None);
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
    }

    #[test]
    fn test_clear_cookie_expires() {
        let cookie = SessionCookies::default().clear();

        assert_eq!(cookie.name(), "sl_session");
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(CookieDuration::ZERO));
    }

    #[test]
    fn test_extract_from_cookie() {
        let req = TestRequest::default()
            .cookie(Cookie::new("sl_session", "token-value"))
            .to_http_request();

        assert_eq!(extract_session_token(&req).as_deref(), Some("token-value"));
    }

    #[test]
    fn test_extract_uses_configured_name() {
        let cookies = SessionCookies::from(&SessionConfig {
            cookie_name: "custom".to_string(),
            ..SessionConfig::default()
        });
        let req = TestRequest::default()
            .app_data(web::Data::new(cookies))
            .cookie(Cookie::new("sl_session", "wrong"))
            .cookie(Cookie::new("custom", "right"))
            .to_http_request();

        assert_eq!(extract_session_token(&req).as_deref(), Some("right"));
    }

    #[test]
    fn test_extract_missing_or_empty() {
        let req = TestRequest::default().to_http_request();
        assert_eq!(extract_session_token(&req), None);

        let req = TestRequest::default()
            .cookie(Cookie::new("sl_session", ""))
            .to_http_request();
        assert_eq!(extract_session_token(&req), None);
    }
}
