use actix_web::HttpResponse;
use actix_web::cookie::Cookie;
use actix_web::cookie::SameSite;
use actix_web::error::HttpError;
use aro_core::COOKIE;

/// Session cookie manager.
///
/// Every session cookie is `HttpOnly`, `SameSite=Lax`, `Path=/`, and
/// `Secure` when the deployment asks for it. Never inspects the token.
#[derive(Debug, Clone, Copy, Default)]
pub struct Jar {
    secure: bool,
}

impl Jar {
    pub fn new(secure: bool) -> Self {
        Self { secure }
    }
    pub fn secure(&self) -> bool {
        self.secure
    }
    pub fn cookie(&self, token: &str) -> Cookie<'static> {
        Cookie::build(COOKIE, token.to_owned())
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Lax)
            .path("/")
            .finish()
    }
    /// Set the session cookie, replacing any already queued on `response`.
    pub fn attach<B>(&self, response: &mut HttpResponse<B>, token: &str) -> Result<(), HttpError> {
        response.del_cookie(COOKIE);
        response.add_cookie(&self.cookie(token))
    }
    /// Expire the session cookie on the client.
    pub fn clear<B>(&self, response: &mut HttpResponse<B>) -> Result<(), HttpError> {
        response.del_cookie(COOKIE);
        response.add_removal_cookie(&self.cookie(""))
    }
}
