use super::*;
use actix_web::FromRequest;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::body::EitherBody;
use actix_web::body::MessageBody;
use actix_web::dev::Payload;
use actix_web::dev::ServiceRequest;
use actix_web::dev::ServiceResponse;
use actix_web::http::header;
use actix_web::middleware::Next;
use actix_web::web;
use aro_core::COOKIE;
use aro_core::ID;
use std::future::Ready;

/// Route gate as actix middleware. Mount with
/// `actix_web::middleware::from_fn(gatekeeper)` and register the [`Gate`]
/// as `web::Data<Gate>`.
pub async fn gatekeeper<B: MessageBody>(
    req: ServiceRequest,
    next: Next<B>,
) -> Result<ServiceResponse<EitherBody<B>>, actix_web::Error> {
    let gate = req
        .app_data::<web::Data<Gate>>()
        .cloned()
        .ok_or_else(|| actix_web::error::ErrorInternalServerError("gate not configured"))?;
    let cookie = req.cookie(COOKIE).map(|c| c.value().to_owned());
    let bearer = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_owned());
    match gate.judge(req.path(), cookie.as_deref(), bearer.as_deref()) {
        Verdict::Allow => next
            .call(req)
            .await
            .map(ServiceResponse::map_into_left_body),
        Verdict::Redirect { location, clear } => {
            log::debug!("redirecting {} to {}", req.path(), location);
            let mut response = HttpResponse::Found()
                .insert_header((header::LOCATION, location))
                .finish();
            if clear {
                gate.jar().clear(&mut response)?;
            }
            Ok(req.into_response(response).map_into_right_body())
        }
    }
}

/// Extractor for callers holding a verified identity token, taken from the
/// session cookie or a bearer header.
pub struct Auth(pub Claims);

impl Auth {
    pub fn user(&self) -> ID<Member> {
        self.0.user()
    }
}

impl FromRequest for Auth {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;
    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        std::future::ready(Self::authenticate(req))
    }
}

impl Auth {
    fn authenticate(req: &HttpRequest) -> Result<Self, actix_web::Error> {
        let crypto = req.app_data::<web::Data<Crypto>>().ok_or_else(|| {
            actix_web::error::ErrorInternalServerError("token service not configured")
        })?;
        let cookie = req.cookie(COOKIE);
        let bearer = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok());
        let token = Gate::extract(cookie.as_ref().map(|c| c.value()), bearer)
            .ok_or_else(|| actix_web::error::ErrorUnauthorized(AuthError::TokenMissing))?;
        crypto
            .decode(token)
            .map(Auth)
            .map_err(actix_web::error::ErrorUnauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::App;
    use actix_web::cookie::Cookie;
    use actix_web::http::StatusCode;
    use actix_web::middleware::from_fn;
    use actix_web::test;
    use aro_core::Arbitrary;

    const SECRET: &[u8] = b"middleware-secret";

    fn gate() -> web::Data<Gate> {
        web::Data::new(Gate::new(Crypto::new(SECRET), Routes::default(), Jar::default()))
    }
    fn valid() -> String {
        Crypto::new(SECRET)
            .issue(ID::random(), Some(aro_core::SESSION_DURATION))
            .unwrap()
    }
    fn expired() -> String {
        let claims = Claims::issued(ID::random(), now() - 120, Some(std::time::Duration::from_secs(60)));
        Crypto::new(SECRET).encode(&claims).unwrap()
    }
    fn location<B>(res: &ServiceResponse<B>) -> Option<&str> {
        res.headers()
            .get(header::LOCATION)
            .and_then(|h| h.to_str().ok())
    }
    fn session<B>(res: &ServiceResponse<B>) -> Vec<Cookie<'_>> {
        res.response()
            .cookies()
            .filter(|c| c.name() == COOKIE)
            .collect()
    }
    async fn page() -> HttpResponse {
        HttpResponse::Ok().body("page")
    }
    async fn whoami(auth: Auth) -> HttpResponse {
        HttpResponse::Ok().body(auth.user().to_string())
    }

    macro_rules! app {
        () => {
            test::init_service(
                App::new()
                    .app_data(gate())
                    .app_data(web::Data::new(Crypto::new(SECRET)))
                    .wrap(from_fn(gatekeeper))
                    .route("/", web::get().to(page))
                    .route("/auth/sign-in", web::get().to(page))
                    .route("/chatbot", web::get().to(page))
                    .route("/whoami", web::get().to(whoami)),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn protected_without_token_redirects_untouched() {
        let app = app!();
        let req = test::TestRequest::get().uri("/chatbot").to_request();
        let res = test::call_service(&app, req).await;
        assert!(res.status() == StatusCode::FOUND);
        assert!(location(&res) == Some("/auth/sign-in"));
        assert!(session(&res).is_empty());
    }

    #[actix_web::test]
    async fn signin_with_valid_cookie_redirects_to_landing() {
        let app = app!();
        let req = test::TestRequest::get()
            .uri("/auth/sign-in")
            .cookie(Cookie::new(COOKIE, valid()))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert!(res.status() == StatusCode::FOUND);
        assert!(location(&res) == Some("/chatbot"));
        assert!(session(&res).is_empty());
    }

    #[actix_web::test]
    async fn protected_with_expired_cookie_redirects_and_clears() {
        let app = app!();
        let req = test::TestRequest::get()
            .uri("/chatbot")
            .cookie(Cookie::new(COOKIE, expired()))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert!(res.status() == StatusCode::FOUND);
        assert!(location(&res) == Some("/auth/sign-in"));
        let cookies = session(&res);
        assert!(cookies.len() == 1);
        assert!(cookies[0].value().is_empty());
    }

    #[actix_web::test]
    async fn public_with_expired_cookie_passes_untouched() {
        let app = app!();
        let req = test::TestRequest::get()
            .uri("/")
            .cookie(Cookie::new(COOKIE, expired()))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert!(res.status() == StatusCode::OK);
        assert!(session(&res).is_empty());
        assert!(test::read_body(res).await == "page");
    }

    #[actix_web::test]
    async fn protected_with_valid_cookie_passes() {
        let app = app!();
        let req = test::TestRequest::get()
            .uri("/chatbot")
            .cookie(Cookie::new(COOKIE, valid()))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert!(res.status() == StatusCode::OK);
    }

    #[actix_web::test]
    async fn protected_with_bearer_passes() {
        let app = app!();
        let req = test::TestRequest::get()
            .uri("/chatbot")
            .insert_header((header::AUTHORIZATION, format!("Bearer {}", valid())))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert!(res.status() == StatusCode::OK);
    }

    #[actix_web::test]
    async fn extractor_requires_token() {
        let app = app!();
        let req = test::TestRequest::get().uri("/whoami").to_request();
        let res = test::call_service(&app, req).await;
        assert!(res.status() == StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn extractor_yields_subject() {
        let app = app!();
        let user = ID::<Member>::random();
        let token = Crypto::new(SECRET).issue(user, None).unwrap();
        let req = test::TestRequest::get()
            .uri("/whoami")
            .cookie(Cookie::new(COOKIE, token))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert!(res.status() == StatusCode::OK);
        assert!(test::read_body(res).await == user.to_string());
    }

    #[actix_web::test]
    async fn unconfigured_gate_is_server_error() {
        let app = test::init_service(
            App::new()
                .wrap(from_fn(gatekeeper))
                .route("/", web::get().to(page)),
        )
        .await;
        let req = test::TestRequest::get().uri("/").to_request();
        let res = test::try_call_service(&app, req).await;
        let status = match res {
            Ok(res) => res.status(),
            Err(e) => e.as_response_error().status_code(),
        };
        assert!(status == StatusCode::INTERNAL_SERVER_ERROR);
    }
}
