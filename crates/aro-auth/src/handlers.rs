use super::*;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;
use aro_core::ID;
use aro_core::Unique;

fn session(
    jar: &Jar,
    token: &str,
    status: actix_web::http::StatusCode,
    body: &AuthResponse,
) -> HttpResponse {
    let mut response = HttpResponse::build(status).json(body);
    match jar.attach(&mut response, token) {
        Ok(()) => response,
        Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
    }
}

pub async fn signup<S: Credentials + 'static>(
    db: web::Data<S>,
    tokens: web::Data<Crypto>,
    jar: web::Data<Jar>,
    req: web::Json<SignupRequest>,
) -> impl Responder {
    if [&req.fname, &req.lname, &req.email, &req.password]
        .iter()
        .any(|field| field.trim().is_empty())
    {
        return HttpResponse::BadRequest().body("missing required fields");
    }
    match db.exists(&req.email).await {
        Ok(false) => {}
        Ok(true) => return HttpResponse::Conflict().body("user already exists"),
        Err(e) => return HttpResponse::InternalServerError().body(e.to_string()),
    }
    let hashword = match password::hash(&req.password) {
        Ok(h) => h,
        Err(e) => return HttpResponse::InternalServerError().body(e.to_string()),
    };
    let member = Member::new(
        ID::default(),
        req.fname.clone(),
        req.lname.clone(),
        req.email.clone(),
    );
    match db.create(&member, &hashword).await {
        Ok(()) => {}
        Err(e) if e.is::<EmailTaken>() => {
            return HttpResponse::Conflict().body("user already exists");
        }
        Err(e) => return HttpResponse::InternalServerError().body(e.to_string()),
    }
    // TODO: sign-up tokens never expire while sign-in tokens last SESSION_DURATION;
    // pass Some(SESSION_DURATION) here once the product decision on signup sessions lands.
    let token = match tokens.issue(member.id(), None) {
        Ok(t) => t,
        Err(e) => return HttpResponse::InternalServerError().body(e.to_string()),
    };
    log::info!("registered member {}", member.id());
    session(
        &jar,
        &token,
        actix_web::http::StatusCode::OK,
        &AuthResponse {
            success: true,
            message: String::from("ok"),
            data: UserInfo::from(&member),
        },
    )
}

pub async fn signin<S: Credentials + 'static>(
    db: web::Data<S>,
    tokens: web::Data<Crypto>,
    jar: web::Data<Jar>,
    req: web::Json<SigninRequest>,
) -> impl Responder {
    if req.email.trim().is_empty() || req.password.is_empty() {
        return HttpResponse::BadRequest().body("missing email or password");
    }
    let (member, hashword) = match db.lookup(&req.email).await {
        Ok(Some(row)) => row,
        Ok(None) => return HttpResponse::Unauthorized().body("invalid email or password"),
        Err(e) => return HttpResponse::InternalServerError().body(e.to_string()),
    };
    if !password::verify(&req.password, &hashword) {
        return HttpResponse::Unauthorized().body("invalid email or password");
    }
    let token = match tokens.issue(member.id(), Some(aro_core::SESSION_DURATION)) {
        Ok(t) => t,
        Err(e) => return HttpResponse::InternalServerError().body(e.to_string()),
    };
    log::info!("member {} signed in", member.id());
    session(
        &jar,
        &token,
        actix_web::http::StatusCode::OK,
        &AuthResponse {
            success: true,
            message: String::from("login successful"),
            data: UserInfo::from(&member),
        },
    )
}

pub async fn signout(jar: web::Data<Jar>) -> impl Responder {
    let mut response =
        HttpResponse::Ok().json(serde_json::json!({"success": true, "message": "signed out"}));
    match jar.clear(&mut response) {
        Ok(()) => response,
        Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
    }
}

/// Current user's profile. A verified token whose member has since been
/// deleted answers 404 rather than failing.
pub async fn me<S: Credentials + 'static>(db: web::Data<S>, auth: Auth) -> impl Responder {
    match db.find(auth.user()).await {
        Ok(Some(member)) => HttpResponse::Ok().json(Profile::from(&member)),
        Ok(None) => HttpResponse::NotFound().body("no user found"),
        Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
    }
}
