use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;

/// Page paths served by the backend and their titles.
pub const PAGES: &[(&str, &str)] = &[
    ("/", "ArogyaSathi"),
    ("/auth/sign-in", "Sign in"),
    ("/chatbot", "Chatbot"),
    ("/emergency", "Emergency"),
    ("/reports", "Reports"),
    ("/user-profile", "Profile"),
    ("/womens-health", "Women's health"),
];

/// Placeholder document for a page. Rendering lives in the frontend;
/// these exist so the gate has something to guard.
async fn page(req: HttpRequest) -> impl Responder {
    let title = PAGES
        .iter()
        .find(|(path, _)| *path == req.path())
        .map(|(_, title)| *title)
        .unwrap_or("ArogyaSathi");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(format!(
            "<!doctype html><html><head><title>{}</title></head><body><h1>{}</h1></body></html>",
            title, title
        ))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    for (path, _) in PAGES {
        cfg.route(path, web::get().to(page));
    }
}
