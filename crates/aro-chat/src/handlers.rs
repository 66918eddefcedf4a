use super::*;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;
use aro_auth::Auth;

pub async fn chat<C, T>(
    llm: web::Data<C>,
    db: web::Data<T>,
    auth: Auth,
    req: web::Json<ChatRequest>,
) -> impl Responder
where
    C: Completion + 'static,
    T: Transcript + 'static,
{
    if req.chat.trim().is_empty() {
        return HttpResponse::BadRequest().body("missing chat");
    }
    let response = match llm.complete(&req.chat).await {
        Ok(r) => r,
        Err(e) => {
            log::warn!("completion failed for {}: {}", auth.user(), e);
            return HttpResponse::BadGateway().body(e.to_string());
        }
    };
    let chat = Chat::new(auth.user(), req.chat.clone(), response);
    if let Err(e) = db.record(&chat).await {
        return HttpResponse::InternalServerError().body(e.to_string());
    }
    HttpResponse::Ok().json(ChatResponse {
        success: true,
        message: String::from("ok"),
        prompt: chat.prompt().to_string(),
        response: chat.response().to_string(),
    })
}

pub async fn history<T: Transcript + 'static>(db: web::Data<T>, auth: Auth) -> impl Responder {
    match db.history(auth.user()).await {
        Ok(chats) => HttpResponse::Ok().json(chats.iter().map(ChatEntry::from).collect::<Vec<_>>()),
        Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
    }
}
