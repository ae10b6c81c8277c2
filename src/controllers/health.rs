use actix_web::{HttpResponse, Responder};

// Liveness for the hosting platform; never touches the targets
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("ok")
}
