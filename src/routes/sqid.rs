use actix_web::{web, Responder};

use crate::{
    handlers::{decode_handler, encode_handler},
    models::EncodeRequestDto,
    services::CodecServiceTrait,
    types::Result,
};

// Encode numbers route handler
async fn encode(
    dto: web::Json<EncodeRequestDto>,
    service: web::Data<dyn CodecServiceTrait>,
) -> Result<impl Responder> {
    encode_handler(dto, service).await
}

// Decode id route handler
async fn decode(
    id: web::Path<String>,
    service: web::Data<dyn CodecServiceTrait>,
) -> Result<impl Responder> {
    decode_handler(id, service).await
}

// Configure all routes function
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/sqids")
            .route("", web::post().to(encode))
            .route("/{id}", web::get().to(decode)),
    );
}
