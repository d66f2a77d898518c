use actix_web::{web, HttpResponse, Responder};
use log::info;
use serde_json::json;
use validator::Validate;

use crate::{
    models::{DecodeRequestDto, EncodeRequestDto},
    services::CodecServiceTrait,
    types::Result,
};

/// Encode numbers route handler
pub async fn encode_handler(
    dto: web::Json<EncodeRequestDto>,
    service: web::Data<dyn CodecServiceTrait>,
) -> Result<impl Responder> {
    let dto = dto.into_inner();
    dto.validate()?;

    let sqid = service.encode(&dto.numbers)?;
    info!("Issued id '{}' for {} number(s)", sqid.id, sqid.numbers.len());
    Ok(HttpResponse::Created().json(json!({
        "data": sqid,
        "message": "Successfully encoded numbers",
    })))
}

/// Decode id route handler
pub async fn decode_handler(
    id: web::Path<String>,
    service: web::Data<dyn CodecServiceTrait>,
) -> Result<impl Responder> {
    let dto = DecodeRequestDto {
        id: id.into_inner(),
    };
    dto.validate()?;

    let sqid = service.decode(&dto.id)?;
    Ok(HttpResponse::Ok().json(json!({
        "data": sqid,
        "message": "Successfully decoded id",
    })))
}
