use std::sync::Arc;

use actix_web::web;

mod sqid;

pub use sqid::{CodecService, CodecServiceTrait};

#[cfg(test)]
pub use sqid::MockCodecServiceTrait;

/// Service Register
pub fn register(service: Arc<dyn CodecServiceTrait>, cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::Data::from(service));
}
