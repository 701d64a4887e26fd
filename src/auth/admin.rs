use crate::{config::Config, error::AppError};
use actix_web::{FromRequest, HttpRequest, dev::Payload, web::Data};
use futures::future::{Ready, ready};

pub const ADMIN_TOKEN_HEADER: &str = "X-ADMIN-TOKEN";

/// Proof that the request carried the configured admin token.
///
/// Take it as a handler argument to gate the handler; extraction fails with
/// `403` when the header is absent or does not match exactly.
pub struct AdminToken;

impl FromRequest for AdminToken {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let config = match req.app_data::<Data<Config>>() {
            Some(c) => c,
            None => {
                return ready(Err(actix_web::error::ErrorInternalServerError(
                    "Config missing",
                )));
            }
        };

        let presented = req
            .headers()
            .get(ADMIN_TOKEN_HEADER)
            .and_then(|h| h.to_str().ok());

        match presented {
            Some(token) if token == config.admin_token => ready(Ok(AdminToken)),
            _ => {
                tracing::info!(path = %req.path(), "Rejected request without valid admin token");
                ready(Err(AppError::Forbidden("Admin token required".into()).into()))
            }
        }
    }
}
