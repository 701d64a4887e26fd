//! Standalone login demonstration.
//!
//! Compares against a fixed credential pair and is not connected to the
//! employee records. Real deployments should not use it.

use crate::{error::AppError, models::LoginReqDto};
use actix_web::{HttpResponse, web};
use serde_json::json;
use tracing::{info, instrument};

const DEMO_USERNAME: &str = "admin";
const DEMO_PASSWORD: &str = "1234";

/// Demo login
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginReqDto,
    responses(
        (status = 200, description = "Access granted", body = Object, example = json!({
            "message": "Access granted"
        })),
        (status = 400, description = "Missing username or password", body = Object, example = json!({
            "error": "Missing username or password."
        })),
        (status = 401, description = "Invalid credentials", body = Object, example = json!({
            "error": "Invalid credentials"
        }))
    ),
    tag = "Demo"
)]
#[instrument(name = "demo_login", skip(user))]
pub async fn login(user: web::Json<LoginReqDto>) -> Result<HttpResponse, AppError> {
    let username = user.username.as_deref().unwrap_or("").trim();
    let password = user.password.as_deref().unwrap_or("").trim();

    if username.is_empty() || password.is_empty() {
        return Err(AppError::Validation("Missing username or password.".into()));
    }

    if username == DEMO_USERNAME && password == DEMO_PASSWORD {
        info!("Demo login accepted");
        return Ok(HttpResponse::Ok().json(json!({
            "message": "Access granted"
        })));
    }

    info!("Demo login rejected");
    Err(AppError::Unauthorized("Invalid credentials".into()))
}
