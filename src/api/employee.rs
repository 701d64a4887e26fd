use crate::{
    auth::admin::AdminToken,
    db::now_iso,
    error::AppError,
    model::{employee::Employee, role::Role},
    models::{RegisterReq, RegisterResponse},
};
use actix_web::{HttpResponse, web};
use sqlx::SqlitePool;
use std::str::FromStr;
use tracing::{debug, info};

const BAD_PAYLOAD: &str = "Bad payload: name required, role in {employee, manager, admin}";

/// Trimmed name and parsed role, or the reason the payload is unusable.
fn validate_registration(payload: &RegisterReq) -> Result<(String, Role), AppError> {
    let name = payload.name.as_deref().unwrap_or("").trim();

    // a missing or empty role means the default; whitespace-only does not
    let role = match payload.role.as_deref() {
        None | Some("") => Ok(Role::default()),
        Some(raw) => Role::from_str(raw.trim()),
    };

    match role {
        Ok(role) if !name.is_empty() => Ok((name.to_string(), role)),
        _ => Err(AppError::Validation(BAD_PAYLOAD.to_string())),
    }
}

/// Register a new employee
#[utoipa::path(
    post,
    path = "/register",
    request_body = RegisterReq,
    responses(
        (status = 201, description = "Employee registered", body = RegisterResponse),
        (status = 400, description = "Bad payload", body = Object, example = json!({
            "error": "Bad payload: name required, role in {employee, manager, admin}"
        }))
    ),
    tag = "Employee"
)]
pub async fn register(
    pool: web::Data<SqlitePool>,
    payload: web::Json<RegisterReq>,
) -> Result<HttpResponse, AppError> {
    let (name, role) = validate_registration(&payload)?;

    let result = sqlx::query(
        r#"
        INSERT INTO employees (name, role, created_at)
        VALUES (?, ?, ?)
        "#,
    )
    .bind(&name)
    .bind(role.as_ref())
    .bind(now_iso())
    .execute(pool.get_ref())
    .await?;

    let id = result.last_insert_rowid();
    info!(employee_id = id, role = %role, "Employee registered");

    Ok(HttpResponse::Created().json(RegisterResponse {
        id,
        name,
        role: role.to_string(),
    }))
}

/// List all employees (admin only)
#[utoipa::path(
    get,
    path = "/employees",
    responses(
        (status = 200, description = "Employees ordered by id", body = [Employee]),
        (status = 403, description = "Admin token required", body = Object, example = json!({
            "error": "Admin token required"
        }))
    ),
    security(
        ("admin_token" = [])
    ),
    tag = "Employee"
)]
pub async fn list_employees(
    _admin: AdminToken,
    pool: web::Data<SqlitePool>,
) -> Result<HttpResponse, AppError> {
    let employees = sqlx::query_as::<_, Employee>(
        "SELECT id, name, role, created_at FROM employees ORDER BY id",
    )
    .fetch_all(pool.get_ref())
    .await?;

    debug!(count = employees.len(), "Listed employees");

    Ok(HttpResponse::Ok().json(employees))
}
