use crate::{db::now_iso, error::AppError, model::time_entry::EventType, models::EventReq};
use actix_web::{HttpResponse, web};
use serde_json::json;
use sqlx::SqlitePool;
use tracing::{debug, info};

/// Store one attendance event for an existing employee.
///
/// The four endpoints differ only in the event type written. Events are not
/// checked against earlier ones, so a clock-out without a clock-in is stored
/// as is.
async fn record_event(
    pool: &SqlitePool,
    payload: &EventReq,
    event_type: EventType,
) -> Result<HttpResponse, AppError> {
    // 0 is never a valid surrogate key and counts as missing
    let employee_id = match payload.employee_id {
        Some(id) if id != 0 => id,
        _ => return Err(AppError::Validation("employee_id required".into())),
    };

    let exists = sqlx::query_scalar::<_, i64>("SELECT id FROM employees WHERE id = ?")
        .bind(employee_id)
        .fetch_optional(pool)
        .await?;

    if exists.is_none() {
        debug!(employee_id, %event_type, "Unknown employee");
        return Err(AppError::NotFound("Employee not found".into()));
    }

    sqlx::query(
        r#"
        INSERT INTO time_entries (employee_id, event_type, ts)
        VALUES (?, ?, ?)
        "#,
    )
    .bind(employee_id)
    .bind(event_type.as_ref())
    .bind(now_iso())
    .execute(pool)
    .await?;

    info!(employee_id, %event_type, "Attendance event recorded");

    Ok(HttpResponse::Created().json(json!({
        "message": event_type.confirmation()
    })))
}

/// Clock-in endpoint
#[utoipa::path(
    post,
    path = "/clock-in",
    request_body = EventReq,
    responses(
        (status = 201, description = "Clock-in recorded", body = Object, example = json!({
            "message": "Clock-in recorded"
        })),
        (status = 400, description = "employee_id required", body = Object, example = json!({
            "error": "employee_id required"
        })),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "error": "Employee not found"
        }))
    ),
    tag = "Attendance"
)]
pub async fn clock_in(
    pool: web::Data<SqlitePool>,
    payload: web::Json<EventReq>,
) -> Result<HttpResponse, AppError> {
    record_event(pool.get_ref(), &payload, EventType::ClockIn).await
}

/// Clock-out endpoint
#[utoipa::path(
    post,
    path = "/clock-out",
    request_body = EventReq,
    responses(
        (status = 201, description = "Clock-out recorded", body = Object, example = json!({
            "message": "Clock-out recorded"
        })),
        (status = 400, description = "employee_id required"),
        (status = 404, description = "Employee not found")
    ),
    tag = "Attendance"
)]
pub async fn clock_out(
    pool: web::Data<SqlitePool>,
    payload: web::Json<EventReq>,
) -> Result<HttpResponse, AppError> {
    record_event(pool.get_ref(), &payload, EventType::ClockOut).await
}

/// Break-start endpoint
#[utoipa::path(
    post,
    path = "/break-start",
    request_body = EventReq,
    responses(
        (status = 201, description = "Break started", body = Object, example = json!({
            "message": "Break started"
        })),
        (status = 400, description = "employee_id required"),
        (status = 404, description = "Employee not found")
    ),
    tag = "Attendance"
)]
pub async fn break_start(
    pool: web::Data<SqlitePool>,
    payload: web::Json<EventReq>,
) -> Result<HttpResponse, AppError> {
    record_event(pool.get_ref(), &payload, EventType::BreakStart).await
}

/// Break-end endpoint
#[utoipa::path(
    post,
    path = "/break-end",
    request_body = EventReq,
    responses(
        (status = 201, description = "Break ended", body = Object, example = json!({
            "message": "Break ended"
        })),
        (status = 400, description = "employee_id required"),
        (status = 404, description = "Employee not found")
    ),
    tag = "Attendance"
)]
pub async fn break_end(
    pool: web::Data<SqlitePool>,
    payload: web::Json<EventReq>,
) -> Result<HttpResponse, AppError> {
    record_event(pool.get_ref(), &payload, EventType::BreakEnd).await
}

#[cfg(test)]
mod tests {
    use crate::test_support::{ADMIN, seed_employee, test_app};
    use actix_web::{http::StatusCode, test};
    use serde_json::{Value, json};

    #[actix_web::test]
    async fn unknown_employee_is_not_found() {
        let (app, pool) = test_app!();

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/clock-in")
                .set_json(json!({ "employee_id": 999 }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Employee not found");

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM time_entries")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[actix_web::test]
    async fn missing_employee_id_is_bad_request() {
        let (app, _pool) = test_app!();

        for payload in [json!({}), json!({ "employee_id": null }), json!({ "employee_id": 0 })] {
            let resp = test::call_service(
                &app,
                test::TestRequest::post()
                    .uri("/clock-out")
                    .set_json(&payload)
                    .to_request(),
            )
            .await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{payload}");

            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["error"], "employee_id required");
        }
    }

    #[actix_web::test]
    async fn string_employee_id_is_rejected() {
        let (app, pool) = test_app!();
        let id = seed_employee(&pool, "Gus", "employee").await;

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/clock-in")
                .set_json(json!({ "employee_id": id.to_string() }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().starts_with("Invalid JSON payload"));

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM time_entries")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[actix_web::test]
    async fn body_without_json_content_type_is_accepted() {
        let (app, pool) = test_app!();
        let id = seed_employee(&pool, "Dana", "employee").await;

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/break-start")
                .set_payload(format!(r#"{{"employee_id": {id}}}"#))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    #[actix_web::test]
    async fn clock_in_is_listed_for_admin() {
        let (app, pool) = test_app!();
        let id = seed_employee(&pool, "Alice", "manager").await;
        let before = crate::db::now_iso();

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/clock-in")
                .set_json(json!({ "employee_id": id }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Clock-in recorded");

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri(&format!("/entries?employee_id={id}"))
                .insert_header(("X-ADMIN-TOKEN", ADMIN))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);

        let entries: Vec<Value> = test::read_body_json(resp).await;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["employee_id"], id);
        assert_eq!(entries[0]["event_type"], "CLOCK_IN");

        // fixed-width timestamps compare chronologically as strings
        let ts = entries[0]["ts"].as_str().unwrap();
        assert!(ts >= before.as_str());
    }

    #[actix_web::test]
    async fn each_endpoint_writes_its_event_type() {
        let (app, pool) = test_app!();
        let id = seed_employee(&pool, "Eve", "employee").await;

        let cases = [
            ("/clock-in", "CLOCK_IN", "Clock-in recorded"),
            ("/break-start", "BREAK_START", "Break started"),
            ("/break-end", "BREAK_END", "Break ended"),
            ("/clock-out", "CLOCK_OUT", "Clock-out recorded"),
        ];

        for (uri, _, message) in cases {
            let resp = test::call_service(
                &app,
                test::TestRequest::post()
                    .uri(uri)
                    .set_json(json!({ "employee_id": id }))
                    .to_request(),
            )
            .await;
            assert_eq!(resp.status(), StatusCode::CREATED, "{uri}");

            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["message"], message);
        }

        let stored: Vec<(String,)> =
            sqlx::query_as("SELECT event_type FROM time_entries ORDER BY id")
                .fetch_all(&pool)
                .await
                .unwrap();
        let stored: Vec<&str> = stored.iter().map(|(e,)| e.as_str()).collect();
        let expected: Vec<&str> = cases.iter().map(|(_, e, _)| *e).collect();
        assert_eq!(stored, expected);
    }

    #[actix_web::test]
    async fn out_of_order_events_are_accepted() {
        let (app, pool) = test_app!();
        let id = seed_employee(&pool, "Frank", "employee").await;

        for uri in ["/clock-out", "/clock-out", "/break-end"] {
            let resp = test::call_service(
                &app,
                test::TestRequest::post()
                    .uri(uri)
                    .set_json(json!({ "employee_id": id }))
                    .to_request(),
            )
            .await;
            assert_eq!(resp.status(), StatusCode::CREATED);
        }
    }
}
