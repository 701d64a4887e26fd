use sqlx::SqlitePool;

pub const ADMIN: &str = "test-admin";

/// Service with every route mounted over a fresh in-memory store.
/// Evaluates to `(service, pool)`.
macro_rules! test_app {
    () => {{
        let pool = $crate::db::test_pool().await;
        let config = $crate::config::Config::for_tests($crate::test_support::ADMIN);
        let routes_pool = pool.clone();
        let app = actix_web::test::init_service(
            actix_web::App::new()
                .configure(move |cfg| $crate::routes::configure(cfg, routes_pool, config)),
        )
        .await;
        (app, pool)
    }};
}

pub(crate) use test_app;

pub async fn seed_employee(pool: &SqlitePool, name: &str, role: &str) -> i64 {
    sqlx::query("INSERT INTO employees (name, role, created_at) VALUES (?, ?, '2024-01-01T00:00:00Z')")
        .bind(name)
        .bind(role)
        .execute(pool)
        .await
        .unwrap()
        .last_insert_rowid()
}

pub async fn seed_entry(pool: &SqlitePool, employee_id: i64, event_type: &str, ts: &str) -> i64 {
    sqlx::query("INSERT INTO time_entries (employee_id, event_type, ts) VALUES (?, ?, ?)")
        .bind(employee_id)
        .bind(event_type)
        .bind(ts)
        .execute(pool)
        .await
        .unwrap()
        .last_insert_rowid()
}
