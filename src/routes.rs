use crate::{
    api::{attendance, employee, entries, login},
    config::Config,
    error::AppError,
};
use actix_web::web::{self, Data};
use sqlx::SqlitePool;

pub fn configure(cfg: &mut web::ServiceConfig, pool: SqlitePool, config: Config) {
    // Bodies are read as JSON whatever the Content-Type says; any extractor
    // failure becomes a 400 with an `error` field.
    let json_config = web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(|err, _req| {
            AppError::Validation(format!("Invalid JSON payload: {err}")).into()
        });

    let query_config = web::QueryConfig::default().error_handler(|err, _req| {
        AppError::Validation(format!("Invalid query string: {err}")).into()
    });

    cfg.app_data(Data::new(pool))
        .app_data(Data::new(config))
        .app_data(json_config)
        .app_data(query_config);

    // Public routes
    cfg.route("/register", web::post().to(employee::register))
        .route("/clock-in", web::post().to(attendance::clock_in))
        .route("/clock-out", web::post().to(attendance::clock_out))
        .route("/break-start", web::post().to(attendance::break_start))
        .route("/break-end", web::post().to(attendance::break_end))
        .route("/login", web::post().to(login::login));

    // Admin routes, gated by the AdminToken extractor
    cfg.route("/employees", web::get().to(employee::list_employees))
        .route("/entries", web::get().to(entries::list_entries));
}

// PUBLIC
//  └─ POST /register, /clock-in, /clock-out, /break-start, /break-end, /login
//
// ADMIN
//  └─ X-ADMIN-TOKEN: <shared secret>
//       └─ GET /employees, /entries
