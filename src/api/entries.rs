use crate::{
    auth::admin::AdminToken, error::AppError, model::time_entry::TimeEntry, models::EntryFilter,
};
use actix_web::{HttpResponse, web};
use chrono::NaiveDate;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::debug;

/// Filter values after validation. Empty query values are dropped.
#[derive(Debug, Default, PartialEq)]
struct EntryCriteria {
    employee_id: Option<i64>,
    day: Option<NaiveDate>,
}

impl TryFrom<&EntryFilter> for EntryCriteria {
    type Error = AppError;

    fn try_from(filter: &EntryFilter) -> Result<Self, Self::Error> {
        let employee_id = match non_empty(filter.employee_id.as_deref()) {
            Some(raw) => Some(raw.parse::<i64>().map_err(|_| {
                AppError::Validation("employee_id must be an integer".into())
            })?),
            None => None,
        };

        let day = match non_empty(filter.date.as_deref()) {
            Some(raw) => Some(parse_day(raw)?),
            None => None,
        };

        Ok(Self { employee_id, day })
    }
}

/// Parse a `YYYY-MM-DD` day, rejecting anything that does not render back
/// to the same text (`2024-1-1`, `+2024-01-01`), since the day is matched as
/// a prefix of the stored timestamp.
fn parse_day(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .filter(|day| day.format("%Y-%m-%d").to_string() == raw)
        .ok_or_else(|| AppError::Validation("date must be formatted as YYYY-MM-DD".into()))
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// `SELECT` for time entries with every filter value bound as a parameter.
fn entries_query(criteria: &EntryCriteria) -> QueryBuilder<'static, Sqlite> {
    let mut qb = QueryBuilder::<Sqlite>::new(
        "SELECT id, employee_id, event_type, ts FROM time_entries WHERE 1=1",
    );

    if let Some(employee_id) = criteria.employee_id {
        qb.push(" AND employee_id = ").push_bind(employee_id);
    }

    if let Some(day) = criteria.day {
        // timestamps are stored as YYYY-MM-DDTHH:MM:SSZ, so a day is a prefix
        qb.push(" AND ts LIKE ")
            .push_bind(format!("{}%", day.format("%Y-%m-%d")));
    }

    qb.push(" ORDER BY ts DESC, id DESC");
    qb
}

/// List time entries (admin only)
#[utoipa::path(
    get,
    path = "/entries",
    params(EntryFilter),
    responses(
        (status = 200, description = "Time entries, newest first", body = [TimeEntry]),
        (status = 400, description = "Malformed filter", body = Object, example = json!({
            "error": "date must be formatted as YYYY-MM-DD"
        })),
        (status = 403, description = "Admin token required", body = Object, example = json!({
            "error": "Admin token required"
        }))
    ),
    security(
        ("admin_token" = [])
    ),
    tag = "Attendance"
)]
pub async fn list_entries(
    _admin: AdminToken,
    pool: web::Data<SqlitePool>,
    query: web::Query<EntryFilter>,
) -> Result<HttpResponse, AppError> {
    let criteria = EntryCriteria::try_from(&*query)?;

    let mut qb = entries_query(&criteria);
    debug!(sql = %qb.sql(), criteria = ?criteria, "Fetching time entries");

    let entries = qb
        .build_query_as::<TimeEntry>()
        .fetch_all(pool.get_ref())
        .await?;

    Ok(HttpResponse::Ok().json(entries))
}
