use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumString};
use utoipa::ToSchema;

/// Attendance event kinds, stored as `CLOCK_IN`, `CLOCK_OUT`, ...
#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Serialize, ToSchema, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    ClockIn,
    ClockOut,
    BreakStart,
    BreakEnd,
}

impl EventType {
    /// Confirmation returned once the event is stored
    pub fn confirmation(&self) -> &'static str {
        match self {
            EventType::ClockIn => "Clock-in recorded",
            EventType::ClockOut => "Clock-out recorded",
            EventType::BreakStart => "Break started",
            EventType::BreakEnd => "Break ended",
        }
    }
}

#[derive(Debug, Serialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 7,
        "employee_id": 1,
        "event_type": "CLOCK_IN",
        "ts": "2024-01-01T08:00:00Z"
    })
)]
pub struct TimeEntry {
    #[schema(example = 7)]
    pub id: i64,

    #[schema(example = 1)]
    pub employee_id: i64,

    #[schema(example = "CLOCK_IN")]
    pub event_type: String,

    /// Server-side UTC timestamp
    #[schema(example = "2024-01-01T08:00:00Z", format = "date-time")]
    pub ts: String,
}
