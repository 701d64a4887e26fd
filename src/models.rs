use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Deserialize, ToSchema)]
pub struct RegisterReq {
    #[schema(example = "Alice")]
    pub name: Option<String>,
    /// Defaults to `employee`; matched case-insensitively
    #[schema(example = "manager")]
    pub role: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct RegisterResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Alice")]
    pub name: String,
    #[schema(example = "manager")]
    pub role: String,
}

/// Body shared by the clock and break endpoints
#[derive(Deserialize, ToSchema)]
pub struct EventReq {
    #[schema(example = 1)]
    pub employee_id: Option<i64>,
}

#[derive(Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct EntryFilter {
    /// Only entries for this employee
    #[schema(example = "1")]
    pub employee_id: Option<String>,
    /// Calendar day, `YYYY-MM-DD`
    #[schema(example = "2024-01-01")]
    pub date: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct LoginReqDto {
    #[schema(example = "admin")]
    pub username: Option<String>,
    #[schema(example = "1234")]
    pub password: Option<String>,
}
