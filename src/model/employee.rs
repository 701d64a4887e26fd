use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "name": "Alice",
        "role": "manager",
        "created_at": "2024-01-01T08:00:00Z"
    })
)]
pub struct Employee {
    #[schema(example = 1)]
    pub id: i64,

    #[schema(example = "Alice")]
    pub name: String,

    /// One of `employee`, `manager`, `admin`
    #[schema(example = "manager")]
    pub role: String,

    #[schema(example = "2024-01-01T08:00:00Z", format = "date-time")]
    pub created_at: String,
}
