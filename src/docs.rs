use crate::model::{employee::Employee, time_entry::{EventType, TimeEntry}};
use crate::models::{EntryFilter, EventReq, LoginReqDto, RegisterReq, RegisterResponse};
use utoipa::Modify;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{OpenApi, openapi};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Attendance API",
        version = "0.1.0",
        description = r#"
## Employee Attendance

Records clock-in/out and break events and lets admins read them back.

### Endpoints
- **Registration**: create an employee with a role (`employee`, `manager`, `admin`)
- **Attendance**: clock-in, clock-out, break-start, break-end
- **Admin**: list employees and time entries (filter by employee and day)

### Security
Admin endpoints require the shared secret in the `X-ADMIN-TOKEN` header.

### Response Format
JSON bodies; errors are returned as `{"error": "..."}`.
"#,
    ),
    paths(
        crate::api::employee::register,
        crate::api::employee::list_employees,

        crate::api::attendance::clock_in,
        crate::api::attendance::clock_out,
        crate::api::attendance::break_start,
        crate::api::attendance::break_end,

        crate::api::entries::list_entries,

        crate::api::login::login
    ),
    components(
        schemas(
            Employee,
            TimeEntry,
            EventType,
            RegisterReq,
            RegisterResponse,
            EventReq,
            EntryFilter,
            LoginReqDto
        )
    ),
    modifiers(&AdminTokenAddon),
    tags(
        (name = "Employee", description = "Employee registration and roster"),
        (name = "Attendance", description = "Clock and break events"),
        (name = "Demo", description = "Standalone login demonstration"),
    )
)]
pub struct ApiDoc;

struct AdminTokenAddon;

impl Modify for AdminTokenAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "admin_token",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(
                crate::auth::admin::ADMIN_TOKEN_HEADER,
            ))),
        );
    }
}
