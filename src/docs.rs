use crate::api::payroll::{
    DashboardPreview, PaginatedPayPeriods, PayPeriodQuery, UpdatePeriodStatus,
};
use crate::model::pay_period::{PayPeriod, PayPeriodStatus};
use crate::model::payroll_summary::PayrollSummary;
use crate::models::{LoginReqDto, TokenPair};
use crate::payroll::alerts::{AlertLevel, PayrollAlert};
use crate::payroll::dashboard::{DashboardState, GrossPayMismatch, PayrollDashboard};
use crate::payroll::projection::PayrollProjection;
use crate::payroll::totals::PayrollTotals;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Payroll Console API",
        version = "0.1.0",
        description = r#"
## Field-service payroll console

Backs the payroll screens of the field-service admin console.

### Key Features
- **Pay periods**: list, inspect, and move periods through
  draft → processing → approved → paid (or void)
- **Technician summaries**: hours, pay, commissions and guarantee (backboard) pay per technician
- **Dashboard**: period totals, overtime and cost ratios, a linear end-of-period
  projection, and advisory alerts
- **Preview**: run the dashboard over posted rows before they are imported

### Security
Endpoints under `/api` require a JWT access token (`Authorization: Bearer ...`).
Dashboards and status changes are limited to admins and payroll managers;
technicians only see their own summary row.
"#,
    ),
    paths(
        crate::auth::handlers::login,
        crate::auth::handlers::refresh_token,
        crate::auth::handlers::logout,

        crate::api::payroll::list_periods,
        crate::api::payroll::get_period,
        crate::api::payroll::update_period_status,
        crate::api::payroll::list_summaries,
        crate::api::payroll::get_dashboard,
        crate::api::payroll::preview_dashboard
    ),
    components(
        schemas(
            LoginReqDto,
            TokenPair,
            PayPeriod,
            PayPeriodStatus,
            PayPeriodQuery,
            PaginatedPayPeriods,
            UpdatePeriodStatus,
            PayrollSummary,
            PayrollTotals,
            PayrollProjection,
            PayrollAlert,
            AlertLevel,
            GrossPayMismatch,
            PayrollDashboard,
            DashboardState,
            DashboardPreview
        )
    ),
    modifiers(&BearerAuth),
    tags(
        (name = "Auth", description = "Login and token rotation"),
        (name = "Payroll", description = "Pay periods, technician summaries and dashboards"),
    )
)]
pub struct ApiDoc;
