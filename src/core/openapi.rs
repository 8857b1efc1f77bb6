use utoipa::{Modify, OpenApi};

use crate::features::clearance::{dtos as clearance_dtos, handlers as clearance_handlers};
use crate::features::payments::{
    dtos as payments_dtos, handlers as payments_handlers, models as payments_models,
};
use crate::features::reports::{dtos as reports_dtos, handlers as reports_handlers};
use crate::features::students::models as students_models;
use crate::shared::types::{ApiStatus, MessageResponseDto};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Payments
        payments_handlers::pay_tuition,
        // Clearance
        clearance_handlers::activate_student,
        clearance_handlers::download_letter,
        // Reports
        reports_handlers::get_report,
    ),
    components(
        schemas(
            // Shared
            ApiStatus,
            MessageResponseDto,
            // Students
            students_models::AdministrativeStatus,
            // Payments
            payments_models::PaymentStatus,
            payments_dtos::PayTuitionRequestDto,
            // Clearance
            clearance_dtos::ActivationResponseDto,
            // Reports
            reports_dtos::ReportRowDto,
        )
    ),
    tags(
        (name = "payments", description = "Simulated SPP payments"),
        (name = "clearance", description = "Administrative activation and clearance letters"),
        (name = "reports", description = "Payment report"),
    ),
    info(
        title = "SPP Tracker API",
        version = "0.1.0",
        description = "API documentation for the SPP administration tracker",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
