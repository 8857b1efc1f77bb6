use axum::{
    extract::{Query, State},
    response::Html,
};
use minijinja::context;
use std::sync::Arc;

use crate::core::error::Result;
use crate::features::students::dtos::StatusQuery;
use crate::features::students::services::StudentService;
use crate::shared::templates::render_template;

/// Student status lookup page
///
/// Renders the lookup form. When `nim` is given, the student's administrative
/// and payment status is shown, or a not-found notice for unknown NIMs.
pub async fn status_page(
    State(service): State<Arc<StudentService>>,
    Query(query): Query<StatusQuery>,
) -> Result<Html<String>> {
    let nim = query.nim().unwrap_or_default();

    let status_info = match query.nim() {
        Some(nim) => service.find_status(nim).await?,
        None => None,
    };

    let html = render_template(
        "pages/status_mahasiswa.html.jinja",
        context! { nim => nim, status_info => status_info },
    )?;

    Ok(Html(html))
}
