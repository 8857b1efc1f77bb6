use axum::{extract::State, response::Html};
use chrono::{Datelike, Local};
use minijinja::context;
use std::sync::Arc;

use crate::core::error::Result;
use crate::features::dashboard::services::DashboardService;
use crate::shared::templates::{indonesian_long_date, render_template, weekday_to_indonesian};

/// Faculty dashboard page
pub async fn dashboard_page(State(service): State<Arc<DashboardService>>) -> Result<Html<String>> {
    let pending = service.pending_activations().await?;
    let summary = service.get_summary().await?;

    let now = Local::now().date_naive();
    let today = format!(
        "{}, {}",
        weekday_to_indonesian(now.weekday()),
        indonesian_long_date(now)
    );

    let html = render_template(
        "pages/dashboard_dosen.html.jinja",
        context! {
            today => today,
            mahasiswa_pending => pending,
            total_mahasiswa => summary.total_mahasiswa,
            total_lunas => summary.total_lunas,
            total_active => summary.total_active,
        },
    )?;

    Ok(Html(html))
}
