//! Template engine for server-rendered pages and generated documents.
//!
//! Templates use Jinja2 syntax and are embedded at compile time, so rendering
//! does not depend on the working directory. Names ending in `.html.jinja` are
//! HTML-escaped; `.txt.jinja` templates render verbatim.

use minijinja::{Environment, Value};
use std::sync::OnceLock;
use thiserror::Error;

use super::{format_thousands, indonesian_long_date_str};

/// Global template environment
static TEMPLATE_ENV: OnceLock<Environment<'static>> = OnceLock::new();

const TEMPLATES: &[(&str, &str)] = &[
    (
        "pages/index.html.jinja",
        include_str!("../../../templates/pages/index.html.jinja"),
    ),
    (
        "pages/status_mahasiswa.html.jinja",
        include_str!("../../../templates/pages/status_mahasiswa.html.jinja"),
    ),
    (
        "pages/dashboard_dosen.html.jinja",
        include_str!("../../../templates/pages/dashboard_dosen.html.jinja"),
    ),
    (
        "pages/layout.html.jinja",
        include_str!("../../../templates/pages/layout.html.jinja"),
    ),
    (
        "letters/surat_bebas.txt.jinja",
        include_str!("../../../templates/letters/surat_bebas.txt.jinja"),
    ),
];

/// Errors that can occur during template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template '{0}' not found")]
    NotFound(String),

    #[error("Failed to render template: {0}")]
    RenderError(String),
}

fn init_environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);

    env.add_filter("ribuan", |amount: i64| format_thousands(amount));
    env.add_filter("tanggal", |date: String| {
        indonesian_long_date_str(&date).unwrap_or(date)
    });

    for (name, source) in TEMPLATES {
        if let Err(e) = env.add_template(name, source) {
            tracing::warn!("Failed to load template {}: {}", name, e);
        } else {
            tracing::debug!("Loaded template: {}", name);
        }
    }

    env
}

fn get_environment() -> &'static Environment<'static> {
    TEMPLATE_ENV.get_or_init(init_environment)
}

/// Render a template with the given context.
///
/// # Example
/// ```ignore
/// use minijinja::context;
///
/// let html = render_template("pages/index.html.jinja", context! { title => "SPP" })?;
/// ```
pub fn render_template(template_name: &str, ctx: Value) -> Result<String, TemplateError> {
    let template = get_environment()
        .get_template(template_name)
        .map_err(|_| TemplateError::NotFound(template_name.to_string()))?;

    template
        .render(ctx)
        .map_err(|e| TemplateError::RenderError(e.to_string()))
}

/// Check if a template exists
#[cfg(test)]
pub fn template_exists(template_name: &str) -> bool {
    get_environment().get_template(template_name).is_ok()
}
