use axum::response::Html;
use minijinja::context;

use crate::core::error::Result;
use crate::shared::templates::render_template;

/// Static landing page
pub async fn home_page() -> Result<Html<String>> {
    let html = render_template("pages/index.html.jinja", context! {})?;
    Ok(Html(html))
}
