use askama::Template;
use axum::response::{Html, IntoResponse};

use crate::error::AppError;

#[derive(Template)]
#[template(path = "contact.html")]
struct ContactTemplate;

/// The static contact form. Query parameters are ignored.
pub async fn contact_page() -> Result<impl IntoResponse, AppError> {
    let template = ContactTemplate;
    Ok(Html(template.render()?))
}
