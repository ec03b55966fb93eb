use std::net::SocketAddr;

use askama::Template;
use axum::body::Bytes;
use axum::extract::{ConnectInfo, State};
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse, Response};

use crate::error::AppError;
use crate::state::SharedState;
use crate::submission::fields::Submission;
use crate::submission::{parser, pipeline};

#[derive(Template)]
#[template(path = "thank_you.html")]
struct ThankYouTemplate {
    submission: Submission,
}

pub async fn submit(
    State(state): State<SharedState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok());

    let pairs = if content_type.is_some_and(|ct| ct.contains("multipart/form-data")) {
        parser::parse_multipart(&headers, body)
            .await
            .map_err(AppError::BadRequest)?
    } else {
        parser::parse_form_urlencoded(&body).map_err(AppError::BadRequest)?
    };

    let result = pipeline::run(&state, &headers, Some(addr.ip()), pairs)?;

    let template = ThankYouTemplate {
        submission: result.submission,
    };
    Ok(Html(template.render()?).into_response())
}
