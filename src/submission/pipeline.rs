use std::net::IpAddr;

use axum::http::HeaderMap;

use crate::error::AppError;
use crate::state::SharedState;

use super::fields::Submission;
use super::honeypot;
use super::metadata;

pub struct PipelineResult {
    pub submission: Submission,
    pub spam: bool,
}

/// Run parsed body pairs through rate limiting, the spam trap and
/// sanitization. Returns the sanitized submission to render.
pub fn run(
    state: &SharedState,
    headers: &HeaderMap,
    peer_addr: Option<IpAddr>,
    pairs: Vec<(String, String)>,
) -> Result<PipelineResult, AppError> {
    let ip = peer_addr.unwrap_or(IpAddr::from([127, 0, 0, 1]));

    if let Err(retry_after) = state.submission_limiter.check(
        ip,
        state.config.rate_limit,
        state.config.rate_limit_window_secs,
    ) {
        return Err(AppError::RateLimited(retry_after));
    }

    let meta = metadata::extract(headers, peer_addr, &state.config.trusted_proxies);

    if honeypot::is_spam(&pairs, state.config.honeypot_field.as_deref()) {
        // Pretend success: blank confirmation, nothing echoed back
        tracing::info!("Spam trap tripped by {}, discarding submission", meta.ip);
        return Ok(PipelineResult {
            submission: Submission::default(),
            spam: true,
        });
    }

    let sanitized = Submission::from_pairs(&pairs).sanitized(&state.sanitizer);

    tracing::info!(
        "Submission accepted from {} ({} subjects, user agent: {})",
        meta.ip,
        sanitized.subjects.len(),
        meta.user_agent
    );

    Ok(PipelineResult {
        submission: sanitized,
        spam: false,
    })
}
