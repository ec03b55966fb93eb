use std::sync::Arc;

use crate::config::Config;
use crate::rate_limit::SubmissionRateLimiter;
use crate::sanitize::FieldSanitizer;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub sanitizer: FieldSanitizer,
    pub submission_limiter: SubmissionRateLimiter,
}
