pub mod contact;
pub mod submit;

use axum::routing::{get, post};
use axum::Router;

use crate::state::SharedState;

pub fn view_routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(contact::contact_page))
        .route("/submit", post(submit::submit))
}
