//! Landing page handler.

use crate::server::AppState;
use axum::body::Bytes;
use axum::extract::State;
use axum::response::Html;

pub async fn index(State(state): State<AppState>) -> Html<Bytes> {
    Html(state.page)
}
