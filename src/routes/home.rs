//! Greeting page.

use axum::extract::State;

use crate::config::WELCOME_MESSAGE;
use crate::state::AppState;

/// Render the greeting text for `hostname`.
pub fn greeting(hostname: &str) -> String {
    format!("Hello from {}! {}", hostname, WELCOME_MESSAGE)
}

/// Greeting handler. Names the replica that served the request, which makes
/// load distribution across pods visible from the client side.
pub async fn index(State(state): State<AppState>) -> String {
    greeting(&state.identity.hostname)
}
