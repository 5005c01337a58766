//! loadgen: greeting, health and CPU-load HTTP service.
//!
//! Three stateless handlers behind one axum router. `/stress/{n}` burns CPU
//! in proportion to `n` so that horizontal autoscaling can be exercised;
//! `/` and `/healthz` report which replica answered and that it is alive.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod stress;

pub use config::AppConfig;
pub use error::AppError;
pub use routes::create_router;
pub use state::{AppState, Identity};
