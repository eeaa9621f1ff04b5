//! HTTP API layer for the RPE dashboard.

pub mod html;
pub mod response;
pub mod routes;
pub mod state;

pub use routes::router;
pub use state::AppState;
