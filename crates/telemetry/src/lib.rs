//! Internal telemetry for the RPE dashboard.
//!
//! In-process counters and health state only; small enough that an
//! external metrics system would outweigh the service it watches.

pub mod health;
pub mod metrics;
pub mod tracing_setup;

pub use health::*;
pub use metrics::*;
pub use tracing_setup::*;
