//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (gauges, counters, histograms via the metrics facade)
//!
//! Consumers:
//!     → stderr (text or JSON lines)
//!     → whatever metrics recorder the host application installs
//! ```

pub mod logging;
pub mod metrics;

pub use logging::init_logging;
