//! Ecole Observability
//!
//! - [`logging::init_logging`]: console subscriber driven by `RUST_LOG`/`LOG_LEVEL`,
//!   compact or JSON depending on `LOG_FORMAT`
//! - [`logging::logging_middleware`]: one log line per request and response
//!
//! ```no_run
//! use ecole_observability::init_logging;
//!
//! init_logging();
//! tracing::info!("ready");
//! ```

pub mod logging;

pub use logging::{LogFormat, init_logging, logging_middleware};
