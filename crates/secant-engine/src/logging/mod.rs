//! Logging utilities.
//!
//! Centralizes logger initialization. The engine itself only speaks the
//! standard `log` facade; the `env_logger` backend is wired up here for
//! binaries that want it.

mod init;

pub use init::{LoggingConfig, init_logging};
