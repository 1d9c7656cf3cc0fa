//! check_truenas — TrueNAS/FreeNAS monitoring plugin library.
//!
//! The binary in `main.rs` parses arguments and owns the process surface
//! (stdout line + exit code); everything else lives here so integration
//! tests can drive a full check against a mock API server.

pub mod auth;
pub mod checks;
pub mod config;
pub mod transport;
pub mod verdict;
