//! Database layer for the LiveChat server.
//!
//! Provides the MongoDB connection bootstrapper: settings resolved from the
//! environment, a connect routine that verifies the deployment is actually
//! reachable, and an owned [`DbHandle`] that the rest of the process passes
//! around instead of a driver-global singleton.
//!
//! # Design decisions
//!
//! - **Owned handle, no global**: `connect` returns a [`DbHandle`] that the
//!   caller stores and shares. Driver handles are cheap to clone, so there
//!   is no reason to hide the connection behind process-wide state.
//! - **Errors are values**: every failure mode of connection establishment
//!   is a [`DbError`] variant returned to the caller. The caller decides
//!   whether a missing database is fatal to startup.
//! - **Ping on connect**: the driver establishes sockets lazily, so
//!   [`connect`] issues a `ping` command before returning. Success means a
//!   real round-trip completed, not just that options parsed.

mod client;
mod error;
mod settings;

pub use client::{connect, DbHandle};
pub use error::DbError;
pub use settings::{DbSettings, DEFAULT_DATABASE, URI_ENV_VAR};
