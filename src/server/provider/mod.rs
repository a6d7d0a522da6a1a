//! Clients for third-party data providers.
//!
//! This module wraps the external HTTP services the server seeds itself from. Clients are
//! cheap to clone and share a single `reqwest` connection pool.

pub mod launch_history;
