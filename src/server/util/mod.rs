//! Utility functions and helpers for server operations.
//!
//! This module provides reusable helpers used by the controllers and services: turning
//! untrusted pagination query values into a safe skip/limit pair, and parsing the launch
//! date formats accepted from clients.

pub mod pagination;
pub mod time;
