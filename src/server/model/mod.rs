//! Server-side application models.
//!
//! This module contains the shared application state handed to every HTTP handler and the
//! database model aliases used across repositories and services.

pub mod app;
pub mod db;
