//! Server application core modules.
//!
//! This module contains all server-side functionality for Mission Control: HTTP routing,
//! launch scheduling and abort handling, the planet catalog, database access, and the
//! startup seeding that imports the habitable planet catalog and historical launches.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod provider;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
