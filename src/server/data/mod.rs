//! Data access layer repositories.
//!
//! This module contains all database repository implementations for the application.
//! Repositories provide an abstraction layer over database operations and are generic over
//! [`sea_orm::ConnectionTrait`] so they work with pooled connections and transactions alike.

pub mod launch;
pub mod planet;
