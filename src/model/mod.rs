//! Data transfer objects shared by the API and its consumers.

pub mod api;
pub mod launch;
pub mod planet;
