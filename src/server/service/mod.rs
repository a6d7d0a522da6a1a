//! Service layer for business logic.
//!
//! Services coordinate repositories and the launch history provider. They cover loading the
//! planet catalog, importing launch history, and scheduling and aborting launches.

pub mod launch;
pub mod planet;
