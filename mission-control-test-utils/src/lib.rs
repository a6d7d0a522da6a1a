//! Shared test utilities for Mission Control.
//!
//! Provides an in-memory SQLite database, a mock launch history server and fixtures for
//! planets and launches. Tests configure their environment with [`TestBuilder`] or the
//! [`test_setup_with_tables!`] macro, then run against the resulting [`TestContext`].

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        fixtures::factory, test_setup_with_tables, TestBuilder, TestContext, TestError,
    };
}

/// Creates a [`TestContext`] with tables for the provided entities.
///
/// ```ignore
/// let test = test_setup_with_tables!(entity::prelude::Planet, entity::prelude::Launch)?;
/// ```
#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        $crate::TestContext::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = $crate::TestContext::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::TestError>(setup)
        }.await
    }};
}
