//! Database and HTTP fixtures.
//!
//! `factory` builds standalone mock values. `LaunchFixtures` and `PlanetFixtures` insert
//! fixtures into a [`TestContext`](crate::TestContext) database or register mock endpoints
//! on its server.

pub mod factory;
pub mod launch;
pub mod planet;

use crate::TestContext;

/// Launch fixture helpers bound to a test context
pub struct LaunchFixtures<'a> {
    pub(crate) setup: &'a mut TestContext,
}

/// Planet fixture helpers bound to a test context
pub struct PlanetFixtures<'a> {
    pub(crate) setup: &'a TestContext,
}

impl TestContext {
    pub fn launch(&mut self) -> LaunchFixtures<'_> {
        LaunchFixtures { setup: self }
    }

    pub fn planet(&self) -> PlanetFixtures<'_> {
        PlanetFixtures { setup: self }
    }
}
