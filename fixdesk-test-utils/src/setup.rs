//! Test environment shared by unit and integration tests.
//!
//! A [`TestSetup`] owns an in-memory SQLite database, a mockito server standing in for the
//! device directory and an in-memory session.

use std::sync::Arc;

use mockito::{Mock, Server, ServerGuard};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tower_sessions::{MemoryStore, Session};

use crate::error::TestError;

pub struct TestSetup {
    /// Connection to an in-memory SQLite database
    pub db: DatabaseConnection,
    /// Session backed by an in-memory store
    pub session: Session,
    /// Mock HTTP server for the device directory
    pub server: ServerGuard,
    /// Mocks asserted by [`TestSetup::assert_mocks`]
    pub mocks: Vec<Mock>,
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;

        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestSetup {
            db,
            session,
            server,
            mocks: Vec::new(),
        })
    }

    /// Base URL of the mock device directory
    pub fn server_url(&self) -> String {
        self.server.url()
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}

/// Create statements for every fixdesk table
pub fn fixdesk_tables() -> Vec<TableCreateStatement> {
    let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);

    vec![
        schema.create_table_from_entity(entity::prelude::ErrorNote),
        schema.create_table_from_entity(entity::prelude::AppAnalytics),
        schema.create_table_from_entity(entity::prelude::AppLog),
        schema.create_table_from_entity(entity::prelude::FixStep),
    ]
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        $crate::TestSetup::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = $crate::TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

#[macro_export]
macro_rules! test_setup_with_fixdesk_tables {
    () => {{
        async {
            let setup = $crate::TestSetup::new().await?;
            setup.with_tables($crate::setup::fixdesk_tables()).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }
        .await
    }};
}
