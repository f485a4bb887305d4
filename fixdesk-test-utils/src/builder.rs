//! Declarative test builder.
//!
//! Configuration methods are queued and executed in order by [`TestBuilder::build`]: tables
//! first, then mock HTTP endpoints.

use mockito::Mock;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, setup::fixdesk_tables, TestSetup};

type Catalog = Vec<(String, String)>;

/// Builder for declarative test initialization.
///
/// ```no_run
/// use fixdesk_test_utils::TestBuilder;
///
/// # async fn example() -> Result<(), fixdesk_test_utils::TestError> {
/// let test = TestBuilder::new()
///     .with_fixdesk_tables()
///     .with_brands_endpoint(&[("daikin", "Daikin")], 1)
///     .build()
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_fixdesk_tables: bool,

    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,
    brands_endpoints: Vec<(Catalog, usize)>,
    models_endpoints: Vec<(String, Catalog, usize)>,
}

fn to_catalog(entries: &[(&str, &str)]) -> Catalog {
    entries
        .iter()
        .map(|(id, name)| (id.to_string(), name.to_string()))
        .collect()
}

fn as_pairs(catalog: &Catalog) -> Vec<(&str, &str)> {
    catalog
        .iter()
        .map(|(id, name)| (id.as_str(), name.as_str()))
        .collect()
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_fixdesk_tables: false,
            mock_builders: Vec::new(),
            brands_endpoints: Vec::new(),
            models_endpoints: Vec::new(),
        }
    }

    /// Create every fixdesk table: notes, analytics, logs and fix steps
    pub fn with_fixdesk_tables(mut self) -> Self {
        self.include_fixdesk_tables = true;
        self
    }

    /// Add a single entity table to the test database
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Mock the device directory brand list, expected to be requested `expected_requests` times
    pub fn with_brands_endpoint(mut self, brands: &[(&str, &str)], expected_requests: usize) -> Self {
        self.brands_endpoints
            .push((to_catalog(brands), expected_requests));
        self
    }

    /// Mock the device directory model list for `brand_id`
    pub fn with_models_endpoint(
        mut self,
        brand_id: &str,
        models: &[(&str, &str)],
        expected_requests: usize,
    ) -> Self {
        self.models_endpoints
            .push((brand_id.to_string(), to_catalog(models), expected_requests));
        self
    }

    /// Add a custom mock endpoint with full access to the mockito server
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Create the configured tables and mock endpoints.
    ///
    /// # Returns
    /// - `Ok(TestSetup)` - Configured test environment
    /// - `Err(TestError::DbErr)` - Database connection or table creation failed
    pub async fn build(self) -> Result<TestSetup, TestError> {
        let mut setup = TestSetup::new().await?;

        let mut all_tables = Vec::new();
        if self.include_fixdesk_tables {
            all_tables.extend(fixdesk_tables());
        }
        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // Custom endpoints first so sequential matching on the same path works
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (brands, expected) in self.brands_endpoints {
            mocks.push(
                setup
                    .directory()
                    .create_brands_endpoint(&as_pairs(&brands), expected),
            );
        }

        for (brand_id, models, expected) in self.models_endpoints {
            mocks.push(setup.directory().create_models_endpoint(
                &brand_id,
                &as_pairs(&models),
                expected,
            ));
        }

        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
