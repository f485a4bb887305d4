//! Mock device directory endpoints.

use mockito::Mock;
use serde_json::json;

use crate::TestSetup;

impl TestSetup {
    pub fn directory<'a>(&'a mut self) -> DirectoryFixtures<'a> {
        DirectoryFixtures { setup: self }
    }
}

pub struct DirectoryFixtures<'a> {
    setup: &'a mut TestSetup,
}

fn catalog_body(entries: &[(&str, &str)]) -> String {
    let entries: Vec<_> = entries
        .iter()
        .map(|(id, name)| json!({ "id": id, "name": name }))
        .collect();

    serde_json::Value::Array(entries).to_string()
}

impl<'a> DirectoryFixtures<'a> {
    /// Create a mock `GET /brands` endpoint returning `(id, name)` pairs.
    ///
    /// The mock verifies it was called exactly `expected_requests` times.
    pub fn create_brands_endpoint(
        &mut self,
        brands: &[(&str, &str)],
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", "/brands")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(catalog_body(brands))
            .expect(expected_requests)
            .create()
    }

    /// Create a mock `GET /brands/{brand_id}/models` endpoint returning `(id, name)` pairs
    pub fn create_models_endpoint(
        &mut self,
        brand_id: &str,
        models: &[(&str, &str)],
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/brands/{}/models", brand_id);

        self.setup
            .server
            .mock("GET", url.as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(catalog_body(models))
            .expect(expected_requests)
            .create()
    }

    /// Create a mock `GET /brands` endpoint that answers with an error status
    pub fn create_failing_brands_endpoint(&mut self, status: usize, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("GET", "/brands")
            .with_status(status)
            .expect(expected_requests)
            .create()
    }
}
