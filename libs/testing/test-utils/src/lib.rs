//! Shared test utilities for domain testing
//!
//! This crate provides reusable test infrastructure for all crates:
//! - `TestDataBuilder`: Deterministic test data generation
//! - `auth`: a fixed security key, token issuer and `Authorization` header
//! - `http`: request builders and JSON body helpers for `oneshot` tests
//! - `assertions`: envelope assertion helpers
//!
//! # Usage
//!
//! ```rust,no_run
//! use test_utils::{TestDataBuilder, http::json_request};
//!
//! let builder = TestDataBuilder::from_test_name("test_create_product");
//! let request = json_request(
//!     "POST",
//!     "/",
//!     &serde_json::json!({ "name": builder.name("product", "main"), "weight": 1.5 }),
//! );
//! ```

pub mod auth;
pub mod http;

/// Builder for test data with deterministic randomization
///
/// This ensures tests are reproducible by deriving every value from a seed.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    /// Create a new builder with a seed (for deterministic tests)
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// This is the recommended way to create a builder for consistent test data.
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_product");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Generate a unique name for testing
    ///
    /// # Arguments
    ///
    /// * `prefix` - The type of resource (e.g., "product", "user")
    /// * `suffix` - A unique identifier within the test (e.g., "main", "backup")
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("my_test");
    /// let name = builder.name("product", "main");
    /// // Returns: "test-product-12345-main"
    /// ```
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }

    /// Unique, syntactically valid e-mail address
    pub fn email(&self, suffix: &str) -> String {
        format!("user-{}-{}@example.com", self.seed, suffix)
    }

    /// Positive weight in `(0, 100]` with two decimals
    pub fn weight(&self) -> f64 {
        ((self.seed % 10_000) + 1) as f64 / 100.0
    }
}

/// Test assertion helpers
pub mod assertions {
    use serde_json::Value;

    /// Assert a failed envelope: `success` false, `data` null and exactly
    /// `expected` as errors.
    pub fn assert_failure_envelope(body: &Value, expected: &[&str]) {
        assert_eq!(body["success"], Value::Bool(false), "body: {}", body);
        assert!(body["data"].is_null(), "data should be null: {}", body);

        let errors: Vec<&str> = body["errors"]
            .as_array()
            .unwrap_or_else(|| panic!("errors should be an array: {}", body))
            .iter()
            .filter_map(Value::as_str)
            .collect();
        assert_eq!(errors, expected, "body: {}", body);
    }

    /// Assert a successful envelope and return its `data`.
    pub fn assert_success_envelope(body: &Value) -> &Value {
        assert_eq!(body["success"], Value::Bool(true), "body: {}", body);
        assert_eq!(body["errors"], Value::Array(vec![]), "body: {}", body);
        &body["data"]
    }

    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }
}
