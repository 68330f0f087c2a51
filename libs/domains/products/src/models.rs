use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Rejects names made only of whitespace.
fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Server-assigned id, 0 until stored
    #[schema(example = 1)]
    pub id: u64,
    #[schema(example = "Widget")]
    pub name: String,
    /// Weight, always greater than 0
    #[schema(example = 3.12)]
    pub weight: f64,
}

impl Product {
    pub fn new(name: impl Into<String>, weight: f64) -> Self {
        Self {
            id: 0,
            name: name.into(),
            weight,
        }
    }
}

/// Body of `POST /products` and `PUT /products`.
///
/// `id` is ignored on create and selects the product on update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct ProductInput {
    #[serde(default)]
    #[schema(example = 0)]
    pub id: u64,

    #[validate(
        required(message = "Name is required"),
        custom(function = "validate_not_blank", message = "Name is required")
    )]
    #[schema(example = "Widget")]
    pub name: Option<String>,

    #[serde(default)]
    #[validate(range(exclusive_min = 0.0, message = "Weight must be greater than 0"))]
    #[schema(example = 3.12)]
    pub weight: f64,
}

impl ProductInput {
    pub fn new(id: u64, name: impl Into<String>, weight: f64) -> Self {
        Self {
            id,
            name: Some(name.into()),
            weight,
        }
    }

    /// Trimmed name, `None` when missing or blank.
    pub fn name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

impl From<ProductInput> for Product {
    fn from(input: ProductInput) -> Self {
        let name = input.name().unwrap_or_default().to_string();
        Self {
            id: input.id,
            name,
            weight: input.weight,
        }
    }
}

impl From<Product> for ProductInput {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: Some(product.name),
            weight: product.weight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input() {
        assert!(ProductInput::new(0, "Widget", 3.12).validate().is_ok());
    }

    #[test]
    fn test_missing_and_empty_name_fail() {
        let missing = ProductInput {
            name: None,
            weight: 1.0,
            ..Default::default()
        };
        let empty = ProductInput::new(0, "", 1.0);
        let blank = ProductInput::new(0, " \t ", 1.0);

        for input in [missing, empty, blank] {
            let errors = input.validate().unwrap_err();
            let name_errors = &errors.field_errors()["name"];
            assert_eq!(name_errors.len(), 1);
            assert_eq!(
                name_errors[0].message.as_deref(),
                Some("Name is required")
            );
        }
    }

    #[test]
    fn test_non_positive_weight_fails() {
        for weight in [0.0, -1.5] {
            let errors = ProductInput::new(0, "Widget", weight)
                .validate()
                .unwrap_err();
            assert!(errors.field_errors().contains_key("weight"));
        }
    }

    #[test]
    fn test_name_is_trimmed_on_conversion() {
        let product = Product::from(ProductInput::new(4, "  Widget ", 2.0));
        assert_eq!(product, Product { id: 4, name: "Widget".into(), weight: 2.0 });
    }

    #[test]
    fn test_blank_name_accessor() {
        assert_eq!(ProductInput::new(0, "   ", 1.0).name(), None);
    }

    #[test]
    fn test_input_defaults_when_fields_absent() {
        let input: ProductInput = serde_json::from_str(r#"{"name":"Widget"}"#).unwrap();
        assert_eq!(input.id, 0);
        assert_eq!(input.weight, 0.0);
    }
}
