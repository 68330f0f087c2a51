use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Rejects values made only of whitespace.
fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// User entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Server-assigned id, 0 until stored
    #[schema(example = 1)]
    pub id: u64,
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    /// User email (unique, case-insensitive)
    #[schema(example = "ada@example.com")]
    pub email: String,
}

/// Body of `POST /users` and `PUT /users`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UserInput {
    #[serde(default)]
    #[schema(example = 0)]
    pub id: u64,

    #[validate(
        required(message = "Name is required"),
        custom(function = "validate_not_blank", message = "Name is required")
    )]
    #[schema(example = "Ada Lovelace")]
    pub name: Option<String>,

    #[validate(
        required(message = "Email is required"),
        custom(function = "validate_not_blank", message = "Email is required"),
        email(message = "Email must be a valid address"),
        length(max = 255, message = "Email must be at most 255 characters")
    )]
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
}

impl UserInput {
    pub fn new(id: u64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }

    /// Trimmed name, `None` when missing or blank.
    pub fn name(&self) -> Option<&str> {
        non_blank(self.name.as_deref())
    }

    /// Trimmed email, `None` when missing or blank.
    pub fn email(&self) -> Option<&str> {
        non_blank(self.email.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

impl From<UserInput> for User {
    fn from(input: UserInput) -> Self {
        Self {
            id: input.id,
            name: input.name().unwrap_or_default().to_string(),
            email: input.email().unwrap_or_default().to_string(),
        }
    }
}
