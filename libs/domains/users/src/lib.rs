//! Users Domain
//!
//! CRUD for users kept in process memory. Email addresses are unique,
//! compared case-insensitively.
//!
//! Layout mirrors `domain_products`: handlers → service → repository.

pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod repository;
pub mod service;

pub use error::{UserError, UserResult};
pub use handlers::ApiDoc;
pub use memory::InMemoryUserRepository;
pub use models::{User, UserInput};
pub use repository::UserRepository;
pub use service::UserService;
