//! Registry Backend Module
//!
//! Events, participants, and the registrations linking them.
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, timestamp value object, repository traits
//! - `application/` - Use cases per aggregate, config
//! - `infra/` - PostgreSQL implementation
//! - `presentation/` - DTOs, handlers, router
//!
//! Write routes and most reads sit behind `auth::require_bearer_token`;
//! participant sign-up, event reads and the two filtered registration
//! lists are public.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::RegistryConfig;
pub use error::{RegistryError, RegistryResult};
pub use infra::postgres::PgRegistryRepository;
pub use presentation::router::{registry_router, registry_router_generic};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

#[cfg(test)]
mod tests;
