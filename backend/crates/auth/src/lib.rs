//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Credential entity, email value object, repository trait
//! - `application/` - Login and token verification use cases
//! - `infra/` - PostgreSQL credential lookup
//! - `presentation/` - Login handler, bearer-token middleware, router
//!
//! ## Features
//! - Participant login with email + password
//! - Stateless HS256 session tokens valid for one hour
//! - Bearer-token gate for protected routes
//!
//! ## Security Model
//! - Passwords stored as Argon2id hashes, optionally peppered
//! - Tokens carry participant id and email; nothing is kept server-side
//! - Missing token is 401, rejected token is 403

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use domain::entity::identity::Identity;
pub use domain::value_object::email::{Email, EmailError};
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgAuthRepository;
pub use presentation::middleware::{Authenticated, TokenGate, require_bearer_token};
pub use presentation::router::{auth_router, auth_router_generic};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}
