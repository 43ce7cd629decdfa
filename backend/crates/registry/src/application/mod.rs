//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod events;
pub mod participants;
pub mod registrations;

// Re-exports
pub use config::RegistryConfig;
pub use events::EventUseCases;
pub use participants::{CreateParticipantInput, ParticipantUseCases};
pub use registrations::RegistrationUseCases;
