//! Application Configuration
//!
//! Configuration for the Registry application layer.

use std::fmt;

/// Registry application configuration
#[derive(Clone, Default)]
pub struct RegistryConfig {
    /// Password pepper; must match the one login verifies with
    pub password_pepper: Option<Vec<u8>>,
}

impl RegistryConfig {
    pub fn development() -> Self {
        Self::default()
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

impl fmt::Debug for RegistryConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryConfig")
            .field("password_pepper", &self.password_pepper.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}
