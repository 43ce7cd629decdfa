//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id) with a minimal length policy
//! - Signed, time-limited tokens (HS256 JWT)

pub mod password;
pub mod token;
