//! Value Object Module

pub mod timestamp;
