//! Entity Module

pub mod event;
pub mod participant;
pub mod registration;
