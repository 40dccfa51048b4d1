//! Domain types for the Accounts domain

pub mod entities;
pub mod validation;
