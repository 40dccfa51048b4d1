//! Repository implementations for the Accounts domain

pub mod users;

pub use users::UserRepository;
