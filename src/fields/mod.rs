// src/fields/mod.rs
pub mod password_generator;
pub mod request;

pub use password_generator::PasswordGenerator;
pub use request::{Model, SubmittedRequest};
