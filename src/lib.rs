//! Password-generator form field for admin panels.
//!
//! The field records display options for a client-side password generator
//! and hashes the submitted password into the model on save.

pub mod api;
pub mod cli;
pub mod core;
pub mod crypto;
pub mod fields;
pub mod models;

pub use crate::core::config::Config;
pub use crate::crypto::{Argon2Hasher, CryptoError, Hasher};
pub use crate::fields::{Model, PasswordGenerator, SubmittedRequest};
pub use crate::models::{FieldOptions, OptionKey, OptionValue};
