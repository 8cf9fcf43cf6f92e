// src/cli/handlers.rs
use std::collections::HashMap;
use std::sync::Arc;
use anyhow::{anyhow, Context, Result};

use crate::cli::FieldArgs;
use crate::core::config::Config;
use crate::crypto::Argon2Hasher;
use crate::fields::{Model, PasswordGenerator};

// Only options given on the command line end up in the field meta
pub fn build_field(args: &FieldArgs, config: &Config) -> PasswordGenerator {
    let mut field = PasswordGenerator::make(args.name.as_str())
        .with_hasher(Arc::new(Argon2Hasher::from_config(config)));

    if let Some(length) = args.length {
        field = field.length(length);
    }
    if let Some(min_length) = args.min_length {
        field = field.min_length(min_length);
    }
    if let Some(max_length) = args.max_length {
        field = field.max_length(max_length);
    }
    if let Some(prefix) = &args.prefix {
        field = field.prefix(prefix.as_str());
    }
    if let Some(suffix) = &args.suffix {
        field = field.suffix(suffix.as_str());
    }
    if args.exclude_similar {
        field = field.exclude_similar(true);
    }
    if args.exclude_ambiguous {
        field = field.exclude_ambiguous(true);
    }
    if args.show_password {
        field = field.show_password(true);
    }
    if args.hide_all_extras {
        field = field.hide_all_extras(true);
    }

    field
}

pub fn handle_render(args: &FieldArgs, config: &Config) -> Result<String> {
    let field = build_field(args, config);
    serde_json::to_string_pretty(&field).context("Failed to serialize field")
}

pub fn handle_hash(value: &str, config: &Config) -> Result<String> {
    let field = build_field(&FieldArgs { name: "Password".to_string(), ..FieldArgs::default() }, config);

    let submission = HashMap::from([(field.attribute().to_string(), value.to_string())]);
    let mut record: HashMap<String, String> = HashMap::new();
    field.fill(&submission, &mut record)?;

    record
        .attribute(field.attribute())
        .map(String::from)
        .ok_or_else(|| anyhow!("Password was not stored"))
}
