// src/fields/password_generator.rs
use std::fmt;
use std::sync::Arc;
use serde::Serialize;

use crate::crypto::{self, Argon2Hasher, Hasher};
use crate::fields::request::{Model, SubmittedRequest};
use crate::models::{FieldOptions, OptionKey, OptionValue};

pub const COMPONENT: &str = "password-generator";

pub const DEFAULT_LENGTH: i64 = 16;
pub const DEFAULT_MIN_LENGTH: i64 = 8;
pub const DEFAULT_MAX_LENGTH: i64 = 128;
pub const DEFAULT_TOTAL_LENGTH: i64 = 24;
pub const DEFAULT_INCREMENT_STEPS: i64 = 4;

/// A password input whose UI generates passwords client-side.
///
/// Setters only record meta for the renderer. Nothing is validated here, so
/// a `min_length` above `max_length` is passed through as given.
#[derive(Clone, Serialize)]
pub struct PasswordGenerator {
    component: &'static str,
    name: String,
    attribute: String,
    #[serde(flatten)]
    meta: FieldOptions,
    #[serde(skip)]
    hasher: Arc<dyn Hasher>,
}

impl fmt::Debug for PasswordGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordGenerator")
            .field("name", &self.name)
            .field("attribute", &self.attribute)
            .field("meta", &self.meta)
            .finish_non_exhaustive()
    }
}

impl PasswordGenerator {
    pub fn make(name: impl Into<String>) -> Self {
        let name = name.into();
        let attribute = attribute_from_name(&name);
        Self::make_with_attribute(name, attribute)
    }

    pub fn make_with_attribute(name: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self {
            component: COMPONENT,
            name: name.into(),
            attribute: attribute.into(),
            meta: FieldOptions::new(),
            hasher: Arc::new(Argon2Hasher::default()),
        }
    }

    pub fn with_hasher(mut self, hasher: Arc<dyn Hasher>) -> Self {
        self.hasher = hasher;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    pub fn component(&self) -> &'static str {
        self.component
    }

    pub fn meta(&self) -> &FieldOptions {
        &self.meta
    }

    pub fn with_meta<I>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (OptionKey, OptionValue)>,
    {
        self.meta.merge(entries);
        self
    }

    fn flag(self, key: OptionKey, value: impl Into<Option<bool>>) -> Self {
        let value = value.into().unwrap_or(true);
        self.with_meta([(key, OptionValue::Bool(value))])
    }

    fn number(self, key: OptionKey, value: impl Into<Option<i64>>, default: i64) -> Self {
        let value = value.into().unwrap_or(default);
        self.with_meta([(key, OptionValue::Int(value))])
    }

    fn text<'a>(self, key: OptionKey, value: impl Into<Option<&'a str>>) -> Self {
        let value = value.into().unwrap_or_default();
        self.with_meta([(key, OptionValue::from(value))])
    }

    /// Fill with a generated password when creating the resource.
    pub fn fill_on_create(self, enabled: impl Into<Option<bool>>) -> Self {
        self.flag(OptionKey::FillOnCreate, enabled)
    }

    /// Fill with a generated password when updating the resource.
    pub fn fill_on_update(self, enabled: impl Into<Option<bool>>) -> Self {
        self.flag(OptionKey::FillOnUpdate, enabled)
    }

    pub fn length(self, length: impl Into<Option<i64>>) -> Self {
        self.number(OptionKey::PasswordLength, length, DEFAULT_LENGTH)
    }

    pub fn min_length(self, min_length: impl Into<Option<i64>>) -> Self {
        self.number(OptionKey::PasswordMin, min_length, DEFAULT_MIN_LENGTH)
    }

    pub fn max_length(self, max_length: impl Into<Option<i64>>) -> Self {
        self.number(OptionKey::PasswordMax, max_length, DEFAULT_MAX_LENGTH)
    }

    /// Length of the generated password including prefix and suffix.
    pub fn total_length(self, length: impl Into<Option<i64>>) -> Self {
        self.number(OptionKey::PasswordTotalLength, length, DEFAULT_TOTAL_LENGTH)
    }

    pub fn length_increment_steps(self, steps: impl Into<Option<i64>>) -> Self {
        self.number(OptionKey::PasswordIncrementSteps, steps, DEFAULT_INCREMENT_STEPS)
    }

    /// Drop look-alike characters such as `i l 1 L o 0 O`.
    pub fn exclude_similar(self, exclude: impl Into<Option<bool>>) -> Self {
        self.flag(OptionKey::ExcludeSimilar, exclude)
    }

    pub fn include_similar(self, include: impl Into<Option<bool>>) -> Self {
        let include = include.into().unwrap_or(true);
        self.exclude_similar(!include)
    }

    /// Drop symbols that are easy to misread, e.g. `{ } [ ] ( ) / \ ' " ~ , ; : . < >`.
    pub fn exclude_ambiguous(self, exclude: impl Into<Option<bool>>) -> Self {
        self.flag(OptionKey::ExcludeAmbiguous, exclude)
    }

    pub fn include_ambiguous(self, include: impl Into<Option<bool>>) -> Self {
        let include = include.into().unwrap_or(true);
        self.exclude_ambiguous(!include)
    }

    pub fn show_password(self, show: impl Into<Option<bool>>) -> Self {
        self.flag(OptionKey::ShowPassword, show)
    }

    pub fn hide_password(self, hide: impl Into<Option<bool>>) -> Self {
        let hide = hide.into().unwrap_or(true);
        self.show_password(!hide)
    }

    pub fn regenerate_on_toggle(self, enabled: impl Into<Option<bool>>) -> Self {
        self.flag(OptionKey::RegenerateOnToggle, enabled)
    }

    pub fn prefix<'a>(self, prefix: impl Into<Option<&'a str>>) -> Self {
        self.text(OptionKey::PasswordPrefix, prefix)
    }

    pub fn suffix<'a>(self, suffix: impl Into<Option<&'a str>>) -> Self {
        self.text(OptionKey::PasswordSuffix, suffix)
    }

    pub fn postfix<'a>(self, postfix: impl Into<Option<&'a str>>) -> Self {
        self.suffix(postfix)
    }

    pub fn lowercase(self, enabled: impl Into<Option<bool>>) -> Self {
        self.flag(OptionKey::LowercaseToggled, enabled)
    }

    pub fn uppercase(self, enabled: impl Into<Option<bool>>) -> Self {
        self.flag(OptionKey::UppercaseToggled, enabled)
    }

    pub fn numbers(self, enabled: impl Into<Option<bool>>) -> Self {
        self.flag(OptionKey::NumbersToggled, enabled)
    }

    pub fn symbols(self, enabled: impl Into<Option<bool>>) -> Self {
        self.flag(OptionKey::SymbolsToggled, enabled)
    }

    pub fn hide_show_password_toggle(self, hide: impl Into<Option<bool>>) -> Self {
        self.flag(OptionKey::HideShowPasswordToggle, hide)
    }

    pub fn hide_options_toggles(self, hide: impl Into<Option<bool>>) -> Self {
        self.flag(OptionKey::HideOptionsToggles, hide)
    }

    pub fn hide_length_input(self, hide: impl Into<Option<bool>>) -> Self {
        self.flag(OptionKey::HidePasswordLengthInput, hide)
    }

    pub fn hide_copy_password_button(self, hide: impl Into<Option<bool>>) -> Self {
        self.flag(OptionKey::HideCopyPasswordButton, hide)
    }

    pub fn hide_regenerate_button(self, hide: impl Into<Option<bool>>) -> Self {
        self.flag(OptionKey::HideRegenerateButton, hide)
    }

    pub fn hide_all_extras(self, hide: impl Into<Option<bool>>) -> Self {
        let hide = hide.into().unwrap_or(true);
        self.with_meta(OptionKey::HIDE_EXTRAS.map(|key| (key, OptionValue::Bool(hide))))
    }

    /// Hash the submitted value into `model` if the submission carries it.
    ///
    /// Returns whether the model was written. A key submitted without a value
    /// hashes the empty string.
    pub fn fill_attribute_from_request<R, M>(
        &self,
        request: &R,
        request_attribute: &str,
        model: &mut M,
        attribute: &str,
    ) -> crypto::Result<bool>
    where
        R: SubmittedRequest + ?Sized,
        M: Model + ?Sized,
    {
        if !request.exists(request_attribute) {
            log::debug!("'{}' not submitted, leaving '{}' unchanged", request_attribute, attribute);
            return Ok(false);
        }

        let plain = request.get(request_attribute).unwrap_or_default();
        let hashed = self.hasher.make(&plain)?;
        model.set_attribute(attribute, hashed);

        log::debug!("Stored hashed '{}' into '{}'", request_attribute, attribute);
        Ok(true)
    }

    pub fn fill<R, M>(&self, request: &R, model: &mut M) -> crypto::Result<bool>
    where
        R: SubmittedRequest + ?Sized,
        M: Model + ?Sized,
    {
        self.fill_attribute_from_request(request, &self.attribute, model, &self.attribute)
    }

    pub fn json_serialize(&self) -> serde_json::Value {
        // Every field is a string or a scalar map value, so this cannot fail
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

fn attribute_from_name(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}
