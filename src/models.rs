// src/models.rs
use std::collections::BTreeMap;
use std::fmt;
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

/// Option keys understood by the password-generator component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum OptionKey {
    FillOnCreate,
    FillOnUpdate,
    PasswordLength,
    PasswordMin,
    PasswordMax,
    PasswordTotalLength,
    PasswordIncrementSteps,
    ExcludeSimilar,
    ExcludeAmbiguous,
    ShowPassword,
    RegenerateOnToggle,
    PasswordPrefix,
    PasswordSuffix,
    LowercaseToggled,
    UppercaseToggled,
    NumbersToggled,
    SymbolsToggled,
    HideShowPasswordToggle,
    HideOptionsToggles,
    HidePasswordLengthInput,
    HideCopyPasswordButton,
    HideRegenerateButton,
}

impl OptionKey {
    /// The UI extras switched together by `hide_all_extras`.
    pub const HIDE_EXTRAS: [OptionKey; 5] = [
        OptionKey::HideShowPasswordToggle,
        OptionKey::HideOptionsToggles,
        OptionKey::HidePasswordLengthInput,
        OptionKey::HideCopyPasswordButton,
        OptionKey::HideRegenerateButton,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OptionKey::FillOnCreate => "fillOnCreate",
            OptionKey::FillOnUpdate => "fillOnUpdate",
            OptionKey::PasswordLength => "passwordLength",
            OptionKey::PasswordMin => "passwordMin",
            OptionKey::PasswordMax => "passwordMax",
            OptionKey::PasswordTotalLength => "passwordTotalLength",
            OptionKey::PasswordIncrementSteps => "passwordIncrementSteps",
            OptionKey::ExcludeSimilar => "excludeSimilar",
            OptionKey::ExcludeAmbiguous => "excludeAmbiguous",
            OptionKey::ShowPassword => "showPassword",
            OptionKey::RegenerateOnToggle => "regenerateOnToggle",
            OptionKey::PasswordPrefix => "passwordPrefix",
            OptionKey::PasswordSuffix => "passwordSuffix",
            OptionKey::LowercaseToggled => "lowercaseToggled",
            OptionKey::UppercaseToggled => "uppercaseToggled",
            OptionKey::NumbersToggled => "numbersToggled",
            OptionKey::SymbolsToggled => "symbolsToggled",
            OptionKey::HideShowPasswordToggle => "hideShowPasswordToggle",
            OptionKey::HideOptionsToggles => "hideOptionsToggles",
            OptionKey::HidePasswordLengthInput => "hidePasswordLengthInput",
            OptionKey::HideCopyPasswordButton => "hideCopyPasswordButton",
            OptionKey::HideRegenerateButton => "hideRegenerateButton",
        }
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Int(value)
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Str(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Str(value.to_string())
    }
}

/// Field meta handed to the renderer. One value per key, last write wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldOptions {
    entries: BTreeMap<OptionKey, OptionValue>,
}

impl FieldOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: OptionKey, value: impl Into<OptionValue>) {
        self.entries.insert(key, value.into());
    }

    // Write several keys at once
    pub fn merge<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (OptionKey, OptionValue)>,
    {
        self.entries.extend(entries);
    }

    pub fn get(&self, key: OptionKey) -> Option<&OptionValue> {
        self.entries.get(&key)
    }

    pub fn get_bool(&self, key: OptionKey) -> Option<bool> {
        match self.entries.get(&key) {
            Some(OptionValue::Bool(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn get_int(&self, key: OptionKey) -> Option<i64> {
        match self.entries.get(&key) {
            Some(OptionValue::Int(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn get_str(&self, key: OptionKey) -> Option<&str> {
        match self.entries.get(&key) {
            Some(OptionValue::Str(value)) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&OptionKey, &OptionValue)> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_serialize_to_renderer_names() {
        for key in OptionKey::HIDE_EXTRAS {
            let json = serde_json::to_value(key).unwrap();
            assert_eq!(json, serde_json::Value::String(key.as_str().to_string()));
        }
        assert_eq!(
            serde_json::to_value(OptionKey::PasswordIncrementSteps).unwrap(),
            "passwordIncrementSteps"
        );
        assert_eq!(OptionKey::HidePasswordLengthInput.to_string(), "hidePasswordLengthInput");
    }

    #[test]
    fn test_set_overwrites_previous_value() {
        let mut options = FieldOptions::new();
        options.set(OptionKey::PasswordLength, 10);
        options.set(OptionKey::PasswordLength, 20);

        assert_eq!(options.len(), 1);
        assert_eq!(options.get_int(OptionKey::PasswordLength), Some(20));
    }

    #[test]
    fn test_typed_getters_reject_other_types() {
        let mut options = FieldOptions::new();
        options.set(OptionKey::PasswordPrefix, "pre-");

        assert_eq!(options.get_str(OptionKey::PasswordPrefix), Some("pre-"));
        assert_eq!(options.get_bool(OptionKey::PasswordPrefix), None);
        assert_eq!(options.get_int(OptionKey::PasswordPrefix), None);
        assert!(options.get(OptionKey::PasswordSuffix).is_none());
    }

    #[test]
    fn test_serializes_as_flat_object() {
        let mut options = FieldOptions::new();
        options.set(OptionKey::ShowPassword, true);
        options.set(OptionKey::PasswordMax, 128);
        options.set(OptionKey::PasswordSuffix, "!");

        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "showPassword": true,
                "passwordMax": 128,
                "passwordSuffix": "!",
            })
        );
    }
}
