// src/fields/request.rs
use std::collections::HashMap;
use serde_json::{Map, Value};

/// Read access to a submitted form.
pub trait SubmittedRequest {
    /// Whether the key was part of the submission at all.
    fn exists(&self, key: &str) -> bool;

    fn get(&self, key: &str) -> Option<String>;
}

/// Write access to the record a form fills.
pub trait Model {
    fn set_attribute(&mut self, attribute: &str, value: String);

    fn attribute(&self, attribute: &str) -> Option<&str>;
}

impl SubmittedRequest for HashMap<String, String> {
    fn exists(&self, key: &str) -> bool {
        self.contains_key(key)
    }

    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl SubmittedRequest for Map<String, Value> {
    fn exists(&self, key: &str) -> bool {
        self.contains_key(key)
    }

    fn get(&self, key: &str) -> Option<String> {
        match Map::get(self, key)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

impl Model for HashMap<String, String> {
    fn set_attribute(&mut self, attribute: &str, value: String) {
        self.insert(attribute.to_string(), value);
    }

    fn attribute(&self, attribute: &str) -> Option<&str> {
        HashMap::get(self, attribute).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_submission_distinguishes_null_from_missing() {
        let submission = json!({ "password": null, "length": 16, "name": "admin" });
        let submission = submission.as_object().unwrap();

        assert!(submission.exists("password"));
        assert_eq!(SubmittedRequest::get(submission, "password"), None);
        assert!(!submission.exists("confirm"));
        assert_eq!(SubmittedRequest::get(submission, "length"), Some("16".to_string()));
        assert_eq!(SubmittedRequest::get(submission, "name"), Some("admin".to_string()));
    }

    #[test]
    fn test_map_model_overwrites_attribute() {
        let mut model: HashMap<String, String> = HashMap::new();
        assert_eq!(model.attribute("password"), None);

        model.set_attribute("password", "first".to_string());
        model.set_attribute("password", "second".to_string());
        assert_eq!(model.attribute("password"), Some("second"));
    }
}
