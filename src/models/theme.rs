use crate::errors::{AppError, AppResult};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// A stored theme: flat camelCase fields (`primaryColor`, `gray50Color`,
/// `fontFamilyPrimary`, ...) as returned by the themes endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct ThemeSettings {
    fields: BTreeMap<String, Value>,
}

impl ThemeSettings {
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Err(AppError::Config(format!(
                "theme file not found: {}",
                path.display()
            )));
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn with(mut self, field: &str, value: &str) -> Self {
        self.fields
            .insert(field.to_string(), Value::String(value.to_string()));
        self
    }

    /// Non-empty string value of `field`.
    pub fn get(&self, field: &str) -> Option<&str> {
        match self.fields.get(field) {
            Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim()),
            _ => None,
        }
    }
}
