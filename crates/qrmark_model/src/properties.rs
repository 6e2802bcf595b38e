use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::errors::SemanticError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    String(String),
    Integer(i32),
}

impl PropertyValue {
    pub fn as_string(&self) -> Option<&str> {
        match self {
            PropertyValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            PropertyValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn kind(&self) -> PropertyKind {
        match self {
            PropertyValue::String(_) => PropertyKind::String,
            PropertyValue::Integer(_) => PropertyKind::Integer,
        }
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        PropertyValue::String(s)
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue::String(s.to_string())
    }
}

impl From<i32> for PropertyValue {
    fn from(i: i32) -> Self {
        PropertyValue::Integer(i)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyKind {
    String,
    Integer,
}

impl PropertyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyKind::String => "string",
            PropertyKind::Integer => "integer",
        }
    }
}

/// Value constraint checked by the model whenever a property is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyConstraint {
    None,
    /// Inclusive integer range.
    IntRange { min: i32, max: i32 },
    /// Must contain at least one non-whitespace character.
    NonBlank,
}

/// Static metadata for one model property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyDef {
    pub name: &'static str,
    pub kind: PropertyKind,
    pub constraint: PropertyConstraint,
}

impl PropertyDef {
    pub fn validate(&self, value: &PropertyValue) -> Result<(), SemanticError> {
        if value.kind() != self.kind {
            return Err(SemanticError::WrongKind {
                name: self.name.to_string(),
                expected: self.kind.as_str(),
            });
        }
        match self.constraint {
            PropertyConstraint::None => Ok(()),
            PropertyConstraint::IntRange { min, max } => {
                // kind already checked above
                let v = value.as_int().unwrap_or(min);
                if v < min || v > max {
                    return Err(SemanticError::OutOfRange {
                        name: self.name.to_string(),
                        value: v,
                        min,
                        max,
                    });
                }
                Ok(())
            }
            PropertyConstraint::NonBlank => {
                let s = value.as_string().unwrap_or_default();
                if s.trim().is_empty() {
                    return Err(SemanticError::Blank {
                        name: self.name.to_string(),
                    });
                }
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyBag {
    properties: HashMap<String, PropertyValue>,
}

impl PropertyBag {
    pub fn new() -> Self {
        Self {
            properties: HashMap::new(),
        }
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<PropertyValue>) {
        self.properties.insert(key.into(), value.into());
    }

    pub fn set_raw(&mut self, key: impl Into<String>, value: PropertyValue) {
        self.properties.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }

    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(|v| v.as_string())
    }

    pub fn get_int(&self, key: &str) -> Option<i32> {
        self.get(key).and_then(|v| v.as_int())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &PropertyValue)> {
        self.properties.iter()
    }
}
