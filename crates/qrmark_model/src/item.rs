use serde::{Deserialize, Serialize};
use std::any::Any;
use uuid::Uuid;

use crate::errors::{SemanticError, SemanticResult};
use crate::handle::ReportItem;
use crate::properties::{PropertyBag, PropertyConstraint, PropertyDef, PropertyKind, PropertyValue};

pub const MIN_DOTS_WIDTH: i32 = 21;
pub const MAX_DOTS_WIDTH: i32 = 2000;

pub const DEFAULT_DOTS_WIDTH: i32 = 200;
pub const DEFAULT_ENCODING: &str = "UTF-8";

pub const PROP_TEXT: &str = "Text";
pub const PROP_DOTS_WIDTH: &str = "DotsWidth";
pub const PROP_ENCODING: &str = "Encoding";

pub const QRCODE_ITEM_TYPE: &str = "QRCode";

const PROPERTY_DEFS: &[PropertyDef] = &[
    PropertyDef {
        name: PROP_TEXT,
        kind: PropertyKind::String,
        constraint: PropertyConstraint::None,
    },
    PropertyDef {
        name: PROP_DOTS_WIDTH,
        kind: PropertyKind::Integer,
        constraint: PropertyConstraint::IntRange {
            min: MIN_DOTS_WIDTH,
            max: MAX_DOTS_WIDTH,
        },
    },
    PropertyDef {
        name: PROP_ENCODING,
        kind: PropertyKind::String,
        constraint: PropertyConstraint::NonBlank,
    },
];

fn property_def(name: &str) -> Option<&'static PropertyDef> {
    PROPERTY_DEFS.iter().find(|d| d.name == name)
}

/// A QR-code report item: a text expression, a width in dots, and a
/// character-encoding label. All writes go through the property table, so an
/// item that accepted a write is always well-formed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QrCodeItem {
    pub id: Uuid,
    pub name: String,
    properties: PropertyBag,
}

impl QrCodeItem {
    pub fn new(name: impl Into<String>) -> Self {
        let mut properties = PropertyBag::new();
        properties.set(PROP_TEXT, "");
        properties.set(PROP_DOTS_WIDTH, DEFAULT_DOTS_WIDTH);
        properties.set(PROP_ENCODING, DEFAULT_ENCODING);

        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            properties,
        }
    }

    pub fn text(&self) -> &str {
        self.properties.get_string(PROP_TEXT).unwrap_or("")
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> SemanticResult<()> {
        self.set_property(PROP_TEXT, PropertyValue::String(text.into()))
    }

    pub fn dots_width(&self) -> i32 {
        self.properties
            .get_int(PROP_DOTS_WIDTH)
            .unwrap_or(DEFAULT_DOTS_WIDTH)
    }

    pub fn set_dots_width(&mut self, width: i32) -> SemanticResult<()> {
        self.set_property(PROP_DOTS_WIDTH, PropertyValue::Integer(width))
    }

    pub fn encoding(&self) -> &str {
        self.properties
            .get_string(PROP_ENCODING)
            .unwrap_or(DEFAULT_ENCODING)
    }

    pub fn set_encoding(&mut self, encoding: impl Into<String>) -> SemanticResult<()> {
        self.set_property(PROP_ENCODING, PropertyValue::String(encoding.into()))
    }

    /// Validated property write. A rejected write leaves the item unchanged.
    pub fn set_property(&mut self, name: &str, value: PropertyValue) -> SemanticResult<()> {
        let def = property_def(name)
            .ok_or_else(|| SemanticError::UnknownProperty(name.to_string()))?;
        def.validate(&value)?;
        self.properties.set_raw(name, value);
        Ok(())
    }

    pub fn properties(&self) -> &PropertyBag {
        &self.properties
    }

    /// Re-checks the stored properties against the property table. Used when
    /// an item arrives from outside the setters, e.g. a loaded design file.
    pub fn validate(&self) -> SemanticResult<()> {
        for def in PROPERTY_DEFS {
            if let Some(value) = self.properties.get(def.name) {
                def.validate(value)?;
            }
        }
        Ok(())
    }
}

impl ReportItem for QrCodeItem {
    fn item_type(&self) -> &str {
        QRCODE_ITEM_TYPE
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
