use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::SemanticResult;
use crate::item::QrCodeItem;

/// Expression-provider context for a report design: the column binding names
/// an expression may refer to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DesignContext {
    pub bindings: Vec<String>,
}

impl DesignContext {
    pub fn new(bindings: Vec<String>) -> Self {
        Self { bindings }
    }

    pub fn with_binding(mut self, name: impl Into<String>) -> Self {
        self.bindings.push(name.into());
        self
    }
}

/// A report design holding the QR-code items of one report file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDesign {
    pub name: String,
    pub items: Vec<QrCodeItem>,
    #[serde(default)]
    pub context: DesignContext,
}

impl ReportDesign {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
            context: DesignContext::default(),
        }
    }

    pub fn add_item(&mut self, item: QrCodeItem) {
        self.items.push(item);
    }

    pub fn remove_item(&mut self, id: Uuid) {
        self.items.retain(|i| i.id != id);
    }

    pub fn get_item(&self, id: Uuid) -> Option<&QrCodeItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn get_item_mut(&mut self, id: Uuid) -> Option<&mut QrCodeItem> {
        self.items.iter_mut().find(|i| i.id == id)
    }

    pub fn get_item_by_name(&self, name: &str) -> Option<&QrCodeItem> {
        self.items.iter().find(|i| i.name.eq_ignore_ascii_case(name))
    }

    /// Validates every item against the model's property table.
    pub fn validate(&self) -> SemanticResult<()> {
        for item in &self.items {
            item.validate()?;
        }
        Ok(())
    }
}
