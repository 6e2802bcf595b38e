use std::any::Any;

use crate::design::DesignContext;
use crate::errors::HandleError;

/// The concrete, type-specific object backing a generic item handle.
pub trait ReportItem: Any {
    /// Short type tag, e.g. `"QRCode"`.
    fn item_type(&self) -> &str;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// An opaque reference to a report item's configuration, independent of the
/// item's concrete type. A handle may be unbound, in which case resolving it
/// fails with [`HandleError::Unbound`].
pub struct ItemHandle {
    item: Option<Box<dyn ReportItem>>,
    context: DesignContext,
}

impl ItemHandle {
    pub fn new(item: Box<dyn ReportItem>) -> Self {
        Self {
            item: Some(item),
            context: DesignContext::default(),
        }
    }

    /// A handle with no extension object behind it.
    pub fn unbound() -> Self {
        Self {
            item: None,
            context: DesignContext::default(),
        }
    }

    pub fn with_context(mut self, context: DesignContext) -> Self {
        self.context = context;
        self
    }

    pub fn context(&self) -> &DesignContext {
        &self.context
    }

    pub fn report_item(&self) -> Result<&dyn ReportItem, HandleError> {
        self.item.as_deref().ok_or(HandleError::Unbound)
    }

    pub fn report_item_mut(&mut self) -> Result<&mut dyn ReportItem, HandleError> {
        self.item.as_deref_mut().ok_or(HandleError::Unbound)
    }

    /// Gives the extension object back to the caller, unbinding the handle.
    pub fn into_report_item(self) -> Option<Box<dyn ReportItem>> {
        self.item
    }
}
