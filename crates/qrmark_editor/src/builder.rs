use qrmark_model::{DesignContext, HandleError, ItemHandle, QrCodeItem};

use crate::dialog::{DialogResult, QrCodeEditor};

/// A modal-dialog host. `run_modal` drives the editor's event loop and only
/// returns once the dialog has closed.
pub trait EditorHost {
    fn run_modal(
        &mut self,
        editor: &mut QrCodeEditor,
        item: &mut QrCodeItem,
        context: &DesignContext,
    ) -> DialogResult;
}

/// Builder entry point: opens the property editor for the item behind
/// `handle`.
///
/// A handle whose extension object is not a QR-code item yields
/// `Ok(Cancelled)` without opening anything. A handle that cannot resolve its
/// extension object at all is a caller error and is returned as such.
pub fn open_editor(
    handle: &mut ItemHandle,
    host: &mut dyn EditorHost,
) -> Result<DialogResult, HandleError> {
    let context = handle.context().clone();
    let item = handle.report_item_mut()?;
    let item_type = item.item_type().to_string();

    match item.as_any_mut().downcast_mut::<QrCodeItem>() {
        Some(qr_item) => {
            let mut editor = QrCodeEditor::for_item(qr_item);
            Ok(host.run_modal(&mut editor, qr_item, &context))
        }
        None => {
            tracing::debug!(%item_type, "not a QRCode item; no editor opened");
            Ok(DialogResult::Cancelled)
        }
    }
}
