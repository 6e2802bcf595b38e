// App state management using Dioxus signals
use dioxus::prelude::*;
use qrmark_editor::{open_editor, DialogResult, EditorHost, QrCodeEditor};
use qrmark_model::{serialization, DesignContext, ItemHandle, QrCodeItem, ReportDesign};
use rfd::FileDialog;
use std::path::PathBuf;
use uuid::Uuid;

/// One open editor dialog, bound to the item it was opened for.
#[derive(Clone, PartialEq)]
pub struct EditorSession {
    pub item_id: Uuid,
    pub editor: QrCodeEditor,
}

/// How the user dismissed the shell's editor dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShellAction {
    Confirm,
    Cancel,
}

/// The shell's modal host. Dioxus has no nested modal loop, so by the time a
/// closing button fires the dialog component has already gathered the user's
/// edits into a [`QrCodeEditor`]; `run_modal` replays them onto the editor
/// the entry point opened and applies the closing action.
struct ShellHost {
    edits: QrCodeEditor,
    action: ShellAction,
    editor_still_open: bool,
}

impl ShellHost {
    fn new(edits: QrCodeEditor, action: ShellAction) -> Self {
        Self {
            edits,
            action,
            editor_still_open: false,
        }
    }
}

impl EditorHost for ShellHost {
    fn run_modal(
        &mut self,
        editor: &mut QrCodeEditor,
        item: &mut QrCodeItem,
        _context: &DesignContext,
    ) -> DialogResult {
        editor.set_text(self.edits.text());
        editor.dots_width_mut().set_text(self.edits.dots_width().text());
        editor.set_encoding(self.edits.encoding());

        match self.action {
            ShellAction::Confirm => {
                let _ = editor.confirm(item);
            }
            ShellAction::Cancel => editor.cancel(),
        }

        self.editor_still_open = editor.is_open();
        editor.result().unwrap_or(DialogResult::Cancelled)
    }
}

#[derive(Clone, Copy)]
pub struct AppState {
    pub design: Signal<Option<ReportDesign>>,
    pub current_design_path: Signal<Option<PathBuf>>,
    pub selected_item: Signal<Option<Uuid>>,
    pub editor: Signal<Option<EditorSession>>,
    /// In-progress text of the nested expression builder; `None` when closed.
    pub expression_draft: Signal<Option<String>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            design: Signal::new(None),
            current_design_path: Signal::new(None),
            selected_item: Signal::new(None),
            editor: Signal::new(None),
            expression_draft: Signal::new(None),
        }
    }

    pub fn new_design(&self) {
        let mut design_signal = self.design;
        let mut design_write = design_signal.write();
        let mut path_signal = self.current_design_path;
        let mut path_write = path_signal.write();

        let mut design = ReportDesign::new("Design1");
        design.context = DesignContext::default()
            .with_binding("ORDER_ID")
            .with_binding("CUSTOMER")
            .with_binding("TOTAL");
        let item = QrCodeItem::new("QRCode1");
        let first_id = item.id;
        design.add_item(item);

        *design_write = Some(design);
        *path_write = None;

        let mut selected = self.selected_item;
        selected.set(Some(first_id));
        let mut editor = self.editor;
        editor.set(None);
    }

    pub fn open_design_dialog(&self) {
        if let Some(path) = FileDialog::new()
            .add_filter("qrmark Design", &["json"])
            .pick_file()
        {
            match serialization::load_design(&path) {
                Ok(design) => {
                    let first_id = design.items.first().map(|i| i.id);

                    let mut design_signal = self.design;
                    let mut design_write = design_signal.write();
                    let mut path_signal = self.current_design_path;
                    let mut path_write = path_signal.write();

                    *design_write = Some(design);
                    *path_write = Some(path);

                    let mut selected = self.selected_item;
                    selected.set(first_id);
                    let mut editor = self.editor;
                    editor.set(None);
                }
                Err(e) => {
                    tracing::error!(error = %e, "failed to load design");
                }
            }
        }
    }

    pub fn save_design(&self) {
        let design_read = self.design.read();
        let Some(design) = design_read.as_ref() else { return };
        let current_path = self.current_design_path.read().clone();

        if let Some(path) = current_path {
            if let Err(e) = serialization::save_design(design, &path) {
                tracing::error!(error = %e, "failed to save design");
            }
        } else {
            self.save_design_as();
        }
    }

    pub fn save_design_as(&self) {
        let design_read = self.design.read();
        let Some(design) = design_read.as_ref() else { return };

        if let Some(path) = FileDialog::new()
            .set_file_name(&format!("{}.json", design.name))
            .add_filter("qrmark Design", &["json"])
            .save_file()
        {
            if let Err(e) = serialization::save_design(design, &path) {
                tracing::error!(error = %e, "failed to save design");
                return;
            }
            let mut path_signal = self.current_design_path;
            let mut path_write = path_signal.write();
            *path_write = Some(path);
        }
    }

    pub fn add_item(&self) {
        let mut design_signal = self.design;
        let mut design_write = design_signal.write();

        if let Some(design) = design_write.as_mut() {
            let mut counter = 1;
            let mut name = format!("QRCode{}", counter);
            while design.get_item_by_name(&name).is_some() {
                counter += 1;
                name = format!("QRCode{}", counter);
            }

            let item = QrCodeItem::new(name);
            let id = item.id;
            design.add_item(item);

            let mut selected = self.selected_item;
            selected.set(Some(id));
        }
    }

    pub fn select_item(&self, id: Uuid) {
        let mut selected = self.selected_item;
        selected.set(Some(id));
    }

    /// Opens the property editor on a snapshot of the item's current values.
    pub fn open_editor_for(&self, id: Uuid) {
        let design_read = self.design.read();
        let Some(design) = design_read.as_ref() else { return };
        let Some(item) = design.get_item(id) else { return };

        let session = EditorSession {
            item_id: id,
            editor: QrCodeEditor::for_item(item),
        };
        let mut editor_signal = self.editor;
        editor_signal.set(Some(session));
    }

    pub fn update_editor<F: FnOnce(&mut QrCodeEditor)>(&self, f: F) {
        let mut editor_signal = self.editor;
        let mut editor_write = editor_signal.write();
        if let Some(session) = editor_write.as_mut() {
            f(&mut session.editor);
        }
    }

    /// OK: commit the fields to the item. A failed commit keeps the dialog
    /// open with the edits intact; the failure is logged, not surfaced.
    pub fn confirm_editor(&self) {
        self.close_editor(ShellAction::Confirm);
    }

    /// Cancel: discard every field edit; the item is left as it was.
    pub fn cancel_editor(&self) {
        self.close_editor(ShellAction::Cancel);
    }

    /// Rebinds the session's item behind an [`ItemHandle`] and drives the
    /// close through the builder entry point, the way the report-designer
    /// host would.
    fn close_editor(&self, action: ShellAction) {
        let mut editor_signal = self.editor;
        let Some(session) = editor_signal.write().take() else { return };

        let mut draft = self.expression_draft;
        draft.set(None);

        let mut design_signal = self.design;
        let mut design_write = design_signal.write();
        let Some(design) = design_write.as_mut() else { return };
        let Some(item) = design.get_item(session.item_id) else { return };

        let mut handle =
            ItemHandle::new(Box::new(item.clone())).with_context(design.context.clone());
        let mut host = ShellHost::new(session.editor.clone(), action);

        match open_editor(&mut handle, &mut host) {
            Ok(result) => {
                if result.is_confirmed() {
                    let committed = handle
                        .into_report_item()
                        .and_then(|item| item.as_any().downcast_ref::<QrCodeItem>().cloned());
                    if let (Some(committed), Some(slot)) =
                        (committed, design.get_item_mut(session.item_id))
                    {
                        *slot = committed;
                    }
                } else if host.editor_still_open {
                    // failed commit: keep the dialog up with the edits intact
                    editor_signal.set(Some(session));
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "could not resolve the item behind the editor");
            }
        }
    }

    pub fn open_expression_builder(&self) {
        let editor_read = self.editor.read();
        let Some(session) = editor_read.as_ref() else { return };

        let mut draft = self.expression_draft;
        draft.set(Some(session.editor.text().to_string()));
    }

    pub fn update_expression_draft(&self, text: String) {
        let mut draft = self.expression_draft;
        draft.set(Some(text));
    }

    pub fn append_binding_to_draft(&self, binding: &str) {
        let mut draft_signal = self.expression_draft;
        let mut draft_write = draft_signal.write();
        if let Some(draft) = draft_write.as_mut() {
            draft.push_str(&format!("row[\"{}\"]", binding));
        }
    }

    pub fn confirm_expression_builder(&self) {
        let mut draft_signal = self.expression_draft;
        let picked = draft_signal.write().take();
        self.update_editor(|editor| editor.apply_picked_expression(picked));
    }

    pub fn cancel_expression_builder(&self) {
        let mut draft = self.expression_draft;
        draft.set(None);
    }
}
