use std::any::Any;

use qrmark_editor::{
    open_editor, DialogResult, EditorHost, ExpressionPicker, QrCodeEditor,
};
use qrmark_model::{
    DesignContext, HandleError, ItemHandle, QrCodeItem, ReportItem,
};

/// Expression picker scripted to return a fixed outcome.
struct ScriptedPicker(Option<String>);

impl ExpressionPicker for ScriptedPicker {
    fn pick(&mut self, _initial: &str, _context: &DesignContext) -> Option<String> {
        self.0.clone()
    }
}

/// One user interaction with the open dialog.
enum Action {
    SetText(&'static str),
    SetEncoding(&'static str),
    SetWidthText(&'static str),
    Increment,
    PickExpression(Option<&'static str>),
    Confirm,
    Cancel,
}

/// Host that replays a scripted interaction and closes an abandoned dialog
/// as cancelled, the way dismissing the window would.
struct ScriptedHost {
    actions: Vec<Action>,
    opened: bool,
}

impl ScriptedHost {
    fn new(actions: Vec<Action>) -> Self {
        Self {
            actions,
            opened: false,
        }
    }
}

impl EditorHost for ScriptedHost {
    fn run_modal(
        &mut self,
        editor: &mut QrCodeEditor,
        item: &mut QrCodeItem,
        context: &DesignContext,
    ) -> DialogResult {
        self.opened = true;
        for action in self.actions.drain(..) {
            match action {
                Action::SetText(text) => editor.set_text(text),
                Action::SetEncoding(enc) => editor.set_encoding(enc),
                Action::SetWidthText(text) => editor.dots_width_mut().set_text(text),
                Action::Increment => editor.dots_width_mut().increment(),
                Action::PickExpression(picked) => {
                    let mut picker = ScriptedPicker(picked.map(str::to_string));
                    editor.open_expression_builder(&mut picker, context);
                }
                Action::Confirm => {
                    let _ = editor.confirm(item);
                }
                Action::Cancel => editor.cancel(),
            }
            if !editor.is_open() {
                break;
            }
        }
        editor.result().unwrap_or(DialogResult::Cancelled)
    }
}

fn sample_item() -> QrCodeItem {
    let mut item = QrCodeItem::new("QRCode1");
    item.set_text("row[\"ORDER_ID\"]").unwrap();
    item.set_dots_width(300).unwrap();
    item.set_encoding("UTF-8").unwrap();
    item
}

fn edit(item: QrCodeItem, actions: Vec<Action>) -> (QrCodeItem, DialogResult) {
    let mut handle = ItemHandle::new(Box::new(item));
    let mut host = ScriptedHost::new(actions);
    let result = open_editor(&mut handle, &mut host).unwrap();
    let item = handle
        .into_report_item()
        .unwrap()
        .as_any()
        .downcast_ref::<QrCodeItem>()
        .unwrap()
        .clone();
    (item, result)
}

#[test]
fn cancel_leaves_item_unchanged() {
    let original = sample_item();
    let (after, result) = edit(original.clone(), vec![Action::Cancel]);
    assert!(result.is_cancelled());
    assert_eq!(after, original);
}

#[test]
fn cancel_discards_pending_edits() {
    let original = sample_item();
    let (after, result) = edit(
        original.clone(),
        vec![
            Action::SetText("something else"),
            Action::SetWidthText("500"),
            Action::SetEncoding("Shift_JIS"),
            Action::Cancel,
        ],
    );
    assert_eq!(result, DialogResult::Cancelled);
    assert_eq!(after, original);
}

#[test]
fn confirm_commits_all_three_fields() {
    let (after, result) = edit(
        sample_item(),
        vec![
            Action::SetText("row[\"SKU\"]"),
            Action::SetWidthText("640"),
            Action::SetEncoding("ISO-8859-1"),
            Action::Confirm,
        ],
    );
    assert_eq!(result, DialogResult::Confirmed);
    assert_eq!(after.text(), "row[\"SKU\"]");
    assert_eq!(after.dots_width(), 640);
    assert_eq!(after.encoding(), "ISO-8859-1");
}

#[test]
fn width_boundaries_commit() {
    let (after, result) = edit(sample_item(), vec![Action::SetWidthText("21"), Action::Confirm]);
    assert_eq!(result, DialogResult::Confirmed);
    assert_eq!(after.dots_width(), 21);

    let (after, result) = edit(
        sample_item(),
        vec![Action::SetWidthText("2000"), Action::Confirm],
    );
    assert_eq!(result, DialogResult::Confirmed);
    assert_eq!(after.dots_width(), 2000);
}

#[test]
fn out_of_range_width_is_clamped_by_the_widget() {
    let (after, _) = edit(
        sample_item(),
        vec![Action::SetWidthText("20"), Action::Confirm],
    );
    assert_eq!(after.dots_width(), 21);

    let (after, _) = edit(
        sample_item(),
        vec![Action::SetWidthText("999999"), Action::Confirm],
    );
    assert_eq!(after.dots_width(), 2000);

    // stepping at the ceiling stays at the ceiling
    let (after, _) = edit(
        sample_item(),
        vec![
            Action::SetWidthText("2000"),
            Action::Increment,
            Action::Confirm,
        ],
    );
    assert_eq!(after.dots_width(), 2000);
}

#[test]
fn picked_expression_is_committed() {
    let (after, result) = edit(
        sample_item(),
        vec![Action::PickExpression(Some("X")), Action::Confirm],
    );
    assert!(result.is_confirmed());
    assert_eq!(after.text(), "X");
}

/// Picker that builds its replacement from the design context, the way the
/// host's expression builder offers the report's column bindings.
struct FirstBindingPicker;

impl ExpressionPicker for FirstBindingPicker {
    fn pick(&mut self, _initial: &str, context: &DesignContext) -> Option<String> {
        context
            .bindings
            .first()
            .map(|b| format!("row[\"{}\"]", b))
    }
}

#[test]
fn picker_receives_the_handle_context() {
    let context = DesignContext::default().with_binding("CUSTOMER");
    let mut handle = ItemHandle::new(Box::new(sample_item())).with_context(context);

    struct PickingHost;
    impl EditorHost for PickingHost {
        fn run_modal(
            &mut self,
            editor: &mut QrCodeEditor,
            item: &mut QrCodeItem,
            context: &DesignContext,
        ) -> DialogResult {
            editor.open_expression_builder(&mut FirstBindingPicker, context);
            let _ = editor.confirm(item);
            editor.result().unwrap_or(DialogResult::Cancelled)
        }
    }

    let result = open_editor(&mut handle, &mut PickingHost).unwrap();
    assert!(result.is_confirmed());

    let item = handle.report_item().unwrap();
    assert_eq!(item.item_type(), "QRCode");
    let item = item.as_any().downcast_ref::<QrCodeItem>().unwrap();
    assert_eq!(item.text(), "row[\"CUSTOMER\"]");
}

#[test]
fn cancelled_picker_leaves_text_alone() {
    let mut item = QrCodeItem::new("QRCode1");
    item.set_text("before").unwrap();
    let mut editor = QrCodeEditor::for_item(&item);

    let mut picker = ScriptedPicker(None);
    editor.open_expression_builder(&mut picker, &DesignContext::default());
    assert_eq!(editor.text(), "before");
}

#[test]
fn non_numeric_width_keeps_dialog_open_and_item_untouched() {
    let original = sample_item();
    let mut item = original.clone();
    let mut editor = QrCodeEditor::for_item(&item);

    editor.set_text("edited");
    editor.set_encoding("edited-encoding");
    editor.dots_width_mut().set_text("wide");

    let err = editor.confirm(&mut item).unwrap_err();
    assert!(err.to_string().contains("not a number"));
    assert!(editor.is_open());
    // staged commit: nothing was written, not even the fields parsed first
    assert_eq!(item, original);
    // the user's edits stay in the fields for another attempt
    assert_eq!(editor.text(), "edited");
    assert_eq!(editor.dots_width().text(), "wide");

    editor.dots_width_mut().set_text("128");
    editor.set_encoding("UTF-8");
    editor.confirm(&mut item).unwrap();
    assert!(!editor.is_open());
    assert_eq!(item.dots_width(), 128);
    assert_eq!(item.text(), "edited");
}

#[test]
fn blank_encoding_fails_commit_atomically() {
    let original = sample_item();
    let mut item = original.clone();
    let mut editor = QrCodeEditor::for_item(&item);

    editor.set_text("edited");
    editor.set_encoding("   ");

    assert!(editor.confirm(&mut item).is_err());
    assert!(editor.is_open());
    assert_eq!(item, original);
}

/// A different extension type behind the same handle shape.
struct TableItem;

impl ReportItem for TableItem {
    fn item_type(&self) -> &str {
        "Table"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[test]
fn wrong_item_type_is_cancelled_without_opening() {
    let mut handle = ItemHandle::new(Box::new(TableItem));
    let mut host = ScriptedHost::new(vec![Action::Confirm]);

    let result = open_editor(&mut handle, &mut host).unwrap();
    assert_eq!(result, DialogResult::Cancelled);
    assert!(!host.opened);
}

#[test]
fn unbound_handle_is_a_typed_error() {
    let mut handle = ItemHandle::unbound();
    let mut host = ScriptedHost::new(vec![]);

    let err = open_editor(&mut handle, &mut host).unwrap_err();
    assert_eq!(err, HandleError::Unbound);
    assert!(!host.opened);
}

#[test]
fn editor_snapshots_item_values_on_open() {
    let item = sample_item();
    let editor = QrCodeEditor::for_item(&item);
    assert_eq!(editor.text(), "row[\"ORDER_ID\"]");
    assert_eq!(editor.dots_width().value(), 300);
    assert_eq!(editor.dots_width().text(), "300");
    assert_eq!(editor.encoding(), "UTF-8");
}

#[test]
fn picker_replacement_identical_to_current_text_is_a_noop() {
    let mut item = QrCodeItem::new("QRCode1");
    item.set_text("same").unwrap();
    let mut editor = QrCodeEditor::for_item(&item);

    let mut picker = ScriptedPicker(Some("same".to_string()));
    editor.open_expression_builder(&mut picker, &DesignContext::default());
    assert_eq!(editor.text(), "same");
}
