pub mod design_explorer;
pub mod editor_dialog;
pub mod expression_builder;

pub use design_explorer::DesignExplorer;
pub use editor_dialog::QrCodeEditorDialog;
pub use expression_builder::ExpressionBuilderDialog;
