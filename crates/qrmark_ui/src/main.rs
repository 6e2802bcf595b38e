use dioxus::desktop::{Config, WindowBuilder};
use dioxus::prelude::*;

mod app_state;
mod components;

use app_state::AppState;
use components::*;

fn main() {
    tracing_subscriber::fmt().init();

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("qrmark Designer")
            .with_resizable(true),
    );

    LaunchBuilder::desktop().with_cfg(config).launch(App);
}

#[component]
fn App() -> Element {
    // Initialize app state with a default design so the editor is
    // immediately usable
    use_context_provider(|| {
        let state = AppState::new();
        state.new_design();
        state
    });

    let state = use_context::<AppState>();
    let design = state.design.read().clone();
    let selected = *state.selected_item.read();

    let detail = design
        .as_ref()
        .and_then(|d| selected.and_then(|id| d.get_item(id).cloned()));

    rsx! {
        div {
            style: "width: 100vw; height: 100vh; display: flex; font-family: 'Segoe UI', Arial, sans-serif; font-size: 13px;",

            // Dialogs
            QrCodeEditorDialog {}
            ExpressionBuilderDialog {}

            // Left Sidebar - report items
            DesignExplorer {}

            // Central Area - selected item summary
            div {
                style: "flex: 1; padding: 16px; background: #fff; overflow-y: auto;",

                if let Some(item) = detail {
                    {
                        let id = item.id;
                        let name = item.name.clone();
                        let text = item.text().to_string();
                        let dots_width = item.dots_width();
                        let encoding = item.encoding().to_string();
                        rsx! {
                            h3 { style: "margin: 0 0 12px 0;", "{name}" }

                            div {
                                style: "display: grid; grid-template-columns: 120px 1fr; gap: 6px; max-width: 480px;",

                                div { style: "font-weight: bold;", "Text Content" }
                                div { style: "font-family: monospace;", "{text}" }

                                div { style: "font-weight: bold;", "Width (dots)" }
                                div { "{dots_width}" }

                                div { style: "font-weight: bold;", "Encoding" }
                                div { "{encoding}" }
                            }

                            button {
                                style: "margin-top: 16px; padding: 4px 16px;",
                                onclick: move |_| state.open_editor_for(id),
                                "Edit Properties..."
                            }
                        }
                    }
                } else {
                    div {
                        style: "color: #666;",
                        "Select a report item to inspect it."
                    }
                }
            }
        }
    }
}
