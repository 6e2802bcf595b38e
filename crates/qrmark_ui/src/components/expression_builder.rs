use dioxus::prelude::*;

use crate::app_state::AppState;

/// Nested modal expression editor. Pre-loaded with the text field's current
/// value; OK replaces the field, Cancel leaves it untouched.
#[component]
pub fn ExpressionBuilderDialog() -> Element {
    let state = use_context::<AppState>();
    let draft = state.expression_draft.read().clone();

    let Some(draft) = draft else {
        return rsx! {};
    };

    let bindings: Vec<String> = state
        .design
        .read()
        .as_ref()
        .map(|d| d.context.bindings.clone())
        .unwrap_or_default();

    rsx! {
        div {
            class: "modal-overlay",
            style: "
                position: fixed;
                top: 0;
                left: 0;
                width: 100vw;
                height: 100vh;
                background: rgba(0, 0, 0, 0.5);
                display: flex;
                align-items: center;
                justify-content: center;
                z-index: 1100;
            ",

            div {
                class: "modal-content",
                style: "
                    background: white;
                    width: 460px;
                    border: 1px solid #999;
                    box-shadow: 0 4px 12px rgba(0,0,0,0.2);
                    display: flex;
                    flex-direction: column;
                ",

                // Header
                div {
                    style: "
                        background: linear-gradient(to bottom, #0078d4, #005a9e);
                        color: white;
                        padding: 6px 10px;
                        font-weight: bold;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    ",
                    span { "Expression Builder" }
                    div {
                        style: "cursor: pointer; font-family: monospace; font-weight: bold;",
                        onclick: move |_| state.cancel_expression_builder(),
                        "X"
                    }
                }

                // Content
                div {
                    style: "padding: 16px; flex: 1;",

                    label { style: "display: block; margin-bottom: 4px; font-weight: bold;", "Expression:" }
                    textarea {
                        style: "width: 100%; padding: 4px; border: 1px solid #ccc; font-family: monospace; resize: vertical;",
                        rows: "5",
                        value: "{draft}",
                        oninput: move |evt| state.update_expression_draft(evt.value()),
                    }

                    label { style: "display: block; margin: 12px 0 4px 0; font-weight: bold;", "Column Bindings:" }
                    if bindings.is_empty() {
                        div {
                            style: "font-size: 12px; color: #666;",
                            "(no bindings in this design)"
                        }
                    }
                    for binding in bindings {
                        {
                            let b = binding.clone();
                            rsx! {
                                div {
                                    key: "{binding}",
                                    style: "padding: 4px; border-bottom: 1px solid #eee; cursor: pointer; font-family: monospace;",
                                    onclick: move |_| state.append_binding_to_draft(&b),
                                    "{binding}"
                                }
                            }
                        }
                    }
                }

                // Footer
                div {
                    style: "
                        padding: 10px;
                        border-top: 1px solid #ccc;
                        background: #f0f0f0;
                        display: flex;
                        justify-content: flex-end;
                        gap: 8px;
                    ",

                    button {
                        style: "padding: 4px 16px; min-width: 70px;",
                        onclick: move |_| state.confirm_expression_builder(),
                        "OK"
                    }

                    button {
                        style: "padding: 4px 16px; min-width: 70px;",
                        onclick: move |_| state.cancel_expression_builder(),
                        "Cancel"
                    }
                }
            }
        }
    }
}
