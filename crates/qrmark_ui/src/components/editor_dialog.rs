use dioxus::prelude::*;

use crate::app_state::AppState;

#[component]
pub fn QrCodeEditorDialog() -> Element {
    let state = use_context::<AppState>();
    let session = state.editor.read().clone();

    let Some(session) = session else {
        return rsx! {};
    };

    let text = session.editor.text().to_string();
    let width_text = session.editor.dots_width().text().to_string();
    let encoding = session.editor.encoding().to_string();
    let min = session.editor.dots_width().minimum();
    let max = session.editor.dots_width().maximum();

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
                z-index: 1000;
            ",

            div {
                class: "modal-content",
                style: "
                    background: white;
                    width: 420px;
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
                    span { "QRCode Builder" }
                    div {
                        style: "cursor: pointer; font-family: monospace; font-weight: bold;",
                        onclick: move |_| state.cancel_editor(),
                        "X"
                    }
                }

                // Content
                div {
                    style: "padding: 16px; flex: 1;",

                    div {
                        style: "margin-bottom: 12px;",
                        label { style: "display: block; margin-bottom: 4px; font-weight: bold;", "Text Content:" }
                        div {
                            style: "display: flex; gap: 6px;",
                            input {
                                style: "flex: 1; padding: 4px; border: 1px solid #ccc;",
                                value: "{text}",
                                oninput: move |evt| {
                                    state.update_editor(|editor| editor.set_text(evt.value()));
                                }
                            }
                            button {
                                style: "padding: 4px 10px; min-width: 34px;",
                                title: "Invoke Expression Builder",
                                onclick: move |_| state.open_expression_builder(),
                                "..."
                            }
                        }
                    }

                    div {
                        style: "margin-bottom: 12px;",
                        label { style: "display: block; margin-bottom: 4px; font-weight: bold;", "Width (dots):" }
                        input {
                            r#type: "number",
                            min: "{min}",
                            max: "{max}",
                            style: "width: 100%; padding: 4px; border: 1px solid #ccc;",
                            value: "{width_text}",
                            onchange: move |evt| {
                                state.update_editor(|editor| editor.dots_width_mut().set_text(evt.value()));
                            }
                        }
                    }

                    div {
                        label { style: "display: block; margin-bottom: 4px; font-weight: bold;", "Encoding:" }
                        input {
                            style: "width: 100%; padding: 4px; border: 1px solid #ccc;",
                            value: "{encoding}",
                            oninput: move |evt| {
                                state.update_editor(|editor| editor.set_encoding(evt.value()));
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
                        onclick: move |_| state.confirm_editor(),
                        "OK"
                    }

                    button {
                        style: "padding: 4px 16px; min-width: 70px;",
                        onclick: move |_| state.cancel_editor(),
                        "Cancel"
                    }
                }
            }
        }
    }
}
