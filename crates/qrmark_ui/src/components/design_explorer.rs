use dioxus::prelude::*;

use crate::app_state::AppState;

#[component]
pub fn DesignExplorer() -> Element {
    let state = use_context::<AppState>();
    let design = state.design.read().clone();
    let selected = *state.selected_item.read();

    let design_name = design
        .as_ref()
        .map(|d| d.name.clone())
        .unwrap_or_else(|| "(no design)".to_string());

    rsx! {
        div {
            class: "design-explorer",
            style: "width: 260px; background: #fafafa; border-right: 1px solid #ccc; padding: 8px; display: flex; flex-direction: column;",

            h3 { style: "margin: 0 0 8px 0; font-size: 14px;", "{design_name}" }

            div {
                style: "display: flex; flex-wrap: wrap; gap: 4px; margin-bottom: 8px; border-bottom: 1px solid #ccc; padding-bottom: 8px;",

                button {
                    style: "padding: 3px 8px;",
                    onclick: move |_| state.new_design(),
                    "New"
                }
                button {
                    style: "padding: 3px 8px;",
                    onclick: move |_| state.open_design_dialog(),
                    "Open"
                }
                button {
                    style: "padding: 3px 8px;",
                    onclick: move |_| state.save_design(),
                    "Save"
                }
                button {
                    style: "padding: 3px 8px;",
                    onclick: move |_| state.save_design_as(),
                    "Save As"
                }
                button {
                    style: "padding: 3px 8px;",
                    onclick: move |_| state.add_item(),
                    "Add QRCode"
                }
            }

            div {
                style: "flex: 1; overflow-y: auto;",

                if let Some(design) = design {
                    for item in design.items {
                        {
                            let id = item.id;
                            let name = item.name.clone();
                            let dots_width = item.dots_width();
                            let is_selected = selected == Some(id);
                            let row_bg = if is_selected { "#e3f2fd" } else { "transparent" };
                            rsx! {
                                div {
                                    key: "{id}",
                                    style: "padding: 4px 6px; cursor: pointer; border-radius: 3px; background: {row_bg}; display: flex; justify-content: space-between;",
                                    onclick: move |_| state.select_item(id),
                                    ondoubleclick: move |_| state.open_editor_for(id),
                                    span { "{name}" }
                                    span {
                                        style: "color: #666; font-size: 12px;",
                                        "{dots_width} dots"
                                    }
                                }
                            }
                        }
                    }
                } else {
                    div {
                        style: "font-size: 12px; color: #666;",
                        "No design loaded."
                    }
                }
            }
        }
    }
}
