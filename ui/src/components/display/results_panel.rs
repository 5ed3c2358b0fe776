use dioxus::prelude::*;

use crate::classify::FormState;

#[derive(Props, PartialEq, Clone)]
pub struct ResultsPanelProps {
    pub state: Signal<FormState>,
}

/// One labeled line per selected response field, in selection order.
/// Renders nothing until a response has arrived and a field is selected.
#[component]
pub fn ResultsPanel(props: ResultsPanelProps) -> Element {
    let state = props.state;
    let rendered = state().rendered_fields();

    rsx! {
        if !rendered.is_empty() {
            div {
                class: "results-panel",
                for line in rendered {
                    div {
                        key: "{line.label}",
                        class: "result-line",
                        h3 {
                            class: "result-label",
                            "{line.label}:"
                        }
                        p {
                            class: "result-value",
                            "{line.value}"
                        }
                    }
                }
            }
        }
    }
}
