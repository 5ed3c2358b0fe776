use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct JsonInputProps {
    pub value: String,
    pub placeholder: String,
    pub rows: i64,
    pub disabled: bool,
    pub on_change: EventHandler<String>,
}

/// Multi-line input bound to the raw JSON text. The value is kept verbatim;
/// parsing only happens on submit.
#[component]
pub fn JsonInput(props: JsonInputProps) -> Element {
    rsx! {
        textarea {
            class: "input-field json-input",
            rows: "{props.rows}",
            value: "{props.value}",
            placeholder: "{props.placeholder}",
            disabled: props.disabled,
            oninput: move |event| props.on_change.call(event.value())
        }
    }
}
