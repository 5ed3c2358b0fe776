use dioxus::prelude::*;

use crate::classify::{FormAction, FormState, ResponseField};

#[derive(Props, PartialEq, Clone)]
pub struct FieldSelectorProps {
    pub state: Signal<FormState>,
    pub dispatch: EventHandler<FormAction>,
}

/// Checkbox list over the three selectable response fields. Selection order
/// is preserved and drives the render order of the results panel.
#[component]
pub fn FieldSelector(props: FieldSelectorProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;

    rsx! {
        div {
            class: "field-selector",

            label {
                class: "input-label",
                "Select Response Fields"
            }

            div {
                class: "field-options",
                for field in ResponseField::ALL {
                    div {
                        key: "{field.key()}",
                        class: "field-option",
                        input {
                            r#type: "checkbox",
                            id: field.key(),
                            checked: state().is_selected(field),
                            onchange: move |_| dispatch.call(FormAction::ToggleField(field)),
                        }
                        label {
                            r#for: field.key(),
                            class: "field-option-label",
                            "{field.label()}"
                        }
                    }
                }
            }
        }
    }
}
