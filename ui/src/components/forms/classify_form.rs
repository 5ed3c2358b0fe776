use dioxus::prelude::*;

use crate::classify::{logic, FormAction, FormState};
use crate::components::inputs::JsonInput;

#[derive(Props, PartialEq, Clone)]
pub struct ClassifyFormProps {
    pub state: Signal<FormState>,
    pub dispatch: EventHandler<FormAction>,
}

/// JSON entry form: the text area plus the submit control.
#[component]
pub fn ClassifyForm(props: ClassifyFormProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;

    rsx! {
        div {
            class: "classify-form",

            div {
                class: "input-section",
                label {
                    class: "input-label",
                    "Enter JSON Input"
                }
                JsonInput {
                    value: state().raw_input,
                    placeholder: "{ \"data\": [\"A\",\"C\",\"z\"] }".to_string(),
                    rows: 4,
                    disabled: false,
                    on_change: move |text: String| {
                        dispatch.call(FormAction::SetRawInput(text));
                    }
                }
            }

            div {
                class: "button-section",
                button {
                    class: "submit-button",
                    disabled: state().is_submitting,
                    onclick: move |_| {
                        let current_state = state();
                        let raw_input = current_state.raw_input.clone();
                        // Dispatch runs synchronously on the UI event loop, so
                        // the bumped generation is in place before the task runs.
                        let generation = current_state.next_generation();
                        crate::console_info!("[FORM] Submitting classification request {}", generation);
                        dispatch.call(FormAction::BeginSubmit);

                        spawn(async move {
                            match logic::classify_raw_input(&raw_input).await {
                                Ok(response) => {
                                    dispatch.call(FormAction::CompleteSubmit {
                                        generation,
                                        response,
                                    });
                                }
                                Err(e) => {
                                    crate::console_error!(
                                        "[FORM] Submission {} failed: {}",
                                        generation,
                                        e
                                    );
                                    dispatch.call(FormAction::FailSubmit {
                                        generation,
                                        message: e.to_string(),
                                    });
                                }
                            }
                        });
                    },
                    if state().is_submitting {
                        "Processing..."
                    } else {
                        "Submit"
                    }
                }
            }
        }
    }
}
