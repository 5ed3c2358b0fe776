use dioxus::prelude::*;

use crate::classify::{FormAction, FormState};
use crate::components::display::{ErrorBanner, FieldSelector, ResultsPanel};
use crate::components::forms::ClassifyForm;

const CLASSIFIER_FORM_CSS: Asset = asset!("/assets/styling/classifier_form.css");

#[component]
pub fn ClassifierPage() -> Element {
    // Consolidated state management
    let mut state = use_signal(FormState::default);

    // Dispatch function for actions - in-place reduction preserves Dioxus
    // Signal reactivity
    let dispatch = EventHandler::new(move |action: FormAction| {
        state.with_mut(|s| {
            s.reduce_in_place(action);
        });
    });

    rsx! {
        document::Link { rel: "stylesheet", href: CLASSIFIER_FORM_CSS }

        div {
            class: "classifier-container",

            div {
                class: "classifier-card",

                h1 {
                    class: "classifier-title",
                    "JSON Classifier"
                }

                ClassifyForm {
                    state: state,
                    dispatch: dispatch
                }

                if let Some(message) = state().error {
                    ErrorBanner { message: message }
                }

                // Field selection appears once a response has arrived; the
                // user's picks survive later submissions.
                if state().response.is_some() {
                    FieldSelector {
                        state: state,
                        dispatch: dispatch
                    }
                }

                ResultsPanel { state: state }
            }
        }
    }
}
