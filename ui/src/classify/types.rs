// Core types for the classify form - no dioxus imports needed here
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::services::client::ClassifyResponse;

/// Response fields the user can choose to display.
///
/// A closed set instead of string keys into the response object, so an
/// unrecognized field can neither be selected nor rendered.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum ResponseField {
    Alphabets,
    Numbers,
    HighestAlphabet,
}

impl ResponseField {
    /// All selectable fields, in checkbox display order.
    pub const ALL: [ResponseField; 3] = [
        ResponseField::Alphabets,
        ResponseField::Numbers,
        ResponseField::HighestAlphabet,
    ];

    /// Key of the field in the classification response body.
    pub fn key(&self) -> &'static str {
        match self {
            ResponseField::Alphabets => "alphabets_array",
            ResponseField::Numbers => "numbers_array",
            ResponseField::HighestAlphabet => "highest_alphabet_array",
        }
    }

    /// Checkbox label.
    pub fn label(&self) -> &'static str {
        match self {
            ResponseField::Alphabets => "Alphabets",
            ResponseField::Numbers => "Numbers",
            ResponseField::HighestAlphabet => "Highest lowercase alphabet",
        }
    }

    /// Label shown on the rendered result line.
    pub fn render_label(&self) -> String {
        self.label().to_lowercase()
    }

    /// The matching response sequence joined for display.
    pub fn rendered_value(&self, response: &ClassifyResponse) -> String {
        match self {
            ResponseField::Alphabets => response.alphabets_array.join(", "),
            ResponseField::Numbers => response
                .numbers_array
                .iter()
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
                .join(", "),
            ResponseField::HighestAlphabet => response.highest_alphabet_array.join(", "),
        }
    }
}

/// Derived UI phase of the form; never stored, always computed from state.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum UiPhase {
    Editing,
    Submitting,
    Success,
    Error,
}

/// One labeled line in the results panel.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RenderedField {
    pub label: String,
    pub value: String,
}

// Action enum for state mutations
#[derive(Clone, Debug)]
pub enum FormAction {
    SetRawInput(String),
    BeginSubmit,
    CompleteSubmit {
        generation: u64,
        response: ClassifyResponse,
    },
    FailSubmit {
        generation: u64,
        message: String,
    },
    ToggleField(ResponseField),
}

#[derive(Clone, Default)]
pub struct FormState {
    pub raw_input: String,
    pub error: Option<String>,
    pub response: Option<ClassifyResponse>,
    pub selected_fields: Vec<ResponseField>,
    pub is_submitting: bool,
    /// Bumped on every BeginSubmit; settle actions carrying an older value
    /// are dropped so a slow response cannot overwrite a newer submission.
    pub generation: u64,
}

impl FormState {
    /// Applies an action in place (preserves Dioxus Signal reactivity).
    pub fn reduce_in_place(&mut self, action: FormAction) {
        match action {
            FormAction::SetRawInput(input) => {
                self.raw_input = input;
            }
            FormAction::BeginSubmit => {
                // A submission cycle settles into exactly one outcome slot.
                self.error = None;
                self.response = None;
                self.is_submitting = true;
                self.generation += 1;
            }
            FormAction::CompleteSubmit {
                generation,
                response,
            } => {
                if generation != self.generation {
                    warn!(
                        "Dropping stale success for submission {} (current {})",
                        generation, self.generation
                    );
                    return;
                }
                self.is_submitting = false;
                self.response = Some(response);
                self.error = None;
            }
            FormAction::FailSubmit {
                generation,
                message,
            } => {
                if generation != self.generation {
                    warn!(
                        "Dropping stale failure for submission {} (current {})",
                        generation, self.generation
                    );
                    return;
                }
                self.is_submitting = false;
                self.error = Some(message);
                self.response = None;
            }
            FormAction::ToggleField(field) => {
                if let Some(pos) = self.selected_fields.iter().position(|f| *f == field) {
                    self.selected_fields.remove(pos);
                } else {
                    self.selected_fields.push(field);
                }
            }
        }
    }

    /// Current phase, derived from the outcome slots and the in-flight flag.
    pub fn phase(&self) -> UiPhase {
        if self.is_submitting {
            UiPhase::Submitting
        } else if self.error.is_some() {
            UiPhase::Error
        } else if self.response.is_some() {
            UiPhase::Success
        } else {
            UiPhase::Editing
        }
    }

    /// Generation the next BeginSubmit will run under. Components read this
    /// before dispatching so the spawned task can tag its settle action.
    pub fn next_generation(&self) -> u64 {
        self.generation + 1
    }

    pub fn is_selected(&self, field: ResponseField) -> bool {
        self.selected_fields.contains(&field)
    }

    /// Labeled result lines for the selected fields, in selection order.
    /// Empty until a response has arrived.
    pub fn rendered_fields(&self) -> Vec<RenderedField> {
        let Some(response) = &self.response else {
            return Vec::new();
        };
        self.selected_fields
            .iter()
            .map(|field| RenderedField {
                label: field.render_label(),
                value: field.rendered_value(response),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_response() -> ClassifyResponse {
        serde_json::from_value(json!({
            "status": "ok",
            "numbers_array": [2, 7, 11],
            "alphabets_array": ["a", "c", "z"],
            "highest_alphabet_array": ["z"],
            "is_prime_available": true
        }))
        .expect("sample response must deserialize")
    }

    #[test]
    fn toggle_appends_then_removes() {
        let mut state = FormState::default();

        state.reduce_in_place(FormAction::ToggleField(ResponseField::Numbers));
        state.reduce_in_place(FormAction::ToggleField(ResponseField::Alphabets));
        assert_eq!(
            state.selected_fields,
            vec![ResponseField::Numbers, ResponseField::Alphabets]
        );

        state.reduce_in_place(FormAction::ToggleField(ResponseField::Numbers));
        assert_eq!(state.selected_fields, vec![ResponseField::Alphabets]);
    }

    #[test]
    fn double_toggle_restores_selection_and_order() {
        let mut state = FormState::default();
        state.reduce_in_place(FormAction::ToggleField(ResponseField::Alphabets));
        state.reduce_in_place(FormAction::ToggleField(ResponseField::HighestAlphabet));
        let before = state.selected_fields.clone();

        state.reduce_in_place(FormAction::ToggleField(ResponseField::Numbers));
        state.reduce_in_place(FormAction::ToggleField(ResponseField::Numbers));

        assert_eq!(state.selected_fields, before);
    }

    #[test]
    fn begin_submit_clears_both_outcomes() {
        let mut state = FormState::default();
        state.reduce_in_place(FormAction::BeginSubmit);
        state.reduce_in_place(FormAction::FailSubmit {
            generation: 1,
            message: "API request failed".to_string(),
        });
        assert_eq!(state.phase(), UiPhase::Error);

        state.reduce_in_place(FormAction::BeginSubmit);
        assert_eq!(state.phase(), UiPhase::Submitting);
        assert!(state.error.is_none());
        assert!(state.response.is_none());
    }

    #[test]
    fn settle_populates_exactly_one_outcome() {
        let mut state = FormState::default();
        state.reduce_in_place(FormAction::BeginSubmit);
        state.reduce_in_place(FormAction::CompleteSubmit {
            generation: 1,
            response: sample_response(),
        });
        assert!(state.response.is_some());
        assert!(state.error.is_none());
        assert!(!state.is_submitting);

        state.reduce_in_place(FormAction::BeginSubmit);
        state.reduce_in_place(FormAction::FailSubmit {
            generation: 2,
            message: "API request failed".to_string(),
        });
        assert!(state.response.is_none());
        assert_eq!(state.error.as_deref(), Some("API request failed"));
        assert!(!state.is_submitting);
    }

    #[test]
    fn rendered_fields_follow_selection_order() {
        let mut state = FormState::default();
        state.reduce_in_place(FormAction::BeginSubmit);
        state.reduce_in_place(FormAction::CompleteSubmit {
            generation: 1,
            response: sample_response(),
        });
        state.reduce_in_place(FormAction::ToggleField(ResponseField::HighestAlphabet));
        state.reduce_in_place(FormAction::ToggleField(ResponseField::Numbers));

        let lines = state.rendered_fields();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].label, "highest lowercase alphabet");
        assert_eq!(lines[0].value, "z");
        assert_eq!(lines[1].label, "numbers");
        assert_eq!(lines[1].value, "2, 7, 11");
    }

    #[test]
    fn rendered_fields_empty_without_response() {
        let mut state = FormState::default();
        state.reduce_in_place(FormAction::ToggleField(ResponseField::Alphabets));
        assert!(state.rendered_fields().is_empty());
    }

    #[test]
    fn rendered_fields_contain_only_selected() {
        let mut state = FormState::default();
        state.reduce_in_place(FormAction::BeginSubmit);
        state.reduce_in_place(FormAction::CompleteSubmit {
            generation: 1,
            response: sample_response(),
        });
        state.reduce_in_place(FormAction::ToggleField(ResponseField::Alphabets));

        let lines = state.rendered_fields();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].label, "alphabets");
        assert_eq!(lines[0].value, "a, c, z");
    }

    #[test]
    fn selection_survives_resubmission() {
        let mut state = FormState::default();
        state.reduce_in_place(FormAction::ToggleField(ResponseField::Numbers));
        state.reduce_in_place(FormAction::BeginSubmit);
        state.reduce_in_place(FormAction::CompleteSubmit {
            generation: 1,
            response: sample_response(),
        });
        state.reduce_in_place(FormAction::BeginSubmit);

        assert_eq!(state.selected_fields, vec![ResponseField::Numbers]);
    }
}
