use super::state::FormState;
use crate::error::Operation;
use std::fmt;

pub const INPUT_LABEL: &str = "Enter your message";
pub const SEND_IDLE: &str = "Send Message";
pub const SEND_PENDING: &str = "Please wait...";
pub const RETRIEVE_IDLE: &str = "Retrieve Message";
pub const RETRIEVE_PENDING: &str = "Getting Message...";
pub const RETRIEVED_LABEL: &str = "Retrieved Message:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonView {
    pub label: &'static str,
    pub disabled: bool,
}

impl ButtonView {
    fn new(pending: bool, idle: &'static str, busy: &'static str) -> Self {
        Self {
            label: if pending { busy } else { idle },
            disabled: pending,
        }
    }
}

/// Retrieve control and result line, shown after a successful submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetrieveView {
    pub button: ButtonView,
    pub retrieved: String,
}

/// What the form shows for a given [`FormState`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub input_label: &'static str,
    pub draft: String,
    pub error: Option<String>,
    pub submit: ButtonView,
    pub retrieve: Option<RetrieveView>,
}

impl From<&FormState> for FormView {
    fn from(state: &FormState) -> Self {
        let retrieve = state.has_submitted.then(|| RetrieveView {
            button: ButtonView::new(
                state.is_pending(Operation::Retrieve),
                RETRIEVE_IDLE,
                RETRIEVE_PENDING,
            ),
            retrieved: state.retrieved.clone(),
        });

        Self {
            input_label: INPUT_LABEL,
            draft: state.draft.clone(),
            error: state.error.clone(),
            submit: ButtonView::new(state.is_pending(Operation::Submit), SEND_IDLE, SEND_PENDING),
            retrieve,
        }
    }
}

impl fmt::Display for ButtonView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.disabled {
            write!(f, "( {} )", self.label)
        } else {
            write!(f, "[ {} ]", self.label)
        }
    }
}

impl fmt::Display for FormView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {}", self.input_label, self.draft)?;
        if let Some(error) = &self.error {
            writeln!(f, "! {}", error)?;
        }
        writeln!(f, "{}", self.submit)?;

        if let Some(retrieve) = &self.retrieve {
            writeln!(f, "{}", "-".repeat(40))?;
            writeln!(f, "{}", retrieve.button)?;
            writeln!(f, "{} {}", RETRIEVED_LABEL, retrieve.retrieved)?;
        }
        Ok(())
    }
}
