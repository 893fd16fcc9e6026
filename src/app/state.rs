use crate::error::Operation;
use serde::Serialize;

/// Transient state of the form, alive for one session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormState {
    /// Message being typed; cleared after a successful submission
    pub draft: String,
    /// Last value read from the contract; only ever overwritten
    pub retrieved: String,
    /// A submission is in flight
    pub is_sending: bool,
    /// A retrieval is in flight
    pub is_getting: bool,
    /// At least one submission succeeded; reveals the retrieve control
    pub has_submitted: bool,
    /// Last failure shown to the user
    pub error: Option<String>,
}

impl FormState {
    fn pending_mut(&mut self, operation: Operation) -> &mut bool {
        match operation {
            Operation::Submit => &mut self.is_sending,
            Operation::Retrieve => &mut self.is_getting,
        }
    }

    pub fn is_pending(&self, operation: Operation) -> bool {
        match operation {
            Operation::Submit => self.is_sending,
            Operation::Retrieve => self.is_getting,
        }
    }

    /// Mark `operation` as in flight. Returns false if it already is.
    pub fn begin(&mut self, operation: Operation) -> bool {
        let pending = self.pending_mut(operation);
        if *pending {
            return false;
        }
        *pending = true;
        self.error = None;
        true
    }

    pub fn submit_succeeded(&mut self) {
        self.is_sending = false;
        self.draft.clear();
        self.error = None;
        self.has_submitted = true;
    }

    pub fn retrieve_succeeded(&mut self, message: String) {
        self.is_getting = false;
        self.retrieved = message;
        self.error = None;
    }

    pub fn failed(&mut self, operation: Operation, message: impl Into<String>) {
        *self.pending_mut(operation) = false;
        self.error = Some(message.into());
    }
}
