//! The message form
//!
//! Holds the transient UI state, runs the submit/retrieve handlers and turns
//! state into a renderable view.

mod handlers;
mod notify;
mod state;
mod view;

pub use handlers::{MessageApp, Outcome};
pub use notify::{
    ConsoleNotifier, Notification, NotificationKind, Notifier, MESSAGE_RETRIEVED, MESSAGE_SET,
};
pub use state::FormState;
pub use view::{
    ButtonView, FormView, RetrieveView, RETRIEVE_IDLE, RETRIEVE_PENDING, SEND_IDLE, SEND_PENDING,
};
