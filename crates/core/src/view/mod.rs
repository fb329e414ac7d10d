//! View state machines
//!
//! Each view owns its state, talks to the task service it was constructed
//! with, and publishes a snapshot to subscribers after every change.

pub mod form;
pub mod home;
pub mod list;
pub mod navbar;

use async_trait::async_trait;

pub use form::{FormMode, FormState, SubmitOutcome, TaskFormView};
pub use list::{DeleteOutcome, ListState, TaskListView, LIST_LIMIT};

/// User-facing failures
///
/// Each maps to a fixed message that replaces whatever error the view was
/// showing. The underlying cause goes to the log only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewFailure {
    /// Listing tasks failed
    Load,
    /// Deleting a task failed
    Delete,
    /// Fetching the task to edit failed
    LoadTask,
    /// Creating or updating a task failed
    Save,
    /// The form was submitted with a blank title
    EmptyTitle,
}

impl ViewFailure {
    pub fn message(self) -> &'static str {
        match self {
            Self::Load => "Error al cargar los datos",
            Self::Delete => "Error al eliminar la tarea",
            Self::LoadTask => "Error al cargar la tarea",
            Self::Save => "Error al guardar la tarea",
            Self::EmptyTitle => "El título es obligatorio",
        }
    }
}

/// Asks the user to confirm a destructive action
#[async_trait]
pub trait Confirm: Send {
    async fn confirm(&mut self, message: &str) -> bool;
}

/// Answers every confirmation with a fixed value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoConfirm(pub bool);

#[async_trait]
impl Confirm for AutoConfirm {
    async fn confirm(&mut self, _message: &str) -> bool {
        self.0
    }
}
