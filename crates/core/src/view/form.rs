//! Task form view
//!
//! Creates a new task or edits an existing one.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{error, info};

use super::ViewFailure;
use crate::task::{Task, TaskService};

/// Whether the form creates a task or edits the one with the given id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(u64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub mode: FormMode,
    pub draft: Task,
    pub loading: bool,
    pub saving: bool,
    pub error: String,
    /// Task echoed back by the last successful save
    pub saved: Option<Task>,
}

/// Result of submitting the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Saved(Task),
    /// Validation failed; nothing was sent
    Rejected,
    Failed,
}

pub struct TaskFormView {
    service: Arc<dyn TaskService>,
    state: FormState,
    tx: watch::Sender<FormState>,
}

impl TaskFormView {
    pub fn new(service: Arc<dyn TaskService>, mode: FormMode) -> Self {
        let state = FormState {
            mode,
            draft: Task::default(),
            loading: matches!(mode, FormMode::Edit(_)),
            saving: false,
            error: String::new(),
            saved: None,
        };
        let (tx, _) = watch::channel(state.clone());

        Self { service, state, tx }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn subscribe(&self) -> watch::Receiver<FormState> {
        self.tx.subscribe()
    }

    fn publish(&self) {
        self.tx.send_replace(self.state.clone());
    }

    /// Fetch the task being edited; a no-op in create mode
    pub async fn init(&mut self) {
        let FormMode::Edit(id) = self.state.mode else {
            return;
        };

        self.state.loading = true;
        self.state.error.clear();
        self.publish();

        match self.service.get(id).await {
            Ok(task) => self.state.draft = task,
            Err(e) => {
                error!("Failed to load task {}: {:?}", id, e);
                self.state.error = ViewFailure::LoadTask.message().to_string();
            }
        }

        self.state.loading = false;
        self.publish();
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.state.draft.title = title.into();
        self.publish();
    }

    pub fn set_completed(&mut self, completed: bool) {
        self.state.draft.completed = completed;
        self.publish();
    }

    /// Validate the draft and send it to the service
    pub async fn submit(&mut self) -> SubmitOutcome {
        if self.state.draft.title.trim().is_empty() {
            self.state.error = ViewFailure::EmptyTitle.message().to_string();
            self.publish();
            return SubmitOutcome::Rejected;
        }

        self.state.saving = true;
        self.state.error.clear();
        self.publish();

        let result = match self.state.mode {
            FormMode::Create => self.service.create(&self.state.draft).await,
            FormMode::Edit(id) => {
                self.state.draft.id = Some(id);
                self.service.update(id, &self.state.draft).await
            }
        };

        self.state.saving = false;
        let outcome = match result {
            Ok(task) => {
                info!("Saved task {:?}", task.id);
                self.state.saved = Some(task.clone());
                SubmitOutcome::Saved(task)
            }
            Err(e) => {
                error!("Failed to save task: {:?}", e);
                self.state.error = ViewFailure::Save.message().to_string();
                SubmitOutcome::Failed
            }
        };
        self.publish();

        outcome
    }

    pub fn render(&self) -> String {
        let state = &self.state;
        let mut out = match state.mode {
            FormMode::Create => String::from("Nueva tarea\n"),
            FormMode::Edit(id) => format!("Editar tarea #{}\n", id),
        };

        if state.loading {
            out.push_str("Cargando...\n");
            return out;
        }
        if !state.error.is_empty() {
            out.push_str(&format!("! {}\n", state.error));
        }

        out.push_str(&format!("  Título:     {}\n", state.draft.title));
        out.push_str(&format!(
            "  Completada: {}\n",
            if state.draft.completed { "sí" } else { "no" }
        ));
        if state.saving {
            out.push_str("Guardando...\n");
        }

        out
    }
}
