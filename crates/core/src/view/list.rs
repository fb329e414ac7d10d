//! Task list view
//!
//! Loads the first page of tasks, filters them by title and deletes them
//! after confirmation.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, error, info};

use super::{Confirm, ViewFailure};
use crate::task::{filter_tasks, Task, TaskService};

/// Maximum number of tasks kept from a fetch
pub const LIST_LIMIT: usize = 20;

/// Observable state of the list view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListState {
    /// First `LIST_LIMIT` tasks of the last successful fetch
    pub tasks: Vec<Task>,
    /// `tasks` narrowed by `search_term`; only ever recomputed, never edited
    pub filtered_tasks: Vec<Task>,
    pub search_term: String,
    pub loading: bool,
    /// Empty unless the last operation failed
    pub error: String,
}

/// Result of a delete request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The task had no id, or no task with that id is listed
    Skipped,
    /// The user declined the confirmation
    Declined,
    Deleted,
    Failed,
}

pub struct TaskListView {
    service: Arc<dyn TaskService>,
    state: ListState,
    tx: watch::Sender<ListState>,
}

impl TaskListView {
    /// Create the view; it reports `loading` until the first `load` finishes
    pub fn new(service: Arc<dyn TaskService>) -> Self {
        let state = ListState {
            loading: true,
            ..ListState::default()
        };
        let (tx, _) = watch::channel(state.clone());

        Self { service, state, tx }
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    /// Receive a snapshot after every state change
    pub fn subscribe(&self) -> watch::Receiver<ListState> {
        self.tx.subscribe()
    }

    fn publish(&self) {
        self.tx.send_replace(self.state.clone());
    }

    fn fail(&mut self, failure: ViewFailure) {
        self.state.error = failure.message().to_string();
    }

    /// Fetch the task collection and keep its first `LIST_LIMIT` entries
    pub async fn load(&mut self) {
        self.state.loading = true;
        self.state.error.clear();
        self.publish();

        match self.service.list().await {
            Ok(mut tasks) => {
                let total = tasks.len();
                tasks.truncate(LIST_LIMIT);
                info!("Loaded {} of {} tasks", tasks.len(), total);

                self.state.tasks = tasks;
                self.state.filtered_tasks =
                    filter_tasks(&self.state.tasks, &self.state.search_term);
            }
            Err(e) => {
                error!("Failed to load tasks: {:?}", e);
                self.fail(ViewFailure::Load);
            }
        }

        self.state.loading = false;
        self.publish();
    }

    /// Store a new search term and re-filter
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.state.search_term = term.into();
        self.filter();
    }

    /// Recompute `filtered_tasks` from `tasks` and the current search term
    pub fn filter(&mut self) {
        self.state.filtered_tasks = filter_tasks(&self.state.tasks, &self.state.search_term);
        self.publish();
    }

    /// Delete a task after asking for confirmation
    pub async fn delete(&mut self, task: &Task, confirm: &mut dyn Confirm) -> DeleteOutcome {
        // A zero id is never server-assigned; treat it like a missing one
        let Some(id) = task.id.filter(|&id| id != 0) else {
            return DeleteOutcome::Skipped;
        };

        let prompt = format!("¿Eliminar \"{}\"?", task.title);
        if !confirm.confirm(&prompt).await {
            debug!("Deletion of task {} declined", id);
            return DeleteOutcome::Declined;
        }

        match self.service.delete(id).await {
            Ok(()) => {
                info!("Deleted task {}", id);
                self.state.tasks.retain(|t| t.id != Some(id));
                self.filter();
                DeleteOutcome::Deleted
            }
            Err(e) => {
                error!("Failed to delete task {}: {:?}", id, e);
                self.fail(ViewFailure::Delete);
                self.publish();
                DeleteOutcome::Failed
            }
        }
    }

    /// Delete the listed task with the given id
    pub async fn delete_by_id(&mut self, id: u64, confirm: &mut dyn Confirm) -> DeleteOutcome {
        let Some(task) = self.state.tasks.iter().find(|t| t.id == Some(id)).cloned() else {
            return DeleteOutcome::Skipped;
        };
        self.delete(&task, confirm).await
    }

    pub fn render(&self) -> String {
        let state = &self.state;
        let mut out = String::from("Tareas\n");

        if !state.search_term.is_empty() {
            out.push_str(&format!("Buscar: \"{}\"\n", state.search_term));
        }
        if state.loading {
            out.push_str("Cargando...\n");
            return out;
        }
        if !state.error.is_empty() {
            out.push_str(&format!("! {}\n", state.error));
        }

        if state.filtered_tasks.is_empty() {
            out.push_str("No hay tareas\n");
        }
        for task in &state.filtered_tasks {
            let mark = if task.completed { 'x' } else { ' ' };
            let id = task.id.map(|id| id.to_string()).unwrap_or_default();
            out.push_str(&format!("  [{}] {:>4}  {}\n", mark, id, task.title));
        }

        out
    }
}
