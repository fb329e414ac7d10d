//! App shell
//!
//! Owns the task service and the route table, and keeps exactly one active
//! view. Navigating replaces the view, so nothing from the previous screen
//! can be applied afterwards.

use std::sync::Arc;

use tracing::info;

use crate::routing::{app_router, paths, Route, Router};
use crate::task::TaskService;
use crate::view::{
    home, navbar, Confirm, DeleteOutcome, SubmitOutcome, TaskFormView, TaskListView,
};

pub enum ActiveView {
    Home,
    TaskList(TaskListView),
    TaskForm(TaskFormView),
}

pub struct App {
    service: Arc<dyn TaskService>,
    router: Router<Route>,
    path: String,
    route: Route,
    view: ActiveView,
}

impl App {
    /// Create the app on the home screen
    pub fn new(service: Arc<dyn TaskService>) -> Self {
        Self {
            service,
            router: app_router(),
            path: paths::HOME.to_string(),
            route: Route::Home,
            view: ActiveView::Home,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn view(&self) -> &ActiveView {
        &self.view
    }

    /// Resolve `path`, build its view and run the view's initial fetch
    pub async fn navigate(&mut self, path: &str) -> Route {
        let route = self.router.resolve(path);
        info!("Navigating to {} ({})", path, route);

        self.view = ActiveView::Home;
        self.path = path.to_string();
        self.route = route;

        self.view = match route {
            Route::Home => ActiveView::Home,
            Route::TaskList => {
                let mut view = TaskListView::new(Arc::clone(&self.service));
                view.load().await;
                ActiveView::TaskList(view)
            }
            Route::TaskForm(mode) => {
                let mut view = TaskFormView::new(Arc::clone(&self.service), mode);
                view.init().await;
                ActiveView::TaskForm(view)
            }
        };

        route
    }

    /// Re-run the current view's fetch
    pub async fn reload(&mut self) -> bool {
        match &mut self.view {
            ActiveView::TaskList(view) => view.load().await,
            ActiveView::TaskForm(view) => view.init().await,
            ActiveView::Home => return false,
        }
        true
    }

    /// Filter the task list; `false` outside the list view
    pub fn search(&mut self, term: &str) -> bool {
        match &mut self.view {
            ActiveView::TaskList(view) => {
                view.set_search_term(term);
                true
            }
            _ => false,
        }
    }

    /// Delete a listed task; `None` outside the list view
    pub async fn delete(&mut self, id: u64, confirm: &mut dyn Confirm) -> Option<DeleteOutcome> {
        match &mut self.view {
            ActiveView::TaskList(view) => Some(view.delete_by_id(id, confirm).await),
            _ => None,
        }
    }

    pub fn set_title(&mut self, title: &str) -> bool {
        match &mut self.view {
            ActiveView::TaskForm(view) => {
                view.set_title(title);
                true
            }
            _ => false,
        }
    }

    pub fn set_completed(&mut self, completed: bool) -> bool {
        match &mut self.view {
            ActiveView::TaskForm(view) => {
                view.set_completed(completed);
                true
            }
            _ => false,
        }
    }

    /// Submit the form and go back to the list once it is saved
    pub async fn save(&mut self) -> Option<SubmitOutcome> {
        let outcome = match &mut self.view {
            ActiveView::TaskForm(view) => view.submit().await,
            _ => return None,
        };

        if matches!(outcome, SubmitOutcome::Saved(_)) {
            self.navigate(paths::TASKS).await;
        }
        Some(outcome)
    }

    /// Navbar followed by the active view
    pub fn render(&self) -> String {
        let body = match &self.view {
            ActiveView::Home => home::render(),
            ActiveView::TaskList(view) => view.render(),
            ActiveView::TaskForm(view) => view.render(),
        };
        format!("{}\n\n{}", navbar::render(&self.path), body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::testing::StubService;
    use crate::view::{AutoConfirm, FormMode};

    fn app_with(service: StubService) -> (App, Arc<StubService>) {
        let service = Arc::new(service);
        (App::new(service.clone()), service)
    }

    #[tokio::test]
    async fn test_starts_at_home() {
        let (app, service) = app_with(StubService::default());

        assert_eq!(app.route(), Route::Home);
        assert!(matches!(app.view(), ActiveView::Home));
        assert!(app.render().contains("[Inicio]"));
        assert!(service.calls().is_empty());
    }

    #[tokio::test]
    async fn test_navigate_to_list_loads_tasks() {
        let (mut app, service) = app_with(StubService::numbered(3));

        assert_eq!(app.navigate("/tasks").await, Route::TaskList);

        let ActiveView::TaskList(view) = app.view() else {
            panic!("expected the list view");
        };
        assert_eq!(view.state().tasks.len(), 3);
        assert_eq!(service.calls(), vec!["list"]);
        assert!(app.render().contains("Task 3"));
    }

    #[tokio::test]
    async fn test_unknown_path_shows_home() {
        let (mut app, service) = app_with(StubService::default());

        assert_eq!(app.navigate("/whatever").await, Route::Home);
        assert!(matches!(app.view(), ActiveView::Home));
        assert!(service.calls().is_empty());
    }

    #[tokio::test]
    async fn test_list_commands_only_apply_to_list() {
        let (mut app, _) = app_with(StubService::numbered(3));

        assert!(!app.search("x"));
        assert!(app.delete(1, &mut AutoConfirm(true)).await.is_none());

        app.navigate("/tasks").await;
        assert!(app.search("2"));
        assert_eq!(
            app.delete(2, &mut AutoConfirm(true)).await,
            Some(DeleteOutcome::Deleted)
        );
    }

    #[tokio::test]
    async fn test_edit_then_save_returns_to_list() {
        let (mut app, service) = app_with(StubService::numbered(2));

        let route = app.navigate(&paths::edit_task(1)).await;
        assert_eq!(route, Route::TaskForm(FormMode::Edit(1)));
        assert!(app.set_title("Changed"));

        let outcome = app.save().await;

        assert!(matches!(outcome, Some(SubmitOutcome::Saved(_))));
        assert_eq!(app.route(), Route::TaskList);
        assert_eq!(service.calls(), vec!["get 1", "update 1 Changed", "list"]);
    }

    #[tokio::test]
    async fn test_rejected_save_stays_on_form() {
        let (mut app, _) = app_with(StubService::default());
        app.navigate(paths::NEW_TASK).await;

        assert_eq!(app.save().await, Some(SubmitOutcome::Rejected));
        assert_eq!(app.route(), Route::TaskForm(FormMode::Create));
        assert!(app.render().contains("El título es obligatorio"));
    }
}
