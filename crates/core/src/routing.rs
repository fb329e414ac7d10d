//! Client-side routing
//!
//! An ordered list of (pattern, handler) pairs. The first pattern that
//! matches and whose handler accepts the parameters wins; everything else
//! goes to the fallback.

use std::collections::HashMap;
use std::fmt;

use crate::view::FormMode;

/// Route paths as constants
pub mod paths {
    pub const HOME: &str = "/";
    pub const TASKS: &str = "/tasks";
    pub const NEW_TASK: &str = "/tasks/new";
    pub const EDIT_TASK: &str = "/tasks/edit/:id";

    /// Concrete edit path for a task
    pub fn edit_task(id: u64) -> String {
        format!("/tasks/edit/{}", id)
    }
}

/// Split a path into its non-empty segments, dropping query and fragment
pub fn normalize(path: &str) -> Vec<&str> {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    path[..end].split('/').filter(|s| !s.is_empty()).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
}

/// A parsed route pattern such as `/tasks/edit/:id`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    raw: String,
    segments: Vec<Segment>,
}

impl Pattern {
    pub fn parse(raw: &str) -> Self {
        let segments = normalize(raw)
            .into_iter()
            .map(|s| match s.strip_prefix(':') {
                Some(name) => Segment::Param(name.to_string()),
                None => Segment::Static(s.to_string()),
            })
            .collect();

        Self {
            raw: raw.to_string(),
            segments,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Captured parameters if every segment matches
    pub fn matches(&self, segments: &[&str]) -> Option<RouteParams> {
        if segments.len() != self.segments.len() {
            return None;
        }

        let mut params = RouteParams::default();
        for (pattern, actual) in self.segments.iter().zip(segments) {
            match pattern {
                Segment::Static(expected) if expected == actual => {}
                Segment::Static(_) => return None,
                Segment::Param(name) => {
                    params.0.insert(name.clone(), (*actual).to_string());
                }
            }
        }
        Some(params)
    }
}

/// Path parameters captured by a pattern
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams(HashMap<String, String>);

impl RouteParams {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn get_u64(&self, name: &str) -> Option<u64> {
        self.get(name)?.parse().ok()
    }
}

type Handler<T> = Box<dyn Fn(&RouteParams) -> Option<T> + Send + Sync>;

/// First-match-wins route table with a wildcard fallback
pub struct Router<T> {
    routes: Vec<(Pattern, Handler<T>)>,
    fallback: Box<dyn Fn() -> T + Send + Sync>,
}

impl<T> Router<T> {
    pub fn new(fallback: impl Fn() -> T + Send + Sync + 'static) -> Self {
        Self {
            routes: Vec::new(),
            fallback: Box::new(fallback),
        }
    }

    /// Append a route; a handler returning `None` lets matching continue
    pub fn route(
        mut self,
        pattern: &str,
        handler: impl Fn(&RouteParams) -> Option<T> + Send + Sync + 'static,
    ) -> Self {
        self.routes.push((Pattern::parse(pattern), Box::new(handler)));
        self
    }

    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|(p, _)| p.as_str())
    }

    pub fn resolve(&self, path: &str) -> T {
        let segments = normalize(path);
        self.routes
            .iter()
            .find_map(|(pattern, handler)| {
                pattern
                    .matches(&segments)
                    .and_then(|params| handler(&params))
            })
            .unwrap_or_else(|| (self.fallback)())
    }
}

/// Screens of the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    TaskList,
    TaskForm(FormMode),
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => write!(f, "home"),
            Self::TaskList => write!(f, "task list"),
            Self::TaskForm(FormMode::Create) => write!(f, "new task form"),
            Self::TaskForm(FormMode::Edit(id)) => write!(f, "edit form for task {}", id),
        }
    }
}

/// The application's route table
pub fn app_router() -> Router<Route> {
    Router::new(|| Route::Home)
        .route(paths::HOME, |_| Some(Route::Home))
        .route(paths::TASKS, |_| Some(Route::TaskList))
        .route(paths::NEW_TASK, |_| Some(Route::TaskForm(FormMode::Create)))
        .route(paths::EDIT_TASK, |params| {
            params
                .get_u64("id")
                .map(|id| Route::TaskForm(FormMode::Edit(id)))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert!(normalize("/").is_empty());
        assert!(normalize("").is_empty());
        assert_eq!(normalize("/tasks/"), vec!["tasks"]);
        assert_eq!(normalize("//tasks//new"), vec!["tasks", "new"]);
        assert_eq!(normalize("/tasks?q=milk#top"), vec!["tasks"]);
    }

    #[test]
    fn test_pattern_captures_params() {
        let pattern = Pattern::parse("/tasks/edit/:id");
        let params = pattern.matches(&["tasks", "edit", "42"]).unwrap();

        assert_eq!(params.get("id"), Some("42"));
        assert_eq!(params.get_u64("id"), Some(42));
        assert!(pattern.matches(&["tasks", "edit"]).is_none());
        assert!(pattern.matches(&["tasks", "view", "42"]).is_none());
    }

    #[test]
    fn test_app_routes() {
        let router = app_router();

        assert_eq!(router.resolve("/"), Route::Home);
        assert_eq!(router.resolve("/tasks"), Route::TaskList);
        assert_eq!(router.resolve("/tasks/new"), Route::TaskForm(FormMode::Create));
        assert_eq!(
            router.resolve("/tasks/edit/7"),
            Route::TaskForm(FormMode::Edit(7))
        );
    }

    #[test]
    fn test_unknown_paths_fall_back_to_home() {
        let router = app_router();

        assert_eq!(router.resolve("/nope"), Route::Home);
        assert_eq!(router.resolve("/tasks/edit"), Route::Home);
        assert_eq!(router.resolve("/tasks/new/extra"), Route::Home);
        assert_eq!(router.resolve("/tasks/edit/abc"), Route::Home);
    }

    #[test]
    fn test_first_match_wins() {
        let router = Router::new(|| "fallback")
            .route("/a/:x", |_| Some("param"))
            .route("/a/b", |_| Some("static"));

        assert_eq!(router.resolve("/a/b"), "param");
        assert_eq!(router.resolve("/c"), "fallback");
    }

    #[test]
    fn test_declining_handler_continues_matching() {
        let router = Router::new(|| 0)
            .route("/n/:v", |p| p.get_u64("v").map(|_| 1))
            .route("/n/:v", |_| Some(2));

        assert_eq!(router.resolve("/n/5"), 1);
        assert_eq!(router.resolve("/n/five"), 2);
    }

    #[test]
    fn test_route_table_order() {
        let router = app_router();
        let patterns: Vec<&str> = router.patterns().collect();
        assert_eq!(
            patterns,
            vec!["/", "/tasks", "/tasks/new", "/tasks/edit/:id"]
        );
    }
}
