//! Navigation bar

use crate::routing::{normalize, paths};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
}

pub const LINKS: [NavLink; 3] = [
    NavLink {
        label: "Inicio",
        path: paths::HOME,
    },
    NavLink {
        label: "Tareas",
        path: paths::TASKS,
    },
    NavLink {
        label: "Nueva tarea",
        path: paths::NEW_TASK,
    },
];

/// Link matching `current_path` exactly, if any
pub fn active_link(current_path: &str) -> Option<NavLink> {
    let current = normalize(current_path);
    LINKS
        .iter()
        .copied()
        .find(|link| normalize(link.path) == current)
}

/// One-line bar with the active link in brackets
pub fn render(current_path: &str) -> String {
    let active = active_link(current_path);
    LINKS
        .iter()
        .map(|link| {
            if Some(*link) == active {
                format!("[{}]", link.label)
            } else {
                link.label.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_link() {
        assert_eq!(active_link("/").map(|l| l.label), Some("Inicio"));
        assert_eq!(active_link("/tasks/").map(|l| l.label), Some("Tareas"));
        assert_eq!(active_link("/tasks/new").map(|l| l.label), Some("Nueva tarea"));
        assert_eq!(active_link("/tasks/edit/3"), None);
    }

    #[test]
    fn test_render_marks_active() {
        assert_eq!(render("/tasks"), "Inicio | [Tareas] | Nueva tarea");
        assert_eq!(render("/tasks/edit/1"), "Inicio | Tareas | Nueva tarea");
    }
}
