//! Landing screen

use crate::routing::paths;

pub fn render() -> String {
    format!(
        "Gestor de tareas\n\
         Organiza tus tareas pendientes.\n\
         \n\
         \x20 {:<14} ver y buscar tareas\n\
         \x20 {:<14} crear una tarea\n\
         \x20 {:<14} editar una tarea\n",
        paths::TASKS,
        paths::NEW_TASK,
        paths::EDIT_TASK,
    )
}
